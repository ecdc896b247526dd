//! Response bodies produced by the gateway.
//!
//! The JSON shapes are part of the wire contract:
//! - 200: `{"success": true, "data": "..."}` or `{"success": false, "error": "..."}`
//! - 400/401: `{"status": 401, "message": "..."}`

use serde::{Deserialize, Serialize};

use crate::error::Violation;
use crate::executor::ExecutionOutcome;

/// Content type of every gateway response.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// HTTP status of a transported execution outcome, successful or not.
pub const STATUS_OK: u16 = 200;

/// Structured description of a pipeline failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// HTTP status code
    pub status: u16,
    /// Human-readable message
    pub message: String,
}

impl From<&Violation> for ErrorResponse {
    fn from(violation: &Violation) -> Self {
        Self {
            status: violation.status(),
            message: violation.message.clone(),
        }
    }
}

/// Result of an executed command. Exactly one of `data` and `error` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteExecutionResponse {
    /// Whether the executor reported success
    pub success: bool,
    /// Executor payload on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    /// Executor failure message on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<ExecutionOutcome> for RemoteExecutionResponse {
    fn from(outcome: ExecutionOutcome) -> Self {
        match outcome {
            Ok(data) => Self {
                success: true,
                data: Some(data),
                error: None,
            },
            Err(error) => Self {
                success: false,
                data: None,
                error: Some(error),
            },
        }
    }
}

/// Body of a gateway response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    /// The command ran; its outcome is inside
    Execution(RemoteExecutionResponse),
    /// The request was rejected before execution
    Error(ErrorResponse),
}

/// The single response produced for each handled request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayResponse {
    status: u16,
    body: ResponseBody,
}

impl GatewayResponse {
    /// Wraps an execution outcome. Always status 200.
    pub fn execution(outcome: ExecutionOutcome) -> Self {
        Self {
            status: STATUS_OK,
            body: ResponseBody::Execution(outcome.into()),
        }
    }

    /// Describes a pipeline rejection with the violation's status.
    pub fn rejection(violation: &Violation) -> Self {
        Self {
            status: violation.status(),
            body: ResponseBody::Error(violation.into()),
        }
    }

    /// HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Response body.
    pub fn body(&self) -> &ResponseBody {
        &self.body
    }

    /// Content type header value.
    pub fn content_type(&self) -> &'static str {
        CONTENT_TYPE_JSON
    }

    /// Serializes the body as JSON.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` serialization errors.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.body)
    }
}
