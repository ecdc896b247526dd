//! Framework-agnostic representation of an inbound remote execution request.

use std::collections::BTreeMap;
use std::fmt;

use uuid::Uuid;

use crate::request::RequestMeta;
use crate::{Secret, Tainted};

use super::{ExtractHeaders, ExtractMetadata, ExtractTaintedBody};

/// Header carrying a caller-supplied correlation ID.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Header names whose values are credential material.
const SENSITIVE_HEADERS: [&str; 3] = ["authorization", "proxy-authorization", "cookie"];

const MAX_REQUEST_ID_LEN: usize = 128;

/// Case-insensitive HTTP header map.
///
/// Names are stored lowercased. The last value set for a name wins.
/// `Debug` output redacts credential headers.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: BTreeMap<String, String>,
}

impl Headers {
    /// Creates an empty header map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a header, replacing any previous value for the same name.
    pub fn insert(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        self.entries
            .insert(name.as_ref().to_ascii_lowercase(), value.into());
    }

    /// Looks up a header by name, ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Number of distinct header names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no headers are set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Headers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, value) in &self.entries {
            if SENSITIVE_HEADERS.contains(&name.as_str()) {
                map.entry(name, &Secret::new(value));
            } else {
                map.entry(name, value);
            }
        }
        map.finish()
    }
}

/// An inbound request as handed over by the transport layer.
///
/// Transports build one of these per request (or implement the extraction
/// traits on their own request type) and pass it to
/// [`RemoteExecutionGateway::handle`](crate::RemoteExecutionGateway::handle).
///
/// # Examples
///
/// ```
/// use remote_console_gateway::web::{ExtractMetadata, RawRequest};
///
/// let request = RawRequest::new("/api/execute", "127.0.0.1:52100")
///     .with_header("Authorization", "Basic YWRtaW46c2VjcmV0")
///     .with_body("help");
///
/// let meta = request.extract_metadata();
/// assert_eq!(meta.uri, "/api/execute");
/// assert_eq!(meta.address, "127.0.0.1:52100");
/// ```
#[derive(Debug, Clone)]
pub struct RawRequest {
    request_id: String,
    uri: String,
    address: String,
    headers: Headers,
    body: Option<Tainted<String>>,
}

impl RawRequest {
    /// Creates a request for `uri` received from `address`, with no headers
    /// and no body. A fresh UUID is assigned as the fallback request ID.
    pub fn new(uri: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
            uri: uri.into(),
            address: address.into(),
            headers: Headers::new(),
            body: None,
        }
    }

    /// Overrides the fallback request ID.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = request_id.into();
        self
    }

    /// Adds a header.
    pub fn with_header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Sets the request body. The body is tainted from this point on.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(Tainted::new(body.into()));
        self
    }

    /// Returns true when the request carries a body.
    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }

    fn caller_request_id(&self) -> Option<&str> {
        self.headers
            .get(REQUEST_ID_HEADER)
            .map(str::trim)
            .filter(|id| is_safe_request_id(id))
    }
}

/// Request IDs end up in logs, so only short, plain identifiers are taken
/// from the caller.
fn is_safe_request_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_REQUEST_ID_LEN
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

impl ExtractMetadata for RawRequest {
    fn extract_metadata(&self) -> RequestMeta {
        RequestMeta {
            request_id: self
                .caller_request_id()
                .unwrap_or(self.request_id.as_str())
                .to_string(),
            uri: self.uri.clone(),
            address: self.address.clone(),
        }
    }
}

impl ExtractHeaders for RawRequest {
    fn headers(&self) -> &Headers {
        &self.headers
    }
}

impl ExtractTaintedBody for RawRequest {
    fn extract_tainted_body(&self) -> Tainted<String> {
        self.body
            .clone()
            .unwrap_or_else(|| Tainted::new(String::new()))
    }
}
