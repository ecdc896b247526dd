//! Audit event schema.

use std::fmt;

use crate::request::RequestMeta;
use crate::Verified;

/// Which step of the pipeline produced an audit event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditEventKind {
    /// Remote execution was requested; nothing is verified yet
    ExecutionAttempt,
    /// An authorized manager submitted a valid command
    CommandRequested,
}

impl fmt::Display for AuditEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditEventKind::ExecutionAttempt => write!(f, "execution_attempt"),
            AuditEventKind::CommandRequested => write!(f, "command_requested"),
        }
    }
}

/// A single audit record.
///
/// Command text can only be attached from a `Verified<String>`, so an event
/// built before authorization has no way to carry it.
///
/// # Example
///
/// ```
/// use remote_console_gateway::audit::AuditEvent;
/// use remote_console_gateway::RequestMeta;
///
/// let meta = RequestMeta {
///     request_id: "req-1".to_string(),
///     uri: "/api/execute".to_string(),
///     address: "10.0.0.9".to_string(),
/// };
///
/// let event = AuditEvent::attempt(&meta);
/// assert_eq!(event.to_string(), "REMOTE EXECUTION /api/execute from 10.0.0.9");
/// assert_eq!(event.command(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    kind: AuditEventKind,
    request_id: String,
    uri: String,
    address: String,
    alias: Option<String>,
    command: Option<String>,
}

impl AuditEvent {
    /// Record of an incoming execution request, before authentication.
    pub fn attempt(meta: &RequestMeta) -> Self {
        Self {
            kind: AuditEventKind::ExecutionAttempt,
            request_id: meta.request_id.clone(),
            uri: meta.uri.clone(),
            address: meta.address.clone(),
            alias: None,
            command: None,
        }
    }

    /// Record of a validated command about to be executed for `alias`.
    pub fn command_requested(
        meta: &RequestMeta,
        alias: &str,
        command: &Verified<String>,
    ) -> Self {
        Self {
            kind: AuditEventKind::CommandRequested,
            request_id: meta.request_id.clone(),
            uri: meta.uri.clone(),
            address: meta.address.clone(),
            alias: Some(alias.to_string()),
            command: Some(command.as_str().to_string()),
        }
    }

    /// Returns the event kind.
    pub fn kind(&self) -> AuditEventKind {
        self.kind
    }

    /// Returns the request identifier.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Returns the target path.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Returns the caller address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the manager alias, for command records.
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Returns the command text, for command records.
    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }
}

impl fmt::Display for AuditEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            AuditEventKind::ExecutionAttempt => {
                write!(f, "REMOTE EXECUTION {} from {}", self.uri, self.address)
            }
            AuditEventKind::CommandRequested => write!(
                f,
                "{} ({}) requested command: {}",
                self.alias.as_deref().unwrap_or_default(),
                self.address,
                self.command.as_deref().unwrap_or_default()
            ),
        }
    }
}
