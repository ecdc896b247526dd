use std::fmt;

use crate::error::Violation;

/// A request-scoped logging interface.
///
/// `GatewayLog` is obtained from `Ctx::log()` and is lifetime-bound to the
/// context. Every event carries the request ID so rejections can be matched
/// with the audit record of the same request.
#[derive(Debug, Clone, Copy)]
pub struct GatewayLog<'a> {
    request_id: &'a str,
}

impl<'a> GatewayLog<'a> {
    /// Created by `Ctx::log` and by the gateway for early rejections.
    pub(crate) fn new(request_id: &'a str) -> Self {
        Self { request_id }
    }

    /// Returns the request ID associated with this logger.
    pub fn request_id(&self) -> &str {
        self.request_id
    }

    /// Logs a pipeline rejection.
    ///
    /// Only the violation kind, status and message are recorded. Violation
    /// messages never contain command text.
    pub fn rejected(&self, violation: &Violation) {
        tracing::warn!(
            request_id = %self.request_id,
            kind = %violation.kind,
            status = violation.status(),
            "remote execution rejected: {}",
            violation.message
        );
    }

    /// Logs an info-level message with request ID.
    pub fn info(&self, args: fmt::Arguments<'_>) {
        tracing::info!(request_id = %self.request_id, "{}", args);
    }

    /// Logs a debug-level message with request ID.
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        tracing::debug!(request_id = %self.request_id, "{}", args);
    }
}
