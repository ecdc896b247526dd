use std::sync::Arc;

use super::AuditEvent;

/// Tracing target used for audit records.
pub const AUDIT_TARGET: &str = "remote_execution";

/// Receives audit records. Must not fail or block the request indefinitely.
pub trait Observer: Send + Sync {
    /// Records one event.
    fn record(&self, event: &AuditEvent);
}

impl<T: Observer + ?Sized> Observer for Arc<T> {
    fn record(&self, event: &AuditEvent) {
        (**self).record(event)
    }
}

/// Fans one record out to two observers.
impl<A: Observer, B: Observer> Observer for (A, B) {
    fn record(&self, event: &AuditEvent) {
        self.0.record(event);
        self.1.record(event);
    }
}

/// Forwards audit records to `tracing` as structured info events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn record(&self, event: &AuditEvent) {
        tracing::info!(
            target: AUDIT_TARGET,
            request_id = %event.request_id(),
            kind = %event.kind(),
            uri = %event.uri(),
            address = %event.address(),
            alias = ?event.alias(),
            "{}",
            event
        );
    }
}
