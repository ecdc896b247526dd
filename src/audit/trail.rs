//! In-memory audit trail recorder.

use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{AuditEvent, Observer};

/// In-memory observer that keeps every record in arrival order.
///
/// Safe to share between concurrently handled requests.
///
/// # Example
///
/// ```
/// use remote_console_gateway::audit::{AuditEvent, AuditTrail, Observer};
/// use remote_console_gateway::RequestMeta;
///
/// let trail = AuditTrail::new();
/// trail.record(&AuditEvent::attempt(&RequestMeta {
///     request_id: "req-1".to_string(),
///     uri: "/api/execute".to_string(),
///     address: "10.0.0.1".to_string(),
/// }));
///
/// assert_eq!(trail.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct AuditTrail {
    events: Mutex<Vec<AuditEvent>>,
}

impl AuditTrail {
    /// Creates a new empty audit trail.
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave a Vec half-pushed.
    fn lock(&self) -> MutexGuard<'_, Vec<AuditEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a snapshot of all recorded events.
    pub fn events(&self) -> Vec<AuditEvent> {
        self.lock().clone()
    }

    /// Returns the rendered messages of all recorded events.
    pub fn messages(&self) -> Vec<String> {
        self.lock().iter().map(ToString::to_string).collect()
    }

    /// Returns the number of recorded events.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Clears all recorded events.
    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl Observer for AuditTrail {
    fn record(&self, event: &AuditEvent) {
        self.lock().push(event.clone());
    }
}
