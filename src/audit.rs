//! Observational records of remote execution.
//!
//! Two records exist per successful request:
//! - an *attempt* record, emitted before authentication, carrying only the
//!   target path and caller address;
//! - a *command* record, emitted after authorization and validation, carrying
//!   the manager alias and the full command text.
//!
//! Observers are fire-and-forget: recording can never fail a request.

mod event;
mod observer;
mod trail;

pub use event::{AuditEvent, AuditEventKind};
pub use observer::{Observer, TracingObserver, AUDIT_TARGET};
pub use trail::AuditTrail;
