//! Boundary step that turns an inbound request into an unauthenticated context.
//!
//! Extraction never grants anything: it produces a `Ctx<Unauthed>` plus the
//! still-tainted body. Authentication, authorization and validation happen
//! afterwards, in that order, inside the gateway.

use crate::context::Ctx;
use crate::state::Unauthed;
use crate::Tainted;

use super::{ExtractMetadata, ExtractTaintedBody};

/// Extraction result: an unauthenticated context and the untrusted body.
///
/// # Examples
///
/// ```
/// use remote_console_gateway::web::{extract_unauthed, RawRequest};
///
/// let request = RawRequest::new("/api/execute", "10.0.0.1")
///     .with_request_id("req-001")
///     .with_body("help");
/// let extraction = extract_unauthed(&request);
///
/// assert_eq!(extraction.context.request_id(), "req-001");
/// assert_eq!(extraction.context.uri(), "/api/execute");
/// assert!(!extraction.body.is_empty());
/// ```
#[derive(Debug)]
pub struct UnauthenticatedExtraction {
    /// The unauthenticated context (metadata only)
    pub context: Ctx<Unauthed>,
    /// The command body, not yet readable
    pub body: Tainted<String>,
}

/// Derives the per-request context from any request type the transport
/// adapted. This step cannot fail.
pub fn extract_unauthed<R>(request: &R) -> UnauthenticatedExtraction
where
    R: ExtractMetadata + ExtractTaintedBody,
{
    UnauthenticatedExtraction {
        context: Ctx::new_unauthed(request.extract_metadata()),
        body: request.extract_tainted_body(),
    }
}
