//! Extraction boundary traits for web integration.
//!
//! A transport adapts its own request type to the gateway by implementing
//! these traits. They only map framework types to gateway types; none of
//! them authenticates, authorizes or validates anything.

use crate::request::RequestMeta;
use crate::Tainted;

use super::Headers;

/// Extracts loggable request metadata: request ID, target path and origin.
///
/// # Examples
///
/// ```
/// use remote_console_gateway::web::ExtractMetadata;
/// use remote_console_gateway::RequestMeta;
///
/// struct MyFrameworkRequest {
///     path: String,
///     peer: String,
/// }
///
/// impl ExtractMetadata for MyFrameworkRequest {
///     fn extract_metadata(&self) -> RequestMeta {
///         RequestMeta {
///             request_id: "req-1".to_string(),
///             uri: self.path.clone(),
///             address: self.peer.clone(),
///         }
///     }
/// }
/// ```
pub trait ExtractMetadata {
    /// Extracts request metadata. Must not fail.
    fn extract_metadata(&self) -> RequestMeta;
}

/// Exposes the request headers, which carry the credential material.
pub trait ExtractHeaders {
    /// Returns the request headers.
    fn headers(&self) -> &Headers;
}

/// Extracts the request body as untrusted command text.
///
/// An absent body is reported as an empty `Tainted<String>`.
pub trait ExtractTaintedBody {
    /// Returns the body wrapped in `Tainted`.
    fn extract_tainted_body(&self) -> Tainted<String>;
}
