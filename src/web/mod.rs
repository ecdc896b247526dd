//! Web boundary of the gateway.
//!
//! This module maps whatever the HTTP layer hands over into gateway types and
//! maps gateway results back into status codes and JSON bodies. It contains
//! no framework-specific code and no server.
//!
//! # Design Principles
//!
//! 1. **No Framework Dependencies**: a transport implements the extraction
//!    traits (or builds a [`RawRequest`]) and serializes [`GatewayResponse`].
//!
//! 2. **Taint at Boundary**: the request body becomes `Tainted<String>` the
//!    moment it enters the crate.
//!
//! 3. **No Authorization**: extraction never grants capabilities. That is the
//!    job of the context transitions inside the gateway.
//!
//! 4. **Redacted Credentials**: header maps never print credential values.

mod adapter;
mod extract;
mod middleware;
mod response;

pub use adapter::{Headers, RawRequest, REQUEST_ID_HEADER};
pub use extract::{ExtractHeaders, ExtractMetadata, ExtractTaintedBody};
pub use middleware::{extract_unauthed, UnauthenticatedExtraction};
pub use response::{
    ErrorResponse, GatewayResponse, RemoteExecutionResponse, ResponseBody, CONTENT_TYPE_JSON,
    STATUS_OK,
};
