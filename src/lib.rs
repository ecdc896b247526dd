//! Authenticated remote execution of administrative console commands.
//!
//! This crate exposes one privileged capability, running console commands,
//! over a network request boundary. The [`RemoteExecutionGateway`] enforces:
//! - **Authentication**: credentials are resolved to a [`Session`] by an
//!   [`Authenticator`]
//! - **Authorization**: only manager sessions reach a [`Ctx<Authorized>`]
//!   holding the [`ExecCap`] every executor call requires
//! - **Taint tracking**: the request body stays [`Tainted`] until an
//!   authorized context turns it into a [`Verified`] command
//! - **Audit**: every attempt is observed; command text is recorded only
//!   after authorization and validation
//!
//! # Core Types
//!
//! - [`RemoteExecutionGateway`]: the request pipeline
//! - [`GatewayConfig`]: construction-time settings (max command length)
//! - [`Authenticator`] / [`TokenAuthenticator`]: credential checking
//! - [`CommandExecutor`] / [`CommandRegistry`] / [`SerializedExecutor`]: command execution
//! - [`audit::Observer`]: audit sink
//! - [`web`]: raw request and JSON response types
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use remote_console_gateway::audit::AuditTrail;
//! use remote_console_gateway::web::RawRequest;
//! use remote_console_gateway::{
//!     basic_authorization, CommandRegistry, GatewayConfig, RemoteExecutionGateway,
//!     TokenAuthenticator,
//! };
//!
//! let trail = Arc::new(AuditTrail::new());
//! let gateway = RemoteExecutionGateway::new(
//!     GatewayConfig::default(),
//!     TokenAuthenticator::new().with_token("admin", "s3cr3t", true),
//!     CommandRegistry::new().register("version", "Show version", |_| Ok("1.0".to_string())),
//!     Arc::clone(&trail),
//! )
//! .expect("valid config");
//!
//! let request = RawRequest::new("/api/execute", "127.0.0.1")
//!     .with_header("Authorization", basic_authorization("admin", "s3cr3t"))
//!     .with_body("version");
//!
//! let response = gateway.handle(&request);
//! assert_eq!(response.status(), 200);
//! assert_eq!(response.to_json().unwrap(), r#"{"success":true,"data":"1.0"}"#);
//! assert_eq!(trail.len(), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod audit;
mod auth;
mod capability;
mod config;
mod context;
mod error;
mod executor;
mod gateway;
mod logging;
mod request;
mod sanitizer;
mod secret;
mod state;
mod tainted;
mod verified;
pub mod web;

pub use auth::{
    basic_authorization, Authenticator, BasicCredentials, TokenAuthenticator, AUTHORIZATION_HEADER,
};
pub use capability::ExecCap;
pub use config::{GatewayConfig, DEFAULT_MAX_COMMAND_LENGTH};
pub use context::Ctx;
pub use error::{
    ConfigError, InputError, Violation, ViolationKind, STATUS_BAD_REQUEST, STATUS_UNAUTHORIZED,
};
pub use executor::{CommandExecutor, CommandRegistry, ExecutionOutcome, SerializedExecutor};
pub use gateway::RemoteExecutionGateway;
pub use logging::GatewayLog;
pub use request::{RequestMeta, Session};
pub use sanitizer::{CommandSanitizer, SanitizationError, SanitizationErrorKind, Sanitizer};
pub use secret::Secret;
pub use state::{Authed, Authorized, Unauthed};
pub use tainted::Tainted;
pub use verified::Verified;
