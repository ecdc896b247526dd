use thiserror::Error;

use crate::sanitizer::{SanitizationError, SanitizationErrorKind};

/// HTTP status returned for authentication and authorization failures.
pub const STATUS_UNAUTHORIZED: u16 = 401;

/// HTTP status returned for malformed commands.
pub const STATUS_BAD_REQUEST: u16 = 400;

/// A pipeline violation that terminates request handling.
///
/// Every violation maps to exactly one error response. Execution failures
/// reported by the command executor are *not* violations; they travel back to
/// the caller inside a successful response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct Violation {
    /// The kind of violation that occurred
    pub kind: ViolationKind,
    /// Human-readable message sent back to the caller
    pub message: String,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Credentials were missing or rejected by the authenticator.
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::new(ViolationKind::Unauthenticated, message)
    }

    /// The caller is authenticated but is not a manager.
    pub fn not_a_manager() -> Self {
        Self::new(
            ViolationKind::Unauthorized,
            "Authenticated user is not a manager",
        )
    }

    /// The request body did not contain a command.
    pub fn missing_command() -> Self {
        Self::new(ViolationKind::InvalidInput(InputError::Empty), "Missing command")
    }

    /// The command is longer than the configured maximum.
    pub fn command_too_long(actual: usize, max: usize) -> Self {
        Self::new(
            ViolationKind::InvalidInput(InputError::TooLong { actual, max }),
            format!("The given command exceeds allowed length ({actual} > {max})"),
        )
    }

    /// Returns the HTTP status code for this violation.
    pub fn status(&self) -> u16 {
        self.kind.status()
    }
}

/// The kind of pipeline violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ViolationKind {
    /// Missing or invalid credentials
    #[error("Unauthenticated")]
    Unauthenticated,
    /// Authenticated, but without manager privilege
    #[error("Unauthorized")]
    Unauthorized,
    /// The command failed input validation
    #[error("Invalid input ({0})")]
    InvalidInput(InputError),
}

impl ViolationKind {
    /// Maps the violation kind to its HTTP status code.
    pub fn status(&self) -> u16 {
        match self {
            ViolationKind::Unauthenticated | ViolationKind::Unauthorized => STATUS_UNAUTHORIZED,
            ViolationKind::InvalidInput(_) => STATUS_BAD_REQUEST,
        }
    }
}

/// Why a command was rejected before execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// The body was empty or absent
    #[error("empty command")]
    Empty,
    /// The body exceeded the maximum length
    #[error("command too long: {actual} > {max}")]
    TooLong {
        /// Length of the rejected command in UTF-16 code units
        actual: usize,
        /// Configured maximum length
        max: usize,
    },
}

impl From<SanitizationError> for Violation {
    fn from(err: SanitizationError) -> Self {
        match err.kind() {
            SanitizationErrorKind::Empty => Violation::missing_command(),
            SanitizationErrorKind::TooLong { actual, max } => {
                Violation::command_too_long(actual, max)
            }
        }
    }
}

/// Errors raised while loading or validating a [`GatewayConfig`](crate::GatewayConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document could not be parsed
    #[error("failed to parse gateway config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field held a value the gateway cannot work with
    #[error("invalid gateway config: {0}")]
    Invalid(String),
}
