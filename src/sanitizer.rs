use std::fmt;

use crate::error::ConfigError;
use crate::{Tainted, Verified};

/// Error returned when a command fails validation.
///
/// The error never carries the rejected input itself, only its length.
///
/// # Examples
///
/// ```
/// use remote_console_gateway::{SanitizationError, SanitizationErrorKind};
///
/// let error = SanitizationError::too_long(2048, 1024);
/// assert_eq!(
///     error.kind(),
///     SanitizationErrorKind::TooLong { actual: 2048, max: 1024 }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizationError {
    kind: SanitizationErrorKind,
}

impl SanitizationError {
    /// The input was empty or absent.
    pub fn empty() -> Self {
        Self {
            kind: SanitizationErrorKind::Empty,
        }
    }

    /// The input was longer than `max` UTF-16 code units.
    pub fn too_long(actual: usize, max: usize) -> Self {
        Self {
            kind: SanitizationErrorKind::TooLong { actual, max },
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> SanitizationErrorKind {
        self.kind
    }
}

impl fmt::Display for SanitizationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sanitization failed: {}", self.kind)
    }
}

impl std::error::Error for SanitizationError {}

/// Kind of sanitization error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SanitizationErrorKind {
    /// Input is empty.
    Empty,
    /// Input exceeds maximum allowed length.
    TooLong {
        /// Length of the input in UTF-16 code units
        actual: usize,
        /// Maximum allowed length in UTF-16 code units
        max: usize,
    },
}

impl fmt::Display for SanitizationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty input"),
            Self::TooLong { actual, max } => write!(f, "input too long ({actual} > {max})"),
        }
    }
}

/// Trait for promoting tainted values into verified values.
///
/// Implementations MUST only call `Verified::new_unchecked` after validation
/// succeeds and MUST NOT echo the rejected input in their errors.
pub trait Sanitizer<T> {
    /// Sanitizes a tainted value, returning a verified value on success.
    ///
    /// # Errors
    ///
    /// Returns `SanitizationError` if the input fails validation.
    fn sanitize(&self, input: Tainted<T>) -> Result<Verified<T>, SanitizationError>;
}

/// Validates a console command received over the network.
///
/// The command is checked for presence and length only. Its syntax belongs
/// to the executor, so the text is passed through untouched: no trimming and
/// no character filtering. Length is counted in UTF-16 code units, so a
/// character outside the Basic Multilingual Plane counts twice.
///
/// # Examples
///
/// ```
/// use remote_console_gateway::{CommandSanitizer, Sanitizer, Tainted};
///
/// let sanitizer = CommandSanitizer::new(16).unwrap();
///
/// let verified = sanitizer.sanitize(Tainted::new("help".to_string())).unwrap();
/// assert_eq!(verified.as_str(), "help");
///
/// assert!(sanitizer.sanitize(Tainted::new(String::new())).is_err());
/// assert!(sanitizer.sanitize(Tainted::new("x".repeat(17))).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CommandSanitizer {
    max_len: usize,
}

impl CommandSanitizer {
    /// Creates a command sanitizer accepting at most `max_len` UTF-16 code units.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if `max_len` is 0, since no command
    /// could ever pass.
    pub fn new(max_len: usize) -> Result<Self, ConfigError> {
        if max_len == 0 {
            return Err(ConfigError::Invalid(
                "max command length must be greater than 0".to_string(),
            ));
        }
        Ok(Self { max_len })
    }

    /// Returns the maximum accepted length.
    pub fn max_len(&self) -> usize {
        self.max_len
    }
}

impl Sanitizer<String> for CommandSanitizer {
    fn sanitize(&self, input: Tainted<String>) -> Result<Verified<String>, SanitizationError> {
        let raw = input.into_inner();

        if raw.is_empty() {
            return Err(SanitizationError::empty());
        }

        let len = raw.encode_utf16().count();
        if len > self.max_len {
            return Err(SanitizationError::too_long(len, self.max_len));
        }

        Ok(Verified::new_unchecked(raw))
    }
}
