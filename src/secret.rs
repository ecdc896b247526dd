use std::fmt;

/// A wrapper that keeps credential material out of logs and debug output.
///
/// Access tokens and `Authorization` header values are held in `Secret<T>`.
/// `Debug` and `Display` always print `[REDACTED]`; the value is reachable
/// only through [`expose_secret`](Self::expose_secret).
///
/// # Examples
///
/// ```
/// use remote_console_gateway::Secret;
///
/// let token = Secret::new("s3cr3t-token".to_string());
/// assert_eq!(format!("{:?}", token), "[REDACTED]");
/// assert_eq!(token.expose_secret(), "s3cr3t-token");
/// ```
// BREAKING CHANGE WARNING: Do NOT add Clone, Copy, or Default derives.
pub struct Secret<T> {
    // BREAKING CHANGE WARNING: This field MUST remain private (CWE-532).
    inner: T,
}

impl<T> Secret<T> {
    /// Wraps a sensitive value.
    pub fn new(value: T) -> Self {
        Self { inner: value }
    }

    /// Explicitly exposes the secret value.
    ///
    /// Never pass the result to a logger or an error message.
    pub fn expose_secret(&self) -> &T {
        &self.inner
    }
}

impl<T> fmt::Debug for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl<T> fmt::Display for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}
