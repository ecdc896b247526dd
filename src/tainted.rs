use std::fmt;

/// A wrapper for untrusted request data that must be validated before use.
///
/// The request body arrives as `Tainted<String>`. Its content is unreachable
/// from outside the crate: the only path to the text is a [`Sanitizer`],
/// which the gateway invokes only through an authorized context.
///
/// `Debug` reports the length of string payloads, never the text, so a
/// tainted command can sit inside a logged request without leaking.
///
/// # Examples
///
/// ```
/// use remote_console_gateway::Tainted;
///
/// let body = Tainted::new("shutdown --force".to_string());
/// assert_eq!(format!("{:?}", body), "Tainted { len: 16 }");
/// ```
///
/// [`Sanitizer`]: crate::Sanitizer
// BREAKING CHANGE WARNING: Do NOT remove Clone - repeated rejections re-submit the same body.
#[derive(Clone)]
pub struct Tainted<T> {
    // BREAKING CHANGE WARNING: This field MUST remain private.
    // Making it public lets command text be read before authorization.
    inner: T,
}

impl<T> Tainted<T> {
    /// Wraps an untrusted value.
    pub fn new(value: T) -> Self {
        Self { inner: value }
    }

    /// Extracts the inner value for sanitization.
    ///
    /// Crate-private: only sanitizers may call this, and only to produce a
    /// `Verified<T>` or a length-only error.
    pub(crate) fn into_inner(self) -> T {
        self.inner
    }
}

impl Tainted<String> {
    /// Returns true when the payload is empty.
    ///
    /// Presence is not content: this is safe to ask before authorization.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// BREAKING CHANGE WARNING: Do NOT add Deref, AsRef, Borrow, Display, From<T> or Into<T>.

impl fmt::Debug for Tainted<String> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tainted")
            .field("len", &self.inner.encode_utf16().count())
            .finish()
    }
}
