/// A value that passed validation and may reach the command executor.
///
/// `Verified<T>` has no public constructor; the only producers are
/// [`Sanitizer`](crate::Sanitizer) implementations inside this crate. A
/// [`CommandExecutor`](crate::CommandExecutor) receives `&Verified<String>`,
/// which proves the command was length-checked after authorization.
///
/// ```compile_fail
/// use remote_console_gateway::Verified;
///
/// let forged = Verified::new_unchecked("stop".to_string());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verified<T> {
    inner: T,
}

impl<T> Verified<T> {
    /// Wraps an already validated value. Callers inside the crate are
    /// responsible for having validated it.
    pub(crate) fn new_unchecked(value: T) -> Self {
        Self { inner: value }
    }

    /// Consumes the wrapper and returns the value.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T> AsRef<T> for Verified<T> {
    fn as_ref(&self) -> &T {
        &self.inner
    }
}

impl Verified<String> {
    /// Borrows the verified text.
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}
