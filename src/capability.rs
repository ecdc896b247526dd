/// Capability granting permission to execute console commands.
///
/// This zero-sized proof object is created only when an authenticated
/// session carries the manager flag, and only a `Ctx<Authorized>` holds one.
/// [`CommandExecutor::execute`](crate::CommandExecutor::execute) takes it by
/// value, so no command runs without it.
///
/// ```compile_fail
/// # use remote_console_gateway::ExecCap;
/// let cap = ExecCap { _private: () }; // Error: _private is private
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ExecCap {
    // Private field prevents construction outside the crate
    _private: (),
}

impl ExecCap {
    /// Only `Ctx<Authed>::authorize` and unit tests create these.
    pub(crate) fn new() -> Self {
        Self { _private: () }
    }
}
