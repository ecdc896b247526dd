use crate::capability::ExecCap;
use crate::error::Violation;
use crate::logging::GatewayLog;
use crate::request::{RequestMeta, Session};
use crate::sanitizer::{CommandSanitizer, Sanitizer};
use crate::state::{Authed, Authorized, Unauthed};
use crate::{Tainted, Verified};

/// Per-request execution context.
///
/// `Ctx<S>` is generic over its authentication/authorization state:
/// - `Ctx<Unauthed>`: request metadata only
/// - `Ctx<Authed>`: has a session, privilege not yet checked
/// - `Ctx<Authorized>`: manager session plus the [`ExecCap`] an executor requires
///
/// ```text
/// Ctx<Unauthed> --authenticate--> Ctx<Authed> --authorize--> Ctx<Authorized>
/// ```
///
/// Only `Ctx<Authorized>` can turn the tainted request body into a
/// `Verified<String>` and hand out the [`ExecCap`]; a
/// [`CommandExecutor`](crate::CommandExecutor) accepts nothing less than both.
/// Contexts cannot be built by user code; the gateway derives one from each
/// [`RawRequest`](crate::web::RawRequest).
///
/// An unauthenticated context has neither a session nor a capability:
///
/// ```compile_fail
/// use remote_console_gateway::web::{extract_unauthed, RawRequest};
///
/// let extraction = extract_unauthed(&RawRequest::new("/api/execute", "10.0.0.1"));
/// let cap = extraction.context.exec_cap(); // Error: only on Ctx<Authorized>
/// ```
#[derive(Debug, Clone)]
pub struct Ctx<S = Authorized> {
    meta: RequestMeta,
    state: S,
}

// ============================================================================
// Shared methods (available on all states)
// ============================================================================

impl<S> Ctx<S> {
    /// Returns the request ID for this context.
    pub fn request_id(&self) -> &str {
        &self.meta.request_id
    }

    /// Returns the target path of the request.
    pub fn uri(&self) -> &str {
        &self.meta.uri
    }

    /// Returns the network origin of the caller.
    pub fn address(&self) -> &str {
        &self.meta.address
    }

    /// Returns the full request metadata.
    pub fn meta(&self) -> &RequestMeta {
        &self.meta
    }

    /// Returns a logger that stamps every event with this request's ID.
    pub fn log(&self) -> GatewayLog<'_> {
        GatewayLog::new(&self.meta.request_id)
    }
}

// ============================================================================
// Ctx<Unauthed> - Initial state
// ============================================================================

impl Ctx<Unauthed> {
    pub(crate) fn new_unauthed(meta: RequestMeta) -> Self {
        Self {
            meta,
            state: Unauthed::new(),
        }
    }

    /// Advances the context with the authenticator's verdict.
    ///
    /// # Errors
    ///
    /// Returns an `Unauthenticated` violation carrying the authenticator's
    /// message verbatim.
    pub fn authenticate(self, verdict: Result<Session, String>) -> Result<Ctx<Authed>, Violation> {
        let session = verdict.map_err(Violation::unauthenticated)?;

        Ok(Ctx {
            meta: self.meta,
            state: Authed { session },
        })
    }
}

// ============================================================================
// Ctx<Authed> - Authenticated but not authorized
// ============================================================================

impl Ctx<Authed> {
    /// Returns the authenticated session.
    pub fn session(&self) -> &Session {
        &self.state.session
    }

    /// Grants the execution capability if the session is a manager.
    ///
    /// # Errors
    ///
    /// Returns an `Unauthorized` violation for non-manager sessions.
    pub fn authorize(self) -> Result<Ctx<Authorized>, Violation> {
        if !self.state.session.is_manager() {
            return Err(Violation::not_a_manager());
        }

        Ok(Ctx {
            meta: self.meta,
            state: Authorized {
                session: self.state.session,
                exec_cap: ExecCap::new(),
            },
        })
    }
}

// ============================================================================
// Ctx<Authorized> - Manager with execution capability
// ============================================================================

impl Ctx<Authorized> {
    /// Returns the manager session.
    pub fn session(&self) -> &Session {
        &self.state.session
    }

    /// Returns the execution capability.
    pub fn exec_cap(&self) -> ExecCap {
        self.state.exec_cap
    }

    /// Alias of the authorized manager.
    pub fn alias(&self) -> &str {
        self.state.session.alias()
    }

    /// Validates the request body now that the caller is known to be a manager.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` violation when the body is empty or longer
    /// than the sanitizer allows.
    pub fn verify_command(
        &self,
        body: Tainted<String>,
        sanitizer: &CommandSanitizer,
    ) -> Result<Verified<String>, Violation> {
        Ok(sanitizer.sanitize(body)?)
    }
}
