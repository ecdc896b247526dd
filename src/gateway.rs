use crate::audit::{AuditEvent, Observer};
use crate::auth::Authenticator;
use crate::config::GatewayConfig;
use crate::context::Ctx;
use crate::error::{ConfigError, Violation};
use crate::executor::{CommandExecutor, ExecutionOutcome};
use crate::logging::GatewayLog;
use crate::sanitizer::CommandSanitizer;
use crate::state::Unauthed;
use crate::web::{
    extract_unauthed, ExtractHeaders, ExtractMetadata, ExtractTaintedBody, GatewayResponse,
    Headers, UnauthenticatedExtraction,
};
use crate::Tainted;

/// Mediates one network request into one privileged command execution.
///
/// For every request the gateway:
/// 1. derives a context from the raw request,
/// 2. records the execution attempt,
/// 3. authenticates the caller,
/// 4. requires manager privilege,
/// 5. rejects an empty command,
/// 6. rejects a command longer than the configured maximum,
/// 7. records the command with the manager alias,
/// 8. runs it once through the executor,
/// 9. replies 200 with the outcome, whether the command succeeded or not.
///
/// Steps 3 to 6 short-circuit with an error response. The gateway keeps no
/// mutable state, so one instance can serve concurrent requests.
///
/// # Examples
///
/// ```
/// use remote_console_gateway::audit::TracingObserver;
/// use remote_console_gateway::web::RawRequest;
/// use remote_console_gateway::{
///     basic_authorization, CommandRegistry, GatewayConfig, RemoteExecutionGateway,
///     TokenAuthenticator,
/// };
///
/// let gateway = RemoteExecutionGateway::new(
///     GatewayConfig::default(),
///     TokenAuthenticator::new().with_token("admin", "s3cr3t", true),
///     CommandRegistry::new(),
///     TracingObserver,
/// )
/// .unwrap();
///
/// let request = RawRequest::new("/api/execute", "127.0.0.1")
///     .with_header("Authorization", basic_authorization("admin", "s3cr3t"))
///     .with_body("help");
///
/// let response = gateway.handle(&request);
/// assert_eq!(response.status(), 200);
/// ```
#[derive(Debug)]
pub struct RemoteExecutionGateway<A, E, O> {
    sanitizer: CommandSanitizer,
    authenticator: A,
    executor: E,
    observer: O,
}

impl<A, E, O> RemoteExecutionGateway<A, E, O>
where
    A: Authenticator,
    E: CommandExecutor,
    O: Observer,
{
    /// Creates a gateway from its configuration and collaborators.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if the configuration does not validate.
    pub fn new(
        config: GatewayConfig,
        authenticator: A,
        executor: E,
        observer: O,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            sanitizer: CommandSanitizer::new(config.max_command_length)?,
            authenticator,
            executor,
            observer,
        })
    }

    /// Longest accepted command, in UTF-16 code units.
    pub fn max_command_length(&self) -> usize {
        self.sanitizer.max_len()
    }

    /// Handles one request and produces exactly one response.
    pub fn handle<R>(&self, request: &R) -> GatewayResponse
    where
        R: ExtractMetadata + ExtractHeaders + ExtractTaintedBody,
    {
        let UnauthenticatedExtraction { context, body } = extract_unauthed(request);
        let request_id = context.request_id().to_string();

        match self.run(context, request.headers(), body) {
            Ok(outcome) => GatewayResponse::execution(outcome),
            Err(violation) => {
                GatewayLog::new(&request_id).rejected(&violation);
                GatewayResponse::rejection(&violation)
            }
        }
    }

    fn run(
        &self,
        context: Ctx<Unauthed>,
        headers: &Headers,
        body: Tainted<String>,
    ) -> Result<ExecutionOutcome, Violation> {
        self.observer.record(&AuditEvent::attempt(context.meta()));

        let ctx = context
            .authenticate(self.authenticator.authenticate_by_header(headers))?
            .authorize()?;

        let command = ctx.verify_command(body, &self.sanitizer)?;

        self.observer
            .record(&AuditEvent::command_requested(ctx.meta(), ctx.alias(), &command));

        let log = ctx.log();
        log.debug(format_args!("delegating command to executor"));
        let outcome = self.executor.execute(ctx.exec_cap(), &command);
        log.info(format_args!(
            "remote command finished (success: {})",
            outcome.is_ok()
        ));

        Ok(outcome)
    }
}
