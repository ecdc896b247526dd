//! Shared fixtures for gateway integration tests.

#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use remote_console_gateway::audit::{AuditTrail, TracingObserver};
use remote_console_gateway::web::RawRequest;
use remote_console_gateway::{
    basic_authorization, CommandExecutor, ExecCap, ExecutionOutcome, GatewayConfig,
    RemoteExecutionGateway, TokenAuthenticator, Verified,
};
use tracing_subscriber::fmt::MakeWriter;

pub const MANAGER: (&str, &str) = ("admin", "admin-token");
pub const READER: (&str, &str) = ("reader", "reader-token");

/// Executor that records every command and replies with a fixed outcome.
pub struct SpyExecutor {
    outcome: ExecutionOutcome,
    calls: Mutex<Vec<String>>,
}

impl SpyExecutor {
    pub fn replying(outcome: ExecutionOutcome) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandExecutor for SpyExecutor {
    fn execute(&self, _cap: ExecCap, command: &Verified<String>) -> ExecutionOutcome {
        self.calls.lock().unwrap().push(command.as_str().to_string());
        self.outcome.clone()
    }
}

pub type TestGateway = RemoteExecutionGateway<
    TokenAuthenticator,
    Arc<SpyExecutor>,
    (TracingObserver, Arc<AuditTrail>),
>;

pub struct Fixture {
    pub gateway: TestGateway,
    pub executor: Arc<SpyExecutor>,
    pub trail: Arc<AuditTrail>,
}

pub fn fixture(outcome: ExecutionOutcome) -> Fixture {
    fixture_with_config(GatewayConfig::default(), outcome)
}

pub fn fixture_with_config(config: GatewayConfig, outcome: ExecutionOutcome) -> Fixture {
    let executor = Arc::new(SpyExecutor::replying(outcome));
    let trail = Arc::new(AuditTrail::new());
    let authenticator = TokenAuthenticator::new()
        .with_token(MANAGER.0, MANAGER.1, true)
        .with_token(READER.0, READER.1, false);

    let gateway = RemoteExecutionGateway::new(
        config,
        authenticator,
        Arc::clone(&executor),
        (TracingObserver, Arc::clone(&trail)),
    )
    .expect("valid config");

    Fixture {
        gateway,
        executor,
        trail,
    }
}

pub fn request_as((alias, token): (&str, &str), body: &str) -> RawRequest {
    RawRequest::new("/api/execute", "192.0.2.10:51544")
        .with_request_id("req-it")
        .with_header("Authorization", basic_authorization(alias, token))
        .with_body(body)
}

/// Collects formatted tracing output for assertions.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs `f` with a subscriber capturing every event, and returns the output.
pub fn capture_logs<F: FnOnce()>(f: F) -> String {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    logs.contents()
}
