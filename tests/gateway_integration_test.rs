//! End-to-end tests of the remote execution pipeline.
//!
//! Each test drives `RemoteExecutionGateway::handle` with a raw request and
//! checks the response, what the executor saw, and what was recorded.

mod common;

use std::sync::Arc;

use common::{capture_logs, fixture, fixture_with_config, request_as, MANAGER, READER};
use remote_console_gateway::audit::{AuditEventKind, AuditTrail};
use remote_console_gateway::web::{Headers, RawRequest};
use remote_console_gateway::{
    basic_authorization, Authenticator, CommandRegistry, GatewayConfig, RemoteExecutionGateway,
    SerializedExecutor, Session,
};
use serde_json::{json, Value};

fn body_json(response: &remote_console_gateway::web::GatewayResponse) -> Value {
    serde_json::from_str(&response.to_json().expect("serializable")).expect("valid json")
}

#[test]
fn missing_credentials_are_unauthenticated() {
    let fx = fixture(Ok("ok".to_string()));
    let request = RawRequest::new("/api/execute", "192.0.2.10").with_body("help");

    let response = fx.gateway.handle(&request);

    assert_eq!(response.status(), 401);
    assert_eq!(
        body_json(&response),
        json!({ "status": 401, "message": "Authorization token is not specified" })
    );
    assert!(fx.executor.calls().is_empty());
}

#[test]
fn wrong_token_is_unauthenticated() {
    let fx = fixture(Ok("ok".to_string()));

    let response = fx.gateway.handle(&request_as((MANAGER.0, "guess"), "help"));

    assert_eq!(response.status(), 401);
    assert_eq!(
        body_json(&response)["message"],
        "Invalid authorization credentials"
    );
    assert!(fx.executor.calls().is_empty());
}

#[test]
fn non_manager_is_unauthorized() {
    let fx = fixture(Ok("ok".to_string()));

    let response = fx.gateway.handle(&request_as(READER, "help"));

    assert_eq!(response.status(), 401);
    assert_eq!(
        body_json(&response),
        json!({ "status": 401, "message": "Authenticated user is not a manager" })
    );
    assert!(fx.executor.calls().is_empty());
}

#[test]
fn empty_command_is_missing() {
    let fx = fixture(Ok("ok".to_string()));

    let response = fx.gateway.handle(&request_as(MANAGER, ""));

    assert_eq!(response.status(), 400);
    assert_eq!(
        body_json(&response),
        json!({ "status": 400, "message": "Missing command" })
    );
    assert!(fx.executor.calls().is_empty());
}

#[test]
fn absent_body_is_missing() {
    let fx = fixture(Ok("ok".to_string()));
    let request = RawRequest::new("/api/execute", "192.0.2.10")
        .with_header("Authorization", basic_authorization(MANAGER.0, MANAGER.1));

    let response = fx.gateway.handle(&request);

    assert_eq!(response.status(), 400);
    assert_eq!(body_json(&response)["message"], "Missing command");
}

#[test]
fn oversized_command_reports_actual_and_max_length() {
    let fx = fixture(Ok("ok".to_string()));

    let response = fx.gateway.handle(&request_as(MANAGER, &"a".repeat(1025)));

    assert_eq!(response.status(), 400);
    let message = body_json(&response)["message"]
        .as_str()
        .expect("message is a string")
        .to_string();
    assert!(message.contains("1025"));
    assert!(message.contains("1024"));
    assert!(fx.executor.calls().is_empty());
}

#[test]
fn command_at_limit_is_executed() {
    let fx = fixture(Ok("done".to_string()));
    let command = "a".repeat(1024);

    let response = fx.gateway.handle(&request_as(MANAGER, &command));

    assert_eq!(response.status(), 200);
    assert_eq!(fx.executor.calls(), vec![command]);
}

#[test]
fn astral_characters_count_twice_against_the_limit() {
    let fx = fixture(Ok("ok".to_string()));

    let response = fx.gateway.handle(&request_as(MANAGER, &"\u{1F600}".repeat(600)));
    assert_eq!(response.status(), 400);
    assert_eq!(
        body_json(&response)["message"],
        "The given command exceeds allowed length (1200 > 1024)"
    );
    assert!(fx.executor.calls().is_empty());

    let command = "\u{1F600}".repeat(512);
    let response = fx.gateway.handle(&request_as(MANAGER, &command));
    assert_eq!(response.status(), 200);
    assert_eq!(fx.executor.calls(), vec![command]);
}

#[test]
fn bare_basic_scheme_is_invalid_credentials() {
    let fx = fixture(Ok("ok".to_string()));
    let request = RawRequest::new("/api/execute", "192.0.2.10")
        .with_header("Authorization", "Basic")
        .with_body("help");

    let response = fx.gateway.handle(&request);

    assert_eq!(response.status(), 401);
    assert_eq!(body_json(&response)["message"], "Invalid basic credentials");
}

#[test]
fn help_returns_executor_payload() {
    let fx = fixture(Ok("Available commands: ...".to_string()));

    let response = fx.gateway.handle(&request_as(MANAGER, "help"));

    assert_eq!(response.status(), 200);
    assert_eq!(response.content_type(), "application/json");
    assert_eq!(
        body_json(&response),
        json!({ "success": true, "data": "Available commands: ..." })
    );
    assert_eq!(fx.executor.calls(), vec!["help".to_string()]);
}

#[test]
fn failed_execution_is_a_successful_request() {
    let fx = fixture(Err("Unknown command frobnicate".to_string()));

    let response = fx.gateway.handle(&request_as(MANAGER, "frobnicate"));

    assert_eq!(response.status(), 200);
    assert_eq!(
        body_json(&response),
        json!({ "success": false, "error": "Unknown command frobnicate" })
    );
}

#[test]
fn command_reaches_executor_verbatim() {
    let fx = fixture(Ok(String::new()));
    let command = "  stats  -1 \"com/example\" ";

    fx.gateway.handle(&request_as(MANAGER, command));

    assert_eq!(fx.executor.calls(), vec![command.to_string()]);
}

#[test]
fn audit_records_follow_pipeline_progress() {
    let fx = fixture(Ok("ok".to_string()));

    fx.gateway.handle(&request_as(READER, "status"));
    assert_eq!(
        fx.trail.messages(),
        vec!["REMOTE EXECUTION /api/execute from 192.0.2.10:51544".to_string()]
    );

    fx.trail.clear();
    fx.gateway.handle(&request_as(MANAGER, "status"));
    let events = fx.trail.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].kind(), AuditEventKind::ExecutionAttempt);
    assert_eq!(
        events[1].to_string(),
        "admin (192.0.2.10:51544) requested command: status"
    );
    assert_eq!(events[1].request_id(), "req-it");
}

#[test]
fn rejected_command_text_never_reaches_logs() {
    let fx = fixture(Ok("ok".to_string()));
    let marker = "purge-everything-7f1c";

    let logs = capture_logs(|| {
        fx.gateway.handle(&request_as((MANAGER.0, "bad"), marker));
        fx.gateway.handle(&request_as(READER, marker));
        fx.gateway
            .handle(&request_as(MANAGER, &format!("{marker}{}", "x".repeat(2000))));
    });

    assert!(!logs.contains(marker), "logs leaked command text:\n{logs}");
    assert!(!logs.contains(MANAGER.1));
    assert!(logs.contains("REMOTE EXECUTION /api/execute from 192.0.2.10:51544"));
    assert!(logs.contains("remote execution rejected: Invalid authorization credentials"));
    assert!(logs.contains("remote execution rejected: Authenticated user is not a manager"));
    assert!(logs.contains("2021 > 1024"));
    assert!(logs.contains("req-it"));
    assert!(fx.trail.events().iter().all(|e| e.command().is_none()));
}

#[test]
fn accepted_command_is_logged_with_alias() {
    let fx = fixture(Ok("ok".to_string()));

    let logs = capture_logs(|| {
        fx.gateway.handle(&request_as(MANAGER, "gc"));
    });

    assert!(logs.contains("admin (192.0.2.10:51544) requested command: gc"));
    assert!(logs.contains("remote_execution"));
    assert!(logs.contains("remote command finished (success: true)"));
}

#[test]
fn configured_limit_replaces_default() {
    let fx = fixture_with_config(
        GatewayConfig::default().with_max_command_length(3),
        Ok("ok".to_string()),
    );

    let response = fx.gateway.handle(&request_as(MANAGER, "help"));

    assert_eq!(response.status(), 400);
    assert_eq!(
        body_json(&response)["message"],
        "The given command exceeds allowed length (4 > 3)"
    );
}

/// Authenticator that trusts an `X-Role` header, to exercise the trait seam.
struct HeaderRoleAuthenticator;

impl Authenticator for HeaderRoleAuthenticator {
    fn authenticate_by_header(&self, headers: &Headers) -> Result<Session, String> {
        match headers.get("x-role") {
            Some("manager") => Ok(Session::new("ops", true)),
            Some(_) => Ok(Session::new("viewer", false)),
            None => Err("No role presented".to_string()),
        }
    }
}

#[test]
fn authenticator_message_is_forwarded_verbatim() {
    let gateway = RemoteExecutionGateway::new(
        GatewayConfig::default(),
        HeaderRoleAuthenticator,
        CommandRegistry::new(),
        AuditTrail::new(),
    )
    .unwrap();

    let response = gateway.handle(&RawRequest::new("/api/execute", "h").with_body("help"));
    assert_eq!(response.status(), 401);
    assert_eq!(body_json(&response)["message"], "No role presented");

    let response = gateway.handle(
        &RawRequest::new("/api/execute", "h")
            .with_header("X-Role", "manager")
            .with_body("help"),
    );
    assert_eq!(response.status(), 200);
    assert!(body_json(&response)["data"]
        .as_str()
        .unwrap()
        .starts_with("Available commands:"));
}

#[test]
fn concurrent_requests_are_handled_independently() {
    let trail = Arc::new(AuditTrail::new());
    let console = CommandRegistry::new().register("whoami", "Echo argument", |args| {
        Ok(args.first().copied().unwrap_or_default().to_string())
    });
    let gateway = RemoteExecutionGateway::new(
        GatewayConfig::default(),
        remote_console_gateway::TokenAuthenticator::new()
            .with_token(MANAGER.0, MANAGER.1, true)
            .with_token(READER.0, READER.1, false),
        SerializedExecutor::new(console),
        Arc::clone(&trail),
    )
    .unwrap();

    std::thread::scope(|scope| {
        for i in 0..16 {
            let gateway = &gateway;
            scope.spawn(move || {
                if i % 2 == 0 {
                    let response = gateway.handle(&request_as(MANAGER, &format!("whoami n{i}")));
                    assert_eq!(response.status(), 200);
                    assert_eq!(body_json(&response)["data"], format!("n{i}"));
                } else {
                    let response = gateway.handle(&request_as(READER, "whoami"));
                    assert_eq!(response.status(), 401);
                }
            });
        }
    });

    // 16 attempts plus 8 accepted commands
    assert_eq!(trail.len(), 24);
}
