//! Integration tests for violation logging through guards.

use std::sync::{Arc, Mutex};
use term_conditions::conditions;
use term_conditions::prelude::*;

/// Test helper to capture structured logs
#[derive(Clone)]
struct LogCapture {
    logs: Arc<Mutex<Vec<String>>>,
}

impl LogCapture {
    fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn captured_logs(&self) -> Vec<String> {
        self.logs.lock().unwrap().clone()
    }
}

impl std::io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let s = String::from_utf8_lossy(buf).to_string();
        self.logs.lock().unwrap().push(s);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn json_subscriber(capture: &LogCapture) -> impl tracing::Subscriber + Send + Sync {
    let writer = capture.clone();
    tracing_subscriber::fmt()
        .json()
        .with_writer(move || writer.clone())
        .with_env_filter("term_conditions=debug")
        .finish()
}

#[test]
fn test_violation_emits_structured_event() {
    let capture = LogCapture::new();
    let _guard = tracing::subscriber::set_default(json_subscriber(&capture));

    let guard = Guard::state("inventory");
    let _ = guard.require_greater(0, 0, "stock depleted");

    let logs = capture.captured_logs();
    assert_eq!(logs.len(), 1, "expected one event, got {logs:?}");

    let event: serde_json::Value = serde_json::from_str(logs[0].trim()).unwrap();
    assert_eq!(event["level"], "DEBUG");
    assert_eq!(event["fields"]["message"], "condition violated");
    assert_eq!(event["fields"]["guard.name"], "inventory");
    assert_eq!(event["fields"]["condition.kind"], "state");
    assert_eq!(event["fields"]["condition.message"], "stock depleted");
}

#[test]
fn test_success_emits_nothing() {
    let capture = LogCapture::new();
    let _guard = tracing::subscriber::set_default(json_subscriber(&capture));

    let guard = Guard::assertion("quiet");
    guard.require_true(true, "unused").unwrap();
    guard.require_not_empty("text", NoMessage).unwrap();

    assert!(capture.captured_logs().is_empty());
}

#[test]
fn test_disabled_violation_logging() {
    let capture = LogCapture::new();
    let _guard = tracing::subscriber::set_default(json_subscriber(&capture));

    let guard = Guard::builder("silent")
        .factory(ConditionError::invalid_state)
        .with_log_config(LogConfig::production())
        .build()
        .unwrap();
    assert!(guard.require_false(true, "hidden").is_err());

    assert!(capture.captured_logs().is_empty());
}

#[test]
fn test_long_messages_are_truncated() {
    let capture = LogCapture::new();
    let _guard = tracing::subscriber::set_default(json_subscriber(&capture));

    let config = GuardConfig {
        max_message_length: 8,
        ..GuardConfig::new("bounded")
    };
    let guard = Guard::from_config(&config);
    let err = guard
        .require_true(false, "a rather long explanation")
        .unwrap_err();

    // The error keeps the full message; only the log field is cut.
    assert_eq!(err.message(), Some("a rather long explanation"));

    let event: serde_json::Value =
        serde_json::from_str(capture.captured_logs()[0].trim()).unwrap();
    assert_eq!(event["fields"]["condition.message"], "a rather...(truncated)");
}

#[test]
fn test_free_functions_never_log() {
    let capture = LogCapture::new();
    let _guard = tracing::subscriber::set_default(json_subscriber(&capture));

    let _ = conditions::require_true(false, "not logged", ConditionError::invalid_state);
    let _ = Arguments.require_empty(&[1, 2], "not logged either");

    assert!(capture.captured_logs().is_empty());
}
