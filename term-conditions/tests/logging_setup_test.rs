//! Global subscriber installation.
//!
//! Kept in its own test binary: the global subscriber can only be set once
//! per process.

use term_conditions::logging::setup::{init_logging, LoggingConfig};
use term_conditions::prelude::*;

#[test]
fn test_init_logging_installs_once() {
    let config = LoggingConfig::structured().with_env_filter("term_conditions=debug");
    init_logging(&config).unwrap();

    let guard = Guard::builder("setup")
        .factory(ConditionError::invalid_state)
        .with_log_config(config.log_config())
        .build()
        .unwrap();
    assert!(guard.log_config().log_violations);
    assert!(guard.require_true(false, "logged through the installed subscriber").is_err());

    let err = init_logging(&LoggingConfig::development()).unwrap_err();
    assert!(matches!(err, ConditionError::Configuration(_)));
    assert!(err.to_string().contains("logging already initialized"));
}
