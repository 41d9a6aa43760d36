//! Named state facades with a configured exception factory.
//!
//! A [`Guard`] is bound to one exception factory for its whole life and
//! exposes every check through [`Validator`]. Unlike the free functions in
//! [`crate::conditions`], a guard reports each violation as a `tracing`
//! event when its [`LogConfig`] allows it.
//!
//! Guards are built either in code with [`GuardBuilder`] or from a
//! serialized [`GuardConfig`].

use crate::core::{BoxedFactory, ConditionKind};
use crate::error::{ConditionError, Result};
use crate::log_violation;
use crate::logging::LogConfig;
use crate::validator::Validator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named check facade bound to one exception factory.
///
/// # Examples
///
/// ```rust
/// use term_conditions::prelude::*;
///
/// #[derive(Debug)]
/// enum PoolError {
///     Exhausted(Option<String>),
/// }
///
/// let guard = Guard::builder("connection_pool")
///     .factory(PoolError::Exhausted)
///     .build()
///     .unwrap();
///
/// let idle = 0;
/// let err = guard
///     .require_greater(idle, 0, || format!("{idle} idle connections"))
///     .unwrap_err();
/// assert!(matches!(err, PoolError::Exhausted(Some(m)) if m == "0 idle connections"));
/// ```
pub struct Guard<E = ConditionError> {
    name: String,
    kind: ConditionKind,
    factory: BoxedFactory<E>,
    log_config: LogConfig,
}

impl<E> Guard<E> {
    /// Creates a new guard builder with the given name.
    pub fn builder(name: impl Into<String>) -> GuardBuilder<E> {
        GuardBuilder::new(name)
    }

    /// Returns the name of the guard.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the kind reported in violation events.
    pub fn kind(&self) -> ConditionKind {
        self.kind
    }

    /// Returns the logging configuration of the guard.
    pub fn log_config(&self) -> &LogConfig {
        &self.log_config
    }
}

impl Guard<ConditionError> {
    /// Creates a guard raising [`ConditionError::InvalidState`].
    pub fn state(name: impl Into<String>) -> Self {
        Self::of_kind(name, ConditionKind::State)
    }

    /// Creates a guard raising [`ConditionError::AssertionFailed`].
    pub fn assertion(name: impl Into<String>) -> Self {
        Self::of_kind(name, ConditionKind::Assertion)
    }

    /// Creates a guard from a configuration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use term_conditions::prelude::*;
    ///
    /// let config = GuardConfig::from_json(
    ///     r#"{"name": "ingest", "kind": "assertion", "log_violations": false}"#,
    /// )?;
    /// let guard = Guard::from_config(&config);
    ///
    /// let err = guard.require_true(false, "batch out of order").unwrap_err();
    /// assert_eq!(err.kind(), Some(ConditionKind::Assertion));
    /// # Ok::<(), ConditionError>(())
    /// ```
    pub fn from_config(config: &GuardConfig) -> Self {
        let log_config = LogConfig {
            log_violations: config.log_violations,
            max_field_length: config.max_message_length,
            ..LogConfig::default()
        };
        Self {
            name: config.name.clone(),
            kind: config.kind,
            factory: Box::new(ConditionError::factory(config.kind)),
            log_config,
        }
    }

    fn of_kind(name: impl Into<String>, kind: ConditionKind) -> Self {
        Self {
            name: name.into(),
            kind,
            factory: Box::new(ConditionError::factory(kind)),
            log_config: LogConfig::default(),
        }
    }
}

impl<E> Validator for Guard<E> {
    type Error = E;

    fn raise(&self, message: Option<String>) -> E {
        log_violation!(self.log_config, self.name, self.kind, message.as_deref());
        (self.factory)(message)
    }
}

impl<E> fmt::Debug for Guard<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("log_config", &self.log_config)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing a [`Guard`].
pub struct GuardBuilder<E> {
    name: String,
    kind: ConditionKind,
    factory: Option<BoxedFactory<E>>,
    log_config: LogConfig,
}

impl<E> GuardBuilder<E> {
    /// Creates a new guard builder with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ConditionKind::default(),
            factory: None,
            log_config: LogConfig::default(),
        }
    }

    /// Sets the exception factory used for every violation.
    ///
    /// # Arguments
    ///
    /// * `factory` - Turns the optional failure message into an error
    pub fn factory<F>(mut self, factory: F) -> Self
    where
        F: Fn(Option<String>) -> E + Send + Sync + 'static,
    {
        self.factory = Some(Box::new(factory));
        self
    }

    /// Sets the kind reported in violation events.
    ///
    /// This only labels log output; the error is decided by the factory.
    pub fn kind(mut self, kind: ConditionKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the logging configuration.
    pub fn with_log_config(mut self, log_config: LogConfig) -> Self {
        self.log_config = log_config;
        self
    }

    /// Builds the `Guard` instance.
    ///
    /// # Errors
    ///
    /// Returns [`ConditionError::MissingFactory`] if no factory was set.
    pub fn build(self) -> Result<Guard<E>> {
        let factory = self
            .factory
            .ok_or_else(|| ConditionError::missing_factory(&self.name))?;
        Ok(Guard {
            name: self.name,
            kind: self.kind,
            factory,
            log_config: self.log_config,
        })
    }
}

impl<E> fmt::Debug for GuardBuilder<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuardBuilder")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("has_factory", &self.factory.is_some())
            .field("log_config", &self.log_config)
            .finish()
    }
}

/// Serializable description of a guard raising a built-in error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardConfig {
    /// Name reported in violation events
    pub name: String,
    /// Which built-in error a violation produces
    #[serde(default)]
    pub kind: ConditionKind,
    /// Whether violations are logged
    #[serde(default = "default_log_violations")]
    pub log_violations: bool,
    /// Messages longer than this are truncated in log output
    #[serde(default = "default_max_message_length")]
    pub max_message_length: usize,
}

fn default_log_violations() -> bool {
    true
}

fn default_max_message_length() -> usize {
    LogConfig::default().max_field_length
}

impl GuardConfig {
    /// Creates a configuration with default settings.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ConditionKind::default(),
            log_violations: default_log_violations(),
            max_message_length: default_max_message_length(),
        }
    }

    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the configuration to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NoMessage;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Debug, PartialEq)]
    struct Custom(Option<String>);

    #[test]
    fn test_guard_builder() {
        let guard = Guard::builder("orders")
            .factory(Custom)
            .kind(ConditionKind::Assertion)
            .with_log_config(LogConfig::silent())
            .build()
            .unwrap();

        assert_eq!(guard.name(), "orders");
        assert_eq!(guard.kind(), ConditionKind::Assertion);
        assert!(!guard.log_config().log_violations);
        assert_eq!(guard.require_true(false, "late"), Err(Custom(Some("late".into()))));
    }

    #[test]
    fn test_build_without_factory_fails() {
        let err = GuardBuilder::<Custom>::new("orphan").build().unwrap_err();
        assert_eq!(err, ConditionError::missing_factory("orphan"));
        assert_eq!(
            err.to_string(),
            "No exception factory bound for guard 'orphan'"
        );
    }

    #[test]
    fn test_factory_called_once_per_violation() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let guard = Guard::builder("counted")
            .factory(move |m| {
                counter.fetch_add(1, Ordering::SeqCst);
                Custom(m)
            })
            .build()
            .unwrap();

        assert!(guard.require_not_empty(&[1], NoMessage).is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert!(guard.require_empty(&[1], NoMessage).is_err());
        assert!(guard.require_same(1, 2, NoMessage).is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_builtin_guards() {
        let state = Guard::state("cache");
        assert_eq!(
            state.require_null(Some(1), "still cached"),
            Err(ConditionError::invalid_state(Some("still cached".into())))
        );

        let assertion = Guard::assertion("index");
        assert_eq!(
            assertion.require_less(3, 2, NoMessage).unwrap_err().kind(),
            Some(ConditionKind::Assertion)
        );
    }

    #[test]
    fn test_config_defaults_from_json() {
        let config = GuardConfig::from_json(r#"{"name": "jobs"}"#).unwrap();
        assert_eq!(config, GuardConfig::new("jobs"));
        assert_eq!(config.kind, ConditionKind::State);
        assert!(config.log_violations);
        assert_eq!(config.max_message_length, 256);
    }

    #[test]
    fn test_config_round_trip() {
        let config = GuardConfig {
            name: "jobs".into(),
            kind: ConditionKind::Argument,
            log_violations: false,
            max_message_length: 32,
        };
        let parsed = GuardConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);

        let guard = Guard::from_config(&parsed);
        assert_eq!(guard.log_config().max_field_length, 32);
        assert_eq!(
            guard.require_false(true, NoMessage).unwrap_err().kind(),
            Some(ConditionKind::Argument)
        );
    }

    #[test]
    fn test_invalid_config() {
        let err = GuardConfig::from_json(r#"{"name": "jobs", "kind": "fatal"}"#).unwrap_err();
        assert!(matches!(err, ConditionError::Configuration(_)));
    }

    #[test]
    fn test_guard_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Guard>();
    }
}
