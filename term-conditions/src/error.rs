//! Error types for the Term conditions library.
//!
//! Every check in this crate reports a violated condition by returning `Err`
//! with a value produced by an exception factory. `ConditionError` is the
//! built-in error type: its constructors have the factory signature
//! `fn(Option<String>) -> ConditionError`, so they can be handed to any check
//! directly.

use crate::core::ConditionKind;
use thiserror::Error;

/// The main error type for the Term conditions library.
///
/// The message of a violation is kept exactly as it was supplied. A check
/// called without a message yields `message() == None`; it is never replaced
/// by a placeholder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConditionError {
    /// A caller supplied a disallowed value.
    #[error("Invalid argument{}", suffix(.message))]
    InvalidArgument {
        /// Message computed by the failed check, if any
        message: Option<String>,
    },

    /// A postcondition or invariant of the calling component does not hold.
    #[error("Invalid state{}", suffix(.message))]
    InvalidState {
        /// Message computed by the failed check, if any
        message: Option<String>,
    },

    /// An internal assertion of the calling component failed.
    #[error("Assertion failed{}", suffix(.message))]
    AssertionFailed {
        /// Message computed by the failed check, if any
        message: Option<String>,
    },

    /// A guard was built without an exception factory.
    #[error("No exception factory bound for guard '{guard}'")]
    MissingFactory {
        /// Name of the guard that was misconfigured
        guard: String,
    },

    /// A guard configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

fn suffix(message: &Option<String>) -> String {
    match message {
        Some(message) => format!(": {message}"),
        None => String::new(),
    }
}

/// A type alias for `Result<T, ConditionError>`.
///
/// # Examples
///
/// ```rust
/// use term_conditions::error::Result;
/// use term_conditions::prelude::*;
///
/// fn port(value: u16) -> Result<u16> {
///     Arguments.require_greater(value, 1023, "ports below 1024 are reserved")
/// }
///
/// assert!(port(8080).is_ok());
/// assert!(port(80).is_err());
/// ```
pub type Result<T> = std::result::Result<T, ConditionError>;

impl ConditionError {
    /// Exception factory for argument validation.
    pub fn invalid_argument(message: Option<String>) -> Self {
        Self::InvalidArgument { message }
    }

    /// Exception factory for state validation.
    pub fn invalid_state(message: Option<String>) -> Self {
        Self::InvalidState { message }
    }

    /// Exception factory for assertions.
    pub fn assertion_failed(message: Option<String>) -> Self {
        Self::AssertionFailed { message }
    }

    /// Creates the error reported by a guard that has no factory.
    pub fn missing_factory(guard: impl Into<String>) -> Self {
        Self::MissingFactory {
            guard: guard.into(),
        }
    }

    /// Returns the factory that produces errors of the given kind.
    pub fn factory(kind: ConditionKind) -> fn(Option<String>) -> ConditionError {
        match kind {
            ConditionKind::Argument => Self::invalid_argument,
            ConditionKind::State => Self::invalid_state,
            ConditionKind::Assertion => Self::assertion_failed,
        }
    }

    /// Returns the message carried by a violation, exactly as supplied.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::InvalidArgument { message }
            | Self::InvalidState { message }
            | Self::AssertionFailed { message } => message.as_deref(),
            Self::MissingFactory { .. } | Self::Configuration(_) => None,
        }
    }

    /// Returns the condition kind for violations, `None` for misuse errors.
    pub fn kind(&self) -> Option<ConditionKind> {
        match self {
            Self::InvalidArgument { .. } => Some(ConditionKind::Argument),
            Self::InvalidState { .. } => Some(ConditionKind::State),
            Self::AssertionFailed { .. } => Some(ConditionKind::Assertion),
            Self::MissingFactory { .. } | Self::Configuration(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConditionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Configuration(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = ConditionError::invalid_argument(Some("port out of range".to_string()));
        assert_eq!(err.to_string(), "Invalid argument: port out of range");
        assert_eq!(err.message(), Some("port out of range"));
    }

    #[test]
    fn test_absent_message_stays_absent() {
        let err = ConditionError::invalid_state(None);
        assert_eq!(err.message(), None);
        assert_eq!(err.to_string(), "Invalid state");
    }

    #[test]
    fn test_missing_factory() {
        let err = ConditionError::missing_factory("ledger");
        assert_eq!(
            err.to_string(),
            "No exception factory bound for guard 'ledger'"
        );
        assert_eq!(err.kind(), None);
    }

    #[test]
    fn test_factory_by_kind() {
        let factory = ConditionError::factory(ConditionKind::Assertion);
        let err = factory(Some("unreachable".to_string()));
        assert_eq!(err.kind(), Some(ConditionKind::Assertion));
        assert_eq!(err.to_string(), "Assertion failed: unreachable");
    }
}
