//! Kinds of violated conditions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of condition a check enforces.
///
/// The kind decides which built-in error a violation turns into. Argument
/// checks always produce [`ConditionError::InvalidArgument`]; state and
/// assertion checks are what [`Guard`] binds by default.
///
/// [`ConditionError::InvalidArgument`]: crate::error::ConditionError::InvalidArgument
/// [`Guard`]: crate::guard::Guard
///
/// # Examples
///
/// ```rust
/// use term_conditions::core::ConditionKind;
///
/// assert_eq!(ConditionKind::default(), ConditionKind::State);
/// assert_eq!(ConditionKind::Argument.to_string(), "argument");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum ConditionKind {
    /// A caller-supplied value was rejected
    Argument,
    /// A postcondition or invariant was violated
    #[default]
    State,
    /// An internal assertion failed
    Assertion,
}

impl ConditionKind {
    /// Returns the string representation of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionKind::Argument => "argument",
            ConditionKind::State => "state",
            ConditionKind::Assertion => "assertion",
        }
    }
}

impl fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(ConditionKind::Argument.to_string(), "argument");
        assert_eq!(ConditionKind::State.to_string(), "state");
        assert_eq!(ConditionKind::Assertion.to_string(), "assertion");
    }

    #[test]
    fn test_kind_serde() {
        let json = serde_json::to_string(&ConditionKind::Assertion).unwrap();
        assert_eq!(json, "\"assertion\"");

        let kind: ConditionKind = serde_json::from_str("\"argument\"").unwrap();
        assert_eq!(kind, ConditionKind::Argument);
    }
}
