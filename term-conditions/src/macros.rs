//! Early-return checks for arbitrary conditions.

/// Returns early with an error when a condition does not hold.
///
/// The factory receives `None`, or the formatted message when format
/// arguments are given. Formatting only happens on failure. The produced
/// error is converted with `From`, so it can be propagated into any error
/// type that wraps it.
///
/// # Examples
///
/// ```rust
/// use term_conditions::require;
/// use term_conditions::error::{ConditionError, Result};
///
/// fn withdraw(balance: u64, amount: u64) -> Result<u64> {
///     require!(amount > 0, ConditionError::invalid_argument);
///     require!(
///         amount <= balance,
///         ConditionError::invalid_state,
///         "cannot withdraw {amount} from {balance}"
///     );
///     Ok(balance - amount)
/// }
///
/// assert_eq!(withdraw(10, 4), Ok(6));
/// assert_eq!(withdraw(10, 0).unwrap_err().message(), None);
/// assert_eq!(
///     withdraw(3, 4).unwrap_err().message(),
///     Some("cannot withdraw 4 from 3")
/// );
/// ```
#[macro_export]
macro_rules! require {
    ($condition:expr, $factory:expr $(,)?) => {
        if !$condition {
            return ::core::result::Result::Err(::core::convert::From::from(($factory)(
                ::core::option::Option::None,
            )));
        }
    };
    ($condition:expr, $factory:expr, $($arg:tt)+) => {
        if !$condition {
            return ::core::result::Result::Err(::core::convert::From::from(($factory)(
                ::core::option::Option::Some(::std::format!($($arg)+)),
            )));
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::error::ConditionError;
    use std::cell::Cell;

    #[derive(Debug, PartialEq)]
    enum AppError {
        Condition(ConditionError),
    }

    impl From<ConditionError> for AppError {
        fn from(err: ConditionError) -> Self {
            Self::Condition(err)
        }
    }

    fn checked_div(a: i32, b: i32) -> Result<i32, AppError> {
        require!(b != 0, ConditionError::invalid_argument, "divisor of {a} is zero");
        Ok(a / b)
    }

    #[test]
    fn test_require_passes_through() {
        assert_eq!(checked_div(9, 3), Ok(3));
    }

    #[test]
    fn test_require_converts_error() {
        assert_eq!(
            checked_div(9, 0),
            Err(AppError::Condition(ConditionError::invalid_argument(Some(
                "divisor of 9 is zero".to_string()
            ))))
        );
    }

    #[test]
    fn test_require_formats_lazily() {
        let formatted = Cell::new(0);
        let describe = || {
            formatted.set(formatted.get() + 1);
            "x"
        };

        let check = |holds: bool| -> Result<(), ConditionError> {
            require!(holds, ConditionError::assertion_failed, "{}", describe());
            Ok(())
        };

        assert!(check(true).is_ok());
        assert_eq!(formatted.get(), 0);
        assert!(check(false).is_err());
        assert_eq!(formatted.get(), 1);
    }
}
