//! The condition engine.
//!
//! Every check in this crate is a predicate plus a call into this module.
//! The engine owns the whole failure sequence:
//!
//! 1. if the predicate holds, the subject is returned and neither the
//!    message supplier nor the exception factory is touched;
//! 2. otherwise the message supplier is called once (absence stays `None`),
//! 3. its result is handed to the exception factory once,
//! 4. and the produced error is returned as `Err`.
//!
//! An exception factory is any `FnOnce(Option<String>) -> E`. The engine does
//! not log, retry or recover.

use super::message::MessageSupplier;

/// Boxed exception factory that can be called repeatedly.
pub type BoxedFactory<E> = Box<dyn Fn(Option<String>) -> E + Send + Sync>;

/// Runs the failure sequence unconditionally and returns the produced error.
///
/// Checks whose success value is not simply the subject (for example
/// unwrapping an `Option`) use this directly on their failure branch.
pub fn raise<E, M, F>(message: M, factory: F) -> E
where
    M: MessageSupplier,
    F: FnOnce(Option<String>) -> E,
{
    factory(message.supply())
}

/// Returns `subject` when `holds` is true, otherwise the factory's error.
///
/// # Examples
///
/// ```rust
/// use term_conditions::core::engine::evaluate;
/// use term_conditions::error::ConditionError;
///
/// let ok = evaluate(7, true, "unused", ConditionError::invalid_state);
/// assert_eq!(ok, Ok(7));
///
/// let err = evaluate(7, false, "seven is not allowed", ConditionError::invalid_state);
/// assert_eq!(err.unwrap_err().message(), Some("seven is not allowed"));
/// ```
pub fn evaluate<T, E, M, F>(subject: T, holds: bool, message: M, factory: F) -> Result<T, E>
where
    M: MessageSupplier,
    F: FnOnce(Option<String>) -> E,
{
    if holds {
        Ok(subject)
    } else {
        Err(raise(message, factory))
    }
}

/// Like [`evaluate`], but the message is derived from the subject.
///
/// The subject is only lent to `describe` on the failure path, which lets
/// callers format non-`Copy` subjects without cloning them up front.
pub fn evaluate_with<T, E, D, F>(subject: T, holds: bool, describe: D, factory: F) -> Result<T, E>
where
    D: FnOnce(&T) -> Option<String>,
    F: FnOnce(Option<String>) -> E,
{
    if holds {
        Ok(subject)
    } else {
        let message = describe(&subject);
        Err(raise(message, factory))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NoMessage;
    use crate::error::ConditionError;
    use std::cell::Cell;

    #[test]
    fn test_success_touches_nothing() {
        let messages = Cell::new(0);
        let factories = Cell::new(0);
        let result = evaluate(
            "subject",
            true,
            || {
                messages.set(messages.get() + 1);
                "never".to_string()
            },
            |m| {
                factories.set(factories.get() + 1);
                ConditionError::invalid_state(m)
            },
        );
        assert_eq!(result, Ok("subject"));
        assert_eq!(messages.get(), 0);
        assert_eq!(factories.get(), 0);
    }

    #[test]
    fn test_failure_calls_each_once() {
        let messages = Cell::new(0);
        let factories = Cell::new(0);
        let result: Result<i32, ConditionError> = evaluate(
            1,
            false,
            || {
                messages.set(messages.get() + 1);
                "broken".to_string()
            },
            |m| {
                factories.set(factories.get() + 1);
                ConditionError::invalid_state(m)
            },
        );
        assert_eq!(
            result,
            Err(ConditionError::invalid_state(Some("broken".to_string())))
        );
        assert_eq!(messages.get(), 1);
        assert_eq!(factories.get(), 1);
    }

    #[test]
    fn test_failure_without_message() {
        let result: Result<(), ConditionError> =
            evaluate((), false, NoMessage, ConditionError::invalid_argument);
        assert_eq!(result, Err(ConditionError::invalid_argument(None)));
    }

    #[test]
    fn test_evaluate_with_lends_subject() {
        let subject = vec![1, 2, 3];
        let result: Result<Vec<i32>, ConditionError> = evaluate_with(
            subject,
            false,
            |v| Some(format!("{} elements", v.len())),
            ConditionError::invalid_state,
        );
        assert_eq!(
            result.unwrap_err().message(),
            Some("3 elements")
        );
    }

    #[test]
    fn test_custom_error_type() {
        #[derive(Debug, PartialEq)]
        struct Rejected(Option<String>);

        let result = evaluate(0u8, false, "zero", Rejected);
        assert_eq!(result, Err(Rejected(Some("zero".to_string()))));
    }
}
