//! Lazily produced failure messages.

/// A deferred producer of a failure description.
///
/// `supply` consumes the supplier, so a message is produced at most once.
/// The engine only calls it after a condition has been found violated;
/// on the success path the supplier is dropped untouched.
///
/// Implemented for literal text (`&str`, `String`, `&String`), explicit
/// optional text, [`NoMessage`], and any `FnOnce() -> String` closure.
///
/// # Examples
///
/// ```rust
/// use term_conditions::core::{MessageSupplier, NoMessage};
///
/// assert_eq!("literal".supply(), Some("literal".to_string()));
/// assert_eq!((|| format!("{} items", 3)).supply(), Some("3 items".to_string()));
/// assert_eq!(NoMessage.supply(), None);
/// ```
pub trait MessageSupplier {
    /// Produces the message, or `None` when there is nothing to report.
    fn supply(self) -> Option<String>;
}

/// Marker for a check that carries no message.
///
/// The resulting error reports `None` as its message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoMessage;

impl MessageSupplier for NoMessage {
    fn supply(self) -> Option<String> {
        None
    }
}

impl<'a> MessageSupplier for &'a str {
    fn supply(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl<'a> MessageSupplier for &'a String {
    fn supply(self) -> Option<String> {
        Some(self.clone())
    }
}

impl MessageSupplier for String {
    fn supply(self) -> Option<String> {
        Some(self)
    }
}

impl MessageSupplier for Option<String> {
    fn supply(self) -> Option<String> {
        self
    }
}

impl<'a> MessageSupplier for Option<&'a str> {
    fn supply(self) -> Option<String> {
        self.map(str::to_string)
    }
}

impl<F> MessageSupplier for F
where
    F: FnOnce() -> String,
{
    fn supply(self) -> Option<String> {
        Some(self())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_literal_messages() {
        assert_eq!("text".supply(), Some("text".to_string()));
        assert_eq!(String::from("owned").supply(), Some("owned".to_string()));
        let borrowed = String::from("borrowed");
        assert_eq!((&borrowed).supply(), Some("borrowed".to_string()));
    }

    #[test]
    fn test_optional_messages() {
        assert_eq!(None::<String>.supply(), None);
        assert_eq!(Some("present").supply(), Some("present".to_string()));
        assert_eq!(NoMessage.supply(), None);
    }

    #[test]
    fn test_closure_runs_only_when_supplied() {
        let calls = Cell::new(0);
        let supplier = || {
            calls.set(calls.get() + 1);
            "computed".to_string()
        };
        assert_eq!(calls.get(), 0);
        assert_eq!(supplier.supply(), Some("computed".to_string()));
        assert_eq!(calls.get(), 1);
    }
}
