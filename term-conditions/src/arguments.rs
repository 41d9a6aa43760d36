//! Argument validation.
//!
//! [`Arguments`] is the facade for checking values passed in by a caller. A
//! violated check always yields [`ConditionError::InvalidArgument`] carrying
//! the supplied message.

use crate::error::ConditionError;
use crate::validator::Validator;

/// Argument validation facade.
///
/// # Examples
///
/// ```rust
/// use term_conditions::prelude::*;
///
/// fn connect(host: Option<&str>, port: u16) -> term_conditions::Result<String> {
///     let host = Arguments.require_not_null(host, "host is required")?;
///     let host = Arguments.require_not_empty(host, "host must not be blank")?;
///     let port = Arguments.require_in_range_inclusive(port, 1, 65_535, || {
///         format!("port {port} is not usable")
///     })?;
///     Ok(format!("{host}:{port}"))
/// }
///
/// assert_eq!(connect(Some("db"), 5432).unwrap(), "db:5432");
///
/// let err = connect(None, 5432).unwrap_err();
/// assert_eq!(err.kind(), Some(ConditionKind::Argument));
/// assert_eq!(err.message(), Some("host is required"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Arguments;

impl Validator for Arguments {
    type Error = ConditionError;

    fn raise(&self, message: Option<String>) -> ConditionError {
        ConditionError::invalid_argument(message)
    }
}
