//! Presence, truth, equality and identity checks.

use crate::core::{evaluate, evaluate_with, raise, MessageSupplier};
use std::rc::Rc;
use std::sync::Arc;

/// Identity comparison.
///
/// Handles (`&T`, `Rc<T>`, `Arc<T>`, `Box<T>`) are the same when they point at
/// the same value. Scalars have no identity distinct from their value, so for
/// them "same" means "equal".
///
/// A zero-sized value occupies no storage, so references to zero-sized values
/// cannot be told apart by address. Every such reference is the same as every
/// other one.
///
/// # Examples
///
/// ```rust
/// use term_conditions::conditions::Identity;
///
/// let a = String::from("x");
/// let b = String::from("x");
/// assert!((&a).is_same(&&a));
/// assert!(!(&a).is_same(&&b));
/// assert!(3u8.is_same(&3u8));
/// ```
pub trait Identity {
    /// Returns true when `self` and `other` are the same object.
    fn is_same(&self, other: &Self) -> bool;
}

macro_rules! scalar_identity {
    ($($t:ty),* $(,)?) => {
        $(
            impl Identity for $t {
                #[allow(clippy::float_cmp)]
                fn is_same(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

scalar_identity!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64,
);

/// Address identity. Two references to zero-sized values are always the same.
impl<'a, T: ?Sized> Identity for &'a T {
    fn is_same(&self, other: &Self) -> bool {
        if std::mem::size_of_val(*self) == 0 && std::mem::size_of_val(*other) == 0 {
            return true;
        }
        std::ptr::eq(*self, *other)
    }
}

impl<T: ?Sized> Identity for Rc<T> {
    fn is_same(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> Identity for Arc<T> {
    fn is_same(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> Identity for Box<T> {
    fn is_same(&self, other: &Self) -> bool {
        std::ptr::eq(&**self, &**other)
    }
}

impl<T: Identity> Identity for Option<T> {
    fn is_same(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(left), Some(right)) => left.is_same(right),
            (None, None) => true,
            _ => false,
        }
    }
}

/// Requires `condition` to be true.
pub fn require_true<E, M, F>(condition: bool, message: M, factory: F) -> Result<bool, E>
where
    M: MessageSupplier,
    F: FnOnce(Option<String>) -> E,
{
    evaluate(condition, condition, message, factory)
}

/// Requires `condition` to be false.
pub fn require_false<E, M, F>(condition: bool, message: M, factory: F) -> Result<bool, E>
where
    M: MessageSupplier,
    F: FnOnce(Option<String>) -> E,
{
    evaluate(condition, !condition, message, factory)
}

/// Requires a value to be present and returns it.
///
/// # Examples
///
/// ```rust
/// use term_conditions::conditions::require_not_null;
/// use term_conditions::error::ConditionError;
///
/// assert_eq!(require_not_null(Some(5), "missing", ConditionError::invalid_state), Ok(5));
///
/// let err = require_not_null(None::<i32>, "missing", ConditionError::invalid_state).unwrap_err();
/// assert_eq!(err.message(), Some("missing"));
/// ```
pub fn require_not_null<T, E, M, F>(subject: Option<T>, message: M, factory: F) -> Result<T, E>
where
    M: MessageSupplier,
    F: FnOnce(Option<String>) -> E,
{
    match subject {
        Some(value) => Ok(value),
        None => Err(raise(message, factory)),
    }
}

/// Requires a value to be absent.
pub fn require_null<T, E, M, F>(subject: Option<T>, message: M, factory: F) -> Result<Option<T>, E>
where
    M: MessageSupplier,
    F: FnOnce(Option<String>) -> E,
{
    let holds = subject.is_none();
    evaluate(subject, holds, message, factory)
}

/// Like [`require_null`], with the message derived from the present value.
pub fn require_null_with<T, E, D, F>(
    subject: Option<T>,
    describe: D,
    factory: F,
) -> Result<Option<T>, E>
where
    D: FnOnce(&T) -> String,
    F: FnOnce(Option<String>) -> E,
{
    let holds = subject.is_none();
    evaluate_with(subject, holds, |s| s.as_ref().map(describe), factory)
}

/// Requires `actual == expected`, using the type's own equality.
pub fn require_equal<T, U, E, M, F>(actual: T, expected: U, message: M, factory: F) -> Result<T, E>
where
    T: PartialEq<U>,
    M: MessageSupplier,
    F: FnOnce(Option<String>) -> E,
{
    let holds = actual == expected;
    evaluate(actual, holds, message, factory)
}

/// Like [`require_equal`], with the message built from both values.
///
/// # Examples
///
/// ```rust
/// use term_conditions::conditions::require_equal_with;
/// use term_conditions::error::ConditionError;
///
/// let err = require_equal_with(
///     String::from("draft"),
///     "published",
///     |actual, expected| format!("status was {actual}, expected {expected}"),
///     ConditionError::invalid_state,
/// )
/// .unwrap_err();
/// assert_eq!(err.message(), Some("status was draft, expected published"));
/// ```
pub fn require_equal_with<T, U, E, D, F>(
    actual: T,
    expected: U,
    describe: D,
    factory: F,
) -> Result<T, E>
where
    T: PartialEq<U>,
    D: FnOnce(&T, &U) -> String,
    F: FnOnce(Option<String>) -> E,
{
    let holds = actual == expected;
    evaluate_with(actual, holds, |a| Some(describe(a, &expected)), factory)
}

/// Requires `actual != expected`.
pub fn require_not_equal<T, U, E, M, F>(
    actual: T,
    unexpected: U,
    message: M,
    factory: F,
) -> Result<T, E>
where
    T: PartialEq<U>,
    M: MessageSupplier,
    F: FnOnce(Option<String>) -> E,
{
    let holds = actual != unexpected;
    evaluate(actual, holds, message, factory)
}

/// Like [`require_not_equal`], with the message built from both values.
pub fn require_not_equal_with<T, U, E, D, F>(
    actual: T,
    unexpected: U,
    describe: D,
    factory: F,
) -> Result<T, E>
where
    T: PartialEq<U>,
    D: FnOnce(&T, &U) -> String,
    F: FnOnce(Option<String>) -> E,
{
    let holds = actual != unexpected;
    evaluate_with(actual, holds, |a| Some(describe(a, &unexpected)), factory)
}

/// Requires `actual` and `expected` to be the same object (see [`Identity`]).
pub fn require_same<T, E, M, F>(actual: T, expected: T, message: M, factory: F) -> Result<T, E>
where
    T: Identity,
    M: MessageSupplier,
    F: FnOnce(Option<String>) -> E,
{
    let holds = actual.is_same(&expected);
    evaluate(actual, holds, message, factory)
}

/// Like [`require_same`], with the message built from both values.
pub fn require_same_with<T, E, D, F>(actual: T, expected: T, describe: D, factory: F) -> Result<T, E>
where
    T: Identity,
    D: FnOnce(&T, &T) -> String,
    F: FnOnce(Option<String>) -> E,
{
    let holds = actual.is_same(&expected);
    evaluate_with(actual, holds, |a| Some(describe(a, &expected)), factory)
}

/// Requires `actual` and `unexpected` to be different objects.
pub fn require_not_same<T, E, M, F>(
    actual: T,
    unexpected: T,
    message: M,
    factory: F,
) -> Result<T, E>
where
    T: Identity,
    M: MessageSupplier,
    F: FnOnce(Option<String>) -> E,
{
    let holds = !actual.is_same(&unexpected);
    evaluate(actual, holds, message, factory)
}

/// Like [`require_not_same`], with the message built from both values.
pub fn require_not_same_with<T, E, D, F>(
    actual: T,
    unexpected: T,
    describe: D,
    factory: F,
) -> Result<T, E>
where
    T: Identity,
    D: FnOnce(&T, &T) -> String,
    F: FnOnce(Option<String>) -> E,
{
    let holds = !actual.is_same(&unexpected);
    evaluate_with(actual, holds, |a| Some(describe(a, &unexpected)), factory)
}
