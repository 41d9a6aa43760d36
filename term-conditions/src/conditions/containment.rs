//! Emptiness and containment checks over [`Container`] shapes.
//!
//! Containers are taken by reference, so they can never be absent; the
//! checks hand the same reference back on success.

use super::container::Container;
use super::scalar::Identity;
use crate::core::{evaluate, evaluate_with, MessageSupplier};

/// Requires the container to hold no elements.
///
/// # Examples
///
/// ```rust
/// use term_conditions::conditions::require_empty;
/// use term_conditions::core::NoMessage;
/// use term_conditions::error::ConditionError;
///
/// let none: Vec<u8> = Vec::new();
/// assert!(require_empty(&none, NoMessage, ConditionError::invalid_state).is_ok());
/// assert!(require_empty(&vec![1], NoMessage, ConditionError::invalid_state).is_err());
/// ```
pub fn require_empty<'c, C, E, M, F>(container: &'c C, message: M, factory: F) -> Result<&'c C, E>
where
    C: Container + ?Sized,
    M: MessageSupplier,
    F: FnOnce(Option<String>) -> E,
{
    let holds = container.is_vacant();
    evaluate(container, holds, message, factory)
}

/// Like [`require_empty`], with the message built from the container.
///
/// # Examples
///
/// ```rust
/// use term_conditions::conditions::require_empty_with;
/// use term_conditions::error::ConditionError;
///
/// let pending = vec!["job-7", "job-9"];
/// let err = require_empty_with(
///     &pending,
///     |jobs| format!("{} jobs still pending", jobs.len()),
///     ConditionError::invalid_state,
/// )
/// .unwrap_err();
/// assert_eq!(err.message(), Some("2 jobs still pending"));
/// ```
pub fn require_empty_with<'c, C, E, D, F>(
    container: &'c C,
    describe: D,
    factory: F,
) -> Result<&'c C, E>
where
    C: Container + ?Sized,
    D: FnOnce(&C) -> String,
    F: FnOnce(Option<String>) -> E,
{
    let holds = container.is_vacant();
    evaluate_with(container, holds, |c| Some(describe(*c)), factory)
}

/// Requires the container to hold at least one element.
pub fn require_not_empty<'c, C, E, M, F>(
    container: &'c C,
    message: M,
    factory: F,
) -> Result<&'c C, E>
where
    C: Container + ?Sized,
    M: MessageSupplier,
    F: FnOnce(Option<String>) -> E,
{
    let holds = !container.is_vacant();
    evaluate(container, holds, message, factory)
}

/// Like [`require_not_empty`], with the message built from the container.
pub fn require_not_empty_with<'c, C, E, D, F>(
    container: &'c C,
    describe: D,
    factory: F,
) -> Result<&'c C, E>
where
    C: Container + ?Sized,
    D: FnOnce(&C) -> String,
    F: FnOnce(Option<String>) -> E,
{
    let holds = !container.is_vacant();
    evaluate_with(container, holds, |c| Some(describe(*c)), factory)
}

/// Requires an element equal to `value`.
pub fn require_contains_equals<'c, C, V, E, M, F>(
    container: &'c C,
    value: V,
    message: M,
    factory: F,
) -> Result<&'c C, E>
where
    C: Container + ?Sized,
    C::Item: PartialEq<V>,
    M: MessageSupplier,
    F: FnOnce(Option<String>) -> E,
{
    let holds = container.position_of(|item| *item == value).is_some();
    evaluate(container, holds, message, factory)
}

/// Like [`require_contains_equals`], with the message built from the
/// container and the missing value.
pub fn require_contains_equals_with<'c, C, V, E, D, F>(
    container: &'c C,
    value: V,
    describe: D,
    factory: F,
) -> Result<&'c C, E>
where
    C: Container + ?Sized,
    C::Item: PartialEq<V>,
    D: FnOnce(&C, &V) -> String,
    F: FnOnce(Option<String>) -> E,
{
    let holds = container.position_of(|item| *item == value).is_some();
    evaluate_with(container, holds, |c| Some(describe(*c, &value)), factory)
}

/// Requires no element equal to `value`.
pub fn require_not_contains_equals<'c, C, V, E, M, F>(
    container: &'c C,
    value: V,
    message: M,
    factory: F,
) -> Result<&'c C, E>
where
    C: Container + ?Sized,
    C::Item: PartialEq<V>,
    M: MessageSupplier,
    F: FnOnce(Option<String>) -> E,
{
    let holds = container.position_of(|item| *item == value).is_none();
    evaluate(container, holds, message, factory)
}

/// Like [`require_not_contains_equals`], with the message built from the
/// index of the first offending element.
///
/// # Examples
///
/// ```rust
/// use term_conditions::conditions::require_not_contains_equals_with;
/// use term_conditions::error::ConditionError;
///
/// let err = require_not_contains_equals_with(
///     &["a", "", "b", ""],
///     "",
///     |index| format!("blank entry at {index}"),
///     ConditionError::invalid_argument,
/// )
/// .unwrap_err();
/// assert_eq!(err.message(), Some("blank entry at 1"));
/// ```
pub fn require_not_contains_equals_with<'c, C, V, E, D, F>(
    container: &'c C,
    value: V,
    describe: D,
    factory: F,
) -> Result<&'c C, E>
where
    C: Container + ?Sized,
    C::Item: PartialEq<V>,
    D: FnOnce(usize) -> String,
    F: FnOnce(Option<String>) -> E,
{
    let found = container.position_of(|item| *item == value);
    evaluate_with(container, found.is_none(), |_| found.map(describe), factory)
}

/// Requires an element that is the same object as `value` (see [`Identity`]).
pub fn require_contains_same<'c, C, E, M, F>(
    container: &'c C,
    value: C::Item,
    message: M,
    factory: F,
) -> Result<&'c C, E>
where
    C: Container + ?Sized,
    C::Item: Identity,
    M: MessageSupplier,
    F: FnOnce(Option<String>) -> E,
{
    let holds = container.position_of(|item| item.is_same(&value)).is_some();
    evaluate(container, holds, message, factory)
}

/// Like [`require_contains_same`], with the message built from the container
/// and the missing value.
pub fn require_contains_same_with<'c, C, E, D, F>(
    container: &'c C,
    value: C::Item,
    describe: D,
    factory: F,
) -> Result<&'c C, E>
where
    C: Container + ?Sized,
    C::Item: Identity,
    D: FnOnce(&C, &C::Item) -> String,
    F: FnOnce(Option<String>) -> E,
{
    let holds = container.position_of(|item| item.is_same(&value)).is_some();
    evaluate_with(container, holds, |c| Some(describe(*c, &value)), factory)
}

/// Requires no element that is the same object as `value`.
pub fn require_not_contains_same<'c, C, E, M, F>(
    container: &'c C,
    value: C::Item,
    message: M,
    factory: F,
) -> Result<&'c C, E>
where
    C: Container + ?Sized,
    C::Item: Identity,
    M: MessageSupplier,
    F: FnOnce(Option<String>) -> E,
{
    let holds = container.position_of(|item| item.is_same(&value)).is_none();
    evaluate(container, holds, message, factory)
}

/// Like [`require_not_contains_same`], with the message built from the index
/// of the first offending element.
pub fn require_not_contains_same_with<'c, C, E, D, F>(
    container: &'c C,
    value: C::Item,
    describe: D,
    factory: F,
) -> Result<&'c C, E>
where
    C: Container + ?Sized,
    C::Item: Identity,
    D: FnOnce(usize) -> String,
    F: FnOnce(Option<String>) -> E,
{
    let found = container.position_of(|item| item.is_same(&value));
    evaluate_with(container, found.is_none(), |_| found.map(describe), factory)
}

/// Index of the first position where two sequences differ.
///
/// When one sequence is a prefix of the other, they differ at the length of
/// the shorter one.
fn first_mismatch<T, U>(actual: &[T], expected: &[U]) -> Option<usize>
where
    T: PartialEq<U>,
{
    actual
        .iter()
        .zip(expected)
        .position(|(a, e)| a != e)
        .or_else(|| (actual.len() != expected.len()).then(|| actual.len().min(expected.len())))
}

/// Requires two sequences to be equal element by element.
pub fn require_elements_equal<'a, T, U, E, M, F>(
    actual: &'a [T],
    expected: &[U],
    message: M,
    factory: F,
) -> Result<&'a [T], E>
where
    T: PartialEq<U>,
    M: MessageSupplier,
    F: FnOnce(Option<String>) -> E,
{
    let holds = first_mismatch(actual, expected).is_none();
    evaluate(actual, holds, message, factory)
}

/// Like [`require_elements_equal`], with the message built from the index
/// of the first difference.
pub fn require_elements_equal_with<'a, T, U, E, D, F>(
    actual: &'a [T],
    expected: &[U],
    describe: D,
    factory: F,
) -> Result<&'a [T], E>
where
    T: PartialEq<U>,
    D: FnOnce(usize) -> String,
    F: FnOnce(Option<String>) -> E,
{
    let mismatch = first_mismatch(actual, expected);
    evaluate_with(actual, mismatch.is_none(), |_| mismatch.map(describe), factory)
}
