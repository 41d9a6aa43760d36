//! Facades that bind an exception factory once.
//!
//! A [`Validator`] knows how to turn an optional message into its error type.
//! Every check of [`crate::conditions`] is then available as a method that
//! uses that binding, so a facade only has to decide *which* error it raises.
//! [`Arguments`](crate::arguments::Arguments) always raises
//! `InvalidArgument`; a [`Guard`](crate::guard::Guard) raises whatever its
//! factory produces.

use crate::conditions::{self, ComparisonResult, Container, Identity};
use crate::core::MessageSupplier;
use std::cmp::Ordering;

/// A check facade with a fixed exception factory.
///
/// Implementors only provide [`Validator::raise`]; all `require_*` methods
/// forward to the matching function in [`crate::conditions`].
///
/// # Examples
///
/// ```rust
/// use term_conditions::prelude::*;
///
/// #[derive(Debug, PartialEq)]
/// struct QueueFull(Option<String>);
///
/// struct QueueChecks;
///
/// impl Validator for QueueChecks {
///     type Error = QueueFull;
///
///     fn raise(&self, message: Option<String>) -> QueueFull {
///         QueueFull(message)
///     }
/// }
///
/// assert_eq!(QueueChecks.require_less(3, 8, "queue is full"), Ok(3));
/// assert_eq!(
///     QueueChecks.require_less(8, 8, NoMessage),
///     Err(QueueFull(None))
/// );
/// ```
pub trait Validator {
    /// The error produced by a violated condition.
    type Error;

    /// Builds the error for a violated condition.
    ///
    /// Called exactly once per failed check, never on success.
    fn raise(&self, message: Option<String>) -> Self::Error;

    // Presence and truth

    /// Requires `condition` to be `true`. See [`conditions::require_true`].
    fn require_true<M>(&self, condition: bool, message: M) -> Result<bool, Self::Error>
    where
        M: MessageSupplier,
    {
        conditions::require_true(condition, message, |m| self.raise(m))
    }

    /// Requires `condition` to be `false`. See [`conditions::require_false`].
    fn require_false<M>(&self, condition: bool, message: M) -> Result<bool, Self::Error>
    where
        M: MessageSupplier,
    {
        conditions::require_false(condition, message, |m| self.raise(m))
    }

    /// Unwraps a present subject. See [`conditions::require_not_null`].
    fn require_not_null<T, M>(&self, subject: Option<T>, message: M) -> Result<T, Self::Error>
    where
        M: MessageSupplier,
    {
        conditions::require_not_null(subject, message, |m| self.raise(m))
    }

    /// Requires the subject to be absent. See [`conditions::require_null`].
    fn require_null<T, M>(&self, subject: Option<T>, message: M) -> Result<Option<T>, Self::Error>
    where
        M: MessageSupplier,
    {
        conditions::require_null(subject, message, |m| self.raise(m))
    }

    /// Like [`Validator::require_null`], describing the unexpected value.
    fn require_null_with<T, D>(&self, subject: Option<T>, describe: D) -> Result<Option<T>, Self::Error>
    where
        D: FnOnce(&T) -> String,
    {
        conditions::require_null_with(subject, describe, |m| self.raise(m))
    }

    // Equality and identity

    /// See [`conditions::require_equal`].
    fn require_equal<T, U, M>(&self, actual: T, expected: U, message: M) -> Result<T, Self::Error>
    where
        T: PartialEq<U>,
        M: MessageSupplier,
    {
        conditions::require_equal(actual, expected, message, |m| self.raise(m))
    }

    /// See [`conditions::require_equal_with`].
    fn require_equal_with<T, U, D>(&self, actual: T, expected: U, describe: D) -> Result<T, Self::Error>
    where
        T: PartialEq<U>,
        D: FnOnce(&T, &U) -> String,
    {
        conditions::require_equal_with(actual, expected, describe, |m| self.raise(m))
    }

    /// See [`conditions::require_not_equal`].
    fn require_not_equal<T, U, M>(&self, actual: T, unexpected: U, message: M) -> Result<T, Self::Error>
    where
        T: PartialEq<U>,
        M: MessageSupplier,
    {
        conditions::require_not_equal(actual, unexpected, message, |m| self.raise(m))
    }

    /// See [`conditions::require_not_equal_with`].
    fn require_not_equal_with<T, U, D>(
        &self,
        actual: T,
        unexpected: U,
        describe: D,
    ) -> Result<T, Self::Error>
    where
        T: PartialEq<U>,
        D: FnOnce(&T, &U) -> String,
    {
        conditions::require_not_equal_with(actual, unexpected, describe, |m| self.raise(m))
    }

    /// Requires both subjects to have the same [`Identity`].
    ///
    /// See [`conditions::require_same`].
    fn require_same<T, M>(&self, actual: T, expected: T, message: M) -> Result<T, Self::Error>
    where
        T: Identity,
        M: MessageSupplier,
    {
        conditions::require_same(actual, expected, message, |m| self.raise(m))
    }

    /// See [`conditions::require_same_with`].
    fn require_same_with<T, D>(&self, actual: T, expected: T, describe: D) -> Result<T, Self::Error>
    where
        T: Identity,
        D: FnOnce(&T, &T) -> String,
    {
        conditions::require_same_with(actual, expected, describe, |m| self.raise(m))
    }

    /// See [`conditions::require_not_same`].
    fn require_not_same<T, M>(&self, actual: T, unexpected: T, message: M) -> Result<T, Self::Error>
    where
        T: Identity,
        M: MessageSupplier,
    {
        conditions::require_not_same(actual, unexpected, message, |m| self.raise(m))
    }

    /// See [`conditions::require_not_same_with`].
    fn require_not_same_with<T, D>(&self, actual: T, unexpected: T, describe: D) -> Result<T, Self::Error>
    where
        T: Identity,
        D: FnOnce(&T, &T) -> String,
    {
        conditions::require_not_same_with(actual, unexpected, describe, |m| self.raise(m))
    }

    // Ordering

    /// Requires `actual > bound`. See [`conditions::require_greater`].
    fn require_greater<T, M>(&self, actual: T, bound: T, message: M) -> Result<T, Self::Error>
    where
        T: PartialOrd,
        M: MessageSupplier,
    {
        conditions::require_greater(actual, bound, message, |m| self.raise(m))
    }

    /// See [`conditions::require_greater_with`].
    fn require_greater_with<T, D>(&self, actual: T, bound: T, describe: D) -> Result<T, Self::Error>
    where
        T: PartialOrd,
        D: FnOnce(&T, &T) -> String,
    {
        conditions::require_greater_with(actual, bound, describe, |m| self.raise(m))
    }

    /// Requires `actual > bound` under `comparator`. See [`conditions::require_greater_by`].
    fn require_greater_by<T, C, M>(
        &self,
        actual: T,
        bound: T,
        comparator: C,
        message: M,
    ) -> Result<T, Self::Error>
    where
        C: Fn(&T, &T) -> Ordering,
        M: MessageSupplier,
    {
        conditions::require_greater_by(actual, bound, comparator, message, |m| self.raise(m))
    }

    /// See [`conditions::require_greater_by_with`].
    fn require_greater_by_with<T, C, D>(
        &self,
        actual: T,
        bound: T,
        comparator: C,
        describe: D,
    ) -> Result<T, Self::Error>
    where
        C: Fn(&T, &T) -> Ordering,
        D: FnOnce(&T, &T) -> String,
    {
        conditions::require_greater_by_with(actual, bound, comparator, describe, |m| self.raise(m))
    }

    /// Requires a positive comparison result. See [`conditions::require_greater_result`].
    fn require_greater_result<R, M>(&self, result: R, message: M) -> Result<R, Self::Error>
    where
        R: ComparisonResult,
        M: MessageSupplier,
    {
        conditions::require_greater_result(result, message, |m| self.raise(m))
    }

    /// Requires `actual < bound`. See [`conditions::require_less`].
    fn require_less<T, M>(&self, actual: T, bound: T, message: M) -> Result<T, Self::Error>
    where
        T: PartialOrd,
        M: MessageSupplier,
    {
        conditions::require_less(actual, bound, message, |m| self.raise(m))
    }

    /// See [`conditions::require_less_with`].
    fn require_less_with<T, D>(&self, actual: T, bound: T, describe: D) -> Result<T, Self::Error>
    where
        T: PartialOrd,
        D: FnOnce(&T, &T) -> String,
    {
        conditions::require_less_with(actual, bound, describe, |m| self.raise(m))
    }

    /// See [`conditions::require_less_by`].
    fn require_less_by<T, C, M>(
        &self,
        actual: T,
        bound: T,
        comparator: C,
        message: M,
    ) -> Result<T, Self::Error>
    where
        C: Fn(&T, &T) -> Ordering,
        M: MessageSupplier,
    {
        conditions::require_less_by(actual, bound, comparator, message, |m| self.raise(m))
    }

    /// See [`conditions::require_less_by_with`].
    fn require_less_by_with<T, C, D>(
        &self,
        actual: T,
        bound: T,
        comparator: C,
        describe: D,
    ) -> Result<T, Self::Error>
    where
        C: Fn(&T, &T) -> Ordering,
        D: FnOnce(&T, &T) -> String,
    {
        conditions::require_less_by_with(actual, bound, comparator, describe, |m| self.raise(m))
    }

    /// See [`conditions::require_less_result`].
    fn require_less_result<R, M>(&self, result: R, message: M) -> Result<R, Self::Error>
    where
        R: ComparisonResult,
        M: MessageSupplier,
    {
        conditions::require_less_result(result, message, |m| self.raise(m))
    }

    /// Requires `actual >= bound`. See [`conditions::require_greater_or_same`].
    fn require_greater_or_same<T, M>(&self, actual: T, bound: T, message: M) -> Result<T, Self::Error>
    where
        T: PartialOrd,
        M: MessageSupplier,
    {
        conditions::require_greater_or_same(actual, bound, message, |m| self.raise(m))
    }

    /// See [`conditions::require_greater_or_same_with`].
    fn require_greater_or_same_with<T, D>(
        &self,
        actual: T,
        bound: T,
        describe: D,
    ) -> Result<T, Self::Error>
    where
        T: PartialOrd,
        D: FnOnce(&T, &T) -> String,
    {
        conditions::require_greater_or_same_with(actual, bound, describe, |m| self.raise(m))
    }

    /// See [`conditions::require_greater_or_same_by`].
    fn require_greater_or_same_by<T, C, M>(
        &self,
        actual: T,
        bound: T,
        comparator: C,
        message: M,
    ) -> Result<T, Self::Error>
    where
        C: Fn(&T, &T) -> Ordering,
        M: MessageSupplier,
    {
        conditions::require_greater_or_same_by(actual, bound, comparator, message, |m| {
            self.raise(m)
        })
    }

    /// See [`conditions::require_greater_or_same_by_with`].
    fn require_greater_or_same_by_with<T, C, D>(
        &self,
        actual: T,
        bound: T,
        comparator: C,
        describe: D,
    ) -> Result<T, Self::Error>
    where
        C: Fn(&T, &T) -> Ordering,
        D: FnOnce(&T, &T) -> String,
    {
        conditions::require_greater_or_same_by_with(actual, bound, comparator, describe, |m| {
            self.raise(m)
        })
    }

    /// See [`conditions::require_greater_or_same_result`].
    fn require_greater_or_same_result<R, M>(&self, result: R, message: M) -> Result<R, Self::Error>
    where
        R: ComparisonResult,
        M: MessageSupplier,
    {
        conditions::require_greater_or_same_result(result, message, |m| self.raise(m))
    }

    /// Requires `actual <= bound`. See [`conditions::require_less_or_same`].
    fn require_less_or_same<T, M>(&self, actual: T, bound: T, message: M) -> Result<T, Self::Error>
    where
        T: PartialOrd,
        M: MessageSupplier,
    {
        conditions::require_less_or_same(actual, bound, message, |m| self.raise(m))
    }

    /// See [`conditions::require_less_or_same_with`].
    fn require_less_or_same_with<T, D>(&self, actual: T, bound: T, describe: D) -> Result<T, Self::Error>
    where
        T: PartialOrd,
        D: FnOnce(&T, &T) -> String,
    {
        conditions::require_less_or_same_with(actual, bound, describe, |m| self.raise(m))
    }

    /// See [`conditions::require_less_or_same_by`].
    fn require_less_or_same_by<T, C, M>(
        &self,
        actual: T,
        bound: T,
        comparator: C,
        message: M,
    ) -> Result<T, Self::Error>
    where
        C: Fn(&T, &T) -> Ordering,
        M: MessageSupplier,
    {
        conditions::require_less_or_same_by(actual, bound, comparator, message, |m| self.raise(m))
    }

    /// See [`conditions::require_less_or_same_by_with`].
    fn require_less_or_same_by_with<T, C, D>(
        &self,
        actual: T,
        bound: T,
        comparator: C,
        describe: D,
    ) -> Result<T, Self::Error>
    where
        C: Fn(&T, &T) -> Ordering,
        D: FnOnce(&T, &T) -> String,
    {
        conditions::require_less_or_same_by_with(actual, bound, comparator, describe, |m| {
            self.raise(m)
        })
    }

    /// See [`conditions::require_less_or_same_result`].
    fn require_less_or_same_result<R, M>(&self, result: R, message: M) -> Result<R, Self::Error>
    where
        R: ComparisonResult,
        M: MessageSupplier,
    {
        conditions::require_less_or_same_result(result, message, |m| self.raise(m))
    }

    // Ranges

    /// Requires `min <= value <= max`. See [`conditions::require_in_range_inclusive`].
    fn require_in_range_inclusive<T, M>(&self, value: T, min: T, max: T, message: M) -> Result<T, Self::Error>
    where
        T: PartialOrd,
        M: MessageSupplier,
    {
        conditions::require_in_range_inclusive(value, min, max, message, |m| self.raise(m))
    }

    /// See [`conditions::require_in_range_inclusive_with`].
    fn require_in_range_inclusive_with<T, D>(
        &self,
        value: T,
        min: T,
        max: T,
        describe: D,
    ) -> Result<T, Self::Error>
    where
        T: PartialOrd,
        D: FnOnce(&T, &T, &T) -> String,
    {
        conditions::require_in_range_inclusive_with(value, min, max, describe, |m| self.raise(m))
    }

    /// See [`conditions::require_in_range_inclusive_by`].
    fn require_in_range_inclusive_by<T, C, M>(
        &self,
        value: T,
        min: T,
        max: T,
        comparator: C,
        message: M,
    ) -> Result<T, Self::Error>
    where
        C: Fn(&T, &T) -> Ordering,
        M: MessageSupplier,
    {
        conditions::require_in_range_inclusive_by(value, min, max, comparator, message, |m| {
            self.raise(m)
        })
    }

    /// See [`conditions::require_in_range_inclusive_by_with`].
    fn require_in_range_inclusive_by_with<T, C, D>(
        &self,
        value: T,
        min: T,
        max: T,
        comparator: C,
        describe: D,
    ) -> Result<T, Self::Error>
    where
        C: Fn(&T, &T) -> Ordering,
        D: FnOnce(&T, &T, &T) -> String,
    {
        conditions::require_in_range_inclusive_by_with(value, min, max, comparator, describe, |m| {
            self.raise(m)
        })
    }

    /// Requires `min < value < max`. See [`conditions::require_in_range_exclusive`].
    fn require_in_range_exclusive<T, M>(&self, value: T, min: T, max: T, message: M) -> Result<T, Self::Error>
    where
        T: PartialOrd,
        M: MessageSupplier,
    {
        conditions::require_in_range_exclusive(value, min, max, message, |m| self.raise(m))
    }

    /// See [`conditions::require_in_range_exclusive_with`].
    fn require_in_range_exclusive_with<T, D>(
        &self,
        value: T,
        min: T,
        max: T,
        describe: D,
    ) -> Result<T, Self::Error>
    where
        T: PartialOrd,
        D: FnOnce(&T, &T, &T) -> String,
    {
        conditions::require_in_range_exclusive_with(value, min, max, describe, |m| self.raise(m))
    }

    /// See [`conditions::require_in_range_exclusive_by`].
    fn require_in_range_exclusive_by<T, C, M>(
        &self,
        value: T,
        min: T,
        max: T,
        comparator: C,
        message: M,
    ) -> Result<T, Self::Error>
    where
        C: Fn(&T, &T) -> Ordering,
        M: MessageSupplier,
    {
        conditions::require_in_range_exclusive_by(value, min, max, comparator, message, |m| {
            self.raise(m)
        })
    }

    /// See [`conditions::require_in_range_exclusive_by_with`].
    fn require_in_range_exclusive_by_with<T, C, D>(
        &self,
        value: T,
        min: T,
        max: T,
        comparator: C,
        describe: D,
    ) -> Result<T, Self::Error>
    where
        C: Fn(&T, &T) -> Ordering,
        D: FnOnce(&T, &T, &T) -> String,
    {
        conditions::require_in_range_exclusive_by_with(value, min, max, comparator, describe, |m| {
            self.raise(m)
        })
    }

    /// Requires `min <= value < max`.
    ///
    /// See [`conditions::require_in_range_exclusive_maximum`].
    fn require_in_range_exclusive_maximum<T, M>(
        &self,
        value: T,
        min: T,
        max: T,
        message: M,
    ) -> Result<T, Self::Error>
    where
        T: PartialOrd,
        M: MessageSupplier,
    {
        conditions::require_in_range_exclusive_maximum(value, min, max, message, |m| self.raise(m))
    }

    /// See [`conditions::require_in_range_exclusive_maximum_with`].
    fn require_in_range_exclusive_maximum_with<T, D>(
        &self,
        value: T,
        min: T,
        max: T,
        describe: D,
    ) -> Result<T, Self::Error>
    where
        T: PartialOrd,
        D: FnOnce(&T, &T, &T) -> String,
    {
        conditions::require_in_range_exclusive_maximum_with(value, min, max, describe, |m| {
            self.raise(m)
        })
    }

    /// See [`conditions::require_in_range_exclusive_maximum_by`].
    fn require_in_range_exclusive_maximum_by<T, C, M>(
        &self,
        value: T,
        min: T,
        max: T,
        comparator: C,
        message: M,
    ) -> Result<T, Self::Error>
    where
        C: Fn(&T, &T) -> Ordering,
        M: MessageSupplier,
    {
        conditions::require_in_range_exclusive_maximum_by(
            value,
            min,
            max,
            comparator,
            message,
            |m| self.raise(m),
        )
    }

    /// See [`conditions::require_in_range_exclusive_maximum_by_with`].
    fn require_in_range_exclusive_maximum_by_with<T, C, D>(
        &self,
        value: T,
        min: T,
        max: T,
        comparator: C,
        describe: D,
    ) -> Result<T, Self::Error>
    where
        C: Fn(&T, &T) -> Ordering,
        D: FnOnce(&T, &T, &T) -> String,
    {
        conditions::require_in_range_exclusive_maximum_by_with(
            value,
            min,
            max,
            comparator,
            describe,
            |m| self.raise(m),
        )
    }

    // Emptiness and containment

    /// See [`conditions::require_empty`].
    fn require_empty<'c, C, M>(&self, container: &'c C, message: M) -> Result<&'c C, Self::Error>
    where
        C: Container + ?Sized,
        M: MessageSupplier,
    {
        conditions::require_empty(container, message, |m| self.raise(m))
    }

    /// See [`conditions::require_empty_with`].
    fn require_empty_with<'c, C, D>(&self, container: &'c C, describe: D) -> Result<&'c C, Self::Error>
    where
        C: Container + ?Sized,
        D: FnOnce(&C) -> String,
    {
        conditions::require_empty_with(container, describe, |m| self.raise(m))
    }

    /// See [`conditions::require_not_empty`].
    fn require_not_empty<'c, C, M>(&self, container: &'c C, message: M) -> Result<&'c C, Self::Error>
    where
        C: Container + ?Sized,
        M: MessageSupplier,
    {
        conditions::require_not_empty(container, message, |m| self.raise(m))
    }

    /// See [`conditions::require_not_empty_with`].
    fn require_not_empty_with<'c, C, D>(&self, container: &'c C, describe: D) -> Result<&'c C, Self::Error>
    where
        C: Container + ?Sized,
        D: FnOnce(&C) -> String,
    {
        conditions::require_not_empty_with(container, describe, |m| self.raise(m))
    }

    /// Requires an element equal to `value`. See [`conditions::require_contains_equals`].
    fn require_contains_equals<'c, C, V, M>(
        &self,
        container: &'c C,
        value: V,
        message: M,
    ) -> Result<&'c C, Self::Error>
    where
        C: Container + ?Sized,
        C::Item: PartialEq<V>,
        M: MessageSupplier,
    {
        conditions::require_contains_equals(container, value, message, |m| self.raise(m))
    }

    /// See [`conditions::require_contains_equals_with`].
    fn require_contains_equals_with<'c, C, V, D>(
        &self,
        container: &'c C,
        value: V,
        describe: D,
    ) -> Result<&'c C, Self::Error>
    where
        C: Container + ?Sized,
        C::Item: PartialEq<V>,
        D: FnOnce(&C, &V) -> String,
    {
        conditions::require_contains_equals_with(container, value, describe, |m| self.raise(m))
    }

    /// See [`conditions::require_not_contains_equals`].
    fn require_not_contains_equals<'c, C, V, M>(
        &self,
        container: &'c C,
        value: V,
        message: M,
    ) -> Result<&'c C, Self::Error>
    where
        C: Container + ?Sized,
        C::Item: PartialEq<V>,
        M: MessageSupplier,
    {
        conditions::require_not_contains_equals(container, value, message, |m| self.raise(m))
    }

    /// The message closure receives the index of the first match.
    ///
    /// See [`conditions::require_not_contains_equals_with`].
    fn require_not_contains_equals_with<'c, C, V, D>(
        &self,
        container: &'c C,
        value: V,
        describe: D,
    ) -> Result<&'c C, Self::Error>
    where
        C: Container + ?Sized,
        C::Item: PartialEq<V>,
        D: FnOnce(usize) -> String,
    {
        conditions::require_not_contains_equals_with(container, value, describe, |m| self.raise(m))
    }

    /// Requires an element with the same [`Identity`] as `value`.
    ///
    /// See [`conditions::require_contains_same`].
    fn require_contains_same<'c, C, M>(
        &self,
        container: &'c C,
        value: C::Item,
        message: M,
    ) -> Result<&'c C, Self::Error>
    where
        C: Container + ?Sized,
        C::Item: Identity,
        M: MessageSupplier,
    {
        conditions::require_contains_same(container, value, message, |m| self.raise(m))
    }

    /// See [`conditions::require_contains_same_with`].
    fn require_contains_same_with<'c, C, D>(
        &self,
        container: &'c C,
        value: C::Item,
        describe: D,
    ) -> Result<&'c C, Self::Error>
    where
        C: Container + ?Sized,
        C::Item: Identity,
        D: FnOnce(&C, &C::Item) -> String,
    {
        conditions::require_contains_same_with(container, value, describe, |m| self.raise(m))
    }

    /// See [`conditions::require_not_contains_same`].
    fn require_not_contains_same<'c, C, M>(
        &self,
        container: &'c C,
        value: C::Item,
        message: M,
    ) -> Result<&'c C, Self::Error>
    where
        C: Container + ?Sized,
        C::Item: Identity,
        M: MessageSupplier,
    {
        conditions::require_not_contains_same(container, value, message, |m| self.raise(m))
    }

    /// See [`conditions::require_not_contains_same_with`].
    fn require_not_contains_same_with<'c, C, D>(
        &self,
        container: &'c C,
        value: C::Item,
        describe: D,
    ) -> Result<&'c C, Self::Error>
    where
        C: Container + ?Sized,
        C::Item: Identity,
        D: FnOnce(usize) -> String,
    {
        conditions::require_not_contains_same_with(container, value, describe, |m| self.raise(m))
    }

    /// Compares two slices element by element. See [`conditions::require_elements_equal`].
    fn require_elements_equal<'a, T, U, M>(
        &self,
        actual: &'a [T],
        expected: &[U],
        message: M,
    ) -> Result<&'a [T], Self::Error>
    where
        T: PartialEq<U>,
        M: MessageSupplier,
    {
        conditions::require_elements_equal(actual, expected, message, |m| self.raise(m))
    }

    /// See [`conditions::require_elements_equal_with`].
    fn require_elements_equal_with<'a, T, U, D>(
        &self,
        actual: &'a [T],
        expected: &[U],
        describe: D,
    ) -> Result<&'a [T], Self::Error>
    where
        T: PartialEq<U>,
        D: FnOnce(usize) -> String,
    {
        conditions::require_elements_equal_with(actual, expected, describe, |m| self.raise(m))
    }
}
