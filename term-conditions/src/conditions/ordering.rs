//! Ordering and range checks.
//!
//! Each check exists in three flavours:
//!
//! - natural ordering (`PartialOrd`), e.g. [`require_greater`];
//! - an explicit comparator, e.g. [`require_greater_by`], which always takes
//!   precedence over the natural ordering;
//! - an already computed comparison result, e.g. [`require_greater_result`].
//!
//! A check fails only when the comparison positively shows the violation:
//! `require_greater` fails when `actual <= bound`. A pair the natural
//! ordering cannot compare (a `NaN` float) therefore passes every check. Use a
//! `_by` variant with a total order such as `f64::total_cmp` to reject it.

use crate::core::{evaluate, evaluate_with, MessageSupplier};
use std::cmp::Ordering;

/// A three-way comparison result computed elsewhere.
///
/// Signed integers follow the comparator convention: negative is less,
/// zero is equal, positive is greater.
pub trait ComparisonResult {
    /// Returns the ordering this result stands for.
    fn ordering(&self) -> Ordering;
}

impl ComparisonResult for Ordering {
    fn ordering(&self) -> Ordering {
        *self
    }
}

macro_rules! signed_comparison_result {
    ($($t:ty),* $(,)?) => {
        $(
            impl ComparisonResult for $t {
                fn ordering(&self) -> Ordering {
                    self.cmp(&0)
                }
            }
        )*
    };
}

signed_comparison_result!(i8, i16, i32, i64, i128, isize);

/// Boundary policy of a range check.
///
/// The three policies are deliberately separate; none is expressed through
/// another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeBounds {
    /// `min <= x <= max`
    Inclusive,
    /// `min < x < max`
    Exclusive,
    /// `min <= x < max`
    ExclusiveMaximum,
}

impl RangeBounds {
    /// Returns true when the orderings of `x` against `min` and `max` place
    /// it outside the range.
    ///
    /// An incomparable ordering (`None`) never places `x` outside a bound.
    pub fn excludes(&self, to_min: Option<Ordering>, to_max: Option<Ordering>) -> bool {
        use Ordering::{Equal, Greater, Less};

        match self {
            RangeBounds::Inclusive => {
                matches!(to_min, Some(Less)) || matches!(to_max, Some(Greater))
            }
            RangeBounds::Exclusive => {
                matches!(to_min, Some(Less | Equal)) || matches!(to_max, Some(Greater | Equal))
            }
            RangeBounds::ExclusiveMaximum => {
                matches!(to_min, Some(Less)) || matches!(to_max, Some(Greater | Equal))
            }
        }
    }

    /// Returns true unless [`RangeBounds::excludes`] does.
    pub fn contains(&self, to_min: Option<Ordering>, to_max: Option<Ordering>) -> bool {
        !self.excludes(to_min, to_max)
    }
}

fn greater_fails(ordering: Option<Ordering>) -> bool {
    matches!(ordering, Some(Ordering::Less | Ordering::Equal))
}

fn less_fails(ordering: Option<Ordering>) -> bool {
    matches!(ordering, Some(Ordering::Greater | Ordering::Equal))
}

fn greater_or_same_fails(ordering: Option<Ordering>) -> bool {
    matches!(ordering, Some(Ordering::Less))
}

fn less_or_same_fails(ordering: Option<Ordering>) -> bool {
    matches!(ordering, Some(Ordering::Greater))
}

macro_rules! ordering_checks {
    ($(
        $(#[$doc:meta])*
        ($natural:ident, $natural_with:ident, $by:ident, $by_with:ident, $result:ident, $fails:ident)
    ),* $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $natural<T, E, M, F>(actual: T, bound: T, message: M, factory: F) -> Result<T, E>
            where
                T: PartialOrd,
                M: MessageSupplier,
                F: FnOnce(Option<String>) -> E,
            {
                let holds = !$fails(actual.partial_cmp(&bound));
                evaluate(actual, holds, message, factory)
            }

            #[doc = concat!("Like [`", stringify!($natural), "`], with the message built from the value and the bound.")]
            pub fn $natural_with<T, E, D, F>(actual: T, bound: T, describe: D, factory: F) -> Result<T, E>
            where
                T: PartialOrd,
                D: FnOnce(&T, &T) -> String,
                F: FnOnce(Option<String>) -> E,
            {
                let holds = !$fails(actual.partial_cmp(&bound));
                evaluate_with(actual, holds, |a| Some(describe(a, &bound)), factory)
            }

            #[doc = concat!("Like [`", stringify!($natural), "`], ordered by `comparator` instead of `PartialOrd`.")]
            pub fn $by<T, C, E, M, F>(
                actual: T,
                bound: T,
                comparator: C,
                message: M,
                factory: F,
            ) -> Result<T, E>
            where
                C: Fn(&T, &T) -> Ordering,
                M: MessageSupplier,
                F: FnOnce(Option<String>) -> E,
            {
                let holds = !$fails(Some(comparator(&actual, &bound)));
                evaluate(actual, holds, message, factory)
            }

            #[doc = concat!("Like [`", stringify!($by), "`], with the message built from the value and the bound.")]
            pub fn $by_with<T, C, E, D, F>(
                actual: T,
                bound: T,
                comparator: C,
                describe: D,
                factory: F,
            ) -> Result<T, E>
            where
                C: Fn(&T, &T) -> Ordering,
                D: FnOnce(&T, &T) -> String,
                F: FnOnce(Option<String>) -> E,
            {
                let holds = !$fails(Some(comparator(&actual, &bound)));
                evaluate_with(actual, holds, |a| Some(describe(a, &bound)), factory)
            }

            #[doc = concat!("Like [`", stringify!($natural), "`], applied to a precomputed comparison of the value against its bound.")]
            pub fn $result<R, E, M, F>(result: R, message: M, factory: F) -> Result<R, E>
            where
                R: ComparisonResult,
                M: MessageSupplier,
                F: FnOnce(Option<String>) -> E,
            {
                let holds = !$fails(Some(result.ordering()));
                evaluate(result, holds, message, factory)
            }
        )*
    };
}

ordering_checks!(
    /// Requires `actual > bound`; fails when `actual <= bound`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use term_conditions::conditions::require_greater;
    /// use term_conditions::core::NoMessage;
    /// use term_conditions::error::ConditionError;
    ///
    /// assert!(require_greater(6, 5, NoMessage, ConditionError::invalid_state).is_ok());
    /// assert!(require_greater(5, 5, NoMessage, ConditionError::invalid_state).is_err());
    /// ```
    (
        require_greater,
        require_greater_with,
        require_greater_by,
        require_greater_by_with,
        require_greater_result,
        greater_fails
    ),
    /// Requires `actual < bound`; fails when `actual >= bound`.
    (
        require_less,
        require_less_with,
        require_less_by,
        require_less_by_with,
        require_less_result,
        less_fails
    ),
    /// Requires `actual >= bound`; fails when `actual < bound`.
    (
        require_greater_or_same,
        require_greater_or_same_with,
        require_greater_or_same_by,
        require_greater_or_same_by_with,
        require_greater_or_same_result,
        greater_or_same_fails
    ),
    /// Requires `actual <= bound`; fails when `actual > bound`.
    (
        require_less_or_same,
        require_less_or_same_with,
        require_less_or_same_by,
        require_less_or_same_by_with,
        require_less_or_same_result,
        less_or_same_fails
    ),
);

macro_rules! range_checks {
    ($(
        $(#[$doc:meta])*
        ($natural:ident, $natural_with:ident, $by:ident, $by_with:ident, $bounds:expr)
    ),* $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $natural<T, E, M, F>(value: T, min: T, max: T, message: M, factory: F) -> Result<T, E>
            where
                T: PartialOrd,
                M: MessageSupplier,
                F: FnOnce(Option<String>) -> E,
            {
                let holds = !$bounds.excludes(value.partial_cmp(&min), value.partial_cmp(&max));
                evaluate(value, holds, message, factory)
            }

            #[doc = concat!("Like [`", stringify!($natural), "`], with the message built from the value and both bounds.")]
            pub fn $natural_with<T, E, D, F>(value: T, min: T, max: T, describe: D, factory: F) -> Result<T, E>
            where
                T: PartialOrd,
                D: FnOnce(&T, &T, &T) -> String,
                F: FnOnce(Option<String>) -> E,
            {
                let holds = !$bounds.excludes(value.partial_cmp(&min), value.partial_cmp(&max));
                evaluate_with(value, holds, |v| Some(describe(v, &min, &max)), factory)
            }

            #[doc = concat!("Like [`", stringify!($natural), "`], ordered by `comparator` instead of `PartialOrd`.")]
            pub fn $by<T, C, E, M, F>(
                value: T,
                min: T,
                max: T,
                comparator: C,
                message: M,
                factory: F,
            ) -> Result<T, E>
            where
                C: Fn(&T, &T) -> Ordering,
                M: MessageSupplier,
                F: FnOnce(Option<String>) -> E,
            {
                let holds = !$bounds.excludes(
                    Some(comparator(&value, &min)),
                    Some(comparator(&value, &max)),
                );
                evaluate(value, holds, message, factory)
            }

            #[doc = concat!("Like [`", stringify!($by), "`], with the message built from the value and both bounds.")]
            pub fn $by_with<T, C, E, D, F>(
                value: T,
                min: T,
                max: T,
                comparator: C,
                describe: D,
                factory: F,
            ) -> Result<T, E>
            where
                C: Fn(&T, &T) -> Ordering,
                D: FnOnce(&T, &T, &T) -> String,
                F: FnOnce(Option<String>) -> E,
            {
                let holds = !$bounds.excludes(
                    Some(comparator(&value, &min)),
                    Some(comparator(&value, &max)),
                );
                evaluate_with(value, holds, |v| Some(describe(v, &min, &max)), factory)
            }
        )*
    };
}

range_checks!(
    /// Requires `min <= value <= max`; fails when `value < min` or `value > max`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use term_conditions::conditions::require_in_range_inclusive;
    /// use term_conditions::core::NoMessage;
    /// use term_conditions::error::ConditionError;
    ///
    /// for x in [1, 10] {
    ///     assert!(require_in_range_inclusive(x, 1, 10, NoMessage, ConditionError::invalid_state).is_ok());
    /// }
    /// for x in [0, 11] {
    ///     assert!(require_in_range_inclusive(x, 1, 10, NoMessage, ConditionError::invalid_state).is_err());
    /// }
    /// ```
    (
        require_in_range_inclusive,
        require_in_range_inclusive_with,
        require_in_range_inclusive_by,
        require_in_range_inclusive_by_with,
        RangeBounds::Inclusive
    ),
    /// Requires `min < value < max`; fails when `value <= min` or `value >= max`.
    (
        require_in_range_exclusive,
        require_in_range_exclusive_with,
        require_in_range_exclusive_by,
        require_in_range_exclusive_by_with,
        RangeBounds::Exclusive
    ),
    /// Requires `min <= value < max`; fails when `value < min` or `value >= max`.
    (
        require_in_range_exclusive_maximum,
        require_in_range_exclusive_maximum_with,
        require_in_range_exclusive_maximum_by,
        require_in_range_exclusive_maximum_by_with,
        RangeBounds::ExclusiveMaximum
    ),
);
