//! Property-based tests for ordering and range checks.
//!
//! Each property computes the expected outcome independently from plain
//! comparisons and checks the library agrees, for all three range boundary
//! policies, the natural order and comparator overloads.

use proptest::prelude::*;
use std::cmp::Ordering;
use term_conditions::prelude::{Arguments, NoMessage, RangeBounds, Validator};

fn ordered_bounds() -> impl Strategy<Value = (i64, i64)> {
    (any::<i64>(), any::<i64>()).prop_map(|(a, b)| if a <= b { (a, b) } else { (b, a) })
}

proptest! {
    #[test]
    fn prop_inclusive_range((min, max) in ordered_bounds(), value in any::<i64>()) {
        let expected = min <= value && value <= max;
        prop_assert_eq!(
            Arguments.require_in_range_inclusive(value, min, max, NoMessage).is_ok(),
            expected
        );
    }

    #[test]
    fn prop_exclusive_range((min, max) in ordered_bounds(), value in any::<i64>()) {
        let expected = min < value && value < max;
        prop_assert_eq!(
            Arguments.require_in_range_exclusive(value, min, max, NoMessage).is_ok(),
            expected
        );
    }

    #[test]
    fn prop_exclusive_maximum_range((min, max) in ordered_bounds(), value in any::<i64>()) {
        let expected = min <= value && value < max;
        prop_assert_eq!(
            Arguments.require_in_range_exclusive_maximum(value, min, max, NoMessage).is_ok(),
            expected
        );
    }

    #[test]
    fn prop_range_boundaries(min in -1_000i64..1_000, width in 1i64..1_000) {
        let max = min + width;
        for (bounds, at_min, at_max) in [
            (RangeBounds::Inclusive, true, true),
            (RangeBounds::Exclusive, false, false),
            (RangeBounds::ExclusiveMaximum, true, false),
        ] {
            prop_assert_eq!(
                bounds.contains(Some(min.cmp(&min)), Some(min.cmp(&max))),
                at_min
            );
            prop_assert_eq!(
                bounds.contains(Some(max.cmp(&min)), Some(max.cmp(&max))),
                at_max
            );
        }
    }

    #[test]
    fn prop_ordering_matches_operators(actual in any::<i32>(), bound in any::<i32>()) {
        prop_assert_eq!(Arguments.require_greater(actual, bound, NoMessage).is_ok(), actual > bound);
        prop_assert_eq!(Arguments.require_less(actual, bound, NoMessage).is_ok(), actual < bound);
        prop_assert_eq!(
            Arguments.require_greater_or_same(actual, bound, NoMessage).is_ok(),
            actual >= bound
        );
        prop_assert_eq!(
            Arguments.require_less_or_same(actual, bound, NoMessage).is_ok(),
            actual <= bound
        );
    }

    #[test]
    fn prop_comparator_is_authoritative(actual in any::<i32>(), bound in any::<i32>()) {
        let reversed = |a: &i32, b: &i32| b.cmp(a);
        prop_assert_eq!(
            Arguments.require_greater_by(actual, bound, reversed, NoMessage).is_ok(),
            actual < bound
        );
        prop_assert_eq!(
            Arguments.require_less_or_same_by(actual, bound, reversed, NoMessage).is_ok(),
            actual >= bound
        );
    }

    #[test]
    fn prop_comparison_results(result in any::<i64>()) {
        prop_assert_eq!(Arguments.require_greater_result(result, NoMessage).is_ok(), result > 0);
        prop_assert_eq!(Arguments.require_less_result(result, NoMessage).is_ok(), result < 0);
        prop_assert_eq!(
            Arguments.require_greater_or_same_result(result, NoMessage).is_ok(),
            result >= 0
        );
        prop_assert_eq!(
            Arguments.require_less_or_same_result(result, NoMessage).is_ok(),
            result <= 0
        );
    }

    #[test]
    fn prop_success_returns_subject(value in any::<i64>()) {
        prop_assert_eq!(Arguments.require_equal(value, value, NoMessage), Ok(value));
        prop_assert_eq!(
            Arguments.require_in_range_inclusive(value, i64::MIN, i64::MAX, NoMessage),
            Ok(value)
        );
    }

    #[test]
    fn prop_not_contains_reports_first_index(values in prop::collection::vec(0u8..4, 0..32)) {
        let expected = values.iter().position(|v| *v == 0);
        let result = Arguments.require_not_contains_equals_with(&values, 0, |i| i.to_string());
        match expected {
            Some(index) => {
                let index = index.to_string();
                let err = result.unwrap_err();
                prop_assert_eq!(err.message(), Some(index.as_str()));
            }
            None => prop_assert!(result.is_ok()),
        }
    }
}

#[test]
fn test_ordering_results_are_returned_unchanged() {
    assert_eq!(
        Arguments.require_greater_or_same_result(Ordering::Equal, NoMessage),
        Ok(Ordering::Equal)
    );
}
