//! The full set of checks, with the exception factory chosen per call.
//!
//! Every function takes the subject(s), a message and an exception factory,
//! and returns the subject unchanged when the condition holds. This is the
//! general (state) facade: the same predicates serve "invalid argument",
//! "invalid state", "assertion failed" or any caller-defined error, purely by
//! the factory passed in.
//!
//! ## Message forms
//!
//! - a literal (`"text"`, `String`) or [`NoMessage`](crate::core::NoMessage);
//! - a zero-argument closure, only called on failure;
//! - a closure over the checked values, through the `_with` variants.
//!
//! # Examples
//!
//! ```rust
//! use term_conditions::conditions::{require_not_empty, require_in_range_inclusive};
//!
//! #[derive(Debug)]
//! enum LedgerError {
//!     Corrupt(Option<String>),
//! }
//!
//! let entries: Vec<i64> = vec![120, 80];
//! let entries = require_not_empty(&entries, "ledger has no entries", LedgerError::Corrupt)?;
//! let balance: i64 = entries.iter().sum();
//! require_in_range_inclusive(balance, 0, 1_000, || format!("balance {balance}"), LedgerError::Corrupt)?;
//! # Ok::<(), LedgerError>(())
//! ```

pub mod container;
pub mod containment;
pub mod ordering;
pub mod scalar;

pub use container::{Container, Iterable};
pub use containment::{
    require_contains_equals, require_contains_equals_with, require_contains_same,
    require_contains_same_with, require_elements_equal, require_elements_equal_with,
    require_empty, require_empty_with, require_not_contains_equals,
    require_not_contains_equals_with, require_not_contains_same, require_not_contains_same_with,
    require_not_empty, require_not_empty_with,
};
pub use ordering::{
    require_greater, require_greater_by, require_greater_by_with, require_greater_or_same,
    require_greater_or_same_by, require_greater_or_same_by_with, require_greater_or_same_result,
    require_greater_or_same_with, require_greater_result, require_greater_with,
    require_in_range_exclusive, require_in_range_exclusive_by, require_in_range_exclusive_by_with,
    require_in_range_exclusive_maximum, require_in_range_exclusive_maximum_by,
    require_in_range_exclusive_maximum_by_with, require_in_range_exclusive_maximum_with,
    require_in_range_exclusive_with, require_in_range_inclusive, require_in_range_inclusive_by,
    require_in_range_inclusive_by_with, require_in_range_inclusive_with, require_less,
    require_less_by, require_less_by_with, require_less_or_same, require_less_or_same_by,
    require_less_or_same_by_with, require_less_or_same_result, require_less_or_same_with,
    require_less_result, require_less_with, ComparisonResult, RangeBounds,
};
pub use scalar::{
    require_equal, require_equal_with, require_false, require_not_equal, require_not_equal_with,
    require_not_null, require_not_same, require_not_same_with, require_null, require_null_with,
    require_same, require_same_with, require_true, Identity,
};
