//! Prelude for commonly used types and traits in term-conditions.

pub use crate::arguments::Arguments;
pub use crate::conditions::{ComparisonResult, Container, Identity, Iterable, RangeBounds};
pub use crate::core::{ConditionKind, MessageSupplier, NoMessage};
pub use crate::error::{ConditionError, Result};
pub use crate::guard::{Guard, GuardBuilder, GuardConfig};
pub use crate::logging::LogConfig;
pub use crate::require;
pub use crate::validator::Validator;
