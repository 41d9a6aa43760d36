//! Core building blocks shared by every check.
//!
//! ## Overview
//!
//! - **[`MessageSupplier`]**: a deferred, at-most-once producer of a failure message
//! - **exception factory**: any `FnOnce(Option<String>) -> E` turning that message into an error
//! - **[`engine`]**: the single evaluate → message → raise sequence all checks delegate to
//! - **[`ConditionKind`]**: which built-in error a violation maps to
//!
//! ## Architecture
//!
//! ```text
//! Arguments / Guard / conditions::*      (facades: pick the factory)
//!     └── conditions::{scalar, ordering, containment}   (predicates)
//!             └── engine::{evaluate, evaluate_with, raise}
//!                     ├── MessageSupplier   (only on failure)
//!                     └── exception factory (only on failure)
//! ```

pub mod engine;
pub mod kind;
pub mod message;

pub use engine::{evaluate, evaluate_with, raise, BoxedFactory};
pub use kind::ConditionKind;
pub use message::{MessageSupplier, NoMessage};
