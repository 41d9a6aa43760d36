//! # Term Conditions - Lazy precondition and state checks for Rust
//!
//! Term Conditions is a small library of reusable checks for validating
//! arguments, object state and internal assertions. Every check evaluates a
//! predicate over its subject(s) and hands the subject back when it holds;
//! otherwise it produces an error through an *exception factory* you choose.
//!
//! ## Overview
//!
//! A check never does more work than its predicate on the success path:
//!
//! - failure messages are only built when the check fails, and at most once;
//! - the exception factory is only called when the check fails, exactly once;
//! - an absent message stays absent all the way into the error.
//!
//! ## Quick Start
//!
//! ```rust
//! use term_conditions::prelude::*;
//!
//! struct Account {
//!     owner: String,
//!     balance: i64,
//!     limit: i64,
//! }
//!
//! impl Account {
//!     fn open(owner: Option<&str>, limit: i64) -> Result<Self> {
//!         let owner = Arguments.require_not_null(owner, "an owner is required")?;
//!         let limit = Arguments.require_greater_or_same(limit, 0, || {
//!             format!("limit must not be negative, got {limit}")
//!         })?;
//!         Ok(Self { owner: owner.to_string(), balance: 0, limit })
//!     }
//!
//!     fn withdraw(&mut self, amount: i64) -> Result<i64> {
//!         let amount = Arguments.require_greater(amount, 0, NoMessage)?;
//!         Guard::state("account").require_greater_or_same(
//!             self.balance - amount,
//!             -self.limit,
//!             || format!("{} would exceed the limit", self.owner),
//!         )?;
//!         self.balance -= amount;
//!         Ok(self.balance)
//!     }
//! }
//!
//! let mut account = Account::open(Some("ada"), 100)?;
//! assert_eq!(account.withdraw(60)?, -60);
//!
//! let err = account.withdraw(60).unwrap_err();
//! assert_eq!(err.kind(), Some(ConditionKind::State));
//! assert_eq!(err.message(), Some("ada would exceed the limit"));
//! # Ok::<(), ConditionError>(())
//! ```
//!
//! ## Facades
//!
//! - **[`conditions`]**: every check as a free function taking the factory
//!   per call; the general purpose (state) facade
//! - **[`Arguments`](arguments::Arguments)**: always raises
//!   [`ConditionError::InvalidArgument`]
//! - **[`Guard`](guard::Guard)**: a named facade bound to one factory,
//!   optionally logging each violation through `tracing`
//! - **[`require!`]**: early return for arbitrary boolean conditions
//!
//! ## Architecture
//!
//! - **`core`**: the condition engine, message suppliers and condition kinds
//! - **`conditions`**: scalar, ordering, range and container predicates
//! - **`validator`**: the trait turning a bound factory into methods
//! - **`arguments`** / **`guard`**: the bound facades
//! - **`logging`**: violation logging and subscriber setup
//! - **`error`**: the built-in error taxonomy

pub mod arguments;
pub mod conditions;
pub mod core;
pub mod error;
pub mod guard;
pub mod logging;
mod macros;
pub mod prelude;
pub mod validator;

pub use error::{ConditionError, Result};
