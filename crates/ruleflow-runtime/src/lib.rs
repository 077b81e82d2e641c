//! Ruleflow Runtime - combiner and evaluator for rule ASTs
//!
//! This crate provides the two engine operations that work on already-parsed
//! trees:
//! - [`combine`]: fold several rule ASTs into one under a connective
//! - [`evaluate`]: walk an AST against a [`Record`] for a boolean verdict
//!
//! Both are pure: no I/O, no shared state, no mutation of inputs.

pub mod combine;
pub mod error;
pub mod evaluator;
pub mod record;

// Re-export main types
pub use combine::{combine, combine_all};
pub use error::{CombineError, EvalError};
pub use evaluator::evaluate;
pub use record::Record;
