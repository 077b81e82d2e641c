//! Ruleflow SDK - high-level API over the rule engine
//!
//! Wraps the parser, combiner, and evaluator behind a [`RuleRegistry`]: an
//! in-memory store of [`Rule`] entities (id + rule string + AST, kept in
//! sync) with the full lifecycle: create, modify, combine, evaluate, delete.
//! Persistence and transport stay with the caller; the registry is plain
//! owned state.

pub mod error;
pub mod registry;

// Re-export main types
pub use error::{Result, SdkError};
pub use registry::{Rule, RuleRegistry};

// Re-export commonly used types from dependencies
pub use ruleflow_core::{CompareOp, Connective, Literal, Node, Value};
pub use ruleflow_runtime::Record;
