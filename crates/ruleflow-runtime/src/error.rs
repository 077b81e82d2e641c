//! Runtime error types

use ruleflow_core::ast::CompareOp;
use thiserror::Error;

/// Evaluation error
///
/// Every variant indicates malformed input (sparse record or a tree the
/// parser would not have produced), not a transient failure; the engine never
/// recovers locally and no partial result is returned.
#[derive(Error, Debug)]
pub enum EvalError {
    /// The condition's attribute is absent from the supplied record
    #[error("Attribute not found: {0}")]
    AttributeNotFound(String),

    /// Ordering requested on operands that are not both numeric
    #[error("Type mismatch for attribute '{attribute}': ordering with '{op}' is not defined for non-numeric values")]
    TypeMismatch { attribute: String, op: CompareOp },
}

/// Combine error
#[derive(Error, Debug)]
pub enum CombineError {
    /// Nothing to combine
    #[error("No ASTs to combine")]
    Empty,
}
