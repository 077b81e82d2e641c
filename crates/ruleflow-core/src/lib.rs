//! Ruleflow Core - Core types for the Ruleflow rule engine
//!
//! This crate provides the fundamental types shared across the Ruleflow
//! workspace:
//! - The AST node model for parsed rules
//! - Connective and comparison operator enums
//! - Literal and runtime value types
//! - The tagged JSON wire format for stored/transported ASTs

pub mod ast;
pub mod types;

// Re-export commonly used types
pub use ast::{CompareOp, Connective, Node};
pub use types::{Literal, Value};
