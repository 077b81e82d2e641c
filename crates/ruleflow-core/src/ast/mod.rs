//! Abstract Syntax Tree (AST) definitions for Ruleflow
//!
//! This module contains:
//! - `Node`: the rule AST (operator nodes and condition leaves)
//! - `Connective`: the logical AND/OR connectives
//! - `CompareOp`: the six supported comparison operators

pub mod node;
pub mod operator;

pub use node::Node;
pub use operator::{CompareOp, Connective};
