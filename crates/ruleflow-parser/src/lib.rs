//! Ruleflow Parser - rule-string to AST parser
//!
//! This crate turns rule strings such as
//! `(age > 30 AND department == 'Sales') OR salary > 50000`
//! into [`ruleflow_core::Node`] trees.
//!
//! Grammar (fixed and documented; AND binds tighter than OR, both
//! left-associative):
//!
//! ```text
//! expr      := or_expr
//! or_expr   := and_expr ( OR and_expr )*
//! and_expr  := primary ( AND primary )*
//! primary   := '(' expr ')' | condition
//! condition := attribute compare_op literal
//! ```

pub mod error;
pub mod rule_parser;
pub mod token;

// Re-export main parser types
pub use error::{ParseError, Result};
pub use rule_parser::RuleParser;
pub use token::Token;
