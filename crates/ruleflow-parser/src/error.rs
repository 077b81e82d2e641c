//! Parser error types

use thiserror::Error;

/// Parser error
#[derive(Error, Debug)]
pub enum ParseError {
    /// Empty or whitespace-only rule string
    #[error("Empty rule string")]
    EmptyRule,

    /// Opening and closing parentheses do not match up
    #[error("Unbalanced parentheses")]
    UnbalancedParentheses,

    /// A quoted string literal was never closed
    #[error("Unterminated string literal")]
    UnterminatedString,

    /// A parenthesized group with nothing inside
    #[error("Empty group '()'")]
    EmptyGroup,

    /// Token in operator position is not one of the supported comparators
    #[error("Invalid comparison operator: '{0}'")]
    InvalidOperator(String),

    /// Token in attribute position is not a valid attribute name
    #[error("Invalid attribute name: '{0}'")]
    InvalidAttribute(String),

    /// A condition is missing one of its three parts
    #[error("Incomplete condition: expected {expected}")]
    IncompleteCondition { expected: String },

    /// Leftover or misplaced token
    #[error("Unexpected token: '{0}'")]
    UnexpectedToken(String),
}

/// Result type for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;
