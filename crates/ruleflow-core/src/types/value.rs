//! Literal and runtime value types
//!
//! `Literal` is what a parsed condition compares against: a token that parses
//! as a number is numeric, anything else is a string. `Value` is the scalar
//! type of data-record attributes supplied at evaluation time. Both use
//! untagged serde so they read and write as plain JSON scalars.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Condition literal: the right-hand side of a comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    /// Numeric literal (f64 handles both integers and decimals)
    Number(f64),
    /// String literal
    String(String),
}

impl Literal {
    /// Numeric value, if this literal is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Literal::Number(n) => Some(*n),
            Literal::String(_) => None,
        }
    }

    /// Classify a raw token: parses as f64 means numeric, otherwise string
    pub fn from_token(token: &str) -> Self {
        match token.parse::<f64>() {
            Ok(n) => Literal::Number(n),
            Err(_) => Literal::String(token.to_string()),
        }
    }
}

impl fmt::Display for Literal {
    /// Rule-string rendering: strings are single-quoted so they re-tokenize
    /// as one literal even when they contain spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{}", n),
            Literal::String(s) => write!(f, "'{}'", s),
        }
    }
}

/// Runtime data-record scalar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// Number value (f64 for simplicity, handles both int and float)
    Number(f64),
    /// String value
    String(String),
}

impl Value {
    /// Numeric value, if this is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// String slice, if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}
