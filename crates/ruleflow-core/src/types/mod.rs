//! Value types for Ruleflow
//!
//! - `Literal`: the right-hand side of a condition (number or string)
//! - `Value`: a runtime data-record scalar (null, bool, number, or string)

pub mod value;

pub use value::{Literal, Value};
