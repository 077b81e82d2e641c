//! Combining several rule ASTs into one
//!
//! A left fold under the given connective: `combine([a, b, c], And)` yields
//! `AND(AND(a, b), c)`. The tree shape depends on input order, but the truth
//! value does not, since AND/OR are associative and commutative.

use crate::error::CombineError;
use ruleflow_core::ast::{Connective, Node};

/// Combine rule ASTs under a connective.
///
/// A singleton list returns its only element unchanged (no wrapper node);
/// an empty list is a [`CombineError::Empty`].
pub fn combine(asts: Vec<Node>, connective: Connective) -> Result<Node, CombineError> {
    let mut iter = asts.into_iter();
    let first = iter.next().ok_or(CombineError::Empty)?;
    Ok(iter.fold(first, |combined, ast| {
        Node::operator(connective, combined, ast)
    }))
}

/// Combine rule ASTs with the default AND connective
pub fn combine_all(asts: Vec<Node>) -> Result<Node, CombineError> {
    combine(asts, Connective::And)
}
