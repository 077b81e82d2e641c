//! AST evaluation against a data record
//!
//! Comparison semantics:
//! - both operands numeric: numeric comparison for all six operators
//! - `==` / `!=` otherwise: exact same-type match; operands of different
//!   types are simply unequal (no error)
//! - ordering (`<`, `>`, `<=`, `>=`) with any non-numeric operand is a
//!   [`EvalError::TypeMismatch`]
//!
//! A missing attribute is always an [`EvalError::AttributeNotFound`], never a
//! silent `false`, so sparse input surfaces to the caller. Both branches of
//! an operator node are evaluated (no short-circuit); evaluation is pure, so
//! the only observable effect is that errors surface regardless of which
//! branch they occur in.

use crate::error::EvalError;
use crate::record::Record;
use ruleflow_core::ast::{CompareOp, Connective, Node};
use ruleflow_core::types::{Literal, Value};

/// Evaluate an AST against a data record
pub fn evaluate(node: &Node, record: &Record) -> Result<bool, EvalError> {
    match node {
        Node::Operator { op, left, right } => {
            let left = evaluate(left, record)?;
            let right = evaluate(right, record)?;
            Ok(match op {
                Connective::And => left && right,
                Connective::Or => left || right,
            })
        }
        Node::Condition {
            attribute,
            op,
            value,
        } => {
            let actual = record
                .get(attribute)
                .ok_or_else(|| EvalError::AttributeNotFound(attribute.clone()))?;
            compare(attribute, actual, *op, value)
        }
    }
}

fn compare(
    attribute: &str,
    actual: &Value,
    op: CompareOp,
    literal: &Literal,
) -> Result<bool, EvalError> {
    // Numeric fast path covers all six operators
    if let (Some(left), Some(right)) = (actual.as_number(), literal.as_number()) {
        return Ok(match op {
            CompareOp::Lt => left < right,
            CompareOp::Gt => left > right,
            CompareOp::Le => left <= right,
            CompareOp::Ge => left >= right,
            CompareOp::Eq => left == right,
            CompareOp::Ne => left != right,
        });
    }

    match op {
        CompareOp::Eq => Ok(loose_equal(actual, literal)),
        CompareOp::Ne => Ok(!loose_equal(actual, literal)),
        _ => {
            tracing::debug!(
                attribute,
                %op,
                "ordering comparison on non-numeric operands"
            );
            Err(EvalError::TypeMismatch {
                attribute: attribute.to_string(),
                op,
            })
        }
    }
}

/// Same-type exact match; operands of different types are unequal
fn loose_equal(actual: &Value, literal: &Literal) -> bool {
    match (actual, literal) {
        (Value::Number(a), Literal::Number(b)) => a == b,
        (Value::String(a), Literal::String(b)) => a == b,
        _ => false,
    }
}
