//! Rule AST nodes
//!
//! A rule AST is a binary tree: operator nodes carry a logical connective and
//! own exactly two children; condition leaves carry one attribute comparison.
//! Ownership is strictly top-down (no parent links, no sharing), so `Clone`
//! and serde traversal are straightforward.
//!
//! The serde representation is the tagged wire format used when ASTs are
//! stored or returned across the engine boundary:
//!
//! ```json
//! { "type": "operator", "op": "AND", "left": ..., "right": ... }
//! { "type": "condition", "attribute": "age", "op": ">", "value": 30 }
//! ```

use super::operator::{CompareOp, Connective};
use crate::types::Literal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rule AST node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// Logical connective over two subtrees
    Operator {
        op: Connective,
        left: Box<Node>,
        right: Box<Node>,
    },

    /// Attribute comparison leaf
    Condition {
        attribute: String,
        op: CompareOp,
        value: Literal,
    },
}

impl Node {
    /// Create an operator node
    pub fn operator(op: Connective, left: Node, right: Node) -> Self {
        Node::Operator {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Create a condition leaf
    pub fn condition(attribute: impl Into<String>, op: CompareOp, value: Literal) -> Self {
        Node::Condition {
            attribute: attribute.into(),
            op,
            value,
        }
    }

    /// Returns true if this node is a condition leaf
    pub fn is_condition(&self) -> bool {
        matches!(self, Node::Condition { .. })
    }

    /// Number of condition leaves in the tree
    pub fn condition_count(&self) -> usize {
        match self {
            Node::Operator { left, right, .. } => {
                left.condition_count() + right.condition_count()
            }
            Node::Condition { .. } => 1,
        }
    }

    /// Serialize to the tagged JSON wire format
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Deserialize from the tagged JSON wire format
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl fmt::Display for Node {
    /// Canonical rule-string rendering. Operator nodes are always
    /// parenthesized, so re-parsing the output yields an equivalent tree.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Operator { op, left, right } => {
                write!(f, "({} {} {})", left, op, right)
            }
            Node::Condition {
                attribute,
                op,
                value,
            } => write!(f, "{} {} {}", attribute, op, value),
        }
    }
}
