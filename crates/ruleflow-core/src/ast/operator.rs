//! Connectives and comparison operators for Ruleflow rules

use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical connective joining two subtrees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Connective {
    /// Logical AND
    #[serde(rename = "AND")]
    And,
    /// Logical OR
    #[serde(rename = "OR")]
    Or,
}

impl Connective {
    /// Keyword form used in rule strings and the wire format
    pub fn as_str(&self) -> &'static str {
        match self {
            Connective::And => "AND",
            Connective::Or => "OR",
        }
    }

    /// Parse a rule-string keyword (case-insensitive)
    pub fn from_keyword(word: &str) -> Option<Self> {
        if word.eq_ignore_ascii_case("AND") {
            Some(Connective::And)
        } else if word.eq_ignore_ascii_case("OR") {
            Some(Connective::Or)
        } else {
            None
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comparison operators supported in condition leaves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOp {
    /// Less than (<)
    #[serde(rename = "<")]
    Lt,
    /// Greater than (>)
    #[serde(rename = ">")]
    Gt,
    /// Less than or equal (<=)
    #[serde(rename = "<=")]
    Le,
    /// Greater than or equal (>=)
    #[serde(rename = ">=")]
    Ge,
    /// Equal (==)
    #[serde(rename = "==")]
    Eq,
    /// Not equal (!=)
    #[serde(rename = "!=")]
    Ne,
}

impl CompareOp {
    /// Symbol form used in rule strings and the wire format
    pub fn as_str(&self) -> &'static str {
        match self {
            CompareOp::Lt => "<",
            CompareOp::Gt => ">",
            CompareOp::Le => "<=",
            CompareOp::Ge => ">=",
            CompareOp::Eq => "==",
            CompareOp::Ne => "!=",
        }
    }

    /// Parse an operator symbol. `=` is accepted as an alias for `==`.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "<" => Some(CompareOp::Lt),
            ">" => Some(CompareOp::Gt),
            "<=" => Some(CompareOp::Le),
            ">=" => Some(CompareOp::Ge),
            "==" | "=" => Some(CompareOp::Eq),
            "!=" => Some(CompareOp::Ne),
            _ => None,
        }
    }

    /// Returns true for the ordering operators (undefined on non-numeric values)
    pub fn is_ordering(&self) -> bool {
        matches!(
            self,
            CompareOp::Lt | CompareOp::Gt | CompareOp::Le | CompareOp::Ge
        )
    }

    /// Returns true for equality/inequality
    pub fn is_equality(&self) -> bool {
        matches!(self, CompareOp::Eq | CompareOp::Ne)
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connective_keywords() {
        assert_eq!(Connective::from_keyword("AND"), Some(Connective::And));
        assert_eq!(Connective::from_keyword("and"), Some(Connective::And));
        assert_eq!(Connective::from_keyword("Or"), Some(Connective::Or));
        assert_eq!(Connective::from_keyword("XOR"), None);
    }

    #[test]
    fn test_connective_display() {
        assert_eq!(Connective::And.to_string(), "AND");
        assert_eq!(Connective::Or.to_string(), "OR");
    }

    #[test]
    fn test_compare_op_symbols() {
        assert_eq!(CompareOp::from_symbol("<"), Some(CompareOp::Lt));
        assert_eq!(CompareOp::from_symbol(">="), Some(CompareOp::Ge));
        assert_eq!(CompareOp::from_symbol("=="), Some(CompareOp::Eq));
        assert_eq!(CompareOp::from_symbol("!="), Some(CompareOp::Ne));
        assert_eq!(CompareOp::from_symbol("<>"), None);
    }

    #[test]
    fn test_compare_op_equals_alias() {
        assert_eq!(CompareOp::from_symbol("="), Some(CompareOp::Eq));
    }

    #[test]
    fn test_compare_op_is_ordering() {
        assert!(CompareOp::Lt.is_ordering());
        assert!(CompareOp::Ge.is_ordering());
        assert!(!CompareOp::Eq.is_ordering());
        assert!(!CompareOp::Ne.is_ordering());
    }

    #[test]
    fn test_compare_op_serde_symbols() {
        let json = serde_json::to_string(&CompareOp::Ge).unwrap();
        assert_eq!(json, "\">=\"");

        let op: CompareOp = serde_json::from_str("\"!=\"").unwrap();
        assert_eq!(op, CompareOp::Ne);
    }

    #[test]
    fn test_connective_serde_keywords() {
        assert_eq!(serde_json::to_string(&Connective::And).unwrap(), "\"AND\"");
        let c: Connective = serde_json::from_str("\"OR\"").unwrap();
        assert_eq!(c, Connective::Or);
    }
}
