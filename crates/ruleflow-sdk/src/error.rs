//! SDK error types

use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// No rule with the given id
    #[error("Rule not found: {0}")]
    RuleNotFound(u64),

    /// Parser error
    #[error("Parse error: {0}")]
    Parse(#[from] ruleflow_parser::ParseError),

    /// Combine error
    #[error("Combine error: {0}")]
    Combine(#[from] ruleflow_runtime::CombineError),

    /// Evaluation error
    #[error("Evaluation error: {0}")]
    Eval(#[from] ruleflow_runtime::EvalError),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_not_found_message() {
        let error = SdkError::RuleNotFound(7);
        assert_eq!(error.to_string(), "Rule not found: 7");
    }

    #[test]
    fn test_parse_error_conversion() {
        let error: SdkError = ruleflow_parser::ParseError::EmptyRule.into();
        assert!(error.to_string().contains("Parse error"));
        assert!(error.to_string().contains("Empty rule string"));
    }

    #[test]
    fn test_combine_error_conversion() {
        let error: SdkError = ruleflow_runtime::CombineError::Empty.into();
        assert!(error.to_string().contains("Combine error"));
    }

    #[test]
    fn test_eval_error_conversion() {
        let error: SdkError =
            ruleflow_runtime::EvalError::AttributeNotFound("age".to_string()).into();
        assert!(error.to_string().contains("Evaluation error"));
        assert!(error.to_string().contains("age"));
    }
}
