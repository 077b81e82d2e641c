//! Unit tests for the SDK facade
//!
//! Walks the full rule lifecycle a caller drives through the registry:
//! create, combine, evaluate, modify, list, delete.

use ruleflow_sdk::{Connective, Record, RuleRegistry, SdkError};

#[test]
fn test_full_rule_lifecycle() {
    let mut registry = RuleRegistry::new();

    // Create two rules
    let first = registry
        .create("(age > 30 AND department = 'Sales')")
        .unwrap()
        .id;
    let second = registry
        .create("(salary > 50000 OR experience > 5)")
        .unwrap()
        .id;

    // Combine them
    let combined = registry.combine(&[first, second], Connective::And).unwrap().id;

    // Evaluate the combined rule
    let record = Record::new()
        .with("age", 35)
        .with("department", "Sales")
        .with("salary", 60000)
        .with("experience", 6);
    assert!(registry.evaluate(combined, &record).unwrap());

    // Modify the first rule
    registry
        .modify(first, "age > 40 AND department = 'HR'")
        .unwrap();
    assert!(!registry.evaluate(first, &record).unwrap());

    // List, delete one, delete the rest
    assert_eq!(registry.list().len(), 3);
    registry.delete(first).unwrap();
    assert_eq!(registry.list().len(), 2);
    assert_eq!(registry.delete_all(), 2);
    assert!(registry.is_empty());
}

#[test]
fn test_combined_rule_fails_when_one_side_fails() {
    let mut registry = RuleRegistry::new();
    let a = registry.create("age > 30").unwrap().id;
    let b = registry.create("salary > 50000").unwrap().id;
    let combined = registry.combine(&[a, b], Connective::And).unwrap().id;

    let record = Record::new().with("age", 40).with("salary", 10000);
    assert!(!registry.evaluate(combined, &record).unwrap());

    let record = Record::new().with("age", 40).with("salary", 60000);
    assert!(registry.evaluate(combined, &record).unwrap());
}

#[test]
fn test_or_combined_rule() {
    let mut registry = RuleRegistry::new();
    let a = registry.create("age > 30").unwrap().id;
    let b = registry.create("salary > 50000").unwrap().id;
    let combined = registry.combine(&[a, b], Connective::Or).unwrap().id;

    let record = Record::new().with("age", 20).with("salary", 60000);
    assert!(registry.evaluate(combined, &record).unwrap());
}

#[test]
fn test_modify_unknown_rule() {
    let mut registry = RuleRegistry::new();
    assert!(matches!(
        registry.modify(42, "age > 30"),
        Err(SdkError::RuleNotFound(42))
    ));
}

#[test]
fn test_errors_carry_rule_context_for_the_caller() {
    let mut registry = RuleRegistry::new();
    let id = registry.create("name > 5").unwrap().id;

    // Type mismatch bubbles up wrapped, with the offending attribute named
    let record = Record::new().with("name", "alice");
    let err = registry.evaluate(id, &record).unwrap_err();
    assert!(err.to_string().contains("name"));
}

#[test]
fn test_rule_serialization() {
    let mut registry = RuleRegistry::new();
    let rule = registry.create("age > 30").unwrap().clone();

    let json = serde_json::to_string(&rule).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["id"], 1);
    assert_eq!(value["rule_string"], "age > 30");
    assert_eq!(value["ast"]["type"], "condition");
}
