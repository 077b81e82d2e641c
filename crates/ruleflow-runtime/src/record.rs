//! Data records supplied at evaluation time
//!
//! A record is an ephemeral attribute-to-value map owned by the caller. The
//! engine never persists it and never mutates it.

use ruleflow_core::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Runtime data record: attribute name to scalar value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    values: HashMap<String, Value>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to add an attribute
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Insert or replace an attribute
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    /// Look up an attribute by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Returns true if the attribute is present
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the record has no attributes
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<HashMap<String, Value>> for Record {
    fn from(values: HashMap<String, Value>) -> Self {
        Record { values }
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Record {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_builder() {
        let record = Record::new()
            .with("age", 35)
            .with("department", "Sales")
            .with("active", true);

        assert_eq!(record.len(), 3);
        assert_eq!(record.get("age"), Some(&Value::Number(35.0)));
        assert_eq!(
            record.get("department"),
            Some(&Value::String("Sales".to_string()))
        );
        assert_eq!(record.get("active"), Some(&Value::Bool(true)));
        assert_eq!(record.get("missing"), None);
    }

    #[test]
    fn test_record_insert_replaces() {
        let mut record = Record::new().with("age", 20);
        record.insert("age", 21);
        assert_eq!(record.get("age"), Some(&Value::Number(21.0)));
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn test_record_from_json_object() {
        let record: Record =
            serde_json::from_str(r#"{"age": 35, "department": "Sales", "active": true}"#).unwrap();
        assert_eq!(record.get("age"), Some(&Value::Number(35.0)));
        assert!(record.contains("department"));
    }

    #[test]
    fn test_empty_record() {
        let record = Record::new();
        assert!(record.is_empty());
        assert!(!record.contains("age"));
    }
}
