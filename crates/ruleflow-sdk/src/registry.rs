//! In-memory rule registry
//!
//! Owns the Rule entities: an id, the original rule string, and its parsed
//! AST. String and AST are kept in sync — modifying a rule re-parses the new
//! string first and only then swaps both fields, so a failed parse leaves the
//! stored rule untouched.

use crate::error::{Result, SdkError};
use ruleflow_core::ast::{Connective, Node};
use ruleflow_parser::RuleParser;
use ruleflow_runtime::{combine, evaluate, Record};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A stored rule: identity, source text, and parsed tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Registry-assigned id
    pub id: u64,
    /// Original rule string
    pub rule_string: String,
    /// Parsed AST, always in sync with `rule_string`
    pub ast: Node,
}

/// In-memory store of rules with the full lifecycle
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rules: BTreeMap<u64, Rule>,
    next_id: u64,
}

impl RuleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a rule string and store it as a new rule
    pub fn create(&mut self, rule_string: &str) -> Result<&Rule> {
        let ast = RuleParser::parse(rule_string)?;
        let id = self.allocate_id();
        tracing::debug!(id, "rule created");
        let rule = Rule {
            id,
            rule_string: rule_string.to_string(),
            ast,
        };
        Ok(self.rules.entry(id).or_insert(rule))
    }

    /// Look up a rule by id
    pub fn get(&self, id: u64) -> Result<&Rule> {
        self.rules.get(&id).ok_or(SdkError::RuleNotFound(id))
    }

    /// All rules in id order
    pub fn list(&self) -> Vec<&Rule> {
        self.rules.values().collect()
    }

    /// Number of stored rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rules are stored
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Replace a rule's string and AST atomically.
    ///
    /// The new string is parsed before the stored rule is touched; on a parse
    /// failure the rule keeps its previous string and tree.
    pub fn modify(&mut self, id: u64, rule_string: &str) -> Result<&Rule> {
        let ast = RuleParser::parse(rule_string)?;
        let rule = self
            .rules
            .get_mut(&id)
            .ok_or(SdkError::RuleNotFound(id))?;
        rule.rule_string = rule_string.to_string();
        rule.ast = ast;
        tracing::debug!(id, "rule modified");
        Ok(rule)
    }

    /// Delete a rule by id
    pub fn delete(&mut self, id: u64) -> Result<()> {
        self.rules
            .remove(&id)
            .map(|_| tracing::debug!(id, "rule deleted"))
            .ok_or(SdkError::RuleNotFound(id))
    }

    /// Delete every rule, returning how many were removed
    pub fn delete_all(&mut self) -> usize {
        let count = self.rules.len();
        self.rules.clear();
        count
    }

    /// Combine existing rules into a new stored rule.
    ///
    /// The member rules stay untouched; their ASTs are cloned into the fold.
    /// The new rule's string is the members' strings, each parenthesized,
    /// joined by the connective, so it re-parses to an equivalent tree.
    pub fn combine(&mut self, ids: &[u64], connective: Connective) -> Result<&Rule> {
        let mut asts = Vec::with_capacity(ids.len());
        let mut strings = Vec::with_capacity(ids.len());
        for &id in ids {
            let rule = self.get(id)?;
            asts.push(rule.ast.clone());
            strings.push(format!("({})", rule.rule_string));
        }

        let ast = combine(asts, connective)?;
        let rule_string = strings.join(&format!(" {} ", connective));

        let id = self.allocate_id();
        tracing::debug!(id, members = ids.len(), "rules combined");
        let rule = Rule {
            id,
            rule_string,
            ast,
        };
        Ok(self.rules.entry(id).or_insert(rule))
    }

    /// Evaluate a stored rule against a data record
    pub fn evaluate(&self, id: u64, record: &Record) -> Result<bool> {
        let rule = self.get(id)?;
        let verdict = evaluate(&rule.ast, record)?;
        tracing::debug!(id, verdict, "rule evaluated");
        Ok(verdict)
    }

    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}
