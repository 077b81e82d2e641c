//! Basic usage example for ruleflow-sdk
//!
//! Run with: cargo run --example basic_usage

use ruleflow_sdk::{Connective, Record, RuleRegistry};

fn main() -> anyhow::Result<()> {
    println!("=== Ruleflow Basic Usage Example ===\n");

    let mut registry = RuleRegistry::new();

    // Example 1: Create rules from strings
    println!("1. Creating Rules:");
    let eligibility = registry
        .create("(age > 30 AND department == 'Sales')")?
        .id;
    let seniority = registry.create("(salary > 50000 OR experience > 5)")?.id;
    for rule in registry.list() {
        println!("   #{}: {}", rule.id, rule.rule_string);
    }
    println!();

    // Example 2: Inspect a parsed AST in its wire form
    println!("2. Stored AST (wire format):");
    let rule = registry.get(eligibility)?;
    println!("   {}\n", rule.ast.to_json()?);

    // Example 3: Combine rules into a new one
    println!("3. Combining Rules:");
    let combined = registry.combine(&[eligibility, seniority], Connective::And)?;
    let combined_id = combined.id;
    println!("   #{}: {}\n", combined.id, combined.rule_string);

    // Example 4: Evaluate against a data record
    println!("4. Evaluating:");
    let record = Record::new()
        .with("age", 35)
        .with("department", "Sales")
        .with("salary", 60000)
        .with("experience", 6);
    let verdict = registry.evaluate(combined_id, &record)?;
    println!("   verdict = {}\n", verdict);

    // Example 5: Modify a rule (string and AST swap together)
    println!("5. Modifying a Rule:");
    let rule = registry.modify(eligibility, "age > 40 AND department == 'HR'")?;
    println!("   #{}: {}\n", rule.id, rule.rule_string);

    // Example 6: Errors surface instead of defaulting
    println!("6. Sparse Record Surfaces an Error:");
    let sparse = Record::new().with("age", 50);
    match registry.evaluate(eligibility, &sparse) {
        Err(err) => println!("   {}", err),
        Ok(_) => unreachable!("department is missing from the record"),
    }

    Ok(())
}
