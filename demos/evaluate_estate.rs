//! Evaluate an Estate
//!
//! This example walks one wizard payload through the whole pipeline.
//!
//! Key concepts:
//! - Intake validation collects every problem before the engine runs
//! - The engine is pure: same facts, same determination
//! - The classifier gives the coarse form-type view of the same facts
//! - Checklists list the supporting documents for the chosen path
//!
//! Run with: cargo run --example evaluate_estate

use probate_path::checklist::{self, ChecklistContext, Relationship};
use probate_path::intake;
use probate_path::ProbateEngine;
use stillwater::validation::Validation;

const PAYLOAD: &str = r#"{
    "decedent": {
        "dateOfDeathISO": "2024-01-01",
        "domicileCounty": "Cache",
        "hadWill": true,
        "willSelfProved": true
    },
    "assets": [
        { "kind": "financial_account", "valueUSD": 64000 },
        { "kind": "vehicle", "valueUSD": 18500 }
    ],
    "applicant": { "age": 48, "priority": "spouse_devisee" },
    "parties": [
        { "name": "Jordan", "priorityRank": "nominee_in_will", "waiverStatus": "waived" }
    ],
    "filingDateISO": "2024-02-20",
    "hasVehicle": true
}"#;

fn main() {
    println!("=== Evaluate Estate Example ===\n");

    // Example 1: Rejected intake shows every violation
    println!("Example 1: Intake Validation");
    let broken = r#"{
        "decedent": { "dateOfDeathISO": "last spring" },
        "assets": [{ "kind": "other", "valueUSD": -10 }],
        "filingDateISO": "2024-02-20"
    }"#;
    match intake::parse_json(broken).map(|raw| intake::validate(&raw)) {
        Ok(Validation::Failure(violations)) => {
            for violation in violations.iter() {
                println!("  - {violation}");
            }
        }
        Ok(Validation::Success(_)) => println!("  unexpectedly valid"),
        Err(err) => println!("  {err}"),
    }
    println!();

    // Example 2: Canonical determination
    println!("Example 2: Determination");
    let raw = match intake::parse_json(PAYLOAD) {
        Ok(raw) => raw,
        Err(err) => {
            println!("  {err}");
            return;
        }
    };
    let facts = match intake::validate(&raw) {
        Validation::Success(facts) => facts,
        Validation::Failure(violations) => {
            println!("  {} violations", violations.len());
            return;
        }
    };

    let engine = ProbateEngine::utah();
    let determination = engine.decide(&facts);
    println!("  Path: {}", determination.path.name());
    println!("  Venue: {}", determination.venue.court_name);
    println!(
        "  Earliest filing: {}",
        determination.timers.earliest_filing_date
    );
    println!("  Three-year bar: {}", determination.timers.three_year_bar_date);
    for form in &determination.required_forms {
        println!("  Form {}: {}", form.code, form.name);
    }
    for note in &determination.notes {
        println!("  Note: {note}");
    }
    println!();

    // Example 3: Coarse classifier view
    println!("Example 3: Classifier Summary");
    let summary = engine.summarize(&facts);
    println!("  Form type: {}", summary.form_type.key());
    for reason in &summary.eligibility_reasons {
        println!("  - {reason}");
    }
    println!();

    // Example 4: Supporting documents
    println!("Example 4: Document Checklist");
    let context = ChecklistContext::from_facts(&facts, Some(Relationship::Spouse));
    match checklist::for_determination(&determination, &context) {
        Some(list) => {
            for item in list.required.iter().chain(&list.conditional) {
                println!("  [ ] {}", item.title);
            }
            for step in &list.filing_steps {
                println!("  -> {}: {}", step.title, step.description);
            }
        }
        None => println!("  Referral path: no paperwork prepared"),
    }

    if let Ok(json) = determination.to_json() {
        println!("\nDetermination JSON:\n{json}");
    }

    println!("\n=== Example Complete ===");
}
