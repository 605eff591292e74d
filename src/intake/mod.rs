//! Boundary adapter between the intake wizard and the engine.
//!
//! The engine trusts its input. This module is where untrusted answers are
//! decoded and checked, accumulating ALL problems with Stillwater's
//! `Validation` so the wizard can show every fix the user needs at once.
//!
//! # Example
//!
//! ```rust
//! use probate_path::engine::ProbateEngine;
//! use probate_path::intake;
//! use stillwater::validation::Validation;
//!
//! let payload = r#"{
//!     "decedent": { "dateOfDeathISO": "2024-01-01", "domicileCounty": "Davis" },
//!     "assets": [{ "kind": "personal_property", "valueUSD": 50000 }],
//!     "applicant": { "age": 40, "priority": "heir" },
//!     "filingDateISO": "2024-02-15"
//! }"#;
//!
//! let raw = intake::parse_json(payload).unwrap();
//! let Validation::Success(facts) = intake::validate(&raw) else {
//!     panic!("intake should be valid");
//! };
//!
//! let determination = ProbateEngine::utah().decide(&facts);
//! assert!(determination.small_estate_eligible);
//! ```

mod raw;
mod validate;
mod violations;

pub use raw::{RawApplicant, RawAsset, RawDecedent, RawEstateFacts, RawParty, RawPriority};
pub use validate::{parse_date, validate};
pub use violations::{FactViolation, IntakeError};

/// Decode an intake payload.
pub fn parse_json(payload: &str) -> Result<RawEstateFacts, IntakeError> {
    Ok(serde_json::from_str(payload)?)
}
