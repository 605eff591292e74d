//! Probate Path: a pure decision engine for Utah probate filings
//!
//! Given the facts of an estate, the engine decides which filing path
//! applies (small-estate affidavit, informal testate or intestate probate,
//! a formal referral, or a determination of heirs), computes the statutory
//! timers, works out bond and consent requirements, and lists the court
//! forms to prepare.
//!
//! The engine is a pure core: no I/O, no clocks, no shared state. Untrusted
//! wizard answers pass through the [`intake`] adapter first.
//!
//! # Core Concepts
//!
//! - **Facts**: [`EstateFacts`], built fresh for each evaluation
//! - **Jurisdiction**: injected rules and tables via [`Jurisdiction`]
//! - **Determination**: the immutable result of [`ProbateEngine::decide`]
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use probate_path::core::{
//!     Applicant, Asset, AssetKind, Decedent, EstateFacts, EstateFlags, FilingPath,
//!     PriorityClass, Usd,
//! };
//! use probate_path::ProbateEngine;
//!
//! let facts = EstateFacts {
//!     decedent: Decedent {
//!         date_of_death: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!         domicile_county: "Salt Lake".to_string(),
//!         had_will: false,
//!         will_self_proved: false,
//!     },
//!     assets: vec![Asset::new(AssetKind::PersonalProperty, Usd::from_dollars(50_000))],
//!     applicant: Applicant { age: 40, priority: Some(PriorityClass::Heir) },
//!     interested_parties: Vec::new(),
//!     filing_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
//!     flags: EstateFlags::default(),
//! };
//!
//! let determination = ProbateEngine::utah().decide(&facts);
//! assert_eq!(determination.path, FilingPath::InformalIntestate);
//! assert!(!determination.small_estate_eligible);
//! assert_eq!(determination.venue.district, "3rd");
//! ```

pub mod checklist;
pub mod core;
pub mod engine;
pub mod intake;
pub mod jurisdiction;

// Re-export commonly used types
pub use crate::core::{Determination, EstateFacts, FilingPath};
pub use engine::{EstateConditions, PathSummary, ProbateEngine};
pub use jurisdiction::Jurisdiction;
