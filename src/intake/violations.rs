//! Intake violations and decode errors.

use chrono::NaiveDate;
use thiserror::Error;

/// Problems found while validating raw intake
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FactViolation {
    #[error("{field} is not a valid date: '{value}'")]
    UnparseableDate { field: &'static str, value: String },

    #[error("Filing date {filing_date} is before the date of death {date_of_death}")]
    FilingBeforeDeath {
        date_of_death: NaiveDate,
        filing_date: NaiveDate,
    },

    #[error("Asset {index} has a negative value ({value})")]
    NegativeAssetValue { index: usize, value: f64 },

    #[error("Asset {index} has a non-numeric value")]
    NonFiniteAssetValue { index: usize },

    #[error("Interested party {index} has no name")]
    BlankPartyName { index: usize },

    #[error("Interested party {index} has an unknown priority {value}")]
    UnknownPartyPriority { index: usize, value: String },

    #[error("Applicant age is missing")]
    MissingApplicantAge,
}

/// Errors decoding intake payloads
#[derive(Debug, Error)]
pub enum IntakeError {
    /// The payload is not valid JSON for the intake shape
    #[error("Malformed intake payload: {0}")]
    Malformed(#[from] serde_json::Error),
}
