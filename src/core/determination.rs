//! The engine's output record.

use crate::jurisdiction::FormDescriptor;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Filing path chosen for an estate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilingPath {
    SmallEstateAffidavit,
    InformalTestate,
    InformalIntestate,
    FormalReferral,
    DetermineHeirs,
}

impl FilingPath {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SmallEstateAffidavit => "small_estate_affidavit",
            Self::InformalTestate => "informal_testate",
            Self::InformalIntestate => "informal_intestate",
            Self::FormalReferral => "formal_referral",
            Self::DetermineHeirs => "determine_heirs",
        }
    }

    /// Paths the wizard cannot prepare paperwork for; the user is sent to a
    /// court process instead.
    pub fn is_referral(&self) -> bool {
        matches!(self, Self::FormalReferral | Self::DetermineHeirs)
    }
}

/// Where the case is filed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    /// Domicile county, or `"Unknown"` when none was given.
    pub county: String,
    /// District label such as `"3rd"`, or the placeholder for unknown counties.
    pub district: String,
    /// Caption line for court documents.
    pub court_name: String,
}

/// Statutory dates derived from the date of death.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timers {
    /// Date of death plus 120 hours.
    pub earliest_filing_date: NaiveDate,
    /// Date of death plus three calendar years.
    pub three_year_bar_date: NaiveDate,
}

/// Result of evaluating one set of estate facts.
///
/// A non-empty `blocks` list means the path is not safely actionable yet;
/// `path` is still the engine's best guess.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Determination {
    pub path: FilingPath,
    pub blocks: Vec<String>,
    pub notes: Vec<String>,
    pub venue: Venue,
    pub small_estate_eligible: bool,
    pub requires_bond: bool,
    pub required_consents: Vec<String>,
    pub timers: Timers,
    pub required_forms: Vec<FormDescriptor>,
}

impl Determination {
    pub fn is_blocked(&self) -> bool {
        !self.blocks.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_names_match_serde() {
        for path in [
            FilingPath::SmallEstateAffidavit,
            FilingPath::InformalTestate,
            FilingPath::InformalIntestate,
            FilingPath::FormalReferral,
            FilingPath::DetermineHeirs,
        ] {
            let json = serde_json::to_string(&path).unwrap();
            assert_eq!(json, format!("\"{}\"", path.name()));
        }
    }

    #[test]
    fn referral_paths() {
        assert!(FilingPath::FormalReferral.is_referral());
        assert!(FilingPath::DetermineHeirs.is_referral());
        assert!(!FilingPath::InformalTestate.is_referral());
        assert!(!FilingPath::SmallEstateAffidavit.is_referral());
    }
}
