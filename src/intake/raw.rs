//! Loosely-typed intake payload, as the wizard submits it.

use crate::core::{PriorityClass, WaiverStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority as submitted: a statutory rank (0 highest) or a class label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPriority {
    Rank(i64),
    Label(String),
}

impl RawPriority {
    /// The statutory class, if the rank or label names one.
    pub fn class(&self) -> Option<PriorityClass> {
        match self {
            Self::Rank(rank) => usize::try_from(*rank)
                .ok()
                .and_then(|index| PriorityClass::ALL.get(index).copied()),
            Self::Label(label) => PriorityClass::from_name(label.trim()),
        }
    }
}

impl From<PriorityClass> for RawPriority {
    fn from(class: PriorityClass) -> Self {
        Self::Label(class.name().to_string())
    }
}

impl fmt::Display for RawPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rank(rank) => write!(f, "{rank}"),
            Self::Label(label) => write!(f, "'{label}'"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawDecedent {
    /// ISO date, or an RFC 3339 timestamp whose UTC date is used.
    #[serde(rename = "dateOfDeathISO", alias = "dateOfDeath")]
    pub date_of_death: String,
    pub domicile_county: Option<String>,
    pub had_will: bool,
    pub will_self_proved: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawAsset {
    pub kind: String,
    #[serde(rename = "valueUSD")]
    pub value_usd: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawApplicant {
    pub age: Option<u32>,
    /// Unknown ranks and labels leave the applicant unranked.
    #[serde(alias = "priorityRank")]
    pub priority: Option<RawPriority>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawParty {
    pub name: String,
    pub priority_rank: RawPriority,
    pub waiver_status: WaiverStatus,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawEstateFacts {
    pub decedent: RawDecedent,
    pub assets: Vec<RawAsset>,
    pub applicant: RawApplicant,
    pub parties: Vec<RawParty>,
    #[serde(rename = "filingDateISO", alias = "filingDate")]
    pub filing_date: String,
    pub has_real_property: Option<bool>,
    #[serde(rename = "priorPRApplicationFiled")]
    pub prior_pr_application_filed: bool,
    pub bond_demanded: bool,
    pub any_objection: bool,
    pub has_vehicle: bool,
    pub has_pending_personal_representative: bool,
}
