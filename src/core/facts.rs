//! Estate facts: the engine's only input.
//!
//! Facts are built fresh for each evaluation and never mutated by the
//! engine. Loosely-typed intake data goes through [`crate::intake`] first.

use super::money::Usd;
use super::priority::PriorityClass;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Decedent {
    pub date_of_death: NaiveDate,
    /// County of domicile; empty when the intake form left it blank.
    #[serde(default)]
    pub domicile_county: String,
    #[serde(default)]
    pub had_will: bool,
    #[serde(default)]
    pub will_self_proved: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    RealProperty,
    PersonalProperty,
    Vehicle,
    FinancialAccount,
    Other,
}

impl AssetKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::RealProperty => "real_property",
            Self::PersonalProperty => "personal_property",
            Self::Vehicle => "vehicle",
            Self::FinancialAccount => "financial_account",
            Self::Other => "other",
        }
    }

    /// Parse an intake label; unrecognised labels are [`AssetKind::Other`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "real_property" => Self::RealProperty,
            "personal_property" => Self::PersonalProperty,
            "vehicle" => Self::Vehicle,
            "financial_account" => Self::FinancialAccount,
            _ => Self::Other,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub kind: AssetKind,
    pub value: Usd,
}

impl Asset {
    pub fn new(kind: AssetKind, value: Usd) -> Self {
        Self { kind, value }
    }
}

/// The person asking to be appointed (or to sign the affidavit).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Applicant {
    pub age: u32,
    /// `None` when the applicant's relationship has no statutory class;
    /// such an applicant ranks below every interested party.
    pub priority: Option<PriorityClass>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaiverStatus {
    Waived,
    NotWaived,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InterestedParty {
    pub name: String,
    pub priority: PriorityClass,
    pub waiver: WaiverStatus,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstateFlags {
    pub prior_pr_application_filed: bool,
    pub bond_demanded: bool,
    pub any_objection: bool,
    pub has_vehicle: bool,
    pub has_pending_personal_representative: bool,
    /// Explicit answer to "does the estate own real property?". When absent
    /// the engine derives it from the asset list.
    pub has_real_property: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EstateFacts {
    pub decedent: Decedent,
    pub assets: Vec<Asset>,
    pub applicant: Applicant,
    pub interested_parties: Vec<InterestedParty>,
    pub filing_date: NaiveDate,
    #[serde(default)]
    pub flags: EstateFlags,
}

impl EstateFacts {
    /// Sum of all asset values.
    pub fn total_value(&self) -> Usd {
        self.assets.iter().map(|a| a.value).sum()
    }

    /// The explicit flag when given, otherwise whether any asset is real
    /// property.
    pub fn has_real_property(&self) -> bool {
        self.flags.has_real_property.unwrap_or_else(|| {
            self.assets
                .iter()
                .any(|a| a.kind == AssetKind::RealProperty)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facts(assets: Vec<Asset>, has_real_property: Option<bool>) -> EstateFacts {
        EstateFacts {
            decedent: Decedent {
                date_of_death: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                domicile_county: "Salt Lake".to_string(),
                had_will: false,
                will_self_proved: false,
            },
            assets,
            applicant: Applicant {
                age: 40,
                priority: Some(PriorityClass::Heir),
            },
            interested_parties: Vec::new(),
            filing_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            flags: EstateFlags {
                has_real_property,
                ..EstateFlags::default()
            },
        }
    }

    #[test]
    fn total_value_sums_assets() {
        let f = facts(
            vec![
                Asset::new(AssetKind::PersonalProperty, Usd::from_dollars(30_000)),
                Asset::new(AssetKind::FinancialAccount, Usd::from_cents(50)),
            ],
            None,
        );
        assert_eq!(f.total_value(), Usd::from_cents(3_000_050));
    }

    #[test]
    fn real_property_derived_from_assets() {
        let f = facts(
            vec![Asset::new(AssetKind::RealProperty, Usd::from_dollars(1))],
            None,
        );
        assert!(f.has_real_property());

        let f = facts(
            vec![Asset::new(AssetKind::Vehicle, Usd::from_dollars(1))],
            None,
        );
        assert!(!f.has_real_property());
    }

    #[test]
    fn explicit_real_property_flag_wins() {
        let f = facts(
            vec![Asset::new(AssetKind::RealProperty, Usd::from_dollars(1))],
            Some(false),
        );
        assert!(!f.has_real_property());

        let f = facts(Vec::new(), Some(true));
        assert!(f.has_real_property());
    }

    #[test]
    fn unknown_asset_label_is_other() {
        assert_eq!(AssetKind::from_name("boat"), AssetKind::Other);
        assert_eq!(AssetKind::from_name("real_property"), AssetKind::RealProperty);
    }
}
