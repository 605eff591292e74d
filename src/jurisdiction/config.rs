//! Jurisdiction rules and the bundle injected into the engine.

use super::districts::DistrictTable;
use super::error::ConfigError;
use super::forms::FormCatalog;
use crate::core::{PriorityTable, Usd};
use serde::{Deserialize, Serialize};

pub(crate) mod defaults {
    pub const SMALL_ESTATE_LIMIT_CENTS: u64 = 100_000 * 100;
    pub const MIN_FILING_WAIT_HOURS: i64 = 120;
    pub const SMALL_ESTATE_WAIT_HOURS: i64 = 30 * 24;
    pub const SMALL_ESTATE_WAIT_DAYS: i64 = 30;
    pub const LIMITATION_YEARS: i32 = 3;
    pub const MIN_APPLICANT_AGE: u32 = 21;
}

/// Numeric thresholds of the probate code.
///
/// Missing keys in a TOML document fall back to the Utah values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Estates strictly below this total may use the small-estate affidavit.
    pub small_estate_limit_cents: u64,
    /// Hours after death before anything may be filed.
    pub min_filing_wait_hours: i64,
    /// Hours after death before a small-estate affidavit may be used.
    pub small_estate_wait_hours: i64,
    /// Same wait, in whole days, for the day-based classifier.
    pub small_estate_wait_days: i64,
    /// Years after death after which informal proceedings are barred.
    pub limitation_years: i32,
    pub min_applicant_age: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            small_estate_limit_cents: defaults::SMALL_ESTATE_LIMIT_CENTS,
            min_filing_wait_hours: defaults::MIN_FILING_WAIT_HOURS,
            small_estate_wait_hours: defaults::SMALL_ESTATE_WAIT_HOURS,
            small_estate_wait_days: defaults::SMALL_ESTATE_WAIT_DAYS,
            limitation_years: defaults::LIMITATION_YEARS,
            min_applicant_age: defaults::MIN_APPLICANT_AGE,
        }
    }
}

impl Rules {
    /// Parse rules from TOML, then validate them.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let rules: Rules = toml::from_str(source)?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.small_estate_limit_cents == 0 {
            return Err(ConfigError::InvalidRule {
                rule: "small_estate_limit_cents",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.limitation_years <= 0 {
            return Err(ConfigError::InvalidRule {
                rule: "limitation_years",
                reason: format!("must be positive, got {}", self.limitation_years),
            });
        }
        for (rule, value) in [
            ("min_filing_wait_hours", self.min_filing_wait_hours),
            ("small_estate_wait_hours", self.small_estate_wait_hours),
            ("small_estate_wait_days", self.small_estate_wait_days),
        ] {
            if value < 0 {
                return Err(ConfigError::InvalidRule {
                    rule,
                    reason: format!("must not be negative, got {value}"),
                });
            }
        }
        Ok(())
    }

    pub fn small_estate_limit(&self) -> Usd {
        Usd::from_cents(self.small_estate_limit_cents)
    }
}

/// Everything jurisdiction-specific the engine consults.
///
/// Immutable once built; share one instance across evaluations.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Jurisdiction {
    pub rules: Rules,
    pub priorities: PriorityTable,
    pub districts: DistrictTable,
    pub forms: FormCatalog,
}

impl Jurisdiction {
    pub fn utah() -> Self {
        Self::default()
    }

    /// Utah tables with rule overrides read from TOML.
    pub fn utah_with_rules(source: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            rules: Rules::from_toml(source)?,
            ..Self::utah()
        })
    }
}
