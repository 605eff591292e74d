//! Coarse form-type classifier.
//!
//! A reduced view of the engine for screens that only need to know which
//! paperwork bundle applies. It has no will-proving distinction and never
//! refers to formal probate or a determination of heirs.
//!
//! The waiting period is counted in whole days up to an explicit reference
//! date. For date-only input this agrees with the hour count used by
//! [`ProbateEngine::decide`].

use super::ProbateEngine;
use crate::core::clock::days_since_death;
use crate::core::{EstateFacts, Usd};
use crate::jurisdiction::{FormConditions, FormDescriptor, FormType};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Flattened estate answers for the classifier.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstateConditions {
    pub asset_value: Usd,
    pub has_real_property: bool,
    pub date_of_death: Option<NaiveDate>,
    pub has_pending_personal_representative: bool,
    pub has_will: bool,
    pub has_vehicle: bool,
}

impl EstateConditions {
    pub fn from_facts(facts: &EstateFacts) -> Self {
        Self {
            asset_value: facts.total_value(),
            has_real_property: facts.has_real_property(),
            date_of_death: Some(facts.decedent.date_of_death),
            has_pending_personal_representative: facts.flags.has_pending_personal_representative,
            has_will: facts.decedent.had_will,
            has_vehicle: facts.flags.has_vehicle,
        }
    }
}

/// Conditions as the classifier saw them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedConditions {
    pub asset_value: Usd,
    pub has_real_property: bool,
    /// Zero when no date of death was given.
    pub days_since_death: i64,
    pub has_pending_personal_representative: bool,
    pub has_will: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSummary {
    /// Always true: every estate has some paperwork bundle.
    pub eligible: bool,
    pub form_type: FormType,
    pub required_forms: Vec<FormDescriptor>,
    pub conditions: ClassifiedConditions,
    pub eligibility_reasons: Vec<String>,
    pub next_steps: Vec<String>,
}

const SMALL_ESTATE_STEPS: [&str; 5] = [
    "Complete and print the Small Estate Affidavit",
    "Have your signature notarized",
    "Gather supporting documents (death certificate, asset statements)",
    "File with the district court in the county of domicile",
    "Present the affidavit to asset holders for collection",
];

const INFORMAL_PROBATE_STEPS: [&str; 7] = [
    "Complete and print all required petition forms",
    "Gather required documents (death certificate, will if applicable, asset inventory)",
    "File petition with the district court in the county of domicile",
    "Pay required filing fees",
    "Obtain Letters of Administration/Testamentary",
    "Post bond if required",
    "Begin estate administration duties",
];

/// Fixed next-step instructions for a form type.
pub fn next_steps(form_type: FormType) -> Vec<String> {
    let steps: &[&str] = match form_type {
        FormType::SmallEstate => &SMALL_ESTATE_STEPS,
        FormType::InformalProbateNoWill | FormType::InformalProbateWithWill => {
            &INFORMAL_PROBATE_STEPS
        }
    };
    steps.iter().map(|s| s.to_string()).collect()
}

impl ProbateEngine {
    /// Whether the flattened conditions qualify for the small-estate
    /// affidavit.
    pub fn is_small_estate_eligible(&self, conditions: &ClassifiedConditions) -> bool {
        let rules = &self.jurisdiction.rules;
        conditions.asset_value < rules.small_estate_limit()
            && !conditions.has_real_property
            && conditions.days_since_death >= rules.small_estate_wait_days
            && !conditions.has_pending_personal_representative
    }

    /// Pick the form bundle for `conditions`, counting days up to `as_of`.
    pub fn classify(&self, conditions: &EstateConditions, as_of: NaiveDate) -> PathSummary {
        let classified = ClassifiedConditions {
            asset_value: conditions.asset_value,
            has_real_property: conditions.has_real_property,
            days_since_death: conditions
                .date_of_death
                .map_or(0, |death| days_since_death(death, as_of)),
            has_pending_personal_representative: conditions.has_pending_personal_representative,
            has_will: conditions.has_will,
        };

        let form_type = if self.is_small_estate_eligible(&classified) {
            FormType::SmallEstate
        } else if classified.has_will {
            FormType::InformalProbateWithWill
        } else {
            FormType::InformalProbateNoWill
        };

        let required_forms = self.jurisdiction.forms.required_forms(
            form_type,
            &FormConditions {
                has_vehicle: conditions.has_vehicle,
            },
        );
        let eligibility_reasons = self.eligibility_reasons(&classified, form_type);

        debug!(
            form_type = form_type.key(),
            days_since_death = classified.days_since_death,
            forms = required_forms.len(),
            "estate classified"
        );

        PathSummary {
            eligible: true,
            form_type,
            required_forms,
            conditions: classified,
            eligibility_reasons,
            next_steps: next_steps(form_type),
        }
    }

    /// [`ProbateEngine::classify`] against today's UTC date.
    pub fn classify_today(&self, conditions: &EstateConditions) -> PathSummary {
        self.classify(conditions, Utc::now().date_naive())
    }

    /// Classifier view of full estate facts, counted to the filing date.
    pub fn summarize(&self, facts: &EstateFacts) -> PathSummary {
        self.classify(&EstateConditions::from_facts(facts), facts.filing_date)
    }

    /// Why the chosen form type applies, or which small-estate conditions
    /// failed.
    pub fn eligibility_reasons(
        &self,
        conditions: &ClassifiedConditions,
        form_type: FormType,
    ) -> Vec<String> {
        let limit = self.jurisdiction.rules.small_estate_limit();
        let wait_days = self.jurisdiction.rules.small_estate_wait_days;

        if form_type == FormType::SmallEstate {
            return vec![
                format!("Estate value is under {limit}"),
                "No real property owned".to_string(),
                format!("More than {wait_days} days have passed since death"),
                "No pending personal representative application".to_string(),
            ];
        }

        let mut reasons = Vec::new();
        if conditions.asset_value >= limit {
            reasons.push(format!("Estate value is {limit} or more"));
        }
        if conditions.has_real_property {
            reasons.push("Real property is owned by the estate".to_string());
        }
        if conditions.days_since_death < wait_days {
            reasons.push(format!(
                "Less than {wait_days} days have passed since death"
            ));
        }
        if conditions.has_pending_personal_representative {
            reasons.push("Personal representative application is pending".to_string());
        }
        reasons
    }
}
