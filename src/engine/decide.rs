//! Canonical evaluation of estate facts.

use super::rules::{messages, select, Predicates};
use super::ProbateEngine;
use crate::core::clock::{add_hours, add_years, hours_between};
use crate::core::{
    Decedent, Determination, EstateFacts, FilingPath, InterestedParty, Rank, Timers, Venue,
    WaiverStatus,
};
use crate::jurisdiction::{FormConditions, FormType};
use tracing::debug;

/// County shown in the venue when the intake left it blank.
pub const UNKNOWN_COUNTY: &str = "Unknown";

/// Whether the will is treated as waiving bond.
///
/// Approximation: a self-proved will stands in for an explicit bond waiver
/// clause. The statute looks at the will's actual terms, which the intake
/// does not capture.
pub fn bond_waiver_proxy(decedent: &Decedent) -> bool {
    decedent.had_will && decedent.will_self_proved
}

/// Names of parties at equal or higher priority who have not waived,
/// in input order.
pub fn required_consents(
    parties: &[InterestedParty],
    applicant_rank: Rank,
    rank_of: impl Fn(&InterestedParty) -> Rank,
) -> Vec<String> {
    parties
        .iter()
        .filter(|p| rank_of(p) <= applicant_rank && p.waiver != WaiverStatus::Waived)
        .map(|p| p.name.clone())
        .collect()
}

impl ProbateEngine {
    /// Evaluate estate facts into a determination.
    ///
    /// Pure and total: the same facts always give the same determination.
    pub fn decide(&self, facts: &EstateFacts) -> Determination {
        let rules = &self.jurisdiction.rules;
        let death = facts.decedent.date_of_death;
        let filing = facts.filing_date;

        let timers = self.timers(facts);
        let venue = self.venue(&facts.decedent.domicile_county);
        let mut blocks = Vec::new();
        let mut notes = Vec::new();

        let elapsed_hours = hours_between(death, filing);
        if elapsed_hours < rules.min_filing_wait_hours {
            blocks.push(messages::must_wait(rules.min_filing_wait_hours));
        }

        if filing > timers.three_year_bar_date {
            debug!(
                date_of_death = %death,
                filing_date = %filing,
                bar = %timers.three_year_bar_date,
                "filing is past the limitation bar"
            );
            return Determination {
                path: FilingPath::DetermineHeirs,
                blocks: vec![messages::limitation_bar(rules.limitation_years)],
                notes,
                venue,
                small_estate_eligible: false,
                requires_bond: false,
                required_consents: Vec::new(),
                timers,
                required_forms: Vec::new(),
            };
        }

        let total_value = facts.total_value();
        let has_real_property = facts.has_real_property();
        let small_estate_eligible = total_value < rules.small_estate_limit()
            && !has_real_property
            && elapsed_hours >= rules.small_estate_wait_hours
            && !facts.flags.prior_pr_application_filed;

        let priorities = &self.jurisdiction.priorities;
        let applicant_rank = priorities.rank_of(facts.applicant.priority);
        let required_consents =
            required_consents(&facts.interested_parties, applicant_rank, |p| {
                priorities.rank(p.priority)
            });

        let requires_bond = facts.flags.bond_demanded && !bond_waiver_proxy(&facts.decedent);

        let predicates = Predicates {
            small_estate_eligible,
            any_objection: facts.flags.any_objection,
            had_will: facts.decedent.had_will,
            will_self_proved: facts.decedent.will_self_proved,
        };
        let rule = select(&predicates);
        let path = rule.path;
        blocks.extend(rule.block.map(str::to_string));
        notes.extend(rule.note.map(str::to_string));

        if facts.applicant.age < rules.min_applicant_age {
            blocks.push(messages::applicant_underage(rules.min_applicant_age));
        }
        if path != FilingPath::SmallEstateAffidavit && !required_consents.is_empty() {
            notes.push(messages::COLLECT_WAIVERS.to_string());
        }

        let required_forms = FormType::for_path(path)
            .map(|form_type| {
                self.jurisdiction.forms.required_forms(
                    form_type,
                    &FormConditions {
                        has_vehicle: facts.flags.has_vehicle,
                    },
                )
            })
            .unwrap_or_default();

        debug!(
            path = path.name(),
            %total_value,
            has_real_property,
            elapsed_hours,
            small_estate_eligible,
            requires_bond,
            consents = required_consents.len(),
            blocks = blocks.len(),
            "estate evaluated"
        );

        Determination {
            path,
            blocks,
            notes,
            venue,
            small_estate_eligible,
            requires_bond,
            required_consents,
            timers,
            required_forms,
        }
    }

    /// Statutory dates for the facts' date of death.
    pub fn timers(&self, facts: &EstateFacts) -> Timers {
        let rules = &self.jurisdiction.rules;
        let death = facts.decedent.date_of_death;
        Timers {
            earliest_filing_date: add_hours(death, rules.min_filing_wait_hours),
            three_year_bar_date: add_years(death, rules.limitation_years),
        }
    }

    /// Venue for a domicile county; blank counties read `"Unknown"`.
    pub fn venue(&self, county: &str) -> Venue {
        let districts = &self.jurisdiction.districts;
        let display = if county.is_empty() {
            UNKNOWN_COUNTY
        } else {
            county
        };
        Venue {
            county: display.to_string(),
            district: districts.judicial_district(county).to_string(),
            court_name: districts.district_court_name(county),
        }
    }
}
