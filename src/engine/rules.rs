//! Ordered path-selection rules.
//!
//! Path selection is a first-match scan over [`DECISION_ORDER`]. Each rule
//! pairs a pure guard over the evaluated [`Predicates`] with the path it
//! selects and the block or note it contributes.

use crate::core::FilingPath;

pub(crate) mod messages {
    pub const SMALL_ESTATE_ELIGIBLE: &str =
        "Eligible for small-estate collection by affidavit (<$100k, no real property, 30+ days).";
    pub const OBJECTION: &str = "There is an objection or dispute; use formal probate.";
    pub const WILL_NOT_SELF_PROVED: &str =
        "Will is not self-proved; consider formal probate or add witness affidavits to stay informal.";
    pub const COLLECT_WAIVERS: &str =
        "Collect waivers/renunciations from equal/higher-priority parties for informal appointment.";

    pub fn must_wait(hours: i64) -> String {
        format!("Must wait {hours} hours after death to file.")
    }

    pub fn limitation_bar(years: i32) -> String {
        format!("More than {years} years since death: use determination of heirs process.")
    }

    pub fn applicant_underage(min_age: u32) -> String {
        format!("Applicant must be {min_age} or older.")
    }
}

/// Boolean facts the path rules are evaluated against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Predicates {
    pub small_estate_eligible: bool,
    pub any_objection: bool,
    pub had_will: bool,
    pub will_self_proved: bool,
}

/// One entry in the decision order.
#[derive(Clone, Copy, Debug)]
pub struct PathRule {
    pub path: FilingPath,
    pub when: fn(&Predicates) -> bool,
    pub block: Option<&'static str>,
    pub note: Option<&'static str>,
}

impl PathRule {
    pub fn matches(&self, predicates: &Predicates) -> bool {
        (self.when)(predicates)
    }
}

fn small_estate_eligible(p: &Predicates) -> bool {
    p.small_estate_eligible
}

fn objection(p: &Predicates) -> bool {
    p.any_objection
}

fn self_proved_will(p: &Predicates) -> bool {
    p.had_will && p.will_self_proved
}

fn unproved_will(p: &Predicates) -> bool {
    p.had_will
}

fn always(_: &Predicates) -> bool {
    true
}

/// Priority order of path rules. The last rule always matches.
pub static DECISION_ORDER: [PathRule; 5] = [
    PathRule {
        path: FilingPath::SmallEstateAffidavit,
        when: small_estate_eligible,
        block: None,
        note: Some(messages::SMALL_ESTATE_ELIGIBLE),
    },
    PathRule {
        path: FilingPath::FormalReferral,
        when: objection,
        block: Some(messages::OBJECTION),
        note: None,
    },
    PathRule {
        path: FilingPath::InformalTestate,
        when: self_proved_will,
        block: None,
        note: None,
    },
    PathRule {
        path: FilingPath::FormalReferral,
        when: unproved_will,
        block: None,
        note: Some(messages::WILL_NOT_SELF_PROVED),
    },
    PathRule {
        path: FilingPath::InformalIntestate,
        when: always,
        block: None,
        note: None,
    },
];

/// First rule in [`DECISION_ORDER`] whose guard holds.
pub fn select(predicates: &Predicates) -> &'static PathRule {
    DECISION_ORDER
        .iter()
        .find(|rule| rule.matches(predicates))
        .unwrap_or(&DECISION_ORDER[DECISION_ORDER.len() - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eligibility_outranks_everything() {
        let p = Predicates {
            small_estate_eligible: true,
            any_objection: true,
            had_will: true,
            will_self_proved: false,
        };
        assert_eq!(select(&p).path, FilingPath::SmallEstateAffidavit);
    }

    #[test]
    fn objection_outranks_will() {
        let p = Predicates {
            any_objection: true,
            had_will: true,
            will_self_proved: true,
            ..Predicates::default()
        };
        let rule = select(&p);
        assert_eq!(rule.path, FilingPath::FormalReferral);
        assert_eq!(rule.block, Some(messages::OBJECTION));
    }

    #[test]
    fn will_branches_on_self_proving() {
        let proved = Predicates {
            had_will: true,
            will_self_proved: true,
            ..Predicates::default()
        };
        assert_eq!(select(&proved).path, FilingPath::InformalTestate);

        let unproved = Predicates {
            had_will: true,
            ..Predicates::default()
        };
        let rule = select(&unproved);
        assert_eq!(rule.path, FilingPath::FormalReferral);
        assert_eq!(rule.note, Some(messages::WILL_NOT_SELF_PROVED));
        assert_eq!(rule.block, None);
    }

    #[test]
    fn no_will_is_intestate() {
        assert_eq!(
            select(&Predicates::default()).path,
            FilingPath::InformalIntestate
        );
    }

    #[test]
    fn self_proved_flag_alone_is_not_a_will() {
        let p = Predicates {
            will_self_proved: true,
            ..Predicates::default()
        };
        assert_eq!(select(&p).path, FilingPath::InformalIntestate);
    }
}
