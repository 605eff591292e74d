//! Raw intake → well-typed estate facts.

use super::raw::{RawApplicant, RawAsset, RawEstateFacts, RawParty, RawPriority};
use super::violations::FactViolation;
use crate::core::{
    Applicant, Asset, AssetKind, Decedent, EstateFacts, EstateFlags, InterestedParty, Usd,
};
use chrono::{DateTime, NaiveDate, Utc};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

type Checked<T> = Validation<T, NonEmptyVec<FactViolation>>;

/// Parse an ISO date or an RFC 3339 timestamp.
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, FactViolation> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|instant| instant.with_timezone(&Utc).date_naive())
        })
        .ok_or_else(|| FactViolation::UnparseableDate {
            field,
            value: value.to_string(),
        })
}

fn checked<T>(result: Result<T, FactViolation>) -> Checked<T> {
    Validation::from_result(result).map_err(NonEmptyVec::singleton)
}

fn dates(raw: &RawEstateFacts) -> Checked<(NaiveDate, NaiveDate)> {
    checked(parse_date("decedent.dateOfDeath", &raw.decedent.date_of_death))
        .and(checked(parse_date("filingDate", &raw.filing_date)))
        .and_then(|(date_of_death, filing_date)| {
            if filing_date < date_of_death {
                Validation::fail(FactViolation::FilingBeforeDeath {
                    date_of_death,
                    filing_date,
                })
            } else {
                Validation::success((date_of_death, filing_date))
            }
        })
}

fn asset(index: usize, asset: &RawAsset) -> Result<Asset, FactViolation> {
    if !asset.value_usd.is_finite() {
        return Err(FactViolation::NonFiniteAssetValue { index });
    }
    let value =
        Usd::try_from_dollars_f64(asset.value_usd).ok_or(FactViolation::NegativeAssetValue {
            index,
            value: asset.value_usd,
        })?;
    Ok(Asset::new(AssetKind::from_name(&asset.kind), value))
}

fn party(index: usize, party: &RawParty) -> Checked<InterestedParty> {
    let name = party.name.trim();
    let named = if name.is_empty() {
        Validation::fail(FactViolation::BlankPartyName { index })
    } else {
        Validation::success(name.to_string())
    };
    let ranked = checked(party.priority_rank.class().ok_or_else(|| {
        FactViolation::UnknownPartyPriority {
            index,
            value: party.priority_rank.to_string(),
        }
    }));

    named.and(ranked).map(|(name, priority)| InterestedParty {
        name,
        priority,
        waiver: party.waiver_status,
    })
}

fn applicant(raw: &RawApplicant) -> Checked<Applicant> {
    checked(raw.age.ok_or(FactViolation::MissingApplicantAge)).map(|age| Applicant {
        age,
        priority: raw.priority.as_ref().and_then(RawPriority::class),
    })
}

/// Validate raw intake, collecting every violation.
///
/// Unknown counties and unknown applicant priorities are not violations:
/// they degrade to placeholders and an unranked applicant.
pub fn validate(raw: &RawEstateFacts) -> Checked<EstateFacts> {
    let assets = Validation::all_vec(
        raw.assets
            .iter()
            .enumerate()
            .map(|(index, a)| checked(asset(index, a)))
            .collect(),
    );
    let parties = Validation::all_vec(
        raw.parties
            .iter()
            .enumerate()
            .map(|(index, p)| party(index, p))
            .collect(),
    );

    let result = dates(raw)
        .and(applicant(&raw.applicant))
        .and(assets)
        .and(parties)
        .map(|((((date_of_death, filing_date), applicant), assets), parties)| {
            build(raw, date_of_death, filing_date, applicant, assets, parties)
        });

    if let Validation::Failure(violations) = &result {
        debug!(violations = violations.len(), "intake rejected");
    }
    result
}

fn build(
    raw: &RawEstateFacts,
    date_of_death: NaiveDate,
    filing_date: NaiveDate,
    applicant: Applicant,
    assets: Vec<Asset>,
    interested_parties: Vec<InterestedParty>,
) -> EstateFacts {
    EstateFacts {
        decedent: Decedent {
            date_of_death,
            domicile_county: raw
                .decedent
                .domicile_county
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_string(),
            had_will: raw.decedent.had_will,
            will_self_proved: raw.decedent.will_self_proved,
        },
        assets,
        applicant,
        interested_parties,
        filing_date,
        flags: EstateFlags {
            prior_pr_application_filed: raw.prior_pr_application_filed,
            bond_demanded: raw.bond_demanded,
            any_objection: raw.any_objection,
            has_vehicle: raw.has_vehicle,
            has_pending_personal_representative: raw.has_pending_personal_representative,
            has_real_property: raw.has_real_property,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PriorityClass, WaiverStatus};
    use crate::intake::raw::RawDecedent;

    fn raw() -> RawEstateFacts {
        RawEstateFacts {
            decedent: RawDecedent {
                date_of_death: "2024-01-01".to_string(),
                domicile_county: Some(" Salt Lake ".to_string()),
                had_will: true,
                will_self_proved: true,
            },
            assets: vec![RawAsset {
                kind: "personal_property".to_string(),
                value_usd: 50_000.0,
            }],
            applicant: RawApplicant {
                age: Some(30),
                priority: Some(RawPriority::Label("heir".to_string())),
            },
            parties: vec![RawParty {
                name: "Ann".to_string(),
                priority_rank: PriorityClass::Devisee.into(),
                waiver_status: WaiverStatus::NotWaived,
            }],
            filing_date: "2024-02-15".to_string(),
            ..RawEstateFacts::default()
        }
    }

    #[test]
    fn valid_intake_builds_facts() {
        let result = validate(&raw());
        let Validation::Success(facts) = result else {
            panic!("expected success");
        };

        assert_eq!(facts.decedent.domicile_county, "Salt Lake");
        assert_eq!(facts.assets[0].value, Usd::from_dollars(50_000));
        assert_eq!(facts.assets[0].kind, AssetKind::PersonalProperty);
        assert_eq!(facts.applicant.priority, Some(PriorityClass::Heir));
        assert_eq!(facts.interested_parties[0].name, "Ann");
        assert_eq!(
            facts.filing_date,
            NaiveDate::from_ymd_opt(2024, 2, 15).unwrap()
        );
    }

    #[test]
    fn accumulates_every_violation() {
        let mut raw = raw();
        raw.decedent.date_of_death = "not a date".to_string();
        raw.filing_date = "02/15/2024".to_string();
        raw.assets.push(RawAsset {
            kind: "vehicle".to_string(),
            value_usd: -5.0,
        });
        raw.assets.push(RawAsset {
            kind: "other".to_string(),
            value_usd: f64::NAN,
        });
        raw.parties[0].name = "  ".to_string();
        raw.applicant.age = None;

        match validate(&raw) {
            Validation::Failure(violations) => {
                assert_eq!(violations.len(), 6);
                assert!(violations
                    .iter()
                    .any(|v| matches!(v, FactViolation::MissingApplicantAge)));
                assert!(violations.iter().any(|v| matches!(
                    v,
                    FactViolation::UnparseableDate {
                        field: "filingDate",
                        ..
                    }
                )));
                assert!(violations
                    .iter()
                    .any(|v| matches!(v, FactViolation::NegativeAssetValue { index: 1, .. })));
                assert!(violations
                    .iter()
                    .any(|v| matches!(v, FactViolation::NonFiniteAssetValue { index: 2 })));
                assert!(violations
                    .iter()
                    .any(|v| matches!(v, FactViolation::BlankPartyName { index: 0 })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn filing_before_death_is_rejected() {
        let mut raw = raw();
        raw.filing_date = "2023-12-31".to_string();

        let result = validate(&raw);
        assert!(result.is_failure());
        if let Validation::Failure(violations) = result {
            assert!(violations
                .iter()
                .any(|v| matches!(v, FactViolation::FilingBeforeDeath { .. })));
        }
    }

    #[test]
    fn unknown_labels_degrade() {
        let mut raw = raw();
        raw.applicant.priority = Some(RawPriority::Label("neighbour".to_string()));
        raw.decedent.domicile_county = None;
        raw.assets[0].kind = "boat".to_string();

        let Validation::Success(facts) = validate(&raw) else {
            panic!("expected success");
        };
        assert_eq!(facts.applicant.priority, None);
        assert_eq!(facts.decedent.domicile_county, "");
        assert_eq!(facts.assets[0].kind, AssetKind::Other);
    }

    #[test]
    fn rfc3339_timestamps_use_utc_date() {
        assert_eq!(
            parse_date("filingDate", "2024-01-10T23:30:00-07:00").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 11).unwrap()
        );
        assert_eq!(
            parse_date("filingDate", "2024-01-10").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
        );
    }

    #[test]
    fn missing_applicant_age_is_a_violation() {
        let mut raw = raw();
        raw.applicant.age = None;

        match validate(&raw) {
            Validation::Failure(violations) => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations.head(), &FactViolation::MissingApplicantAge);
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn numeric_party_ranks_map_to_classes() {
        let mut raw = raw();
        raw.parties[0].priority_rank = RawPriority::Rank(4);
        raw.applicant.priority = Some(RawPriority::Rank(1));

        let Validation::Success(facts) = validate(&raw) else {
            panic!("expected success");
        };
        assert_eq!(facts.interested_parties[0].priority, PriorityClass::Heir);
        assert_eq!(facts.applicant.priority, Some(PriorityClass::Devisee));
    }

    #[test]
    fn out_of_range_party_rank_is_a_violation() {
        let mut raw = raw();
        raw.parties[0].priority_rank = RawPriority::Rank(6);
        raw.parties.push(RawParty {
            name: "Bo".to_string(),
            priority_rank: RawPriority::Rank(-1),
            waiver_status: WaiverStatus::Waived,
        });

        match validate(&raw) {
            Validation::Failure(violations) => {
                let indexes: Vec<usize> = violations
                    .iter()
                    .filter_map(|v| match v {
                        FactViolation::UnknownPartyPriority { index, .. } => Some(*index),
                        _ => None,
                    })
                    .collect();
                assert_eq!(indexes, vec![0, 1]);
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn date_failures_and_other_violations_accumulate_together() {
        let mut raw = raw();
        raw.filing_date = "2023-12-31".to_string();
        raw.assets[0].value_usd = -1.0;

        match validate(&raw) {
            Validation::Failure(violations) => {
                assert_eq!(violations.len(), 2);
                assert!(matches!(
                    violations.head(),
                    FactViolation::FilingBeforeDeath { .. }
                ));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }
}
