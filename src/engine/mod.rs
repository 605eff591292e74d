//! The probate decision engine.
//!
//! [`ProbateEngine::decide`] is the canonical evaluation: it takes
//! [`EstateFacts`](crate::core::EstateFacts) with an explicit filing date and
//! returns a [`Determination`](crate::core::Determination).
//! [`ProbateEngine::classify`] is the coarse form-type view kept for screens
//! that only need the paperwork bundle.
//!
//! The engine owns an immutable [`Jurisdiction`] and holds no other state,
//! so one instance can serve any number of threads.

mod classify;
mod decide;
pub mod rules;

pub use classify::{next_steps, ClassifiedConditions, EstateConditions, PathSummary};
pub use decide::{bond_waiver_proxy, required_consents, UNKNOWN_COUNTY};
pub use rules::{PathRule, Predicates, DECISION_ORDER};

use crate::jurisdiction::Jurisdiction;

/// Pure evaluator over one jurisdiction's rules.
#[derive(Clone, Debug, Default)]
pub struct ProbateEngine {
    jurisdiction: Jurisdiction,
}

impl ProbateEngine {
    pub fn new(jurisdiction: Jurisdiction) -> Self {
        Self { jurisdiction }
    }

    /// Engine configured with Utah's rules and tables.
    pub fn utah() -> Self {
        Self::new(Jurisdiction::utah())
    }

    pub fn jurisdiction(&self) -> &Jurisdiction {
        &self.jurisdiction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ProbateEngine>();
    }

    #[test]
    fn default_engine_is_utah() {
        let engine = ProbateEngine::default();
        assert_eq!(engine.jurisdiction(), &Jurisdiction::utah());
    }
}
