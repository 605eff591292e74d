//! Statutory priority for appointment as personal representative.

use serde::{Deserialize, Serialize};

/// Who has a claim to serve as personal representative, highest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityClass {
    NomineeInWill,
    Devisee,
    SpouseDevisee,
    SpouseNondevisee,
    Heir,
    Creditor,
}

impl PriorityClass {
    pub const ALL: [PriorityClass; 6] = [
        PriorityClass::NomineeInWill,
        PriorityClass::Devisee,
        PriorityClass::SpouseDevisee,
        PriorityClass::SpouseNondevisee,
        PriorityClass::Heir,
        PriorityClass::Creditor,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::NomineeInWill => "nominee_in_will",
            Self::Devisee => "devisee",
            Self::SpouseDevisee => "spouse_devisee",
            Self::SpouseNondevisee => "spouse_nondevisee",
            Self::Heir => "heir",
            Self::Creditor => "creditor",
        }
    }

    /// Parse the snake_case label used by intake forms.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.name() == name)
    }
}

/// Numeric rank; lower means higher legal priority.
pub type Rank = u8;

/// Rank assigned to an applicant with no recognised priority class.
pub const UNRANKED: Rank = 99;

/// Maps priority classes onto ranks.
///
/// Injected into the engine as configuration so another jurisdiction can
/// reorder classes without touching decision logic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityTable {
    ranks: Vec<(PriorityClass, Rank)>,
}

impl PriorityTable {
    pub fn new(ranks: Vec<(PriorityClass, Rank)>) -> Self {
        Self { ranks }
    }

    /// Utah order: nominee 0 through creditor 5.
    pub fn utah() -> Self {
        let ranks = PriorityClass::ALL
            .into_iter()
            .zip(0..)
            .collect();
        Self { ranks }
    }

    pub fn rank(&self, class: PriorityClass) -> Rank {
        self.ranks
            .iter()
            .find(|(c, _)| *c == class)
            .map_or(UNRANKED, |(_, rank)| *rank)
    }

    /// Rank of an optional class; `None` is [`UNRANKED`].
    pub fn rank_of(&self, class: Option<PriorityClass>) -> Rank {
        class.map_or(UNRANKED, |c| self.rank(c))
    }
}

impl Default for PriorityTable {
    fn default() -> Self {
        Self::utah()
    }
}
