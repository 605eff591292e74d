//! Supporting documents and filing steps for a determination.

use crate::core::{Determination, EstateFacts, FilingPath};
use crate::engine::UNKNOWN_COUNTY;
use crate::jurisdiction::COUNTY_PLACEHOLDER;
use serde::{Deserialize, Serialize};

/// Applicant's relationship to the decedent, as far as documents go.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relationship {
    Spouse,
    Child,
    Parent,
    Sibling,
    Other,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistContext {
    pub had_will: bool,
    pub relationship: Option<Relationship>,
}

impl ChecklistContext {
    pub fn from_facts(facts: &EstateFacts, relationship: Option<Relationship>) -> Self {
        Self {
            had_will: facts.decedent.had_will,
            relationship,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub notes: String,
}

fn item(id: &str, title: &str, description: impl Into<String>, notes: &str) -> ChecklistItem {
    ChecklistItem {
        id: id.to_string(),
        title: title.to_string(),
        description: description.into(),
        notes: notes.to_string(),
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentChecklist {
    pub required: Vec<ChecklistItem>,
    /// Only the conditional documents that apply.
    pub conditional: Vec<ChecklistItem>,
    pub filing_steps: Vec<ChecklistItem>,
}

impl DocumentChecklist {
    pub fn len(&self) -> usize {
        self.required.len() + self.conditional.len() + self.filing_steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Checklist for the determination's path.
///
/// Referral paths get `None`: the wizard prepares no paperwork for them.
pub fn for_determination(
    determination: &Determination,
    context: &ChecklistContext,
) -> Option<DocumentChecklist> {
    let small_estate = match determination.path {
        FilingPath::SmallEstateAffidavit => true,
        FilingPath::InformalTestate | FilingPath::InformalIntestate => false,
        FilingPath::FormalReferral | FilingPath::DetermineHeirs => return None,
    };

    let primary = if small_estate {
        item(
            "completed_affidavit",
            "Completed Small Estate Affidavit",
            "The form you just completed, printed and ready for signature",
            "Must be signed in front of a notary public",
        )
    } else {
        item(
            "completed_application",
            "Completed Application for Informal Probate",
            "The application and supporting forms, printed and ready for signature",
            "The application is verified under penalty of perjury",
        )
    };

    let required = vec![
        item(
            "death_cert",
            "Certified Death Certificate",
            "Original or certified copy from the vital records office",
            "You may need multiple copies for different asset holders",
        ),
        primary,
        item(
            "asset_statements",
            "Asset Documentation",
            "Bank statements, account information, or other proof of assets",
            "Recent statements showing account balances and the decedent's name",
        ),
        item(
            "id",
            "Your Government-Issued ID",
            "Driver's license, passport, or other official identification",
            "Needed for notarization and when presenting the filing",
        ),
    ];

    let mut conditional = Vec::new();
    if context.had_will {
        conditional.push(item(
            "will",
            "Will (if applicable)",
            "Original will or certified copy",
            "Required if you indicated the deceased had a will",
        ));
    }
    match context.relationship {
        Some(Relationship::Spouse) => conditional.push(item(
            "marriage_cert",
            "Marriage Certificate",
            "If claiming as surviving spouse",
            "Proves your legal relationship to the deceased",
        )),
        Some(Relationship::Child | Relationship::Parent) => conditional.push(item(
            "birth_cert",
            "Birth Certificate",
            "If claiming as child or parent",
            "Proves your legal relationship to the deceased",
        )),
        Some(Relationship::Sibling | Relationship::Other) | None => {}
    }

    let county = match determination.venue.county.as_str() {
        UNKNOWN_COUNTY => COUNTY_PLACEHOLDER,
        county => county,
    };
    let filing_steps = if small_estate {
        vec![
            item(
                "notarize",
                "Get Affidavit Notarized",
                "Have your signature notarized by a notary public",
                "Bring your ID and sign in front of the notary - do not sign beforehand",
            ),
            item(
                "file_court",
                "File with District Court",
                format!("File in {county} County District Court"),
                "There may be a small filing fee (typically under $50)",
            ),
            item(
                "present_assets",
                "Present to Asset Holders",
                "Take the filed affidavit to banks, financial institutions, etc.",
                "They are required to release assets upon presentation of the affidavit",
            ),
        ]
    } else {
        let mut steps = vec![
            item(
                "file_court",
                "File with District Court",
                format!("File in {county} County District Court"),
                "A filing fee is due when the application is filed",
            ),
            item(
                "obtain_letters",
                "Obtain Letters",
                "Receive Letters of Administration or Letters Testamentary from the court",
                "Letters prove your authority to asset holders",
            ),
        ];
        if determination.requires_bond {
            steps.push(item(
                "post_bond",
                "Post Bond",
                "Arrange the bond demanded by an interested party",
                "Letters are not issued until the bond is filed",
            ));
        }
        steps
    };

    Some(DocumentChecklist {
        required,
        conditional,
        filing_steps,
    })
}
