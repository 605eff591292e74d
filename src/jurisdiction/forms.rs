//! Court form catalog.
//!
//! Each form type owns an ordered list of forms. Some forms are only needed
//! when a named condition holds; the rest are always included.

use crate::core::FilingPath;
use serde::{Deserialize, Serialize};

/// Paperwork bundle a filer prepares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormType {
    SmallEstate,
    InformalProbateNoWill,
    InformalProbateWithWill,
}

impl FormType {
    pub fn key(&self) -> &'static str {
        match self {
            Self::SmallEstate => "small_estate",
            Self::InformalProbateNoWill => "informal_probate_no_will",
            Self::InformalProbateWithWill => "informal_probate_with_will",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "small_estate" => Some(Self::SmallEstate),
            "informal_probate_no_will" => Some(Self::InformalProbateNoWill),
            "informal_probate_with_will" => Some(Self::InformalProbateWithWill),
            _ => None,
        }
    }

    /// Form bundle for a filing path. Referral paths have none: the court
    /// process they lead to is outside the wizard.
    pub fn for_path(path: FilingPath) -> Option<Self> {
        match path {
            FilingPath::SmallEstateAffidavit => Some(Self::SmallEstate),
            FilingPath::InformalTestate => Some(Self::InformalProbateWithWill),
            FilingPath::InformalIntestate => Some(Self::InformalProbateNoWill),
            FilingPath::FormalReferral | FilingPath::DetermineHeirs => None,
        }
    }
}

/// A court form as presented to the filer.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormDescriptor {
    pub code: String,
    pub name: String,
}

/// Named predicate gating a conditional form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormCondition {
    HasVehicle,
}

impl FormCondition {
    pub fn check(&self, conditions: &FormConditions) -> bool {
        match self {
            Self::HasVehicle => conditions.has_vehicle,
        }
    }
}

/// Facts that conditional forms are tested against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConditions {
    pub has_vehicle: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<FormCondition>,
}

impl CatalogEntry {
    fn always(code: &str, name: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            condition: None,
        }
    }

    fn when(code: &str, name: &str, condition: FormCondition) -> Self {
        Self {
            condition: Some(condition),
            ..Self::always(code, name)
        }
    }

    pub fn applies(&self, conditions: &FormConditions) -> bool {
        self.condition.as_ref().is_none_or(|c| c.check(conditions))
    }

    fn descriptor(&self) -> FormDescriptor {
        FormDescriptor {
            code: self.code.clone(),
            name: self.name.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSet {
    pub form_type: FormType,
    pub forms: Vec<CatalogEntry>,
}

/// Immutable form-type → forms table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormCatalog {
    sets: Vec<FormSet>,
}

impl FormCatalog {
    pub fn new(sets: Vec<FormSet>) -> Self {
        Self { sets }
    }

    /// Utah district court probate forms.
    pub fn utah() -> Self {
        let small_estate = FormSet {
            form_type: FormType::SmallEstate,
            forms: vec![
                CatalogEntry::always("1110XX", "Small Estate Affidavit"),
                CatalogEntry::when(
                    "DMV_SURVIVORSHIP",
                    "DMV Survivorship Affidavit",
                    FormCondition::HasVehicle,
                ),
            ],
        };

        let no_will = FormSet {
            form_type: FormType::InformalProbateNoWill,
            forms: vec![
                CatalogEntry::always("1158XX", "Cover Sheet"),
                CatalogEntry::always(
                    "1001ES",
                    "Application for Informal Probate and Informal Appointment of Personal Representative",
                ),
                CatalogEntry::always("1006ES", "Statement of Informal Probate"),
                CatalogEntry::always("1008ES", "Order for Informal Probate"),
                CatalogEntry::always("1009ES", "Letters of Administration"),
            ],
        };

        let with_will = FormSet {
            form_type: FormType::InformalProbateWithWill,
            forms: vec![
                CatalogEntry::always("1158XX", "Cover Sheet"),
                CatalogEntry::always(
                    "1002ES",
                    "Application for Informal Probate of Will and Informal Appointment of Personal Representative",
                ),
                CatalogEntry::always("1007ES", "Statement of Informal Probate of Will"),
                CatalogEntry::always("1008ES", "Order for Informal Probate"),
                CatalogEntry::always("1010ES", "Letters Testamentary"),
            ],
        };

        Self::new(vec![small_estate, no_will, with_will])
    }

    /// Forms to file for `form_type`, in catalog order.
    ///
    /// A form type missing from the catalog yields an empty list.
    pub fn required_forms(
        &self,
        form_type: FormType,
        conditions: &FormConditions,
    ) -> Vec<FormDescriptor> {
        self.sets
            .iter()
            .find(|set| set.form_type == form_type)
            .map(|set| {
                set.forms
                    .iter()
                    .filter(|entry| entry.applies(conditions))
                    .map(CatalogEntry::descriptor)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Same as [`FormCatalog::required_forms`], keyed by the wire name.
    /// Unknown keys yield an empty list.
    pub fn required_forms_by_key(
        &self,
        key: &str,
        conditions: &FormConditions,
    ) -> Vec<FormDescriptor> {
        FormType::from_key(key)
            .map(|form_type| self.required_forms(form_type, conditions))
            .unwrap_or_default()
    }
}

impl Default for FormCatalog {
    fn default() -> Self {
        Self::utah()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(forms: &[FormDescriptor]) -> Vec<&str> {
        forms.iter().map(|f| f.code.as_str()).collect()
    }

    #[test]
    fn vehicle_form_needs_vehicle() {
        let catalog = FormCatalog::utah();

        let without = catalog.required_forms(FormType::SmallEstate, &FormConditions::default());
        assert_eq!(codes(&without), vec!["1110XX"]);

        let with = catalog.required_forms(
            FormType::SmallEstate,
            &FormConditions { has_vehicle: true },
        );
        assert_eq!(codes(&with), vec!["1110XX", "DMV_SURVIVORSHIP"]);
    }

    #[test]
    fn informal_sets_are_unconditional() {
        let catalog = FormCatalog::utah();
        let vehicle = FormConditions { has_vehicle: true };

        let no_will = catalog.required_forms(FormType::InformalProbateNoWill, &vehicle);
        assert_eq!(
            codes(&no_will),
            vec!["1158XX", "1001ES", "1006ES", "1008ES", "1009ES"]
        );

        let with_will = catalog.required_forms(FormType::InformalProbateWithWill, &vehicle);
        assert_eq!(
            codes(&with_will),
            vec!["1158XX", "1002ES", "1007ES", "1008ES", "1010ES"]
        );
    }

    #[test]
    fn unknown_key_yields_nothing() {
        let catalog = FormCatalog::utah();
        assert!(catalog
            .required_forms_by_key("formal_probate", &FormConditions::default())
            .is_empty());
        assert_eq!(
            catalog
                .required_forms_by_key("small_estate", &FormConditions::default())
                .len(),
            1
        );
    }

    #[test]
    fn missing_set_yields_nothing() {
        let catalog = FormCatalog::new(Vec::new());
        assert!(catalog
            .required_forms(FormType::SmallEstate, &FormConditions::default())
            .is_empty());
    }

    #[test]
    fn paths_map_to_form_types() {
        assert_eq!(
            FormType::for_path(FilingPath::InformalTestate),
            Some(FormType::InformalProbateWithWill)
        );
        assert_eq!(
            FormType::for_path(FilingPath::InformalIntestate),
            Some(FormType::InformalProbateNoWill)
        );
        assert_eq!(FormType::for_path(FilingPath::FormalReferral), None);
        assert_eq!(FormType::for_path(FilingPath::DetermineHeirs), None);
    }

    #[test]
    fn keys_round_trip() {
        for form_type in [
            FormType::SmallEstate,
            FormType::InformalProbateNoWill,
            FormType::InformalProbateWithWill,
        ] {
            assert_eq!(FormType::from_key(form_type.key()), Some(form_type));
        }
    }
}
