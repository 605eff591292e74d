//! Jurisdiction-specific configuration.
//!
//! The engine never reaches for process-wide tables. Thresholds, the
//! priority order, the county → district table and the form catalog are
//! bundled into a [`Jurisdiction`] value that is handed to the engine.
//!
//! # Example
//!
//! ```rust
//! use probate_path::jurisdiction::{FormConditions, FormType, Jurisdiction};
//!
//! let utah = Jurisdiction::utah();
//! assert_eq!(utah.districts.judicial_district("Salt Lake"), "3rd");
//!
//! let forms = utah
//!     .forms
//!     .required_forms(FormType::SmallEstate, &FormConditions { has_vehicle: true });
//! assert_eq!(forms.len(), 2);
//! ```

pub mod config;
pub mod districts;
pub mod error;
pub mod forms;

pub use config::{Jurisdiction, Rules};
pub use districts::{CountyDistrict, DistrictTable, COUNTY_PLACEHOLDER, DISTRICT_PLACEHOLDER};
pub use error::ConfigError;
pub use forms::{
    CatalogEntry, FormCatalog, FormCondition, FormConditions, FormDescriptor, FormSet, FormType,
};
