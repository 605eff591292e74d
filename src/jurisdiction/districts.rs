//! County to judicial district lookup.

use serde::{Deserialize, Serialize};

/// Label returned for an empty or unrecognised county.
pub const DISTRICT_PLACEHOLDER: &str = "[DISTRICT COURT NUMBER]";

/// County placeholder used in court captions.
pub const COUNTY_PLACEHOLDER: &str = "[COUNTY]";

const UTAH_DISTRICTS: [(&str, &str); 29] = [
    ("Cache", "1st"),
    ("Box Elder", "1st"),
    ("Rich", "1st"),
    ("Davis", "2nd"),
    ("Morgan", "2nd"),
    ("Weber", "2nd"),
    ("Salt Lake", "3rd"),
    ("Summit", "3rd"),
    ("Tooele", "3rd"),
    ("Utah", "4th"),
    ("Millard", "4th"),
    ("Juab", "4th"),
    ("Wasatch", "4th"),
    ("Beaver", "5th"),
    ("Iron", "5th"),
    ("Washington", "5th"),
    ("Garfield", "6th"),
    ("Kane", "6th"),
    ("San Juan", "6th"),
    ("Carbon", "7th"),
    ("Duchesne", "7th"),
    ("Emery", "7th"),
    ("Grand", "7th"),
    ("Uintah", "7th"),
    ("Daggett", "8th"),
    ("Sanpete", "8th"),
    ("Sevier", "8th"),
    ("Wayne", "8th"),
    ("Piute", "8th"),
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountyDistrict {
    pub county: String,
    pub district: String,
}

/// Fixed county → district table.
///
/// Lookups are exact matches on the county names used by the intake
/// dropdowns. A miss degrades to [`DISTRICT_PLACEHOLDER`], never an error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistrictTable {
    entries: Vec<CountyDistrict>,
}

impl DistrictTable {
    pub fn new(entries: Vec<CountyDistrict>) -> Self {
        Self { entries }
    }

    /// The 29 Utah counties across the eight judicial districts.
    pub fn utah() -> Self {
        let entries = UTAH_DISTRICTS
            .iter()
            .map(|(county, district)| CountyDistrict {
                county: (*county).to_string(),
                district: (*district).to_string(),
            })
            .collect();
        Self { entries }
    }

    /// District label for a county, e.g. `"3rd"` for Salt Lake.
    pub fn judicial_district(&self, county: &str) -> &str {
        if county.is_empty() {
            return DISTRICT_PLACEHOLDER;
        }
        self.entries
            .iter()
            .find(|e| e.county == county)
            .map_or(DISTRICT_PLACEHOLDER, |e| e.district.as_str())
    }

    /// Caption line for court documents.
    ///
    /// ```rust
    /// use probate_path::jurisdiction::DistrictTable;
    ///
    /// let table = DistrictTable::utah();
    /// assert_eq!(
    ///     table.district_court_name("Salt Lake"),
    ///     "IN THE 3RD JUDICIAL DISTRICT COURT OF SALT LAKE COUNTY"
    /// );
    /// ```
    pub fn district_court_name(&self, county: &str) -> String {
        let district = self.judicial_district(county).to_uppercase();
        let county = if county.is_empty() {
            COUNTY_PLACEHOLDER.to_string()
        } else {
            county.to_uppercase()
        };
        format!("IN THE {district} JUDICIAL DISTRICT COURT OF {county} COUNTY")
    }

    /// Known counties in table order.
    pub fn counties(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.county.as_str())
    }

    pub fn is_known(&self, county: &str) -> bool {
        self.entries.iter().any(|e| e.county == county)
    }
}

impl Default for DistrictTable {
    fn default() -> Self {
        Self::utah()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_counties_map_to_districts() {
        let table = DistrictTable::utah();
        assert_eq!(table.judicial_district("Salt Lake"), "3rd");
        assert_eq!(table.judicial_district("Cache"), "1st");
        assert_eq!(table.judicial_district("Utah"), "4th");
        assert_eq!(table.judicial_district("Piute"), "8th");
    }

    #[test]
    fn unknown_and_empty_counties_get_placeholder() {
        let table = DistrictTable::utah();
        assert_eq!(table.judicial_district(""), DISTRICT_PLACEHOLDER);
        assert_eq!(table.judicial_district("Maricopa"), DISTRICT_PLACEHOLDER);
        assert_eq!(table.judicial_district("salt lake"), DISTRICT_PLACEHOLDER);
    }

    #[test]
    fn table_has_every_county_once() {
        let table = DistrictTable::utah();
        let mut counties: Vec<&str> = table.counties().collect();
        assert_eq!(counties.len(), 29);
        counties.sort_unstable();
        counties.dedup();
        assert_eq!(counties.len(), 29);
    }

    #[test]
    fn court_name_carries_placeholders() {
        let table = DistrictTable::utah();
        assert_eq!(
            table.district_court_name("Box Elder"),
            "IN THE 1ST JUDICIAL DISTRICT COURT OF BOX ELDER COUNTY"
        );
        assert_eq!(
            table.district_court_name("Nowhere"),
            "IN THE [DISTRICT COURT NUMBER] JUDICIAL DISTRICT COURT OF NOWHERE COUNTY"
        );
        assert_eq!(
            table.district_court_name(""),
            "IN THE [DISTRICT COURT NUMBER] JUDICIAL DISTRICT COURT OF [COUNTY] COUNTY"
        );
    }
}
