use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// BasicInfo – the attributes the filter engine looks at
// ---------------------------------------------------------------------------

/// Identity and classification fields of a vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicInfo {
    pub year: u32,
    pub make: String,
    pub model: String,
    #[serde(default)]
    pub trim: String,
    pub drive_type: String,
    pub transmission: String,
    pub recommended_fuel: String,
}

// ---------------------------------------------------------------------------
// TopFeatures – feature lists shown on the detail window
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopFeatures {
    #[serde(default)]
    pub interior: Vec<String>,
    #[serde(default)]
    pub exterior: Vec<String>,
    #[serde(default)]
    pub entertainment: Vec<String>,
    #[serde(default)]
    pub safety: Vec<String>,
}

impl TopFeatures {
    /// Feature groups paired with their display label, skipping empty ones.
    pub fn groups(&self) -> Vec<(&'static str, &[String])> {
        [
            ("Interior", self.interior.as_slice()),
            ("Exterior", self.exterior.as_slice()),
            ("Entertainment", self.entertainment.as_slice()),
            ("Safety", self.safety.as_slice()),
        ]
        .into_iter()
        .filter(|(_, items)| !items.is_empty())
        .collect()
    }
}

// ---------------------------------------------------------------------------
// VehicleRecord – one listing
// ---------------------------------------------------------------------------

/// A single vehicle listing.
///
/// Only `basic` takes part in filtering; the remaining groups are carried
/// through untouched for the card and detail views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub basic: BasicInfo,
    #[serde(default)]
    pub specs_and_dimension: BTreeMap<String, String>,
    #[serde(default)]
    pub powertrain: BTreeMap<String, String>,
    #[serde(default)]
    pub offroad_capability: BTreeMap<String, String>,
    #[serde(default)]
    pub top_features: TopFeatures,
}

impl VehicleRecord {
    /// Check the record invariants: positive year and non-empty identity fields.
    pub fn validate(&self) -> Result<()> {
        let b = &self.basic;
        if b.year == 0 {
            bail!("year must be a positive integer");
        }
        for (field, value) in [
            ("make", &b.make),
            ("model", &b.model),
            ("drive_type", &b.drive_type),
            ("transmission", &b.transmission),
            ("recommended_fuel", &b.recommended_fuel),
        ] {
            if value.trim().is_empty() {
                bail!("'{field}' must not be empty");
            }
        }
        Ok(())
    }

    /// "2023 Tesla Model Y"
    pub fn title(&self) -> String {
        format!("{} {} {}", self.basic.year, self.basic.make, self.basic.model)
    }

    /// Horsepower as listed under specs, falling back to the powertrain group.
    pub fn horsepower(&self) -> Option<&str> {
        self.specs_and_dimension
            .get("Engine horsepower")
            .or_else(|| self.powertrain.get("Horsepower"))
            .map(String::as_str)
    }

    pub fn seating(&self) -> Option<&str> {
        self.specs_and_dimension
            .get("Max seating capacity")
            .map(String::as_str)
    }
}

impl fmt::Display for VehicleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())?;
        if !self.basic.trim.is_empty() {
            write!(f, " {}", self.basic.trim)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Catalog – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The loaded records with pre-computed facet values for the filter dropdowns.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// All records, in source order.
    pub records: Vec<VehicleRecord>,
    /// Sorted unique makes.
    pub makes: BTreeSet<String>,
    /// Sorted unique model years.
    pub years: BTreeSet<u32>,
    /// Sorted unique recommended fuels.
    pub fuels: BTreeSet<String>,
}

impl Catalog {
    /// Build facet indices from the loaded records.
    pub fn from_records(records: Vec<VehicleRecord>) -> Self {
        let mut makes = BTreeSet::new();
        let mut years = BTreeSet::new();
        let mut fuels = BTreeSet::new();

        for rec in &records {
            makes.insert(rec.basic.make.clone());
            years.insert(rec.basic.year);
            fuels.insert(rec.basic.recommended_fuel.clone());
        }

        Catalog {
            records,
            makes,
            years,
            fuels,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(make: &str, year: u32, fuel: &str) -> VehicleRecord {
        VehicleRecord {
            basic: BasicInfo {
                year,
                make: make.to_string(),
                model: "Test".to_string(),
                trim: String::new(),
                drive_type: "all-wheel".to_string(),
                transmission: "8-speed automatic".to_string(),
                recommended_fuel: fuel.to_string(),
            },
            specs_and_dimension: BTreeMap::new(),
            powertrain: BTreeMap::new(),
            offroad_capability: BTreeMap::new(),
            top_features: TopFeatures::default(),
        }
    }

    #[test]
    fn optional_groups_default_when_missing() {
        let json = r#"{"basic":{"year":2020,"make":"Ford","model":"Ranger",
            "drive_type":"rear-wheel","transmission":"10-speed automatic",
            "recommended_fuel":"Gasoline"}}"#;
        let rec: VehicleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.basic.trim, "");
        assert!(rec.specs_and_dimension.is_empty());
        assert!(rec.top_features.groups().is_empty());
        assert!(rec.validate().is_ok());
    }

    #[test]
    fn missing_basic_is_a_parse_error() {
        let json = r#"{"powertrain":{"Horsepower":"300hp"}}"#;
        assert!(serde_json::from_str::<VehicleRecord>(json).is_err());
    }

    #[test]
    fn validate_rejects_empty_fields_and_zero_year() {
        let mut rec = record("Kia", 2021, "Gasoline");
        rec.basic.transmission = "  ".to_string();
        let err = rec.validate().unwrap_err();
        assert!(err.to_string().contains("transmission"));

        let rec = record("Kia", 0, "Gasoline");
        assert!(rec.validate().is_err());
    }

    #[test]
    fn horsepower_falls_back_to_powertrain() {
        let mut rec = record("Kia", 2021, "Gasoline");
        assert_eq!(rec.horsepower(), None);
        rec.powertrain.insert("Horsepower".into(), "281hp".into());
        assert_eq!(rec.horsepower(), Some("281hp"));
        rec.specs_and_dimension
            .insert("Engine horsepower".into(), "282hp".into());
        assert_eq!(rec.horsepower(), Some("282hp"));
    }

    #[test]
    fn catalog_collects_sorted_facets() {
        let catalog = Catalog::from_records(vec![
            record("Volvo", 2020, "Gasoline"),
            record("Audi", 2023, "Electric"),
            record("Volvo", 2021, "Gasoline"),
        ]);
        assert_eq!(catalog.len(), 3);
        assert_eq!(
            catalog.makes.iter().collect::<Vec<_>>(),
            vec!["Audi", "Volvo"]
        );
        assert_eq!(
            catalog.years.iter().copied().collect::<Vec<_>>(),
            vec![2020, 2021, 2023]
        );
        assert_eq!(catalog.fuels.len(), 2);
    }
}
