use anyhow::{Context, Result};

use super::model::VehicleRecord;

/// Reference listings bundled with the binary, in display order.
const REFERENCE_JSON: &str = include_str!("catalog.json");

/// Parse the bundled reference listings.
pub fn reference_catalog() -> Result<Vec<VehicleRecord>> {
    serde_json::from_str(REFERENCE_JSON).context("parsing bundled reference catalog")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_catalog_is_valid() {
        let records = reference_catalog().unwrap();
        assert_eq!(records.len(), 16);
        for rec in &records {
            rec.validate()
                .unwrap_or_else(|e| panic!("{}: {e}", rec.title()));
        }
    }

    #[test]
    fn reference_catalog_keeps_source_order() {
        let records = reference_catalog().unwrap();
        let first = &records[0].basic;
        assert_eq!((first.make.as_str(), first.model.as_str()), ("Tesla", "Model Y"));
        let last = &records[records.len() - 1].basic;
        assert_eq!((last.make.as_str(), last.model.as_str()), ("Mazda", "MX-5 Miata"));
    }

    #[test]
    fn reference_catalog_carries_payload_groups() {
        let records = reference_catalog().unwrap();
        let civic = records
            .iter()
            .find(|r| r.basic.model == "Civic")
            .unwrap();
        assert_eq!(civic.basic.trim, "Si");
        assert_eq!(civic.horsepower(), Some("200hp"));
        assert_eq!(civic.seating(), Some("5"));
        assert_eq!(civic.top_features.safety.len(), 2);
        assert_eq!(
            civic.offroad_capability.get("Ground clearance (min)").map(String::as_str),
            Some("134mm")
        );
    }
}
