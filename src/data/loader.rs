use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value as JsonValue;

use super::model::VehicleRecord;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load vehicle records from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – `[{ "basic": {...}, "specs_and_dimension": {...}, ... }, ...]`
pub fn load_file(path: &Path) -> Result<Vec<VehicleRecord>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => load_json(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema, the same shape the listings API answers with:
///
/// ```json
/// [
///   {
///     "basic": {
///       "year": 2023, "make": "Tesla", "model": "Model Y",
///       "trim": "Performance 4Dr SUV", "drive_type": "all-wheel",
///       "transmission": "1 speed automatic", "recommended_fuel": "Electric"
///     },
///     "specs_and_dimension": { "Engine horsepower": "425hp" },
///     "top_features": { "safety": ["Back-Up Camera"] }
///   },
///   ...
/// ]
/// ```
///
/// Rows are decoded one at a time so an error names the offending row.
fn load_json(path: &Path) -> Result<Vec<VehicleRecord>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_records(&text)
}

/// Decode and validate a JSON array of records.
pub fn parse_records(text: &str) -> Result<Vec<VehicleRecord>> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;

    let rows = match root {
        JsonValue::Array(rows) => rows,
        _ => bail!("Expected top-level JSON array"),
    };

    let mut records = Vec::with_capacity(rows.len());

    for (i, row) in rows.into_iter().enumerate() {
        let record: VehicleRecord = serde_json::from_value(row)
            .with_context(|| format!("Row {i} is not a vehicle record"))?;
        record
            .validate()
            .with_context(|| format!("Row {i} ({})", record.title()))?;
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TWO_ROWS: &str = r#"[
        {"basic":{"year":2022,"make":"Honda","model":"Civic","trim":"Si",
          "drive_type":"front-wheel","transmission":"6-speed manual",
          "recommended_fuel":"Gasoline"}},
        {"basic":{"year":2023,"make":"Nissan","model":"Murano",
          "drive_type":"all-wheel","transmission":"CVT",
          "recommended_fuel":"Gasoline"},
         "specs_and_dimension":{"Max seating capacity":"5"}}
    ]"#;

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_json_file() {
        let file = write_temp(".json", TWO_ROWS);
        let records = load_file(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].seating(), Some("5"));
    }

    #[test]
    fn extension_is_case_insensitive() {
        let file = write_temp(".JSON", TWO_ROWS);
        assert_eq!(load_file(file.path()).unwrap().len(), 2);
    }

    #[test]
    fn rejects_unknown_extension() {
        let file = write_temp(".csv", "year,make\n");
        let err = load_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Unsupported file extension"));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_file(Path::new("/nonexistent/cars.json")).is_err());
    }

    #[test]
    fn rejects_non_array_root() {
        let err = parse_records(r#"{"basic":{}}"#).unwrap_err();
        assert!(err.to_string().contains("top-level JSON array"));
    }

    #[test]
    fn names_the_row_missing_basic() {
        let err = parse_records(r#"[{"basic":{"year":2020,"make":"Kia","model":"Rio",
            "drive_type":"front-wheel","transmission":"CVT","recommended_fuel":"Gasoline"}},
            {"powertrain":{}}]"#)
        .unwrap_err();
        assert!(format!("{err:#}").contains("Row 1"));
    }

    #[test]
    fn names_the_row_failing_validation() {
        let err = parse_records(r#"[{"basic":{"year":2020,"make":"","model":"Rio",
            "drive_type":"front-wheel","transmission":"CVT","recommended_fuel":"Gasoline"}}]"#)
        .unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("Row 0"));
        assert!(msg.contains("make"));
    }

    #[test]
    fn empty_array_is_fine() {
        assert!(parse_records("[]").unwrap().is_empty());
    }
}
