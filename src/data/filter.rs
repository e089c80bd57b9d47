use super::model::VehicleRecord;

// ---------------------------------------------------------------------------
// Filter criteria: one value per widget, empty string means "any"
// ---------------------------------------------------------------------------

/// Maximum number of records returned when no criterion is set.
pub const UNFILTERED_LIMIT: usize = 6;

/// Immutable set of criteria for one query.
///
/// Every field is optional; an empty string means the criterion is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Free text matched case-insensitively against make and model.
    pub query: String,
    /// Exact make.
    pub make: String,
    /// Model year as text, compared against the decimal year.
    pub year: String,
    /// Substring of the drive type ("wheel", "front-wheel", ...).
    pub drive: String,
    /// "manual" or "automatic"; anything else is ignored.
    pub transmission: String,
    /// Exact recommended fuel.
    pub fuel: String,
}

impl FilterCriteria {
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_make(mut self, make: impl Into<String>) -> Self {
        self.make = make.into();
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = year.into();
        self
    }

    pub fn with_drive(mut self, drive: impl Into<String>) -> Self {
        self.drive = drive.into();
        self
    }

    pub fn with_transmission(mut self, transmission: impl Into<String>) -> Self {
        self.transmission = transmission.into();
        self
    }

    pub fn with_fuel(mut self, fuel: impl Into<String>) -> Self {
        self.fuel = fuel.into();
        self
    }

    /// True when at least one criterion is non-empty.
    ///
    /// Only this decides whether the [`UNFILTERED_LIMIT`] cap applies; an
    /// unrecognised transmission value still counts as filtering.
    pub fn is_filtering(&self) -> bool {
        [
            &self.query,
            &self.make,
            &self.year,
            &self.drive,
            &self.transmission,
            &self.fuel,
        ]
        .iter()
        .any(|field| !field.is_empty())
    }

    /// Whether a single record satisfies every present criterion.
    pub fn matches(&self, record: &VehicleRecord) -> bool {
        let basic = &record.basic;

        if !self.query.is_empty() {
            let needle = self.query.to_lowercase();
            let hit = basic.make.to_lowercase().contains(&needle)
                || basic.model.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }

        if !self.make.is_empty() && basic.make != self.make {
            return false;
        }

        if !self.year.is_empty() && basic.year.to_string() != self.year {
            return false;
        }

        if !self.drive.is_empty() && !basic.drive_type.contains(self.drive.as_str()) {
            return false;
        }

        if let Some(class) = TransmissionClass::parse(&self.transmission) {
            if !class.accepts(&basic.transmission) {
                return false;
            }
        }

        if !self.fuel.is_empty() && basic.recommended_fuel != self.fuel {
            return false;
        }

        true
    }
}

// ---------------------------------------------------------------------------
// Transmission classification
// ---------------------------------------------------------------------------

/// Coarse gearbox class derived from a free-text transmission label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransmissionClass {
    Automatic,
    Manual,
}

impl TransmissionClass {
    /// Dropdown values, in display order.
    pub const ALL: [TransmissionClass; 2] = [TransmissionClass::Automatic, TransmissionClass::Manual];

    /// Classify a criterion value. Unknown or empty values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "automatic" => Some(TransmissionClass::Automatic),
            "manual" => Some(TransmissionClass::Manual),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TransmissionClass::Automatic => "automatic",
            TransmissionClass::Manual => "manual",
        }
    }

    /// Whether a record's transmission label belongs to this class.
    pub fn accepts(self, label: &str) -> bool {
        let label = label.to_lowercase();
        match self {
            TransmissionClass::Manual => label.contains("manual"),
            TransmissionClass::Automatic => {
                // Two separate guards: a label carrying a manual marker is out
                // even if it also says "cvt" or "automatic".
                if label.contains("manual") || label.contains("stick") {
                    return false;
                }
                if !label.contains("automatic") && !label.contains("cvt") {
                    return false;
                }
                true
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Engine entry points
// ---------------------------------------------------------------------------

/// Return indices of records that pass all present criteria, in input order.
///
/// With no criterion set the result is capped at [`UNFILTERED_LIMIT`];
/// otherwise every match is returned.
pub fn filtered_indices(records: &[VehicleRecord], criteria: &FilterCriteria) -> Vec<usize> {
    let matching = records
        .iter()
        .enumerate()
        .filter(|(_, rec)| criteria.matches(rec))
        .map(|(i, _)| i);

    if criteria.is_filtering() {
        matching.collect()
    } else {
        matching.take(UNFILTERED_LIMIT).collect()
    }
}

/// Filter `records` by `criteria`, borrowing the matches in input order.
pub fn apply<'a>(records: &'a [VehicleRecord], criteria: &FilterCriteria) -> Vec<&'a VehicleRecord> {
    filtered_indices(records, criteria)
        .into_iter()
        .map(|i| &records[i])
        .collect()
}
