use std::time::Duration;

use crate::color::ColorMap;
use crate::data::filter::{apply, FilterCriteria};
use crate::data::model::{Catalog, VehicleRecord};
use crate::data::provider::{self, DataSource, LoadOutcome, PendingLoad};

/// Drive-type choices offered in the filter panel; matched as substrings.
pub const DRIVE_OPTIONS: [&str; 3] = ["all-wheel", "front-wheel", "rear-wheel"];

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded catalog (None until the first load completes).
    pub catalog: Option<Catalog>,

    /// Text in the search box; only applied on submit.
    pub search_input: String,
    /// Search text in effect for the current results.
    pub query: String,

    // Dropdown selections; empty string means "Any".
    pub make: String,
    pub year: String,
    pub drive: String,
    pub transmission: String,
    pub fuel: String,

    /// Records passing the current filters, in catalog order (cached).
    pub results: Vec<VehicleRecord>,

    /// Badge colours per fuel type.
    pub fuel_colors: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Source of the catalog currently shown.
    pub source: Option<DataSource>,

    /// Record open in the detail window.
    pub detail: Option<VehicleRecord>,

    pending: Option<PendingLoad>,
}

impl AppState {
    /// Whether a load is in flight.
    pub fn loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Kick off a deferred load. Any load already in flight is abandoned.
    pub fn start_load(&mut self, source: DataSource, latency: Duration) {
        log::debug!("Loading cars from {source} (latency {latency:?})");
        self.pending = Some(provider::load(source, latency));
        self.status_message = None;
    }

    /// Check for a finished load; returns true when the catalog changed.
    pub fn poll_load(&mut self) -> bool {
        let Some(outcome) = self.pending.as_ref().and_then(PendingLoad::poll) else {
            return false;
        };
        self.finish_load(outcome);
        true
    }

    /// Ingest a load result, rebuild facets and colours, and refilter.
    ///
    /// Whatever load was still in flight is dropped: the newest catalog wins.
    pub fn finish_load(&mut self, outcome: LoadOutcome) {
        self.pending = None;
        let catalog = Catalog::from_records(outcome.records);
        self.fuel_colors = ColorMap::new(&catalog.fuels);
        self.catalog = Some(catalog);
        self.source = Some(outcome.source);
        self.status_message = outcome.error;
        self.detail = None;
        self.refilter();
    }

    /// Snapshot the widget state as an immutable criteria value.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::default()
            .with_query(self.query.as_str())
            .with_make(self.make.as_str())
            .with_year(self.year.as_str())
            .with_drive(self.drive.as_str())
            .with_transmission(self.transmission.as_str())
            .with_fuel(self.fuel.as_str())
    }

    /// Recompute `results` after a filter change.
    pub fn refilter(&mut self) {
        if let Some(catalog) = &self.catalog {
            let criteria = self.criteria();
            self.results = apply(&catalog.records, &criteria)
                .into_iter()
                .cloned()
                .collect();
            log::debug!(
                "{:?} matched {} of {} cars",
                criteria,
                self.results.len(),
                catalog.len()
            );
        }
    }

    /// Apply the search box text (trimmed) and refilter.
    pub fn submit_search(&mut self) {
        self.query = self.search_input.trim().to_string();
        self.refilter();
    }

    /// Reset every filter and the search text.
    pub fn clear_filters(&mut self) {
        self.search_input.clear();
        self.query.clear();
        self.make.clear();
        self.year.clear();
        self.drive.clear();
        self.transmission.clear();
        self.fuel.clear();
        self.refilter();
    }
}
