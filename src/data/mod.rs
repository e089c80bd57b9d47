/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  bundled catalog.json / user .json
///        │
///        ▼
///   ┌──────────┐
///   │ provider  │  delayed load on a worker thread → Vec<VehicleRecord>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Catalog  │  records + facet sets (makes, years, fuels)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  FilterCriteria → matching records (capped when unfiltered)
///   └──────────┘
/// ```

pub mod catalog;
pub mod filter;
pub mod loader;
pub mod model;
pub mod provider;
