/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  spacex_launch_dash.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + validate rows → LaunchTable
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ LaunchTable  │  Vec<LaunchRecord>, distinct sites, payload bounds
///   └─────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  site / payload predicates, outcome counts
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
