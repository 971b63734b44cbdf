/// Data layer: scanning, loading, ordering and summarizing cases.
///
/// Architecture:
/// ```text
///  root/<case>/<...wallShearStress...>
///        │
///        ▼
///   ┌──────────┐
///   │ scanner   │  one result file per case directory
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse floats, drop zeros → Case
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ CaseCollection  │  reference case first
///   └────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  stats    │  quartiles, whiskers, mean → CaseSummary
///   └──────────┘
/// ```

pub mod error;
pub mod loader;
pub mod model;
pub mod scanner;
pub mod stats;
