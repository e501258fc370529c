/// Data layer: core types, loading, and the derivation pipeline.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Vec<RawRecord>
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ normalize  │  presence gate + typed defaults → Vec<VehicleRecord>
///   └───────────┘
///        │
///        ├────────────┬──────────────┐
///        ▼            ▼              ▼
///   ┌───────┐  ┌──────────────┐  ┌───────┐
///   │ stats  │  │ distribution  │  │ page   │
///   └───────┘  └──────────────┘  └───────┘
///    summary     grouped counts     table
///    cards       + percentages      windows
/// ```
///
/// Everything downstream of the loader is a pure function over an immutable
/// snapshot; derived products are recomputed in full whenever a new dataset
/// is installed.

pub mod distribution;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod page;
pub mod stats;
