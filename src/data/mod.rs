/// Data layer: core types, loading, cleaning, and filtering.
///
/// Architecture:
/// ```text
///  vehicles_us.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Vec<RawListing>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  clean    │  impute nulls, coerce types → Vec<Listing>
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ ListingDataset │  rows + pre-computed column bounds
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply range/set predicates → filtered indices
///   └──────────┘
/// ```

pub mod clean;
pub mod filter;
pub mod loader;
pub mod model;
