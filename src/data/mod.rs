/// Data layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .tsv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → InternDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ InternDataset  │  Vec<InternRecord>, distinct filter values
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  department ∧ status predicates → filtered indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ metrics   │  means, per-department means, histogram → DashboardView
///   └──────────┘
/// ```

pub mod filter;
pub mod histogram;
pub mod loader;
pub mod metrics;
pub mod model;
