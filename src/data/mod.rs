/// Data layer: core types, loading, and sample cleaning.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet  (one file per vowel)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → RawTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ RawTable  │  column names + dynamically-typed cells
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  coerce f1/f2, drop bad rows → Vec<FormantSample>
///   └──────────┘
/// ```
///
/// Cleaned samples accumulate per vowel in a `FormantDataset`; everything
/// downstream of that lives in the `analysis` module.

pub mod loader;
pub mod model;
pub mod filter;
