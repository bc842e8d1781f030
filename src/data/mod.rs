/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///  .parquet / .json / .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Spectrum
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Spectrum  │  m/z axis + summed intensity
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Window   │  contiguous m/z sub-range (analysis::select)
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
