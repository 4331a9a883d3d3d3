/// Data layer: the matrix type, text loading, and the comparison metric.
///
/// Architecture:
/// ```text
///  whitespace-delimited .txt
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Matrix
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Matrix   │  dense row-major f64 grid
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  metric   │  rms_difference(a, b) → scalar
///   └──────────┘
/// ```

pub mod loader;
pub mod matrix;
pub mod metric;
