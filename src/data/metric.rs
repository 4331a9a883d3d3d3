use thiserror::Error;

use super::matrix::Matrix;

// ---------------------------------------------------------------------------
// RMS difference between two equal-shaped matrices
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetricError {
    #[error("shape mismatch: {a_rows}x{a_cols} vs {b_rows}x{b_cols}")]
    ShapeMismatch {
        a_rows: usize,
        a_cols: usize,
        b_rows: usize,
        b_cols: usize,
    },
}

/// Root-mean-square of the elementwise difference: `sqrt(mean((a - b)^2))`.
///
/// The shapes must match exactly; there is no broadcasting or truncation.
pub fn rms_difference(a: &Matrix, b: &Matrix) -> Result<f64, MetricError> {
    if a.rows != b.rows || a.cols != b.cols {
        return Err(MetricError::ShapeMismatch {
            a_rows: a.rows,
            a_cols: a.cols,
            b_rows: b.rows,
            b_cols: b.cols,
        });
    }

    let sum_sq: f64 = a
        .values()
        .iter()
        .zip(b.values())
        .map(|(&va, &vb)| (va - vb).powi(2))
        .sum();

    Ok((sum_sq / a.len() as f64).sqrt())
}
