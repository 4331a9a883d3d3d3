use std::path::Path;

use anyhow::{Context, Result, bail};

use super::matrix::Matrix;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a matrix from a whitespace-delimited numeric text file.
///
/// Expected layout: one matrix row per line, values separated by spaces or
/// tabs. Blank lines and lines starting with `#` are skipped, matching the
/// convention of the tools that write these dumps.
pub fn load_matrix(path: &Path) -> Result<Matrix> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    parse_matrix(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Parse whitespace-delimited numeric text into a [`Matrix`].
///
/// Every data row must have the same number of values as the first; a ragged
/// input is an error, never a truncated matrix.
pub fn parse_matrix(text: &str) -> Result<Matrix> {
    let mut rows: Vec<Vec<f64>> = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let row = parse_row(trimmed, line_no)?;

        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                bail!(
                    "line {}: row has {} values but previous rows have {}",
                    line_no + 1,
                    row.len(),
                    first.len()
                );
            }
        }
        rows.push(row);
    }

    Ok(Matrix::from_rows(rows))
}

fn parse_row(line: &str, line_no: usize) -> Result<Vec<f64>> {
    line.split_whitespace()
        .enumerate()
        .map(|(col, tok)| {
            tok.parse::<f64>().with_context(|| {
                format!("line {}, value {}: '{tok}' is not a number", line_no + 1, col + 1)
            })
        })
        .collect()
}
