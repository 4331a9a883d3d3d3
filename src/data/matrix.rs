// ---------------------------------------------------------------------------
// Matrix – a dense 2-D grid of f64 values
// ---------------------------------------------------------------------------

/// A dense row-major matrix of `f64` values.
///
/// Built once by the loader and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Build a matrix from equally-sized rows.
    ///
    /// The loader guarantees consistent row lengths before calling this; a
    /// ragged input here is a programming error, not a data error.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        debug_assert!(rows.iter().all(|r| r.len() == n_cols));

        let data: Vec<f64> = rows.into_iter().flatten().collect();
        Matrix {
            rows: n_rows,
            cols: n_cols,
            data,
        }
    }

    /// Value at (row, col). Panics on out-of-bounds, like slice indexing.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// Return a new matrix with rows and columns swapped.
    pub fn transposed(&self) -> Matrix {
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                data.push(self.get(row, col));
            }
        }
        Matrix {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }

    /// Minimum and maximum over all finite values, for colour scaling.
    /// `None` when the matrix holds no finite value at all.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut range: Option<(f64, f64)> = None;
        for &v in &self.data {
            if !v.is_finite() {
                continue;
            }
            range = Some(match range {
                Some((min, max)) => (min.min(v), max.max(v)),
                None => (v, v),
            });
        }
        range
    }

    /// Shape as a `rows x cols` display string.
    pub fn shape_label(&self) -> String {
        format!("{}x{}", self.rows, self.cols)
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the matrix has no cells.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Flat row-major view of the values.
    pub fn values(&self) -> &[f64] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transpose_swaps_shape_and_cells() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let t = m.transposed();

        assert_eq!((t.rows, t.cols), (3, 2));
        assert_eq!(t.get(0, 0), 1.0);
        assert_eq!(t.get(0, 1), 4.0);
        assert_eq!(t.get(2, 0), 3.0);
        assert_eq!(t.get(2, 1), 6.0);
    }

    #[test]
    fn double_transpose_is_identity() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]);
        assert_eq!(m.transposed().transposed(), m);
    }

    #[test]
    fn value_range_ignores_non_finite() {
        let m = Matrix::from_rows(vec![vec![f64::NAN, 2.0], vec![-1.0, f64::INFINITY]]);
        assert_eq!(m.value_range(), Some((-1.0, 2.0)));
    }

    #[test]
    fn value_range_of_all_nan_is_none() {
        let m = Matrix::from_rows(vec![vec![f64::NAN, f64::NAN]]);
        assert_eq!(m.value_range(), None);
    }

    #[test]
    fn empty_matrix() {
        let m = Matrix::from_rows(Vec::new());
        assert!(m.is_empty());
        assert_eq!((m.rows, m.cols), (0, 0));
        assert_eq!(m.value_range(), None);
    }
}
