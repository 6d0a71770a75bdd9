use ndarray::{Array2, ArrayView2};

/// Dense 2-D convolution kernel with odd height and width.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    weights: Array2<f64>,
}

impl Kernel {
    /// Build a kernel from literal rows, dividing every weight by `divisor`.
    pub fn from_rows<const R: usize, const C: usize>(rows: [[f64; C]; R], divisor: f64) -> Self {
        const { assert!(R % 2 == 1 && C % 2 == 1, "kernel dimensions must be odd") };
        let weights = Array2::from_shape_fn((R, C), |(r, c)| rows[r][c] / divisor);
        Self { weights }
    }

    /// Exact transpose: weights are moved, never recomputed.
    pub fn transpose(&self) -> Self {
        Self {
            weights: self.weights.t().to_owned(),
        }
    }

    pub fn weights(&self) -> ArrayView2<'_, f64> {
        self.weights.view()
    }

    pub fn sum(&self) -> f64 {
        self.weights.sum()
    }

    /// Non-zero taps as `(row offset, col offset, weight)` in convolution
    /// orientation: output `(i, j)` reads input `(i + dy, j + dx)`.
    pub(crate) fn taps(&self) -> Vec<(isize, isize, f64)> {
        let (kh, kw) = self.weights.dim();
        let (cy, cx) = ((kh / 2) as isize, (kw / 2) as isize);
        self.weights
            .indexed_iter()
            .filter(|&(_, &w)| w != 0.0)
            .map(|((m, n), &w)| (cy - m as isize, cx - n as isize, w))
            .collect()
    }
}
