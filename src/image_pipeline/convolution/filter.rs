use ndarray::parallel::prelude::*;
use ndarray::{Array2, ArrayView2, Axis};

use crate::image_pipeline::convolution::{BoundaryMode, Kernel};

#[inline]
fn sample(input: &ArrayView2<f64>, row: isize, col: isize, mode: BoundaryMode) -> f64 {
    let (height, width) = input.dim();
    match (mode.resolve(row, height), mode.resolve(col, width)) {
        (Some(r), Some(c)) => input[[r, c]],
        _ => mode.fill(),
    }
}

/// Evaluate `taps` at every output pixel, one rayon task per output row.
fn apply_taps(input: ArrayView2<f64>, taps: &[(isize, isize, f64)], mode: BoundaryMode) -> Array2<f64> {
    let mut output = Array2::<f64>::zeros(input.dim());
    output
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(row, mut out_row)| {
            for (col, out) in out_row.iter_mut().enumerate() {
                let mut acc = 0.0;
                for &(dy, dx, weight) in taps {
                    acc += weight * sample(&input, row as isize + dy, col as isize + dx, mode);
                }
                *out = acc;
            }
        });
    output
}

/// 2-D convolution of `input` with `kernel`.
///
/// The kernel is point-reflected (true convolution, not correlation) and
/// centred on its middle element.
pub fn convolve(input: ArrayView2<f64>, kernel: &Kernel, mode: BoundaryMode) -> Array2<f64> {
    apply_taps(input, &kernel.taps(), mode)
}

/// 1-D convolution along `axis`: `Axis(1)` filters each row, `Axis(0)` each column.
pub fn convolve1d(input: ArrayView2<f64>, weights: &[f64], axis: Axis, mode: BoundaryMode) -> Array2<f64> {
    let centre = (weights.len() / 2) as isize;
    let taps: Vec<(isize, isize, f64)> = weights
        .iter()
        .enumerate()
        .filter(|&(_, &w)| w != 0.0)
        .map(|(m, &w)| {
            let offset = centre - m as isize;
            match axis {
                Axis(0) => (offset, 0, w),
                _ => (0, offset, w),
            }
        })
        .collect();
    apply_taps(input, &taps, mode)
}

/// Copy of `input` read `offset` samples further along `axis`:
/// `out[i, j] = input[i, j + offset]` for `Axis(1)`.
///
/// Same as padding the trailing edge and slicing off the leading samples.
pub fn shifted(input: ArrayView2<f64>, axis: Axis, offset: isize, mode: BoundaryMode) -> Array2<f64> {
    let tap = match axis {
        Axis(0) => (offset, 0, 1.0),
        _ => (0, offset, 1.0),
    };
    apply_taps(input, &[tap], mode)
}
