//! Synthetic scenes shared by the integration tests

#![allow(dead_code)]

use bayer_demosaic::logger;
use ndarray::{Array3, ArrayView3, Axis, Zip, s};

/// Route pipeline logs to the test output; `RUST_LOG` picks the level.
pub fn init_logging() {
    let _ = logger::try_init();
}

/// Same value in every channel of every pixel.
pub fn flat(height: usize, width: usize, value: f64) -> Array3<f64> {
    Array3::from_elem((height, width, 3), value)
}

/// Grey image that is linear in both row and column.
pub fn gray_ramp(height: usize, width: usize) -> Array3<f64> {
    Array3::from_shape_fn((height, width, 3), |(r, c, _)| 12.0 + 3.0 * r as f64 + 5.0 * c as f64)
}

/// Slowly varying colour scene in `[0, 255]`.
pub fn smooth_scene(height: usize, width: usize) -> Array3<f64> {
    let (h, w) = (height.max(2) as f64 - 1.0, width.max(2) as f64 - 1.0);
    Array3::from_shape_fn((height, width, 3), |(r, c, ch)| {
        let (y, x) = (r as f64 / h, c as f64 / w);
        let v = match ch {
            0 => 0.2 + 0.6 * x,
            1 => 0.3 + 0.4 * (x + y) / 2.0,
            _ => 0.8 - 0.5 * y,
        };
        255.0 * v
    })
}

/// Largest absolute difference over the pixels at least `margin` away from
/// every border.
pub fn max_interior_error(a: ArrayView3<f64>, b: ArrayView3<f64>, margin: usize) -> f64 {
    let (h, w, _) = a.dim();
    Zip::from(a.slice(s![margin..h - margin, margin..w - margin, ..]))
        .and(b.slice(s![margin..h - margin, margin..w - margin, ..]))
        .fold(0.0_f64, |acc, &x, &y| acc.max((x - y).abs()))
}

/// Mean absolute error of the first three channels.
pub fn mean_abs_error(reconstructed: ArrayView3<f64>, truth: ArrayView3<f64>) -> f64 {
    let rgb = reconstructed.slice(s![.., .., 0..3]);
    let diff = &rgb - &truth;
    diff.mapv(f64::abs).mean().unwrap_or(0.0)
}

/// Number of channels in an image.
pub fn channels(image: &Array3<f64>) -> usize {
    image.len_of(Axis(2))
}
