//! Grid aliases used by every stage

use ndarray::{Array2, Array3, ArrayView2, Axis, Zip};

/// Single-channel grid of samples, indexed `[row, col]`.
pub type Plane = Array2<f64>;

/// Per-pixel channel membership, same `(H, W)` as the mosaic it describes.
pub type Mask = Array2<bool>;

/// Multi-channel grid with shape `(H, W, C)`.
pub type Image = Array3<f64>;

/// `(height, width)`
pub type Shape = (usize, usize);

/// Keep `values` where `mask` is set and zero everything else.
pub fn masked(values: ArrayView2<f64>, mask: &Mask) -> Plane {
    Zip::from(values)
        .and(mask)
        .par_map_collect(|&v, &m| if m { v } else { 0.0 })
}

/// Stack equally shaped planes along a trailing channel axis.
pub fn stack_channels(planes: &[Plane]) -> Image {
    let (height, width) = planes.first().map(|p| p.dim()).unwrap_or((0, 0));
    let mut image = Image::zeros((height, width, planes.len()));
    for (channel, plane) in planes.iter().enumerate() {
        image.index_axis_mut(Axis(2), channel).assign(plane);
    }
    image
}
