use ndarray::ArrayView2;
use tracing::debug;

use crate::image_pipeline::cfa::{CfaMasks, Channel};
use crate::image_pipeline::common::types::{masked, stack_channels};
use crate::image_pipeline::common::{Image, Plane, Result};
use crate::image_pipeline::convolution::{BoundaryMode, Kernel, convolve};
use crate::image_pipeline::debayer::check_shape;

const H_G: [[f64; 3]; 3] = [
    [0.0, 1.0, 0.0],
    [1.0, 4.0, 1.0],
    [0.0, 1.0, 0.0],
];

const H_RBX: [[f64; 3]; 3] = [
    [1.0, 2.0, 1.0],
    [2.0, 4.0, 2.0],
    [1.0, 2.0, 1.0],
];

/// Bilinear interpolation of each sparse channel plane.
///
/// Green uses the plus-shaped kernel; red, blue and the auxiliary channel use
/// the 3x3 tent. Patterns with a dead photosite produce a fourth output
/// channel (R, G, B, X); plain Bayer patterns produce three.
pub struct BilinearDebayer {
    green: Kernel,
    red_blue: Kernel,
}

impl BilinearDebayer {
    pub fn new() -> Self {
        Self {
            green: Kernel::from_rows(H_G, 4.0),
            red_blue: Kernel::from_rows(H_RBX, 4.0),
        }
    }

    pub fn process(&self, raw: ArrayView2<f64>, masks: &CfaMasks) -> Result<Image> {
        check_shape(&raw, masks)?;
        let channels: &[Channel] = if masks.pattern().has_aux() {
            &Channel::ALL
        } else {
            &Channel::COLORS
        };
        debug!(
            pattern = %masks.pattern(),
            channels = channels.len(),
            "Bilinear interpolation"
        );

        let planes: Vec<Plane> = channels
            .iter()
            .map(|&channel| {
                let kernel = match channel {
                    Channel::Green => &self.green,
                    _ => &self.red_blue,
                };
                let sparse = masked(raw, &masks[channel]);
                convolve(sparse.view(), kernel, BoundaryMode::Mirror)
            })
            .collect();
        Ok(stack_channels(&planes))
    }
}

impl Default for BilinearDebayer {
    fn default() -> Self {
        Self::new()
    }
}
