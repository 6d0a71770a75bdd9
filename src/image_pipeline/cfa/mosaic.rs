use ndarray::{ArrayView2, ArrayView3, Axis};
use tracing::debug;

use crate::image_pipeline::cfa::{CfaMasks, Channel};
use crate::image_pipeline::common::types::masked;
use crate::image_pipeline::common::{DemosaicError, Plane, Result};

/// Sensor mosaic split into one sparse plane per colour channel.
///
/// Each plane is zero outside its channel's mask.
#[derive(Clone, Debug, PartialEq)]
pub struct SparseMosaic {
    planes: [Plane; 3],
}

impl SparseMosaic {
    /// Forward CFA sampling of an `(H, W, 3)` RGB image.
    pub fn from_image(image: ArrayView3<f64>, masks: &CfaMasks) -> Result<Self> {
        let (height, width, channels) = image.dim();
        if channels != 3 {
            return Err(DemosaicError::shape("(H, W, 3) RGB image", image.shape()));
        }
        if (height, width) != masks.shape() {
            return Err(DemosaicError::shape(
                format!("{:?} to match the CFA masks", masks.shape()),
                &[height, width],
            ));
        }

        debug!(
            pattern = %masks.pattern(),
            width,
            height,
            "Sampling RGB image through CFA"
        );

        let planes = Channel::COLORS
            .map(|channel| masked(image.index_axis(Axis(2), channel.index()), &masks[channel]));
        Ok(Self { planes })
    }

    /// Split a single-channel sensor mosaic into its colour planes.
    pub fn from_raw(raw: ArrayView2<f64>, masks: &CfaMasks) -> Result<Self> {
        if raw.dim() != masks.shape() {
            return Err(DemosaicError::shape(
                format!("{:?} to match the CFA masks", masks.shape()),
                raw.shape(),
            ));
        }
        let planes = Channel::COLORS.map(|channel| masked(raw, &masks[channel]));
        Ok(Self { planes })
    }

    /// Plane of a colour channel, `None` for [`Channel::Aux`].
    pub fn plane(&self, channel: Channel) -> Option<&Plane> {
        self.planes.get(channel.index())
    }

    /// Collapse the planes into the single-channel sensor readout.
    ///
    /// Dead photosites read as zero.
    pub fn to_raw(&self) -> Plane {
        let [red, green, blue] = &self.planes;
        red + green + blue
    }
}
