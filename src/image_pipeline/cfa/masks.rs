use std::ops::Index;

use ndarray::{Array1, Array2, Axis};

use crate::image_pipeline::cfa::{BayerPattern, Channel};
use crate::image_pipeline::common::{Mask, Shape};

/// Per-channel sampling masks for one pattern and grid shape.
///
/// The red, green and blue masks are pairwise disjoint and never cover a dead
/// photosite. The auxiliary mask marks exactly the dead photosites and is empty
/// for plain Bayer layouts.
#[derive(Clone, Debug, PartialEq)]
pub struct CfaMasks {
    pattern: BayerPattern,
    shape: Shape,
    masks: [Mask; 4],
}

impl CfaMasks {
    pub fn new(pattern: BayerPattern, shape: Shape) -> Self {
        let masks =
            Channel::ALL.map(|channel| Array2::from_shape_fn(shape, |(row, col)| {
                pattern.channel_at(row, col) == channel
            }));
        Self {
            pattern,
            shape,
            masks,
        }
    }

    pub fn pattern(&self) -> BayerPattern {
        self.pattern
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Rows holding at least one sample of `channel`, broadcast across every column.
    pub fn rows_with(&self, channel: Channel) -> Mask {
        let any_in_row: Array1<bool> =
            self[channel].map_axis(Axis(1), |row| row.iter().any(|&sampled| sampled));
        Array2::from_shape_fn(self.shape, |(row, _)| any_in_row[row])
    }

    /// Columns holding at least one sample of `channel`, broadcast down every row.
    pub fn columns_with(&self, channel: Channel) -> Mask {
        let any_in_col: Array1<bool> =
            self[channel].map_axis(Axis(0), |col| col.iter().any(|&sampled| sampled));
        Array2::from_shape_fn(self.shape, |(_, col)| any_in_col[col])
    }

    /// Number of photosites sampling `channel`.
    pub fn count(&self, channel: Channel) -> usize {
        self[channel].iter().filter(|&&sampled| sampled).count()
    }
}

impl Index<Channel> for CfaMasks {
    type Output = Mask;

    fn index(&self, channel: Channel) -> &Mask {
        &self.masks[channel.index()]
    }
}
