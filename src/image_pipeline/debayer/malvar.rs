use ndarray::{ArrayView2, Zip};
use tracing::debug;

use crate::image_pipeline::cfa::{CfaMasks, Channel};
use crate::image_pipeline::common::types::{masked, stack_channels};
use crate::image_pipeline::common::{Image, Result};
use crate::image_pipeline::convolution::{BoundaryMode, Kernel, convolve};
use crate::image_pipeline::debayer::{Method, check_shape};

// All kernels are divided by 8.

/// Green at red and blue photosites.
const GR_GB: [[f64; 5]; 5] = [
    [0.0, 0.0, -1.0, 0.0, 0.0],
    [0.0, 0.0, 2.0, 0.0, 0.0],
    [-1.0, 2.0, 4.0, 2.0, -1.0],
    [0.0, 0.0, 2.0, 0.0, 0.0],
    [0.0, 0.0, -1.0, 0.0, 0.0],
];

/// Red at green in a red row, blue at green in a blue row.
const RG_RB_BG_BR: [[f64; 5]; 5] = [
    [0.0, 0.0, 0.5, 0.0, 0.0],
    [0.0, -1.0, 0.0, -1.0, 0.0],
    [-1.0, 4.0, 5.0, 4.0, -1.0],
    [0.0, -1.0, 0.0, -1.0, 0.0],
    [0.0, 0.0, 0.5, 0.0, 0.0],
];

/// Red at blue, blue at red.
const RB_BB_BR_RR: [[f64; 5]; 5] = [
    [0.0, 0.0, -1.5, 0.0, 0.0],
    [0.0, 2.0, 0.0, 2.0, 0.0],
    [-1.5, 0.0, 6.0, 0.0, -1.5],
    [0.0, 2.0, 0.0, 2.0, 0.0],
    [0.0, 0.0, -1.5, 0.0, 0.0],
];

/// Malvar-He-Cutler (2004) gradient-corrected linear demosaicing.
///
/// Five 5x5 kernels are convolved over the whole mosaic; each pixel then takes
/// the result that matches its position, classified by whether its row and
/// column carry red or blue samples.
///
/// Reference: H.S. Malvar, L. He, R. Cutler, "High-Quality Linear
/// Interpolation for Demosaicing of Bayer-Patterned Color Images", ICASSP 2004.
pub struct MalvarDebayer {
    gr_gb: Kernel,
    rg_rb_bg_br: Kernel,
    rg_br_bg_rb: Kernel,
    rb_bb_br_rr: Kernel,
}

impl MalvarDebayer {
    pub fn new() -> Self {
        let rg_rb_bg_br = Kernel::from_rows(RG_RB_BG_BR, 8.0);
        Self {
            gr_gb: Kernel::from_rows(GR_GB, 8.0),
            rg_br_bg_rb: rg_rb_bg_br.transpose(),
            rg_rb_bg_br,
            rb_bb_br_rr: Kernel::from_rows(RB_BB_BR_RR, 8.0),
        }
    }

    /// Green-row kernel for red in red rows / blue in blue rows.
    pub fn same_row_kernel(&self) -> &Kernel {
        &self.rg_rb_bg_br
    }

    /// Green-row kernel for red in blue rows / blue in red rows.
    pub fn cross_row_kernel(&self) -> &Kernel {
        &self.rg_br_bg_rb
    }

    pub fn process(&self, raw: ArrayView2<f64>, masks: &CfaMasks) -> Result<Image> {
        Method::Malvar2004.check_pattern(masks.pattern())?;
        check_shape(&raw, masks)?;
        debug!(pattern = %masks.pattern(), "Malvar-He-Cutler interpolation");

        let red_mask = &masks[Channel::Red];
        let blue_mask = &masks[Channel::Blue];

        let mut red = masked(raw, red_mask);
        let mut green = masked(raw, &masks[Channel::Green]);
        let mut blue = masked(raw, blue_mask);

        let green_at_rb = convolve(raw, &self.gr_gb, BoundaryMode::Mirror);
        Zip::from(&mut green)
            .and(red_mask)
            .and(blue_mask)
            .and(&green_at_rb)
            .par_for_each(|g, &is_red, &is_blue, &estimate| {
                if is_red || is_blue {
                    *g = estimate;
                }
            });

        let rbg_rbbr = convolve(raw, &self.rg_rb_bg_br, BoundaryMode::Mirror);
        let rbg_brrb = convolve(raw, &self.rg_br_bg_rb, BoundaryMode::Mirror);
        let rbgr_bbrr = convolve(raw, &self.rb_bb_br_rr, BoundaryMode::Mirror);

        let red_rows = masks.rows_with(Channel::Red);
        let red_cols = masks.columns_with(Channel::Red);
        let blue_rows = masks.rows_with(Channel::Blue);
        let blue_cols = masks.columns_with(Channel::Blue);

        // Later rules override earlier ones; the diagonal kernel wins.
        Zip::indexed(&mut red).par_for_each(|idx, r| {
            if red_rows[idx] && blue_cols[idx] {
                *r = rbg_rbbr[idx];
            }
            if blue_rows[idx] && red_cols[idx] {
                *r = rbg_brrb[idx];
            }
            if blue_rows[idx] && blue_cols[idx] {
                *r = rbgr_bbrr[idx];
            }
        });
        Zip::indexed(&mut blue).par_for_each(|idx, b| {
            if blue_rows[idx] && red_cols[idx] {
                *b = rbg_rbbr[idx];
            }
            if red_rows[idx] && blue_cols[idx] {
                *b = rbg_brrb[idx];
            }
            if red_rows[idx] && red_cols[idx] {
                *b = rbgr_bbrr[idx];
            }
        });

        Ok(stack_channels(&[red, green, blue]))
    }
}

impl Default for MalvarDebayer {
    fn default() -> Self {
        Self::new()
    }
}
