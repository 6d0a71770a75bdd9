use ndarray::{ArrayView2, Axis, Zip};
use tracing::{debug, debug_span};

use crate::image_pipeline::cfa::{CfaMasks, Channel};
use crate::image_pipeline::common::types::{masked, stack_channels};
use crate::image_pipeline::common::{Image, Mask, Plane, Result};
use crate::image_pipeline::convolution::{BoundaryMode, Kernel, convolve, convolve1d, shifted};
use crate::image_pipeline::debayer::{Method, check_shape, refine};

/// Per-pixel direction choice: `true` where the horizontal estimate was kept.
pub(crate) type DirectionMap = Mask;

const H_0: [f64; 5] = [0.0, 0.5, 0.0, 0.5, 0.0];
const H_1: [f64; 5] = [-0.25, 0.0, 0.5, 0.0, -0.25];

/// Two-tap average of the neighbours either side.
pub(super) const K_B: [f64; 3] = [0.5, 0.0, 0.5];

/// Classifier weights for the horizontal disagreement map; the vertical map
/// uses the transpose.
const K_DIRECTION: [[f64; 5]; 5] = [
    [0.0, 0.0, 1.0, 0.0, 1.0],
    [0.0, 0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 3.0, 0.0, 3.0],
    [0.0, 0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0, 0.0, 1.0],
];

/// Menon (2007) demosaicing via directional filtering and a posteriori
/// decision (DDFAPD).
///
/// Green is estimated twice, along rows and along columns; a per-pixel
/// classifier keeps whichever estimate yields the smoother chrominance. Red and
/// blue are then rebuilt from colour differences against the chosen green.
/// With `refine` set, a final pass re-estimates every channel from smoothed
/// colour differences along the chosen direction.
///
/// Reference: D. Menon, S. Andriani, G. Calvagno, "Demosaicing With
/// Directional Filtering and a posteriori Decision", IEEE TIP 16(1), 2007.
#[derive(Debug, Clone, Copy)]
pub struct MenonDebayer {
    refine: bool,
}

impl MenonDebayer {
    pub fn new(refine: bool) -> Self {
        Self { refine }
    }

    pub fn refines(&self) -> bool {
        self.refine
    }

    pub fn process(&self, raw: ArrayView2<f64>, masks: &CfaMasks) -> Result<Image> {
        Method::Menon2007.check_pattern(masks.pattern())?;
        check_shape(&raw, masks)?;
        debug!(
            pattern = %masks.pattern(),
            refine = self.refine,
            "Menon directional interpolation"
        );

        let (planes, direction) = interpolate(raw, masks);
        let [red, green, blue] = if self.refine {
            let _span = debug_span!("refine").entered();
            refine::refine(planes, masks, &direction)
        } else {
            planes
        };
        Ok(stack_channels(&[red, green, blue]))
    }
}

impl Default for MenonDebayer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Mirrored 1-D convolution along `axis`.
pub(super) fn along(input: ArrayView2<f64>, taps: &[f64], axis: Axis) -> Plane {
    convolve1d(input, taps, axis, BoundaryMode::Mirror)
}

/// Elementwise `if cond { if_true } else { if_false }`.
pub(super) fn select(cond: &Mask, if_true: &Plane, if_false: &Plane) -> Plane {
    Zip::from(cond)
        .and(if_true)
        .and(if_false)
        .par_map_collect(|&c, &t, &f| if c { t } else { f })
}

/// Replace the pixels of `target` for which `update` yields a value.
pub(super) fn overwrite<F>(target: &mut Plane, update: F)
where
    F: Fn((usize, usize)) -> Option<f64> + Sync + Send,
{
    Zip::indexed(target).par_for_each(|idx, value| {
        if let Some(new) = update(idx) {
            *value = new;
        }
    });
}

#[inline]
pub(super) fn pick(horizontal: bool, h: f64, v: f64) -> f64 {
    if horizontal { h } else { v }
}

fn chrominance(red: &Plane, blue: &Plane, green: &Plane, masks: &CfaMasks) -> Plane {
    Zip::from(red)
        .and(blue)
        .and(green)
        .and(&masks[Channel::Red])
        .and(&masks[Channel::Blue])
        .par_map_collect(|&r, &b, &g, &is_red, &is_blue| {
            if is_blue {
                b - g
            } else if is_red {
                r - g
            } else {
                0.0
            }
        })
}

/// Everything up to, but not including, refinement.
pub(crate) fn interpolate(raw: ArrayView2<f64>, masks: &CfaMasks) -> ([Plane; 3], DirectionMap) {
    let red_mask = &masks[Channel::Red];
    let green_mask = &masks[Channel::Green];
    let blue_mask = &masks[Channel::Blue];

    let mut red = masked(raw, red_mask);
    let green = masked(raw, green_mask);
    let mut blue = masked(raw, blue_mask);

    let (green_h, green_v) = {
        let _span = debug_span!("directional_green").entered();
        let estimate_h = along(raw, &H_0, Axis(1)) + along(raw, &H_1, Axis(1));
        let estimate_v = along(raw, &H_0, Axis(0)) + along(raw, &H_1, Axis(0));
        (
            select(green_mask, &green, &estimate_h),
            select(green_mask, &green, &estimate_v),
        )
    };

    let direction = {
        let _span = debug_span!("direction_decision").entered();
        let chroma_h = chrominance(&red, &blue, &green_h, masks);
        let chroma_v = chrominance(&red, &blue, &green_v, masks);

        let mismatch_h = (&chroma_h
            - &shifted(chroma_h.view(), Axis(1), 2, BoundaryMode::Mirror))
            .mapv(f64::abs);
        let mismatch_v = (&chroma_v
            - &shifted(chroma_v.view(), Axis(0), 2, BoundaryMode::Mirror))
            .mapv(f64::abs);

        let classifier = Kernel::from_rows(K_DIRECTION, 1.0);
        let score_h = convolve(mismatch_h.view(), &classifier, BoundaryMode::Constant(0.0));
        let score_v = convolve(
            mismatch_v.view(),
            &classifier.transpose(),
            BoundaryMode::Constant(0.0),
        );
        Zip::from(&score_v)
            .and(&score_h)
            .par_map_collect(|&v, &h| v >= h)
    };

    let green = select(&direction, &green_h, &green_v);
    drop((green_h, green_v));

    {
        let _span = debug_span!("red_blue_at_green").entered();
        let red_rows = masks.rows_with(Channel::Red);
        let blue_rows = masks.rows_with(Channel::Blue);
        let green_avg_h = along(green.view(), &K_B, Axis(1));
        let green_avg_v = along(green.view(), &K_B, Axis(0));

        let red_avg_h = along(red.view(), &K_B, Axis(1));
        overwrite(&mut red, |idx| {
            (green_mask[idx] && red_rows[idx]).then(|| green[idx] + red_avg_h[idx] - green_avg_h[idx])
        });
        let red_avg_v = along(red.view(), &K_B, Axis(0));
        overwrite(&mut red, |idx| {
            (green_mask[idx] && blue_rows[idx]).then(|| green[idx] + red_avg_v[idx] - green_avg_v[idx])
        });

        let blue_avg_h = along(blue.view(), &K_B, Axis(1));
        overwrite(&mut blue, |idx| {
            (green_mask[idx] && blue_rows[idx]).then(|| green[idx] + blue_avg_h[idx] - green_avg_h[idx])
        });
        let blue_avg_v = along(blue.view(), &K_B, Axis(0));
        overwrite(&mut blue, |idx| {
            (green_mask[idx] && red_rows[idx]).then(|| green[idx] + blue_avg_v[idx] - green_avg_v[idx])
        });
    }

    {
        let _span = debug_span!("red_blue_at_blue_red").entered();
        opposite_colours(&mut red, &mut blue, masks, &direction);
    }

    ([red, green, blue], direction)
}

/// Red at blue photosites, then blue at red photosites, from the colour
/// difference averaged along the direction chosen for each pixel.
pub(super) fn opposite_colours(red: &mut Plane, blue: &mut Plane, masks: &CfaMasks, direction: &DirectionMap) {
    let red_mask = &masks[Channel::Red];
    let blue_mask = &masks[Channel::Blue];

    let red_h = along(red.view(), &K_B, Axis(1));
    let red_v = along(red.view(), &K_B, Axis(0));
    let blue_h = along(blue.view(), &K_B, Axis(1));
    let blue_v = along(blue.view(), &K_B, Axis(0));
    {
        let blue = &*blue;
        overwrite(red, |idx| {
            blue_mask[idx].then(|| {
                if direction[idx] {
                    blue[idx] + red_h[idx] - blue_h[idx]
                } else {
                    blue[idx] + red_v[idx] - blue_v[idx]
                }
            })
        });
    }

    let red_h = along(red.view(), &K_B, Axis(1));
    let red_v = along(red.view(), &K_B, Axis(0));
    let red = &*red;
    overwrite(blue, |idx| {
        red_mask[idx].then(|| {
            if direction[idx] {
                red[idx] + blue_h[idx] - red_h[idx]
            } else {
                red[idx] + blue_v[idx] - red_v[idx]
            }
        })
    });
}
