//! Refinement pass applied after Menon interpolation

use ndarray::Axis;

use crate::image_pipeline::cfa::{CfaMasks, Channel};
use crate::image_pipeline::common::Plane;
use crate::image_pipeline::debayer::menon::{DirectionMap, K_B, along, overwrite, pick};

const FIR: [f64; 3] = [1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0];

/// Re-estimate every channel from smoothed colour differences.
///
/// Runs three strictly ordered updates, each reading the planes left by the
/// previous one:
/// 1. green at red/blue photosites, from R-G and B-G averaged along the chosen direction;
/// 2. red/blue at green photosites, from R-G and B-G averaged across the neighbouring samples;
/// 3. red at blue and blue at red photosites, from R-B averaged along the chosen direction.
///
/// Green photosites keep their sampled green; red and blue photosites keep
/// their own sample.
pub(super) fn refine(planes: [Plane; 3], masks: &CfaMasks, direction: &DirectionMap) -> [Plane; 3] {
    let [mut red, mut green, mut blue] = planes;
    let red_mask = &masks[Channel::Red];
    let green_mask = &masks[Channel::Green];
    let blue_mask = &masks[Channel::Blue];

    {
        let red_green = &red - &green;
        let blue_green = &blue - &green;
        let rg_h = along(red_green.view(), &FIR, Axis(1));
        let rg_v = along(red_green.view(), &FIR, Axis(0));
        let bg_h = along(blue_green.view(), &FIR, Axis(1));
        let bg_v = along(blue_green.view(), &FIR, Axis(0));

        overwrite(&mut green, |idx| {
            if blue_mask[idx] {
                Some(blue[idx] - pick(direction[idx], bg_h[idx], bg_v[idx]))
            } else if red_mask[idx] {
                Some(red[idx] - pick(direction[idx], rg_h[idx], rg_v[idx]))
            } else {
                None
            }
        });
    }

    {
        let red_rows = masks.rows_with(Channel::Red);
        let red_cols = masks.columns_with(Channel::Red);
        let blue_rows = masks.rows_with(Channel::Blue);
        let blue_cols = masks.columns_with(Channel::Blue);

        let red_green = &red - &green;
        let blue_green = &blue - &green;
        let rg_h = along(red_green.view(), &K_B, Axis(1));
        let rg_v = along(red_green.view(), &K_B, Axis(0));
        let bg_h = along(blue_green.view(), &K_B, Axis(1));
        let bg_v = along(blue_green.view(), &K_B, Axis(0));

        // A column match takes precedence over a row match.
        overwrite(&mut red, |idx| {
            if !green_mask[idx] {
                None
            } else if blue_cols[idx] {
                Some(green[idx] + rg_h[idx])
            } else if blue_rows[idx] {
                Some(green[idx] + rg_v[idx])
            } else {
                None
            }
        });
        overwrite(&mut blue, |idx| {
            if !green_mask[idx] {
                None
            } else if red_cols[idx] {
                Some(green[idx] + bg_h[idx])
            } else if red_rows[idx] {
                Some(green[idx] + bg_v[idx])
            } else {
                None
            }
        });
    }

    let red_blue = &red - &blue;
    let rb_h = along(red_blue.view(), &FIR, Axis(1));
    let rb_v = along(red_blue.view(), &FIR, Axis(0));
    overwrite(&mut red, |idx| {
        blue_mask[idx].then(|| blue[idx] + pick(direction[idx], rb_h[idx], rb_v[idx]))
    });
    overwrite(&mut blue, |idx| {
        red_mask[idx].then(|| red[idx] - pick(direction[idx], rb_h[idx], rb_v[idx]))
    });

    [red, green, blue]
}
