//! Debayering module for reconstructing full-colour images from CFA mosaics
//!
//! Each method is a plain struct with a `process` entry point; callers pick
//! one through [`Method`].

mod bilinear;
mod malvar;
mod menon;
mod refine;
pub mod types;


pub use bilinear::BilinearDebayer;
pub use malvar::MalvarDebayer;
pub use menon::MenonDebayer;
pub use types::Method;

use ndarray::ArrayView2;

use crate::image_pipeline::cfa::CfaMasks;
use crate::image_pipeline::common::{DemosaicError, Image, Result};

/// Run `method` over a single-channel mosaic whose masks are already known.
pub fn process(method: Method, refine: bool, raw: ArrayView2<f64>, masks: &CfaMasks) -> Result<Image> {
    match method {
        Method::Bilinear => BilinearDebayer::new().process(raw, masks),
        Method::Malvar2004 => MalvarDebayer::new().process(raw, masks),
        Method::Menon2007 => MenonDebayer::new(refine).process(raw, masks),
    }
}

pub(crate) fn check_shape(raw: &ArrayView2<f64>, masks: &CfaMasks) -> Result<()> {
    if raw.dim() == masks.shape() {
        Ok(())
    } else {
        Err(DemosaicError::shape(
            format!("{:?} to match the CFA masks", masks.shape()),
            raw.shape(),
        ))
    }
}
