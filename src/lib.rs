//! Bayer colour filter array simulation and demosaicing.
//!
//! Reconstructs full-colour images from single-channel CFA mosaics with
//! bilinear, Malvar-He-Cutler (2004) or Menon (2007) interpolation, and
//! simulates the forward sampling that produces such mosaics.
//!
//! ```
//! use bayer_demosaic::image_pipeline::{BayerPattern, Method, demosaic, sample_mosaic};
//! use ndarray::Array3;
//!
//! let image = Array3::from_elem((6, 6, 3), 254.0);
//! let mosaic = sample_mosaic(image.view(), BayerPattern::Rggb).unwrap();
//! let rgb = demosaic(mosaic.view(), BayerPattern::Rggb, Method::Menon2007, true).unwrap();
//! assert_eq!(rgb.dim(), (6, 6, 3));
//! ```

pub mod image_pipeline;
pub mod logger;
