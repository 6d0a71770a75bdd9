use thiserror::Error;

use crate::image_pipeline::cfa::BayerPattern;
use crate::image_pipeline::debayer::Method;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DemosaicError {
    #[error("\"{0}\" CFA pattern is invalid, it must be one of RGGB, BGGR, GRBG, GBRG, RGXB, BGXR, GRBX, GBRX")]
    InvalidPattern(String),

    #[error("Unsupported demosaicing method: {0}")]
    UnsupportedMethod(String),

    #[error("{method} cannot reconstruct the {pattern} pattern: dead photosites are only handled by bilinear")]
    UnsupportedPattern {
        method: Method,
        pattern: BayerPattern,
    },

    #[error("Shape mismatch: expected {expected}, got {got:?}")]
    ShapeMismatch { expected: String, got: Vec<usize> },

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),
}

impl DemosaicError {
    pub(crate) fn shape(expected: impl Into<String>, got: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.into(),
            got: got.to_vec(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DemosaicError>;
