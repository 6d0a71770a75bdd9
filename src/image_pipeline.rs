//! Image processing pipeline module
//!
//! Bayer CFA simulation and reconstruction, split into the CFA layout, the
//! convolution substrate, the demosaicing methods and the orchestration layer.

pub mod cfa;
pub mod common;
pub mod convolution;
pub mod debayer;
pub mod pipeline;

pub use common::{
    DemosaicError,
    Image,
    Mask,
    Plane,
    Result,
};

pub use cfa::{
    BayerPattern,
    CfaMasks,
    Channel,
    SparseMosaic,
};

pub use debayer::{
    BilinearDebayer,
    MalvarDebayer,
    MenonDebayer,
    Method,
};

pub use pipeline::{
    DemosaicConfig,
    DemosaicConfigBuilder,
    DemosaicPipeline,
    MaskCache,
    demosaic,
    demosaic_named,
    generate_masks,
    sample_mosaic,
    sample_planes,
};
