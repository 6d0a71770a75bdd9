//! Pipeline orchestration
//!
//! Configuration, mask caching and the entry points that tie pattern masks,
//! mosaic sampling and reconstruction together.

mod config;
mod demosaic_pipeline;
mod mask_cache;


pub use config::{DemosaicConfig, DemosaicConfigBuilder};
pub use demosaic_pipeline::DemosaicPipeline;
pub use mask_cache::MaskCache;

use ndarray::{ArrayView, Dimension};

use crate::image_pipeline::cfa::{BayerPattern, CfaMasks, SparseMosaic};
use crate::image_pipeline::common::{Image, Plane, Result, Shape};
use crate::image_pipeline::debayer::Method;

fn uncached(config: DemosaicConfig) -> DemosaicPipeline {
    DemosaicPipeline::new(DemosaicConfig {
        cache_masks: false,
        ..config
    })
}

/// Per-channel sampling masks for `pattern` over a grid of `shape`.
pub fn generate_masks(pattern: BayerPattern, shape: Shape) -> CfaMasks {
    CfaMasks::new(pattern, shape)
}

/// Sample an `(H, W, 3)` image through the CFA, keeping one plane per channel.
pub fn sample_planes<D: Dimension>(image: ArrayView<f64, D>, pattern: BayerPattern) -> Result<SparseMosaic> {
    uncached(DemosaicConfig::default()).sample_planes(image, pattern)
}

/// Sample an `(H, W, 3)` image through the CFA into the `(H, W)` sensor mosaic.
pub fn sample_mosaic<D: Dimension>(image: ArrayView<f64, D>, pattern: BayerPattern) -> Result<Plane> {
    uncached(DemosaicConfig::default()).sample(image, pattern)
}

/// Reconstruct a full-colour image from a sensor mosaic.
pub fn demosaic<D: Dimension>(
    mosaic: ArrayView<f64, D>,
    pattern: BayerPattern,
    method: Method,
    refine: bool,
) -> Result<Image> {
    let config = DemosaicConfig::builder().method(method).refine(refine).build();
    uncached(config).process(mosaic, pattern)
}

/// [`demosaic`] with pattern and method given by name, both validated
/// before the mosaic is touched.
pub fn demosaic_named<D: Dimension>(
    mosaic: ArrayView<f64, D>,
    pattern: &str,
    method: &str,
    refine: bool,
) -> Result<Image> {
    let pattern: BayerPattern = pattern.parse()?;
    let method: Method = method.parse()?;
    demosaic(mosaic, pattern, method, refine)
}
