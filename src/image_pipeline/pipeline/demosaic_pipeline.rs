use std::sync::Arc;

use ndarray::{ArrayView, ArrayView2, ArrayView3, ArrayViewD, Axis, Dimension, Ix2, Ix3};
use tracing::{debug, info, instrument, warn};

use crate::image_pipeline::{
    cfa::{BayerPattern, CfaMasks, SparseMosaic},
    common::{DemosaicError, Image, Plane, Result, Shape},
    debayer,
    pipeline::{DemosaicConfig, MaskCache},
};

/// Mosaic sampling and reconstruction with a shared mask cache.
///
/// Safe to share across threads; every call is independent apart from the
/// read-mostly cache.
#[derive(Debug, Default)]
pub struct DemosaicPipeline {
    config: DemosaicConfig,
    cache: MaskCache,
}

impl DemosaicPipeline {
    pub fn new(config: DemosaicConfig) -> Self {
        Self {
            cache: MaskCache::with_capacity(config.mask_cache_capacity),
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(DemosaicError::InvalidDimensions(width, height));
        }

        if width % 2 == 1 || height % 2 == 1 {
            if self.config.require_even_dimensions {
                return Err(DemosaicError::InvalidDimensions(width, height));
            }
            warn!(
                width,
                height, "Odd dimensions: the last row/column holds a partial CFA tile"
            );
        }

        Ok(())
    }

    /// Masks for `pattern` over a grid of `shape`, from the cache when enabled.
    pub fn masks(&self, pattern: BayerPattern, shape: Shape) -> Arc<CfaMasks> {
        if self.config.cache_masks {
            self.cache.get_or_insert(pattern, shape)
        } else {
            Arc::new(CfaMasks::new(pattern, shape))
        }
    }

    /// Forward CFA sampling into sparse per-channel planes.
    pub fn sample_planes<D: Dimension>(
        &self,
        image: ArrayView<f64, D>,
        pattern: BayerPattern,
    ) -> Result<SparseMosaic> {
        let image = as_rgb(image.into_dyn())?;
        let (height, width, _) = image.dim();
        self.validate_dimensions(width, height)?;
        let masks = self.masks(pattern, (height, width));
        SparseMosaic::from_image(image, &masks)
    }

    /// Forward CFA sampling into the single-channel sensor mosaic.
    pub fn sample<D: Dimension>(&self, image: ArrayView<f64, D>, pattern: BayerPattern) -> Result<Plane> {
        Ok(self.sample_planes(image, pattern)?.to_raw())
    }

    /// Reconstruct a full-colour image from a `(H, W)` or `(H, W, 1)` mosaic.
    ///
    /// Output is `(H, W, 3)`, or `(H, W, 4)` when bilinear reconstructs a
    /// pattern with dead photosites.
    #[instrument(skip(self, mosaic), fields(method = %self.config.method))]
    pub fn process<D: Dimension>(&self, mosaic: ArrayView<f64, D>, pattern: BayerPattern) -> Result<Image> {
        let method = self.config.method;
        method.check_pattern(pattern)?;
        let raw = as_mosaic(mosaic.into_dyn())?;
        let (height, width) = raw.dim();
        info!(width, height, "Starting demosaicing");

        {
            let _span = tracing::info_span!("validate_dimensions", width, height).entered();
            self.validate_dimensions(width, height)?;
        }

        let masks = {
            let _span = tracing::info_span!("masks").entered();
            self.masks(pattern, (height, width))
        };

        let image = {
            let _span = tracing::info_span!("reconstruct").entered();
            debayer::process(method, self.config.refine, raw, &masks)?
        };

        info!(
            width,
            height,
            channels = image.dim().2,
            "Demosaicing complete"
        );
        Ok(image)
    }

    /// Same as [`process`](Self::process), with the pattern given by name.
    ///
    /// The name is validated before the mosaic is touched.
    pub fn process_named<D: Dimension>(&self, mosaic: ArrayView<f64, D>, pattern: &str) -> Result<Image> {
        let pattern: BayerPattern = pattern.parse()?;
        self.process(mosaic, pattern)
    }

    /// Reconstruct from the sparse per-channel representation.
    pub fn process_sparse(&self, mosaic: &SparseMosaic, pattern: BayerPattern) -> Result<Image> {
        let raw = mosaic.to_raw();
        self.process(raw.view(), pattern)
    }

    pub fn config(&self) -> &DemosaicConfig {
        &self.config
    }

    /// Replace the configuration; a new cache capacity starts an empty cache.
    pub fn set_config(&mut self, config: DemosaicConfig) {
        if config.mask_cache_capacity != self.cache.capacity() {
            self.cache = MaskCache::with_capacity(config.mask_cache_capacity);
        }
        self.config = config;
    }

    pub fn cache(&self) -> &MaskCache {
        &self.cache
    }
}

fn as_mosaic(mosaic: ArrayViewD<'_, f64>) -> Result<ArrayView2<'_, f64>> {
    let shape = mosaic.shape().to_vec();
    let squeezed = if shape.len() == 3 && shape[2] == 1 {
        debug!(?shape, "Squeezing trailing singleton channel");
        mosaic.index_axis_move(Axis(2), 0)
    } else {
        mosaic
    };
    squeezed
        .into_dimensionality::<Ix2>()
        .map_err(|_| DemosaicError::shape("(H, W) or (H, W, 1) mosaic", &shape))
}

fn as_rgb(image: ArrayViewD<'_, f64>) -> Result<ArrayView3<'_, f64>> {
    let shape = image.shape().to_vec();
    match image.into_dimensionality::<Ix3>() {
        Ok(rgb) if shape[2] == 3 => Ok(rgb),
        _ => Err(DemosaicError::shape("(H, W, 3) RGB image", &shape)),
    }
}
