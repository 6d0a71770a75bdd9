//! Demosaicing pipeline configuration types

use crate::image_pipeline::debayer::Method;
use crate::image_pipeline::pipeline::mask_cache::DEFAULT_CAPACITY;

/// Configuration for mosaic to RGB reconstruction
#[derive(Debug, Clone, PartialEq)]
pub struct DemosaicConfig {
    /// Reconstruction method
    pub method: Method,
    /// Run the Menon refinement pass (ignored by the other methods)
    pub refine: bool,
    /// Reject zero-sized mosaics before any work
    pub validate_dimensions: bool,
    /// Reject odd widths/heights instead of reconstructing a partial final tile
    pub require_even_dimensions: bool,
    /// Reuse masks across calls with the same pattern and shape
    pub cache_masks: bool,
    /// Most (pattern, shape) entries the mask cache keeps; each costs four
    /// `H x W` boolean grids
    pub mask_cache_capacity: usize,
}

impl Default for DemosaicConfig {
    fn default() -> Self {
        Self {
            method: Method::Menon2007,
            refine: true,
            validate_dimensions: true,
            require_even_dimensions: false,
            cache_masks: true,
            mask_cache_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl DemosaicConfig {
    pub fn builder() -> DemosaicConfigBuilder {
        DemosaicConfigBuilder::default()
    }
}

/// Builder for DemosaicConfig
#[derive(Default)]
pub struct DemosaicConfigBuilder {
    method: Option<Method>,
    refine: Option<bool>,
    validate_dimensions: Option<bool>,
    require_even_dimensions: Option<bool>,
    cache_masks: Option<bool>,
    mask_cache_capacity: Option<usize>,
}

impl DemosaicConfigBuilder {
    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn refine(mut self, refine: bool) -> Self {
        self.refine = Some(refine);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn require_even_dimensions(mut self, require: bool) -> Self {
        self.require_even_dimensions = Some(require);
        self
    }

    pub fn cache_masks(mut self, cache: bool) -> Self {
        self.cache_masks = Some(cache);
        self
    }

    pub fn mask_cache_capacity(mut self, capacity: usize) -> Self {
        self.mask_cache_capacity = Some(capacity);
        self
    }

    pub fn build(self) -> DemosaicConfig {
        let default = DemosaicConfig::default();
        DemosaicConfig {
            method: self.method.unwrap_or(default.method),
            refine: self.refine.unwrap_or(default.refine),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            require_even_dimensions: self
                .require_even_dimensions
                .unwrap_or(default.require_even_dimensions),
            cache_masks: self.cache_masks.unwrap_or(default.cache_masks),
            mask_cache_capacity: self
                .mask_cache_capacity
                .unwrap_or(default.mask_cache_capacity),
        }
    }
}
