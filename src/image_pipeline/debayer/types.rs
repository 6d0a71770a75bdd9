//! Types for debayering operations

use std::fmt;
use std::str::FromStr;

use crate::image_pipeline::cfa::BayerPattern;
use crate::image_pipeline::common::{DemosaicError, Result};

/// Reconstruction method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    /// Fixed low-pass kernels per channel.
    Bilinear,
    /// Malvar-He-Cutler gradient-corrected linear interpolation.
    Malvar2004,
    /// Menon directional interpolation with optional refinement.
    #[default]
    Menon2007,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::Bilinear, Method::Malvar2004, Method::Menon2007];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bilinear => "bilinear",
            Self::Malvar2004 => "malvar2004",
            Self::Menon2007 => "menon2007",
        }
    }

    /// Whether the method can reconstruct `pattern`.
    ///
    /// Only bilinear carries a plane for dead photosites.
    pub fn supports(self, pattern: BayerPattern) -> bool {
        self == Self::Bilinear || !pattern.has_aux()
    }

    pub(crate) fn check_pattern(self, pattern: BayerPattern) -> Result<()> {
        if self.supports(pattern) {
            Ok(())
        } else {
            Err(DemosaicError::UnsupportedPattern {
                method: self,
                pattern,
            })
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = DemosaicError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bilinear" => Ok(Self::Bilinear),
            "malvar2004" | "malvar" => Ok(Self::Malvar2004),
            "menon2007" | "menon" | "ddfapd" => Ok(Self::Menon2007),
            _ => Err(DemosaicError::UnsupportedMethod(s.to_string())),
        }
    }
}
