use std::fmt;
use std::str::FromStr;

use crate::image_pipeline::common::{DemosaicError, Result};

/// Channel sampled by a photosite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red channel.
    Red = 0,
    /// Green channel.
    Green = 1,
    /// Blue channel.
    Blue = 2,
    /// Dead or auxiliary photosite, written `X` in pattern strings.
    Aux = 3,
}

impl Channel {
    /// The three colour channels in output order.
    pub const COLORS: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Colour channels followed by the auxiliary channel.
    pub const ALL: [Channel; 4] = [Channel::Red, Channel::Green, Channel::Blue, Channel::Aux];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => f.write_str("R"),
            Self::Green => f.write_str("G"),
            Self::Blue => f.write_str("B"),
            Self::Aux => f.write_str("X"),
        }
    }
}

/// 2x2 Bayer tile layout.
///
/// The tile is read row-major: positions (0,0), (0,1), (1,0), (1,1). The `X`
/// forms replace one green photosite of the plain layout with a dead site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BayerPattern {
    Rggb,
    Bggr,
    Grbg,
    Gbrg,
    Rgxb,
    Bgxr,
    Grbx,
    Gbrx,
}

use Channel::{Aux, Blue, Green, Red};

impl BayerPattern {
    pub const ALL: [BayerPattern; 8] = [
        BayerPattern::Rggb,
        BayerPattern::Bggr,
        BayerPattern::Grbg,
        BayerPattern::Gbrg,
        BayerPattern::Rgxb,
        BayerPattern::Bgxr,
        BayerPattern::Grbx,
        BayerPattern::Gbrx,
    ];

    /// Channels of the tile in row-major order.
    pub fn tile(self) -> [Channel; 4] {
        match self {
            Self::Rggb => [Red, Green, Green, Blue],
            Self::Bggr => [Blue, Green, Green, Red],
            Self::Grbg => [Green, Red, Blue, Green],
            Self::Gbrg => [Green, Blue, Red, Green],
            Self::Rgxb => [Red, Green, Aux, Blue],
            Self::Bgxr => [Blue, Green, Aux, Red],
            Self::Grbx => [Green, Red, Blue, Aux],
            Self::Gbrx => [Green, Blue, Red, Aux],
        }
    }

    /// Channel at the given grid position (wraps modulo the tile).
    #[inline]
    pub fn channel_at(self, row: usize, col: usize) -> Channel {
        self.tile()[(row % 2) * 2 + col % 2]
    }

    /// `true` when one tile position is a dead photosite.
    pub fn has_aux(self) -> bool {
        self.tile().contains(&Aux)
    }

    /// Plain Bayer layout the pattern was derived from.
    pub fn base(self) -> BayerPattern {
        match self {
            Self::Rgxb => Self::Rggb,
            Self::Bgxr => Self::Bggr,
            Self::Grbx => Self::Grbg,
            Self::Gbrx => Self::Gbrg,
            plain => plain,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rggb => "RGGB",
            Self::Bggr => "BGGR",
            Self::Grbg => "GRBG",
            Self::Gbrg => "GBRG",
            Self::Rgxb => "RGXB",
            Self::Bgxr => "BGXR",
            Self::Grbx => "GRBX",
            Self::Gbrx => "GBRX",
        }
    }
}

impl fmt::Display for BayerPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BayerPattern {
    type Err = DemosaicError;

    fn from_str(s: &str) -> Result<Self> {
        let upper = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|pattern| pattern.as_str() == upper)
            .ok_or_else(|| DemosaicError::InvalidPattern(s.to_string()))
    }
}
