//! Colour filter array layout
//!
//! Bayer tile descriptors, the per-channel sampling masks derived from them,
//! and the forward sampling operator that turns an RGB image into a sensor
//! mosaic.

mod masks;
mod mosaic;
mod pattern;


pub use masks::CfaMasks;
pub use mosaic::SparseMosaic;
pub use pattern::{BayerPattern, Channel};
