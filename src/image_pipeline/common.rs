//! Common utilities module
//!
//! This module contains the error type and grid aliases shared across the
//! demosaicing pipeline.

pub mod error;
pub mod types;

pub use error::{DemosaicError, Result};
pub use types::{Image, Mask, Plane, Shape};
