//! Convolution primitives
//!
//! 2-D kernel convolution and separable 1-D convolution along either axis,
//! with explicit boundary handling. Output rows are computed in parallel.

mod boundary;
mod filter;
mod kernel;


pub use boundary::BoundaryMode;
pub use filter::{convolve, convolve1d, shifted};
pub use kernel::Kernel;
