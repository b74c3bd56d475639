//! Empirical validation of a rational approximation to the inverse standard
//! normal CDF
//!
//! Uniform draws are mapped through the quantile approximation and binned
//! into a fixed-width histogram whose shape can then be checked against the
//! exact discretized normal distribution.

#![forbid(unsafe_code)]

/// Histogram analysis against the exact normal expectation
pub mod analysis;
/// Command-line surface, configuration, logging and error handling
pub mod io;
/// Quantile approximation and normal distribution functions
pub mod math;
/// Uniform samplers, histogram and the sampling harness
pub mod sampling;

pub use io::error::{Result, SimulationError};
pub use math::quantile::quantile;
