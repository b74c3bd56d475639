//! Mathematical utilities for the approximation and its validation

/// Standard normal distribution functions backed by a double precision `erfc`
pub mod probability;
/// Rational inverse normal CDF approximation with Halley refinement
pub mod quantile;
