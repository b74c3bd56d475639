//! Analysis of sampled histograms

/// Comparison of bucket counts against the exact discretized normal
pub mod statistics;
