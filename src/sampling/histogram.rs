//! Fixed-width histogram of binned quantiles

use crate::io::error::{Result, SimulationError, invalid_parameter};
use ndarray::Array1;
use std::fmt;

/// Offset added to a quantile before rounding it to one of `bucket_count`
/// bucket indices
pub fn bucket_center(bucket_count: usize) -> f64 {
    bucket_count as f64 / 2.0
}

/// Ordered bucket counters, index 0 holding the most negative bucket
///
/// The bucket count is chosen at construction and never changes; every
/// access is bounds checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: Array1<u64>,
}

impl Histogram {
    /// Zero-initialized histogram with `bucket_count` buckets
    ///
    /// # Errors
    ///
    /// Returns an error if `bucket_count` is zero
    pub fn new(bucket_count: usize) -> Result<Self> {
        if bucket_count == 0 {
            return Err(invalid_parameter(
                "bucket_count",
                &bucket_count,
                &"histogram needs at least one bucket",
            ));
        }

        Ok(Self {
            counts: Array1::zeros(bucket_count),
        })
    }

    /// Build a histogram from existing counts
    ///
    /// # Errors
    ///
    /// Returns an error if `counts` is empty
    pub fn from_counts(counts: Vec<u64>) -> Result<Self> {
        if counts.is_empty() {
            return Err(invalid_parameter(
                "bucket_count",
                &0,
                &"histogram needs at least one bucket",
            ));
        }

        Ok(Self {
            counts: Array1::from_vec(counts),
        })
    }

    /// Number of buckets
    pub fn bucket_count(&self) -> usize {
        self.counts.len()
    }

    /// Increment the bucket at `index`, returning false when it is out of range
    pub fn record(&mut self, index: usize) -> bool {
        self.counts.get_mut(index).is_some_and(|count| {
            *count += 1;
            true
        })
    }

    /// Count stored at `index`, if the bucket exists
    pub fn get(&self, index: usize) -> Option<u64> {
        self.counts.get(index).copied()
    }

    /// Counts in bucket order
    pub fn counts(&self) -> &[u64] {
        self.counts.as_slice().unwrap_or(&[])
    }

    /// Sum of all bucket counts
    pub fn total(&self) -> u64 {
        self.counts.sum()
    }

    /// Add another histogram's counts into this one
    ///
    /// # Errors
    ///
    /// Returns an error if the bucket counts differ
    pub fn merge(&mut self, other: &Self) -> Result<()> {
        if self.bucket_count() != other.bucket_count() {
            return Err(SimulationError::HistogramMismatch {
                expected: self.bucket_count(),
                found: other.bucket_count(),
            });
        }

        self.counts += &other.counts;
        Ok(())
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, count) in self.counts.iter().enumerate() {
            if position > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{count}")?;
        }
        Ok(())
    }
}
