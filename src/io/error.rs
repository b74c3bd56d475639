//! Error types for simulation setup

use std::fmt;

/// Main error type for all simulation operations
///
/// Draws that fall outside the histogram and out-of-range probabilities are
/// part of normal operation and never surface here.
#[derive(Debug)]
pub enum SimulationError {
    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Histograms with different bucket counts cannot be merged
    HistogramMismatch {
        /// Bucket count of the receiving histogram
        expected: usize,
        /// Bucket count of the histogram being merged in
        found: usize,
    },

    /// Worker thread pool could not be created
    ThreadPool {
        /// Underlying rayon error
        source: rayon::ThreadPoolBuildError,
    },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::HistogramMismatch { expected, found } => {
                write!(
                    f,
                    "Cannot merge histogram with {found} buckets into one with {expected}"
                )
            }
            Self::ThreadPool { source } => {
                write!(f, "Failed to build worker thread pool: {source}")
            }
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ThreadPool { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for simulation results
pub type Result<T> = std::result::Result<T, SimulationError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SimulationError {
    SimulationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
