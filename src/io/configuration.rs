//! Runtime configuration defaults

// Sampling defaults
/// Default number of draws per run
pub const DEFAULT_ITERATIONS: u64 = 100_000;
/// Default number of histogram buckets
pub const DEFAULT_BUCKET_COUNT: usize = 16;
/// Default worker count; one worker runs the sequential harness
pub const DEFAULT_THREADS: usize = 1;

// Progress bar display settings
/// Draws between progress bar updates
pub const PROGRESS_BATCH: u64 = 1024;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Analysis settings
/// Deviation, in standard deviations, tolerated before a bucket is flagged
pub const DEFAULT_SIGMA_THRESHOLD: f64 = 2.0;

// Logging
/// Log filter applied when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";
/// Log filter applied when `RUST_LOG` is unset and output is quiet
pub const QUIET_LOG_FILTER: &str = "warn";
