//! Sampling harness that exercises the quantile approximation

/// Draw, transform and bin loop in sequential and parallel form
pub mod harness;
/// Length-checked histogram counters
pub mod histogram;
/// Uniform probability sources
pub mod sampler;

/// Receives progress updates from a running harness
///
/// Implementations must tolerate calls from several worker threads at once.
pub trait ProgressSink: Sync {
    /// Record that `draws` more draws have completed
    fn advance(&self, draws: u64);
}

/// Progress sink that discards every update
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn advance(&self, _draws: u64) {}
}
