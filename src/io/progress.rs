//! Progress display for sampling runs

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use crate::sampling::ProgressSink;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Draws: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} ({{per_sec}})"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over the draws of one run
///
/// Cloning shares the underlying bar, and updates may come from any worker
/// thread.
#[derive(Clone)]
pub struct SamplingProgress {
    bar: ProgressBar,
}

impl SamplingProgress {
    /// Visible progress bar expecting `iterations` draws
    pub fn new(iterations: u64) -> Self {
        let bar = ProgressBar::new(iterations);
        bar.set_style(PROGRESS_STYLE.clone());
        Self { bar }
    }

    /// Progress bar that never draws anything
    pub fn hidden(iterations: u64) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(iterations);
        Self { bar }
    }

    /// Draws recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    /// Run `write` with the bar cleared, redrawing it afterwards
    pub fn suspend<R>(&self, write: impl FnOnce() -> R) -> R {
        self.bar.suspend(write)
    }
}

impl ProgressSink for SamplingProgress {
    fn advance(&self, draws: u64) {
        self.bar.inc(draws);
    }
}
