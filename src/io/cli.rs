//! Command-line interface for sampling runs

use crate::analysis::statistics::Summary;
use crate::io::configuration::{
    DEFAULT_BUCKET_COUNT, DEFAULT_ITERATIONS, DEFAULT_SIGMA_THRESHOLD, DEFAULT_THREADS,
};
use crate::io::error::Result;
use crate::io::progress::SamplingProgress;
use crate::io::report::{analysis_lines, completion_line, histogram_line};
use crate::sampling::harness::{Harness, run_parallel};
use crate::sampling::histogram::Histogram;
use crate::sampling::sampler::SeededSampler;
use clap::Parser;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "invnorm")]
#[command(
    author,
    version,
    about = "Sample the inverse normal CDF approximation into a histogram"
)]
/// Command-line arguments for a sampling run
pub struct Cli {
    /// Number of uniform draws to take
    #[arg(short, long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: u64,

    /// Number of histogram buckets
    #[arg(short, long, default_value_t = DEFAULT_BUCKET_COUNT)]
    pub buckets: usize,

    /// Random seed for reproducible runs (entropy when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Worker threads; more than one merges per-worker histograms
    #[arg(short, long, default_value_t = DEFAULT_THREADS)]
    pub threads: usize,

    /// Suppress progress output and out-of-range diagnostics
    #[arg(short, long)]
    pub quiet: bool,

    /// Compare the histogram against the exact discretized normal
    #[arg(short, long)]
    pub analyze: bool,

    /// Deviation in standard deviations tolerated by the analysis
    #[arg(long, default_value_t = DEFAULT_SIGMA_THRESHOLD)]
    pub sigma: f64,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Check if the run is split over several workers
    pub const fn is_parallel(&self) -> bool {
        self.threads != 1
    }
}

/// Runs one sampling pass and prints its results
pub struct SimulationRunner {
    cli: Cli,
    progress: SamplingProgress,
}

impl SimulationRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = if cli.should_show_progress() {
            SamplingProgress::new(cli.iterations)
        } else {
            SamplingProgress::hidden(cli.iterations)
        };

        Self { cli, progress }
    }

    /// Arguments this runner was built from
    pub const fn cli(&self) -> &Cli {
        &self.cli
    }

    /// Progress bar the run reports to, hidden in quiet mode
    pub const fn progress(&self) -> &SamplingProgress {
        &self.progress
    }

    /// Draw and bin all iterations, returning the histogram
    ///
    /// # Errors
    ///
    /// Returns an error if the bucket or thread count is zero, or the worker
    /// pool cannot be created
    pub fn simulate(&self) -> Result<Histogram> {
        tracing::debug!(
            iterations = self.cli.iterations,
            buckets = self.cli.buckets,
            threads = self.cli.threads,
            seed = ?self.cli.seed,
            "starting run"
        );

        if self.cli.is_parallel() {
            return run_parallel(
                self.cli.seed,
                self.cli.iterations,
                self.cli.buckets,
                self.cli.threads,
                &self.progress,
            );
        }

        let mut harness = Harness::new(SeededSampler::new(self.cli.seed), self.cli.buckets)?;
        harness.run_with_progress(self.cli.iterations, &self.progress);
        tracing::debug!(discarded = harness.discarded(), "run finished");
        Ok(harness.into_histogram())
    }

    /// Run the simulation and print timing, counts and optional analysis
    ///
    /// # Errors
    ///
    /// Returns an error if the simulation cannot be set up
    // Results are the tool's output
    #[allow(clippy::print_stdout)]
    pub fn process(&self) -> Result<()> {
        let start_time = Instant::now();
        let histogram = self.simulate()?;
        let elapsed = start_time.elapsed();

        self.progress.finish();
        tracing::debug!(
            draws = self.progress.position(),
            elapsed = ?elapsed,
            "sampling finished"
        );

        println!("{}", completion_line(elapsed));
        println!("{}", histogram_line(&histogram));

        if self.cli.analyze {
            let summary = Summary::new(&histogram, self.cli.iterations, self.cli.sigma);
            for line in analysis_lines(&summary) {
                println!("{line}");
            }
        }

        Ok(())
    }
}
