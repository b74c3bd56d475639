//! Draw, transform and bin loop
//!
//! Every draw takes a probability from the sampler, maps it through the
//! quantile approximation, shifts it by half the bucket count and rounds it
//! to a bucket index. Draws landing outside the histogram are reported and
//! dropped; they never abort a run.

use crate::io::configuration::PROGRESS_BATCH;
use crate::io::error::{Result, SimulationError, invalid_parameter};
use crate::math::quantile::quantile;
use crate::sampling::histogram::{Histogram, bucket_center};
use crate::sampling::sampler::{SeededSampler, UniformSampler};
use crate::sampling::{NoProgress, ProgressSink};
use num_traits::ToPrimitive;
use rayon::prelude::*;

/// Outcome of a single harness draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Draw {
    /// Counted in the bucket at `index`
    Binned {
        /// Bucket that was incremented
        index: usize,
    },
    /// Fell outside the histogram and was dropped
    Discarded {
        /// Rounded bucket index, `None` when the quantile was infinite or NaN
        index: Option<i64>,
        /// Quantile that produced the index
        quantile: f64,
    },
}

/// Map a quantile to its bucket among `bucket_count` buckets
///
/// The quantile is shifted by `bucket_count / 2` and rounded half away from
/// zero. Indices below zero or at/above `bucket_count` are discarded, as are
/// quantiles whose shifted value has no integer representation.
pub fn locate(quantile: f64, bucket_count: usize) -> Draw {
    let shifted = (quantile + bucket_center(bucket_count)).round();

    match shifted.to_i64() {
        Some(index) => match usize::try_from(index) {
            Ok(bucket) if bucket < bucket_count => Draw::Binned { index: bucket },
            _ => Draw::Discarded {
                index: Some(index),
                quantile,
            },
        },
        None => Draw::Discarded {
            index: None,
            quantile,
        },
    }
}

fn report_discard(index: Option<i64>, quantile: f64) {
    match index {
        Some(index) => tracing::info!(quantile, "Hit outside of sample size: {index}"),
        None => tracing::info!(quantile, "Hit outside of sample size: {quantile}"),
    }
}

/// Single-threaded sampling loop over one sampler and one histogram
#[derive(Debug)]
pub struct Harness<S> {
    sampler: S,
    histogram: Histogram,
    draws: u64,
    discarded: u64,
}

impl<S: UniformSampler> Harness<S> {
    /// Create a harness with a zeroed histogram of `bucket_count` buckets
    ///
    /// # Errors
    ///
    /// Returns an error if `bucket_count` is zero
    pub fn new(sampler: S, bucket_count: usize) -> Result<Self> {
        Ok(Self {
            sampler,
            histogram: Histogram::new(bucket_count)?,
            draws: 0,
            discarded: 0,
        })
    }

    /// Take one probability from the sampler and bin its quantile
    pub fn draw(&mut self) -> Draw {
        let probability = self.sampler.next_probability();
        let draw = locate(quantile(probability), self.histogram.bucket_count());
        self.draws += 1;

        match draw {
            Draw::Binned { index } => {
                self.histogram.record(index);
            }
            Draw::Discarded { index, quantile } => {
                self.discarded += 1;
                report_discard(index, quantile);
            }
        }

        draw
    }

    /// Perform `iterations` draws
    pub fn run(&mut self, iterations: u64) {
        self.run_with_progress(iterations, &NoProgress);
    }

    /// Perform `iterations` draws, reporting progress in batches
    pub fn run_with_progress(&mut self, iterations: u64, progress: &dyn ProgressSink) {
        let mut pending = 0;
        for _ in 0..iterations {
            self.draw();
            pending += 1;
            if pending == PROGRESS_BATCH {
                progress.advance(pending);
                pending = 0;
            }
        }

        if pending > 0 {
            progress.advance(pending);
        }
    }

    /// Counts accumulated so far
    pub const fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    /// Total draws taken, binned or not
    pub const fn draws(&self) -> u64 {
        self.draws
    }

    /// Draws dropped for falling outside the histogram
    pub const fn discarded(&self) -> u64 {
        self.discarded
    }

    /// Consume the harness, keeping only its histogram
    pub fn into_histogram(self) -> Histogram {
        self.histogram
    }
}

/// Bin `iterations` draws from `sampler` into `bucket_count` buckets
///
/// # Errors
///
/// Returns an error if `bucket_count` is zero
pub fn run<S: UniformSampler>(
    sampler: S,
    iterations: u64,
    bucket_count: usize,
) -> Result<Histogram> {
    let mut harness = Harness::new(sampler, bucket_count)?;
    harness.run(iterations);
    Ok(harness.into_histogram())
}

/// Draws assigned to `worker` when `iterations` are split over `workers`
pub const fn worker_share(iterations: u64, workers: u64, worker: u64) -> u64 {
    if workers == 0 {
        return 0;
    }
    let base = iterations / workers;
    if worker < iterations % workers {
        base + 1
    } else {
        base
    }
}

/// Split `iterations` draws over `workers` threads and merge their histograms
///
/// Each worker owns a sampler seeded from a seed derived from `seed` and the
/// worker position, and a private partial histogram. Partials are merged once
/// every worker has finished, so the result is reproducible for a given
/// `(seed, workers)` pair. Without a seed the worker seeds come from entropy.
///
/// # Errors
///
/// Returns an error if `bucket_count` or `workers` is zero, or if the thread
/// pool cannot be created
pub fn run_parallel(
    seed: Option<u64>,
    iterations: u64,
    bucket_count: usize,
    workers: usize,
    progress: &dyn ProgressSink,
) -> Result<Histogram> {
    if workers == 0 {
        return Err(invalid_parameter(
            "workers",
            &workers,
            &"at least one worker is required",
        ));
    }

    let mut histogram = Histogram::new(bucket_count)?;

    let mut seeder = SeededSampler::new(seed);
    let plan: Vec<(u64, u64)> = (0..workers as u64)
        .map(|worker| {
            (
                seeder.next_seed(),
                worker_share(iterations, workers as u64, worker),
            )
        })
        .collect();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|source| SimulationError::ThreadPool { source })?;

    tracing::debug!(workers, iterations, bucket_count, "starting parallel run");

    let partials = pool.install(|| {
        plan.into_par_iter()
            .map(|(worker_seed, share)| -> Result<Histogram> {
                let mut harness =
                    Harness::new(SeededSampler::from_seed(worker_seed), bucket_count)?;
                harness.run_with_progress(share, progress);
                Ok(harness.into_histogram())
            })
            .collect::<Result<Vec<_>>>()
    })?;

    for partial in &partials {
        histogram.merge(partial)?;
    }

    Ok(histogram)
}
