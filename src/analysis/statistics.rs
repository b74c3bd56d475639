//! Goodness checks for sampled histograms
//!
//! Bucket `i` of an `n` bucket histogram collects quantiles in
//! [i - n/2 - ½, i - n/2 + ½), so its expected share of the draws is the
//! normal mass of that interval. Each count is then binomial, which gives a
//! standard deviation to judge the observed count against. Bucket `i` mirrors
//! bucket `n - i` around zero; bucket 0 has no mirror.

use crate::math::probability::interval_probability;
use crate::sampling::histogram::{Histogram, bucket_center};

/// Quantile interval [lower, upper) collected by bucket `index`
pub fn bucket_bounds(index: usize, bucket_count: usize) -> (f64, f64) {
    let offset = index as f64 - bucket_center(bucket_count);
    (offset - 0.5, offset + 0.5)
}

/// Probability of a standard normal draw landing in each bucket
pub fn bucket_probabilities(bucket_count: usize) -> Vec<f64> {
    (0..bucket_count)
        .map(|index| {
            let (lower, upper) = bucket_bounds(index, bucket_count);
            interval_probability(lower, upper)
        })
        .collect()
}

/// Observed versus expected count for one bucket
#[derive(Debug, Clone, PartialEq)]
pub struct BucketDeviation {
    /// Bucket index
    pub index: usize,
    /// Sampled count
    pub observed: u64,
    /// Expected count, iterations × bucket probability
    pub expected: f64,
    /// Binomial standard deviation of the count
    pub std_dev: f64,
    /// (observed - expected) / `std_dev`
    pub z_score: f64,
}

/// Score every bucket against its binomial expectation over `iterations` draws
pub fn compare_to_normal(histogram: &Histogram, iterations: u64) -> Vec<BucketDeviation> {
    let trials = iterations as f64;

    bucket_probabilities(histogram.bucket_count())
        .into_iter()
        .zip(histogram.counts())
        .enumerate()
        .map(|(index, (probability, &observed))| {
            let expected = trials * probability;
            let std_dev = (trials * probability * (1.0 - probability)).sqrt();
            let difference = observed as f64 - expected;
            let z_score = if std_dev > 0.0 {
                difference / std_dev
            } else if difference == 0.0 {
                0.0
            } else {
                difference.signum() * f64::INFINITY
            };

            BucketDeviation {
                index,
                observed,
                expected,
                std_dev,
                z_score,
            }
        })
        .collect()
}

/// True when counts rise (weakly) to their first maximum and fall (weakly) after it
pub fn is_unimodal(counts: &[u64]) -> bool {
    let peak_value = counts.iter().max();
    let Some(peak) = counts.iter().position(|count| Some(count) == peak_value) else {
        return true;
    };

    let rising = counts.get(..=peak).unwrap_or_default();
    let falling = counts.get(peak..).unwrap_or_default();

    rising
        .windows(2)
        .all(|pair| matches!(pair, [a, b] if a <= b))
        && falling
            .windows(2)
            .all(|pair| matches!(pair, [a, b] if a >= b))
}

/// Count difference between two buckets mirrored around zero
#[derive(Debug, Clone, PartialEq)]
pub struct MirrorDeviation {
    /// Bucket below the center
    pub lower: usize,
    /// Bucket above the center, `bucket_count - lower`
    pub upper: usize,
    /// Count in the lower bucket
    pub lower_count: u64,
    /// Count in the upper bucket
    pub upper_count: u64,
    /// (lower - upper) / √(lower + upper)
    pub z_score: f64,
}

/// Pair each bucket with its mirror image and score their difference
pub fn mirror_deviations(histogram: &Histogram) -> Vec<MirrorDeviation> {
    let bucket_count = histogram.bucket_count();

    (1..bucket_count)
        .take_while(|&lower| lower < bucket_count - lower)
        .filter_map(|lower| {
            let upper = bucket_count - lower;
            let lower_count = histogram.get(lower)?;
            let upper_count = histogram.get(upper)?;
            let spread = ((lower_count + upper_count) as f64).sqrt();
            let z_score = if spread > 0.0 {
                (lower_count as f64 - upper_count as f64) / spread
            } else {
                0.0
            };

            Some(MirrorDeviation {
                lower,
                upper,
                lower_count,
                upper_count,
                z_score,
            })
        })
        .collect()
}

/// Combined verdict on a sampled histogram
#[derive(Debug, Clone)]
pub struct Summary {
    /// Draws taken
    pub iterations: u64,
    /// Draws counted in some bucket
    pub binned: u64,
    /// Draws that fell outside the histogram
    pub discarded: u64,
    /// Per-bucket comparison against the normal expectation
    pub buckets: Vec<BucketDeviation>,
    /// Mirror pair comparisons
    pub mirrors: Vec<MirrorDeviation>,
    /// Whether the counts have a single peak
    pub unimodal: bool,
    /// |z| above which a bucket or pair is flagged
    pub sigma_threshold: f64,
}

impl Summary {
    /// Analyze `histogram` as the result of `iterations` draws
    pub fn new(histogram: &Histogram, iterations: u64, sigma_threshold: f64) -> Self {
        let binned = histogram.total();

        Self {
            iterations,
            binned,
            discarded: iterations.saturating_sub(binned),
            buckets: compare_to_normal(histogram, iterations),
            mirrors: mirror_deviations(histogram),
            unimodal: is_unimodal(histogram.counts()),
            sigma_threshold,
        }
    }

    /// Buckets whose count deviates by more than the threshold
    pub fn flagged_buckets(&self) -> impl Iterator<Item = &BucketDeviation> {
        self.buckets
            .iter()
            .filter(|bucket| bucket.z_score.abs() > self.sigma_threshold)
    }

    /// Mirror pairs whose difference exceeds the threshold
    pub fn asymmetric_pairs(&self) -> impl Iterator<Item = &MirrorDeviation> {
        self.mirrors
            .iter()
            .filter(|pair| pair.z_score.abs() > self.sigma_threshold)
    }

    /// Unimodal with no flagged bucket and no asymmetric pair
    pub fn is_consistent(&self) -> bool {
        self.unimodal
            && self.flagged_buckets().next().is_none()
            && self.asymmetric_pairs().next().is_none()
    }
}
