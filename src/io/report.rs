//! Text rendering of run results

use crate::analysis::statistics::{Summary, bucket_bounds};
use crate::sampling::histogram::Histogram;
use std::time::Duration;

/// `Completed in: <seconds> s`, with millisecond precision
pub fn completion_line(elapsed: Duration) -> String {
    format!("Completed in: {:.3} s", elapsed.as_secs_f64())
}

/// Bucket counts separated by single spaces
pub fn histogram_line(histogram: &Histogram) -> String {
    histogram.to_string()
}

/// One line per bucket and mirror pair, followed by a verdict line
pub fn analysis_lines(summary: &Summary) -> Vec<String> {
    let bucket_count = summary.buckets.len();
    let count_width = summary.iterations.to_string().len();
    let mut lines = Vec::with_capacity(bucket_count + summary.mirrors.len() + 1);

    for bucket in &summary.buckets {
        let (lower, upper) = bucket_bounds(bucket.index, bucket_count);
        let flag = if bucket.z_score.abs() > summary.sigma_threshold {
            " *"
        } else {
            ""
        };
        lines.push(format!(
            "bucket {:>3} [{lower:+6.1}, {upper:+6.1}): observed {:>count_width$} expected {:>12.3} z {:+7.2}{flag}",
            bucket.index, bucket.observed, bucket.expected, bucket.z_score
        ));
    }

    for pair in &summary.mirrors {
        let flag = if pair.z_score.abs() > summary.sigma_threshold {
            " *"
        } else {
            ""
        };
        lines.push(format!(
            "mirror {:>3} <-> {:<3}: {:>count_width$} vs {:>count_width$} z {:+7.2}{flag}",
            pair.lower, pair.upper, pair.lower_count, pair.upper_count, pair.z_score
        ));
    }

    let verdict = if summary.is_consistent() {
        "consistent"
    } else {
        "inconsistent"
    };
    lines.push(format!(
        "{verdict} with N(0,1) at {:.1} sigma (unimodal: {}, discarded: {})",
        summary.sigma_threshold, summary.unimodal, summary.discarded
    ));

    lines
}
