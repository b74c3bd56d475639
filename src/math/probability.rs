//! Standard normal distribution functions
//!
//! Both the refinement step of the quantile approximation and the histogram
//! analysis need Φ to full double precision. A polynomial `erf` in the
//! Abramowitz and Stegun style tops out around 1e-7, which would cap the
//! refined quantile at the same accuracy, so `libm::erfc` is used instead.

/// √(2π)
pub const SQRT_2PI: f64 = 2.506_628_274_631_000_2;

/// Complementary error function erfc(x) = 1 - erf(x)
pub fn erfc(x: f64) -> f64 {
    libm::erfc(x)
}

/// Standard normal cumulative distribution function Φ(x) = P(Z ≤ x)
///
/// Uses the identity Φ(x) = ½ erfc(-x/√2), which keeps full relative
/// precision in the lower tail where `1 - Φ(-x)` would cancel.
pub fn standard_normal_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / std::f64::consts::SQRT_2)
}

/// Probability mass of Z falling in the half-open interval [lower, upper)
pub fn interval_probability(lower: f64, upper: f64) -> f64 {
    if upper <= lower {
        return 0.0;
    }

    // Evaluate on the side where both CDF values are small to avoid cancellation
    if lower >= 0.0 {
        standard_normal_cdf(-lower) - standard_normal_cdf(-upper)
    } else {
        standard_normal_cdf(upper) - standard_normal_cdf(lower)
    }
}
