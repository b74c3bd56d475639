//! Inverse standard normal CDF via a piecewise rational approximation
//!
//! The initial estimate comes from P. J. Acklam's rational approximation,
//! which splits [0, 1] into a central region and two tails. Its relative error
//! is about 1.15e-9. One step of Halley's method against the exact CDF then
//! brings the result close to machine precision.

use crate::math::probability::{SQRT_2PI, standard_normal_cdf};

/// Boundary between the lower tail and the central region
pub const P_LOW: f64 = 0.024_25;

/// Boundary between the central region and the upper tail (1 - `P_LOW`)
pub const P_HIGH: f64 = 0.975_75;

// Central numerator, highest degree first
const A: [f64; 6] = [
    -3.969_683_028_665_376e1,
    2.209_460_984_245_205e2,
    -2.759_285_104_469_687e2,
    1.383_577_518_672_690e2,
    -3.066_479_806_614_716e1,
    2.506_628_277_459_239,
];

// Central denominator without its constant term of 1
const B: [f64; 5] = [
    -5.447_609_879_822_406e1,
    1.615_858_368_580_409e2,
    -1.556_989_798_598_866e2,
    6.680_131_188_771_972e1,
    -1.328_068_155_288_572e1,
];

// Tail numerator
const C: [f64; 6] = [
    -7.784_894_002_430_293e-3,
    -3.223_964_580_411_365e-1,
    -2.400_758_277_161_838,
    -2.549_732_539_343_734,
    4.374_664_141_464_968,
    2.938_163_982_698_783,
];

// Tail denominator without its constant term of 1
const D: [f64; 4] = [
    7.784_695_709_041_462e-3,
    3.224_671_290_700_398e-1,
    2.445_134_137_142_996,
    3.754_408_661_907_416,
];

/// Which branch of the approximation handles a given probability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// p < 0, answered with negative infinity
    Below,
    /// 0 ≤ p < `P_LOW`
    LowerTail,
    /// `P_LOW` ≤ p ≤ `P_HIGH`
    Central,
    /// `P_HIGH` < p ≤ 1
    UpperTail,
    /// p > 1, answered with positive infinity
    Above,
    /// p is NaN
    Undefined,
}

/// Classify a probability by the branch that evaluates it
pub fn region(p: f64) -> Region {
    if p.is_nan() {
        Region::Undefined
    } else if p < 0.0 {
        Region::Below
    } else if p > 1.0 {
        Region::Above
    } else if p < P_LOW {
        Region::LowerTail
    } else if p <= P_HIGH {
        Region::Central
    } else {
        Region::UpperTail
    }
}

/// Nested polynomial evaluation, coefficients ordered highest degree first
fn horner(coefficients: &[f64], x: f64) -> f64 {
    coefficients
        .iter()
        .fold(0.0, |accumulator, &coefficient| accumulator.mul_add(x, coefficient))
}

/// Lower tail ratio C(q) / D(q) for q = √(-2 ln p)
fn tail_ratio(q: f64) -> f64 {
    // p == 0 gives q == ∞ and the ratio ∞/∞; C has one degree more than D
    // with a negative leading coefficient, so the limit is -∞
    if q.is_infinite() {
        return f64::NEG_INFINITY;
    }

    horner(&C, q) / horner(&D, q).mul_add(q, 1.0)
}

/// Unrefined rational estimate of the standard normal quantile
///
/// Out-of-range probabilities produce infinite sentinels rather than errors:
/// `-∞` below zero, `+∞` above one and NaN for NaN.
pub fn rational_estimate(p: f64) -> f64 {
    match region(p) {
        Region::Undefined => f64::NAN,
        Region::Below => f64::NEG_INFINITY,
        Region::Above => f64::INFINITY,
        Region::LowerTail => tail_ratio((-2.0 * p.ln()).sqrt()),
        Region::Central => {
            let q = p - 0.5;
            let r = q * q;
            horner(&A, r) * q / horner(&B, r).mul_add(r, 1.0)
        }
        Region::UpperTail => -tail_ratio((-2.0 * (1.0 - p).ln()).sqrt()),
    }
}

/// One Halley step towards Φ(x) = p
///
/// The derivative of Φ is the normal density, so with e = Φ(x) - p and
/// u = e / φ(x) the third-order update is x - u / (1 + x·u/2).
/// Non-finite estimates are returned untouched, as is any x far enough in the
/// tail that exp(x²/2) overflows.
pub fn refine(x: f64, p: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }

    let e = standard_normal_cdf(x) - p;
    let u = e * SQRT_2PI * (x * x / 2.0).exp();
    if !u.is_finite() {
        return x;
    }

    x - u / (x * u).mul_add(0.5, 1.0)
}

/// Standard normal quantile Φ⁻¹(p)
///
/// # Examples
///
/// ```
/// use invnorm::math::quantile::quantile;
///
/// assert!(quantile(0.5).abs() < 1e-12);
/// assert!((quantile(0.975) - 1.959_963_984_540_054).abs() < 1e-9);
/// assert_eq!(quantile(-0.1), f64::NEG_INFINITY);
/// assert_eq!(quantile(1.1), f64::INFINITY);
/// ```
pub fn quantile(p: f64) -> f64 {
    refine(rational_estimate(p), p)
}
