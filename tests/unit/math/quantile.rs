//! Tests for the rational inverse normal CDF approximation and its refinement

#[cfg(test)]
mod tests {
    use invnorm::math::quantile::{
        P_HIGH, P_LOW, Region, quantile, rational_estimate, refine, region,
    };

    // Tests quantile at the median
    // Verified by dropping the q factor from the central numerator
    #[test]
    fn test_quantile_median_is_zero() {
        assert!(quantile(0.5).abs() < 1e-9);
    }

    // Tests the two-sided 95% critical values
    // Verified by perturbing the a3 coefficient
    #[test]
    fn test_quantile_reference_values() {
        assert!((quantile(0.975) - 1.959_964).abs() < 1e-6);
        assert!((quantile(0.025) + 1.959_964).abs() < 1e-6);
        assert!((quantile(0.975) - 1.959_963_984_540_054).abs() < 1e-12);
        assert!((quantile(0.025) + 1.959_963_984_540_054).abs() < 1e-12);
    }

    // Tests one standard deviation: Φ(1) maps back to 1, and its 4-digit
    // rounding 0.8413 sits 1.85e-4 below
    // Verified by skipping the refinement step
    #[test]
    fn test_quantile_one_sigma() {
        assert!((quantile(0.841_344_746_068_542_9) - 1.0).abs() < 1e-12);
        assert!((quantile(0.8413) - 0.999_815_093_614_745).abs() < 1e-9);
        assert!((quantile(0.8413) - 1.0).abs() < 2e-4);
    }

    // Tests tail values on both sides
    // Verified by perturbing the c1 coefficient
    #[test]
    fn test_quantile_tail_values() {
        assert!((quantile(0.001) + 3.090_232_306_167_813_6).abs() < 1e-9);
        assert!((quantile(0.999) - 3.090_232_306_167_813_6).abs() < 1e-9);
        assert!((quantile(1e-10) + 6.361_340_902_404_056).abs() < 1e-9);
    }

    // Tests strict monotonicity across the central region
    // Verified by flipping the sign of the central result
    #[test]
    fn test_quantile_monotonic_in_central_region() {
        let values: Vec<f64> = (0..=950)
            .map(|step| quantile(0.025 + f64::from(step) * 0.001))
            .collect();

        assert!(
            values.windows(2).all(|pair| matches!(pair, [a, b] if a < b)),
            "quantile must increase strictly between P_LOW and P_HIGH"
        );
    }

    // Tests quantile(p) = -quantile(1 - p) in every region
    // Verified by negating the lower tail instead of the upper tail
    #[test]
    fn test_quantile_symmetry() {
        for &p in &[1e-6, 0.001, 0.01, 0.02, 0.024, 0.1, 0.3, 0.45, 0.5] {
            let lower = quantile(p);
            let upper = quantile(1.0 - p);
            assert!(
                (lower + upper).abs() < 1e-9,
                "asymmetry at p = {p}: {lower} vs {upper}"
            );
        }
    }

    // Tests infinite sentinels outside [0, 1] and NaN passthrough
    // Verified by clamping p into [0, 1]
    #[test]
    fn test_quantile_out_of_range_sentinels() {
        assert_eq!(quantile(-1e-12), f64::NEG_INFINITY);
        assert_eq!(quantile(-5.0), f64::NEG_INFINITY);
        assert_eq!(quantile(1.0 + 1e-12), f64::INFINITY);
        assert_eq!(quantile(7.0), f64::INFINITY);
        assert!(quantile(f64::NAN).is_nan());
    }

    // Tests divergence at the closed ends of [0, 1]
    // Verified by removing the infinite-q check in the tail ratio
    #[test]
    fn test_quantile_diverges_at_bounds() {
        assert_eq!(quantile(0.0), f64::NEG_INFINITY);
        assert_eq!(quantile(1.0), f64::INFINITY);
        assert!(quantile(1e-300) < -37.0);
        assert!(quantile(1e-300).is_finite());
        assert!(quantile(1.0 - f64::EPSILON) > 8.0);
    }

    // Tests region boundaries are inclusive on the central side
    // Verified by making P_HIGH exclusive
    #[test]
    fn test_region_classification() {
        assert_eq!(region(-0.1), Region::Below);
        assert_eq!(region(0.0), Region::LowerTail);
        assert_eq!(region(P_LOW - 1e-9), Region::LowerTail);
        assert_eq!(region(P_LOW), Region::Central);
        assert_eq!(region(0.5), Region::Central);
        assert_eq!(region(P_HIGH), Region::Central);
        assert_eq!(region(P_HIGH + 1e-9), Region::UpperTail);
        assert_eq!(region(1.0), Region::UpperTail);
        assert_eq!(region(1.5), Region::Above);
        assert_eq!(region(f64::NAN), Region::Undefined);
        assert!((P_LOW + P_HIGH - 1.0).abs() < f64::EPSILON);
    }

    // Tests the approximation is continuous across the branch boundaries
    // Verified by swapping the central and tail coefficient sets
    #[test]
    fn test_quantile_continuous_at_boundaries() {
        let at_low = quantile(P_LOW);
        let below_low = quantile(P_LOW - 1e-12);
        assert!((at_low + 1.972_961_051_311_885).abs() < 1e-9);
        assert!((at_low - below_low).abs() < 1e-9);

        let at_high = quantile(P_HIGH);
        let above_high = quantile(P_HIGH + 1e-12);
        assert!((at_high - above_high).abs() < 1e-9);
    }

    // Tests the unrefined estimate is already close and refinement improves it
    // Verified by returning the estimate from refine unchanged
    #[test]
    fn test_refinement_improves_estimate() {
        let p = 0.3;
        let exact = -0.524_400_512_708_041;
        let estimate = rational_estimate(p);
        let refined = refine(estimate, p);

        assert!((estimate - exact).abs() < 1e-8);
        assert!((refined - exact).abs() < 1e-12);
        assert!((refined - exact).abs() <= (estimate - exact).abs());
    }

    // Tests refinement leaves non-finite estimates alone
    // Verified by removing the finiteness guard
    #[test]
    fn test_refine_skips_non_finite() {
        assert_eq!(refine(f64::INFINITY, 0.5), f64::INFINITY);
        assert_eq!(refine(f64::NEG_INFINITY, 0.5), f64::NEG_INFINITY);
        assert!(refine(f64::NAN, 0.5).is_nan());
        assert_eq!(rational_estimate(-1.0), f64::NEG_INFINITY);
        assert_eq!(rational_estimate(2.0), f64::INFINITY);
    }
}
