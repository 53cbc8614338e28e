//! Tests for VICTRE shape parameter selection and sampling

#[cfg(test)]
mod tests {
    use nbp_params::math::distribution::Distribution;
    use nbp_params::shape::victre::{DepthGroup, ExtentGroup, shape_params};
    use nbp_params::tissue::category::{BreastDensity, ShapeMode};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    // Tests categories A, B and C share the a1t distribution and D differs
    // Verified by grouping C with D
    #[test]
    fn test_a1t_groups() {
        let a1t = |category| {
            shape_params(category, ShapeMode::Natural)
                .expect("tabulated parameters are valid")
                .a1t
        };

        assert_eq!(a1t(BreastDensity::A), a1t(BreastDensity::B));
        assert_eq!(a1t(BreastDensity::B), a1t(BreastDensity::C));
        assert_ne!(a1t(BreastDensity::C), a1t(BreastDensity::D));
        assert_eq!(
            a1t(BreastDensity::D),
            Distribution::TruncatedGaussian {
                mean: 50.05,
                std: 3.575,
                lower: 42.9,
                upper: 57.2,
            }
        );
        assert_eq!(ExtentGroup::of(BreastDensity::C), ExtentGroup::NonExtremelyDense);
    }

    // Tests a3/a1t groups A with B, and C and D separately
    // Verified by grouping B with C
    #[test]
    fn test_a3_groups() {
        let a3 = |category| {
            shape_params(category, ShapeMode::Natural)
                .expect("tabulated parameters are valid")
                .a3_a1t
        };

        assert_eq!(a3(BreastDensity::A), a3(BreastDensity::B));
        assert_ne!(a3(BreastDensity::B), a3(BreastDensity::C));
        assert_ne!(a3(BreastDensity::C), a3(BreastDensity::D));
        assert_eq!(DepthGroup::of(BreastDensity::B), DepthGroup::Fatty);
        assert_eq!(DepthGroup::of(BreastDensity::D).a3_a1t(), (0.85, 0.1, 0.7, 1.1));
    }

    // Tests natural mode keeps stochastic ratios and enables perturbations
    // Verified by clearing do_ptosis in natural mode
    #[test]
    fn test_natural_mode() {
        let set = shape_params(BreastDensity::B, ShapeMode::Natural).expect("valid");
        assert!(set.do_ptosis);
        assert!(set.do_turn_top);
        assert_eq!(set.eps1, Distribution::Gaussian { mean: 1.0, std: 0.1 });
        assert_eq!(set.named().len(), 10);
        assert!(set.named().iter().all(|(_, d)| !d.is_constant()));
    }

    // Tests hemisphere mode collapses to constants for every category
    // Verified by keeping the natural ptosis distribution
    #[test]
    fn test_hemisphere_mode_collapses() {
        for category in BreastDensity::ALL {
            let set = shape_params(category, ShapeMode::Hemisphere).expect("valid");
            assert!(!set.do_ptosis);
            assert!(!set.do_turn_top);

            for (name, distribution) in set.ratios() {
                assert_eq!(distribution, Distribution::Constant(1.0), "{name}");
            }
            assert_eq!(set.eps1, Distribution::Constant(1.0));
            for (name, distribution) in set.coefficients().into_iter().skip(1) {
                assert_eq!(distribution, Distribution::Constant(0.0), "{name}");
            }
            let natural = shape_params(category, ShapeMode::Natural).expect("valid");
            assert_eq!(set.a1t, natural.a1t);
        }
    }

    // Tests sampled values respect truncations and derived extents
    // Verified by multiplying a2l by a1t instead of a2r
    #[test]
    fn test_sample_and_extents() {
        let mut rng = StdRng::seed_from_u64(7);
        let set = shape_params(BreastDensity::A, ShapeMode::Natural).expect("valid");

        for _ in 0..200 {
            let sample = set.sample(&mut rng).expect("sampling succeeds");
            assert!((50.765..=71.5).contains(&sample.a1t));
            assert!((0.8..=1.2).contains(&sample.a3_a1t));
            assert!((-0.18..=0.18).contains(&sample.ptosis_b0));
            assert!((-0.11..=0.11).contains(&sample.turn_top_h0));

            let extents = sample.extents();
            let a2r = sample.a1t * sample.a2r_a1t;
            assert!((extents.a2r - a2r).abs() < 1e-12);
            assert!((extents.a2l - a2r * sample.a2l_a2r).abs() < 1e-12);
            assert!((extents.a3 - sample.a1t * sample.a3_a1t).abs() < 1e-12);
        }
    }

    // Tests hemisphere samples give equal extents on every side
    // Verified by sampling a2r/a1t from the natural distribution
    #[test]
    fn test_hemisphere_sample_is_symmetric() {
        let mut rng = StdRng::seed_from_u64(3);
        let sample = shape_params(BreastDensity::D, ShapeMode::Hemisphere)
            .and_then(|set| set.sample(&mut rng))
            .expect("sampling succeeds");

        let extents = sample.extents();
        assert!((extents.a1b - extents.a1t).abs() < f64::EPSILON);
        assert!((extents.a2l - extents.a1t).abs() < f64::EPSILON);
        assert!((extents.a3 - extents.a1t).abs() < f64::EPSILON);
        assert_eq!(sample.named()[0].0, "a1t");
    }
}
