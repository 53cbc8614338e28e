//! Tests for wavelength-dependent scattering evaluation

#[cfg(test)]
mod tests {
    use nbp_params::PropertyError;
    use nbp_params::io::error::EvaluatorError;
    use nbp_params::math::distribution::Distribution;
    use nbp_params::optics::evaluator::{OpticalEvaluator, ScatteringParams};
    use nbp_params::resolve::cache::ResolutionCache;
    use nbp_params::table::predefined::{acoustic_table, optical_table};
    use nbp_params::table::property::{PropertyDomain, PropertyKind, PropertyTable};
    use nbp_params::tissue::label::TissueId;
    use ndarray::array;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn params(g: f64) -> ScatteringParams {
        ScatteringParams {
            tissue: TissueId::Fat,
            reduced_scattering_ref: 1.06,
            scattering_power: 0.52,
            anisotropy: g,
        }
    }

    // Tests the evaluator refuses the acoustic table
    // Verified by skipping the domain check
    #[test]
    fn test_requires_optical_table() {
        let table = acoustic_table().expect("acoustic table builds");
        let cache = ResolutionCache::new();
        assert!(matches!(
            OpticalEvaluator::new(&table, &cache),
            Err(PropertyError::InvalidArgument { .. })
        ));
    }

    // Tests constant fat parameters evaluate deterministically
    // Verified by using 800 nm as the reference wavelength
    #[test]
    fn test_fat_scattering_at_reference_and_800() {
        let table = optical_table().expect("optical table builds");
        let cache = ResolutionCache::new();
        let evaluator = OpticalEvaluator::new(&table, &cache).expect("optical table");
        let mut rng = StdRng::seed_from_u64(1);

        let at_ref = evaluator
            .reduced_scattering(TissueId::Fat, 500.0, &mut rng)
            .expect("fat scatters");
        assert!((at_ref - 1.06).abs() < 1e-12);

        let at_800 = evaluator
            .reduced_scattering(TissueId::Fat, 800.0, &mut rng)
            .expect("fat scatters");
        assert!((at_800 - 1.06 * 1.6_f64.powf(-0.52)).abs() < 1e-12);

        let mu_s = evaluator
            .scattering_coefficient(TissueId::Fat, 800.0, &mut rng)
            .expect("fat scatters");
        assert!((mu_s - at_800 / 0.02).abs() < 1e-9);
    }

    // Tests aliased tissues evaluate through their owner
    // Verified by leaving duct undefined in the optical table
    #[test]
    fn test_alias_evaluates_like_owner() {
        let table = optical_table().expect("optical table builds");
        let cache = ResolutionCache::new();
        let evaluator = OpticalEvaluator::new(&table, &cache).expect("optical table");
        let mut rng = StdRng::seed_from_u64(1);

        let duct = evaluator.reduced_scattering(TissueId::Duct, 757.0, &mut rng);
        let fat = evaluator.reduced_scattering(TissueId::Fat, 757.0, &mut rng);
        assert_eq!(duct.ok(), fat.ok());
    }

    // Tests air scatters nothing even though it has no reduced scattering entry
    // Verified by evaluating reduced scattering before the anisotropy check
    #[test]
    fn test_air_is_non_scattering() {
        let table = optical_table().expect("optical table builds");
        let cache = ResolutionCache::new();
        let evaluator = OpticalEvaluator::new(&table, &cache).expect("optical table");
        let mut rng = StdRng::seed_from_u64(1);

        let mu_s = evaluator
            .scattering_coefficient(TissueId::Air, 800.0, &mut rng)
            .expect("air is defined");
        assert!(mu_s.abs() < f64::EPSILON);
        assert_eq!(
            evaluator.absorption_coefficient(TissueId::Air, &mut rng).ok(),
            Some(0.0)
        );
        assert_eq!(
            evaluator.refractive_index(TissueId::Air, &mut rng).ok(),
            Some(1.0)
        );
    }

    // Tests g >= 1 outside air is reported as degenerate
    // Verified by returning zero for every tissue with g >= 1
    #[test]
    fn test_degenerate_anisotropy() {
        let table = PropertyTable::builder(PropertyDomain::Optical)
            .insert(PropertyKind::Anisotropy, TissueId::Fat, Distribution::Constant(1.0))
            .expect("optical kind")
            .build();
        let cache = ResolutionCache::new();
        let evaluator = OpticalEvaluator::new(&table, &cache).expect("optical table");
        let mut rng = StdRng::seed_from_u64(1);

        assert!(matches!(
            evaluator.scattering_coefficient(TissueId::Fat, 800.0, &mut rng),
            Err(PropertyError::Evaluator(
                EvaluatorError::DegenerateAnisotropy { tissue: TissueId::Fat, .. }
            ))
        ));
        assert_eq!(
            params(1.2).scattering_coefficient(800.0),
            Err(EvaluatorError::DegenerateAnisotropy {
                tissue: TissueId::Fat,
                g: 1.2
            })
        );
    }

    // Tests invalid wavelengths are rejected before sampling
    // Verified by accepting zero wavelength
    #[test]
    fn test_invalid_wavelength() {
        for wavelength in [0.0, -500.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                params(0.9).reduced_scattering(wavelength),
                Err(EvaluatorError::InvalidWavelength { .. })
            ));
        }
        assert!(params(0.9).spectrum(&array![700.0, 0.0]).is_err());
    }

    // Tests undefined properties propagate as resolution errors
    // Verified by returning zero for undefined tissues
    #[test]
    fn test_undefined_tissue() {
        let table = optical_table().expect("optical table builds");
        let cache = ResolutionCache::new();
        let evaluator = OpticalEvaluator::new(&table, &cache).expect("optical table");
        let mut rng = StdRng::seed_from_u64(1);

        assert!(matches!(
            evaluator.reduced_scattering(TissueId::Muscle, 800.0, &mut rng),
            Err(PropertyError::Resolution(_))
        ));
        assert!(matches!(
            evaluator.absorption_coefficient(TissueId::Fat, &mut rng),
            Err(PropertyError::Resolution(_))
        ));
    }

    // Tests one parameter draw evaluates a consistent spectrum
    // Verified by resampling parameters per wavelength
    #[test]
    fn test_spectrum_from_one_draw() {
        let table = optical_table().expect("optical table builds");
        let cache = ResolutionCache::new();
        let evaluator = OpticalEvaluator::new(&table, &cache).expect("optical table");
        let mut rng = StdRng::seed_from_u64(11);

        let drawn = evaluator
            .sample_params(TissueId::Dermis, &mut rng)
            .expect("dermis scatters");
        assert!((3.72..=4.78).contains(&drawn.reduced_scattering_ref));
        assert!((1.39..=2.453).contains(&drawn.scattering_power));

        let wavelengths = array![500.0, 650.0, 800.0];
        let spectrum = drawn.spectrum(&wavelengths).expect("valid wavelengths");
        assert!((spectrum[0] - drawn.reduced_scattering_ref).abs() < 1e-12);
        assert!(spectrum[1] > spectrum[2]);
        for (&wavelength, &value) in wavelengths.iter().zip(spectrum.iter()) {
            let single = drawn.reduced_scattering(wavelength).expect("valid wavelength");
            assert!((single - value).abs() < 1e-12);
        }
    }
}
