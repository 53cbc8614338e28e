//! Tests for engine constants and CLI defaults

#[cfg(test)]
mod tests {
    use nbp_params::io::configuration::{
        DEFAULT_INSTANCES, DEFAULT_SEED, DEFAULT_WAVELENGTHS_NM, MAX_ALIAS_DEPTH,
        MIN_INSTANCES_FOR_PROGRESS, NEPER_PER_M_TO_DB_PER_MM, PROGRESS_BAR_WIDTH,
        REFERENCE_WAVELENGTH_NM, REJECTION_LIMIT,
    };

    // Tests resolution and sampling guards
    // Verified by changing the limits
    #[test]
    fn test_guard_limits() {
        assert_eq!(MAX_ALIAS_DEPTH, 32);
        assert_eq!(REJECTION_LIMIT, 10_000);
    }

    // Tests the scattering reference wavelength
    // Verified by changing the reference to 800 nm
    #[test]
    fn test_reference_wavelength() {
        assert!((REFERENCE_WAVELENGTH_NM - 500.0).abs() < f64::EPSILON);
    }

    // Tests 1 Np/m equals about 8.686e-3 dB/mm
    // Verified by dropping the metre to millimetre factor
    #[test]
    fn test_neper_conversion() {
        assert!((NEPER_PER_M_TO_DB_PER_MM - 8.685_889_638e-3).abs() < 1e-12);
    }

    // Tests default seed is fixed
    // Verified by changing seed value
    #[test]
    fn test_default_seed_is_reproducible() {
        assert_eq!(DEFAULT_SEED, 42);
    }

    // Tests default CLI values
    // Verified by emptying the default wavelengths
    #[test]
    fn test_cli_defaults() {
        assert_eq!(DEFAULT_INSTANCES, 1);
        assert_eq!(DEFAULT_WAVELENGTHS_NM, [757.0, 800.0]);
        assert!(DEFAULT_INSTANCES < MIN_INSTANCES_FOR_PROGRESS);
    }

    // Tests progress bar width
    // Verified by changing width value
    #[test]
    fn test_progress_bar_width() {
        assert_eq!(PROGRESS_BAR_WIDTH, 40);
    }
}
