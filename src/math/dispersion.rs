//! Power-law dispersion of optical scattering and acoustic attenuation
//!
//! Generic over the float width so single-precision light-transport buffers
//! can be filled without a round trip through `f64`.

use num_traits::Float;

/// Reduced scattering coefficient at `wavelength`
///
/// `μs'(λ) = μs'(λref) · (λ / λref)^(−b)`. At `wavelength == reference_wavelength`
/// the scale factor is exactly one.
pub fn reduced_scattering_at<T: Float>(
    reference_value: T,
    scattering_power: T,
    wavelength: T,
    reference_wavelength: T,
) -> T {
    reference_value * (wavelength / reference_wavelength).powf(-scattering_power)
}

/// Scattering coefficient from the reduced coefficient and anisotropy
///
/// `μs = μs' / (1 − g)`. Returns `None` when `g >= 1`.
pub fn scattering_from_reduced<T: Float>(reduced: T, anisotropy: T) -> Option<T> {
    let remainder = T::one() - anisotropy;
    (remainder > T::zero()).then(|| reduced / remainder)
}

/// Acoustic attenuation `α(f) = α0 · f^y`
pub fn attenuation_at<T: Float>(alpha0: T, frequency_mhz: T, exponent: T) -> T {
    alpha0 * frequency_mhz.powf(exponent)
}
