//! Literature-derived acoustic and optical property tables
//!
//! Acoustic units: sound speed in mm/μs, density in g/mm³, attenuation
//! coefficient in dB/(MHz^y·mm). Optical units: μs' and μa in 1/mm; b, g and
//! n are dimensionless. Reference wavelength for μs' is 500 nm.
//!
//! Sources: Park et al., J. Biomed. Opt. 28(6) 066002 (2023), Tables 6 and 7,
//! and the references cited there (Hasgall/IT'IS, Malik, Klock, Li, Sanchez,
//! André, Cerussi, Peters, Jacques, Simpson, Iorizzo, Bashkatov, Ding,
//! Alexandrakis, Bosschaart, Meinke, Sydoruk, Zysk).

use crate::io::configuration::NEPER_PER_M_TO_DB_PER_MM;
use crate::io::error::{DistributionError, Result};
use crate::math::distribution::Distribution;
use crate::table::property::{PropertyDomain, PropertyKind, PropertyTable};
use crate::tissue::category::BreastDensity;
use crate::tissue::label::TissueId;

// Density entries are tabulated in kg/m³ and stored in g/mm³
const KG_PER_M3_TO_G_PER_MM3: f64 = 1e-6;

/// Acoustic properties of breast tissues and lesion
///
/// # Errors
///
/// Returns an error if a tabulated distribution violates its invariants
pub fn acoustic_table() -> Result<PropertyTable> {
    use PropertyKind::{AttenuationCoefficient, Density, SoundSpeed};
    use TissueId::{
        Artery, Dermis, Duct, Epidermis, Fat, Glandular, Ligament, Nc, Nipple, Tdlu, Vein, Vtc,
        Water,
    };

    let rho = KG_PER_M3_TO_G_PER_MM3;
    let np = NEPER_PER_M_TO_DB_PER_MM;

    let mut builder = PropertyTable::builder(PropertyDomain::Acoustic)
        // Sound speed c, water at 37 °C
        .try_insert(SoundSpeed, Water, Distribution::constant(1.5206))?
        .try_insert(SoundSpeed, Fat, tn(1.4402, 0.0209, 1.412, 1.485))?
        .try_insert(SoundSpeed, Dermis, tn(1.555, 0.010, 1.530, 1.580))?
        .try_insert(SoundSpeed, Glandular, tn(1.540, 0.015, 1.517, 1.567))?
        .try_insert(SoundSpeed, Ligament, tn(1.457, 0.0185, 1.422, 1.496))?
        .try_insert(SoundSpeed, Artery, tn(1.5782, 0.0113, 1.5592, 1.590))?
        .try_insert(SoundSpeed, Vtc, tn(1.548, 0.0103, 1.531, 1.565))?
        // Density ρ
        .try_insert(Density, Water, Distribution::constant(993.36 * rho))?
        .try_insert(Density, Fat, tn(911.0 * rho, 53.0 * rho, 812.0 * rho, 961.0 * rho))?
        .try_insert(
            Density,
            Dermis,
            tn(1109.0 * rho, 14.0 * rho, 1100.0 * rho, 1125.0 * rho),
        )?
        .try_insert(
            Density,
            Glandular,
            tn(1041.0 * rho, 45.3 * rho, 990.0 * rho, 1092.0 * rho),
        )?
        .try_insert(
            Density,
            Ligament,
            tn(1142.0 * rho, 45.0 * rho, 1110.0 * rho, 1174.0 * rho),
        )?
        .try_insert(
            Density,
            Artery,
            tn(1050.0 * rho, 17.0 * rho, 1025.0 * rho, 1060.0 * rho),
        )?
        .try_insert(Density, Vtc, tn(945.0 * rho, 20.0 * rho, 911.0 * rho, 999.0 * rho))?
        // Attenuation coefficient α0, tabulated in Np/(MHz^y·m)
        .try_insert(
            AttenuationCoefficient,
            Water,
            Distribution::constant(0.025_328_436_023 * np),
        )?
        .try_insert(
            AttenuationCoefficient,
            Fat,
            Distribution::gaussian(4.3578 * np, 0.436 * np),
        )?
        .try_insert(
            AttenuationCoefficient,
            Dermis,
            Distribution::gaussian(21.158 * np, 2.16 * np),
        )?
        .try_insert(
            AttenuationCoefficient,
            Glandular,
            Distribution::gaussian(8.635 * np, 0.86 * np),
        )?
        .try_insert(
            AttenuationCoefficient,
            Ligament,
            Distribution::gaussian(14.506 * np, 1.45 * np),
        )?
        .try_insert(
            AttenuationCoefficient,
            Artery,
            Distribution::constant(2.3676 * np),
        )?
        .try_insert(
            AttenuationCoefficient,
            Vtc,
            Distribution::gaussian(31.0 * np, 2.3 * np),
        )?;

    for kind in PropertyKind::ACOUSTIC {
        builder = builder
            .alias(kind, Epidermis, Dermis)?
            .alias(kind, Nipple, Dermis)?
            .alias(kind, Tdlu, Glandular)?
            .alias(kind, Duct, Glandular)?
            .alias(kind, Vein, Artery)?
            .alias(kind, Nc, Vtc)?;
    }

    Ok(builder.build())
}

/// Optical scattering parameters, anisotropy and refractive index
///
/// Absorption is tabulated only for air; every other tissue's μa depends on
/// per-voxel chromophore fractions and is computed by the functional
/// phantom generator.
///
/// # Errors
///
/// Returns an error if a tabulated distribution violates its invariants
pub fn optical_table() -> Result<PropertyTable> {
    use PropertyKind::{
        AbsorptionCoefficient, Anisotropy, ReducedScatteringRef, RefractiveIndex,
        ScatteringPowerB,
    };
    use TissueId::{
        Air, Artery, Dermis, Duct, Epidermis, Fat, Glandular, Ligament, Nc, Nipple, Tdlu, Vein,
        Vtc,
    };

    let mut builder = PropertyTable::builder(PropertyDomain::Optical)
        // Reduced scattering coefficient μs'(500 nm)
        .try_insert(ReducedScatteringRef, Fat, Distribution::constant(1.06))?
        .try_insert(ReducedScatteringRef, Dermis, range(3.72, 4.78))?
        .try_insert(ReducedScatteringRef, Glandular, Distribution::constant(0.83))?
        .try_insert(ReducedScatteringRef, Artery, range(2.2, 2.295))?
        .try_insert(ReducedScatteringRef, Vtc, range(2.003, 2.0676))?
        // Scattering power b
        .try_insert(ScatteringPowerB, Fat, Distribution::constant(0.52))?
        .try_insert(ScatteringPowerB, Dermis, range(1.39, 2.453))?
        .try_insert(ScatteringPowerB, Glandular, Distribution::constant(0.617))?
        .try_insert(ScatteringPowerB, Artery, range(0.66, 0.872))?
        .try_insert(ScatteringPowerB, Vtc, range(0.725, 1.4865))?
        // Scattering anisotropy g
        .try_insert(Anisotropy, Fat, Distribution::constant(0.98))?
        .try_insert(Anisotropy, Dermis, Distribution::constant(0.65))?
        .try_insert(Anisotropy, Glandular, Distribution::constant(0.96))?
        .try_insert(Anisotropy, Artery, Distribution::constant(0.976))?
        .try_insert(Anisotropy, Vtc, Distribution::constant(0.955))?
        .try_insert(Anisotropy, Air, Distribution::constant(1.0))?
        // Refractive index n
        .try_insert(RefractiveIndex, Fat, Distribution::constant(1.44))?
        .try_insert(RefractiveIndex, Dermis, Distribution::constant(1.37))?
        .try_insert(RefractiveIndex, Glandular, Distribution::constant(1.36))?
        .try_insert(RefractiveIndex, Artery, Distribution::constant(1.35))?
        .try_insert(RefractiveIndex, Vtc, Distribution::constant(1.39))?
        .try_insert(RefractiveIndex, Air, Distribution::constant(1.0))?
        // Absorption μa, constant only for air
        .try_insert(AbsorptionCoefficient, Air, Distribution::constant(0.0))?;

    for kind in [
        ReducedScatteringRef,
        ScatteringPowerB,
        Anisotropy,
        RefractiveIndex,
    ] {
        builder = builder
            .alias(kind, Epidermis, Dermis)?
            .alias(kind, Nipple, Dermis)?
            .alias(kind, Ligament, Fat)?
            .alias(kind, Tdlu, Fat)?
            .alias(kind, Duct, Fat)?
            .alias(kind, Vein, Artery)?
            .alias(kind, Nc, Vtc)?;
    }

    Ok(builder.build())
}

/// Frequency power-law exponent y of acoustic attenuation
///
/// Denser breasts attenuate more steeply with frequency.
pub const fn attenuation_exponent(category: BreastDensity) -> f64 {
    match category {
        BreastDensity::A => 1.1151,
        BreastDensity::B => 1.1642,
        BreastDensity::C => 1.2563,
        BreastDensity::D => 1.3635,
    }
}

fn tn(
    mean: f64,
    std: f64,
    lower: f64,
    upper: f64,
) -> std::result::Result<Distribution, DistributionError> {
    Distribution::truncated_gaussian(mean, std, lower, upper)
}

// Literature ranges are reported as unordered pairs
fn range(a: f64, b: f64) -> std::result::Result<Distribution, DistributionError> {
    Distribution::uniform(a.min(b), a.max(b))
}
