//! Wavelength-dependent scattering evaluated from sampled reference parameters

use crate::io::configuration::REFERENCE_WAVELENGTH_NM;
use crate::io::error::{EvaluatorError, Result, WithProperty, invalid_argument};
use crate::math::dispersion::{reduced_scattering_at, scattering_from_reduced};
use crate::resolve::cache::ResolutionCache;
use crate::table::property::{PropertyDomain, PropertyKind, PropertyTable};
use crate::tissue::label::TissueId;
use ndarray::Array1;
use rand::Rng;

/// Scattering parameters of one tissue in one phantom instance
///
/// Sampling once and evaluating many wavelengths keeps every wavelength of a
/// multispectral simulation consistent with the same tissue realization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatteringParams {
    /// Tissue the parameters were drawn for
    pub tissue: TissueId,
    /// Reduced scattering coefficient at the reference wavelength (1/mm)
    pub reduced_scattering_ref: f64,
    /// Scattering power b
    pub scattering_power: f64,
    /// Scattering anisotropy g
    pub anisotropy: f64,
}

impl ScatteringParams {
    /// Reduced scattering coefficient μs' at `wavelength_nm` (1/mm)
    ///
    /// # Errors
    ///
    /// Returns [`EvaluatorError::InvalidWavelength`] for non-positive or
    /// non-finite wavelengths
    pub fn reduced_scattering(
        &self,
        wavelength_nm: f64,
    ) -> std::result::Result<f64, EvaluatorError> {
        check_wavelength(wavelength_nm)?;
        Ok(reduced_scattering_at(
            self.reduced_scattering_ref,
            self.scattering_power,
            wavelength_nm,
            REFERENCE_WAVELENGTH_NM,
        ))
    }

    /// Scattering coefficient μs = μs'/(1 − g) at `wavelength_nm` (1/mm)
    ///
    /// Air has g = 1 and is reported as non-scattering.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluatorError::InvalidWavelength`] for invalid wavelengths
    /// and [`EvaluatorError::DegenerateAnisotropy`] for g ≥ 1 outside air
    pub fn scattering_coefficient(
        &self,
        wavelength_nm: f64,
    ) -> std::result::Result<f64, EvaluatorError> {
        let reduced = self.reduced_scattering(wavelength_nm)?;
        scattering_or_air(self.tissue, reduced, self.anisotropy)
    }

    /// μs' at every wavelength of `wavelengths_nm`
    ///
    /// # Errors
    ///
    /// Returns [`EvaluatorError::InvalidWavelength`] for the first invalid wavelength
    pub fn spectrum(
        &self,
        wavelengths_nm: &Array1<f64>,
    ) -> std::result::Result<Array1<f64>, EvaluatorError> {
        if let Some(&bad) = wavelengths_nm.iter().find(|w| !is_valid_wavelength(**w)) {
            return Err(EvaluatorError::InvalidWavelength { wavelength_nm: bad });
        }
        Ok(wavelengths_nm.mapv(|wavelength| {
            reduced_scattering_at(
                self.reduced_scattering_ref,
                self.scattering_power,
                wavelength,
                REFERENCE_WAVELENGTH_NM,
            )
        }))
    }
}

/// Evaluates optical quantities against an optical property table
///
/// Borrows the table and its resolution cache; any number of evaluators may
/// share them across threads, each with its own random source.
#[derive(Debug, Clone, Copy)]
pub struct OpticalEvaluator<'a> {
    table: &'a PropertyTable,
    cache: &'a ResolutionCache,
}

impl<'a> OpticalEvaluator<'a> {
    /// Create an evaluator over an optical table
    ///
    /// # Errors
    ///
    /// Returns an invalid argument error if `table` is not an optical table
    pub fn new(table: &'a PropertyTable, cache: &'a ResolutionCache) -> Result<Self> {
        if table.domain() != PropertyDomain::Optical {
            return Err(invalid_argument(
                "table",
                &table.domain(),
                &"wavelength evaluation needs the optical table",
            ));
        }
        Ok(Self { table, cache })
    }

    /// Draw μs'(λref), b and g for `tissue`
    ///
    /// # Errors
    ///
    /// Returns an error if any of the three properties is undefined for
    /// `tissue` or cannot be sampled
    pub fn sample_params<R: Rng + ?Sized>(
        &self,
        tissue: TissueId,
        rng: &mut R,
    ) -> Result<ScatteringParams> {
        Ok(ScatteringParams {
            tissue,
            reduced_scattering_ref: self.draw(tissue, PropertyKind::ReducedScatteringRef, rng)?,
            scattering_power: self.draw(tissue, PropertyKind::ScatteringPowerB, rng)?,
            anisotropy: self.draw(tissue, PropertyKind::Anisotropy, rng)?,
        })
    }

    /// Reduced scattering coefficient μs' of `tissue` at `wavelength_nm` (1/mm)
    ///
    /// # Errors
    ///
    /// Returns an error for invalid wavelengths, or if μs'(λref) or b is
    /// undefined for `tissue`
    pub fn reduced_scattering<R: Rng + ?Sized>(
        &self,
        tissue: TissueId,
        wavelength_nm: f64,
        rng: &mut R,
    ) -> Result<f64> {
        check_wavelength(wavelength_nm)?;
        let reference = self.draw(tissue, PropertyKind::ReducedScatteringRef, rng)?;
        let power = self.draw(tissue, PropertyKind::ScatteringPowerB, rng)?;
        Ok(reduced_scattering_at(
            reference,
            power,
            wavelength_nm,
            REFERENCE_WAVELENGTH_NM,
        ))
    }

    /// Scattering coefficient μs of `tissue` at `wavelength_nm` (1/mm)
    ///
    /// Anisotropy is drawn first; air (g = 1) returns 0 without needing any
    /// scattering parameters.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid wavelengths, undefined properties, or
    /// g ≥ 1 outside air
    pub fn scattering_coefficient<R: Rng + ?Sized>(
        &self,
        tissue: TissueId,
        wavelength_nm: f64,
        rng: &mut R,
    ) -> Result<f64> {
        check_wavelength(wavelength_nm)?;
        let anisotropy = self.draw(tissue, PropertyKind::Anisotropy, rng)?;
        if anisotropy >= 1.0 {
            return Ok(scattering_or_air(tissue, 0.0, anisotropy)?);
        }
        let reduced = self.reduced_scattering(tissue, wavelength_nm, rng)?;
        Ok(scattering_or_air(tissue, reduced, anisotropy)?)
    }

    /// Tabulated absorption coefficient μa (1/mm)
    ///
    /// Only media with a constant μa are tabulated; chromophore-mixed μa of
    /// soft tissue belongs to the functional phantom.
    ///
    /// # Errors
    ///
    /// Returns [`crate::io::error::ResolutionError::PropertyUndefined`] for
    /// tissues without a tabulated μa
    pub fn absorption_coefficient<R: Rng + ?Sized>(
        &self,
        tissue: TissueId,
        rng: &mut R,
    ) -> Result<f64> {
        self.draw(tissue, PropertyKind::AbsorptionCoefficient, rng)
    }

    /// Refractive index n of `tissue`
    ///
    /// # Errors
    ///
    /// Returns an error if n is undefined for `tissue`
    pub fn refractive_index<R: Rng + ?Sized>(&self, tissue: TissueId, rng: &mut R) -> Result<f64> {
        self.draw(tissue, PropertyKind::RefractiveIndex, rng)
    }

    fn draw<R: Rng + ?Sized>(
        &self,
        tissue: TissueId,
        kind: PropertyKind,
        rng: &mut R,
    ) -> Result<f64> {
        self.cache
            .get_or_resolve(self.table, tissue, kind)?
            .sample(rng)
            .for_property(tissue, kind)
    }
}

fn scattering_or_air(
    tissue: TissueId,
    reduced: f64,
    anisotropy: f64,
) -> std::result::Result<f64, EvaluatorError> {
    match scattering_from_reduced(reduced, anisotropy) {
        Some(scattering) => Ok(scattering),
        None if tissue == TissueId::Air => Ok(0.0),
        None => Err(EvaluatorError::DegenerateAnisotropy {
            tissue,
            g: anisotropy,
        }),
    }
}

const fn is_valid_wavelength(wavelength_nm: f64) -> bool {
    wavelength_nm.is_finite() && wavelength_nm > 0.0
}

const fn check_wavelength(wavelength_nm: f64) -> std::result::Result<(), EvaluatorError> {
    if is_valid_wavelength(wavelength_nm) {
        Ok(())
    } else {
        Err(EvaluatorError::InvalidWavelength { wavelength_nm })
    }
}
