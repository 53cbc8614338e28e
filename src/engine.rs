//! Entry point for phantom generators: tables, caches and sampling in one place

use crate::io::error::{Result, WithProperty};
use crate::math::dispersion::attenuation_at;
use crate::math::distribution::Distribution;
use crate::optics::evaluator::{OpticalEvaluator, ScatteringParams};
use crate::resolve::cache::ResolutionCache;
use crate::resolve::resolver::{resolve, resolve_with_chain};
use crate::shape::victre::{ShapeSample, shape_params};
use crate::table::predefined::{acoustic_table, attenuation_exponent, optical_table};
use crate::table::property::{PropertyDomain, PropertyKind, PropertyTable};
use crate::tissue::category::{BreastDensity, ShapeMode};
use crate::tissue::label::TissueId;
use rand::Rng;
use std::collections::HashMap;

/// Resolve `kind` for `tissue` in `table` and draw one value
///
/// # Errors
///
/// Returns a resolution error if the entry is missing, cyclic or from another
/// domain, or a sampling error if the distribution cannot be drawn from
pub fn sample_property<R: Rng + ?Sized>(
    table: &PropertyTable,
    tissue: TissueId,
    kind: PropertyKind,
    rng: &mut R,
) -> Result<f64> {
    resolve(table, tissue, kind)?
        .sample(rng)
        .for_property(tissue, kind)
}

/// Literature tables with their resolution caches
///
/// Built once and then only read. Share it by reference or `Arc` between
/// workers; each worker must own its random source.
#[derive(Debug)]
pub struct PropertyEngine {
    acoustic: PropertyTable,
    optical: PropertyTable,
    acoustic_cache: ResolutionCache,
    optical_cache: ResolutionCache,
}

impl PropertyEngine {
    /// Build and validate the predefined acoustic and optical tables
    ///
    /// # Errors
    ///
    /// Returns an error if a predefined table is malformed
    pub fn new() -> Result<Self> {
        Self::from_tables(acoustic_table()?, optical_table()?)
    }

    /// Use caller-supplied tables
    ///
    /// Both tables are fully resolved up front, so malformed alias chains are
    /// reported here rather than on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if a table belongs to the wrong domain or contains a
    /// dangling or cyclic alias
    pub fn from_tables(acoustic: PropertyTable, optical: PropertyTable) -> Result<Self> {
        for (table, expected) in [
            (&acoustic, PropertyDomain::Acoustic),
            (&optical, PropertyDomain::Optical),
        ] {
            if table.domain() != expected {
                return Err(crate::io::error::invalid_argument(
                    "table",
                    &table.domain(),
                    &format!("expected the {expected} table"),
                ));
            }
        }

        let engine = Self {
            acoustic,
            optical,
            acoustic_cache: ResolutionCache::new(),
            optical_cache: ResolutionCache::new(),
        };
        engine.acoustic_cache.warm(&engine.acoustic)?;
        engine.optical_cache.warm(&engine.optical)?;
        log::debug!(
            "engine ready: {} acoustic and {} optical entries",
            engine.acoustic.len(),
            engine.optical.len()
        );
        Ok(engine)
    }

    /// Table holding properties of `domain`
    pub const fn table(&self, domain: PropertyDomain) -> &PropertyTable {
        match domain {
            PropertyDomain::Acoustic => &self.acoustic,
            PropertyDomain::Optical => &self.optical,
        }
    }

    /// Resolution cache of `domain`
    pub const fn cache(&self, domain: PropertyDomain) -> &ResolutionCache {
        match domain {
            PropertyDomain::Acoustic => &self.acoustic_cache,
            PropertyDomain::Optical => &self.optical_cache,
        }
    }

    /// Concrete distribution of `kind` for `tissue`, aliases followed
    ///
    /// # Errors
    ///
    /// Returns a resolution error if the property is undefined for `tissue`
    pub fn resolve(&self, tissue: TissueId, kind: PropertyKind) -> Result<Distribution> {
        let domain = kind.domain();
        Ok(self
            .cache(domain)
            .get_or_resolve(self.table(domain), tissue, kind)?)
    }

    /// Draw one value of `kind` for `tissue`
    ///
    /// # Errors
    ///
    /// Returns a resolution or sampling error
    pub fn sample_property<R: Rng + ?Sized>(
        &self,
        tissue: TissueId,
        kind: PropertyKind,
        rng: &mut R,
    ) -> Result<f64> {
        self.resolve(tissue, kind)?
            .sample(rng)
            .for_property(tissue, kind)
    }

    /// Wavelength evaluator over the optical table
    ///
    /// # Errors
    ///
    /// Never fails for an engine built through [`Self::from_tables`]
    pub fn optics(&self) -> Result<OpticalEvaluator<'_>> {
        OpticalEvaluator::new(&self.optical, &self.optical_cache)
    }

    /// Reduced scattering coefficient μs' of `tissue` at `wavelength_nm`
    ///
    /// # Errors
    ///
    /// See [`OpticalEvaluator::reduced_scattering`]
    pub fn reduced_scattering<R: Rng + ?Sized>(
        &self,
        tissue: TissueId,
        wavelength_nm: f64,
        rng: &mut R,
    ) -> Result<f64> {
        self.optics()?.reduced_scattering(tissue, wavelength_nm, rng)
    }

    /// Scattering coefficient μs of `tissue` at `wavelength_nm`
    ///
    /// # Errors
    ///
    /// See [`OpticalEvaluator::scattering_coefficient`]
    pub fn scattering_coefficient<R: Rng + ?Sized>(
        &self,
        tissue: TissueId,
        wavelength_nm: f64,
        rng: &mut R,
    ) -> Result<f64> {
        self.optics()?
            .scattering_coefficient(tissue, wavelength_nm, rng)
    }

    /// Draw every tabulated property of one phantom instance
    ///
    /// Tissues are visited in label order. A tissue that aliases another
    /// reuses the draw of the tissue owning the entry, so e.g. nipple and
    /// dermis get the same sound speed within one instance. Acoustic and
    /// scattering draws are recorded only for tissues that define the whole
    /// group; air therefore carries no acoustic sample.
    ///
    /// # Errors
    ///
    /// Returns the first resolution or sampling failure
    pub fn sample_instance<R: Rng + ?Sized>(
        &self,
        category: BreastDensity,
        mode: ShapeMode,
        rng: &mut R,
    ) -> Result<PhantomSample> {
        let shape = shape_params(category, mode)?.sample(rng)?;
        let exponent = attenuation_exponent(category);

        let mut drawn = HashMap::new();
        let mut tissues = Vec::new();
        for tissue in TissueId::ALL {
            let mut draw =
                |kind: PropertyKind| self.draw_shared(tissue, kind, &mut drawn, &mut *rng);

            let acoustic = if self.defines_acoustic(tissue) {
                Some(AcousticSample {
                    sound_speed: draw(PropertyKind::SoundSpeed)?,
                    density: draw(PropertyKind::Density)?,
                    attenuation: draw(PropertyKind::AttenuationCoefficient)?,
                    exponent,
                })
            } else {
                None
            };

            let scattering = if self.defines_scattering(tissue) {
                Some(ScatteringParams {
                    tissue,
                    reduced_scattering_ref: draw(PropertyKind::ReducedScatteringRef)?,
                    scattering_power: draw(PropertyKind::ScatteringPowerB)?,
                    anisotropy: draw(PropertyKind::Anisotropy)?,
                })
            } else {
                None
            };

            if acoustic.is_some() || scattering.is_some() {
                tissues.push(TissueSample {
                    tissue,
                    acoustic,
                    scattering,
                });
            }
        }

        Ok(PhantomSample {
            category,
            mode,
            shape,
            tissues,
        })
    }

    // Aliased tissues share the draw of the tissue that owns the entry
    fn draw_shared<R: Rng + ?Sized>(
        &self,
        tissue: TissueId,
        kind: PropertyKind,
        drawn: &mut HashMap<(PropertyKind, TissueId), f64>,
        rng: &mut R,
    ) -> Result<f64> {
        let (distribution, chain) = resolve_with_chain(self.table(kind.domain()), tissue, kind)?;
        let owner = chain.last().copied().unwrap_or(tissue);
        if let Some(&value) = drawn.get(&(kind, owner)) {
            return Ok(value);
        }
        let value = distribution.sample(rng).for_property(owner, kind)?;
        drawn.insert((kind, owner), value);
        Ok(value)
    }

    fn defines_acoustic(&self, tissue: TissueId) -> bool {
        PropertyKind::ACOUSTIC
            .into_iter()
            .all(|kind| self.acoustic.entry(kind, tissue).is_some())
    }

    fn defines_scattering(&self, tissue: TissueId) -> bool {
        [
            PropertyKind::ReducedScatteringRef,
            PropertyKind::ScatteringPowerB,
            PropertyKind::Anisotropy,
        ]
        .into_iter()
        .all(|kind| self.optical.entry(kind, tissue).is_some())
    }
}

/// Acoustic draws of one tissue
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcousticSample {
    /// Sound speed (mm/μs)
    pub sound_speed: f64,
    /// Density (g/mm³)
    pub density: f64,
    /// Attenuation coefficient α0 (dB/(MHz^y·mm))
    pub attenuation: f64,
    /// Frequency exponent y shared by the whole breast
    pub exponent: f64,
}

impl AcousticSample {
    /// Attenuation at `frequency_mhz` (dB/mm)
    pub fn attenuation_at(&self, frequency_mhz: f64) -> f64 {
        attenuation_at(self.attenuation, frequency_mhz, self.exponent)
    }
}

/// Draws of one tissue in one phantom instance
#[derive(Debug, Clone, PartialEq)]
pub struct TissueSample {
    /// Tissue the draws belong to
    pub tissue: TissueId,
    /// Acoustic draws, if the tissue has acoustic properties
    pub acoustic: Option<AcousticSample>,
    /// Optical scattering draws, if the tissue scatters
    pub scattering: Option<ScatteringParams>,
}

/// All draws for one phantom instance
#[derive(Debug, Clone, PartialEq)]
pub struct PhantomSample {
    /// Breast density category
    pub category: BreastDensity,
    /// Shape mode
    pub mode: ShapeMode,
    /// Global shape values
    pub shape: ShapeSample,
    /// Per-tissue draws in label order
    pub tissues: Vec<TissueSample>,
}

impl PhantomSample {
    /// Draws of `tissue`, if any were made
    pub fn tissue(&self, tissue: TissueId) -> Option<&TissueSample> {
        self.tissues.iter().find(|sample| sample.tissue == tissue)
    }
}
