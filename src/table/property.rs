//! Property kinds and immutable per-domain property tables

use crate::io::error::{DistributionError, ResolutionError};
use crate::math::distribution::Distribution;
use crate::tissue::label::TissueId;
use std::collections::HashMap;
use std::fmt;

/// Physical domain a property belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyDomain {
    /// Ultrasound propagation properties
    Acoustic,
    /// Light transport properties
    Optical,
}

impl PropertyDomain {
    /// Properties tabulated in this domain
    pub const fn kinds(self) -> &'static [PropertyKind] {
        match self {
            Self::Acoustic => &PropertyKind::ACOUSTIC,
            Self::Optical => &PropertyKind::OPTICAL,
        }
    }
}

impl fmt::Display for PropertyDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Acoustic => f.write_str("acoustic"),
            Self::Optical => f.write_str("optical"),
        }
    }
}

/// Tabulated physical quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PropertyKind {
    /// Sound speed c
    SoundSpeed,
    /// Mass density ρ
    Density,
    /// Attenuation coefficient α0 of the frequency power law
    AttenuationCoefficient,
    /// Reduced scattering coefficient μs' at the reference wavelength
    ReducedScatteringRef,
    /// Scattering power b of the wavelength power law
    ScatteringPowerB,
    /// Scattering anisotropy g
    Anisotropy,
    /// Refractive index n
    RefractiveIndex,
    /// Optical absorption coefficient μa, tabulated only where it is constant
    AbsorptionCoefficient,
}

impl PropertyKind {
    /// Properties of the acoustic table
    pub const ACOUSTIC: [Self; 3] = [
        Self::SoundSpeed,
        Self::Density,
        Self::AttenuationCoefficient,
    ];

    /// Properties of the optical table
    pub const OPTICAL: [Self; 5] = [
        Self::ReducedScatteringRef,
        Self::ScatteringPowerB,
        Self::Anisotropy,
        Self::RefractiveIndex,
        Self::AbsorptionCoefficient,
    ];

    /// Domain whose table holds this property
    pub const fn domain(self) -> PropertyDomain {
        match self {
            Self::SoundSpeed | Self::Density | Self::AttenuationCoefficient => {
                PropertyDomain::Acoustic
            }
            Self::ReducedScatteringRef
            | Self::ScatteringPowerB
            | Self::Anisotropy
            | Self::RefractiveIndex
            | Self::AbsorptionCoefficient => PropertyDomain::Optical,
        }
    }

    /// Unit of the tabulated values
    pub const fn unit(self) -> &'static str {
        match self {
            Self::SoundSpeed => "mm/us",
            Self::Density => "g/mm^3",
            Self::AttenuationCoefficient => "dB/(MHz^y mm)",
            Self::ReducedScatteringRef | Self::AbsorptionCoefficient => "1/mm",
            Self::ScatteringPowerB | Self::Anisotropy | Self::RefractiveIndex => "",
        }
    }

    /// Short identifier used in reports
    pub const fn name(self) -> &'static str {
        match self {
            Self::SoundSpeed => "sound_speed",
            Self::Density => "density",
            Self::AttenuationCoefficient => "alpha_coeff",
            Self::ReducedScatteringRef => "mu_sp_ref",
            Self::ScatteringPowerB => "b",
            Self::Anisotropy => "g",
            Self::RefractiveIndex => "n",
            Self::AbsorptionCoefficient => "mu_a",
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable mapping from (property, tissue) to a distribution or alias
///
/// One table exists per physical domain. Tables are only built through
/// [`PropertyTableBuilder`] and never change afterwards, so they can be
/// shared across threads by reference.
#[derive(Debug, Clone)]
pub struct PropertyTable {
    domain: PropertyDomain,
    entries: HashMap<(PropertyKind, TissueId), Distribution>,
}

impl PropertyTable {
    /// Start building a table for `domain`
    pub fn builder(domain: PropertyDomain) -> PropertyTableBuilder {
        PropertyTableBuilder {
            table: Self {
                domain,
                entries: HashMap::new(),
            },
        }
    }

    /// Physical domain of this table
    pub const fn domain(&self) -> PropertyDomain {
        self.domain
    }

    /// Raw entry, which may still be an alias
    pub fn entry(&self, kind: PropertyKind, tissue: TissueId) -> Option<&Distribution> {
        self.entries.get(&(kind, tissue))
    }

    /// Tissues with an entry for `kind`, in label order
    pub fn tissues(&self, kind: PropertyKind) -> Vec<TissueId> {
        TissueId::ALL
            .into_iter()
            .filter(|&tissue| self.entries.contains_key(&(kind, tissue)))
            .collect()
    }

    /// Number of entries, aliases included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check that `kind` can be looked up in this table
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError::DomainMismatch`] for a property of another domain
    pub fn check_domain(&self, kind: PropertyKind) -> Result<(), ResolutionError> {
        if kind.domain() == self.domain {
            Ok(())
        } else {
            Err(ResolutionError::DomainMismatch {
                kind,
                table: self.domain,
            })
        }
    }

    /// Resolve every entry once
    ///
    /// # Errors
    ///
    /// Returns the first alias cycle or dangling alias found, in label order
    pub fn validate(&self) -> Result<(), ResolutionError> {
        for &kind in self.domain.kinds() {
            for tissue in self.tissues(kind) {
                crate::resolve::resolver::resolve(self, tissue, kind)?;
            }
        }
        Ok(())
    }
}

/// Accumulates entries for a [`PropertyTable`]
#[derive(Debug)]
pub struct PropertyTableBuilder {
    table: PropertyTable,
}

impl PropertyTableBuilder {
    /// Add or replace the entry for (`kind`, `tissue`)
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError::DomainMismatch`] if `kind` belongs to another domain
    pub fn insert(
        mut self,
        kind: PropertyKind,
        tissue: TissueId,
        distribution: Distribution,
    ) -> Result<Self, ResolutionError> {
        self.table.check_domain(kind)?;
        self.table.entries.insert((kind, tissue), distribution);
        Ok(self)
    }

    /// Add the entry produced by a fallible distribution constructor
    ///
    /// # Errors
    ///
    /// Returns the constructor's error, or a domain mismatch
    pub fn try_insert(
        self,
        kind: PropertyKind,
        tissue: TissueId,
        distribution: Result<Distribution, DistributionError>,
    ) -> crate::Result<Self> {
        Ok(self.insert(kind, tissue, distribution?)?)
    }

    /// Point `tissue` at `target`'s entry for `kind`
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError::DomainMismatch`] if `kind` belongs to another domain
    pub fn alias(
        self,
        kind: PropertyKind,
        tissue: TissueId,
        target: TissueId,
    ) -> Result<Self, ResolutionError> {
        self.insert(kind, tissue, Distribution::alias(target))
    }

    /// Finish building
    pub fn build(self) -> PropertyTable {
        self.table
    }
}
