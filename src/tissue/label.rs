//! Tissue identifiers and their fixed 8-bit label values
//!
//! Labels are what the downstream generator writes into the output label
//! volume, so they never change once assigned.

use crate::io::error::{PropertyError, invalid_argument};
use std::fmt;
use std::str::FromStr;

/// Tissue types considered by the phantom generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TissueId {
    /// Water coupling medium surrounding the breast
    Water,
    /// Adipose tissue
    Fat,
    /// Dermis, or the whole skin for the one-layer skin model
    Dermis,
    /// Epidermis-included layer of the two-layer skin model
    Epidermis,
    /// Fibroglandular tissue
    Glandular,
    /// Nipple
    Nipple,
    /// Pectoral muscle
    Muscle,
    /// Cooper's ligament
    Ligament,
    /// Terminal duct lobular unit
    Tdlu,
    /// Lactiferous duct
    Duct,
    /// Artery
    Artery,
    /// Vein
    Vein,
    /// Peripheral angiogenesis around a lesion
    Pa,
    /// Viable tumor cell
    Vtc,
    /// Necrotic core
    Nc,
    /// Microcalcification
    Calcification,
    /// Air
    Air,
}

impl TissueId {
    /// Every tissue in ascending label order
    pub const ALL: [Self; 17] = [
        Self::Water,
        Self::Fat,
        Self::Dermis,
        Self::Epidermis,
        Self::Glandular,
        Self::Nipple,
        Self::Muscle,
        Self::Ligament,
        Self::Tdlu,
        Self::Duct,
        Self::Artery,
        Self::Pa,
        Self::Vtc,
        Self::Nc,
        Self::Vein,
        Self::Calcification,
        Self::Air,
    ];

    /// Background medium of the label volume
    ///
    /// The breast is immersed in water, so background and water share label 0.
    pub const BACKGROUND: Self = Self::Water;

    /// Fixed label written to the output label volume
    pub const fn label(self) -> u8 {
        match self {
            Self::Water => 0,
            Self::Fat => 1,
            Self::Dermis => 2,
            Self::Epidermis => 3,
            Self::Glandular => 29,
            Self::Nipple => 33,
            Self::Muscle => 40,
            Self::Ligament => 88,
            Self::Tdlu => 95,
            Self::Duct => 125,
            Self::Artery => 150,
            Self::Pa => 190,
            Self::Vtc => 200,
            Self::Nc => 210,
            Self::Vein => 225,
            Self::Calcification => 250,
            Self::Air => 255,
        }
    }

    /// Look up the tissue carrying a label, if any
    pub fn from_label(label: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|tissue| tissue.label() == label)
    }

    /// Lowercase identifier used in tables and reports
    pub const fn name(self) -> &'static str {
        match self {
            Self::Water => "water",
            Self::Fat => "fat",
            Self::Dermis => "dermis",
            Self::Epidermis => "epidermis",
            Self::Glandular => "glandular",
            Self::Nipple => "nipple",
            Self::Muscle => "muscle",
            Self::Ligament => "ligament",
            Self::Tdlu => "tdlu",
            Self::Duct => "duct",
            Self::Artery => "artery",
            Self::Vein => "vein",
            Self::Pa => "pa",
            Self::Vtc => "vtc",
            Self::Nc => "nc",
            Self::Calcification => "calcification",
            Self::Air => "air",
        }
    }
}

impl fmt::Display for TissueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TissueId {
    type Err = PropertyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        if lowered == "background" {
            return Ok(Self::BACKGROUND);
        }
        Self::ALL
            .into_iter()
            .find(|tissue| tissue.name() == lowered)
            .ok_or_else(|| invalid_argument("tissue", &s, &"unknown tissue type"))
    }
}
