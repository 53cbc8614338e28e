//! Breast density categories and shape modes selecting the shape parameters

use crate::io::error::{PropertyError, invalid_argument};
use std::fmt;
use std::str::FromStr;

/// BI-RADS breast density category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BreastDensity {
    /// Almost entirely fatty
    A,
    /// Scattered areas of fibroglandular density
    B,
    /// Heterogeneously dense
    C,
    /// Extremely dense
    D,
}

impl BreastDensity {
    /// All categories from least to most dense
    pub const ALL: [Self; 4] = [Self::A, Self::B, Self::C, Self::D];

    /// Single-letter name of the category
    pub const fn letter(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
        }
    }
}

impl fmt::Display for BreastDensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Parses the leading letter, so "A", "a" and "A (fatty)" are equivalent
impl FromStr for BreastDensity {
    type Err = PropertyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('A') => Ok(Self::A),
            Some('B') => Ok(Self::B),
            Some('C') => Ok(Self::C),
            Some('D') => Ok(Self::D),
            _ => Err(invalid_argument(
                "breast_type",
                &s,
                &"must start with A, B, C or D",
            )),
        }
    }
}

/// Overall breast shape model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeMode {
    /// Stochastic VICTRE shape with ptosis and top-turn perturbations
    Natural,
    /// Perfect hemisphere with every shape perturbation disabled
    Hemisphere,
}

impl fmt::Display for ShapeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Natural => f.write_str("natural"),
            Self::Hemisphere => f.write_str("hemisphere"),
        }
    }
}

impl FromStr for ShapeMode {
    type Err = PropertyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "natural" => Ok(Self::Natural),
            "hemisphere" => Ok(Self::Hemisphere),
            _ => Err(invalid_argument(
                "breast_shape",
                &s,
                &"must be 'natural' or 'hemisphere'",
            )),
        }
    }
}
