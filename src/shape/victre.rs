//! Breast volume extent and shape parameters for VICTRE phantom generation
//!
//! Extents: `a1t` (mm) and the ratios `a1b/a1t`, `a2r/a1t`, `a2l/a2r`,
//! `a3/a1t`. Shape: `ε1`, ptosis `B0`/`B1` and top-turn `H0`/`H1`.
//! Values follow Park et al. (2023), Table 2.

use crate::io::error::{DistributionError, Result};
use crate::math::distribution::Distribution;
use crate::tissue::category::{BreastDensity, ShapeMode};
use rand::Rng;

/// Breast density categories sharing one `a1t` distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtentGroup {
    /// Categories A, B and C
    NonExtremelyDense,
    /// Category D
    ExtremelyDense,
}

impl ExtentGroup {
    /// Group of `category`
    pub const fn of(category: BreastDensity) -> Self {
        match category {
            BreastDensity::A | BreastDensity::B | BreastDensity::C => Self::NonExtremelyDense,
            BreastDensity::D => Self::ExtremelyDense,
        }
    }

    /// TN(μ, σ, min, max) of the top extent `a1t` in mm
    pub const fn a1t(self) -> (f64, f64, f64, f64) {
        match self {
            Self::NonExtremelyDense => (59.7025, 3.575, 50.765, 71.5),
            Self::ExtremelyDense => (50.05, 3.575, 42.9, 57.2),
        }
    }
}

/// Breast density categories sharing one `a3/a1t` distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthGroup {
    /// Categories A and B
    Fatty,
    /// Category C
    HeterogeneouslyDense,
    /// Category D
    ExtremelyDense,
}

impl DepthGroup {
    /// Group of `category`
    pub const fn of(category: BreastDensity) -> Self {
        match category {
            BreastDensity::A | BreastDensity::B => Self::Fatty,
            BreastDensity::C => Self::HeterogeneouslyDense,
            BreastDensity::D => Self::ExtremelyDense,
        }
    }

    /// TN(μ, σ, min, max) of the depth ratio `a3/a1t`
    pub const fn a3_a1t(self) -> (f64, f64, f64, f64) {
        match self {
            Self::Fatty => (0.85, 0.14, 0.8, 1.2),
            Self::HeterogeneouslyDense => (0.85, 0.12, 0.7, 1.1),
            Self::ExtremelyDense => (0.85, 0.1, 0.7, 1.1),
        }
    }
}

/// Distributions of every global shape descriptor for one breast
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeParameterSet {
    /// Breast density category the set was built for
    pub category: BreastDensity,
    /// Shape mode the set was built for
    pub mode: ShapeMode,
    /// Top extent a1t (mm)
    pub a1t: Distribution,
    /// Bottom-to-top extent ratio a1b/a1t
    pub a1b_a1t: Distribution,
    /// Right-to-top extent ratio a2r/a1t
    pub a2r_a1t: Distribution,
    /// Left-to-right extent ratio a2l/a2r
    pub a2l_a2r: Distribution,
    /// Depth-to-top extent ratio a3/a1t
    pub a3_a1t: Distribution,
    /// Superellipsoid exponent ε1
    pub eps1: Distribution,
    /// Ptosis coefficient B0
    pub ptosis_b0: Distribution,
    /// Ptosis coefficient B1
    pub ptosis_b1: Distribution,
    /// Top-turn coefficient H0
    pub turn_top_h0: Distribution,
    /// Top-turn coefficient H1
    pub turn_top_h1: Distribution,
    /// Whether the mesh generator applies ptosis
    pub do_ptosis: bool,
    /// Whether the mesh generator applies top turning
    pub do_turn_top: bool,
}

/// Resolve the shape parameter set for a breast density and shape mode
///
/// Under [`ShapeMode::Hemisphere`] every ratio and `ε1` collapse to 1 and
/// the ptosis/top-turn coefficients to 0, and both perturbation flags are
/// cleared. `a1t` keeps its category distribution in both modes.
///
/// # Errors
///
/// Returns an error only if a tabulated distribution is malformed
pub fn shape_params(category: BreastDensity, mode: ShapeMode) -> Result<ShapeParameterSet> {
    let a1t = truncated(ExtentGroup::of(category).a1t())?;

    let set = match mode {
        ShapeMode::Natural => ShapeParameterSet {
            category,
            mode,
            a1t,
            a1b_a1t: Distribution::gaussian(1.0, 0.02)?,
            a2r_a1t: Distribution::gaussian(1.0, 0.05)?,
            a2l_a2r: Distribution::gaussian(1.0, 0.05)?,
            a3_a1t: truncated(DepthGroup::of(category).a3_a1t())?,
            eps1: Distribution::gaussian(1.0, 0.1)?,
            ptosis_b0: Distribution::truncated_gaussian(0.0, 0.1, -0.18, 0.18)?,
            ptosis_b1: Distribution::truncated_gaussian(0.0, 0.1, -0.18, 0.18)?,
            turn_top_h0: Distribution::truncated_gaussian(0.0, 0.15, -0.11, 0.11)?,
            turn_top_h1: Distribution::truncated_gaussian(0.0, 0.25, -0.3, 0.3)?,
            do_ptosis: true,
            do_turn_top: true,
        },
        ShapeMode::Hemisphere => ShapeParameterSet {
            category,
            mode,
            a1t,
            a1b_a1t: Distribution::Constant(1.0),
            a2r_a1t: Distribution::Constant(1.0),
            a2l_a2r: Distribution::Constant(1.0),
            a3_a1t: Distribution::Constant(1.0),
            eps1: Distribution::Constant(1.0),
            ptosis_b0: Distribution::Constant(0.0),
            ptosis_b1: Distribution::Constant(0.0),
            turn_top_h0: Distribution::Constant(0.0),
            turn_top_h1: Distribution::Constant(0.0),
            do_ptosis: false,
            do_turn_top: false,
        },
    };

    Ok(set)
}

impl ShapeParameterSet {
    /// Extent ratio members by name
    pub const fn ratios(&self) -> [(&'static str, Distribution); 4] {
        [
            ("a1b_a1t", self.a1b_a1t),
            ("a2r_a1t", self.a2r_a1t),
            ("a2l_a2r", self.a2l_a2r),
            ("a3_a1t", self.a3_a1t),
        ]
    }

    /// Shape coefficient members by name
    pub const fn coefficients(&self) -> [(&'static str, Distribution); 5] {
        [
            ("eps1", self.eps1),
            ("ptosisB0", self.ptosis_b0),
            ("ptosisB1", self.ptosis_b1),
            ("turnTopH0", self.turn_top_h0),
            ("turnTopH1", self.turn_top_h1),
        ]
    }

    /// Every member by name, `a1t` first
    pub fn named(&self) -> Vec<(&'static str, Distribution)> {
        std::iter::once(("a1t", self.a1t))
            .chain(self.ratios())
            .chain(self.coefficients())
            .collect()
    }

    /// Draw concrete values for one breast
    ///
    /// # Errors
    ///
    /// Returns an error if a truncated member exhausts its rejection limit
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<ShapeSample> {
        Ok(ShapeSample {
            a1t: self.a1t.sample(rng)?,
            a1b_a1t: self.a1b_a1t.sample(rng)?,
            a2r_a1t: self.a2r_a1t.sample(rng)?,
            a2l_a2r: self.a2l_a2r.sample(rng)?,
            a3_a1t: self.a3_a1t.sample(rng)?,
            eps1: self.eps1.sample(rng)?,
            ptosis_b0: self.ptosis_b0.sample(rng)?,
            ptosis_b1: self.ptosis_b1.sample(rng)?,
            turn_top_h0: self.turn_top_h0.sample(rng)?,
            turn_top_h1: self.turn_top_h1.sample(rng)?,
            do_ptosis: self.do_ptosis,
            do_turn_top: self.do_turn_top,
        })
    }
}

/// Concrete shape values drawn for one breast
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeSample {
    /// Top extent a1t (mm)
    pub a1t: f64,
    /// a1b/a1t
    pub a1b_a1t: f64,
    /// a2r/a1t
    pub a2r_a1t: f64,
    /// a2l/a2r
    pub a2l_a2r: f64,
    /// a3/a1t
    pub a3_a1t: f64,
    /// ε1
    pub eps1: f64,
    /// B0
    pub ptosis_b0: f64,
    /// B1
    pub ptosis_b1: f64,
    /// H0
    pub turn_top_h0: f64,
    /// H1
    pub turn_top_h1: f64,
    /// Whether the mesh generator applies ptosis
    pub do_ptosis: bool,
    /// Whether the mesh generator applies top turning
    pub do_turn_top: bool,
}

/// Absolute breast extents in mm
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extents {
    /// Top
    pub a1t: f64,
    /// Bottom
    pub a1b: f64,
    /// Right
    pub a2r: f64,
    /// Left
    pub a2l: f64,
    /// Depth, chest wall to nipple
    pub a3: f64,
}

impl ShapeSample {
    /// Convert the ratios into absolute extents
    pub const fn extents(&self) -> Extents {
        let a2r = self.a1t * self.a2r_a1t;
        Extents {
            a1t: self.a1t,
            a1b: self.a1t * self.a1b_a1t,
            a2r,
            a2l: a2r * self.a2l_a2r,
            a3: self.a1t * self.a3_a1t,
        }
    }

    /// Parameter values in VICTRE configuration order
    pub const fn named(&self) -> [(&'static str, f64); 10] {
        [
            ("a1t", self.a1t),
            ("a1b_a1t", self.a1b_a1t),
            ("a2r_a1t", self.a2r_a1t),
            ("a2l_a2r", self.a2l_a2r),
            ("a3_a1t", self.a3_a1t),
            ("eps1", self.eps1),
            ("ptosisB0", self.ptosis_b0),
            ("ptosisB1", self.ptosis_b1),
            ("turnTopH0", self.turn_top_h0),
            ("turnTopH1", self.turn_top_h1),
        ]
    }
}

fn truncated(
    (mean, std, lower, upper): (f64, f64, f64, f64),
) -> std::result::Result<Distribution, DistributionError> {
    Distribution::truncated_gaussian(mean, std, lower, upper)
}
