//! Tissue property engine for stochastic numerical breast phantoms
//!
//! Acoustic and optical properties of breast tissues are tabulated as
//! constants, Gaussians, truncated Gaussians or literature ranges, with many
//! tissues aliasing another tissue's entry. The engine resolves aliases,
//! draws per-instance values, scales optical scattering to any wavelength,
//! and selects VICTRE shape parameters by breast density and shape mode.

#![forbid(unsafe_code)]

/// Facade bundling tables, caches and per-instance sampling
pub mod engine;
/// Input/output operations, constants and error handling
pub mod io;
/// Distributions, probability helpers and dispersion relations
pub mod math;
/// Wavelength-dependent optical evaluation
pub mod optics;
/// Alias resolution and its cache
pub mod resolve;
/// Breast shape and size parameters
pub mod shape;
/// Property kinds, tables and the literature values
pub mod table;
/// Tissue identifiers and breast-level categories
pub mod tissue;

pub use engine::{PhantomSample, PropertyEngine, sample_property};
pub use io::error::{PropertyError, Result};
pub use math::distribution::Distribution;
pub use shape::victre::{ShapeParameterSet, shape_params};
pub use table::{PropertyDomain, PropertyKind, PropertyTable};
pub use tissue::{BreastDensity, ShapeMode, TissueId};
