//! Mathematical utilities for the engine

/// Power-law dispersion relations for scattering and attenuation
pub mod dispersion;
/// Scalar distributions and sampling
pub mod distribution;
/// Normal distribution functions and truncation statistics
pub mod probability;

pub use distribution::Distribution;
