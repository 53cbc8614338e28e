/// Wavelength-dependent scattering evaluation
pub mod evaluator;

pub use evaluator::{OpticalEvaluator, ScatteringParams};
