//! Global breast shape descriptors

/// VICTRE extent and shape parameters by breast density and shape mode
pub mod victre;

pub use victre::{ShapeParameterSet, ShapeSample, shape_params};
