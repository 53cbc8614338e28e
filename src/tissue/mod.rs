//! Tissue identifiers and breast-level categories
//!
//! This module contains:
//! - Tissue types and their fixed output labels
//! - Breast density categories and shape modes

/// Breast density categories and shape modes
pub mod category;
/// Tissue types and label lookup
pub mod label;

pub use category::{BreastDensity, ShapeMode};
pub use label::TissueId;
