//! Property tables for the acoustic and optical domains
//!
//! This module contains:
//! - Property kinds, domains and the immutable table type
//! - The literature-derived tables shipped with the engine

/// Predefined literature tables
pub mod predefined;
/// Property kinds and table construction
pub mod property;

pub use property::{PropertyDomain, PropertyKind, PropertyTable};
