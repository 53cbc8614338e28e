//! Engine constants and runtime configuration defaults

// Guards against malformed alias tables
/// Maximum number of alias hops followed before declaring a cycle
pub const MAX_ALIAS_DEPTH: usize = 32;

// Guards against truncation bounds with negligible probability mass
/// Maximum number of draws per truncated Gaussian sample
pub const REJECTION_LIMIT: usize = 10_000;

/// Reference wavelength for the scattering power law (nm)
pub const REFERENCE_WAVELENGTH_NM: f64 = 500.0;

/// Nepers per metre to decibels per millimetre
pub const NEPER_PER_M_TO_DB_PER_MM: f64 = 20.0 / std::f64::consts::LN_10 / 1000.0;

// Default values for configurable parameters
/// Fixed seed for reproducible sampling
pub const DEFAULT_SEED: u64 = 42;

/// Default number of phantom instances to sample
pub const DEFAULT_INSTANCES: usize = 1;

/// Default wavelengths reported by the CLI (nm)
pub const DEFAULT_WAVELENGTHS_NM: [f64; 2] = [757.0, 800.0];

// Progress bar display settings
/// Minimum instance count before a progress bar is shown
pub const MIN_INSTANCES_FOR_PROGRESS: usize = 2;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
