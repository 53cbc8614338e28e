//! Input/output operations and error handling

/// Command-line interface for batch sampling
pub mod cli;
/// Engine constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Progress display for multi-instance runs
pub mod progress;
/// Tab-separated sample reports
pub mod report;
