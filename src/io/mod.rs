//! Input/output plumbing around the synthesis core

/// Command-line parsing and batch processing
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Image loading and export
pub mod image;
/// Terminal progress display
pub mod progress;
