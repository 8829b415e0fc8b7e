//! Input/output: command line, configuration, errors, export and logging

/// Command-line parsing and command execution
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Crate-wide error type
pub mod error;
/// PNG export and image loading
pub mod image;
/// Subscriber setup for structured logs
pub mod logging;
/// Terminal progress bars
pub mod progress;
/// Transition capture and GIF export
pub mod visualization;
