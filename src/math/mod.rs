//! Mathematical utilities for rendering and analysis

/// Linear interpolation and rounding helpers
pub mod interpolation;
/// Rolling string hashes used by the degraded classification path
pub mod hashing;
