//! Procedural Kolam pattern generation and image symmetry classification
//!
//! Patterns are produced either from a connection matrix filled by a symmetry
//! strategy and drawn as a lattice of rounded tiles, or by drawing recursive
//! and fractal motifs directly. A pixel-comparison classifier scores how
//! symmetric an image is and names its dominant symmetry.

#![forbid(unsafe_code)]

/// Symmetry strategies, generation parameters and the frame-driven session
pub mod algorithm;
/// Image symmetry classification with remote, local and hash-based stages
pub mod analysis;
/// Input/output operations, configuration, logging and error handling
pub mod io;
/// Interpolation and hashing utilities
pub mod math;
/// Surfaces, rasterisation and pattern renderers
pub mod render;
/// Connection grids and planar geometry
pub mod spatial;

pub use io::error::{KolamError, Result};
