//! Spatial data structures for the tile lattice
//!
//! This module contains:
//! - Connection grids and the previous/next symmetry matrix
//! - Planar primitives (points, rectangles, corner radii, outlines)

/// Points, rectangles and outline construction
pub mod geometry;
/// Connection grids and the symmetry matrix
pub mod matrix;

pub use geometry::{CornerRadii, Point, Rect};
pub use matrix::{ConnectionGrid, SymmetryMatrix};
