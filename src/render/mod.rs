//! Drawing of tile lattices and direct-draw motifs onto surfaces

/// Five-square motifs branching diagonally across the canvas
pub mod fractal;
/// Explicit colour sets
pub mod palette;
/// Pixel rasteriser over an RGBA image
pub mod raster;
/// Fixed-layout diamond and petal motifs
pub mod recursive;
/// Surface trait and the recording surface
pub mod surface;
/// Interpolated tile lattice
pub mod tiles;

pub use palette::{Palette, Theme};
pub use raster::RasterSurface;
pub use surface::{RecordingSurface, Stroke, Surface};
