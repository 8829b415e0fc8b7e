//! User-facing generation parameters and their validation

use crate::algorithm::mode::PatternMode;
use crate::algorithm::strategies::SymmetryStrategy;
use crate::io::configuration::{
    DEFAULT_CANVAS_SIZE, DEFAULT_DEPTH, DEFAULT_GRID_SIZE, DEFAULT_LINE_THICKNESS,
    DEFAULT_MOTIF_SIZE, DEFAULT_TILE_SPACING, LATTICE_MARGIN, MAX_CANVAS_SIDE, MAX_DEPTH,
    MAX_GRID_SIZE, MIN_DEPTH, MIN_GRID_SIZE,
};
use crate::io::error::{Result, invalid_parameter};
use crate::render::tiles::TileLayout;

/// Everything a caller can tune about one generation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParameters {
    /// Tiles along one side of the lattice
    pub grid_size: usize,
    /// Distance between adjacent grid points in pixels
    pub tile_spacing: f64,
    /// Rule used to fill the connection matrix
    pub strategy: SymmetryStrategy,
    /// Stroke width in pixels
    pub line_thickness: f64,
    /// Recursive motif depth
    pub depth: u8,
    /// Fractal motif size in pixels
    pub motif_size: f64,
    /// Side of the square canvas in pixels
    pub canvas_size: u32,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            tile_spacing: DEFAULT_TILE_SPACING,
            strategy: SymmetryStrategy::EightWay,
            line_thickness: DEFAULT_LINE_THICKNESS,
            depth: DEFAULT_DEPTH,
            motif_size: DEFAULT_MOTIF_SIZE,
            canvas_size: DEFAULT_CANVAS_SIZE,
        }
    }
}

impl GenerationParameters {
    /// Check every parameter against its supported range
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if:
    /// - The grid size is outside 5..=9
    /// - The depth is outside 1..=5
    /// - Spacing, thickness or motif size is not a positive finite number
    /// - The canvas is too small to hold the tile lattice or larger than
    ///   `MAX_CANVAS_SIDE`
    pub fn validate(&self) -> Result<()> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(invalid_parameter(
                "grid_size",
                &self.grid_size,
                &format!("must be between {MIN_GRID_SIZE} and {MAX_GRID_SIZE}"),
            ));
        }
        if !(MIN_DEPTH..=MAX_DEPTH).contains(&self.depth) {
            return Err(invalid_parameter(
                "depth",
                &self.depth,
                &format!("must be between {MIN_DEPTH} and {MAX_DEPTH}"),
            ));
        }
        for (name, value) in [
            ("tile_spacing", self.tile_spacing),
            ("line_thickness", self.line_thickness),
            ("motif_size", self.motif_size),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid_parameter(name, &value, &"must be a positive number"));
            }
        }

        if self.canvas_size > MAX_CANVAS_SIDE {
            return Err(invalid_parameter(
                "canvas_size",
                &self.canvas_size,
                &format!("must be at most {MAX_CANVAS_SIDE}"),
            ));
        }
        let extent = self.lattice_extent();
        if f64::from(self.canvas_size) < extent {
            return Err(invalid_parameter(
                "canvas_size",
                &self.canvas_size,
                &format!("lattice needs at least {extent} pixels"),
            ));
        }
        Ok(())
    }

    /// Side of the tile lattice including margins, at scale 1
    pub fn lattice_extent(&self) -> f64 {
        TileLayout::extent_for(self.grid_size, self.tile_spacing, LATTICE_MARGIN)
    }

    /// Mode selected by the current strategy
    pub const fn pattern_mode(&self) -> PatternMode {
        PatternMode::select(self.strategy, self.depth, self.motif_size)
    }
}
