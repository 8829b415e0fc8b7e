//! Explicit selection between matrix-driven and direct-draw patterns

use crate::algorithm::strategies::SymmetryStrategy;

/// Direct-draw generator that bypasses the connection matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DirectDrawMotif {
    /// Diamond/petal motifs laid out by a fixed per-depth table
    Recursive {
        /// Layout depth, 1 through 5
        depth: u8,
    },
    /// Five-square motifs flood-filled diagonally across the canvas
    Fractal {
        /// Side of each square in pixels
        motif_size: f64,
    },
}

/// How a generation produces its picture
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PatternMode {
    /// Fill the connection matrix with a strategy and draw tiles from it
    Matrix(SymmetryStrategy),
    /// Draw motifs straight onto the surface
    DirectDraw(DirectDrawMotif),
}

impl PatternMode {
    /// Select the mode for `strategy`, attaching the direct-draw parameters it needs
    pub const fn select(strategy: SymmetryStrategy, depth: u8, motif_size: f64) -> Self {
        match strategy {
            SymmetryStrategy::Recursive => Self::DirectDraw(DirectDrawMotif::Recursive { depth }),
            SymmetryStrategy::Fractal => Self::DirectDraw(DirectDrawMotif::Fractal { motif_size }),
            other => Self::Matrix(other),
        }
    }

    /// Strategy applied to the connection matrix for this mode
    ///
    /// Direct-draw modes map to their clearing strategy so the cached matrix never
    /// holds a stale tile pattern.
    pub const fn strategy(&self) -> SymmetryStrategy {
        match self {
            Self::Matrix(strategy) => *strategy,
            Self::DirectDraw(DirectDrawMotif::Recursive { .. }) => SymmetryStrategy::Recursive,
            Self::DirectDraw(DirectDrawMotif::Fractal { .. }) => SymmetryStrategy::Fractal,
        }
    }

    /// Whether the tile renderer is responsible for this mode
    pub const fn uses_matrix(&self) -> bool {
        matches!(self, Self::Matrix(_))
    }
}
