//! Symmetry strategies that populate a connection grid
//!
//! Every strategy draws one random decision per independent cell and writes it
//! to all cells in that cell's symmetry orbit, so the resulting grid is exactly
//! symmetric by construction. A decision connects the cell when a uniform draw
//! exceeds the per-generation `limit`.
//!
//! Grid axis 0 (`i`) is the horizontal render axis and axis 1 (`j`) the
//! vertical one. "Horizontal mirror" therefore mirrors `j` (top/bottom) and
//! "vertical mirror" mirrors `i` (left/right), matching how the classifier
//! names the same symmetries in rendered images.

use crate::spatial::ConnectionGrid;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Fixed sequence modulating the fibonacci strategy
pub const FIBONACCI_SEQUENCE: [u32; 8] = [1, 1, 2, 3, 5, 8, 13, 21];

/// Rule used to fill the connection grid for one generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymmetryStrategy {
    /// Dihedral symmetry of order 8 (four mirrors plus quarter turns)
    EightWay,
    /// Mirror symmetry across both midlines
    FourWay,
    /// Left/right mirror across the vertical midline
    Vertical,
    /// Top/bottom mirror across the horizontal midline
    Horizontal,
    /// Mirror symmetry across both diagonals
    Diagonal,
    /// Gated spiral modulation by the fibonacci sequence (not reflective)
    Fibonacci,
    /// Clears the grid; paired with the recursive motif drawer
    Recursive,
    /// Clears the grid; paired with the fractal motif drawer
    Fractal,
}

impl SymmetryStrategy {
    /// Every strategy in selector order
    pub const ALL: [Self; 8] = [
        Self::EightWay,
        Self::FourWay,
        Self::Vertical,
        Self::Horizontal,
        Self::Diagonal,
        Self::Recursive,
        Self::Fractal,
        Self::Fibonacci,
    ];

    /// Short selector key (`8way`, `4way`, `vertical`, ...)
    pub const fn key(self) -> &'static str {
        match self {
            Self::EightWay => "8way",
            Self::FourWay => "4way",
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
            Self::Diagonal => "diagonal",
            Self::Fibonacci => "fibonacci",
            Self::Recursive => "recursive",
            Self::Fractal => "fractal",
        }
    }

    /// Human readable name
    pub const fn label(self) -> &'static str {
        match self {
            Self::EightWay => "8-Way Rotational",
            Self::FourWay => "4-Way Mirror",
            Self::Vertical => "Vertical Mirror",
            Self::Horizontal => "Horizontal Mirror",
            Self::Diagonal => "Diagonal",
            Self::Fibonacci => "Fibonacci",
            Self::Recursive => "Recursive",
            Self::Fractal => "Fractal",
        }
    }

    /// Whether the pattern for this strategy is drawn directly rather than from the grid
    pub const fn is_direct_draw(self) -> bool {
        matches!(self, Self::Recursive | Self::Fractal)
    }

    /// Fill `grid` according to this strategy
    pub fn apply<R: Rng>(self, grid: &mut ConnectionGrid, limit: f64, rng: &mut R) {
        match self {
            Self::EightWay => apply_eight_way(grid, limit, rng),
            Self::FourWay => apply_four_way(grid, limit, rng),
            Self::Vertical => apply_vertical(grid, limit, rng),
            Self::Horizontal => apply_horizontal(grid, limit, rng),
            Self::Diagonal => apply_diagonal(grid, limit, rng),
            Self::Fibonacci => apply_fibonacci(grid, limit, rng),
            Self::Recursive | Self::Fractal => grid.clear(),
        }
    }
}

impl fmt::Display for SymmetryStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SymmetryStrategy {
    type Err = crate::io::error::KolamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_', ' '], "");
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.key() == normalized)
            .ok_or_else(|| {
                crate::io::error::invalid_parameter(
                    "strategy",
                    &s,
                    &"expected one of 8way, 4way, vertical, horizontal, diagonal, recursive, fractal, fibonacci",
                )
            })
    }
}

fn connects<R: Rng>(rng: &mut R, limit: f64) -> bool {
    rng.random::<f64>() > limit
}

/// Dihedral order-8 symmetry
///
/// Walks the fundamental octant `i <= j < side / 2`; each draw is written to all
/// eight images of `(i, j)`. Cells on the octant boundary receive the same value
/// more than once, which is harmless.
pub fn apply_eight_way<R: Rng>(grid: &mut ConnectionGrid, limit: f64, rng: &mut R) {
    let side = grid.side();
    let last = side.saturating_sub(1);

    for i in 0..side {
        let mut j = i;
        while 2 * j < side {
            let connected = connects(rng, limit);
            for (a, b) in [
                (i, j),
                (i, last - j),
                (j, i),
                (last - j, i),
                (last - i, j),
                (last - i, last - j),
                (j, last - i),
                (last - j, last - i),
            ] {
                grid.set_flag(a, b, connected);
            }
            j += 1;
        }
    }
}

/// Mirror symmetry across both midlines
pub fn apply_four_way<R: Rng>(grid: &mut ConnectionGrid, limit: f64, rng: &mut R) {
    let side = grid.side();
    let last = side.saturating_sub(1);

    for i in 0..side {
        let mut j = 0;
        while 2 * j < side {
            let connected = connects(rng, limit);
            grid.set_flag(i, j, connected);
            grid.set_flag(i, last - j, connected);
            grid.set_flag(last - i, j, connected);
            grid.set_flag(last - i, last - j, connected);
            j += 1;
        }
    }
}

/// Top/bottom mirror: `(i, j)` pairs with `(i, side - 1 - j)`
///
/// On an odd side the centre line has no partner and every cell on it gets its
/// own draw.
pub fn apply_horizontal<R: Rng>(grid: &mut ConnectionGrid, limit: f64, rng: &mut R) {
    let side = grid.side();
    let last = side.saturating_sub(1);

    for j in 0..side / 2 {
        for i in 0..side {
            let connected = connects(rng, limit);
            grid.set_flag(i, j, connected);
            grid.set_flag(i, last - j, connected);
        }
    }

    if side % 2 == 1 {
        let centre = side / 2;
        for i in 0..side {
            let connected = connects(rng, limit);
            grid.set_flag(i, centre, connected);
        }
    }
}

/// Left/right mirror: `(i, j)` pairs with `(side - 1 - i, j)`
///
/// On an odd side the centre line is drawn independently.
pub fn apply_vertical<R: Rng>(grid: &mut ConnectionGrid, limit: f64, rng: &mut R) {
    let side = grid.side();
    let last = side.saturating_sub(1);

    for i in 0..side / 2 {
        for j in 0..side {
            let connected = connects(rng, limit);
            grid.set_flag(i, j, connected);
            grid.set_flag(last - i, j, connected);
        }
    }

    if side % 2 == 1 {
        let centre = side / 2;
        for j in 0..side {
            let connected = connects(rng, limit);
            grid.set_flag(centre, j, connected);
        }
    }
}

/// Mirror symmetry across the main and anti diagonals
///
/// Cells with `i <= j` draw a value for their whole four-cell orbit. A later
/// cell in the same orbit redraws and rewrites all four, so the orbit always
/// agrees.
pub fn apply_diagonal<R: Rng>(grid: &mut ConnectionGrid, limit: f64, rng: &mut R) {
    let side = grid.side();
    let last = side.saturating_sub(1);

    for i in 0..side {
        for j in i..side {
            let connected = connects(rng, limit);
            grid.set_flag(i, j, connected);
            grid.set_flag(j, i, connected);
            grid.set_flag(last - i, last - j, connected);
            grid.set_flag(last - j, last - i, connected);
        }
    }
}

/// Gated fibonacci spiral modulation
///
/// A cell passing the random gate is connected when
/// `floor(radius + angle) mod fib == 0`, where `fib` is picked by `(i + j) mod 8`,
/// the angle is `fib * 2π / 8` and the radius is the cell's distance from the
/// grid origin. Cells failing the gate are cleared.
pub fn apply_fibonacci<R: Rng>(grid: &mut ConnectionGrid, limit: f64, rng: &mut R) {
    let side = grid.side();

    for i in 0..side {
        for j in 0..side {
            let connected = connects(rng, limit) && fibonacci_condition(i, j);
            grid.set_flag(i, j, connected);
        }
    }
}

/// Deterministic part of the fibonacci strategy for cell `(i, j)`
pub fn fibonacci_condition(i: usize, j: usize) -> bool {
    let fib = FIBONACCI_SEQUENCE
        .get((i + j) % FIBONACCI_SEQUENCE.len())
        .copied()
        .unwrap_or(1);
    let angle = f64::from(fib) * std::f64::consts::TAU / 8.0;
    let radius = ((i * i + j * j) as f64).sqrt();
    ((radius + angle).floor() as u64) % u64::from(fib) == 0
}
