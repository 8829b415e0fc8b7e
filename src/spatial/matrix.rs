//! Connection matrices driving the tile lattice
//!
//! A connection grid stores one 0/1 flag per lattice point; a flag of 1 rounds
//! every tile corner that touches that point. The symmetry matrix pairs the
//! last settled grid with the freshly generated target so renderers can
//! interpolate between them.

use ndarray::Array2;

/// Square grid of connection flags, every cell exactly 0 or 1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionGrid {
    cells: Array2<u8>,
}

impl ConnectionGrid {
    /// Create a `side` x `side` grid with every cell set to `value` (non-zero becomes 1)
    pub fn filled(side: usize, value: u8) -> Self {
        Self {
            cells: Array2::from_elem((side, side), u8::from(value != 0)),
        }
    }

    /// Build a grid from nested rows
    ///
    /// # Panics
    ///
    /// Panics if the rows are ragged or not square; a malformed matrix is a
    /// programming error rather than a recoverable condition.
    pub fn from_rows(rows: &[Vec<u8>]) -> Self {
        let side = rows.len();
        assert!(
            rows.iter().all(|row| row.len() == side),
            "connection grid rows must form a square"
        );
        let mut grid = Self::filled(side, 0);
        for (i, row) in rows.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                grid.set(i, j, value);
            }
        }
        grid
    }

    /// Number of lattice points along one side (`n + 1` for an `n` tile grid)
    pub fn side(&self) -> usize {
        self.cells.nrows()
    }

    /// Connection flag at `(i, j)`, or 0 outside the grid
    pub fn get(&self, i: usize, j: usize) -> u8 {
        self.cells.get((i, j)).copied().unwrap_or(0)
    }

    /// Store `value` at `(i, j)`, normalised to 0 or 1; writes outside the grid are ignored
    pub fn set(&mut self, i: usize, j: usize, value: u8) {
        if let Some(cell) = self.cells.get_mut((i, j)) {
            *cell = u8::from(value != 0);
        }
    }

    /// Store a boolean connection at `(i, j)`
    pub fn set_flag(&mut self, i: usize, j: usize, connected: bool) {
        self.set(i, j, u8::from(connected));
    }

    /// Reset every cell to 0
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Whether every cell holds exactly 0 or 1
    pub fn is_binary(&self) -> bool {
        self.cells.iter().all(|&cell| cell <= 1)
    }

    /// Number of connected (value 1) cells
    pub fn count_connected(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == 1).count()
    }

    /// Copy the rows out as nested vectors
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells.rows().into_iter().map(|row| row.to_vec()).collect()
    }

    /// Borrow the underlying array
    pub const fn cells(&self) -> &Array2<u8> {
        &self.cells
    }
}

/// Previous/next pair of connection grids for one generation cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymmetryMatrix {
    /// Last fully settled state
    pub previous: ConnectionGrid,
    /// Freshly generated target state
    pub next: ConnectionGrid,
}

impl SymmetryMatrix {
    /// Matrix for an `n` x `n` tile lattice with every corner rounded in both states
    pub fn new(grid_size: usize) -> Self {
        let side = grid_size + 1;
        Self {
            previous: ConnectionGrid::filled(side, 1),
            next: ConnectionGrid::filled(side, 1),
        }
    }

    /// Pair two grids of identical shape
    ///
    /// # Panics
    ///
    /// Panics if the grids differ in size.
    pub fn from_grids(previous: ConnectionGrid, next: ConnectionGrid) -> Self {
        assert_eq!(
            previous.side(),
            next.side(),
            "previous and next grids must share a shape"
        );
        Self { previous, next }
    }

    /// Tile count `n` along one side
    pub fn grid_size(&self) -> usize {
        self.next.side().saturating_sub(1)
    }

    /// Settle the current target: `previous` becomes a copy of `next`
    ///
    /// Called before a strategy overwrites `next` so the transition starts from
    /// whatever was last on screen.
    pub fn advance(&mut self) {
        self.previous.clone_from(&self.next);
    }
}
