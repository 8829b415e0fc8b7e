//! Tile lattice renderer
//!
//! Only tiles with `(i + j)` even are drawn, giving the chequered Kolam lattice.
//! Each tile takes its four corner radii from the four lattice points around
//! it, interpolated between the previous and next connection grids.

use crate::math::interpolation::{clamp_unit, lerp};
use crate::render::surface::{Stroke, Surface};
use crate::spatial::{ConnectionGrid, CornerRadii, Point, Rect, SymmetryMatrix};
use image::Rgba;

/// Placement of the tile lattice on a surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileLayout {
    /// Side of one tile in pixels
    pub tile_size: f64,
    /// Margin between the lattice origin and the first tile
    pub margin: f64,
    /// Top-left corner of the lattice (before the margin)
    pub origin: Point,
}

impl TileLayout {
    /// Layout anchored at the surface origin
    pub const fn new(tile_size: f64, margin: f64) -> Self {
        Self {
            tile_size,
            margin,
            origin: Point::new(0.0, 0.0),
        }
    }

    /// Layout whose `grid_size` x `grid_size` lattice is centred on `canvas`
    pub fn centered(canvas: Point, grid_size: usize, tile_size: f64, margin: f64) -> Self {
        let extent = Self::extent_for(grid_size, tile_size, margin);
        Self {
            tile_size,
            margin,
            origin: Point::new(canvas.x - extent / 2.0, canvas.y - extent / 2.0),
        }
    }

    /// Side length of the lattice including both margins
    pub fn extent_for(grid_size: usize, tile_size: f64, margin: f64) -> f64 {
        tile_size * grid_size as f64 + 2.0 * margin
    }

    /// Bounds of tile `(i, j)`; `i` runs along x and `j` along y
    pub fn tile_rect(&self, i: usize, j: usize) -> Rect {
        Rect::new(
            self.origin.x + i as f64 * self.tile_size + self.margin,
            self.origin.y + j as f64 * self.tile_size + self.margin,
            self.tile_size,
            self.tile_size,
        )
    }

    /// Radius of the dot marking each tile centre
    pub fn dot_radius(&self) -> f64 {
        (self.tile_size * 0.05).max(1.0)
    }
}

/// Geometry of one drawn tile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileShape {
    /// Column index along x
    pub i: usize,
    /// Row index along y
    pub j: usize,
    /// Tile bounds
    pub rect: Rect,
    /// Interpolated corner radii
    pub radii: CornerRadii,
    /// Centre dot position
    pub dot_center: Point,
    /// Centre dot radius
    pub dot_radius: f64,
}

/// Corner connection values of tile `(i, j)`, clockwise from top-left
fn corner_values(grid: &ConnectionGrid, i: usize, j: usize) -> [f64; 4] {
    [
        f64::from(grid.get(i, j)),
        f64::from(grid.get(i + 1, j)),
        f64::from(grid.get(i + 1, j + 1)),
        f64::from(grid.get(i, j + 1)),
    ]
}

/// Geometry of every drawn tile at interpolation factor `t`
///
/// `t = 0` reproduces `previous` and `t = 1` reproduces `next`; factors outside
/// `[0, 1]` are clamped. The result depends on nothing but the arguments.
///
/// # Panics
///
/// Panics if the grids differ in shape.
pub fn tile_shapes(
    previous: &ConnectionGrid,
    next: &ConnectionGrid,
    layout: &TileLayout,
    t: f64,
) -> Vec<TileShape> {
    assert_eq!(
        previous.side(),
        next.side(),
        "previous and next grids must share a shape"
    );
    let t = clamp_unit(t);
    let half = layout.tile_size / 2.0;

    lattice_shapes(next.side(), layout, |i, j| {
        let from = corner_values(previous, i, j);
        let to = corner_values(next, i, j);
        CornerRadii {
            top_left: half * lerp(from[0], to[0], t),
            top_right: half * lerp(from[1], to[1], t),
            bottom_right: half * lerp(from[2], to[2], t),
            bottom_left: half * lerp(from[3], to[3], t),
        }
    })
}

/// Geometry of the settled pattern, read from `next` alone
pub fn settled_tile_shapes(next: &ConnectionGrid, layout: &TileLayout) -> Vec<TileShape> {
    let half = layout.tile_size / 2.0;
    lattice_shapes(next.side(), layout, |i, j| {
        let [tl, tr, br, bl] = corner_values(next, i, j);
        CornerRadii {
            top_left: half * tl,
            top_right: half * tr,
            bottom_right: half * br,
            bottom_left: half * bl,
        }
    })
}

fn lattice_shapes<F>(side: usize, layout: &TileLayout, radii_for: F) -> Vec<TileShape>
where
    F: Fn(usize, usize) -> CornerRadii,
{
    let grid_size = side.saturating_sub(1);
    let dot_radius = layout.dot_radius();
    let mut shapes = Vec::with_capacity(grid_size * grid_size / 2 + 1);

    for i in 0..grid_size {
        for j in 0..grid_size {
            if (i + j) % 2 != 0 {
                continue;
            }
            let rect = layout.tile_rect(i, j);
            shapes.push(TileShape {
                i,
                j,
                rect,
                radii: radii_for(i, j),
                dot_center: rect.center(),
                dot_radius,
            });
        }
    }
    shapes
}

/// Draws the tile lattice for a symmetry matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileRenderer {
    /// Lattice placement
    pub layout: TileLayout,
    /// Outline width
    pub line_thickness: f64,
    /// Outline colour
    pub stroke: Rgba<u8>,
    /// Centre dot colour
    pub dot: Rgba<u8>,
}

impl TileRenderer {
    /// Draw the transition from `matrix.previous` to `matrix.next` at factor `t`
    pub fn render<S: Surface>(&self, matrix: &SymmetryMatrix, t: f64, surface: &mut S) {
        let shapes = tile_shapes(&matrix.previous, &matrix.next, &self.layout, t);
        self.draw(&shapes, surface);
    }

    /// Draw the settled pattern of `next` in a single pass
    pub fn render_settled<S: Surface>(&self, next: &ConnectionGrid, surface: &mut S) {
        let shapes = settled_tile_shapes(next, &self.layout);
        self.draw(&shapes, surface);
    }

    fn draw<S: Surface>(&self, shapes: &[TileShape], surface: &mut S) {
        let stroke = Stroke::new(self.stroke, self.line_thickness);
        for shape in shapes {
            surface.stroke_rounded_rect(shape.rect, shape.radii, stroke);
            surface.fill_circle(shape.dot_center, shape.dot_radius, self.dot);
        }
    }
}
