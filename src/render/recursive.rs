//! Recursive diamond-and-petal motifs
//!
//! Each depth has a fixed layout rather than a literal subdivision: depth `d`
//! places `4^(d-1)` motifs on the chequered cells of a diamond, with rows of
//! 1, 2, .. up to `2^(d-1)` and back down. The deepest layout is a 31 x 31
//! logical grid cut off at Manhattan distance 15. Motifs shrink with depth so
//! the whole arrangement keeps a similar footprint.

use crate::render::surface::{Stroke, Surface};
use crate::spatial::geometry::{diamond_outline, rounded_square_outline};
use crate::spatial::Point;
use image::Rgba;
use std::f64::consts::FRAC_PI_4;

/// Fixed layout for one recursion depth
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthLayout {
    /// Largest `|row| + |col|` of an occupied logical cell
    pub manhattan_radius: i32,
    /// Motif size as a fraction of the base size
    pub size_multiplier: f64,
}

/// Layouts for depths 1 through 5
pub const DEPTH_LAYOUTS: [DepthLayout; 5] = [
    DepthLayout {
        manhattan_radius: 0,
        size_multiplier: 1.0,
    },
    DepthLayout {
        manhattan_radius: 1,
        size_multiplier: 0.6,
    },
    DepthLayout {
        manhattan_radius: 3,
        size_multiplier: 0.4,
    },
    DepthLayout {
        manhattan_radius: 7,
        size_multiplier: 0.3,
    },
    DepthLayout {
        manhattan_radius: 15,
        size_multiplier: 0.25,
    },
];

/// Distance between neighbouring logical cells, relative to the motif size
const CELL_SPACING: f64 = 0.75;
/// Half-diagonal of the central diamond, relative to the motif size
const DIAMOND_EXTENT: f64 = 0.5;
/// Distance of each petal from the motif centre
const PETAL_OFFSET: f64 = 0.6;
/// Side of each petal
const PETAL_SIDE: f64 = 0.3;
/// Petal corner rounding relative to the petal side
const PETAL_ROUNDING: f64 = 0.25;
/// Segments used to flatten each rounded petal corner
const PETAL_ARC_SEGMENTS: usize = 4;

/// Layout for `depth`, clamped into 1..=5
pub fn depth_layout(depth: u8) -> DepthLayout {
    let index = usize::from(depth.clamp(1, 5)) - 1;
    DEPTH_LAYOUTS
        .get(index)
        .copied()
        .unwrap_or(DEPTH_LAYOUTS[0])
}

/// Number of motifs placed at `depth`
pub fn motif_count(depth: u8) -> usize {
    let radius = depth_layout(depth).manhattan_radius as usize + 1;
    radius * radius
}

/// One motif to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotifPlacement {
    /// Motif centre
    pub center: Point,
    /// Motif size in pixels
    pub size: f64,
}

/// Centres and sizes of every motif for `depth`, in row-major order from the top
pub fn recursive_placements(center: Point, base_size: f64, depth: u8) -> Vec<MotifPlacement> {
    let layout = depth_layout(depth);
    let size = base_size * layout.size_multiplier;
    let cell = size * CELL_SPACING;
    let radius = layout.manhattan_radius;

    let mut placements = Vec::with_capacity(motif_count(depth));
    for row in -radius..=radius {
        for col in -radius..=radius {
            // Chequered cells only: the ones an odd/even step away from the tips
            let occupied = row.abs() + col.abs() <= radius && (row + col + radius) % 2 == 0;
            if occupied {
                placements.push(MotifPlacement {
                    center: center.offset(f64::from(col) * cell, f64::from(row) * cell),
                    size,
                });
            }
        }
    }
    placements
}

/// Parameters of a recursive motif drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecursiveMotif {
    /// Centre of the arrangement
    pub center: Point,
    /// Motif size at depth 1
    pub base_size: f64,
    /// Layout depth, 1 through 5
    pub depth: u8,
    /// Outline width
    pub line_thickness: f64,
    /// Outline colour
    pub stroke: Rgba<u8>,
    /// Dot colour
    pub dot: Rgba<u8>,
}

/// Draw every motif of `motif` and return how many were placed
pub fn draw_recursive<S: Surface>(surface: &mut S, motif: &RecursiveMotif) -> usize {
    let stroke = Stroke::new(motif.stroke, motif.line_thickness);
    let placements = recursive_placements(motif.center, motif.base_size, motif.depth);
    for placement in &placements {
        draw_motif(surface, placement, stroke, motif.dot);
    }
    placements.len()
}

/// Petal centres of a motif: up, right, down, left
pub fn petal_centers(placement: &MotifPlacement) -> [Point; 4] {
    let offset = placement.size * PETAL_OFFSET;
    let c = placement.center;
    [
        c.offset(0.0, -offset),
        c.offset(offset, 0.0),
        c.offset(0.0, offset),
        c.offset(-offset, 0.0),
    ]
}

fn draw_motif<S: Surface>(surface: &mut S, placement: &MotifPlacement, stroke: Stroke, dot: Rgba<u8>) {
    let size = placement.size;
    surface.stroke_polygon(
        &diamond_outline(placement.center, size * DIAMOND_EXTENT),
        stroke,
    );

    let petal_side = size * PETAL_SIDE;
    let petals = petal_centers(placement);
    for petal in petals {
        let outline = rounded_square_outline(
            petal,
            petal_side,
            petal_side * PETAL_ROUNDING,
            FRAC_PI_4,
            PETAL_ARC_SEGMENTS,
        );
        surface.stroke_polygon(&outline, stroke);
    }

    surface.fill_circle(placement.center, (size * 0.06).max(1.5), dot);
    let petal_dot = (size * 0.04).max(1.0);
    for petal in petals {
        surface.fill_circle(petal, petal_dot, dot);
    }
}
