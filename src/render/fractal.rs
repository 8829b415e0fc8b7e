//! Self-similar square motifs flood-filled across the canvas
//!
//! Every motif is a central square with four squares of the same size on its
//! corners. From each placed motif the pattern branches diagonally by twice the
//! motif size. The visited set plus the canvas bounds make the walk finite for
//! any positive motif size.

use crate::io::configuration::FRACTAL_CANVAS_MARGIN;
use crate::render::surface::{Stroke, Surface};
use crate::spatial::{CornerRadii, Point, Rect};
use image::Rgba;
use std::collections::HashSet;

/// Diagonal branch directions in visiting order
const BRANCHES: [(i64, i64); 4] = [(-1, -1), (1, -1), (1, 1), (-1, 1)];

/// Centres of every motif that fits in a `canvas_size` square centred on `center`
///
/// Positions are keyed by their integer lattice offset from `center`, so a
/// position reached along two different paths is placed once. A motif is kept
/// only if its `2 * motif_size` bounding box stays inside the canvas shrunk by
/// the fixed margin. The walk uses an explicit stack, so canvas size does not
/// limit recursion depth. A non-positive or non-finite motif size places nothing.
pub fn fractal_placements(center: Point, canvas_size: f64, motif_size: f64) -> Vec<Point> {
    if !(motif_size > 0.0 && motif_size.is_finite()) {
        return Vec::new();
    }

    let bounds = Rect::centered_square(center, canvas_size).inset(FRACTAL_CANVAS_MARGIN);
    let step = motif_size * 2.0;
    let mut visited: HashSet<(i64, i64)> = HashSet::new();
    let mut placements = Vec::new();
    let mut pending = vec![(0i64, 0i64)];

    while let Some(key) = pending.pop() {
        if !visited.insert(key) {
            continue;
        }

        let position = center.offset(key.0 as f64 * step, key.1 as f64 * step);
        let footprint = Rect::centered_square(position, motif_size * 2.0);
        if !bounds.contains_rect(&footprint) {
            continue;
        }

        placements.push(position);

        // Reverse push so the first branch is explored first
        for (dx, dy) in BRANCHES.iter().rev() {
            let neighbour = (key.0 + dx, key.1 + dy);
            if !visited.contains(&neighbour) {
                pending.push(neighbour);
            }
        }
    }

    placements
}

/// Parameters of a fractal motif drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalMotif {
    /// Starting motif centre, also the canvas centre
    pub center: Point,
    /// Side of the square canvas
    pub canvas_size: f64,
    /// Outline width
    pub line_thickness: f64,
    /// Outline colour
    pub stroke: Rgba<u8>,
    /// Dot colour
    pub dot: Rgba<u8>,
    /// Side of each square
    pub motif_size: f64,
}

/// Draw every motif of `motif` and return how many were placed
pub fn draw_fractal<S: Surface>(surface: &mut S, motif: &FractalMotif) -> usize {
    let placements = fractal_placements(motif.center, motif.canvas_size, motif.motif_size);
    let stroke = Stroke::new(motif.stroke, motif.line_thickness);
    let size = motif.motif_size;
    let dot_radius = (size * 0.125).max(2.0);

    for &center in &placements {
        let squares = square_centers(center, size);
        for square in squares {
            surface.stroke_rounded_rect(
                Rect::centered_square(square, size),
                CornerRadii::default(),
                stroke,
            );
        }
        for square in squares {
            surface.fill_circle(square, dot_radius, motif.dot);
        }
    }
    placements.len()
}

/// The central square followed by the four corner squares
pub fn square_centers(center: Point, size: f64) -> [Point; 5] {
    [
        center,
        center.offset(-size, -size),
        center.offset(size, -size),
        center.offset(size, size),
        center.offset(-size, size),
    ]
}
