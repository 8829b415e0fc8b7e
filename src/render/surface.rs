//! Drawing surface abstraction used by all pattern renderers
//!
//! Renderers only ever issue four primitives, so anything that can clear,
//! stroke a rounded rectangle, stroke a closed polygon and fill a circle can
//! host a Kolam: the pixel rasteriser in [`crate::render::raster`] or the
//! [`RecordingSurface`] below, which keeps the draw calls for inspection.

use crate::spatial::{CornerRadii, Point, Rect};
use image::Rgba;

/// Outline style for stroked primitives
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Line colour
    pub color: Rgba<u8>,
    /// Line width in pixels
    pub width: f64,
}

impl Stroke {
    /// Construct a stroke style
    pub const fn new(color: Rgba<u8>, width: f64) -> Self {
        Self { color, width }
    }
}

/// Target of all pattern drawing
pub trait Surface {
    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;

    /// Fill the whole surface with `color`
    fn clear(&mut self, color: Rgba<u8>);

    /// Stroke the outline of `rect` with independently rounded corners
    ///
    /// Radii of 0 give square corners; radii of half the side give a circle.
    fn stroke_rounded_rect(&mut self, rect: Rect, radii: CornerRadii, stroke: Stroke);

    /// Stroke the closed outline through `points`
    fn stroke_polygon(&mut self, points: &[Point], stroke: Stroke);

    /// Fill a disc
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba<u8>);

    /// Centre of the surface
    fn center(&self) -> Point {
        Point::new(
            f64::from(self.width()) / 2.0,
            f64::from(self.height()) / 2.0,
        )
    }
}

/// Single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Surface cleared
    Clear(Rgba<u8>),
    /// Rounded rectangle stroked
    RoundedRect {
        /// Rectangle bounds
        rect: Rect,
        /// Corner radii
        radii: CornerRadii,
        /// Stroke style
        stroke: Stroke,
    },
    /// Closed polygon stroked
    Polygon {
        /// Outline vertices
        points: Vec<Point>,
        /// Stroke style
        stroke: Stroke,
    },
    /// Disc filled
    Circle {
        /// Disc centre
        center: Point,
        /// Disc radius
        radius: f64,
        /// Fill colour
        color: Rgba<u8>,
    },
}

/// Surface that records draw calls instead of producing pixels
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    /// Empty recording for a surface of the given size
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    /// All recorded calls in order
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Number of filled discs
    pub fn circle_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Circle { .. }))
            .count()
    }

    /// Recorded rounded rectangles in order
    pub fn rounded_rects(&self) -> Vec<(Rect, CornerRadii)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::RoundedRect { rect, radii, .. } => Some((*rect, *radii)),
                _ => None,
            })
            .collect()
    }

    /// Forget everything recorded so far
    pub fn reset(&mut self) {
        self.ops.clear();
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self, color: Rgba<u8>) {
        self.ops.push(DrawOp::Clear(color));
    }

    fn stroke_rounded_rect(&mut self, rect: Rect, radii: CornerRadii, stroke: Stroke) {
        self.ops.push(DrawOp::RoundedRect {
            rect,
            radii,
            stroke,
        });
    }

    fn stroke_polygon(&mut self, points: &[Point], stroke: Stroke) {
        self.ops.push(DrawOp::Polygon {
            points: points.to_vec(),
            stroke,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba<u8>) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
        });
    }
}
