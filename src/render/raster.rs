//! Pixel rasteriser backed by an RGBA image buffer
//!
//! Coverage is decided per pixel centre from an exact distance to the shape,
//! without anti-aliasing. Distances to axis-aligned edges and circular arcs are
//! computed analytically, so geometry that is mirror symmetric rasterises to
//! pixels that are mirror symmetric as well.

use crate::render::surface::{Stroke, Surface};
use crate::spatial::{CornerRadii, Point, Rect};
use image::{Rgba, RgbaImage};

/// Surface that draws into an owned [`RgbaImage`]
#[derive(Debug, Clone)]
pub struct RasterSurface {
    image: RgbaImage,
}

impl RasterSurface {
    /// Transparent surface of the given size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    /// Surface pre-filled with `background`
    pub fn with_background(width: u32, height: u32, background: Rgba<u8>) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, background),
        }
    }

    /// Borrow the pixels
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Take the pixels
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Paint every pixel whose centre lies within the clipped `bounds` and satisfies `covered`
    fn paint_where<F>(&mut self, bounds: [f64; 4], color: Rgba<u8>, covered: F)
    where
        F: Fn(Point) -> bool,
    {
        let [min_x, min_y, max_x, max_y] = bounds;
        let width = self.image.width();
        let height = self.image.height();
        if width == 0 || height == 0 || !(min_x <= max_x && min_y <= max_y) {
            return;
        }

        let x_start = min_x.floor().max(0.0) as u32;
        let y_start = min_y.floor().max(0.0) as u32;
        let x_end = (max_x.ceil().max(0.0) as u32).min(width);
        let y_end = (max_y.ceil().max(0.0) as u32).min(height);

        for py in y_start..y_end {
            for px in x_start..x_end {
                let sample = Point::new(f64::from(px) + 0.5, f64::from(py) + 0.5);
                if covered(sample) {
                    let pixel = self.image.get_pixel_mut(px, py);
                    blend_over(pixel, color);
                }
            }
        }
    }
}

impl Surface for RasterSurface {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn clear(&mut self, color: Rgba<u8>) {
        for pixel in self.image.pixels_mut() {
            *pixel = color;
        }
    }

    fn stroke_rounded_rect(&mut self, rect: Rect, radii: CornerRadii, stroke: Stroke) {
        let half_width = half_stroke(stroke.width);
        let radii = clamp_radii(&rect, radii);
        let bounds = [
            rect.x - half_width,
            rect.y - half_width,
            rect.right() + half_width,
            rect.bottom() + half_width,
        ];
        self.paint_where(bounds, stroke.color, |p| {
            rounded_rect_distance(p, &rect, &radii) <= half_width
        });
    }

    fn stroke_polygon(&mut self, points: &[Point], stroke: Stroke) {
        if points.is_empty() {
            return;
        }
        let half_width = half_stroke(stroke.width);
        let mut bounds = [f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY];
        for point in points {
            bounds[0] = bounds[0].min(point.x - half_width);
            bounds[1] = bounds[1].min(point.y - half_width);
            bounds[2] = bounds[2].max(point.x + half_width);
            bounds[3] = bounds[3].max(point.y + half_width);
        }
        self.paint_where(bounds, stroke.color, |p| {
            polygon_distance(p, points) <= half_width
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba<u8>) {
        if radius <= 0.0 {
            return;
        }
        let bounds = [
            center.x - radius,
            center.y - radius,
            center.x + radius,
            center.y + radius,
        ];
        let radius_sq = radius * radius;
        self.paint_where(bounds, color, |p| {
            let dx = p.x - center.x;
            let dy = p.y - center.y;
            dx * dx + dy * dy <= radius_sq
        });
    }
}

/// Source-over blend in unpremultiplied space with integer rounding
///
/// Opaque sources replace the destination exactly.
pub fn blend_over(dst: &mut Rgba<u8>, src: Rgba<u8>) {
    let [sr, sg, sb, sa] = src.0;
    let alpha = u32::from(sa);
    if alpha == 0 {
        return;
    }
    let inverse = 255 - alpha;
    let mix = |s: u8, d: u8| ((u32::from(s) * alpha + u32::from(d) * inverse + 127) / 255) as u8;

    let [dr, dg, db, da] = dst.0;
    dst.0 = [
        mix(sr, dr),
        mix(sg, dg),
        mix(sb, db),
        (alpha + (u32::from(da) * inverse + 127) / 255).min(255) as u8,
    ];
}

// Thin strokes still cover the pixel they pass through
fn half_stroke(width: f64) -> f64 {
    (width / 2.0).max(0.5)
}

fn clamp_radii(rect: &Rect, radii: CornerRadii) -> CornerRadii {
    let limit = (rect.width.min(rect.height) / 2.0).max(0.0);
    CornerRadii {
        top_left: radii.top_left.clamp(0.0, limit),
        top_right: radii.top_right.clamp(0.0, limit),
        bottom_right: radii.bottom_right.clamp(0.0, limit),
        bottom_left: radii.bottom_left.clamp(0.0, limit),
    }
}

fn length(dx: f64, dy: f64) -> f64 {
    (dx * dx + dy * dy).sqrt()
}

/// Distance from `p` to the horizontal segment `y = y`, `x` between `x_a` and `x_b`
fn horizontal_segment_distance(p: Point, x_a: f64, x_b: f64, y: f64) -> f64 {
    let (lo, hi) = if x_a <= x_b { (x_a, x_b) } else { (x_b, x_a) };
    if p.x < lo {
        length(lo - p.x, p.y - y)
    } else if p.x > hi {
        length(p.x - hi, p.y - y)
    } else {
        (p.y - y).abs()
    }
}

/// Distance from `p` to the vertical segment `x = x`, `y` between `y_a` and `y_b`
fn vertical_segment_distance(p: Point, x: f64, y_a: f64, y_b: f64) -> f64 {
    let (lo, hi) = if y_a <= y_b { (y_a, y_b) } else { (y_b, y_a) };
    if p.y < lo {
        length(p.x - x, lo - p.y)
    } else if p.y > hi {
        length(p.x - x, p.y - hi)
    } else {
        (p.x - x).abs()
    }
}

/// Distance to a quarter arc, or infinity when `p` is outside the arc's quadrant
fn corner_arc_distance(p: Point, center: Point, radius: f64, inside_quadrant: bool) -> f64 {
    if radius <= 0.0 || !inside_quadrant {
        return f64::INFINITY;
    }
    (length(p.x - center.x, p.y - center.y) - radius).abs()
}

/// Distance from `p` to the outline of a rounded rectangle
pub fn rounded_rect_distance(p: Point, rect: &Rect, radii: &CornerRadii) -> f64 {
    let (x0, y0, x1, y1) = (rect.x, rect.y, rect.right(), rect.bottom());
    let CornerRadii {
        top_left: tl,
        top_right: tr,
        bottom_right: br,
        bottom_left: bl,
    } = *radii;

    let edges = [
        horizontal_segment_distance(p, x0 + tl, x1 - tr, y0),
        vertical_segment_distance(p, x1, y0 + tr, y1 - br),
        horizontal_segment_distance(p, x0 + bl, x1 - br, y1),
        vertical_segment_distance(p, x0, y0 + tl, y1 - bl),
    ];

    let tl_center = Point::new(x0 + tl, y0 + tl);
    let tr_center = Point::new(x1 - tr, y0 + tr);
    let br_center = Point::new(x1 - br, y1 - br);
    let bl_center = Point::new(x0 + bl, y1 - bl);
    let arcs = [
        corner_arc_distance(p, tl_center, tl, p.x <= tl_center.x && p.y <= tl_center.y),
        corner_arc_distance(p, tr_center, tr, p.x >= tr_center.x && p.y <= tr_center.y),
        corner_arc_distance(p, br_center, br, p.x >= br_center.x && p.y >= br_center.y),
        corner_arc_distance(p, bl_center, bl, p.x <= bl_center.x && p.y >= bl_center.y),
    ];

    edges
        .into_iter()
        .chain(arcs)
        .fold(f64::INFINITY, f64::min)
}

/// Distance from `p` to the segment `a`-`b`
pub fn segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq <= f64::EPSILON {
        return length(p.x - a.x, p.y - a.y);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    length(p.x - (a.x + t * dx), p.y - (a.y + t * dy))
}

/// Distance from `p` to the closed outline through `points`
pub fn polygon_distance(p: Point, points: &[Point]) -> f64 {
    let Some(&last) = points.last() else {
        return f64::INFINITY;
    };
    let mut previous = last;
    let mut best = f64::INFINITY;
    for &point in points {
        best = best.min(segment_distance(p, previous, point));
        previous = point;
    }
    best
}
