//! Planar primitives shared by renderers and surfaces

/// Point in surface pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate, growing rightwards
    pub x: f64,
    /// Vertical coordinate, growing downwards
    pub y: f64,
}

impl Point {
    /// Construct a point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translate by `(dx, dy)`
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Euclidean distance to `other`
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Rotate around `pivot` by `angle` radians
    pub fn rotate_around(self, pivot: Self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        let dx = self.x - pivot.x;
        let dy = self.y - pivot.y;
        Self::new(
            pivot.x + dx * cos - dy * sin,
            pivot.y + dx * sin + dy * cos,
        )
    }
}

/// Axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl Rect {
    /// Construct a rectangle
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square of side `side` centred on `center`
    pub fn centered_square(center: Point, side: f64) -> Self {
        Self::new(center.x - side / 2.0, center.y - side / 2.0, side, side)
    }

    /// Right edge
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Centre point
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Whether `other` lies entirely inside this rectangle
    pub fn contains_rect(&self, other: &Self) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Rectangle shrunk by `inset` on every side
    pub fn inset(&self, inset: f64) -> Self {
        Self::new(
            self.x + inset,
            self.y + inset,
            (self.width - 2.0 * inset).max(0.0),
            (self.height - 2.0 * inset).max(0.0),
        )
    }
}

/// Independent corner radii of a rounded rectangle, clockwise from top-left
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CornerRadii {
    /// Top-left radius
    pub top_left: f64,
    /// Top-right radius
    pub top_right: f64,
    /// Bottom-right radius
    pub bottom_right: f64,
    /// Bottom-left radius
    pub bottom_left: f64,
}

impl CornerRadii {
    /// Same radius on all four corners
    pub const fn uniform(radius: f64) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    /// Radii as an array in clockwise order from top-left
    pub const fn to_array(self) -> [f64; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }

    /// Multiply every radius by `factor`
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            top_left: self.top_left * factor,
            top_right: self.top_right * factor,
            bottom_right: self.bottom_right * factor,
            bottom_left: self.bottom_left * factor,
        }
    }
}

/// Closed outline of a square of side `side` centred on `center`, rotated by `angle`
///
/// Corners are rounded with `radius` and each arc is flattened into `arc_segments`
/// straight pieces; a radius of 0 yields the plain four corners.
pub fn rounded_square_outline(
    center: Point,
    side: f64,
    radius: f64,
    angle: f64,
    arc_segments: usize,
) -> Vec<Point> {
    let half = side / 2.0;
    let radius = radius.clamp(0.0, half);
    let inner = half - radius;

    // Corner centres clockwise from top-left, with the start angle of each arc
    let corners = [
        (-inner, -inner, std::f64::consts::PI),
        (inner, -inner, 1.5 * std::f64::consts::PI),
        (inner, inner, 0.0),
        (-inner, inner, 0.5 * std::f64::consts::PI),
    ];

    let mut points = Vec::with_capacity(4 * (arc_segments + 1));
    for (cx, cy, start) in corners {
        if radius <= 0.0 || arc_segments == 0 {
            points.push(Point::new(center.x + cx, center.y + cy));
            continue;
        }
        for step in 0..=arc_segments {
            let theta = start + std::f64::consts::FRAC_PI_2 * step as f64 / arc_segments as f64;
            points.push(Point::new(
                center.x + cx + radius * theta.cos(),
                center.y + cy + radius * theta.sin(),
            ));
        }
    }

    if angle != 0.0 {
        for point in &mut points {
            *point = point.rotate_around(center, angle);
        }
    }
    points
}

/// Diamond (square rotated 45°) with the given half-diagonal
pub fn diamond_outline(center: Point, half_diagonal: f64) -> Vec<Point> {
    vec![
        center.offset(0.0, -half_diagonal),
        center.offset(half_diagonal, 0.0),
        center.offset(0.0, half_diagonal),
        center.offset(-half_diagonal, 0.0),
    ]
}
