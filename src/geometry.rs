//! Geometric primitives for rasterization.
//!
//! Screen-space values are integer pixel coordinates; object-space values are
//! floats in the normalized `[-1, 1]` cube.

/// Integer pixel coordinate (ivec2).
///
/// No bounds are implied; a sink decides what to do with coordinates outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScreenPoint {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl ScreenPoint {
    /// Create a new screen point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Swap the x and y roles.
    #[must_use]
    pub const fn transposed(self) -> Self {
        Self::new(self.y, self.x)
    }
}

impl From<(i32, i32)> for ScreenPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for ScreenPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Floating-point point in object space (vec3).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ObjectPoint {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
    /// Z coordinate (ignored by the orthographic projector).
    pub z: f32,
}

impl ObjectPoint {
    /// Create a new object-space point.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// A line segment between two screen points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Segment {
    /// Start point.
    pub start: ScreenPoint,
    /// End point.
    pub end: ScreenPoint,
}

impl Segment {
    /// Create a new segment.
    #[must_use]
    pub const fn new(start: ScreenPoint, end: ScreenPoint) -> Self {
        Self { start, end }
    }

    /// Create a segment from coordinates.
    #[must_use]
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(ScreenPoint::new(x0, y0), ScreenPoint::new(x1, y1))
    }

    /// True when the vertical extent exceeds the horizontal extent. Ties are
    /// not steep.
    #[must_use]
    pub fn is_steep(&self) -> bool {
        self.start.x.abs_diff(self.end.x) < self.start.y.abs_diff(self.end.y)
    }
}

/// Three screen points, in no particular order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Triangle {
    /// First vertex.
    pub a: ScreenPoint,
    /// Second vertex.
    pub b: ScreenPoint,
    /// Third vertex.
    pub c: ScreenPoint,
}

impl Triangle {
    /// Create a new triangle.
    #[must_use]
    pub const fn new(a: ScreenPoint, b: ScreenPoint, c: ScreenPoint) -> Self {
        Self { a, b, c }
    }

    /// Same vertices, reordered so that `a.x <= b.x <= c.x`.
    ///
    /// Three compare-and-swap steps on x only; y never takes part in the ordering.
    #[must_use]
    pub fn sorted_by_x(self) -> Self {
        let Self { mut a, mut b, mut c } = self;
        if a.x > b.x {
            std::mem::swap(&mut a, &mut b);
        }
        if a.x > c.x {
            std::mem::swap(&mut a, &mut c);
        }
        if b.x > c.x {
            std::mem::swap(&mut b, &mut c);
        }
        Self { a, b, c }
    }

    /// True when all three vertices share one x coordinate.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.a.x == self.b.x && self.b.x == self.c.x
    }

    /// Twice the signed area (positive for counter-clockwise winding).
    #[must_use]
    pub fn signed_area2(&self) -> i64 {
        let (ax, ay) = (i64::from(self.a.x), i64::from(self.a.y));
        let (bx, by) = (i64::from(self.b.x), i64::from(self.b.y));
        let (cx, cy) = (i64::from(self.c.x), i64::from(self.c.y));
        (bx - ax) * (cy - ay) - (cx - ax) * (by - ay)
    }

    /// The three edges `a-b`, `b-c`, `c-a`.
    #[must_use]
    pub const fn edges(&self) -> [Segment; 3] {
        [
            Segment::new(self.a, self.b),
            Segment::new(self.b, self.c),
            Segment::new(self.c, self.a),
        ]
    }

    /// Inclusive bounding box as `(min, max)`.
    #[must_use]
    pub fn bounds(&self) -> (ScreenPoint, ScreenPoint) {
        let min = ScreenPoint::new(
            self.a.x.min(self.b.x).min(self.c.x),
            self.a.y.min(self.b.y).min(self.c.y),
        );
        let max = ScreenPoint::new(
            self.a.x.max(self.b.x).max(self.c.x),
            self.a.y.max(self.b.y).max(self.c.y),
        );
        (min, max)
    }
}
