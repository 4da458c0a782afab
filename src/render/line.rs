//! Line rasterization.
//!
//! Slope-stepping along the dominant axis: one pixel per integer step, the minor
//! coordinate carried as a float and rounded on write.

use crate::color::Bgra;
use crate::framebuffer::PixelSink;
use crate::geometry::{ScreenPoint, Segment};

/// Trait for things that can be rasterized into a [`PixelSink`].
pub trait Drawable {
    /// Draw this primitive in `color`.
    fn draw(&self, sink: &mut dyn PixelSink, color: Bgra);

    /// Draw only the outline of this primitive.
    fn draw_outline(&self, sink: &mut dyn PixelSink) {
        // Primitives without an interior are their own outline
        self.draw(sink, super::OUTLINE_COLOR);
    }
}

/// Which way rasterized coordinates map back onto the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orientation {
    /// Iterating over x, interpolating y.
    Direct,
    /// Endpoints were transposed: iterating over y, interpolating x.
    Transposed,
}

impl Orientation {
    #[inline]
    fn plot<S: PixelSink + ?Sized>(self, sink: &mut S, major: i32, minor: i32, color: Bgra) {
        match self {
            Self::Direct => sink.set(major, minor, color),
            Self::Transposed => sink.set(minor, major, color),
        }
    }
}

/// Draw a one-pixel-wide line between two points, endpoints included.
///
/// Steep lines (vertical extent greater than horizontal) are transposed so the
/// loop always runs over the dominant axis, and endpoints are swapped so it runs
/// forward. Exactly `max(|dx|, |dy|) + 1` pixels are written; a zero-length line
/// writes one.
///
/// # Example
///
/// ```
/// use meshraster::color::Bgra;
/// use meshraster::framebuffer::Framebuffer;
/// use meshraster::render::draw_line;
///
/// let mut fb = Framebuffer::new(10, 10).unwrap();
/// draw_line(&mut fb, 1, 1, 8, 3, Bgra::WHITE);
/// assert_eq!(fb.count_pixels(Bgra::WHITE), 8);
/// ```
pub fn draw_line<S: PixelSink + ?Sized>(
    sink: &mut S,
    ax: i32,
    ay: i32,
    bx: i32,
    by: i32,
    color: Bgra,
) {
    let orientation = if Segment::from_coords(ax, ay, bx, by).is_steep() {
        Orientation::Transposed
    } else {
        Orientation::Direct
    };

    let mut a = ScreenPoint::new(ax, ay);
    let mut b = ScreenPoint::new(bx, by);
    if orientation == Orientation::Transposed {
        a = a.transposed();
        b = b.transposed();
    }
    if a.x > b.x {
        std::mem::swap(&mut a, &mut b);
    }

    let slope = if b.x == a.x {
        0.0
    } else {
        (b.y as f32 - a.y as f32) / (b.x as f32 - a.x as f32)
    };

    let mut y = a.y as f32;
    for x in a.x..=b.x {
        orientation.plot(sink, x, y.round() as i32, color);
        y += slope;
    }
}

/// Draw a [`Segment`].
pub fn draw_segment<S: PixelSink + ?Sized>(sink: &mut S, segment: Segment, color: Bgra) {
    draw_line(
        sink,
        segment.start.x,
        segment.start.y,
        segment.end.x,
        segment.end.y,
        color,
    );
}

impl Drawable for Segment {
    fn draw(&self, sink: &mut dyn PixelSink, color: Bgra) {
        draw_segment(sink, *self, color);
    }
}

// ============================================================================
// Tests
// ============================================================================
