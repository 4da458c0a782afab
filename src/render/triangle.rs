//! Triangle outline and fill.
//!
//! The filler sorts vertices by x and sweeps columns, splitting the triangle at
//! the middle vertex into two trapezoids. Each trapezoid is bounded by the long
//! edge `a -> c` and one short edge, and every column is filled with a single
//! vertical line.

use super::line::{draw_line, draw_segment, Drawable};
use crate::color::Bgra;
use crate::framebuffer::PixelSink;
use crate::geometry::{ScreenPoint, Triangle};

/// Color used for wireframe edges, whatever the caller's fill color is.
pub const OUTLINE_COLOR: Bgra = Bgra::WHITE;

/// Draw the edges `a-b`, `b-c` and `c-a` in [`OUTLINE_COLOR`].
pub fn draw_triangle_outline<S: PixelSink + ?Sized>(
    sink: &mut S,
    a: ScreenPoint,
    b: ScreenPoint,
    c: ScreenPoint,
) {
    for edge in Triangle::new(a, b, c).edges() {
        draw_segment(sink, edge, OUTLINE_COLOR);
    }
}

/// Fill a triangle, edges included.
///
/// Draws nothing when all three vertices share one x coordinate. A half whose
/// short edge is vertical (`a.x == b.x` or `b.x == c.x`) is a single column
/// spanning the long edge and the short edge's starting y.
///
/// # Example
///
/// ```
/// use meshraster::color::Bgra;
/// use meshraster::framebuffer::Framebuffer;
/// use meshraster::geometry::ScreenPoint;
/// use meshraster::render::fill_triangle;
///
/// let mut fb = Framebuffer::new(16, 16).unwrap();
/// let (a, b, c) = (ScreenPoint::new(0, 0), ScreenPoint::new(10, 0), ScreenPoint::new(0, 10));
/// fill_triangle(&mut fb, a, b, c, Bgra::RED);
/// assert_eq!(fb.get_pixel(3, 3), Some(Bgra::RED));
/// assert_ne!(fb.get_pixel(8, 8), Some(Bgra::RED));
/// ```
pub fn fill_triangle<S: PixelSink + ?Sized>(
    sink: &mut S,
    a: ScreenPoint,
    b: ScreenPoint,
    c: ScreenPoint,
    color: Bgra,
) {
    let Triangle { a, b, c } = Triangle::new(a, b, c).sorted_by_x();
    if a.x == c.x {
        return;
    }

    let slope_ac = edge_slope(a, c);

    // Left half: long edge a->c against short edge a->b
    let slope_ab = edge_slope(a, b);
    let mut y_ac = a.y as f32;
    let mut y_ab = a.y as f32;
    for x in a.x..=b.x {
        draw_column(sink, x, y_ac, y_ab, color);
        y_ac += slope_ac;
        y_ab += slope_ab;
    }

    // Right half: restart the long edge at b.x so left-half drift does not carry over
    let slope_bc = edge_slope(b, c);
    let mut y_ac = a.y as f32 + slope_ac * (b.x as f32 - a.x as f32);
    let mut y_bc = b.y as f32;
    for x in b.x..=c.x {
        draw_column(sink, x, y_ac, y_bc, color);
        y_ac += slope_ac;
        y_bc += slope_bc;
    }
}

/// dy/dx of the edge `from -> to`; zero for a vertical edge.
#[inline]
fn edge_slope(from: ScreenPoint, to: ScreenPoint) -> f32 {
    if to.x == from.x {
        0.0
    } else {
        (to.y as f32 - from.y as f32) / (to.x as f32 - from.x as f32)
    }
}

#[inline]
fn draw_column<S: PixelSink + ?Sized>(sink: &mut S, x: i32, y0: f32, y1: f32, color: Bgra) {
    draw_line(sink, x, y0.round() as i32, x, y1.round() as i32, color);
}

impl Drawable for Triangle {
    fn draw(&self, sink: &mut dyn PixelSink, color: Bgra) {
        fill_triangle(sink, self.a, self.b, self.c, color);
    }

    fn draw_outline(&self, sink: &mut dyn PixelSink) {
        draw_triangle_outline(sink, self.a, self.b, self.c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::Framebuffer;
    use std::collections::{BTreeMap, HashSet};

    #[derive(Default)]
    struct Recorder {
        writes: Vec<(i32, i32, Bgra)>,
    }

    impl Recorder {
        fn pixels(&self) -> HashSet<(i32, i32)> {
            self.writes.iter().map(|&(x, y, _)| (x, y)).collect()
        }

        /// Column -> (min y, max y, distinct pixel count).
        fn columns(&self) -> BTreeMap<i32, (i32, i32, usize)> {
            let mut cols: BTreeMap<i32, HashSet<i32>> = BTreeMap::new();
            for (x, y) in self.pixels() {
                cols.entry(x).or_default().insert(y);
            }
            cols.into_iter()
                .map(|(x, ys)| {
                    let min = *ys.iter().min().unwrap();
                    let max = *ys.iter().max().unwrap();
                    (x, (min, max, ys.len()))
                })
                .collect()
        }
    }

    impl PixelSink for Recorder {
        fn set(&mut self, x: i32, y: i32, color: Bgra) {
            self.writes.push((x, y, color));
        }
    }

    fn p(x: i32, y: i32) -> ScreenPoint {
        ScreenPoint::new(x, y)
    }

    #[test]
    fn test_outline_uses_fixed_color() {
        let mut rec = Recorder::default();
        draw_triangle_outline(&mut rec, p(0, 0), p(10, 0), p(5, 8));
        assert!(!rec.writes.is_empty());
        assert!(rec.writes.iter().all(|&(_, _, c)| c == OUTLINE_COLOR));
    }

    #[test]
    fn test_outline_writes_three_edges() {
        let mut rec = Recorder::default();
        draw_triangle_outline(&mut rec, p(0, 0), p(10, 0), p(0, 10));
        // 11 + 11 + 11 writes, corners shared
        assert_eq!(rec.writes.len(), 33);
        assert_eq!(rec.pixels().len(), 30);
    }

    #[test]
    fn test_fill_degenerate_draws_nothing() {
        let mut rec = Recorder::default();
        fill_triangle(&mut rec, p(5, 0), p(5, 10), p(5, -3), Bgra::RED);
        assert!(rec.writes.is_empty());
    }

    #[test]
    fn test_fill_right_triangle() {
        let mut rec = Recorder::default();
        fill_triangle(&mut rec, p(0, 0), p(4, 0), p(0, 4), Bgra::RED);

        // Column x spans 0..=4-x
        let cols = rec.columns();
        assert_eq!(cols.len(), 5);
        for (x, (min, max, count)) in cols {
            assert_eq!(min, 0);
            assert_eq!(max, 4 - x);
            assert_eq!(count as i32, 5 - x);
        }
        assert!(rec.writes.iter().all(|&(_, _, c)| c == Bgra::RED));
    }

    #[test]
    fn test_fill_is_order_independent() {
        let (a, b, c) = (p(2, 9), p(17, 3), p(8, 14));
        let mut first = Recorder::default();
        fill_triangle(&mut first, a, b, c, Bgra::GREEN);
        let mut second = Recorder::default();
        fill_triangle(&mut second, c, a, b, Bgra::GREEN);
        assert_eq!(first.pixels(), second.pixels());
    }

    #[test]
    fn test_fill_columns_are_contiguous() {
        let mut rec = Recorder::default();
        fill_triangle(&mut rec, p(3, 40), p(60, 2), p(25, 77), Bgra::BLUE);
        let cols = rec.columns();
        assert_eq!(cols.len(), 58);
        for (min, max, count) in cols.values() {
            assert_eq!((max - min + 1) as usize, *count);
        }
    }

    #[test]
    fn test_fill_vertical_left_edge() {
        // a.x == b.x: the left half is one column covering the vertical edge
        let mut rec = Recorder::default();
        fill_triangle(&mut rec, p(0, 0), p(0, 6), p(6, 3), Bgra::RED);
        let cols = rec.columns();
        assert_eq!(cols[&0], (0, 6, 7));
        assert_eq!(cols[&6], (3, 3, 1));
    }

    #[test]
    fn test_fill_vertical_right_edge() {
        // b.x == c.x: the right half is one column covering the vertical edge
        let mut rec = Recorder::default();
        fill_triangle(&mut rec, p(0, 3), p(6, 0), p(6, 6), Bgra::RED);
        let cols = rec.columns();
        assert_eq!(cols[&0], (3, 3, 1));
        assert_eq!(cols[&6], (0, 6, 7));
    }

    #[test]
    fn test_fill_outline_agree_on_exact_slopes() {
        // Power-of-two run lengths keep every slope exact in f32
        let (a, b, c) = (p(0, 0), p(8, 4), p(16, 2));
        let mut fill = Recorder::default();
        fill_triangle(&mut fill, a, b, c, Bgra::RED);
        let mut outline = Recorder::default();
        draw_triangle_outline(&mut outline, a, b, c);

        let filled = fill.pixels();
        assert!(outline.pixels().is_subset(&filled));
    }

    #[test]
    fn test_drawable_triangle() {
        let mut fb = Framebuffer::new(20, 20).unwrap();
        fb.clear(Bgra::BLACK);
        let t = Triangle::new(p(1, 1), p(18, 1), p(1, 18));

        t.draw_outline(&mut fb);
        assert_eq!(fb.get_pixel(1, 1), Some(OUTLINE_COLOR));
        assert_eq!(fb.get_pixel(5, 5), Some(Bgra::BLACK));

        t.draw(&mut fb, Bgra::YELLOW);
        assert_eq!(fb.get_pixel(5, 5), Some(Bgra::YELLOW));
        assert_eq!(fb.get_pixel(1, 1), Some(Bgra::YELLOW));
    }
}
