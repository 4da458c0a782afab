//! Rasterization of lines and triangles.
//!
//! # Algorithms
//!
//! - **Slope-stepping line**: one pixel per step along the dominant axis, steep
//!   lines handled by transposing the endpoints
//! - **Column-sweep triangle fill**: vertices sorted by x, triangle split at the
//!   middle vertex into two trapezoids, each column filled with one vertical line
//! - **Wireframe triangle**: the three edges drawn with the line rasterizer

mod line;
mod triangle;

pub use line::{draw_line, draw_segment, Drawable};
pub use triangle::{draw_triangle_outline, fill_triangle, OUTLINE_COLOR};
