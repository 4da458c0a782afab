//! Orthographic screen projection.
//!
//! Maps object space `[-1, 1]` on x and y onto pixel space `[0, side]` of a square
//! viewport. Depth is discarded and nothing is clamped: points outside the unit
//! cube land outside the viewport.

use crate::error::{Error, Result};
use crate::geometry::{ObjectPoint, ScreenPoint};

/// Project an object-space point onto a square screen of `screen_side` pixels.
///
/// `screen = round((object / 2 + 0.5) * screen_side)` on each of x and y.
/// Non-finite input saturates through the `f32 -> i32` cast (NaN becomes 0).
///
/// # Example
///
/// ```
/// use meshraster::geometry::{ObjectPoint, ScreenPoint};
/// use meshraster::projection::project_to_screen;
///
/// let p = project_to_screen(ObjectPoint::new(1.0, -1.0, 0.3), 100.0);
/// assert_eq!(p, ScreenPoint::new(100, 0));
/// ```
#[must_use]
pub fn project_to_screen(pos: ObjectPoint, screen_side: f32) -> ScreenPoint {
    ScreenPoint::new(
        to_screen_axis(pos.x, screen_side),
        to_screen_axis(pos.y, screen_side),
    )
}

#[inline]
fn to_screen_axis(v: f32, side: f32) -> i32 {
    ((v / 2.0 + 0.5) * side).round() as i32
}

/// Orthographic projector bound to one square viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrthoProjector {
    side: u32,
}

impl OrthoProjector {
    /// Create a projector for a `side x side` viewport.
    ///
    /// # Errors
    ///
    /// Returns an error if `side` is zero.
    pub fn new(side: u32) -> Result<Self> {
        if side == 0 {
            return Err(Error::InvalidDimensions {
                width: side,
                height: side,
            });
        }
        Ok(Self { side })
    }

    /// Viewport side in pixels.
    #[must_use]
    pub const fn side(&self) -> u32 {
        self.side
    }

    /// Project one point.
    #[must_use]
    pub fn project(&self, pos: ObjectPoint) -> ScreenPoint {
        project_to_screen(pos, self.side as f32)
    }

    /// Project the three corners of a face, in corner order.
    #[must_use]
    pub fn project_face(&self, corners: [ObjectPoint; 3]) -> [ScreenPoint; 3] {
        corners.map(|p| self.project(p))
    }
}
