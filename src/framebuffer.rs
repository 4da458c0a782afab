//! Pixel sinks and the owned framebuffer.
//!
//! Rasterizers only ever see the [`PixelSink`] trait; [`Framebuffer`] is the
//! concrete grid used by the renderer and the image encoders.

use crate::color::Bgra;
use crate::error::{Error, Result};

/// Anything the rasterizers can write pixels into.
///
/// Writes never fail observably. Implementations decide what to do with
/// coordinates outside their extent (the [`Framebuffer`] ignores them).
pub trait PixelSink {
    /// Write one pixel.
    fn set(&mut self, x: i32, y: i32, color: Bgra);
}

impl<S: PixelSink + ?Sized> PixelSink for &mut S {
    fn set(&mut self, x: i32, y: i32, color: Bgra) {
        (**self).set(x, y, color);
    }
}

/// Tightly packed BGRA framebuffer.
///
/// Row 0 holds screen y = 0. Encoders decide how that maps to the top or bottom
/// of the stored image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// Pixels in row-major order, 4 bytes each: [B, G, R, A].
    pixels: Vec<u8>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with transparent black.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use meshraster::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(644, 644).unwrap();
    /// assert_eq!(fb.width(), 644);
    /// assert_eq!(fb.pixels().len(), 644 * 644 * 4);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let size = (width as usize) * (height as usize) * 4;
        Ok(Self {
            width,
            height,
            pixels: vec![0; size],
        })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Raw BGRA bytes.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Get a row of pixels as a slice.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = self.pixel_index(0, y);
        let end = start + (self.width as usize) * 4;
        Some(&self.pixels[start..end])
    }

    /// Clear the framebuffer to a solid color.
    pub fn clear(&mut self, color: Bgra) {
        let bytes = color.to_array();
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&bytes);
        }
    }

    /// Get the color at a specific pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Bgra> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let idx = self.pixel_index(x, y);
        Some(Bgra::from_array([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]))
    }

    /// Set the color at a specific pixel coordinate.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Bgra) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = self.pixel_index(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
    }

    /// Count pixels exactly equal to `color`.
    #[must_use]
    pub fn count_pixels(&self, color: Bgra) -> usize {
        let bytes = color.to_array();
        self.pixels.chunks_exact(4).filter(|px| *px == bytes).count()
    }

    /// Copy of the pixels converted to RGBA, with rows in the given order.
    ///
    /// `top_down == false` emits row 0 first; `true` emits the last row first,
    /// which puts screen y = 0 at the bottom of a top-left-origin image.
    #[must_use]
    pub fn to_rgba_rows(&self, top_down: bool) -> Vec<u8> {
        let row_bytes = (self.width as usize) * 4;
        let mut out = Vec::with_capacity(self.pixels.len());

        let mut push_row = |row: &[u8]| {
            for px in row.chunks_exact(4) {
                out.extend_from_slice(&[px[2], px[1], px[0], px[3]]);
            }
        };

        if top_down {
            for row in self.pixels.chunks_exact(row_bytes).rev() {
                push_row(row);
            }
        } else {
            for row in self.pixels.chunks_exact(row_bytes) {
                push_row(row);
            }
        }
        out
    }

    /// Calculate the byte index for a pixel coordinate.
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }
}

impl PixelSink for Framebuffer {
    fn set(&mut self, x: i32, y: i32, color: Bgra) {
        if x < 0 || y < 0 {
            return;
        }
        self.set_pixel(x as u32, y as u32, color);
    }
}
