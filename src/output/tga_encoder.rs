//! TGA output encoder.
//!
//! Encoding goes through the `image` crate's TGA codec, which stores rows with a
//! top-left origin. Rows are flipped on the way in so screen y = 0 ends up at the
//! bottom of the picture, the same as PNG output.

use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use image::codecs::tga;
use image::ExtendedColorType;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// TGA encoder for framebuffer output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TgaEncoder {
    rle: bool,
    alpha: bool,
}

impl Default for TgaEncoder {
    fn default() -> Self {
        Self {
            rle: true,
            alpha: true,
        }
    }
}

impl TgaEncoder {
    /// RLE-compressed, 32 bits per pixel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable run-length encoding.
    #[must_use]
    pub fn with_rle(mut self, rle: bool) -> Self {
        self.rle = rle;
        self
    }

    /// Keep the alpha channel (32 bpp) or drop it (24 bpp).
    #[must_use]
    pub fn with_alpha(mut self, alpha: bool) -> Self {
        self.alpha = alpha;
        self
    }

    /// Write a framebuffer to a TGA file.
    ///
    /// # Errors
    ///
    /// Returns an error if the framebuffer is too large for TGA or if the file
    /// cannot be created or written.
    pub fn write_to_file<P: AsRef<Path>>(&self, fb: &Framebuffer, path: P) -> Result<()> {
        check_dimensions(fb)?;
        let mut writer = BufWriter::new(File::create(path)?);
        self.encode(fb, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Encode a framebuffer to TGA bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the framebuffer is too large for TGA.
    pub fn to_bytes(&self, fb: &Framebuffer) -> Result<Vec<u8>> {
        check_dimensions(fb)?;
        let mut buffer = Vec::new();
        self.encode(fb, &mut buffer)?;
        Ok(buffer)
    }

    fn encode<W: Write>(&self, fb: &Framebuffer, writer: W) -> Result<()> {
        let rgba = fb.to_rgba_rows(true);
        let (data, color_type) = if self.alpha {
            (rgba, ExtendedColorType::Rgba8)
        } else {
            let rgb = rgba
                .chunks_exact(4)
                .flat_map(|px| [px[0], px[1], px[2]])
                .collect();
            (rgb, ExtendedColorType::Rgb8)
        };

        let mut encoder = tga::TgaEncoder::new(writer);
        if !self.rle {
            encoder = encoder.disable_rle();
        }
        encoder.encode(&data, fb.width(), fb.height(), color_type)?;
        Ok(())
    }
}

/// TGA stores width and height as 16-bit fields.
fn check_dimensions(fb: &Framebuffer) -> Result<()> {
    let max = u32::from(u16::MAX);
    if fb.width() > max || fb.height() > max {
        return Err(Error::InvalidDimensions {
            width: fb.width(),
            height: fb.height(),
        });
    }
    Ok(())
}
