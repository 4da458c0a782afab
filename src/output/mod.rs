//! Output encoders (TGA, PNG).

mod png_encoder;
mod tga_encoder;

pub use png_encoder::PngEncoder;
pub use tga_encoder::TgaEncoder;

use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use log::info;
use std::path::Path;

/// Image container chosen from the output file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// Truevision TGA (`.tga`).
    Tga,
    /// Portable Network Graphics (`.png`).
    Png,
}

impl ImageFormat {
    /// Pick a format from the file extension, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] for any other or missing extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("tga") => Ok(Self::Tga),
            Some("png") => Ok(Self::Png),
            _ => Err(Error::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Canonical file extension.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Tga => "tga",
            Self::Png => "png",
        }
    }
}

/// Write `fb` to `path` in the format implied by its extension.
///
/// TGA output uses the default encoder settings (RLE, 32 bpp). The file is
/// not created when the extension is unknown.
///
/// # Errors
///
/// Returns an error for unknown extensions or if encoding or I/O fails.
pub fn write_image<P: AsRef<Path>>(fb: &Framebuffer, path: P) -> Result<ImageFormat> {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path)?;

    match format {
        ImageFormat::Tga => TgaEncoder::new().write_to_file(fb, path)?,
        ImageFormat::Png => PngEncoder::write_to_file(fb, path)?,
    }

    info!(
        "wrote {}x{} {} image to {}",
        fb.width(),
        fb.height(),
        format.extension(),
        path.display()
    );
    Ok(format)
}
