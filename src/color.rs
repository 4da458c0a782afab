//! Color types.
//!
//! [`Bgra`] stores its channels in blue, green, red, alpha order. That order is the
//! in-memory and on-disk layout of the framebuffer and of TGA output, so it must
//! not be rearranged.

use crate::error::{Error, Result};

/// 8-bit color with channels laid out as `[B, G, R, A]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Bgra {
    /// Blue component (0-255).
    pub b: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Red component (0-255).
    pub r: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Bgra {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0, 255, 0, 255);
    /// Opaque red.
    pub const RED: Self = Self::new(0, 0, 255, 255);
    /// Light steel blue (`#4080ff`).
    pub const BLUE: Self = Self::new(255, 128, 64, 255);
    /// Warm yellow (`#ffc800`).
    pub const YELLOW: Self = Self::new(0, 200, 255, 255);

    /// Create a color from channels in storage order (blue, green, red, alpha).
    #[must_use]
    pub const fn new(b: u8, g: u8, r: u8, a: u8) -> Self {
        Self { b, g, r, a }
    }

    /// Create an opaque color from red, green and blue.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(b, g, r, 255)
    }

    /// Create a color from red, green, blue and alpha.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(b, g, r, a)
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.b, self.g, self.r, a)
    }

    /// Channels in storage order: `[B, G, R, A]`.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.b, self.g, self.r, self.a]
    }

    /// Create from `[B, G, R, A]`.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Channels reordered as `[R, G, B, A]` for encoders that expect it.
    #[must_use]
    pub const fn to_rgba_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (the leading `#` is optional).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] for any other length or a non-hex digit.
    ///
    /// # Example
    ///
    /// ```
    /// use meshraster::color::Bgra;
    ///
    /// let c = Bgra::from_hex("#ff8000").unwrap();
    /// assert_eq!(c.to_array(), [0x00, 0x80, 0xff, 0xff]);
    /// ```
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.trim().trim_start_matches('#');
        if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
            return Err(Error::InvalidColor(s.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| Error::InvalidColor(s.to_string()))
        };

        let r = channel(0)?;
        let g = channel(2)?;
        let b = channel(4)?;
        let a = if hex.len() == 8 { channel(6)? } else { 255 };

        Ok(Self::rgba(r, g, b, a))
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    #[must_use]
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl std::str::FromStr for Bgra {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl std::fmt::Display for Bgra {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(feature = "config")]
impl serde::Serialize for Bgra {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "config")]
impl<'de> serde::Deserialize<'de> for Bgra {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl Bgra {
    /// Opaque color from hue (degrees, wrapped), saturation and lightness (0.0-1.0).
    #[must_use]
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let [r, g, b] = hsl_channels(hue, saturation, lightness).map(|v| (v * 255.0).round() as u8);
        Self::rgb(r, g, b)
    }
}

/// Red, green and blue in 0.0-1.0, via chroma and the hue sector.
fn hsl_channels(hue: f32, saturation: f32, lightness: f32) -> [f32; 3] {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let sector = hue.rem_euclid(360.0) / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let m = lightness - chroma / 2.0;

    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    [r + m, g + m, b + m]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_storage_order() {
        // TGA consumers read these bytes directly.
        assert_eq!(Bgra::WHITE.to_array(), [255, 255, 255, 255]);
        assert_eq!(Bgra::GREEN.to_array(), [0, 255, 0, 255]);
        assert_eq!(Bgra::RED.to_array(), [0, 0, 255, 255]);
        assert_eq!(Bgra::BLUE.to_array(), [255, 128, 64, 255]);
        assert_eq!(Bgra::YELLOW.to_array(), [0, 200, 255, 255]);
    }

    #[test]
    fn test_repr_layout() {
        assert_eq!(std::mem::size_of::<Bgra>(), 4);
        let c = Bgra::rgb(1, 2, 3);
        assert_eq!(c.to_array(), [3, 2, 1, 255]);
        assert_eq!(c.to_rgba_array(), [1, 2, 3, 255]);
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(Bgra::from_hex("#ff0000").unwrap(), Bgra::RED);
        assert_eq!(Bgra::from_hex("00ff00").unwrap(), Bgra::GREEN);
        assert_eq!(Bgra::from_hex("#4080ff").unwrap(), Bgra::BLUE);
        assert_eq!(Bgra::from_hex("#ffffff80").unwrap(), Bgra::WHITE.with_alpha(0x80));
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(Bgra::from_hex("").is_err());
        assert!(Bgra::from_hex("#fff").is_err());
        assert!(Bgra::from_hex("#gg0000").is_err());
        assert!(Bgra::from_hex("#ff00000").is_err());
        assert!(Bgra::from_hex("#ffé000").is_err());
    }

    #[test]
    fn test_hex_display() {
        assert_eq!(Bgra::YELLOW.to_string(), "#ffc800");
        assert_eq!(Bgra::TRANSPARENT.to_hex(), "#00000000");
        let parsed: Bgra = Bgra::YELLOW.to_hex().parse().unwrap();
        assert_eq!(parsed, Bgra::YELLOW);
    }

    #[test]
    fn test_from_hsl() {
        assert_eq!(Bgra::from_hsl(0.0, 1.0, 0.5), Bgra::RED);
        assert_eq!(Bgra::from_hsl(120.0, 1.0, 0.5), Bgra::GREEN);
        assert_eq!(Bgra::from_hsl(0.0, 0.0, 0.5), Bgra::rgb(128, 128, 128));
    }

    #[test]
    fn test_hsl_channels_by_sector() {
        let [r, g, b] = hsl_channels(60.0, 1.0, 0.5);
        assert_relative_eq!(r, 1.0);
        assert_relative_eq!(g, 1.0);
        assert_relative_eq!(b, 0.0);

        let [r, g, b] = hsl_channels(240.0, 1.0, 0.25);
        assert_relative_eq!(r, 0.0);
        assert_relative_eq!(g, 0.0);
        assert_relative_eq!(b, 0.5);
    }

    #[test]
    fn test_hsl_hue_wraps() {
        assert_eq!(Bgra::from_hsl(480.0, 1.0, 0.5), Bgra::from_hsl(120.0, 1.0, 0.5));
        assert_eq!(Bgra::from_hsl(-120.0, 1.0, 0.5), Bgra::from_hsl(240.0, 1.0, 0.5));
    }
}
