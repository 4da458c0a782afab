//! Render configuration.
//!
//! With the `config` feature the types round-trip through YAML:
//!
//! ```yaml
//! size: 644
//! mode: filled
//! coloring:
//!   kind: palette
//!   colors: ["#ff0000", "#00ff00", "#4080ff"]
//! background: "#000000"
//! ```

use crate::color::Bgra;
use crate::error::{Error, Result};

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

/// Side of the square viewport used when nothing else is configured.
pub const DEFAULT_SIZE: u32 = 644;

/// Golden-angle hue step, spreads consecutive faces around the color wheel.
const SPECTRUM_HUE_STEP: f32 = 137.508;

/// How faces are rasterized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
pub enum RenderMode {
    /// Triangle edges only, always in the outline color.
    #[default]
    Wireframe,
    /// Solid triangles in the face color.
    Filled,
}

impl std::str::FromStr for RenderMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "wireframe" | "outline" => Ok(Self::Wireframe),
            "filled" | "fill" => Ok(Self::Filled),
            _ => Err(Error::UnknownMode(s.to_string())),
        }
    }
}

/// Where each face's fill color comes from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(tag = "kind", rename_all = "lowercase"))]
pub enum FaceColoring {
    /// Every face gets the same color.
    Solid {
        /// Fill color.
        color: Bgra,
    },
    /// Face `i` gets `colors[i % colors.len()]`.
    Palette {
        /// Colors to cycle through.
        colors: Vec<Bgra>,
    },
    /// Face `i` gets a hue rotated by the golden angle from face `i - 1`.
    Spectrum,
}

impl Default for FaceColoring {
    fn default() -> Self {
        Self::Solid { color: Bgra::WHITE }
    }
}

impl FaceColoring {
    /// Fill color for face number `face`.
    ///
    /// An empty palette falls back to white.
    #[must_use]
    pub fn color_for(&self, face: usize) -> Bgra {
        match self {
            Self::Solid { color } => *color,
            Self::Palette { colors } if colors.is_empty() => Bgra::WHITE,
            Self::Palette { colors } => colors[face % colors.len()],
            Self::Spectrum => {
                let hue = ((face % 360) as f32 * SPECTRUM_HUE_STEP) % 360.0;
                Bgra::from_hsl(hue, 0.65, 0.55)
            }
        }
    }
}

/// Everything the renderer needs besides the mesh.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default, deny_unknown_fields))]
pub struct RenderConfig {
    /// Square viewport side in pixels; the framebuffer is `size x size`.
    pub size: u32,
    /// Wireframe or filled.
    pub mode: RenderMode,
    /// Per-face fill colors (ignored in wireframe mode).
    pub coloring: FaceColoring,
    /// Clear color.
    pub background: Bgra,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            mode: RenderMode::default(),
            coloring: FaceColoring::default(),
            background: Bgra::BLACK,
        }
    }
}

impl RenderConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the viewport side.
    #[must_use]
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Set the render mode.
    #[must_use]
    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the face coloring.
    #[must_use]
    pub fn with_coloring(mut self, coloring: FaceColoring) -> Self {
        self.coloring = coloring;
        self
    }

    /// Set the clear color.
    #[must_use]
    pub fn with_background(mut self, background: Bgra) -> Self {
        self.background = background;
        self
    }

    /// Check that the configuration can be rendered.
    ///
    /// # Errors
    ///
    /// Returns an error if the viewport side is zero.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::InvalidDimensions {
                width: self.size,
                height: self.size,
            });
        }
        Ok(())
    }

    /// Parse and validate a YAML configuration. Missing keys keep their defaults.
    #[cfg(feature = "config")]
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a YAML configuration file.
    #[cfg(feature = "config")]
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Serialize to YAML.
    #[cfg(feature = "config")]
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.size, 644);
        assert_eq!(config.mode, RenderMode::Wireframe);
        assert_eq!(config.background, Bgra::BLACK);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = RenderConfig::new()
            .with_size(100)
            .with_mode(RenderMode::Filled)
            .with_coloring(FaceColoring::Solid { color: Bgra::RED })
            .with_background(Bgra::WHITE);
        assert_eq!(config.size, 100);
        assert_eq!(config.mode, RenderMode::Filled);
        assert_eq!(config.coloring.color_for(7), Bgra::RED);
        assert_eq!(config.background, Bgra::WHITE);
    }

    #[test]
    fn test_zero_size_invalid() {
        assert!(RenderConfig::new().with_size(0).validate().is_err());
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("filled".parse::<RenderMode>().unwrap(), RenderMode::Filled);
        assert_eq!("Wireframe".parse::<RenderMode>().unwrap(), RenderMode::Wireframe);
        assert!("shaded".parse::<RenderMode>().is_err());
    }

    #[test]
    fn test_palette_cycles() {
        let coloring = FaceColoring::Palette {
            colors: vec![Bgra::RED, Bgra::GREEN, Bgra::BLUE],
        };
        assert_eq!(coloring.color_for(0), Bgra::RED);
        assert_eq!(coloring.color_for(4), Bgra::GREEN);
        assert_eq!(coloring.color_for(8), Bgra::BLUE);

        let empty = FaceColoring::Palette { colors: vec![] };
        assert_eq!(empty.color_for(3), Bgra::WHITE);
    }

    #[test]
    fn test_spectrum_varies() {
        let coloring = FaceColoring::Spectrum;
        assert_ne!(coloring.color_for(0), coloring.color_for(1));
        assert_eq!(coloring.color_for(5), coloring.color_for(5));
        assert_eq!(coloring.color_for(2).a, 255);
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_yaml_partial() {
        let config = RenderConfig::from_yaml_str("size: 256\nmode: filled\n").unwrap();
        assert_eq!(config.size, 256);
        assert_eq!(config.mode, RenderMode::Filled);
        assert_eq!(config.coloring, FaceColoring::default());
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_yaml_coloring() {
        let yaml = "\
coloring:
  kind: palette
  colors: ['#ff0000', '#00ff0080']
background: '#102030'
";
        let config = RenderConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(
            config.coloring,
            FaceColoring::Palette {
                colors: vec![Bgra::RED, Bgra::GREEN.with_alpha(0x80)]
            }
        );
        assert_eq!(config.background, Bgra::rgb(0x10, 0x20, 0x30));

        let config = RenderConfig::from_yaml_str("coloring:\n  kind: spectrum\n").unwrap();
        assert_eq!(config.coloring, FaceColoring::Spectrum);
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_yaml_errors() {
        assert!(matches!(
            RenderConfig::from_yaml_str("size: 0\n").unwrap_err(),
            Error::InvalidDimensions { .. }
        ));
        assert!(matches!(
            RenderConfig::from_yaml_str("sise: 10\n").unwrap_err(),
            Error::Config(_)
        ));
        assert!(matches!(
            RenderConfig::from_yaml_str("background: 'teal'\n").unwrap_err(),
            Error::Config(_)
        ));
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_yaml_round_trip() {
        let config = RenderConfig::new()
            .with_size(32)
            .with_mode(RenderMode::Filled)
            .with_coloring(FaceColoring::Solid { color: Bgra::YELLOW });
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("#ffc800"));
        assert_eq!(RenderConfig::from_yaml_str(&yaml).unwrap(), config);
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("render.yaml");
        std::fs::write(&path, "size: 64\n").unwrap();
        assert_eq!(RenderConfig::load(&path).unwrap().size, 64);
    }
}
