//! # Meshraster
//!
//! Orthographic software rasterizer for triangulated meshes.
//!
//! Object-space vertices in `[-1, 1]` are projected onto a square viewport by
//! dropping z, then each face is drawn either as a white wireframe outline or as
//! a solid filled triangle. All drawing goes through the [`PixelSink`] trait, so
//! the rasterizer can target the built-in [`Framebuffer`] or any other surface.
//!
//! ## Features
//!
//! - **Pure Rust**: no C dependencies; TGA and PNG output built in
//! - **Exact rasterization rules**: slope-stepping lines with inclusive endpoints,
//!   column-by-column triangle fill
//! - **OBJ input**: vertices and polygon faces, fan-triangulated
//! - **YAML configuration**: viewport size, render mode and face colors
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use meshraster::prelude::*;
//!
//! let mesh = Mesh::load("model.obj")?;
//! let config = RenderConfig::new().with_mode(RenderMode::Filled);
//! let (fb, stats) = Renderer::new(config)?.render_to_framebuffer(&mesh)?;
//!
//! meshraster::output::write_image(&fb, "framebuffer.tga")?;
//! println!("{stats}");
//! ```
//!
//! ## Feature Flags
//!
//! - `config`: YAML render configuration via serde
//! - `cli`: the `meshraster` command-line renderer (default)
//!
//! [`PixelSink`]: framebuffer::PixelSink
//! [`Framebuffer`]: framebuffer::Framebuffer

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// BGRA colors and HSL conversion.
pub mod color;

/// Pixel sinks and the packed BGRA framebuffer.
pub mod framebuffer;

/// Screen and object-space points, segments and triangles.
pub mod geometry;

/// Orthographic object-to-screen projection.
pub mod projection;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Line and triangle rasterization.
pub mod render;

/// Triangle meshes and OBJ loading.
pub mod mesh;

/// Mesh render driver.
pub mod renderer;

/// Render configuration.
pub mod config;

/// Output encoders (TGA, PNG).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for meshraster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust,ignore
/// use meshraster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Bgra;
    pub use crate::config::{FaceColoring, RenderConfig, RenderMode};
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::{Framebuffer, PixelSink};
    pub use crate::geometry::{ObjectPoint, ScreenPoint, Segment, Triangle};
    pub use crate::mesh::{Mesh, MeshSource};
    pub use crate::output::{ImageFormat, PngEncoder, TgaEncoder};
    pub use crate::projection::{project_to_screen, OrthoProjector};
    pub use crate::render::{draw_line, draw_triangle_outline, fill_triangle, Drawable};
    pub use crate::renderer::{RenderStats, Renderer};
}

// ============================================================================
// Tests
// ============================================================================
