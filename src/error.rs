//! Error types for meshraster operations.
//!
//! The rasterization core never fails; errors only come from loading meshes,
//! allocating framebuffers, encoding images and reading configuration.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in meshraster operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Image codec error (TGA encoding).
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    /// Invalid dimensions for a framebuffer or viewport.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Malformed record in a mesh file.
    #[error("Mesh parse error on line {line}: {message}")]
    MeshParse {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// Face refers to a vertex that does not exist.
    #[error("Face index {index} on line {line} is out of range ({vertex_count} vertices)")]
    FaceIndex {
        /// 1-based line number (face number for meshes built in memory).
        line: usize,
        /// Index as written in the file.
        index: i64,
        /// Number of vertices declared so far.
        vertex_count: usize,
    },

    /// Mesh contains no faces.
    #[error("Mesh contains no faces")]
    EmptyMesh,

    /// Color parsing error.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Render mode name not recognized.
    #[error("Unknown render mode: {0}")]
    UnknownMode(String),

    /// Output path has an extension no encoder handles.
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// Configuration file could not be parsed.
    #[cfg(feature = "config")]
    #[error("Configuration error: {0}")]
    Config(#[from] serde_yaml_ng::Error),
}
