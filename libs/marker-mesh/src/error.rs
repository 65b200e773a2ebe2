//! # Mesh Errors
//!
//! Error types for solid construction, text layout and export.

use thiserror::Error;

/// Errors that can occur while building or exporting geometry.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A primitive was given parameters that enclose no volume.
    #[error("invalid {primitive}: {message}")]
    InvalidPrimitive {
        /// Primitive name
        primitive: &'static str,
        /// What was wrong
        message: String,
    },

    /// The block font has no glyph for this character.
    #[error("unsupported character {0:?} in engraved text")]
    UnsupportedGlyph(char),

    /// Export was asked for a mesh without triangles.
    #[error("mesh has no triangles")]
    EmptyMesh,

    /// Writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MeshError {
    /// Creates an invalid primitive error.
    pub fn invalid_primitive(primitive: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidPrimitive {
            primitive,
            message: message.into(),
        }
    }
}

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;
