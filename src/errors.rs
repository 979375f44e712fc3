//! Error Types
//!
//! This module defines the error types used throughout the preview core.
//!
//! # Overview
//!
//! The per-frame entry points (standards lookup, viewport queries, cache
//! lookups, LOD selection, material lookup) are total and never return an
//! error. [`DrapeError`] only covers the construction boundaries that accept
//! raw caller data:
//! - Building a [`MeshBuffer`](crate::resources::MeshBuffer) from raw arrays
//! - Parsing and validating [`PreviewSettings`](crate::settings::PreviewSettings)
//!
//! # Usage
//!
//! ```rust,ignore
//! use drape::errors::{DrapeError, Result};
//!
//! fn build_mesh() -> Result<MeshBuffer> {
//!     MeshBuffer::from_arrays("panel", &positions, None, None, Some(&indices))
//! }
//! ```

use thiserror::Error;

/// The main error type for the preview core.
#[derive(Error, Debug)]
pub enum DrapeError {
    // ========================================================================
    // Mesh Construction Errors
    // ========================================================================
    /// The index buffer length is not a multiple of three.
    #[error("Index count {0} is not a multiple of 3")]
    IndexCountNotTriangles(usize),

    /// An index refers past the end of the vertex buffer.
    #[error("Index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        /// The offending index value
        index: u32,
        /// Number of vertices in the position attribute
        vertex_count: usize,
    },

    /// A non-indexed mesh whose vertex count is not a multiple of three.
    #[error("Vertex count {0} is not a multiple of 3 for a non-indexed mesh")]
    VertexCountNotTriangles(usize),

    /// An optional attribute does not match the position count.
    #[error("Attribute '{name}' has {actual} elements, expected {expected}")]
    AttributeLengthMismatch {
        /// Attribute name
        name: &'static str,
        /// Expected element count (the position count)
        expected: usize,
        /// Actual element count
        actual: usize,
    },

    // ========================================================================
    // Settings Errors
    // ========================================================================
    /// JSON parsing error while reading settings.
    #[error("Settings parse error: {0}")]
    Settings(#[from] serde_json::Error),

    /// A settings value is outside its valid range.
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

/// Alias for `Result<T, DrapeError>`.
pub type Result<T> = std::result::Result<T, DrapeError>;
