//! Paint error types

use thiserror::Error;

/// Errors raised while preparing paint geometry
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PaintError {
    /// The path has no segments to stroke
    #[error("Path has no segments to stroke")]
    EmptyPath,

    /// Stroke width must be finite and positive
    #[error("Invalid stroke width: {0}")]
    InvalidStrokeWidth(f32),

    /// Path point `index` has a NaN or infinite coordinate
    #[error("Path point {0} is not finite")]
    NonFinitePoint(usize),

    /// lyon rejected the geometry
    #[error("Stroke tessellation failed: {0}")]
    Tessellation(String),
}

/// Result type for paint operations
pub type Result<T> = std::result::Result<T, PaintError>;
