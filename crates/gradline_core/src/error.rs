//! Renderer error types

use gradline_paint::PaintError;
use thiserror::Error;

/// Errors raised while configuring or drawing a gradient path.
///
/// None of these abort a frame: the renderer skips the affected step and
/// reports the error in its [`DrawReport`](crate::DrawReport).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// A gradient needs at least one color
    #[error("Invalid configuration: color list is empty")]
    EmptyColorList,

    /// Stops and colors must pair 1:1
    #[error("Invalid configuration: {stops} stops for {colors} colors")]
    StopCountMismatch { stops: usize, colors: usize },

    /// Host color that cannot be normalized to RGBA
    #[error("Invalid configuration: unsupported color {0}")]
    UnsupportedColor(String),

    /// Zoom scale must be finite and positive
    #[error("Invalid configuration: zoom scale {0}")]
    InvalidZoomScale(f32),

    /// Line width must be finite and positive
    #[error("Invalid configuration: line width {0}")]
    InvalidLineWidth(f32),

    /// The projector produced a NaN or infinite coordinate for point `index`
    #[error("Invalid configuration: projected point {0} is not finite")]
    NonFinitePoint(usize),

    /// Fewer than two points, nothing to stroke
    #[error("Degenerate path: {0} point(s)")]
    DegeneratePath(usize),

    /// Failure in the paint layer
    #[error(transparent)]
    Paint(#[from] PaintError),
}

/// Coarse classification of a [`RenderError`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidConfiguration,
    DegeneratePath,
    Backend,
}

impl RenderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RenderError::EmptyColorList
            | RenderError::StopCountMismatch { .. }
            | RenderError::UnsupportedColor(_)
            | RenderError::InvalidZoomScale(_)
            | RenderError::InvalidLineWidth(_)
            | RenderError::NonFinitePoint(_)
            | RenderError::Paint(PaintError::InvalidStrokeWidth(_))
            | RenderError::Paint(PaintError::NonFinitePoint(_)) => {
                ErrorKind::InvalidConfiguration
            }
            RenderError::DegeneratePath(_) | RenderError::Paint(PaintError::EmptyPath) => {
                ErrorKind::DegeneratePath
            }
            RenderError::Paint(PaintError::Tessellation(_)) => ErrorKind::Backend,
        }
    }
}

/// Result type for renderer operations
pub type Result<T> = std::result::Result<T, RenderError>;
