//! Gradline Paint API
//!
//! The drawing vocabulary shared by the gradient path renderer and its hosts.
//!
//! # Features
//!
//! - Open polyline paths built from move-to/line-to commands
//! - Linear gradients with evenly placed stops and pad extension
//! - Stroked outlines (lyon tessellation) usable as clip regions
//! - Outline vertices as `bytemuck::Pod` data; `StrokeOutline::vertex_bytes`
//!   hands GPU hosts a vertex buffer without copying
//! - A `DrawContext` seam with a command-recording implementation
//! - Scoped clipping that is always reverted

pub mod color;
pub mod context;
pub mod error;
pub mod gradient;
pub mod outline;
pub mod path;
pub mod primitives;

pub use color::Color;
pub use context::{
    ClipGuard, DrawContext, FillStyle, LineCap, LineJoin, PaintCommand, PaintContext, StrokeStyle,
    Transform2D,
};
pub use error::{PaintError, Result};
pub use gradient::{Gradient, GradientExtend, GradientStop};
pub use outline::{OutlineVertex, StrokeOutline};
pub use path::{Path, PathBuilder, PathCommand, Point};
pub use primitives::Rect;
