//! Gradline Core
//!
//! Renders a polyline as a stroke filled with a multi-color gradient,
//! optionally outlined by a solid border:
//!
//! - **Path building**: projected points become one open move-to/line-to chain
//! - **Stop placement**: `N` colors get `N` evenly spaced stops starting at 0
//! - **Border**: a round-jointed stroke at twice the zoom-compensated width
//! - **Gradient fill**: a linear gradient across the path's bounding box,
//!   clipped to the stroked outline of the path
//!
//! The host supplies the projection and the drawing surface and calls
//! [`GradientPathRenderer::draw`] once per frame.
//!
//! # Example
//!
//! ```rust
//! use gradline_core::{GradientPathRenderer, MapPoint, RenderConfig};
//! use gradline_paint::{Color, PaintContext, Rect};
//!
//! let points = vec![
//!     MapPoint::new(0.0, 0.0),
//!     MapPoint::new(10.0, 0.0),
//!     MapPoint::new(10.0, 10.0),
//! ];
//! let mut renderer = GradientPathRenderer::new(points, vec![Color::RED, Color::BLUE])
//!     .with_config(RenderConfig::new().with_line_width(4.0));
//!
//! let mut ctx = PaintContext::new();
//! let report = renderer.draw(Rect::new(0.0, 0.0, 100.0, 100.0), 2.0, &mut ctx);
//!
//! assert_eq!(report.base_width, Some(2.0));
//! assert!(report.fill.is_drawn());
//! ```

pub mod border;
pub mod color;
pub mod config;
pub mod error;
pub mod fill;
pub mod path_builder;
pub mod projection;
pub mod renderer;
pub mod stops;

pub use color::HostColor;
pub use config::RenderConfig;
pub use error::{ErrorKind, RenderError, Result};
pub use projection::{IdentityProjector, MapPoint, PointProjector};
pub use renderer::{DrawReport, GradientPathRenderer, StepOutcome};
