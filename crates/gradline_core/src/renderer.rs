//! The gradient path renderer
//!
//! Owns the projected path cache and runs the per-frame pipeline: border
//! stroke (optional), then the clipped gradient fill.

use std::sync::Arc;

use gradline_paint::{Color, DrawContext, Path, Rect};

use crate::border;
use crate::color::{normalize_all, HostColor};
use crate::config::RenderConfig;
use crate::error::{RenderError, Result};
use crate::fill;
use crate::path_builder;
use crate::projection::{IdentityProjector, MapPoint, PointProjector};
use crate::stops;

/// What happened to one drawing step
#[derive(Clone, Debug, PartialEq)]
pub enum StepOutcome {
    /// Painted into the context
    Drawn,
    /// Turned off by configuration
    Disabled,
    /// The path lies outside the viewport
    Culled,
    /// Not painted because of the carried error
    Skipped(RenderError),
}

impl StepOutcome {
    pub fn is_drawn(&self) -> bool {
        matches!(self, StepOutcome::Drawn)
    }

    pub fn error(&self) -> Option<&RenderError> {
        match self {
            StepOutcome::Skipped(e) => Some(e),
            _ => None,
        }
    }
}

/// Outcome of a [`GradientPathRenderer::draw`] call
#[derive(Clone, Debug, PartialEq)]
pub struct DrawReport {
    /// Zoom-compensated stroke width, `None` when it could not be computed
    pub base_width: Option<f32>,
    pub border: StepOutcome,
    pub fill: StepOutcome,
}

impl DrawReport {
    fn skipped(error: RenderError, border_enabled: bool) -> Self {
        Self {
            base_width: None,
            border: if border_enabled {
                StepOutcome::Skipped(error.clone())
            } else {
                StepOutcome::Disabled
            },
            fill: StepOutcome::Skipped(error),
        }
    }

    /// Errors from every skipped step
    pub fn errors(&self) -> impl Iterator<Item = &RenderError> {
        self.border.error().into_iter().chain(self.fill.error())
    }
}

/// Renders a polyline as a gradient-filled stroke
pub struct GradientPathRenderer {
    points: Arc<[MapPoint]>,
    colors: Vec<Color>,
    config: RenderConfig,
    projector: Box<dyn PointProjector>,
    path: Path,
    bounds: Option<Rect>,
    needs_rebuild: bool,
}

impl GradientPathRenderer {
    pub fn new(points: impl Into<Arc<[MapPoint]>>, colors: Vec<Color>) -> Self {
        if colors.is_empty() {
            tracing::warn!("gradient path created without colors; fills will be skipped");
        }
        Self {
            points: points.into(),
            colors,
            config: RenderConfig::default(),
            projector: Box::new(IdentityProjector),
            path: Path::new(),
            bounds: None,
            needs_rebuild: true,
        }
    }

    pub fn with_border(
        points: impl Into<Arc<[MapPoint]>>,
        colors: Vec<Color>,
        shows_border: bool,
        border_color: Color,
    ) -> Self {
        let mut renderer = Self::new(points, colors);
        renderer.config.shows_border = shows_border;
        renderer.config.border_color = Some(border_color);
        renderer
    }

    /// Normalize host colors once, then construct
    pub fn from_host_colors<I>(points: impl Into<Arc<[MapPoint]>>, colors: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<HostColor>,
    {
        Ok(Self::new(points, normalize_all(colors)?))
    }

    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_projector(mut self, projector: impl PointProjector + 'static) -> Self {
        self.set_projector(projector);
        self
    }

    pub fn points(&self) -> &Arc<[MapPoint]> {
        &self.points
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Cached projected path; call [`rebuild_path`](Self::rebuild_path) first
    /// if inputs changed since the last draw
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Bounding box of the cached path
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    pub fn needs_rebuild(&self) -> bool {
        self.needs_rebuild
    }

    pub fn set_points(&mut self, points: impl Into<Arc<[MapPoint]>>) {
        self.points = points.into();
        self.needs_rebuild = true;
    }

    pub fn set_colors(&mut self, colors: Vec<Color>) {
        self.colors = colors;
    }

    pub fn set_config(&mut self, config: RenderConfig) {
        self.config = config;
    }

    /// Replace the projection; the path is rebuilt before the next draw
    pub fn set_projector(&mut self, projector: impl PointProjector + 'static) {
        self.projector = Box::new(projector);
        self.needs_rebuild = true;
    }

    /// Recompute the projected path and its bounding box
    pub fn rebuild_path(&mut self) {
        self.path = path_builder::project(&self.points, self.projector.as_ref());
        self.bounds = self.path.bounds();
        self.needs_rebuild = false;
        tracing::debug!(
            points = self.path.point_count(),
            segments = self.path.segment_count(),
            "rebuilt gradient path"
        );
    }

    /// Paint the path into `ctx`.
    ///
    /// `viewport` must be in the projector's drawing space, the same space
    /// as [`path`](Self::path); culling compares the two directly.
    ///
    /// Never fails: steps that cannot run are skipped and reported. A path
    /// with a NaN or infinite point is never tessellated.
    pub fn draw(
        &mut self,
        viewport: Rect,
        zoom_scale: f32,
        ctx: &mut dyn DrawContext,
    ) -> DrawReport {
        if self.needs_rebuild {
            self.rebuild_path();
        }

        let border_enabled = self.config.shows_border;
        let base_width = match border::base_width(self.config.line_width, zoom_scale) {
            Ok(width) => width,
            Err(e) => {
                tracing::warn!(error = %e, "skipping gradient path draw");
                return DrawReport::skipped(e, border_enabled);
            }
        };

        if let Some(index) = self.path.first_non_finite() {
            let e = RenderError::NonFinitePoint(index);
            tracing::warn!(error = %e, "skipping gradient path draw");
            return DrawReport {
                base_width: Some(base_width),
                ..DrawReport::skipped(e, border_enabled)
            };
        }

        let bounds = match self.bounds {
            Some(bounds) if self.path.segment_count() > 0 => bounds,
            _ => {
                let e = RenderError::DegeneratePath(self.path.point_count());
                tracing::debug!(error = %e, "nothing to draw");
                return DrawReport {
                    base_width: Some(base_width),
                    ..DrawReport::skipped(e, border_enabled)
                };
            }
        };

        // Half of the widest stroke that will be painted
        let reach = if border_enabled {
            base_width * border::BORDER_WIDTH_FACTOR / 2.0
        } else {
            base_width / 2.0
        };
        if !bounds.inflate(reach).intersects(&viewport) {
            tracing::trace!(?viewport, "gradient path outside viewport");
            return DrawReport {
                base_width: Some(base_width),
                border: if border_enabled {
                    StepOutcome::Culled
                } else {
                    StepOutcome::Disabled
                },
                fill: StepOutcome::Culled,
            };
        }

        tracing::debug!(zoom_scale, base_width, border_enabled, "drawing gradient path");

        let border = if border_enabled {
            outcome(border::stroke_border(
                ctx,
                &self.path,
                base_width,
                self.config.border_color,
            ))
        } else {
            StepOutcome::Disabled
        };

        let fill = outcome(
            stops::stop_positions(self.colors.len()).and_then(|positions| {
                fill::fill_gradient(ctx, &self.path, base_width, &self.colors, &positions)
            }),
        );

        DrawReport {
            base_width: Some(base_width),
            border,
            fill,
        }
    }
}

fn outcome(result: Result<()>) -> StepOutcome {
    match result {
        Ok(()) => StepOutcome::Drawn,
        Err(e) => {
            tracing::warn!(error = %e, kind = ?e.kind(), "gradient path step skipped");
            StepOutcome::Skipped(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradline_paint::{PaintCommand, PaintContext, Point};

    fn pts() -> Vec<MapPoint> {
        vec![
            MapPoint::new(0.0, 0.0),
            MapPoint::new(10.0, 0.0),
            MapPoint::new(10.0, 10.0),
        ]
    }

    fn everywhere() -> Rect {
        Rect::new(-1000.0, -1000.0, 2000.0, 2000.0)
    }

    #[test]
    fn test_draw_builds_path_lazily() {
        let mut r = GradientPathRenderer::new(pts(), vec![Color::RED, Color::BLUE]);
        assert!(r.needs_rebuild());
        assert!(r.path().is_empty());

        let mut ctx = PaintContext::new();
        let report = r.draw(everywhere(), 1.0, &mut ctx);

        assert!(!r.needs_rebuild());
        assert_eq!(r.path().segment_count(), 2);
        assert_eq!(report.border, StepOutcome::Disabled);
        assert_eq!(report.fill, StepOutcome::Drawn);
        assert_eq!(report.errors().count(), 0);
    }

    #[test]
    fn test_border_drawn_before_fill() {
        let mut r = GradientPathRenderer::with_border(pts(), vec![Color::RED], true, Color::BLACK);
        r.set_config(r.config().clone().with_line_width(3.0));
        let mut ctx = PaintContext::new();
        let report = r.draw(everywhere(), 1.0, &mut ctx);

        assert!(report.border.is_drawn());
        assert!(report.fill.is_drawn());
        let commands = ctx.commands();
        let PaintCommand::StrokePath { style, .. } = &commands[0] else {
            panic!("border must come first");
        };
        assert_eq!(style.width, 6.0);
        assert_eq!(style.color, Color::BLACK);
        assert!(matches!(commands[1], PaintCommand::PushClip { .. }));
    }

    #[test]
    fn test_set_projector_invalidates() {
        let mut r = GradientPathRenderer::new(pts(), vec![Color::RED]);
        r.rebuild_path();
        assert_eq!(r.bounds().unwrap().max(), Point::new(10.0, 10.0));

        r.set_projector(|p: MapPoint| Point::new(p.x as f32 * 2.0, p.y as f32 * 2.0));
        assert!(r.needs_rebuild());
        r.rebuild_path();
        assert_eq!(r.bounds().unwrap().max(), Point::new(20.0, 20.0));
    }

    #[test]
    fn test_culled_outside_viewport() {
        let mut r = GradientPathRenderer::new(pts(), vec![Color::RED]);
        let mut ctx = PaintContext::new();
        let report = r.draw(Rect::new(100.0, 100.0, 10.0, 10.0), 1.0, &mut ctx);
        assert_eq!(report.fill, StepOutcome::Culled);
        assert!(ctx.commands().is_empty());
    }

    #[test]
    fn test_stroke_reach_counts_toward_visibility() {
        let mut r = GradientPathRenderer::new(pts(), vec![Color::RED])
            .with_config(RenderConfig::new().with_line_width(4.0));
        let mut ctx = PaintContext::new();
        // Viewport starts 1.5 units right of the path, inside the 2-unit half width
        let report = r.draw(Rect::new(11.5, 0.0, 10.0, 10.0), 1.0, &mut ctx);
        assert!(report.fill.is_drawn());
    }

    #[test]
    fn test_invalid_zoom_draws_nothing() {
        let mut r = GradientPathRenderer::new(pts(), vec![Color::RED]);
        let mut ctx = PaintContext::new();
        let report = r.draw(everywhere(), 0.0, &mut ctx);
        assert_eq!(report.base_width, None);
        assert_eq!(
            report.fill,
            StepOutcome::Skipped(RenderError::InvalidZoomScale(0.0))
        );
        assert!(ctx.commands().is_empty());
    }

    #[test]
    fn test_empty_colors_keep_border() {
        let mut r = GradientPathRenderer::with_border(pts(), Vec::new(), true, Color::BLACK);
        let mut ctx = PaintContext::new();
        let report = r.draw(everywhere(), 1.0, &mut ctx);

        assert!(report.border.is_drawn());
        assert_eq!(
            report.fill,
            StepOutcome::Skipped(RenderError::EmptyColorList)
        );
        assert_eq!(ctx.commands().len(), 1);
        assert_eq!(ctx.clip_depth(), 0);
    }

    #[test]
    fn test_single_point_is_degenerate() {
        let mut r = GradientPathRenderer::with_border(
            vec![MapPoint::new(1.0, 1.0)],
            vec![Color::RED],
            true,
            Color::BLACK,
        );
        let mut ctx = PaintContext::new();
        let report = r.draw(everywhere(), 1.0, &mut ctx);

        let degenerate = StepOutcome::Skipped(RenderError::DegeneratePath(1));
        assert_eq!(report.fill, degenerate);
        assert_eq!(report.border, degenerate);
        assert!(ctx.commands().is_empty());
    }

    #[test]
    fn test_nan_projection_is_skipped() {
        let mut r = GradientPathRenderer::with_border(pts(), vec![Color::RED], true, Color::BLACK)
            .with_projector(|p: MapPoint| {
                if p.x == 10.0 && p.y == 0.0 {
                    Point::new(f32::NAN, f32::NAN)
                } else {
                    Point::new(p.x as f32, p.y as f32)
                }
            });
        let mut ctx = PaintContext::new();
        let report = r.draw(everywhere(), 1.0, &mut ctx);

        let skipped = StepOutcome::Skipped(RenderError::NonFinitePoint(1));
        assert_eq!(report.border, skipped);
        assert_eq!(report.fill, skipped);
        assert_eq!(report.base_width, Some(1.0));
        assert!(ctx.commands().is_empty());
    }

    #[test]
    fn test_f32_overflow_is_skipped() {
        let points = vec![MapPoint::new(0.0, 0.0), MapPoint::new(1e39, 0.0)];
        let mut r = GradientPathRenderer::new(points, vec![Color::RED]);
        let mut ctx = PaintContext::new();
        let report = r.draw(everywhere(), 1.0, &mut ctx);

        assert_eq!(
            report.fill,
            StepOutcome::Skipped(RenderError::NonFinitePoint(1))
        );
        assert_eq!(report.border, StepOutcome::Disabled);
        assert_eq!(
            report.fill.error().map(RenderError::kind),
            Some(crate::ErrorKind::InvalidConfiguration)
        );
        assert!(ctx.commands().is_empty());
    }

    #[test]
    fn test_host_colors() {
        let r = GradientPathRenderer::from_host_colors(pts(), ["#ff0000", "#0000ff"]).unwrap();
        assert_eq!(r.colors(), &[Color::RED, Color::BLUE]);

        let err = GradientPathRenderer::from_host_colors(pts(), ["#ff0000", "blue"]).err();
        assert!(matches!(err, Some(RenderError::UnsupportedColor(_))));
    }
}
