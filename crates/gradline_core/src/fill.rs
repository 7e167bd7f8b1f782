//! Gradient fill clipped to the stroke outline
//!
//! A plain linear gradient is painted over a rectangle, but the context is
//! clipped to the stroked outline of the path first, so only the pixels a
//! stroke would cover receive paint. The gradient axis is the diagonal of the
//! path's bounding box, from its minimum corner to its maximum corner.

use gradline_paint::{
    ClipGuard, Color, DrawContext, Gradient, Path, Point, StrokeOutline, StrokeStyle,
};

use crate::error::{RenderError, Result};
use crate::stops;

/// Start and end of the gradient axis: the bounding-box corners of `path`
pub fn gradient_axis(path: &Path) -> Option<(Point, Point)> {
    path.bounds().map(|b| (b.min(), b.max()))
}

/// Paint `colors` along `path` as a gradient clipped to a `base_width` stroke.
///
/// The clip is popped before returning, whether or not painting succeeded.
pub fn fill_gradient(
    ctx: &mut dyn DrawContext,
    path: &Path,
    base_width: f32,
    colors: &[Color],
    stop_positions: &[f32],
) -> Result<()> {
    if colors.is_empty() {
        return Err(RenderError::EmptyColorList);
    }
    if stop_positions.len() != colors.len() {
        return Err(RenderError::StopCountMismatch {
            stops: stop_positions.len(),
            colors: colors.len(),
        });
    }
    if path.segment_count() == 0 {
        return Err(RenderError::DegeneratePath(path.point_count()));
    }
    if let Some(index) = path.first_non_finite() {
        return Err(RenderError::NonFinitePoint(index));
    }
    let (start, end) = gradient_axis(path).ok_or(RenderError::DegeneratePath(0))?;

    let outline = StrokeOutline::from_path(path, &StrokeStyle::round(base_width))?;
    let paint_rect = outline.bounds();
    let gradient = Gradient::linear(start, end, stops::pair(stop_positions, colors));

    tracing::trace!(
        ?start,
        ?end,
        stops = colors.len(),
        triangles = outline.triangle_count(),
        "filling gradient"
    );

    let mut clipped = ClipGuard::push(&mut *ctx, outline);
    clipped.fill_rect(paint_rect, gradient.into());
    Ok(())
}
