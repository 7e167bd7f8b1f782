//! Border stroking and zoom-compensated widths

use gradline_paint::{Color, DrawContext, Path, StrokeStyle};

use crate::error::{RenderError, Result};

/// Border stroke width relative to the base width
pub const BORDER_WIDTH_FACTOR: f32 = 2.0;

/// Border color used when none is configured
pub const DEFAULT_BORDER_COLOR: Color = Color::WHITE;

/// Stroke width in drawing space for the current zoom.
///
/// The drawing space is scaled by `zoom_scale` on screen, so dividing keeps
/// the on-screen width constant across zoom levels.
pub fn base_width(line_width: f32, zoom_scale: f32) -> Result<f32> {
    if !zoom_scale.is_finite() || zoom_scale <= 0.0 {
        return Err(RenderError::InvalidZoomScale(zoom_scale));
    }
    if !line_width.is_finite() || line_width <= 0.0 {
        return Err(RenderError::InvalidLineWidth(line_width));
    }
    Ok(line_width / zoom_scale)
}

pub fn resolve_border_color(color: Option<Color>) -> Color {
    color.unwrap_or(DEFAULT_BORDER_COLOR)
}

/// Style of the border: twice the base width, round joins and caps
pub fn border_style(base_width: f32, color: Color) -> StrokeStyle {
    StrokeStyle::round(base_width * BORDER_WIDTH_FACTOR).with_color(color)
}

/// Stroke the border beneath the gradient.
///
/// Leaves the path and the context's clip state untouched.
pub fn stroke_border(
    ctx: &mut dyn DrawContext,
    path: &Path,
    base_width: f32,
    border_color: Option<Color>,
) -> Result<()> {
    if path.segment_count() == 0 {
        return Err(RenderError::DegeneratePath(path.point_count()));
    }
    if let Some(index) = path.first_non_finite() {
        return Err(RenderError::NonFinitePoint(index));
    }
    let style = border_style(base_width, resolve_border_color(border_color));
    ctx.stroke_path(path, &style);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradline_paint::{LineCap, LineJoin, PaintCommand, PaintContext, PathBuilder};

    fn line() -> Path {
        PathBuilder::new().move_to(0.0, 0.0).line_to(5.0, 5.0).build()
    }

    #[test]
    fn test_base_width_inverse_to_zoom() {
        let w1 = base_width(4.0, 1.0).unwrap();
        let w2 = base_width(4.0, 2.0).unwrap();
        assert_eq!(w1, 4.0);
        assert_eq!(w2, w1 / 2.0);
        assert_eq!(base_width(4.0, 0.5).unwrap(), 8.0);
    }

    #[test]
    fn test_base_width_rejects_bad_input() {
        assert_eq!(base_width(4.0, 0.0), Err(RenderError::InvalidZoomScale(0.0)));
        assert!(base_width(4.0, f32::NAN).is_err());
        assert_eq!(base_width(-1.0, 1.0), Err(RenderError::InvalidLineWidth(-1.0)));
    }

    #[test]
    fn test_border_is_double_width_white_by_default() {
        let mut ctx = PaintContext::new();
        stroke_border(&mut ctx, &line(), 3.0, None).unwrap();

        match &ctx.commands()[0] {
            PaintCommand::StrokePath { path, style } => {
                assert_eq!(*path, line());
                assert_eq!(style.width, 6.0);
                assert_eq!(style.color, Color::WHITE);
                assert_eq!(style.line_cap, LineCap::Round);
                assert_eq!(style.line_join, LineJoin::Round);
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(ctx.clip_depth(), 0);
    }

    #[test]
    fn test_border_uses_configured_color() {
        let mut ctx = PaintContext::new();
        stroke_border(&mut ctx, &line(), 1.0, Some(Color::BLACK)).unwrap();
        let PaintCommand::StrokePath { style, .. } = &ctx.commands()[0] else {
            panic!("expected a stroke");
        };
        assert_eq!(style.color, Color::BLACK);
    }

    #[test]
    fn test_degenerate_path_draws_nothing() {
        let mut ctx = PaintContext::new();
        let single = PathBuilder::new().move_to(1.0, 1.0).build();
        assert_eq!(
            stroke_border(&mut ctx, &single, 1.0, None),
            Err(RenderError::DegeneratePath(1))
        );
        assert!(ctx.commands().is_empty());
    }
}
