//! End-to-end rendering through the recording paint context
//!
//! These tests drive the renderer the way a host does (construct, draw per
//! frame, invalidate on projection change) and inspect the recorded commands.

use gradline_core::{GradientPathRenderer, MapPoint, RenderConfig, StepOutcome};
use gradline_paint::{
    Color, FillStyle, Gradient, PaintCommand, PaintContext, Point, Rect, StrokeOutline,
};

fn elbow() -> Vec<MapPoint> {
    vec![
        MapPoint::new(0.0, 0.0),
        MapPoint::new(10.0, 0.0),
        MapPoint::new(10.0, 10.0),
    ]
}

fn viewport() -> Rect {
    Rect::new(-50.0, -50.0, 100.0, 100.0)
}

fn rgb_renderer() -> GradientPathRenderer {
    GradientPathRenderer::new(elbow(), vec![Color::RED, Color::GREEN, Color::BLUE])
        .with_config(RenderConfig::new().with_line_width(4.0))
}

fn split_fill(commands: &[PaintCommand]) -> (&StrokeOutline, Rect, &Gradient) {
    let [
        PaintCommand::PushClip { outline },
        PaintCommand::FillRect { rect, style },
        PaintCommand::PopClip,
    ] = commands
    else {
        panic!("expected clip, fill, pop; got {commands:?}");
    };
    let FillStyle::Gradient(gradient) = style else {
        panic!("expected a gradient fill");
    };
    (outline, *rect, gradient)
}

#[test]
fn test_three_color_elbow() {
    let mut renderer = rgb_renderer();
    let mut ctx = PaintContext::new();

    let report = renderer.draw(viewport(), 2.0, &mut ctx);

    assert_eq!(report.base_width, Some(2.0));
    assert_eq!(report.border, StepOutcome::Disabled);
    assert_eq!(report.fill, StepOutcome::Drawn);

    assert_eq!(renderer.path().segment_count(), 2);
    assert_eq!(renderer.bounds(), Some(Rect::new(0.0, 0.0, 10.0, 10.0)));

    let (outline, rect, gradient) = split_fill(ctx.commands());
    let Gradient::Linear {
        start, end, stops, ..
    } = gradient;

    assert_eq!(*start, Point::new(0.0, 0.0));
    assert_eq!(*end, Point::new(10.0, 10.0));

    let offsets: Vec<f32> = stops.iter().map(|s| s.offset).collect();
    let colors: Vec<Color> = stops.iter().map(|s| s.color).collect();
    assert_eq!(colors, vec![Color::RED, Color::GREEN, Color::BLUE]);
    for (got, want) in offsets.iter().zip([0.0f32, 1.0 / 3.0, 2.0 / 3.0]) {
        assert!((got - want).abs() < 1e-6, "{got} != {want}");
    }

    // 2-unit stroke: one unit either side of the path
    assert!(outline.contains(Point::new(5.0, 0.9)));
    assert!(!outline.contains(Point::new(5.0, 1.2)));
    assert!(!outline.contains(Point::new(5.0, 5.0)));
    assert_eq!(rect, outline.bounds());
    assert!((rect.min().x - -1.0).abs() < 0.1);
    assert!((rect.max().y - 11.0).abs() < 0.1);
}

#[test]
fn test_border_is_below_fill_and_doubled() {
    let mut renderer = GradientPathRenderer::new(elbow(), vec![Color::RED, Color::BLUE])
        .with_config(RenderConfig::new().with_line_width(4.0).with_border(true));
    let mut ctx = PaintContext::new();

    let report = renderer.draw(viewport(), 2.0, &mut ctx);
    assert!(report.border.is_drawn());

    let commands = ctx.commands();
    let PaintCommand::StrokePath { style, .. } = &commands[0] else {
        panic!("border must be painted first");
    };
    assert_eq!(style.width, 2.0 * report.base_width.unwrap());
    assert_eq!(style.color, Color::WHITE);

    split_fill(&commands[1..]);
}

#[test]
fn test_zoom_changes_only_width() {
    let mut renderer = rgb_renderer();

    let mut near = PaintContext::new();
    let mut far = PaintContext::new();
    let near_report = renderer.draw(viewport(), 4.0, &mut near);
    let far_report = renderer.draw(viewport(), 2.0, &mut far);

    assert_eq!(near_report.base_width, Some(1.0));
    assert_eq!(far_report.base_width, Some(2.0));

    let (near_outline, _, near_gradient) = split_fill(near.commands());
    let (far_outline, _, far_gradient) = split_fill(far.commands());
    assert_eq!(near_gradient, far_gradient);
    assert!(near_outline.bounds().width < far_outline.bounds().width);
}

#[test]
fn test_rebuild_is_idempotent() {
    let mut renderer = rgb_renderer();
    renderer.rebuild_path();
    let first = renderer.path().clone();
    renderer.rebuild_path();
    assert_eq!(renderer.path(), &first);
    assert_eq!(renderer.path().point_count(), elbow().len());
}

#[test]
fn test_projection_change_moves_gradient() {
    let mut renderer = rgb_renderer();
    let mut ctx = PaintContext::new();
    renderer.draw(viewport(), 1.0, &mut ctx);

    renderer.set_projector(|p: MapPoint| Point::new(p.x as f32 - 5.0, p.y as f32 - 5.0));
    let mut moved = PaintContext::new();
    renderer.draw(viewport(), 1.0, &mut moved);

    let (_, _, gradient) = split_fill(moved.commands());
    let Gradient::Linear { start, end, .. } = gradient;
    assert_eq!(*start, Point::new(-5.0, -5.0));
    assert_eq!(*end, Point::new(5.0, 5.0));
}

#[test]
fn test_closed_loop_stays_open() {
    let mut points = elbow();
    points.push(MapPoint::new(0.0, 0.0));
    let mut renderer = GradientPathRenderer::new(points, vec![Color::RED]);
    renderer.rebuild_path();

    assert_eq!(renderer.path().point_count(), 4);
    assert_eq!(renderer.path().segment_count(), 3);
}

#[test]
fn test_single_color_is_flat_fill() {
    let mut renderer = GradientPathRenderer::new(elbow(), vec![Color::GREEN]);
    let mut ctx = PaintContext::new();
    renderer.draw(viewport(), 1.0, &mut ctx);

    let (_, _, gradient) = split_fill(ctx.commands());
    assert_eq!(gradient.stops().len(), 1);
    assert_eq!(gradient.stops()[0].offset, 0.0);
    assert_eq!(gradient.color_at(0.0), Some(Color::GREEN));
    assert_eq!(gradient.color_at(1.0), Some(Color::GREEN));
}

#[test]
fn test_empty_sequence_draws_nothing() {
    let mut renderer = GradientPathRenderer::new(Vec::<MapPoint>::new(), vec![Color::RED]);
    let mut ctx = PaintContext::new();
    let report = renderer.draw(viewport(), 1.0, &mut ctx);

    assert!(renderer.path().is_empty());
    assert!(!report.fill.is_drawn());
    assert!(ctx.commands().is_empty());
}
