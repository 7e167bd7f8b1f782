//! Scene rendering
//!
//! Projects the route with Web Mercator and fits it to the canvas, records
//! one frame of the gradient path renderer, then rasterizes the recording.

use anyhow::{Context, Result};
use gradline_core::{DrawReport, GradientPathRenderer, HostColor, MapPoint, RenderConfig};
use gradline_paint::{PaintContext, Rect, Transform2D};
use image::RgbaImage;

use crate::config::SceneConfig;
use crate::mercator::{wgs84_to_mercator, FitProjector};
use crate::raster::Canvas;

/// A rendered frame
pub struct Frame {
    pub image: RgbaImage,
    pub report: DrawReport,
}

/// Render `scene`, optionally overriding its zoom
pub fn render_scene(scene: &SceneConfig, zoom: Option<f32>) -> Result<Frame> {
    let zoom = zoom.unwrap_or(scene.view.zoom);
    anyhow::ensure!(
        zoom.is_finite() && zoom > 0.0,
        "zoom must be a positive number, got {zoom}"
    );

    let (width, height) = (scene.canvas.width, scene.canvas.height);
    let background = HostColor::from(scene.canvas.background.as_str())
        .normalize()
        .context("Invalid canvas background")?;
    let border_color = scene
        .style
        .border_color
        .as_deref()
        .map(|hex| HostColor::from(hex).normalize())
        .transpose()
        .context("Invalid border color")?;

    let points: Vec<MapPoint> = scene
        .route
        .points
        .iter()
        .map(|&[lat, lon]| wgs84_to_mercator(lat, lon))
        .collect();
    let projector = FitProjector::fit(&points, width, height, scene.canvas.padding);
    tracing::debug!(pixels_per_meter = projector.scale(), "fitted route to canvas");

    let config = RenderConfig {
        line_width: scene.style.line_width,
        shows_border: scene.style.shows_border,
        border_color,
    };
    let mut renderer =
        GradientPathRenderer::from_host_colors(points, scene.style.colors.iter().map(String::as_str))
            .context("Invalid route colors")?
            .with_config(config)
            .with_projector(projector);

    // Zoom about the canvas center; drawing space is canvas pixels at zoom 1
    let (cx, cy) = (width as f32 / 2.0, height as f32 / 2.0);
    let transform = Transform2D::translate(-cx, -cy)
        .then(&Transform2D::scale_uniform(zoom))
        .then(&Transform2D::translate(cx, cy));
    let (view_w, view_h) = (width as f32 / zoom, height as f32 / zoom);
    let viewport = Rect::new(cx - view_w / 2.0, cy - view_h / 2.0, view_w, view_h);

    tracing::debug!(width, height, zoom, points = renderer.points().len(), "rendering scene");

    let mut recording = PaintContext::new();
    let report = renderer.draw(viewport, zoom, &mut recording);

    for error in report.errors() {
        tracing::warn!(kind = ?error.kind(), "{error}");
    }

    let commands = recording.take_commands();
    tracing::debug!(commands = commands.len(), "rasterizing frame");
    let mut canvas = Canvas::new(width, height, background).with_transform(transform);
    canvas.replay(commands);

    Ok(Frame {
        image: canvas.into_image(),
        report,
    })
}
