//! Paint context - the main drawing API

use std::ops::{Deref, DerefMut};

use crate::color::Color;
use crate::gradient::Gradient;
use crate::outline::StrokeOutline;
use crate::path::{Path, Point};
use crate::primitives::Rect;

/// Fill style for shapes
#[derive(Clone, Debug, PartialEq)]
pub enum FillStyle {
    Color(Color),
    Gradient(Gradient),
}

impl From<Color> for FillStyle {
    fn from(color: Color) -> Self {
        FillStyle::Color(color)
    }
}

impl From<Gradient> for FillStyle {
    fn from(gradient: Gradient) -> Self {
        FillStyle::Gradient(gradient)
    }
}

/// Stroke style
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
        }
    }
}

impl StrokeStyle {
    /// Round-capped, round-joined stroke of the given width
    pub fn round(width: f32) -> Self {
        Self {
            width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Default::default()
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// A paint command for the renderer
#[derive(Clone, Debug, PartialEq)]
pub enum PaintCommand {
    StrokePath { path: Path, style: StrokeStyle },
    FillRect { rect: Rect, style: FillStyle },
    PushClip { outline: StrokeOutline },
    PopClip,
}

/// 2D affine transform
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform2D {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2D {
    pub const fn identity() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }

    pub fn translate(x: f32, y: f32) -> Self {
        Self {
            e: x,
            f: y,
            ..Self::identity()
        }
    }

    pub fn scale(sx: f32, sy: f32) -> Self {
        Self {
            a: sx,
            d: sy,
            ..Self::identity()
        }
    }

    pub fn scale_uniform(s: f32) -> Self {
        Self::scale(s, s)
    }

    /// Apply `self` first, then `next`
    pub fn then(&self, next: &Transform2D) -> Self {
        Self {
            a: self.a * next.a + self.b * next.c,
            b: self.a * next.b + self.b * next.d,
            c: self.c * next.a + self.d * next.c,
            d: self.c * next.b + self.d * next.d,
            e: self.e * next.a + self.f * next.c + next.e,
            f: self.e * next.b + self.f * next.d + next.f,
        }
    }

    pub fn transform_point(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    /// Uniform scale factor, exact for similarity transforms
    pub fn scale_factor(&self) -> f32 {
        (self.a * self.d - self.b * self.c).abs().sqrt()
    }
}

/// Drawing surface the renderer paints into.
///
/// Clips nest: every `push_clip_outline` intersects with the clips already
/// active and is undone by exactly one `pop_clip`.
pub trait DrawContext {
    fn stroke_path(&mut self, path: &Path, style: &StrokeStyle);

    fn fill_rect(&mut self, rect: Rect, style: FillStyle);

    fn push_clip_outline(&mut self, outline: StrokeOutline);

    fn pop_clip(&mut self);

    /// Number of clips currently pushed
    fn clip_depth(&self) -> usize;
}

/// Keeps a clip pushed for as long as the guard lives
pub struct ClipGuard<'a, C: DrawContext + ?Sized> {
    ctx: &'a mut C,
}

impl<'a, C: DrawContext + ?Sized> ClipGuard<'a, C> {
    pub fn push(ctx: &'a mut C, outline: StrokeOutline) -> Self {
        ctx.push_clip_outline(outline);
        Self { ctx }
    }
}

impl<C: DrawContext + ?Sized> Deref for ClipGuard<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.ctx
    }
}

impl<C: DrawContext + ?Sized> DerefMut for ClipGuard<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.ctx
    }
}

impl<C: DrawContext + ?Sized> Drop for ClipGuard<'_, C> {
    fn drop(&mut self) {
        self.ctx.pop_clip();
    }
}

/// A draw context that records commands for later execution
pub struct PaintContext {
    commands: Vec<PaintCommand>,
    clip_depth: usize,
}

impl PaintContext {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            clip_depth: 0,
        }
    }

    /// Get all recorded commands
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Take ownership of recorded commands
    pub fn take_commands(&mut self) -> Vec<PaintCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Default for PaintContext {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawContext for PaintContext {
    fn stroke_path(&mut self, path: &Path, style: &StrokeStyle) {
        self.commands.push(PaintCommand::StrokePath {
            path: path.clone(),
            style: style.clone(),
        });
    }

    fn fill_rect(&mut self, rect: Rect, style: FillStyle) {
        self.commands.push(PaintCommand::FillRect { rect, style });
    }

    fn push_clip_outline(&mut self, outline: StrokeOutline) {
        self.clip_depth += 1;
        self.commands.push(PaintCommand::PushClip { outline });
    }

    fn pop_clip(&mut self) {
        if self.clip_depth == 0 {
            tracing::warn!("pop_clip called with no clip pushed");
            return;
        }
        self.clip_depth -= 1;
        self.commands.push(PaintCommand::PopClip);
    }

    fn clip_depth(&self) -> usize {
        self.clip_depth
    }
}
