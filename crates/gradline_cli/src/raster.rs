//! Software draw context
//!
//! Paints immediately into an RGBA pixel buffer. Every pixel carries four
//! coverage samples; clips are per-pixel sample masks intersected as they
//! are pushed.

use gradline_paint::outline::triangle_contains;
use gradline_paint::{
    Color, DrawContext, FillStyle, PaintCommand, Path, Point, Rect, StrokeOutline, StrokeStyle,
    Transform2D,
};
use image::{Rgba, RgbaImage};

/// Sample offsets within a pixel (2x2 grid)
const SAMPLES: [(f32, f32); 4] = [(0.25, 0.25), (0.75, 0.25), (0.25, 0.75), (0.75, 0.75)];
const FULL: u8 = 0b1111;

/// Pixel range `[x0, x1) x [y0, y1)` touched by a shape
#[derive(Clone, Copy, Debug)]
struct Span {
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
}

pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
    /// Drawing space to pixel space
    transform: Transform2D,
    clips: Vec<Vec<u8>>,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![background; width as usize * height as usize],
            transform: Transform2D::identity(),
            clips: Vec::new(),
        }
    }

    pub fn with_transform(mut self, transform: Transform2D) -> Self {
        self.transform = transform;
        self
    }

    /// Execute commands recorded by a `PaintContext`
    pub fn replay(&mut self, commands: impl IntoIterator<Item = PaintCommand>) {
        for command in commands {
            match command {
                PaintCommand::StrokePath { path, style } => self.stroke_path(&path, &style),
                PaintCommand::FillRect { rect, style } => self.fill_rect(rect, style),
                PaintCommand::PushClip { outline } => self.push_clip_outline(outline),
                PaintCommand::PopClip => self.pop_clip(),
            }
        }
    }

    pub fn into_image(self) -> RgbaImage {
        let width = self.width;
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            Rgba(self.pixels[(y * width + x) as usize].to_rgba8())
        })
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Clamp a pixel-space box to the canvas
    fn span(&self, min: Point, max: Point) -> Option<Span> {
        let x0 = min.x.floor().max(0.0);
        let y0 = min.y.floor().max(0.0);
        let x1 = max.x.ceil().min(self.width as f32);
        let y1 = max.y.ceil().min(self.height as f32);
        (x0 < x1 && y0 < y1).then(|| Span {
            x0: x0 as u32,
            y0: y0 as u32,
            x1: x1 as u32,
            y1: y1 as u32,
        })
    }

    /// Sample mask of an outline in pixel space, not yet clipped
    fn outline_mask(&self, outline: &StrokeOutline) -> Vec<u8> {
        let mut mask = vec![0u8; self.pixels.len()];
        for tri in outline.triangles() {
            let tri = tri.map(|p| self.transform.transform_point(p));
            let min = Point::new(
                tri[0].x.min(tri[1].x).min(tri[2].x),
                tri[0].y.min(tri[1].y).min(tri[2].y),
            );
            let max = Point::new(
                tri[0].x.max(tri[1].x).max(tri[2].x),
                tri[0].y.max(tri[1].y).max(tri[2].y),
            );
            let Some(span) = self.span(min, max) else {
                continue;
            };
            for y in span.y0..span.y1 {
                for x in span.x0..span.x1 {
                    let idx = self.index(x, y);
                    if mask[idx] == FULL {
                        continue;
                    }
                    for (bit, (sx, sy)) in SAMPLES.iter().enumerate() {
                        let p = Point::new(x as f32 + sx, y as f32 + sy);
                        if triangle_contains(&tri, p) {
                            mask[idx] |= 1 << bit;
                        }
                    }
                }
            }
        }
        mask
    }

    fn clip_bits(&self, idx: usize) -> u8 {
        self.clips.last().map_or(FULL, |clip| clip[idx])
    }

    /// Source-over blend of `color` weighted by the covered samples
    fn blend(&mut self, idx: usize, color: Color, bits: u8) {
        let coverage = bits.count_ones() as f32 / SAMPLES.len() as f32;
        let src_a = color.a * coverage;
        if src_a <= 0.0 {
            return;
        }
        let dst = self.pixels[idx];
        let out_a = src_a + dst.a * (1.0 - src_a);
        let mix = |s: f32, d: f32| (s * src_a + d * dst.a * (1.0 - src_a)) / out_a;
        self.pixels[idx] = Color::new(
            mix(color.r, dst.r),
            mix(color.g, dst.g),
            mix(color.b, dst.b),
            out_a,
        );
    }
}

impl DrawContext for Canvas {
    fn stroke_path(&mut self, path: &Path, style: &StrokeStyle) {
        let outline = match StrokeOutline::from_path(path, style) {
            Ok(outline) => outline,
            Err(e) => {
                tracing::warn!(error = %e, "stroke skipped");
                return;
            }
        };
        let mask = self.outline_mask(&outline);
        for (idx, bits) in mask.into_iter().enumerate() {
            let bits = bits & self.clip_bits(idx);
            if bits != 0 {
                self.blend(idx, style.color, bits);
            }
        }
    }

    fn fill_rect(&mut self, rect: Rect, style: FillStyle) {
        let a = self.transform.transform_point(rect.min());
        let b = self.transform.transform_point(rect.max());
        let px_rect = Rect::from_points(a, b);
        let Some(span) = self.span(px_rect.min(), px_rect.max()) else {
            return;
        };

        let (solid, gradient) = match style {
            FillStyle::Color(c) => (Some(c), None),
            FillStyle::Gradient(g) => (None, Some(g.transformed(&self.transform))),
        };

        for y in span.y0..span.y1 {
            for x in span.x0..span.x1 {
                let idx = self.index(x, y);
                let mut bits = 0u8;
                for (bit, (sx, sy)) in SAMPLES.iter().enumerate() {
                    if px_rect.contains(Point::new(x as f32 + sx, y as f32 + sy)) {
                        bits |= 1 << bit;
                    }
                }
                bits &= self.clip_bits(idx);
                if bits == 0 {
                    continue;
                }

                let center = Point::new(x as f32 + 0.5, y as f32 + 0.5);
                let color = match &gradient {
                    Some(g) => g.color_at_point(center),
                    None => solid,
                };
                if let Some(color) = color {
                    self.blend(idx, color, bits);
                }
            }
        }
    }

    fn push_clip_outline(&mut self, outline: StrokeOutline) {
        let mut mask = self.outline_mask(&outline);
        if let Some(current) = self.clips.last() {
            for (bits, clip) in mask.iter_mut().zip(current) {
                *bits &= clip;
            }
        }
        self.clips.push(mask);
    }

    fn pop_clip(&mut self) {
        if self.clips.pop().is_none() {
            tracing::warn!("pop_clip called with no clip pushed");
        }
    }

    fn clip_depth(&self) -> usize {
        self.clips.len()
    }
}
