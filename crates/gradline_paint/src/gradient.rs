//! Gradient fills

use crate::color::Color;
use crate::context::Transform2D;
use crate::path::Point;

/// A gradient stop
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32, // 0.0 to 1.0
    pub color: Color,
}

impl GradientStop {
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// What a gradient paints outside its first and last stop
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GradientExtend {
    /// Repeat the first color before the start and the last color after the end
    #[default]
    Pad,
    /// Leave the area outside the stops unpainted
    None,
}

/// Gradient type
#[derive(Clone, Debug, PartialEq)]
pub enum Gradient {
    Linear {
        start: Point,
        end: Point,
        stops: Vec<GradientStop>,
        extend: GradientExtend,
    },
}

impl Gradient {
    /// Linear gradient padded on both ends
    pub fn linear(start: Point, end: Point, stops: Vec<GradientStop>) -> Self {
        Gradient::Linear {
            start,
            end,
            stops,
            extend: GradientExtend::Pad,
        }
    }

    /// Create a simple linear gradient between two colors
    pub fn linear_simple(start: Point, end: Point, from: Color, to: Color) -> Self {
        Self::linear(
            start,
            end,
            vec![GradientStop::new(0.0, from), GradientStop::new(1.0, to)],
        )
    }

    pub fn stops(&self) -> &[GradientStop] {
        match self {
            Gradient::Linear { stops, .. } => stops,
        }
    }

    /// Parametric position of `p` along the gradient axis.
    ///
    /// 0.0 is the start point and 1.0 the end point; a zero-length axis
    /// maps everything to 0.0.
    pub fn position_of(&self, p: Point) -> f32 {
        match self {
            Gradient::Linear { start, end, .. } => {
                let dx = end.x - start.x;
                let dy = end.y - start.y;
                let len_sq = dx * dx + dy * dy;
                if len_sq <= f32::EPSILON {
                    return 0.0;
                }
                ((p.x - start.x) * dx + (p.y - start.y) * dy) / len_sq
            }
        }
    }

    /// Color at parametric position `t`, `None` where the extend mode paints nothing
    pub fn color_at(&self, t: f32) -> Option<Color> {
        let Gradient::Linear { stops, extend, .. } = self;
        let first = stops.first()?;
        let last = stops.last()?;

        if t < first.offset {
            return (*extend == GradientExtend::Pad).then_some(first.color);
        }
        if t >= last.offset {
            if t > 1.0 && *extend == GradientExtend::None {
                return None;
            }
            return Some(last.color);
        }

        let upper = stops.iter().position(|s| s.offset > t)?;
        let (a, b) = (stops[upper - 1], stops[upper]);
        let span = b.offset - a.offset;
        if span <= f32::EPSILON {
            return Some(b.color);
        }
        Some(a.color.lerp(b.color, (t - a.offset) / span))
    }

    /// Color at a point in drawing space
    pub fn color_at_point(&self, p: Point) -> Option<Color> {
        self.color_at(self.position_of(p))
    }

    /// Move the gradient axis into another space.
    ///
    /// Exact for similarity transforms (uniform scale, rotation, translation).
    pub fn transformed(&self, transform: &Transform2D) -> Self {
        match self {
            Gradient::Linear {
                start,
                end,
                stops,
                extend,
            } => Gradient::Linear {
                start: transform.transform_point(*start),
                end: transform.transform_point(*end),
                stops: stops.clone(),
                extend: *extend,
            },
        }
    }
}
