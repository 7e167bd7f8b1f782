//! Stroked outlines
//!
//! Converts an open path into the filled region a stroke of a given width
//! would cover, triangulated with lyon. The outline is used as a clip shape
//! and as the geometry rasterizing hosts fill when stroking.

use bytemuck::{Pod, Zeroable};
use lyon::lyon_tessellation::{
    BuffersBuilder, StrokeOptions, StrokeTessellator, StrokeVertex, VertexBuffers,
};
use lyon::math::point;
use lyon::path::PathEvent;

use crate::context::{LineCap, LineJoin, StrokeStyle};
use crate::error::{PaintError, Result};
use crate::path::{Path, PathCommand, Point};
use crate::primitives::Rect;

const TOLERANCE: f32 = 0.05;

/// A vertex of a tessellated outline
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct OutlineVertex {
    pub position: [f32; 2],
}

impl OutlineVertex {
    pub fn point(&self) -> Point {
        Point::new(self.position[0], self.position[1])
    }
}

/// Triangulated region covered by stroking a path
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeOutline {
    vertices: Vec<OutlineVertex>,
    indices: Vec<u32>,
    bounds: Rect,
}

impl StrokeOutline {
    /// Tessellate the stroke of `path` drawn with `style`
    pub fn from_path(path: &Path, style: &StrokeStyle) -> Result<Self> {
        if path.segment_count() == 0 {
            return Err(PaintError::EmptyPath);
        }
        if !style.width.is_finite() || style.width <= 0.0 {
            return Err(PaintError::InvalidStrokeWidth(style.width));
        }
        // lyon asserts on NaN geometry
        if let Some(index) = path.first_non_finite() {
            return Err(PaintError::NonFinitePoint(index));
        }

        let events = path_to_lyon_events(path);
        let mut geometry: VertexBuffers<OutlineVertex, u32> = VertexBuffers::new();
        let mut tessellator = StrokeTessellator::new();

        let options = StrokeOptions::default()
            .with_line_width(style.width)
            .with_tolerance(TOLERANCE)
            .with_line_cap(match style.line_cap {
                LineCap::Butt => lyon::lyon_tessellation::LineCap::Butt,
                LineCap::Round => lyon::lyon_tessellation::LineCap::Round,
                LineCap::Square => lyon::lyon_tessellation::LineCap::Square,
            })
            .with_line_join(match style.line_join {
                LineJoin::Miter => lyon::lyon_tessellation::LineJoin::Miter,
                LineJoin::Round => lyon::lyon_tessellation::LineJoin::Round,
                LineJoin::Bevel => lyon::lyon_tessellation::LineJoin::Bevel,
            });

        tessellator
            .tessellate(
                events,
                &options,
                &mut BuffersBuilder::new(&mut geometry, |vertex: StrokeVertex| OutlineVertex {
                    position: vertex.position().to_array(),
                }),
            )
            .map_err(|e| PaintError::Tessellation(format!("{e:?}")))?;

        let bounds = vertex_bounds(&geometry.vertices).ok_or(PaintError::EmptyPath)?;
        tracing::trace!(
            vertices = geometry.vertices.len(),
            triangles = geometry.indices.len() / 3,
            "tessellated stroke outline"
        );

        Ok(Self {
            vertices: geometry.vertices,
            indices: geometry.indices,
            bounds,
        })
    }

    pub fn vertices(&self) -> &[OutlineVertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Raw vertex data for upload to a GPU buffer
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Bounds of the stroked region (wider than the path's own bounds)
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn triangles(&self) -> impl Iterator<Item = [Point; 3]> + '_ {
        self.indices.chunks_exact(3).map(|tri| {
            [
                self.vertices[tri[0] as usize].point(),
                self.vertices[tri[1] as usize].point(),
                self.vertices[tri[2] as usize].point(),
            ]
        })
    }

    /// True if `p` lies inside any triangle of the outline
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p) && self.triangles().any(|tri| triangle_contains(&tri, p))
    }
}

/// Edge-sign point-in-triangle test, inclusive of edges, either winding
pub fn triangle_contains(tri: &[Point; 3], p: Point) -> bool {
    let edge = |a: Point, b: Point| (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
    let d0 = edge(tri[0], tri[1]);
    let d1 = edge(tri[1], tri[2]);
    let d2 = edge(tri[2], tri[0]);
    let has_neg = d0 < 0.0 || d1 < 0.0 || d2 < 0.0;
    let has_pos = d0 > 0.0 || d1 > 0.0 || d2 > 0.0;
    !(has_neg && has_pos)
}

fn vertex_bounds(vertices: &[OutlineVertex]) -> Option<Rect> {
    let first = vertices.first()?.point();
    let (min, max) = vertices.iter().skip(1).fold((first, first), |(min, max), v| {
        let p = v.point();
        (
            Point::new(min.x.min(p.x), min.y.min(p.y)),
            Point::new(max.x.max(p.x), max.y.max(p.y)),
        )
    });
    Some(Rect::from_min_max(min, max))
}

/// Convert a Path to lyon path events
fn path_to_lyon_events(path: &Path) -> Vec<PathEvent> {
    let mut events = Vec::with_capacity(path.point_count() + 1);
    let mut first_point: Option<Point> = None;
    let mut current_point = Point::ZERO;

    for cmd in path.commands() {
        match *cmd {
            PathCommand::MoveTo(p) => {
                if let Some(first) = first_point {
                    // End previous subpath
                    events.push(PathEvent::End {
                        last: point(current_point.x, current_point.y),
                        first: point(first.x, first.y),
                        close: false,
                    });
                }
                events.push(PathEvent::Begin { at: point(p.x, p.y) });
                first_point = Some(p);
                current_point = p;
            }
            PathCommand::LineTo(p) => {
                if first_point.is_none() {
                    // Implicit moveto at the current point
                    events.push(PathEvent::Begin {
                        at: point(current_point.x, current_point.y),
                    });
                    first_point = Some(current_point);
                }
                events.push(PathEvent::Line {
                    from: point(current_point.x, current_point.y),
                    to: point(p.x, p.y),
                });
                current_point = p;
            }
        }
    }

    // Polylines stay open
    if let Some(first) = first_point {
        events.push(PathEvent::End {
            last: point(current_point.x, current_point.y),
            first: point(first.x, first.y),
            close: false,
        });
    }

    events
}
