//! Polyline path construction

use gradline_paint::{Path, PathBuilder, Point};

use crate::projection::{MapPoint, PointProjector};

/// Build an open polyline: one move-to, then one line-to per remaining point.
///
/// An empty input gives an empty path and a single point a lone move-to.
/// The path is never closed, even when the first and last points coincide.
pub fn build(points: impl IntoIterator<Item = Point>) -> Path {
    let mut points = points.into_iter();
    let Some(first) = points.next() else {
        return Path::new();
    };

    points
        .fold(PathBuilder::new().move_to(first.x, first.y), |b, p| {
            b.line_to(p.x, p.y)
        })
        .build()
}

/// Project every map point and build the polyline through them
pub fn project(points: &[MapPoint], projector: &dyn PointProjector) -> Path {
    build(points.iter().map(|p| projector.project(*p)))
}
