//! Projection seam
//!
//! The host owns the mapping from map coordinates to drawing space. The
//! renderer only consumes projected points.

use gradline_paint::Point;

/// A point in the host's map coordinate space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapPoint {
    pub x: f64,
    pub y: f64,
}

impl MapPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for MapPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Maps a map point into the drawing space of the current viewport and zoom
pub trait PointProjector {
    fn project(&self, point: MapPoint) -> Point;
}

/// Map points are already in drawing space
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityProjector;

impl PointProjector for IdentityProjector {
    fn project(&self, point: MapPoint) -> Point {
        Point::new(point.x as f32, point.y as f32)
    }
}

impl<F> PointProjector for F
where
    F: Fn(MapPoint) -> Point,
{
    fn project(&self, point: MapPoint) -> Point {
        self(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        assert_eq!(
            IdentityProjector.project(MapPoint::new(3.0, -4.5)),
            Point::new(3.0, -4.5)
        );
    }

    #[test]
    fn test_closure_projector() {
        let scale = 2.0;
        let projector =
            move |p: MapPoint| Point::new((p.x * scale) as f32, (p.y * scale) as f32);
        assert_eq!(projector.project((1.0, 2.0).into()), Point::new(2.0, 4.0));
    }
}
