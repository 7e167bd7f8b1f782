//! Web Mercator projection for WGS84 routes
//!
//! Routes are converted to Mercator meters once, as the renderer's map
//! points. `FitProjector` then maps meters into canvas space so the route
//! fills the canvas (minus padding) at zoom 1.

use gradline_core::{MapPoint, PointProjector};
use gradline_paint::Point;

const EARTH_RADIUS_M: f64 = 6_378_137.0;
/// Latitude where Web Mercator is conventionally cut off
const MAX_LATITUDE: f64 = 85.051_128_78;

/// WGS84 degrees to Web Mercator meters (x east, y north)
pub fn wgs84_to_mercator(lat: f64, lon: f64) -> MapPoint {
    let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = EARTH_RADIUS_M * lon.to_radians();
    let y = EARTH_RADIUS_M * (std::f64::consts::FRAC_PI_4 + lat / 2.0).tan().ln();
    MapPoint::new(x, y)
}

/// Uniformly scales Mercator meters into a canvas, north up
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitProjector {
    scale: f64,
    origin: MapPoint,
    offset_x: f64,
    offset_y: f64,
}

impl FitProjector {
    /// Fit `points` into a `width` x `height` canvas keeping `padding` free
    pub fn fit(points: &[MapPoint], width: u32, height: u32, padding: f32) -> Self {
        let (w, h) = (width as f64, height as f64);
        let Some((min, max)) = extent(points) else {
            return Self {
                scale: 1.0,
                origin: MapPoint::default(),
                offset_x: w / 2.0,
                offset_y: h / 2.0,
            };
        };

        let pad = (padding as f64).clamp(0.0, w.min(h) / 2.0 - 1.0).max(0.0);
        let span_x = max.x - min.x;
        let span_y = max.y - min.y;
        let avail_x = (w - 2.0 * pad).max(1.0);
        let avail_y = (h - 2.0 * pad).max(1.0);

        let scale = match (span_x > 0.0, span_y > 0.0) {
            (true, true) => (avail_x / span_x).min(avail_y / span_y),
            (true, false) => avail_x / span_x,
            (false, true) => avail_y / span_y,
            (false, false) => 1.0,
        };

        // Center the route's extent in the canvas
        Self {
            scale,
            origin: MapPoint::new(min.x, max.y),
            offset_x: (w - span_x * scale) / 2.0,
            offset_y: (h - span_y * scale) / 2.0,
        }
    }

    /// Canvas pixels per Mercator meter
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl PointProjector for FitProjector {
    fn project(&self, point: MapPoint) -> Point {
        let x = self.offset_x + (point.x - self.origin.x) * self.scale;
        let y = self.offset_y + (self.origin.y - point.y) * self.scale;
        Point::new(x as f32, y as f32)
    }
}

fn extent(points: &[MapPoint]) -> Option<(MapPoint, MapPoint)> {
    let first = *points.first()?;
    Some(points.iter().fold((first, first), |(min, max), p| {
        (
            MapPoint::new(min.x.min(p.x), min.y.min(p.y)),
            MapPoint::new(max.x.max(p.x), max.y.max(p.y)),
        )
    }))
}
