use crate::core::arc_error::ArcError;
use crate::core::geo_point::{GeoPath, GeoPoint, PathPoint};
use crate::core::path_options::PathOptions;

/// Normalized position of sample `index` out of `count`, exactly 0.0 at the first
/// sample and 1.0 at the last. Geometry and vertex colours both read `t` from here.
pub fn normalized_ratio(index: usize, count: usize) -> f64 {
    debug_assert!(count >= 2);
    index as f64 / (count - 1) as f64
}

/// Altitude of the arc at ratio `t`: zero at both ends, `peak` at the middle.
pub fn parabola_height(peak: f64, t: f64) -> f64 {
    4.0 * peak * t * (1.0 - t)
}

/// Samples a parabolic arc from `start` to `end`.
///
/// Longitude and latitude are interpolated linearly in degree space, not along a
/// great circle. Height depends only on the normalized position along the path.
pub fn generate_path(start: GeoPoint, end: GeoPoint, options: &PathOptions) -> Result<GeoPath, ArcError> {
    options.validate()?;
    start.ensure_finite("start")?;
    end.ensure_finite("end")?;

    let count = options.points_count;
    let d_lon = end.lon - start.lon;
    let d_lat = end.lat - start.lat;

    let mut points = Vec::with_capacity(count);
    for i in 0..count {
        let t = normalized_ratio(i, count);
        points.push(PathPoint {
            lon: start.lon + t * d_lon,
            lat: start.lat + t * d_lat,
            height: parabola_height(options.height, t),
        });
    }

    Ok(GeoPath(points))
}
