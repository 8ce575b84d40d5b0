use bevy_math::{DVec3, Vec3};
use crate::core::geo_point::PathPoint;

pub const WGS84_SEMI_MAJOR: f64 = 6_378_137.0;
pub const WGS84_SEMI_MINOR: f64 = 6_356_752.314_245_179;
const WGS84_E2: f64 = 6.694_379_990_141_316e-3;

// Earth-fixed cartesian (Z through the north pole), metres.
pub fn geodetic_to_ecef(lon_deg: f64, lat_deg: f64, height: f64) -> DVec3 {
    let lon = lon_deg.to_radians();
    let lat = lat_deg.to_radians();
    let (sin_lat, cos_lat) = lat.sin_cos();
    let (sin_lon, cos_lon) = lon.sin_cos();
    let n = WGS84_SEMI_MAJOR / (1.0 - WGS84_E2 * sin_lat * sin_lat).sqrt();

    DVec3::new(
        (n + height) * cos_lat * cos_lon,
        (n + height) * cos_lat * sin_lon,
        (n * (1.0 - WGS84_E2) + height) * sin_lat,
    )
}

// Bevy is Y-up; the cyclic swap keeps the frame right-handed.
pub fn ecef_to_world(ecef: DVec3, units_per_meter: f64) -> Vec3 {
    (DVec3::new(ecef.y, ecef.z, ecef.x) * units_per_meter).as_vec3()
}

pub fn path_point_to_world(point: &PathPoint, units_per_meter: f64) -> Vec3 {
    ecef_to_world(geodetic_to_ecef(point.lon, point.lat, point.height), units_per_meter)
}

/// East, north and up unit vectors at a geodetic position, in world axes.
pub struct LocalFrame {
    pub east: Vec3,
    pub north: Vec3,
    pub up: Vec3,
}

pub fn local_frame(lon_deg: f64, lat_deg: f64) -> LocalFrame {
    let (sin_lat, cos_lat) = lat_deg.to_radians().sin_cos();
    let (sin_lon, cos_lon) = lon_deg.to_radians().sin_cos();

    let east = DVec3::new(-sin_lon, cos_lon, 0.0);
    let north = DVec3::new(-sin_lat * cos_lon, -sin_lat * sin_lon, cos_lat);
    let up = DVec3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat);

    LocalFrame {
        east: ecef_to_world(east, 1.0),
        north: ecef_to_world(north, 1.0),
        up: ecef_to_world(up, 1.0),
    }
}
