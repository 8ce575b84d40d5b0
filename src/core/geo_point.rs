use serde::{Deserialize, Serialize};
use crate::core::arc_error::ArcError;

/// Longitude/latitude pair in degrees. No altitude.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub const fn new(lon: f64, lat: f64) -> Self {
        GeoPoint { lon, lat }
    }

    pub(crate) fn ensure_finite(&self, label: &str) -> Result<(), ArcError> {
        if !self.lon.is_finite() || !self.lat.is_finite() {
            return Err(ArcError::invalid(format!(
                "{} point must be finite, got ({}, {})",
                label, self.lon, self.lat
            )));
        }
        Ok(())
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lon, lat): (f64, f64)) -> Self {
        GeoPoint { lon, lat }
    }
}

/// One sample along an arc: degrees, degrees, metres above the ellipsoid.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PathPoint {
    pub lon: f64,
    pub lat: f64,
    pub height: f64,
}

/// Ordered start-to-end samples of a generated arc.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoPath(pub(crate) Vec<PathPoint>);

impl GeoPath {
    pub fn points(&self) -> &[PathPoint] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&PathPoint> {
        self.0.first()
    }

    pub fn last(&self) -> Option<&PathPoint> {
        self.0.last()
    }

    pub fn into_points(self) -> Vec<PathPoint> {
        self.0
    }
}

impl std::ops::Index<usize> for GeoPath {
    type Output = PathPoint;

    fn index(&self, index: usize) -> &PathPoint {
        &self.0[index]
    }
}
