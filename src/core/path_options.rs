use serde::{Deserialize, Serialize};
use crate::core::arc_error::ArcError;

pub const DEFAULT_PEAK_HEIGHT: f64 = 50_000.0;
pub const DEFAULT_POINTS_COUNT: usize = 100;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct PathOptions {
    // Peak altitude in metres, reached at t = 0.5
    pub height: f64,
    pub points_count: usize,
}

impl Default for PathOptions {
    fn default() -> Self {
        PathOptions {
            height: DEFAULT_PEAK_HEIGHT,
            points_count: DEFAULT_POINTS_COUNT,
        }
    }
}

impl PathOptions {
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    pub fn with_points_count(mut self, points_count: usize) -> Self {
        self.points_count = points_count;
        self
    }

    pub fn validate(&self) -> Result<(), ArcError> {
        if self.points_count < 2 {
            return Err(ArcError::invalid(format!(
                "points_count must be at least 2, got {}",
                self.points_count
            )));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(ArcError::invalid(format!(
                "height must be a positive finite number, got {}",
                self.height
            )));
        }
        Ok(())
    }
}
