use std::fs::File;
use std::io;
use std::path::Path;
use bevy::prelude::Resource;
use ron::de::{from_reader, SpannedError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::core::geo_point::GeoPoint;
use crate::core::path_options::PathOptions;
use crate::rendering::camera_flight::CameraFlight;
use crate::rendering::renderer::LineStyle;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to open scene '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("malformed scene: {0}")]
    Ron(#[from] SpannedError),
}

/// Everything needed to draw one arc and frame it. Omitted fields keep their defaults.
#[derive(Serialize, Deserialize, Resource, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ArcScene {
    pub start: GeoPoint,
    pub end: GeoPoint,
    pub options: PathOptions,
    pub style: LineStyle,
    pub camera: CameraFlight,
}

impl Default for ArcScene {
    fn default() -> Self {
        ArcScene {
            start: GeoPoint::new(113.17, 23.8),
            end: GeoPoint::new(114.0, 22.5),
            options: PathOptions::default(),
            style: LineStyle::default(),
            camera: CameraFlight::default(),
        }
    }
}

impl ArcScene {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SceneError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(from_reader(file)?)
    }

    pub fn from_ron_str(text: &str) -> Result<Self, SceneError> {
        Ok(ron::de::from_str(text)?)
    }
}
