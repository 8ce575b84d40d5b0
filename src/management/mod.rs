pub mod scene_config;
pub mod viewer_config;
