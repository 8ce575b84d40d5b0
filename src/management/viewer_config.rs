use bevy::prelude::Resource;
use crate::management::scene_config::ArcScene;
use crate::rendering::bevy_surface::SurfaceSettings;

pub const ACCESS_TOKEN_ENV: &str = "ARC_FLOW_ACCESS_TOKEN";

/// Imagery provider token. Empty means the provider's default access.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessToken(pub String);

impl AccessToken {
    pub fn is_configured(&self) -> bool {
        !self.0.trim().is_empty()
    }
}

/// Startup configuration handed to `ParabolaPlugin`; nothing below it reads the environment.
#[derive(Debug, Clone, Default)]
pub struct ViewerConfig {
    pub access_token: AccessToken,
    pub scene: ArcScene,
    pub surface: SurfaceSettings,
}

impl ViewerConfig {
    pub fn new(scene: ArcScene) -> Self {
        ViewerConfig { scene, ..Default::default() }
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = AccessToken(token.into());
        self
    }

    /// Resolves the token through `lookup` (normally the process environment),
    /// falling back to an empty token when it is absent.
    pub fn with_token_from(self, lookup: impl FnOnce(&str) -> Option<String>) -> Self {
        let token = lookup(ACCESS_TOKEN_ENV).unwrap_or_default();
        self.with_access_token(token)
    }

    pub fn with_surface(mut self, surface: SurfaceSettings) -> Self {
        self.surface = surface;
        self
    }
}
