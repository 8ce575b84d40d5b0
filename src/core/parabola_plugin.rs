use bevy::prelude::*;
use bevy_atmosphere::plugin::{AtmosphereCamera, AtmospherePlugin};
use crate::core::arc_error::{ArcError, RenderError};
use crate::core::components::{Globe, MainCamera, MainDirectionalLight};
use crate::core::geodesy::{local_frame, WGS84_SEMI_MAJOR, WGS84_SEMI_MINOR};
use crate::management::scene_config::ArcScene;
use crate::management::viewer_config::{AccessToken, ViewerConfig};
use crate::materials::flow_line::FlowLinePlugin;
use crate::rendering::bevy_surface::{BevySurface, SurfaceSettings};
use crate::rendering::camera_flight::{advance_camera_flights, CameraFlight};
use crate::rendering::renderer::{draw_scene, RenderHandles};

// Height of the opening view, before the configured flight starts.
const OVERVIEW_HEIGHT: f64 = 20_000_000.0;

/// Handles of the arc currently on screen.
#[derive(Resource, Debug, Clone, Copy)]
pub struct SceneArcs(pub RenderHandles<Entity>);

pub struct ParabolaPlugin {
    pub config: ViewerConfig,
}

impl ParabolaPlugin {
    pub fn new(config: ViewerConfig) -> Self {
        ParabolaPlugin { config }
    }
}

impl Plugin for ParabolaPlugin {
    fn build(&self, app: &mut App) {
        app
            .insert_resource(self.config.surface.clone())
            .insert_resource(self.config.scene.clone())
            .insert_resource(self.config.access_token.clone())
            .add_plugins(FlowLinePlugin)
            .add_plugins(AtmospherePlugin)
            .add_systems(Startup, (report_access_token, setup_globe, draw_configured_scene.pipe(report_scene_error)).chain())
            .add_systems(Update, advance_camera_flights);
    }
}

fn report_access_token(token: Res<AccessToken>) {
    if token.is_configured() {
        info!("[Viewer] imagery access token configured");
    } else {
        warn!("[Viewer] no imagery access token configured, using provider defaults");
    }
}

pub fn setup_globe(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<SurfaceSettings>,
    scene: Res<ArcScene>,
) {
    let scale = settings.units_per_meter;
    // Y is the polar axis in world space.
    let radii = Vec3::new(
        (WGS84_SEMI_MAJOR * scale) as f32,
        (WGS84_SEMI_MINOR * scale) as f32,
        (WGS84_SEMI_MAJOR * scale) as f32,
    );

    commands.spawn_empty()
        .insert(Mesh3d(meshes.add(Sphere::new(1.0).mesh().uv(128, 64))))
        .insert(MeshMaterial3d(materials.add(StandardMaterial {
            base_color: settings.globe_color.into(),
            perceptual_roughness: 0.9,
            ..default()
        })))
        .insert(Transform::from_scale(radii))
        .insert(Name::new("Globe"))
        .insert(Globe);

    // Noon over the camera destination
    let zenith = local_frame(scene.camera.destination.lon, scene.camera.destination.lat).up;
    commands.spawn_empty()
        .insert(DirectionalLight {
            illuminance: 10_000.0,
            ..default()
        })
        .insert(Transform::default().looking_to(-zenith, Vec3::Y))
        .insert(Name::new("Sun"))
        .insert(MainDirectionalLight);

    let overview = CameraFlight {
        height: OVERVIEW_HEIGHT,
        heading: 0.0,
        pitch: -90.0,
        roll: 0.0,
        ..scene.camera
    };
    let far = (OVERVIEW_HEIGHT + WGS84_SEMI_MAJOR) * 2.0 * scale;

    commands.spawn_empty()
        .insert(Camera3d::default())
        .insert(Projection::Perspective(PerspectiveProjection {
            near: 0.1,
            far: far as f32,
            ..default()
        }))
        .insert(overview.target_transform(scale))
        .insert(AtmosphereCamera::default())
        .insert(Name::new("MainCamera"))
        .insert(MainCamera);
}

pub fn draw_configured_scene(
    mut commands: Commands,
    mut surface: BevySurface,
    scene: Res<ArcScene>,
) -> Result<(), RenderError<ArcError>> {
    let handles = draw_scene(&mut surface, &scene)?;
    commands.insert_resource(SceneArcs(handles));
    Ok(())
}

// A failed startup draw leaves the scene blank; the app keeps running.
pub fn report_scene_error(In(result): In<Result<(), RenderError<ArcError>>>) {
    if let Err(e) = result {
        error!("[Arc] scene left blank, drawing failed: {}", e);
    }
}
