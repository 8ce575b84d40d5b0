use bevy::color::LinearRgba;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use crate::core::arc_error::ArcError;
use crate::core::components::{ArcPrimitive, MainCamera};
use crate::core::geo_point::PathPoint;
use crate::core::geodesy::{local_frame, path_point_to_world};
use crate::materials::flow_line::FlowLineMaterial;
use crate::materials::material_descriptor::MaterialDescriptor;
use crate::rendering::camera_flight::{ActiveFlight, CameraFlight};
use crate::rendering::ribbon::build_ribbon;
use crate::rendering::surface::RenderSurface;

#[derive(Serialize, Deserialize, Resource, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SurfaceSettings {
    // World units per metre; 0.001 keeps the globe in kilometres for f32 precision.
    pub units_per_meter: f64,
    // Ground metres covered by one screen pixel when sizing line widths.
    pub meters_per_pixel: f64,
    // Lift of the flow overlay above the gradient line, metres.
    pub overlay_lift: f64,
    pub globe_color: LinearRgba,
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        SurfaceSettings {
            units_per_meter: 0.001,
            meters_per_pixel: 150.0,
            overlay_lift: 50.0,
            globe_color: LinearRgba::new(0.05, 0.16, 0.32, 1.0),
        }
    }
}

impl SurfaceSettings {
    pub fn half_width_world(&self, width_px: f32) -> f32 {
        (width_px as f64 * self.meters_per_pixel * self.units_per_meter * 0.5) as f32
    }

    fn world_polyline(&self, positions: &[PathPoint], lift: f64) -> (Vec<Vec3>, Vec<Vec3>) {
        positions
            .iter()
            .map(|p| {
                let lifted = PathPoint { height: p.height + lift, ..*p };
                (path_point_to_world(&lifted, self.units_per_meter), local_frame(p.lon, p.lat).up)
            })
            .unzip()
    }
}

/// Bevy-backed `RenderSurface`: arcs become ribbon meshes, the camera gets an `ActiveFlight`.
#[derive(SystemParam)]
pub struct BevySurface<'w, 's> {
    commands: Commands<'w, 's>,
    meshes: ResMut<'w, Assets<Mesh>>,
    standard_materials: ResMut<'w, Assets<StandardMaterial>>,
    flow_materials: ResMut<'w, Assets<FlowLineMaterial>>,
    settings: Res<'w, SurfaceSettings>,
    cameras: Query<'w, 's, (Entity, &'static Transform), With<MainCamera>>,
}

impl RenderSurface for BevySurface<'_, '_> {
    type Handle = Entity;
    type Error = ArcError;

    fn add_colored_polyline(
        &mut self,
        positions: &[PathPoint],
        colors: &[LinearRgba],
        width_px: f32,
    ) -> Result<Entity, ArcError> {
        if colors.len() != positions.len() {
            return Err(ArcError::invalid(format!(
                "{} colours for {} positions",
                colors.len(),
                positions.len()
            )));
        }
        let (world, ups) = self.settings.world_polyline(positions, 0.0);
        let mesh = build_ribbon(&world, &ups, self.settings.half_width_world(width_px), Some(colors));

        let material = self.standard_materials.add(StandardMaterial {
            base_color: Color::WHITE,
            unlit: true,
            cull_mode: None,
            ..default()
        });

        let entity = self.commands.spawn_empty()
            .insert(Mesh3d(self.meshes.add(mesh)))
            .insert(MeshMaterial3d(material))
            .insert(Transform::default())
            .insert(Name::new("GradientArc"))
            .insert(ArcPrimitive)
            .id();
        Ok(entity)
    }

    fn add_material_polyline(
        &mut self,
        positions: &[PathPoint],
        material: &MaterialDescriptor,
        width_px: f32,
    ) -> Result<Entity, ArcError> {
        let flow_material = FlowLineMaterial::try_from(material)?;
        let (world, ups) = self.settings.world_polyline(positions, self.settings.overlay_lift);
        let mesh = build_ribbon(&world, &ups, self.settings.half_width_world(width_px), None);

        let entity = self.commands.spawn_empty()
            .insert(Mesh3d(self.meshes.add(mesh)))
            .insert(MeshMaterial3d(self.flow_materials.add(flow_material)))
            .insert(Transform::default())
            .insert(Name::new("FlowingArc"))
            .insert(ArcPrimitive)
            .id();
        Ok(entity)
    }

    fn fly_to(&mut self, flight: &CameraFlight) -> Result<(), ArcError> {
        let target = flight.target_transform(self.settings.units_per_meter);
        let mut found = false;
        for (entity, transform) in self.cameras.iter() {
            found = true;
            if flight.duration <= 0.0 {
                self.commands.entity(entity).insert(target);
            } else {
                self.commands.entity(entity).insert(ActiveFlight::new(*transform, target, flight.duration));
            }
        }
        if !found {
            return Err(ArcError::MissingCamera {
                lon: flight.destination.lon,
                lat: flight.destination.lat,
            });
        }
        Ok(())
    }

    fn remove(&mut self, handle: Entity) -> Result<(), ArcError> {
        self.commands.entity(handle).despawn_recursive();
        Ok(())
    }
}
