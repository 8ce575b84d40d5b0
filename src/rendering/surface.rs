use bevy::color::LinearRgba;
use crate::core::geo_point::PathPoint;
use crate::materials::material_descriptor::MaterialDescriptor;
use crate::rendering::camera_flight::CameraFlight;

/// Scene the arc primitives are submitted to. Owned by the caller and passed in
/// explicitly; positions are geodetic (degrees, degrees, metres).
pub trait RenderSurface {
    type Handle: Copy + std::fmt::Debug;
    type Error: std::error::Error + 'static;

    /// Opaque line strip with one colour per vertex.
    fn add_colored_polyline(
        &mut self,
        positions: &[PathPoint],
        colors: &[LinearRgba],
        width_px: f32,
    ) -> Result<Self::Handle, Self::Error>;

    /// Line strip shaded by a material; the engine drives the material every frame.
    fn add_material_polyline(
        &mut self,
        positions: &[PathPoint],
        material: &MaterialDescriptor,
        width_px: f32,
    ) -> Result<Self::Handle, Self::Error>;

    fn fly_to(&mut self, flight: &CameraFlight) -> Result<(), Self::Error>;

    fn remove(&mut self, handle: Self::Handle) -> Result<(), Self::Error>;
}
