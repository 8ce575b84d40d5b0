use bevy::color::LinearRgba;
use bevy::log::{debug, info};
use serde::{Deserialize, Serialize};
use crate::core::arc_error::{ArcError, RenderError};
use crate::core::geo_point::GeoPath;
use crate::core::gradient::gradient_colors;
use crate::core::path_generator::generate_path;
use crate::management::scene_config::ArcScene;
use crate::materials::flow_model::FlowMaterialParams;
use crate::materials::material_descriptor::MaterialDescriptor;
use crate::rendering::camera_flight::CameraFlight;
use crate::rendering::surface::RenderSurface;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct LineStyle {
    pub start_color: LinearRgba,
    pub end_color: LinearRgba,
    // Stroke widths in screen pixels
    pub solid_width: f32,
    pub flow_width: f32,
    pub flow: FlowMaterialParams,
}

impl Default for LineStyle {
    fn default() -> Self {
        LineStyle {
            start_color: LinearRgba::new(0.0, 0.0, 1.0, 1.0),
            end_color: LinearRgba::new(1.0, 0.0, 0.0, 1.0),
            solid_width: 2.0,
            flow_width: 20.0,
            flow: FlowMaterialParams::default(),
        }
    }
}

impl LineStyle {
    pub fn validate(&self) -> Result<(), ArcError> {
        for (name, width) in [("solid_width", self.solid_width), ("flow_width", self.flow_width)] {
            if !(width.is_finite() && width > 0.0) {
                return Err(ArcError::invalid(format!("{} must be positive, got {}", name, width)));
            }
        }
        self.flow.validate()
    }
}

/// Surface handles of the two primitives making up one arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderHandles<H> {
    pub gradient: H,
    pub flow: H,
}

/// Registers the gradient line and the flowing overlay for `path`, in that order.
pub fn render_parabola<S: RenderSurface>(
    surface: &mut S,
    path: &GeoPath,
    style: &LineStyle,
) -> Result<RenderHandles<S::Handle>, RenderError<S::Error>> {
    if path.len() < 2 {
        return Err(ArcError::invalid(format!("a line needs at least 2 points, got {}", path.len())).into());
    }
    style.validate()?;

    let colors = gradient_colors(style.start_color, style.end_color, path.len());
    let material = MaterialDescriptor::flow_line(&style.flow);
    material.validate()?;

    let gradient = surface
        .add_colored_polyline(path.points(), &colors, style.solid_width)
        .map_err(RenderError::Surface)?;

    let flow = match surface.add_material_polyline(path.points(), &material, style.flow_width) {
        Ok(handle) => handle,
        Err(e) => {
            // Leave nothing half-drawn behind.
            if let Err(cleanup) = surface.remove(gradient) {
                debug!("[Arc] failed to remove gradient line after error: {}", cleanup);
            }
            return Err(RenderError::Surface(e));
        }
    };

    info!("[Arc] registered {} point arc: gradient {:?}, flow {:?}", path.len(), gradient, flow);
    Ok(RenderHandles { gradient, flow })
}

pub fn remove_parabola<S: RenderSurface>(surface: &mut S, handles: RenderHandles<S::Handle>) -> Result<(), S::Error> {
    surface.remove(handles.flow)?;
    surface.remove(handles.gradient)
}

pub fn fly_to<S: RenderSurface>(surface: &mut S, flight: &CameraFlight) -> Result<(), RenderError<S::Error>> {
    flight.validate()?;
    surface.fly_to(flight).map_err(RenderError::Surface)
}

/// Generates the configured arc, draws it, then starts the camera flight.
pub fn draw_scene<S: RenderSurface>(
    surface: &mut S,
    scene: &ArcScene,
) -> Result<RenderHandles<S::Handle>, RenderError<S::Error>> {
    scene.camera.validate()?;
    let path = generate_path(scene.start, scene.end, &scene.options)?;
    let handles = render_parabola(surface, &path, &scene.style)?;

    if let Err(e) = fly_to(surface, &scene.camera) {
        // The caller never sees the handles, so nothing else could remove these lines.
        if let Err(cleanup) = remove_parabola(surface, handles) {
            debug!("[Arc] failed to remove arc after camera error: {}", cleanup);
        }
        return Err(e);
    }
    Ok(handles)
}
