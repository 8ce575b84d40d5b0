pub mod core;
pub mod management;
pub mod materials;
pub mod rendering;

pub use crate::core::arc_error::{ArcError, RenderError};
pub use crate::core::geo_point::{GeoPath, GeoPoint, PathPoint};
pub use crate::core::path_generator::generate_path;
pub use crate::core::path_options::PathOptions;
pub use crate::materials::flow_model::FlowMaterialParams;
pub use crate::rendering::renderer::{draw_scene, remove_parabola, render_parabola, LineStyle, RenderHandles};
pub use crate::rendering::surface::RenderSurface;
