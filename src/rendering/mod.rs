pub mod bevy_surface;
pub mod camera_flight;
pub mod renderer;
pub mod ribbon;
pub mod surface;
