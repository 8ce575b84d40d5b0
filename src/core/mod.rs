pub mod arc_error;
pub mod components;
pub mod geo_point;
pub mod geodesy;
pub mod gradient;
pub mod parabola_plugin;
pub mod path_generator;
pub mod path_options;
