pub mod flow_line;
pub mod flow_model;
pub mod material_descriptor;
