use std::borrow::Cow;
use bevy::color::LinearRgba;
use indexmap::IndexMap;
use crate::core::arc_error::ArcError;
use crate::materials::flow_model::FlowMaterialParams;

pub const FLOW_LINE_MATERIAL_TYPE: &str = "FlowingLineMaterial";
pub const FLOW_LINE_SHADER_VERSION: u32 = 1;
pub const FLOW_LINE_WGSL: &str = include_str!("../../assets/shaders/flow_line.wgsl");

// Name of the engine-provided frame counter binding, and what the WGSL reads for it.
pub const FRAME_NUMBER_UNIFORM: &str = "frame_number";
const FRAME_NUMBER_SHADER_SYMBOL: &str = "frame_count";

pub const FLOW_LINE_UNIFORMS: [&str; 7] = [
    "color",
    "speed",
    "headsize",
    "tailsize",
    "widthoffset",
    "coresize",
    FRAME_NUMBER_UNIFORM,
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Color(LinearRgba),
    // Supplied by the engine every frame; the descriptor only records the binding.
    FrameNumber,
}

impl UniformValue {
    fn kind(&self) -> &'static str {
        match self {
            UniformValue::Float(_) => "float",
            UniformValue::Color(_) => "color",
            UniformValue::FrameNumber => "frame number",
        }
    }
}

/// Versioned shader asset. The body is opaque apart from the uniform names it references.
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderSource {
    pub name: Cow<'static, str>,
    pub version: u32,
    pub wgsl: Cow<'static, str>,
}

impl ShaderSource {
    pub fn flow_line() -> Self {
        ShaderSource {
            name: Cow::Borrowed("flow_line.wgsl"),
            version: FLOW_LINE_SHADER_VERSION,
            wgsl: Cow::Borrowed(FLOW_LINE_WGSL),
        }
    }

    pub fn references(&self, uniform: &str) -> bool {
        let symbol = if uniform == FRAME_NUMBER_UNIFORM { FRAME_NUMBER_SHADER_SYMBOL } else { uniform };
        self.wgsl
            .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .any(|token| token == symbol)
    }

    pub fn validate<'a>(&self, uniforms: impl IntoIterator<Item = &'a str>) -> Result<(), ArcError> {
        for uniform in uniforms {
            if !self.references(uniform) {
                return Err(ArcError::ShaderMissingUniform {
                    shader: self.name.to_string(),
                    uniform: uniform.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Engine-neutral description of a shader material: type name, named uniforms, source.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialDescriptor {
    pub type_name: String,
    pub uniforms: IndexMap<String, UniformValue>,
    pub source: ShaderSource,
}

impl MaterialDescriptor {
    pub fn flow_line(params: &FlowMaterialParams) -> Self {
        let mut uniforms = IndexMap::new();
        uniforms.insert("color".to_string(), UniformValue::Color(params.color));
        uniforms.insert("speed".to_string(), UniformValue::Float(params.speed));
        uniforms.insert("headsize".to_string(), UniformValue::Float(params.headsize));
        uniforms.insert("tailsize".to_string(), UniformValue::Float(params.tailsize));
        uniforms.insert("widthoffset".to_string(), UniformValue::Float(params.widthoffset));
        uniforms.insert("coresize".to_string(), UniformValue::Float(params.coresize));
        uniforms.insert(FRAME_NUMBER_UNIFORM.to_string(), UniformValue::FrameNumber);

        MaterialDescriptor {
            type_name: FLOW_LINE_MATERIAL_TYPE.to_string(),
            uniforms,
            source: ShaderSource::flow_line(),
        }
    }

    /// Checks that every required uniform is bound and that the source references it.
    pub fn validate(&self) -> Result<(), ArcError> {
        if self.type_name != FLOW_LINE_MATERIAL_TYPE {
            return Err(ArcError::UnknownMaterialType(self.type_name.clone()));
        }
        for name in FLOW_LINE_UNIFORMS {
            if !self.uniforms.contains_key(name) {
                return Err(ArcError::UnboundUniform {
                    material: self.type_name.clone(),
                    uniform: name.to_string(),
                });
            }
        }
        self.source.validate(self.uniforms.keys().map(String::as_str))
    }

    fn float(&self, name: &str) -> Result<f32, ArcError> {
        match self.uniforms.get(name) {
            Some(UniformValue::Float(v)) => Ok(*v),
            Some(other) => Err(ArcError::UniformKind {
                uniform: format!("{} ({})", name, other.kind()),
                expected: "float",
            }),
            None => Err(ArcError::UnboundUniform {
                material: self.type_name.clone(),
                uniform: name.to_string(),
            }),
        }
    }

    fn color(&self, name: &str) -> Result<LinearRgba, ArcError> {
        match self.uniforms.get(name) {
            Some(UniformValue::Color(c)) => Ok(*c),
            Some(other) => Err(ArcError::UniformKind {
                uniform: format!("{} ({})", name, other.kind()),
                expected: "color",
            }),
            None => Err(ArcError::UnboundUniform {
                material: self.type_name.clone(),
                uniform: name.to_string(),
            }),
        }
    }
}

impl TryFrom<&MaterialDescriptor> for FlowMaterialParams {
    type Error = ArcError;

    fn try_from(desc: &MaterialDescriptor) -> Result<Self, Self::Error> {
        desc.validate()?;
        if desc.uniforms.get(FRAME_NUMBER_UNIFORM) != Some(&UniformValue::FrameNumber) {
            return Err(ArcError::UniformKind {
                uniform: FRAME_NUMBER_UNIFORM.to_string(),
                expected: "frame number",
            });
        }

        let params = FlowMaterialParams {
            color: desc.color("color")?,
            speed: desc.float("speed")?,
            headsize: desc.float("headsize")?,
            tailsize: desc.float("tailsize")?,
            widthoffset: desc.float("widthoffset")?,
            coresize: desc.float("coresize")?,
        };
        params.validate()?;
        Ok(params)
    }
}
