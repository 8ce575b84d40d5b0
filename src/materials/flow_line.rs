use bevy::prelude::*;
use bevy::reflect::TypePath;
use bevy::render::mesh::MeshVertexBufferLayoutRef;
use bevy::render::render_resource::{
    AsBindGroup, RenderPipelineDescriptor, Shader, ShaderRef, ShaderType, SpecializedMeshPipelineError,
};
use bevy::asset::load_internal_asset;
use bevy_pbr::{Material, MaterialPipeline, MaterialPipelineKey, MaterialPlugin};
use crate::core::arc_error::ArcError;
use crate::materials::flow_model::FlowMaterialParams;
use crate::materials::material_descriptor::MaterialDescriptor;

// Packed layout of `FlowLineUniform` in flow_line.wgsl; field order matters.
#[derive(Clone, Copy, Debug, ShaderType)]
pub struct FlowLineUniform {
    pub color: Vec4,
    pub speed: f32,
    pub headsize: f32,
    pub tailsize: f32,
    pub widthoffset: f32,
    pub coresize: f32,
}

impl From<&FlowMaterialParams> for FlowLineUniform {
    fn from(p: &FlowMaterialParams) -> Self {
        FlowLineUniform {
            color: Vec4::new(p.color.red, p.color.green, p.color.blue, p.color.alpha),
            speed: p.speed,
            headsize: p.headsize,
            tailsize: p.tailsize,
            widthoffset: p.widthoffset,
            coresize: p.coresize,
        }
    }
}

#[derive(Asset, AsBindGroup, TypePath, Clone, Debug)]
pub struct FlowLineMaterial {
    #[uniform(0)]
    pub params: FlowLineUniform,
}

impl FlowLineMaterial {
    pub fn new(params: &FlowMaterialParams) -> Self {
        FlowLineMaterial { params: params.into() }
    }
}

impl TryFrom<&MaterialDescriptor> for FlowLineMaterial {
    type Error = ArcError;

    fn try_from(desc: &MaterialDescriptor) -> Result<Self, Self::Error> {
        let params = FlowMaterialParams::try_from(desc)?;
        Ok(FlowLineMaterial::new(&params))
    }
}

impl Material for FlowLineMaterial {
    fn fragment_shader() -> ShaderRef {
        ShaderRef::Handle(FLOW_LINE_SHADER_HANDLE)
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Blend
    }

    // Ribbons are single quads per segment; show them from both sides.
    fn specialize(
        _pipeline: &MaterialPipeline<Self>,
        descriptor: &mut RenderPipelineDescriptor,
        _layout: &MeshVertexBufferLayoutRef,
        _key: MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        descriptor.primitive.cull_mode = None;
        Ok(())
    }
}

// Static handle used to refer to the embedded WGSL shader
pub const FLOW_LINE_SHADER_HANDLE: Handle<Shader> = Handle::weak_from_u128(0x3B71_9E02_C4D8_41A6);

pub struct FlowLinePlugin;

impl Plugin for FlowLinePlugin {
    fn build(&self, app: &mut App) {
        // Register internal WGSL so it works regardless of external asset dirs
        load_internal_asset!(
            app,
            FLOW_LINE_SHADER_HANDLE,
            "../../assets/shaders/flow_line.wgsl",
            Shader::from_wgsl
        );
        app.add_plugins(MaterialPlugin::<FlowLineMaterial>::default());
    }
}
