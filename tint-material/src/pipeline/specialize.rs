use tint_common::{
    ATTRIBUTE_BLEND_COLOR, ATTRIBUTE_COLOR, ATTRIBUTE_NORMAL, ATTRIBUTE_POSITION,
    AttributeRequest, LOCATION_BLEND_COLOR, LOCATION_COLOR, LOCATION_NORMAL, LOCATION_POSITION,
    ShadingKey,
};

use super::{MeshVertexLayout, SpecializeError, VertexBufferLayout};
use crate::shader_gen::generate_shader;

/// Everything needed to build a render pipeline for one permutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineDescriptor {
    pub label: String,
    pub key: ShadingKey,
    pub shader_defs: Vec<&'static str>,
    /// WGSL source with the permutation's conditional blocks resolved
    pub shader_source: String,
    pub vertex_buffers: Vec<VertexBufferLayout>,
}

/// Attributes requested from every mesh, independent of the shading key
///
/// Normal and color are bound even when the key leaves them unused so all
/// permutations share one vertex buffer layout.
pub const VERTEX_ATTRIBUTE_REQUESTS: [AttributeRequest; 4] = [
    ATTRIBUTE_POSITION.at_shader_location(LOCATION_POSITION),
    ATTRIBUTE_NORMAL.at_shader_location(LOCATION_NORMAL),
    ATTRIBUTE_COLOR.at_shader_location(LOCATION_COLOR),
    ATTRIBUTE_BLEND_COLOR.at_shader_location(LOCATION_BLEND_COLOR),
];

/// Specialize the material pipeline for a shading key and mesh layout
///
/// # Errors
///
/// Returns `SpecializeError::InvalidKey` for unknown flag bits and
/// `MissingVertexAttribute` / `FormatMismatch` when the mesh cannot supply one
/// of [`VERTEX_ATTRIBUTE_REQUESTS`].
pub fn specialize(
    key: ShadingKey,
    layout: &MeshVertexLayout,
) -> Result<PipelineDescriptor, SpecializeError> {
    if !key.is_valid() {
        return Err(SpecializeError::InvalidKey { flags: key.flags });
    }

    let vertex_buffer = layout.get_layout(&VERTEX_ATTRIBUTE_REQUESTS)?;
    let shader_source = generate_shader(key)?;

    Ok(PipelineDescriptor {
        label: format!("VertexTint_{}", key.name()),
        key,
        shader_defs: key.shader_defs(),
        shader_source,
        vertex_buffers: vec![vertex_buffer],
    })
}
