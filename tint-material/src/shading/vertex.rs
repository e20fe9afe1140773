use glam::Vec4Swizzles;
use tint_common::{ShadingKey, VertexInput};
use tint_core::{MeshServices, VertexOutput};

/// Run the vertex stage for one vertex
///
/// Resolves the instance transform once and reuses it for the position and,
/// when the key enables normals, the normal. Optional varyings are only
/// computed under their feature flag. The blend color is not read.
pub fn vertex_stage<H>(host: &H, key: ShadingKey, vertex: &VertexInput) -> VertexOutput
where
    H: MeshServices + ?Sized,
{
    let local_to_world = host.instance_transform(vertex.instance_index);
    let world_position = host.local_to_world_position(&local_to_world, vertex.position.extend(1.0));
    let position = host.world_to_clip(world_position.xyz());

    let mut out = VertexOutput::new(position, world_position);

    if key.has_normals() {
        out = out.with_world_normal(host.local_to_world_normal(
            &local_to_world,
            vertex.normal,
            vertex.instance_index,
        ));
    }

    if key.has_vertex_colors() {
        out = out.with_color(vertex.color);
    }

    out
}
