use glam::Vec3;
use tint_core::VertexOutput;

/// Interpolate the varyings of a triangle at barycentric coordinates
///
/// Mirrors fixed-function interpolation: every field present on the corners
/// is blended linearly (no perspective correction), and a normal or color is
/// produced only when all three corners carry it. Interpolated normals are
/// not renormalized.
pub fn interpolate_varyings(triangle: &[VertexOutput; 3], barycentric: Vec3) -> VertexOutput {
    let [a, b, c] = triangle;
    let w = barycentric;

    let mut out = VertexOutput::new(
        a.position * w.x + b.position * w.y + c.position * w.z,
        a.world_position * w.x + b.world_position * w.y + c.world_position * w.z,
    );

    if let (Some(na), Some(nb), Some(nc)) = (a.world_normal(), b.world_normal(), c.world_normal()) {
        out = out.with_world_normal(na * w.x + nb * w.y + nc * w.z);
    }
    if let (Some(ca), Some(cb), Some(cc)) = (a.color(), b.color(), c.color()) {
        out = out.with_color(ca * w.x + cb * w.y + cc * w.z);
    }

    out
}
