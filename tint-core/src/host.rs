//! Host service traits
//!
//! Each shading invocation calls into the host through these traits. Methods
//! take `&self` and the traits require `Send + Sync`: arbitrarily many
//! invocations read the same host concurrently, and none of them mutate it.

use glam::{Mat3, Mat4, Vec3, Vec4};

use crate::stage::{MaterialLightingInput, VertexOutput};

/// Mesh transform services used by the vertex stage
pub trait MeshServices: Send + Sync {
    /// Local-to-world matrix of one draw instance
    ///
    /// The index is trusted. The table must stay stable for the whole draw.
    fn instance_transform(&self, instance_index: u32) -> Mat4;

    /// Transform a homogeneous local position into world space
    fn local_to_world_position(&self, local_to_world: &Mat4, position: Vec4) -> Vec4 {
        *local_to_world * position
    }

    /// Transform a local normal into world space
    ///
    /// Default uses the inverse-transpose of the upper 3x3 so non-uniform
    /// scale keeps normals perpendicular to the surface.
    fn local_to_world_normal(
        &self,
        local_to_world: &Mat4,
        normal: Vec3,
        _instance_index: u32,
    ) -> Vec3 {
        let normal_matrix = Mat3::from_mat4(*local_to_world).inverse().transpose();
        (normal_matrix * normal).normalize_or_zero()
    }

    /// Project a world position into clip space
    fn world_to_clip(&self, world_position: Vec3) -> Vec4;
}

/// Material and lighting services used by the fragment stage
pub trait MaterialServices: Send + Sync {
    /// Lighting input aggregate assembled from the material bindings
    type Input: MaterialLightingInput;
    /// Deferred output encoding
    type Deferred;

    /// Assemble the lighting input from the material bindings and varyings
    fn assemble_input(&self, varyings: &VertexOutput, is_front: bool) -> Self::Input;

    /// Apply the material's alpha policy to `color`
    ///
    /// Returns `None` when the fragment is discarded. Otherwise returns the
    /// color that becomes the new base color.
    fn alpha_discard(&self, input: &Self::Input, color: Vec4) -> Option<Vec4>;

    /// Evaluate lighting for the input
    fn apply_lighting(&self, input: &Self::Input) -> Vec4;

    /// Encode the input for a later lighting pass
    fn encode_deferred(&self, varyings: &VertexOutput, input: &Self::Input) -> Self::Deferred;

    /// Fog, alpha premultiplication and tone mapping on a lit color
    fn post_lighting(&self, input: &Self::Input, color: Vec4) -> Vec4;
}
