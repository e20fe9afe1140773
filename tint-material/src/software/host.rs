use glam::{Mat4, Vec3, Vec4, Vec4Swizzles};
use tint_core::{MaterialServices, MeshServices, VertexOutput};

use super::{
    AlphaMode, GBufferTexel, InstanceTable, Lights, PbrInput, PostProcessing, StandardMaterial,
    View, apply_pbr_lighting, main_pass_post_lighting,
};
use crate::config::MaterialConfig;

/// CPU implementation of the mesh and material host services
///
/// Holds everything that stays fixed for one draw. Shared read-only between
/// invocations.
#[derive(Debug, Clone, Default)]
pub struct SoftwareHost {
    pub instances: InstanceTable,
    pub view: View,
    pub material: StandardMaterial,
    pub lights: Lights,
    pub post: PostProcessing,
}

impl SoftwareHost {
    pub fn new(instances: InstanceTable, view: View, material: StandardMaterial) -> Self {
        Self {
            instances,
            view,
            material,
            lights: Lights::default(),
            post: PostProcessing::default(),
        }
    }

    /// Build a host from material, lighting and post settings
    pub fn from_config(config: &MaterialConfig, instances: InstanceTable, view: View) -> Self {
        Self {
            instances,
            view,
            material: config.material.to_material(),
            lights: config.lighting.to_lights(),
            post: config.post.to_post_processing(),
        }
    }
}

impl MeshServices for SoftwareHost {
    fn instance_transform(&self, instance_index: u32) -> Mat4 {
        debug_assert!(
            (instance_index as usize) < self.instances.len(),
            "instance index {} out of range",
            instance_index
        );
        self.instances
            .get(instance_index)
            .map_or(Mat4::IDENTITY, |instance| instance.local_to_world)
    }

    fn local_to_world_normal(
        &self,
        local_to_world: &Mat4,
        normal: Vec3,
        instance_index: u32,
    ) -> Vec3 {
        match self.instances.get(instance_index) {
            Some(instance) => (instance.normal_matrix * normal).normalize_or_zero(),
            None => local_to_world.transform_vector3(normal).normalize_or_zero(),
        }
    }

    fn world_to_clip(&self, world_position: Vec3) -> Vec4 {
        self.view.world_to_clip(world_position)
    }
}

impl MaterialServices for SoftwareHost {
    type Input = PbrInput;
    type Deferred = GBufferTexel;

    fn assemble_input(&self, varyings: &VertexOutput, is_front: bool) -> PbrInput {
        PbrInput::new(self.material, varyings, &self.view, is_front)
    }

    fn alpha_discard(&self, input: &PbrInput, color: Vec4) -> Option<Vec4> {
        match input.material.alpha_mode {
            AlphaMode::Opaque => Some(color.xyz().extend(1.0)),
            AlphaMode::Mask(cutoff) if color.w < cutoff => None,
            AlphaMode::Mask(_) => Some(color.xyz().extend(1.0)),
            AlphaMode::Blend | AlphaMode::Premultiplied | AlphaMode::Add => Some(color),
        }
    }

    fn apply_lighting(&self, input: &PbrInput) -> Vec4 {
        apply_pbr_lighting(input, &self.lights)
    }

    fn encode_deferred(&self, _varyings: &VertexOutput, input: &PbrInput) -> GBufferTexel {
        GBufferTexel::encode(input)
    }

    fn post_lighting(&self, input: &PbrInput, color: Vec4) -> Vec4 {
        main_pass_post_lighting(input, color, &self.post, &self.view)
    }
}
