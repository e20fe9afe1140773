//! Standard material and the per-fragment lighting input

use glam::{Vec3, Vec4, Vec4Swizzles};
use serde::{Deserialize, Serialize};
use tint_core::{MaterialLightingInput, VertexOutput};

use super::View;

/// How a material's alpha channel is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlphaMode {
    /// Alpha ignored, output is fully opaque
    #[default]
    Opaque,
    /// Fragments with alpha below the cutoff are discarded, the rest are opaque
    Mask(f32),
    /// Standard alpha blending
    Blend,
    /// Color is premultiplied by alpha after lighting
    Premultiplied,
    /// Additive blending: premultiplied color with zero alpha
    Add,
}

/// Material bindings of the vertex-tint material
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardMaterial {
    /// Linear RGBA base color
    pub base_color: Vec4,
    pub alpha_mode: AlphaMode,
    /// Perceptual roughness [0.089, 1.0]
    pub perceptual_roughness: f32,
    pub metallic: f32,
    /// Specular reflectance for dielectrics, 0.5 maps to 4% F0
    pub reflectance: f32,
    /// Linear RGB emitted light
    pub emissive: Vec3,
    /// Skip lighting and output the base color
    pub unlit: bool,
    /// Light back faces with a flipped normal
    pub double_sided: bool,
}

impl Default for StandardMaterial {
    fn default() -> Self {
        Self {
            base_color: Vec4::ONE,
            alpha_mode: AlphaMode::Opaque,
            perceptual_roughness: 0.5,
            metallic: 0.0,
            reflectance: 0.5,
            emissive: Vec3::ZERO,
            unlit: false,
            double_sided: false,
        }
    }
}

/// Lighting input for one fragment
///
/// Holds a copy of the material so the shading stage can replace the base
/// color without touching the shared bindings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PbrInput {
    pub material: StandardMaterial,
    pub world_position: Vec3,
    /// Shading normal N, flipped for back faces of double-sided materials
    pub world_normal: Vec3,
    /// Unit vector from the surface towards the camera
    pub view_direction: Vec3,
    pub is_front: bool,
}

impl PbrInput {
    /// Assemble the input from the material, interpolated varyings and view
    ///
    /// Without a normal varying the surface is shaded as if it faced the camera.
    pub fn new(
        material: StandardMaterial,
        varyings: &VertexOutput,
        view: &View,
        is_front: bool,
    ) -> Self {
        let world_position = varyings.world_position.xyz();
        let view_direction = (view.world_position - world_position).normalize_or(Vec3::Z);

        let mut world_normal = varyings
            .world_normal()
            .map_or(view_direction, |n| n.normalize_or(view_direction));
        if material.double_sided && !is_front {
            world_normal = -world_normal;
        }

        Self {
            material,
            world_position,
            world_normal,
            view_direction,
            is_front,
        }
    }
}

impl MaterialLightingInput for PbrInput {
    fn base_color(&self) -> Vec4 {
        self.material.base_color
    }

    fn set_base_color(&mut self, color: Vec4) {
        self.material.base_color = color;
    }
}
