//! G-buffer encoding for the prepass pipeline
//!
//! One 16-byte texel per fragment:
//! - base_color: RGBA8 (0xRRGGBBAA)
//! - normal: octahedral snorm16x2
//! - roughness_metallic: f16x2 (perceptual roughness low, metallic high)
//! - emissive_flags: RGB8 emissive in the upper 24 bits, GBUFFER_FLAG_* in the low byte

use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4};
use tint_common::{
    pack_f16x2, pack_octahedral_u32, pack_rgb8, pack_rgba8, unpack_f16x2, unpack_octahedral_u32,
    unpack_rgb8, unpack_rgba8,
};

use super::PbrInput;

pub const GBUFFER_FLAG_UNLIT: u8 = 1;
pub const GBUFFER_FLAG_DOUBLE_SIDED: u8 = 2;
pub const GBUFFER_FLAG_FRONT_FACING: u8 = 4;

/// Packed deferred output of one fragment (16 bytes, POD)
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct GBufferTexel {
    pub base_color: u32,
    pub normal: u32,
    pub roughness_metallic: u32,
    pub emissive_flags: u32,
}

/// Unpacked view of a [`GBufferTexel`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GBufferData {
    pub base_color: Vec4,
    pub normal: Vec3,
    pub perceptual_roughness: f32,
    pub metallic: f32,
    pub emissive: Vec3,
    pub flags: u8,
}

impl GBufferTexel {
    /// Encode a lighting input
    ///
    /// Colors are clamped to [0, 1]. HDR emissive does not survive the prepass.
    pub fn encode(input: &PbrInput) -> Self {
        let material = &input.material;

        let mut flags = 0;
        if material.unlit {
            flags |= GBUFFER_FLAG_UNLIT;
        }
        if material.double_sided {
            flags |= GBUFFER_FLAG_DOUBLE_SIDED;
        }
        if input.is_front {
            flags |= GBUFFER_FLAG_FRONT_FACING;
        }

        Self {
            base_color: pack_rgba8(material.base_color),
            normal: pack_octahedral_u32(input.world_normal),
            roughness_metallic: pack_f16x2(material.perceptual_roughness, material.metallic),
            emissive_flags: pack_rgb8(material.emissive) | flags as u32,
        }
    }

    pub fn decode(&self) -> GBufferData {
        let (perceptual_roughness, metallic) = unpack_f16x2(self.roughness_metallic);
        GBufferData {
            base_color: unpack_rgba8(self.base_color),
            normal: unpack_octahedral_u32(self.normal),
            perceptual_roughness,
            metallic,
            emissive: unpack_rgb8(self.emissive_flags),
            flags: self.flags(),
        }
    }

    #[inline]
    pub fn flags(&self) -> u8 {
        (self.emissive_flags & 0xFF) as u8
    }
}
