//! PBR lighting for the software host
//!
//! Ambient plus directional lights. Diffuse is Lambert, specular is a
//! Cook-Torrance lobe with GGX distribution, Schlick Fresnel and height-
//! correlated Smith visibility.

use std::f32::consts::PI;

use glam::{Vec3, Vec4, Vec4Swizzles};

use super::PbrInput;

/// Lowest perceptual roughness, avoids a degenerate GGX lobe
pub const MIN_PERCEPTUAL_ROUGHNESS: f32 = 0.089;

/// Light arriving from a single direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// Direction the light travels (from the light towards the scene)
    pub direction: Vec3,
    /// Linear RGB color
    pub color: Vec3,
    pub illuminance: f32,
}

impl DirectionalLight {
    pub fn new(direction: Vec3, color: Vec3, illuminance: f32) -> Self {
        Self {
            direction: direction.normalize_or_zero(),
            color,
            illuminance,
        }
    }
}

/// Scene lights visible to every fragment of a draw
#[derive(Debug, Clone, PartialEq)]
pub struct Lights {
    /// Ambient light, applied to the diffuse and specular color
    pub ambient: Vec3,
    pub directional: Vec<DirectionalLight>,
}

impl Default for Lights {
    fn default() -> Self {
        Self {
            ambient: Vec3::splat(0.1),
            directional: Vec::new(),
        }
    }
}

// ============================================================================
// BRDF Terms
// ============================================================================

/// Convert perceptual roughness to GGX alpha
#[inline]
pub fn perceptual_roughness_to_roughness(perceptual_roughness: f32) -> f32 {
    let clamped = perceptual_roughness.clamp(MIN_PERCEPTUAL_ROUGHNESS, 1.0);
    clamped * clamped
}

/// GGX / Trowbridge-Reitz normal distribution
#[inline]
pub fn distribution_ggx(roughness: f32, n_dot_h: f32) -> f32 {
    let a2 = roughness * roughness;
    let f = (n_dot_h * a2 - n_dot_h) * n_dot_h + 1.0;
    a2 / (PI * f * f)
}

/// Height-correlated Smith visibility (includes the 1/(4 NoL NoV) term)
#[inline]
pub fn visibility_smith_ggx(roughness: f32, n_dot_v: f32, n_dot_l: f32) -> f32 {
    let a2 = roughness * roughness;
    let lambda_v = n_dot_l * (n_dot_v * n_dot_v * (1.0 - a2) + a2).sqrt();
    let lambda_l = n_dot_v * (n_dot_l * n_dot_l * (1.0 - a2) + a2).sqrt();
    0.5 / (lambda_v + lambda_l).max(1e-6)
}

/// Schlick Fresnel approximation
#[inline]
pub fn fresnel_schlick(f0: Vec3, l_dot_h: f32) -> Vec3 {
    let f = (1.0 - l_dot_h).clamp(0.0, 1.0).powi(5);
    f0 + (Vec3::ONE - f0) * f
}

/// Specular color at normal incidence
#[inline]
pub fn specular_f0(base_color: Vec3, metallic: f32, reflectance: f32) -> Vec3 {
    let dielectric = 0.16 * reflectance * reflectance * (1.0 - metallic);
    Vec3::splat(dielectric) + base_color * metallic
}

// ============================================================================
// Lighting
// ============================================================================

/// Evaluate lighting for one fragment
///
/// Unlit materials return the base color unchanged. Alpha is carried from the
/// base color.
pub fn apply_pbr_lighting(input: &PbrInput, lights: &Lights) -> Vec4 {
    let material = &input.material;
    if material.unlit {
        return material.base_color;
    }

    let base = material.base_color.xyz();
    let metallic = material.metallic.clamp(0.0, 1.0);
    let roughness = perceptual_roughness_to_roughness(material.perceptual_roughness);
    let diffuse_color = base * (1.0 - metallic);
    let f0 = specular_f0(base, metallic, material.reflectance);

    let n = input.world_normal;
    let v = input.view_direction;
    let n_dot_v = n.dot(v).max(1e-4);

    let mut color = Vec3::ZERO;
    for light in &lights.directional {
        let l = -light.direction;
        let n_dot_l = n.dot(l);
        if n_dot_l <= 0.0 {
            continue;
        }

        let h = (l + v).normalize_or(n);
        let n_dot_h = n.dot(h).clamp(0.0, 1.0);
        let l_dot_h = l.dot(h).clamp(0.0, 1.0);

        let d = distribution_ggx(roughness, n_dot_h);
        let vis = visibility_smith_ggx(roughness, n_dot_v, n_dot_l);
        let f = fresnel_schlick(f0, l_dot_h);

        let specular = f * (d * vis);
        let diffuse = diffuse_color / PI;
        color += (diffuse + specular) * light.color * (light.illuminance * n_dot_l);
    }

    color += lights.ambient * (diffuse_color + f0);
    color += material.emissive;

    color.extend(material.base_color.w)
}
