//! Post-lighting processing: distance fog, tone mapping and alpha premultiplication

use glam::{Vec3, Vec4, Vec4Swizzles};
use serde::{Deserialize, Serialize};

use super::{AlphaMode, PbrInput, View};

/// Fog falloff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FogMode {
    /// Ramps from 0 at `start` to 1 at `end`
    #[default]
    Linear,
    /// `1 - exp(-distance * density)`
    Exponential,
}

/// Distance fog blended over lit color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceFog {
    pub mode: FogMode,
    /// Linear RGBA, alpha scales the fog amount
    pub color: Vec4,
    pub start: f32,
    pub end: f32,
    pub density: f32,
}

impl DistanceFog {
    /// Fog amount [0, 1] at a view distance
    pub fn factor(&self, distance: f32) -> f32 {
        let factor = match self.mode {
            FogMode::Linear => {
                let range = self.end - self.start;
                if range <= 0.0 {
                    if distance >= self.end { 1.0 } else { 0.0 }
                } else {
                    (distance - self.start) / range
                }
            }
            FogMode::Exponential => 1.0 - (-distance * self.density.max(0.0)).exp(),
        };
        factor.clamp(0.0, 1.0)
    }
}

/// Tone mapping operator applied to the lit color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tonemapping {
    None,
    /// Per-channel `c / (1 + c)`
    Reinhard,
    /// Reinhard on luminance, preserves hue
    #[default]
    ReinhardLuminance,
    /// Narkowicz ACES filmic fit
    AcesFitted,
}

impl Tonemapping {
    pub fn apply(self, color: Vec3) -> Vec3 {
        match self {
            Tonemapping::None => color,
            Tonemapping::Reinhard => color / (Vec3::ONE + color),
            Tonemapping::ReinhardLuminance => {
                let l = luminance(color);
                if l <= 0.0 {
                    color
                } else {
                    color * ((l / (1.0 + l)) / l)
                }
            }
            Tonemapping::AcesFitted => {
                let a = 2.51;
                let b = 0.03;
                let c = 2.43;
                let d = 0.59;
                let e = 0.14;
                ((color * (a * color + b)) / (color * (c * color + d) + e))
                    .clamp(Vec3::ZERO, Vec3::ONE)
            }
        }
    }
}

/// Rec. 709 relative luminance
#[inline]
pub fn luminance(color: Vec3) -> f32 {
    color.dot(Vec3::new(0.2126, 0.7152, 0.0722))
}

/// Post-lighting settings for a draw
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PostProcessing {
    pub fog: Option<DistanceFog>,
    pub tonemapping: Tonemapping,
}

/// Apply fog, tone mapping and alpha-mode premultiplication to a lit color
pub fn main_pass_post_lighting(
    input: &PbrInput,
    color: Vec4,
    post: &PostProcessing,
    view: &View,
) -> Vec4 {
    let mut rgb = color.xyz();
    let mut alpha = color.w;

    if let Some(fog) = &post.fog {
        let distance = input.world_position.distance(view.world_position);
        let amount = fog.factor(distance) * fog.color.w;
        rgb = rgb.lerp(fog.color.xyz(), amount);
    }

    rgb = post.tonemapping.apply(rgb);

    match input.material.alpha_mode {
        AlphaMode::Premultiplied => rgb *= alpha,
        AlphaMode::Add => {
            rgb *= alpha;
            alpha = 0.0;
        }
        AlphaMode::Opaque | AlphaMode::Mask(_) | AlphaMode::Blend => {}
    }

    rgb.extend(alpha)
}
