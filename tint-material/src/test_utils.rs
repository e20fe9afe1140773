//! Shared test utilities for unit tests

use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use glam::{Mat4, Vec3, Vec4, Vec4Swizzles};
use tint_core::{MaterialLightingInput, MaterialServices, MeshServices, VertexOutput};

// ============================================================================
// Mock Host Implementation
// ============================================================================

/// One recorded call into the mock host, with the base color it observed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostCall {
    Assemble { is_front: bool },
    AlphaDiscard { base_color: Vec4 },
    Lighting { base_color: Vec4 },
    EncodeDeferred { base_color: Vec4 },
    PostLighting { color: Vec4 },
}

/// Lighting input produced by [`MockHost`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MockInput {
    pub base_color: Vec4,
    pub world_position: Vec3,
    pub is_front: bool,
}

impl MaterialLightingInput for MockInput {
    fn base_color(&self) -> Vec4 {
        self.base_color
    }

    fn set_base_color(&mut self, color: Vec4) {
        self.base_color = color;
    }
}

/// Deferred payload produced by [`MockHost`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MockDeferred {
    pub base_color: Vec4,
    pub world_position: Vec3,
}

/// Mock host with simple, predictable services that records every material call
///
/// - lighting returns `base_color * light`
/// - post-lighting returns `color + post_bias`
/// - alpha discard drops fragments below `alpha_cutoff` when set
pub struct MockHost {
    pub transforms: Vec<Mat4>,
    pub clip_from_world: Mat4,
    pub material_color: Vec4,
    pub alpha_cutoff: Option<f32>,
    pub light: Vec4,
    pub post_bias: Vec4,
    calls: Mutex<Vec<HostCall>>,
    normal_calls: AtomicU32,
}

impl Default for MockHost {
    fn default() -> Self {
        Self {
            transforms: vec![Mat4::IDENTITY],
            clip_from_world: Mat4::IDENTITY,
            material_color: Vec4::new(0.8, 0.8, 0.8, 1.0),
            alpha_cutoff: None,
            light: Vec4::new(2.0, 1.5, 1.0, 1.0),
            post_bias: Vec4::new(0.01, 0.02, 0.03, 0.0),
            calls: Mutex::new(Vec::new()),
            normal_calls: AtomicU32::new(0),
        }
    }
}

impl MockHost {
    pub fn with_transforms(transforms: Vec<Mat4>) -> Self {
        Self {
            transforms,
            ..Default::default()
        }
    }

    /// Snapshot of recorded calls
    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Number of times the normal transform service was called
    pub fn normal_calls(&self) -> u32 {
        self.normal_calls.load(Ordering::Relaxed)
    }

    fn record(&self, call: HostCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl MeshServices for MockHost {
    fn instance_transform(&self, instance_index: u32) -> Mat4 {
        self.transforms[instance_index as usize]
    }

    fn local_to_world_normal(
        &self,
        local_to_world: &Mat4,
        normal: Vec3,
        _instance_index: u32,
    ) -> Vec3 {
        self.normal_calls.fetch_add(1, Ordering::Relaxed);
        local_to_world.transform_vector3(normal).normalize_or_zero()
    }

    fn world_to_clip(&self, world_position: Vec3) -> Vec4 {
        self.clip_from_world * world_position.extend(1.0)
    }
}

impl MaterialServices for MockHost {
    type Input = MockInput;
    type Deferred = MockDeferred;

    fn assemble_input(&self, varyings: &VertexOutput, is_front: bool) -> MockInput {
        self.record(HostCall::Assemble { is_front });
        MockInput {
            base_color: self.material_color,
            world_position: varyings.world_position.xyz(),
            is_front,
        }
    }

    fn alpha_discard(&self, input: &MockInput, color: Vec4) -> Option<Vec4> {
        self.record(HostCall::AlphaDiscard {
            base_color: input.base_color,
        });
        match self.alpha_cutoff {
            Some(cutoff) if color.w < cutoff => None,
            _ => Some(color),
        }
    }

    fn apply_lighting(&self, input: &MockInput) -> Vec4 {
        self.record(HostCall::Lighting {
            base_color: input.base_color,
        });
        input.base_color * self.light
    }

    fn encode_deferred(&self, _varyings: &VertexOutput, input: &MockInput) -> MockDeferred {
        self.record(HostCall::EncodeDeferred {
            base_color: input.base_color,
        });
        MockDeferred {
            base_color: input.base_color,
            world_position: input.world_position,
        }
    }

    fn post_lighting(&self, _input: &MockInput, color: Vec4) -> Vec4 {
        self.record(HostCall::PostLighting { color });
        color + self.post_bias
    }
}
