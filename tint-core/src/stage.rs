//! Data passed between the shading stages and the host
//!
//! [`VertexOutput`] carries the full varyings field set. The optional fields
//! are populated only under the matching feature flag; [`VertexOutput::validate`]
//! checks a value against a [`ShadingKey`] and the accessors return `Option`
//! so an absent field is never read as data.

use glam::{Vec3, Vec4};
use tint_common::ShadingKey;

use crate::error::VaryingsError;

/// Varyings produced once per vertex and consumed once per fragment
/// after host interpolation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexOutput {
    /// Clip-space position (homogeneous)
    pub position: Vec4,
    /// World-space position (homogeneous, xyz used)
    pub world_position: Vec4,
    world_normal: Option<Vec3>,
    color: Option<Vec4>,
}

impl VertexOutput {
    /// Varyings with only the always-present fields
    pub fn new(position: Vec4, world_position: Vec4) -> Self {
        Self {
            position,
            world_position,
            world_normal: None,
            color: None,
        }
    }

    /// Attach a world-space normal
    pub fn with_world_normal(mut self, world_normal: Vec3) -> Self {
        self.world_normal = Some(world_normal);
        self
    }

    /// Attach an interpolated vertex color
    pub fn with_color(mut self, color: Vec4) -> Self {
        self.color = Some(color);
        self
    }

    /// World-space normal, present only with FEATURE_NORMALS
    #[inline]
    pub fn world_normal(&self) -> Option<Vec3> {
        self.world_normal
    }

    /// Vertex color, present only with FEATURE_VERTEX_COLORS
    #[inline]
    pub fn color(&self) -> Option<Vec4> {
        self.color
    }

    /// Check that the populated fields match the key's feature flags
    pub fn validate(&self, key: ShadingKey) -> Result<(), VaryingsError> {
        let name = key.name();
        match (key.has_normals(), self.world_normal.is_some()) {
            (true, false) => return Err(VaryingsError::MissingWorldNormal { key: name }),
            (false, true) => return Err(VaryingsError::UnexpectedWorldNormal { key: name }),
            _ => {}
        }
        match (key.has_vertex_colors(), self.color.is_some()) {
            (true, false) => Err(VaryingsError::MissingColor { key: name }),
            (false, true) => Err(VaryingsError::UnexpectedColor { key: name }),
            _ => Ok(()),
        }
    }
}

/// The host's lighting input aggregate, as seen by the shading stage
///
/// The stage reads and writes exactly one field: the material base color.
/// Everything else is opaque to it.
pub trait MaterialLightingInput {
    /// Current material base color (linear RGBA)
    fn base_color(&self) -> Vec4;

    /// Replace the material base color
    fn set_base_color(&mut self, color: Vec4);
}

/// Terminal result of one fragment invocation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FragmentOutput<D> {
    /// Post-processed forward color
    Forward(Vec4),
    /// Deferred encoding produced entirely by the host
    Deferred(D),
}

impl<D> FragmentOutput<D> {
    /// Forward color, if this is forward output
    pub fn forward_color(&self) -> Option<Vec4> {
        match self {
            FragmentOutput::Forward(color) => Some(*color),
            FragmentOutput::Deferred(_) => None,
        }
    }

    /// Deferred payload, if this is deferred output
    pub fn deferred(&self) -> Option<&D> {
        match self {
            FragmentOutput::Forward(_) => None,
            FragmentOutput::Deferred(deferred) => Some(deferred),
        }
    }
}
