//! Vertex attributes and the interleaved vertex format
//!
//! Meshes drawn with the vertex-tint material carry four attributes. Each is
//! bound to a fixed shader location:
//! - Location 0: Position (Float32x3)
//! - Location 1: Normal (Float32x3)
//! - Location 5: Color (Float32x4)
//! - Location 10: Blend color (Float32x4, carried but not yet shaded)

use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4};

// ============================================================================
// Attribute Formats
// ============================================================================

/// Component format of one vertex attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexFormat {
    Float32x3,
    Float32x4,
}

impl VertexFormat {
    /// Size in bytes
    #[inline]
    pub const fn size(self) -> u64 {
        match self {
            VertexFormat::Float32x3 => 12,
            VertexFormat::Float32x4 => 16,
        }
    }

    /// Number of f32 components
    #[inline]
    pub const fn components(self) -> usize {
        match self {
            VertexFormat::Float32x3 => 3,
            VertexFormat::Float32x4 => 4,
        }
    }
}

/// A named mesh vertex attribute with a stable id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexAttribute {
    pub name: &'static str,
    pub id: u64,
    pub format: VertexFormat,
}

impl VertexAttribute {
    pub const fn new(name: &'static str, id: u64, format: VertexFormat) -> Self {
        Self { name, id, format }
    }

    /// Request this attribute at a shader location
    pub const fn at_shader_location(self, shader_location: u32) -> AttributeRequest {
        AttributeRequest {
            attribute: self,
            shader_location,
        }
    }
}

/// An attribute the pipeline wants bound at a shader location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttributeRequest {
    pub attribute: VertexAttribute,
    pub shader_location: u32,
}

// ============================================================================
// Attribute Constants
// ============================================================================

pub const ATTRIBUTE_POSITION: VertexAttribute =
    VertexAttribute::new("Vertex_Position", 0, VertexFormat::Float32x3);
pub const ATTRIBUTE_NORMAL: VertexAttribute =
    VertexAttribute::new("Vertex_Normal", 1, VertexFormat::Float32x3);
pub const ATTRIBUTE_COLOR: VertexAttribute =
    VertexAttribute::new("Vertex_Color", 5, VertexFormat::Float32x4);
/// Secondary per-vertex color. Bound and fetched, not consumed by shading yet.
pub const ATTRIBUTE_BLEND_COLOR: VertexAttribute =
    VertexAttribute::new("BlendColor", 988540917, VertexFormat::Float32x4);

pub const LOCATION_POSITION: u32 = 0;
pub const LOCATION_NORMAL: u32 = 1;
pub const LOCATION_COLOR: u32 = 5;
pub const LOCATION_BLEND_COLOR: u32 = 10;

// ============================================================================
// Vertex Types
// ============================================================================

/// Per-vertex input to the vertex stage
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VertexInput {
    /// Index into the host's instance transform table (trusted, not validated)
    pub instance_index: u32,
    /// Local-space position
    pub position: Vec3,
    /// Local-space normal
    pub normal: Vec3,
    /// Primary RGBA color
    pub color: Vec4,
    /// Secondary RGBA blend color (read, unused downstream)
    pub blend_color: Vec4,
}

/// Size of [`PackedVertex`] in bytes
pub const PACKED_VERTEX_STRIDE: u64 = 56;

/// Interleaved vertex as stored in mesh vertex buffers (56 bytes, POD)
///
/// Field order matches the canonical mesh layout: position, normal, color,
/// blend color.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct PackedVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
    pub blend_color: [f32; 4],
}

impl PackedVertex {
    pub fn new(position: Vec3, normal: Vec3, color: Vec4, blend_color: Vec4) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            color: color.to_array(),
            blend_color: blend_color.to_array(),
        }
    }

    /// Expand into a vertex stage input for one instance
    pub fn to_input(&self, instance_index: u32) -> VertexInput {
        VertexInput {
            instance_index,
            position: Vec3::from_array(self.position),
            normal: Vec3::from_array(self.normal),
            color: Vec4::from_array(self.color),
            blend_color: Vec4::from_array(self.blend_color),
        }
    }
}
