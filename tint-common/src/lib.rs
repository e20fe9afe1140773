//! Shared types and utilities for the vertex-tint material
//!
//! This crate provides the pieces shared between:
//! - `tint-core` (host service traits and stage varyings)
//! - `tint-material` (shading stages, pipeline specialization, software host)
//!
//! # Modules
//!
//! - [`features`] - Feature flags and the [`ShadingKey`] permutation key
//! - [`vertex`] - Vertex attributes, shader locations and the interleaved vertex
//! - [`packing`] - Color/normal/half-float packing used by deferred encoding

pub mod features;
pub mod packing;
pub mod vertex;

pub use features::{
    FEATURE_ALL, FEATURE_COMBINATIONS, FEATURE_NORMALS, FEATURE_VERTEX_COLORS, PipelineMode,
    SHADER_DEF_PREPASS, SHADER_DEF_VERTEX_COLORS, SHADER_DEF_VERTEX_NORMALS, ShadingKey,
};

pub use packing::{
    decode_octahedral, encode_octahedral, pack_f16x2, pack_octahedral_u32, pack_rgb8, pack_rgba8,
    pack_unorm8, unpack_f16x2, unpack_octahedral_u32, unpack_rgb8, unpack_rgba8, unpack_unorm8,
};

pub use vertex::{
    ATTRIBUTE_BLEND_COLOR, ATTRIBUTE_COLOR, ATTRIBUTE_NORMAL, ATTRIBUTE_POSITION,
    AttributeRequest, LOCATION_BLEND_COLOR, LOCATION_COLOR, LOCATION_NORMAL, LOCATION_POSITION,
    PACKED_VERTEX_STRIDE, PackedVertex, VertexAttribute, VertexFormat, VertexInput,
};

// Re-export glam so downstream crates agree on the math types
pub use glam;
