//! Vertex-tint material
//!
//! A mesh material that replaces the PBR base color with the interpolated
//! per-vertex color, then lights it (forward) or encodes it for a deferred
//! lighting pass (prepass). All lighting, alpha and G-buffer policy belongs to
//! the host and is reached through the service traits in `tint-core`.
//!
//! # Modules
//!
//! - [`shading`] - The vertex and fragment stages
//! - [`pipeline`] - Vertex layout specialization and the pipeline cache
//! - [`shader_gen`] - WGSL permutations for each shading key
//! - [`fetch`] - Decoding raw vertex buffers into stage inputs
//! - [`software`] - CPU reference host
//! - [`batch`] - Parallel execution of many invocations
//! - [`config`] - TOML material configuration

pub mod batch;
pub mod config;
pub mod fetch;
pub mod pipeline;
pub mod shader_gen;
pub mod shading;
pub mod software;

#[cfg(test)]
mod test_utils;

pub use batch::{FragmentInput, run_fragment_batch, run_vertex_batch};
pub use config::{ConfigError, MaterialConfig};
pub use fetch::{FetchError, fetch_vertices};
pub use pipeline::{
    MeshVertexLayout, PipelineCache, PipelineDescriptor, SpecializeError, VertexBufferLayout,
    specialize,
};
pub use shader_gen::{ShaderGenError, generate_shader};
pub use shading::{FORWARD_DIMMING, fragment_stage, vertex_stage};
pub use software::SoftwareHost;

pub use tint_common::{PipelineMode, ShadingKey, VertexInput};
pub use tint_core::{
    FragmentOutput, MaterialLightingInput, MaterialServices, MeshServices, VertexOutput,
};
