//! Software host
//!
//! A CPU reference implementation of [`tint_core::MeshServices`] and
//! [`tint_core::MaterialServices`]: instance table, perspective view,
//! standard material with alpha modes, ambient + directional PBR lighting,
//! distance fog and tone mapping, and a packed G-buffer for the prepass.

mod deferred;
mod host;
mod instances;
mod lighting;
mod material;
mod post;
mod raster;
mod view;

#[cfg(test)]
mod tests;

pub use deferred::{
    GBUFFER_FLAG_DOUBLE_SIDED, GBUFFER_FLAG_FRONT_FACING, GBUFFER_FLAG_UNLIT, GBufferData,
    GBufferTexel,
};
pub use host::SoftwareHost;
pub use instances::{InstanceTable, InstanceTransform};
pub use lighting::{
    DirectionalLight, Lights, MIN_PERCEPTUAL_ROUGHNESS, apply_pbr_lighting, distribution_ggx,
    fresnel_schlick, perceptual_roughness_to_roughness, specular_f0, visibility_smith_ggx,
};
pub use material::{AlphaMode, PbrInput, StandardMaterial};
pub use post::{
    DistanceFog, FogMode, PostProcessing, Tonemapping, luminance, main_pass_post_lighting,
};
pub use raster::interpolate_varyings;
pub use view::View;
