//! Shader generation for the vertex-tint material
//!
//! One WGSL template covers all 8 permutations. `#ifdef` blocks keyed on the
//! shader defs of a [`ShadingKey`] select:
//! - `PREPASS_PIPELINE`: deferred output instead of forward lighting
//! - `VERTEX_NORMALS`: world-space normal varying
//! - `VERTEX_COLORS`: vertex color varying and base color override
//!
//! Bevy `#import` lines are left for the host's shader loader.

mod error;
mod preprocess;

pub use error::ShaderGenError;
pub use preprocess::preprocess;

use tint_common::ShadingKey;

const TEMPLATE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/shaders/vertex_tint.wgsl"
));

/// Get the unprocessed shader template (for debugging/inspection)
pub fn get_template() -> &'static str {
    TEMPLATE
}

/// Generate the WGSL source for one shading permutation
///
/// # Errors
///
/// Returns `ShaderGenError::InvalidKey` if the key has unknown flag bits, or a
/// directive error if the template is malformed.
pub fn generate_shader(key: ShadingKey) -> Result<String, ShaderGenError> {
    if !key.is_valid() {
        return Err(ShaderGenError::InvalidKey { flags: key.flags });
    }
    preprocess(TEMPLATE, &key.shader_defs())
}
