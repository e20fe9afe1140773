use tint_common::ShadingKey;
use tint_core::{FragmentOutput, MaterialLightingInput, MaterialServices, VertexOutput};

/// Fixed attenuation applied to the lit color in forward mode
///
/// Applied to all four channels, before post-lighting processing. Prepass
/// output is never attenuated.
pub const FORWARD_DIMMING: f32 = 0.4;

/// Run the fragment stage for one fragment
///
/// Order within the invocation:
/// 1. the host assembles the lighting input
/// 2. the vertex color replaces the material base color (vertex-color keys only)
/// 3. the host alpha policy runs on the replaced color and may discard
/// 4. prepass: the host encodes deferred output; forward: lighting, dimming,
///    then post-lighting processing
///
/// Returns `None` when the fragment is discarded.
pub fn fragment_stage<M>(
    host: &M,
    key: ShadingKey,
    varyings: &VertexOutput,
    is_front: bool,
) -> Option<FragmentOutput<M::Deferred>>
where
    M: MaterialServices + ?Sized,
{
    debug_assert!(
        varyings.validate(key).is_ok(),
        "varyings do not match shading key {}",
        key.name()
    );

    let mut input = host.assemble_input(varyings, is_front);

    if let (true, Some(color)) = (key.has_vertex_colors(), varyings.color()) {
        input.set_base_color(color);
    }

    let Some(base_color) = host.alpha_discard(&input, input.base_color()) else {
        tracing::trace!(key = key.name(), "fragment discarded by alpha policy");
        return None;
    };
    input.set_base_color(base_color);

    if key.is_prepass() {
        return Some(FragmentOutput::Deferred(host.encode_deferred(varyings, &input)));
    }

    let lit = host.apply_lighting(&input) * FORWARD_DIMMING;
    Some(FragmentOutput::Forward(host.post_lighting(&input, lit)))
}
