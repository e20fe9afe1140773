//! Parallel batch execution of stage invocations
//!
//! Invocations are independent, so a batch fans out over the rayon thread
//! pool. Results keep the order of their inputs.

use rayon::prelude::*;
use tint_common::{ShadingKey, VertexInput};
use tint_core::{FragmentOutput, MaterialServices, MeshServices, VertexOutput};

use crate::shading::{fragment_stage, vertex_stage};

/// Interpolated varyings and facing of one fragment, as produced by the rasterizer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FragmentInput {
    pub varyings: VertexOutput,
    pub is_front: bool,
}

/// Run the vertex stage over every vertex
pub fn run_vertex_batch<H>(host: &H, key: ShadingKey, vertices: &[VertexInput]) -> Vec<VertexOutput>
where
    H: MeshServices,
{
    tracing::debug!(
        "Running vertex batch: key={}, vertices={}",
        key.name(),
        vertices.len()
    );
    vertices
        .par_iter()
        .map(|vertex| vertex_stage(host, key, vertex))
        .collect()
}

/// Run the fragment stage over every fragment
///
/// Discarded fragments are `None` in the output.
pub fn run_fragment_batch<M>(
    host: &M,
    key: ShadingKey,
    fragments: &[FragmentInput],
) -> Vec<Option<FragmentOutput<M::Deferred>>>
where
    M: MaterialServices,
    M::Deferred: Send,
{
    tracing::debug!(
        "Running fragment batch: key={}, fragments={}",
        key.name(),
        fragments.len()
    );
    let outputs: Vec<_> = fragments
        .par_iter()
        .map(|fragment| fragment_stage(host, key, &fragment.varyings, fragment.is_front))
        .collect();

    tracing::debug!(
        "Fragment batch done: {} of {} discarded",
        outputs.iter().filter(|out| out.is_none()).count(),
        fragments.len()
    );
    outputs
}
