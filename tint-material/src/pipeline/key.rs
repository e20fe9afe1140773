//! Pipeline key types for caching

use tint_common::ShadingKey;

use super::MeshVertexLayout;

/// Key for pipeline cache lookup
///
/// Two draws share a pipeline when they use the same shading permutation and
/// meshes with identical vertex layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PipelineKey {
    pub shading: ShadingKey,
    /// Hash of the mesh vertex layout
    pub layout_hash: u64,
}

impl PipelineKey {
    pub fn new(shading: ShadingKey, layout: &MeshVertexLayout) -> Self {
        Self {
            shading,
            layout_hash: layout.layout_hash(),
        }
    }
}
