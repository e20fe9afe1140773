//! Pipeline cache management
//!
//! Caches specialized pipeline descriptors keyed by shading permutation and
//! mesh layout.

use hashbrown::HashMap;
use tint_common::ShadingKey;

use super::{MeshVertexLayout, PipelineDescriptor, PipelineKey, SpecializeError, specialize};

/// Cache for specialized pipelines
///
/// Pipelines are specialized on demand and reused across draws. Failed
/// specializations are not cached.
#[derive(Debug, Default)]
pub struct PipelineCache {
    pipelines: HashMap<PipelineKey, PipelineDescriptor>,
}

impl PipelineCache {
    /// Create an empty pipeline cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Specialize every permutation for one mesh layout up front
    ///
    /// Returns the number of pipelines now cached for the layout.
    pub fn precompile_all(&mut self, layout: &MeshVertexLayout) -> Result<usize, SpecializeError> {
        tracing::info!("Precompiling all shading permutations...");

        let mut count = 0;
        for key in ShadingKey::all() {
            self.get_or_specialize(key, layout)?;
            count += 1;
        }

        tracing::info!("Successfully precompiled {} pipelines", count);
        Ok(count)
    }

    /// Get or specialize a pipeline for the given key and mesh layout
    ///
    /// Returns a reference to the cached descriptor, specializing it if necessary.
    pub fn get_or_specialize(
        &mut self,
        key: ShadingKey,
        layout: &MeshVertexLayout,
    ) -> Result<&PipelineDescriptor, SpecializeError> {
        let cache_key = PipelineKey::new(key, layout);

        // Return existing pipeline if cached
        if self.pipelines.contains_key(&cache_key) {
            return Ok(&self.pipelines[&cache_key]);
        }

        // Otherwise, specialize a new pipeline
        tracing::debug!(
            "Specializing pipeline: key={}, stride={}, attributes={}",
            key.name(),
            layout.stride(),
            layout.attributes().len()
        );

        let descriptor = specialize(key, layout).inspect_err(|e| {
            tracing::warn!("Pipeline specialization failed for {}: {}", key.name(), e);
        })?;
        self.pipelines.insert(cache_key, descriptor);
        Ok(&self.pipelines[&cache_key])
    }

    /// Check if a pipeline exists in the cache
    pub fn contains(&self, key: ShadingKey, layout: &MeshVertexLayout) -> bool {
        self.pipelines.contains_key(&PipelineKey::new(key, layout))
    }

    pub fn len(&self) -> usize {
        self.pipelines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipelines.is_empty()
    }

    /// Drop all cached pipelines
    pub fn clear(&mut self) {
        self.pipelines.clear();
    }
}
