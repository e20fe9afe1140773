//! Shading feature flags and permutation keys
//!
//! A [`ShadingKey`] is the compile-time configuration chosen by the host for a
//! draw: the pipeline mode plus the optional varyings the vertex stage emits.
//! The shading stages are a pure function of the key.

use serde::{Deserialize, Serialize};

// ============================================================================
// Feature Flags
// ============================================================================

/// Feature flag: the vertex stage produces world-space normals
pub const FEATURE_NORMALS: u8 = 1;
/// Feature flag: per-vertex color is carried through to the fragment stage
pub const FEATURE_VERTEX_COLORS: u8 = 2;
/// All feature flags combined
pub const FEATURE_ALL: u8 = FEATURE_NORMALS | FEATURE_VERTEX_COLORS;

/// Number of feature flag combinations (0-3)
pub const FEATURE_COMBINATIONS: usize = 4;

// ============================================================================
// Shader Defs
// ============================================================================

/// Shader def set when the fragment stage writes deferred output
pub const SHADER_DEF_PREPASS: &str = "PREPASS_PIPELINE";
/// Shader def set when world-space normals are produced
pub const SHADER_DEF_VERTEX_NORMALS: &str = "VERTEX_NORMALS";
/// Shader def set when vertex colors are carried through
pub const SHADER_DEF_VERTEX_COLORS: &str = "VERTEX_COLORS";

/// Where the fragment stage sends its result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineMode {
    /// Lighting is resolved in the same pass that samples the material
    #[default]
    Forward,
    /// Material data is encoded for a later, host-owned lighting pass
    Prepass,
}

impl PipelineMode {
    /// Both modes, forward first
    pub const ALL: [PipelineMode; 2] = [PipelineMode::Forward, PipelineMode::Prepass];

    /// Human-readable name used in pipeline labels
    pub const fn name(self) -> &'static str {
        match self {
            PipelineMode::Forward => "Forward",
            PipelineMode::Prepass => "Prepass",
        }
    }
}

/// Pipeline permutation selected by the host for one draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ShadingKey {
    /// Forward or prepass output
    pub mode: PipelineMode,
    /// Combination of FEATURE_* flags
    pub flags: u8,
}

impl ShadingKey {
    /// Create a key from a mode and FEATURE_* flags
    pub const fn new(mode: PipelineMode, flags: u8) -> Self {
        Self { mode, flags }
    }

    /// Forward-mode key
    pub const fn forward(flags: u8) -> Self {
        Self::new(PipelineMode::Forward, flags)
    }

    /// Prepass-mode key
    pub const fn prepass(flags: u8) -> Self {
        Self::new(PipelineMode::Prepass, flags)
    }

    /// Check if world-space normals are produced
    #[inline]
    pub const fn has_normals(&self) -> bool {
        self.flags & FEATURE_NORMALS != 0
    }

    /// Check if vertex colors are carried through
    #[inline]
    pub const fn has_vertex_colors(&self) -> bool {
        self.flags & FEATURE_VERTEX_COLORS != 0
    }

    /// Check if the fragment stage writes deferred output
    #[inline]
    pub const fn is_prepass(&self) -> bool {
        matches!(self.mode, PipelineMode::Prepass)
    }

    /// Check that no unknown flag bits are set
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.flags & !FEATURE_ALL == 0
    }

    /// Human-readable permutation name for labels and debugging
    pub const fn name(&self) -> &'static str {
        match (self.mode, self.flags) {
            (PipelineMode::Forward, 0) => "FORWARD",
            (PipelineMode::Forward, 1) => "FORWARD_NORMAL",
            (PipelineMode::Forward, 2) => "FORWARD_COLOR",
            (PipelineMode::Forward, 3) => "FORWARD_NORMAL_COLOR",
            (PipelineMode::Prepass, 0) => "PREPASS",
            (PipelineMode::Prepass, 1) => "PREPASS_NORMAL",
            (PipelineMode::Prepass, 2) => "PREPASS_COLOR",
            (PipelineMode::Prepass, 3) => "PREPASS_NORMAL_COLOR",
            _ => "UNKNOWN",
        }
    }

    /// Shader defs that select this permutation in the WGSL template
    pub fn shader_defs(&self) -> Vec<&'static str> {
        let mut defs = Vec::with_capacity(3);
        if self.is_prepass() {
            defs.push(SHADER_DEF_PREPASS);
        }
        if self.has_normals() {
            defs.push(SHADER_DEF_VERTEX_NORMALS);
        }
        if self.has_vertex_colors() {
            defs.push(SHADER_DEF_VERTEX_COLORS);
        }
        defs
    }

    /// Every valid permutation (2 modes x 4 flag combinations)
    pub fn all() -> impl Iterator<Item = ShadingKey> {
        PipelineMode::ALL.into_iter().flat_map(|mode| {
            (0..FEATURE_COMBINATIONS as u8).map(move |flags| ShadingKey::new(mode, flags))
        })
    }
}
