//! Material configuration (TOML)
//!
//! Selects the shading permutation and describes the material, lights and
//! post-lighting settings used to build a [`SoftwareHost`](crate::software::SoftwareHost).
//! Every section and field is optional and falls back to its default.

use std::path::Path;

use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};
use tint_common::{FEATURE_NORMALS, FEATURE_VERTEX_COLORS, PipelineMode, ShadingKey};

use crate::software::{
    AlphaMode, DirectionalLight, DistanceFog, FogMode, Lights, MIN_PERCEPTUAL_ROUGHNESS,
    PostProcessing, StandardMaterial, Tonemapping,
};

/// Error type for configuration loading and saving
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Material configuration.
///
/// Contains all settings organized into sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MaterialConfig {
    /// Shading permutation
    #[serde(default)]
    pub pipeline: PipelineConfig,
    /// Material bindings
    #[serde(default)]
    pub material: MaterialSettings,
    /// Scene lights
    #[serde(default)]
    pub lighting: LightingConfig,
    /// Post-lighting processing
    #[serde(default)]
    pub post: PostConfig,
}

/// Pipeline permutation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Forward or prepass (default: forward)
    #[serde(default)]
    pub mode: PipelineMode,
    /// Emit world-space normals (default: true)
    #[serde(default = "default_true")]
    pub normals: bool,
    /// Carry vertex colors and override the base color (default: true)
    #[serde(default = "default_true")]
    pub vertex_colors: bool,
}

/// Material binding settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSettings {
    /// Linear RGBA (default: opaque white)
    #[serde(default = "default_base_color")]
    pub base_color: [f32; 4],
    /// Alpha handling (default: opaque)
    #[serde(default)]
    pub alpha_mode: AlphaMode,
    /// (default: 0.5, range: 0.089-1.0)
    #[serde(default = "default_half")]
    pub perceptual_roughness: f32,
    /// (default: 0.0, range: 0.0-1.0)
    #[serde(default)]
    pub metallic: f32,
    /// (default: 0.5, range: 0.0-1.0)
    #[serde(default = "default_half")]
    pub reflectance: f32,
    /// Linear RGB (default: black)
    #[serde(default)]
    pub emissive: [f32; 3],
    #[serde(default)]
    pub unlit: bool,
    #[serde(default)]
    pub double_sided: bool,
}

/// Lighting settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightingConfig {
    /// Linear RGB ambient light (default: 0.1 grey)
    #[serde(default = "default_ambient")]
    pub ambient: [f32; 3],
    #[serde(default)]
    pub directional: Vec<DirectionalLightConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionalLightConfig {
    /// Direction the light travels (default: straight down)
    #[serde(default = "default_light_direction")]
    pub direction: [f32; 3],
    #[serde(default = "default_white")]
    pub color: [f32; 3],
    #[serde(default = "default_illuminance")]
    pub illuminance: f32,
}

/// Post-lighting settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PostConfig {
    #[serde(default)]
    pub tonemapping: Tonemapping,
    /// Distance fog, disabled when absent
    #[serde(default)]
    pub fog: Option<FogConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FogConfig {
    #[serde(default)]
    pub mode: FogMode,
    #[serde(default = "default_fog_color")]
    pub color: [f32; 4],
    #[serde(default = "default_fog_start")]
    pub start: f32,
    #[serde(default = "default_fog_end")]
    pub end: f32,
    #[serde(default = "default_fog_density")]
    pub density: f32,
}

fn default_true() -> bool {
    true
}
fn default_half() -> f32 {
    0.5
}
fn default_base_color() -> [f32; 4] {
    [1.0; 4]
}
fn default_white() -> [f32; 3] {
    [1.0; 3]
}
fn default_ambient() -> [f32; 3] {
    [0.1; 3]
}
fn default_light_direction() -> [f32; 3] {
    [0.0, -1.0, 0.0]
}
fn default_illuminance() -> f32 {
    1.0
}
fn default_fog_color() -> [f32; 4] {
    [0.5, 0.5, 0.5, 1.0]
}
fn default_fog_start() -> f32 {
    10.0
}
fn default_fog_end() -> f32 {
    100.0
}
fn default_fog_density() -> f32 {
    0.05
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            mode: PipelineMode::default(),
            normals: default_true(),
            vertex_colors: default_true(),
        }
    }
}

impl Default for MaterialSettings {
    fn default() -> Self {
        Self {
            base_color: default_base_color(),
            alpha_mode: AlphaMode::default(),
            perceptual_roughness: default_half(),
            metallic: 0.0,
            reflectance: default_half(),
            emissive: [0.0; 3],
            unlit: false,
            double_sided: false,
        }
    }
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            ambient: default_ambient(),
            directional: Vec::new(),
        }
    }
}

impl Default for DirectionalLightConfig {
    fn default() -> Self {
        Self {
            direction: default_light_direction(),
            color: default_white(),
            illuminance: default_illuminance(),
        }
    }
}

impl Default for FogConfig {
    fn default() -> Self {
        Self {
            mode: FogMode::default(),
            color: default_fog_color(),
            start: default_fog_start(),
            end: default_fog_end(),
            density: default_fog_density(),
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl PipelineConfig {
    /// Shading key selected by these settings
    pub fn shading_key(&self) -> ShadingKey {
        let mut flags = 0;
        if self.normals {
            flags |= FEATURE_NORMALS;
        }
        if self.vertex_colors {
            flags |= FEATURE_VERTEX_COLORS;
        }
        ShadingKey::new(self.mode, flags)
    }
}

impl MaterialSettings {
    pub fn to_material(&self) -> StandardMaterial {
        StandardMaterial {
            base_color: Vec4::from_array(self.base_color),
            alpha_mode: self.alpha_mode,
            perceptual_roughness: self.perceptual_roughness,
            metallic: self.metallic,
            reflectance: self.reflectance,
            emissive: Vec3::from_array(self.emissive),
            unlit: self.unlit,
            double_sided: self.double_sided,
        }
    }
}

impl LightingConfig {
    pub fn to_lights(&self) -> Lights {
        Lights {
            ambient: Vec3::from_array(self.ambient),
            directional: self
                .directional
                .iter()
                .map(|light| {
                    DirectionalLight::new(
                        Vec3::from_array(light.direction),
                        Vec3::from_array(light.color),
                        light.illuminance,
                    )
                })
                .collect(),
        }
    }
}

impl PostConfig {
    pub fn to_post_processing(&self) -> PostProcessing {
        PostProcessing {
            tonemapping: self.tonemapping,
            fog: self.fog.as_ref().map(|fog| DistanceFog {
                mode: fog.mode,
                color: Vec4::from_array(fog.color),
                start: fog.start,
                end: fog.end,
                density: fog.density,
            }),
        }
    }
}

// ============================================================================
// Loading / Saving
// ============================================================================

impl MaterialConfig {
    /// Shading key selected by the pipeline section
    pub fn shading_key(&self) -> ShadingKey {
        self.pipeline.shading_key()
    }

    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to pretty TOML text
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Loads a configuration file.
    ///
    /// Validation warnings are logged, not returned as errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;

        tracing::info!(
            "Loaded material config from {}: key={}",
            path.display(),
            config.shading_key().name()
        );
        for warning in config.validate() {
            tracing::warn!("{}: {}", path.display(), warning);
        }

        Ok(config)
    }

    /// Saves the configuration, creating parent directories if needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Check for values that load fine but shade oddly.
    ///
    /// Returns a list of warning messages.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        let material = &self.material;

        if !(MIN_PERCEPTUAL_ROUGHNESS..=1.0).contains(&material.perceptual_roughness) {
            warnings.push(format!(
                "material.perceptual_roughness {} is outside {}-1.0 and will be clamped",
                material.perceptual_roughness, MIN_PERCEPTUAL_ROUGHNESS
            ));
        }
        if !(0.0..=1.0).contains(&material.metallic) {
            warnings.push(format!(
                "material.metallic {} is outside 0.0-1.0 and will be clamped",
                material.metallic
            ));
        }
        if let AlphaMode::Mask(cutoff) = material.alpha_mode {
            if !(0.0..=1.0).contains(&cutoff) {
                warnings.push(format!(
                    "material.alpha_mode mask cutoff {} is outside 0.0-1.0",
                    cutoff
                ));
            }
        }

        for (i, light) in self.lighting.directional.iter().enumerate() {
            if Vec3::from_array(light.direction).length_squared() == 0.0 {
                warnings.push(format!(
                    "lighting.directional[{}] has a zero direction and contributes nothing",
                    i
                ));
            }
        }

        let bad_fog_range = self
            .post
            .fog
            .as_ref()
            .filter(|fog| fog.mode == FogMode::Linear && fog.end <= fog.start);
        if let Some(fog) = bad_fog_range {
            warnings.push(format!(
                "post.fog end {} is not greater than start {}",
                fog.end, fog.start
            ));
        }

        warnings
    }
}
