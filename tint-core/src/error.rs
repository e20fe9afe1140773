use thiserror::Error;

/// Mismatch between the varyings a vertex produced and the active shading key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VaryingsError {
    /// Key enables normals but the varyings carry none
    #[error("shading key {key} expects a world normal, but none was produced")]
    MissingWorldNormal { key: &'static str },

    /// Key disables normals but the varyings carry one
    #[error("shading key {key} has no normals, but a world normal was produced")]
    UnexpectedWorldNormal { key: &'static str },

    /// Key enables vertex colors but the varyings carry none
    #[error("shading key {key} expects a vertex color, but none was produced")]
    MissingColor { key: &'static str },

    /// Key disables vertex colors but the varyings carry one
    #[error("shading key {key} has no vertex colors, but a color was produced")]
    UnexpectedColor { key: &'static str },
}
