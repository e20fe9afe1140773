use tint_common::VertexFormat;

use crate::shader_gen::ShaderGenError;

/// Error type for pipeline specialization failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpecializeError {
    /// The mesh does not provide an attribute the pipeline requests
    #[error("mesh is missing vertex attribute {name} (id {id})")]
    MissingVertexAttribute { name: &'static str, id: u64 },
    /// The mesh provides the attribute in a different format
    #[error("vertex attribute {name} is {actual:?}, pipeline expects {expected:?}")]
    FormatMismatch {
        name: &'static str,
        expected: VertexFormat,
        actual: VertexFormat,
    },
    /// The mesh layout lists the same attribute id twice
    #[error("vertex attribute {name} (id {id}) appears more than once in the mesh layout")]
    DuplicateAttribute { name: &'static str, id: u64 },
    /// Shading key has flag bits outside FEATURE_ALL
    #[error("invalid shading key flags {flags:#04x}")]
    InvalidKey { flags: u8 },
    #[error(transparent)]
    ShaderGen(#[from] ShaderGenError),
}
