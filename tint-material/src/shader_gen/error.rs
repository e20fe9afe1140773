use std::fmt;

/// Error type for shader generation failures
///
/// Line numbers are 1-based and refer to the template source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShaderGenError {
    /// Shading key has flag bits outside FEATURE_ALL
    InvalidKey { flags: u8 },
    /// `#ifdef` / `#ifndef` without a def name
    MissingDefName { line: usize },
    /// `#else` outside a conditional block, or a second `#else` in one block
    UnexpectedElse { line: usize },
    /// `#endif` without an open conditional block
    UnexpectedEndif { line: usize },
    /// Conditional block still open at end of input
    UnclosedBlock { line: usize },
}

impl fmt::Display for ShaderGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderGenError::InvalidKey { flags } => {
                write!(f, "Invalid shading key flags: {:#04x}", flags)
            }
            ShaderGenError::MissingDefName { line } => {
                write!(f, "Line {}: conditional directive is missing a def name", line)
            }
            ShaderGenError::UnexpectedElse { line } => {
                write!(f, "Line {}: #else without a matching #ifdef/#ifndef", line)
            }
            ShaderGenError::UnexpectedEndif { line } => {
                write!(f, "Line {}: #endif without a matching #ifdef/#ifndef", line)
            }
            ShaderGenError::UnclosedBlock { line } => {
                write!(f, "Line {}: conditional block is never closed", line)
            }
        }
    }
}

impl std::error::Error for ShaderGenError {}
