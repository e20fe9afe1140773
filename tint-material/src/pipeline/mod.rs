//! Pipeline specialization
//!
//! Resolves mesh vertex layouts against the attributes the material needs,
//! generates the permutation's shader and caches the result per
//! (shading key, mesh layout).

mod cache;
mod error;
mod key;
mod layout;
mod specialize;


pub use cache::PipelineCache;
pub use error::SpecializeError;
pub use key::PipelineKey;
pub use layout::{BufferAttribute, MeshAttribute, MeshVertexLayout, VertexBufferLayout};
pub use specialize::{PipelineDescriptor, VERTEX_ATTRIBUTE_REQUESTS, specialize};
