//! Vertex-Tint Core - the seam between the shading stage and its host engine
//!
//! The shading stage never owns transforms, materials or lighting. It reaches
//! them through the service traits defined here, so the same stage logic runs
//! against a real engine, the software host in `tint-material`, or a mock.
//!
//! # Architecture
//!
//! - [`MeshServices`] - Instance transform lookup and position/normal/clip transforms
//! - [`MaterialServices`] - Material input assembly, alpha discard, lighting,
//!   deferred encoding and post-lighting processing
//! - [`VertexOutput`] - Varyings passed from the vertex to the fragment stage
//! - [`FragmentOutput`] - Forward color or host-encoded deferred output

pub mod error;
pub mod host;
pub mod stage;

pub use error::VaryingsError;
pub use host::{MaterialServices, MeshServices};
pub use stage::{FragmentOutput, MaterialLightingInput, VertexOutput};
