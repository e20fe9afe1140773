//! The vertex-tint shading stage
//!
//! Two dependency-ordered stages, each a pure function of its inputs, the
//! shading key and the host's service responses:
//! - [`vertex_stage`] - world/clip transforms and optional varyings
//! - [`fragment_stage`] - vertex-color override, alpha discard, then forward
//!   lighting or deferred encoding

mod fragment;
mod vertex;


pub use fragment::{FORWARD_DIMMING, fragment_stage};
pub use vertex::vertex_stage;
