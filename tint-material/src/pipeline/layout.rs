//! Mesh vertex layouts and their specialization into buffer layouts
//!
//! A [`MeshVertexLayout`] describes what a mesh actually stores: an ordered,
//! interleaved list of attributes. A pipeline asks for attributes at shader
//! locations and gets back a [`VertexBufferLayout`] with the byte offsets
//! resolved, or an error naming the first attribute it cannot satisfy.

use std::hash::{Hash, Hasher};

use tint_common::{
    ATTRIBUTE_BLEND_COLOR, ATTRIBUTE_COLOR, ATTRIBUTE_NORMAL, ATTRIBUTE_POSITION,
    AttributeRequest, VertexAttribute, VertexFormat,
};

use super::SpecializeError;

/// One attribute in a mesh layout with its byte offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshAttribute {
    pub attribute: VertexAttribute,
    pub offset: u64,
}

/// Interleaved attribute layout of a mesh vertex buffer
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MeshVertexLayout {
    attributes: Vec<MeshAttribute>,
    stride: u64,
}

impl MeshVertexLayout {
    /// Build a layout from attributes in buffer order
    ///
    /// Offsets are packed with no padding. Each attribute id may appear once.
    pub fn new(attributes: &[VertexAttribute]) -> Result<Self, SpecializeError> {
        for (i, attribute) in attributes.iter().enumerate() {
            if attributes[..i].iter().any(|prev| prev.id == attribute.id) {
                return Err(SpecializeError::DuplicateAttribute {
                    name: attribute.name,
                    id: attribute.id,
                });
            }
        }
        Ok(Self::packed(attributes))
    }

    /// Layout of [`tint_common::PackedVertex`]: position, normal, color, blend color
    pub fn standard() -> Self {
        Self::packed(&[
            ATTRIBUTE_POSITION,
            ATTRIBUTE_NORMAL,
            ATTRIBUTE_COLOR,
            ATTRIBUTE_BLEND_COLOR,
        ])
    }

    fn packed(attributes: &[VertexAttribute]) -> Self {
        let mut offset = 0;
        let attributes = attributes
            .iter()
            .map(|&attribute| {
                let slot = MeshAttribute { attribute, offset };
                offset += attribute.format.size();
                slot
            })
            .collect();
        Self {
            attributes,
            stride: offset,
        }
    }

    /// Bytes per vertex
    #[inline]
    pub fn stride(&self) -> u64 {
        self.stride
    }

    pub fn attributes(&self) -> &[MeshAttribute] {
        &self.attributes
    }

    /// Check if the mesh stores an attribute id
    pub fn contains(&self, id: u64) -> bool {
        self.find(id).is_some()
    }

    fn find(&self, id: u64) -> Option<&MeshAttribute> {
        self.attributes.iter().find(|slot| slot.attribute.id == id)
    }

    /// Resolve requested attributes against this mesh
    ///
    /// The returned layout lists attributes in request order.
    pub fn get_layout(
        &self,
        requests: &[AttributeRequest],
    ) -> Result<VertexBufferLayout, SpecializeError> {
        let mut attributes = Vec::with_capacity(requests.len());

        for request in requests {
            let wanted = request.attribute;
            let slot = self
                .find(wanted.id)
                .ok_or(SpecializeError::MissingVertexAttribute {
                    name: wanted.name,
                    id: wanted.id,
                })?;

            if slot.attribute.format != wanted.format {
                return Err(SpecializeError::FormatMismatch {
                    name: wanted.name,
                    expected: wanted.format,
                    actual: slot.attribute.format,
                });
            }

            attributes.push(BufferAttribute {
                format: wanted.format,
                offset: slot.offset,
                shader_location: request.shader_location,
            });
        }

        Ok(VertexBufferLayout {
            array_stride: self.stride,
            attributes,
        })
    }

    /// Stable hash of the layout, used in pipeline keys
    pub fn layout_hash(&self) -> u64 {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

/// One bound attribute of a vertex buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferAttribute {
    pub format: VertexFormat,
    pub offset: u64,
    pub shader_location: u32,
}

/// Vertex buffer binding produced by specialization
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VertexBufferLayout {
    pub array_stride: u64,
    pub attributes: Vec<BufferAttribute>,
}

impl VertexBufferLayout {
    /// Attribute bound at a shader location
    pub fn attribute_at(&self, shader_location: u32) -> Option<&BufferAttribute> {
        self.attributes
            .iter()
            .find(|attr| attr.shader_location == shader_location)
    }
}
