//! Vertex fetch
//!
//! Decodes a raw interleaved vertex buffer into [`VertexInput`]s using a
//! specialized [`VertexBufferLayout`], the way the input assembler would.

use glam::{Vec3, Vec4};
use tint_common::{
    LOCATION_BLEND_COLOR, LOCATION_COLOR, LOCATION_NORMAL, LOCATION_POSITION, VertexFormat,
    VertexInput,
};

use crate::pipeline::{BufferAttribute, VertexBufferLayout};

/// Error type for vertex fetch failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("vertex buffer layout has zero stride")]
    ZeroStride,
    #[error("vertex buffer length {len} is not a multiple of the stride {stride}")]
    MisalignedLength { len: usize, stride: u64 },
    #[error("no attribute bound at shader location {location}")]
    MissingAttribute { location: u32 },
    #[error("attribute at location {location} has unsupported format {format:?}")]
    UnsupportedFormat { location: u32, format: VertexFormat },
    #[error("attribute at location {location} (offset {offset}) overruns the stride {stride}")]
    AttributeOutOfBounds { location: u32, offset: u64, stride: u64 },
}

/// Decode all vertices in `bytes` for one draw instance
///
/// Position is required. Normal, color and blend color default to zero,
/// opaque white and zero when the layout does not bind them.
pub fn fetch_vertices(
    bytes: &[u8],
    layout: &VertexBufferLayout,
    instance_index: u32,
) -> Result<Vec<VertexInput>, FetchError> {
    let stride = layout.array_stride;
    if stride == 0 {
        return Err(FetchError::ZeroStride);
    }
    if bytes.len() as u64 % stride != 0 {
        return Err(FetchError::MisalignedLength {
            len: bytes.len(),
            stride,
        });
    }

    for attr in &layout.attributes {
        if attr
            .offset
            .checked_add(attr.format.size())
            .is_none_or(|end| end > stride)
        {
            return Err(FetchError::AttributeOutOfBounds {
                location: attr.shader_location,
                offset: attr.offset,
                stride,
            });
        }
    }

    let position = layout
        .attribute_at(LOCATION_POSITION)
        .ok_or(FetchError::MissingAttribute {
            location: LOCATION_POSITION,
        })?;
    expect_format(position, VertexFormat::Float32x3)?;

    let normal = optional(layout, LOCATION_NORMAL, VertexFormat::Float32x3)?;
    let color = optional(layout, LOCATION_COLOR, VertexFormat::Float32x4)?;
    let blend_color = optional(layout, LOCATION_BLEND_COLOR, VertexFormat::Float32x4)?;

    let vertices = bytes
        .chunks_exact(stride as usize)
        .map(|vertex| VertexInput {
            instance_index,
            position: read_vec3(vertex, position),
            normal: normal.map_or(Vec3::ZERO, |attr| read_vec3(vertex, attr)),
            color: color.map_or(Vec4::ONE, |attr| read_vec4(vertex, attr)),
            blend_color: blend_color.map_or(Vec4::ZERO, |attr| read_vec4(vertex, attr)),
        })
        .collect();

    Ok(vertices)
}

fn optional(
    layout: &VertexBufferLayout,
    location: u32,
    format: VertexFormat,
) -> Result<Option<&BufferAttribute>, FetchError> {
    layout
        .attribute_at(location)
        .map(|attr| expect_format(attr, format).map(|()| attr))
        .transpose()
}

fn expect_format(attr: &BufferAttribute, format: VertexFormat) -> Result<(), FetchError> {
    if attr.format == format {
        Ok(())
    } else {
        Err(FetchError::UnsupportedFormat {
            location: attr.shader_location,
            format: attr.format,
        })
    }
}

fn read_vec3(vertex: &[u8], attr: &BufferAttribute) -> Vec3 {
    let start = attr.offset as usize;
    Vec3::from_array(bytemuck::pod_read_unaligned(&vertex[start..start + 12]))
}

fn read_vec4(vertex: &[u8], attr: &BufferAttribute) -> Vec4 {
    let start = attr.offset as usize;
    Vec4::from_array(bytemuck::pod_read_unaligned(&vertex[start..start + 16]))
}
