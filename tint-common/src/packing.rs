//! Packing utilities for deferred output
//!
//! Converts f32 shading data to compact G-buffer formats:
//! - f32 → unorm8 (unsigned normalized, 0.0 to 1.0)
//! - f32 → f16 (IEEE 754 half-float), two per u32
//! - Vec3 direction → octahedral snorm16x2 in a u32

use glam::{Vec3, Vec4};
use half::f16;

// ============================================================================
// Scalar Conversion
// ============================================================================

/// Pack an f32 channel [0.0, 1.0] to u8 [0, 255]
#[inline]
pub fn pack_unorm8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Unpack u8 [0, 255] to f32 [0.0, 1.0]
#[inline]
pub fn unpack_unorm8(value: u8) -> f32 {
    value as f32 / 255.0
}

#[inline]
fn f32_to_snorm16(value: f32) -> i16 {
    (value.clamp(-1.0, 1.0) * 32767.0).round() as i16
}

// ============================================================================
// Half-Float Packing
// ============================================================================

/// Pack two f32 values into a u32 as f16x2 (x in the low half)
#[inline]
pub fn pack_f16x2(x: f32, y: f32) -> u32 {
    let x_bits = f16::from_f32(x).to_bits() as u32;
    let y_bits = f16::from_f32(y).to_bits() as u32;
    x_bits | (y_bits << 16)
}

/// Unpack a u32 holding f16x2 into two f32 values
#[inline]
pub fn unpack_f16x2(packed: u32) -> (f32, f32) {
    let x = f16::from_bits((packed & 0xFFFF) as u16).to_f32();
    let y = f16::from_bits((packed >> 16) as u16).to_f32();
    (x, y)
}

// ============================================================================
// Color Packing
// ============================================================================

/// Pack RGBA [0.0, 1.0] to u32 RGBA8
/// Format: 0xRRGGBBAA (R in highest byte, A in lowest)
#[inline]
pub fn pack_rgba8(color: Vec4) -> u32 {
    ((pack_unorm8(color.x) as u32) << 24)
        | ((pack_unorm8(color.y) as u32) << 16)
        | ((pack_unorm8(color.z) as u32) << 8)
        | (pack_unorm8(color.w) as u32)
}

/// Unpack u32 RGBA8 (0xRRGGBBAA) to RGBA
#[inline]
pub fn unpack_rgba8(packed: u32) -> Vec4 {
    Vec4::new(
        unpack_unorm8((packed >> 24) as u8),
        unpack_unorm8((packed >> 16) as u8),
        unpack_unorm8((packed >> 8) as u8),
        unpack_unorm8(packed as u8),
    )
}

/// Pack RGB [0.0, 1.0] into the upper 24 bits of a u32 (0xRRGGBB00)
///
/// The low byte is left free for flags.
#[inline]
pub fn pack_rgb8(color: Vec3) -> u32 {
    pack_rgba8(color.extend(0.0))
}

/// Unpack the upper 24 bits of a u32 to RGB
#[inline]
pub fn unpack_rgb8(packed: u32) -> Vec3 {
    unpack_rgba8(packed).truncate()
}

// ============================================================================
// Normal Packing
// ============================================================================

/// Encode normalized direction to octahedral coordinates in [-1, 1]²
#[inline]
pub fn encode_octahedral(dir: Vec3) -> (f32, f32) {
    let dir = dir.normalize_or_zero();

    let l1_norm = dir.x.abs() + dir.y.abs() + dir.z.abs();
    if l1_norm == 0.0 {
        return (0.0, 0.0);
    }

    let mut u = dir.x / l1_norm;
    let mut v = dir.y / l1_norm;

    if dir.z < 0.0 {
        let u_abs = u.abs();
        let v_abs = v.abs();
        u = (1.0 - v_abs) * if u >= 0.0 { 1.0 } else { -1.0 };
        v = (1.0 - u_abs) * if v >= 0.0 { 1.0 } else { -1.0 };
    }

    (u, v)
}

/// Decode octahedral coordinates in [-1, 1]² back to a normalized direction
#[inline]
pub fn decode_octahedral(u: f32, v: f32) -> Vec3 {
    let mut dir = Vec3::new(u, v, 1.0 - u.abs() - v.abs());

    if dir.z < 0.0 {
        let old_x = dir.x;
        dir.x = (1.0 - dir.y.abs()) * if old_x >= 0.0 { 1.0 } else { -1.0 };
        dir.y = (1.0 - old_x.abs()) * if dir.y >= 0.0 { 1.0 } else { -1.0 };
    }

    dir.normalize_or_zero()
}

/// Pack a direction to u32 using octahedral encoding (2x snorm16)
#[inline]
pub fn pack_octahedral_u32(dir: Vec3) -> u32 {
    let (u, v) = encode_octahedral(dir);
    let u_snorm = f32_to_snorm16(u);
    let v_snorm = f32_to_snorm16(v);
    (u_snorm as u16 as u32) | ((v_snorm as u16 as u32) << 16)
}

/// Unpack a u32 octahedral direction
#[inline]
pub fn unpack_octahedral_u32(packed: u32) -> Vec3 {
    let u = (packed & 0xFFFF) as u16 as i16 as f32 / 32767.0;
    let v = (packed >> 16) as u16 as i16 as f32 / 32767.0;
    decode_octahedral(u, v)
}
