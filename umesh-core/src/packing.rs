//! Packed-direction encoding
//!
//! Source engines store per-vertex normals and tangents as a 32-bit word
//! with one signed fixed-point byte per component:
//!
//! ```text
//! bits  0..8   x
//! bits  8..16  y
//! bits 16..24  z
//! bits 24..32  w (tangent basis handedness; unused for normals)
//! ```
//!
//! Each byte `b` decodes as `b / 127.5 - 1.0`, so `0x00` → -1.0 and
//! `0xFF` → 1.0. The layout must match the source engine bit-for-bit:
//! a wrong decode does not fail, it silently corrupts lighting.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Fixed-point packed direction, one byte per component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
#[repr(transparent)]
pub struct PackedNormal(pub u32);

impl PackedNormal {
    /// Decode the x/y/z components to a direction vector.
    #[inline]
    pub fn decode(self) -> Vec3 {
        Vec3::new(
            unpack_byte(self.0 as u8),
            unpack_byte((self.0 >> 8) as u8),
            unpack_byte((self.0 >> 16) as u8),
        )
    }

    /// Decode the w component (handedness sign of the tangent basis).
    #[inline]
    pub fn decode_w(self) -> f32 {
        unpack_byte((self.0 >> 24) as u8)
    }

    /// Encode a direction, quantizing each component to a byte.
    /// The w byte is left at zero.
    #[inline]
    pub fn encode(dir: Vec3) -> Self {
        Self(
            pack_byte(dir.x) as u32
                | (pack_byte(dir.y) as u32) << 8
                | (pack_byte(dir.z) as u32) << 16,
        )
    }
}

#[inline]
fn unpack_byte(b: u8) -> f32 {
    b as f32 / 127.5 - 1.0
}

#[inline]
fn pack_byte(v: f32) -> u8 {
    ((v.clamp(-1.0, 1.0) + 1.0) * 127.5).round() as u8
}
