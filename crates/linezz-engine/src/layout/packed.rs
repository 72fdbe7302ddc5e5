use bytemuck::{Pod, Zeroable};
use half::f16;

use crate::coords::Vec2;

/// Three contiguous `f32`s with 4-byte alignment (`packed_float3`).
///
/// Unlike a SIMD `float3` this is never padded to a 16-byte stride.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct PackedFloat3(pub [f32; 3]);

assert_layout!(PackedFloat3, size = 12, align = 4);

impl PackedFloat3 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self([x, y, z])
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        self.0
    }
}

impl From<[f32; 3]> for PackedFloat3 {
    #[inline]
    fn from(v: [f32; 3]) -> Self {
        Self(v)
    }
}

/// Two contiguous `f32`s with 4-byte alignment (`packed_float2`).
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct PackedFloat2(pub [f32; 2]);

assert_layout!(PackedFloat2, size = 8, align = 4);

impl PackedFloat2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self([x, y])
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 2] {
        self.0
    }
}

impl From<[f32; 2]> for PackedFloat2 {
    #[inline]
    fn from(v: [f32; 2]) -> Self {
        Self(v)
    }
}

impl From<Vec2> for PackedFloat2 {
    #[inline]
    fn from(v: Vec2) -> Self {
        Self(v.to_array())
    }
}

/// Three contiguous IEEE 754 half-precision values (`packed_half3`).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct PackedHalf3 {
    pub x: f16,
    pub y: f16,
    pub z: f16,
}

assert_layout!(PackedHalf3, size = 6, align = 2);

impl PackedHalf3 {
    /// Rounds each component to the nearest representable half.
    ///
    /// Out-of-range values saturate to infinity; nothing is clamped to [0, 1].
    #[inline]
    pub fn from_f32(v: [f32; 3]) -> Self {
        Self {
            x: f16::from_f32(v[0]),
            y: f16::from_f32(v[1]),
            z: f16::from_f32(v[2]),
        }
    }

    #[inline]
    pub fn to_f32(self) -> [f32; 3] {
        [self.x.to_f32(), self.y.to_f32(), self.z.to_f32()]
    }

    /// Raw binary16 bit patterns, in component order.
    #[inline]
    pub fn to_bits(self) -> [u16; 3] {
        [self.x.to_bits(), self.y.to_bits(), self.z.to_bits()]
    }
}
