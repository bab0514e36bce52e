//! # Voxel Types
//!
//! The output unit of the engine and the key it is deduplicated by.
//!
//! ## Quantization
//!
//! Continuous coordinates are snapped to the lattice with round-half-up:
//! `0.5 -> 1`, `-0.5 -> 0`, `-1.5 -> -1`. [`quantize`] is the only place this
//! rule lives; every writer goes through it.

use std::fmt;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Opaque color identifier, conventionally `0xRRGGBB`.
///
/// The engine never interprets it; it is carried through unchanged.
#[repr(transparent)]
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable, Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    /// Builds a color from 8-bit channels.
    #[inline]
    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Returns the raw value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns the `(r, g, b)` channels.
    #[inline]
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        (
            ((self.0 >> 16) & 0xFF) as u8,
            ((self.0 >> 8) & 0xFF) as u8,
            (self.0 & 0xFF) as u8,
        )
    }
}

impl From<u32> for Color {
    #[inline]
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

/// Rounds a continuous coordinate to its lattice cell.
///
/// Ties round toward positive infinity. Returns `None` for NaN and infinite
/// input, and for values whose cell falls outside the `i32` range.
#[inline]
#[must_use]
pub fn quantize(value: f64) -> Option<i32> {
    if !value.is_finite() {
        return None;
    }
    let floor = value.floor();
    // Exact for every finite double.
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    lattice_coord(rounded)
}

/// Converts an integral `f64` to a lattice coordinate, rejecting anything
/// `i32` cannot hold.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn lattice_coord(integral: f64) -> Option<i32> {
    if (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&integral) {
        Some(integral as i32)
    } else {
        None
    }
}

/// Canonical integer coordinate of a lattice cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VoxelKey {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate (vertical).
    pub y: i32,
    /// Z coordinate.
    pub z: i32,
}

impl VoxelKey {
    /// Creates a key from lattice coordinates.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Quantizes a continuous position.
    ///
    /// Returns `None` if any axis is NaN or infinite.
    #[inline]
    #[must_use]
    pub fn quantize(x: f64, y: f64, z: f64) -> Option<Self> {
        Some(Self::new(quantize(x)?, quantize(y)?, quantize(z)?))
    }
}

impl From<[i32; 3]> for VoxelKey {
    #[inline]
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

/// A colored lattice cell: the unit of engine output.
///
/// `#[repr(C)]` and `Pod`, so a flattened model can be viewed as bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Voxel {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate (vertical).
    pub y: i32,
    /// Z coordinate.
    pub z: i32,
    /// Opaque color.
    pub color: Color,
}

impl Voxel {
    /// Creates a voxel.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32, color: Color) -> Self {
        Self { x, y, z, color }
    }

    /// Creates a voxel at a key.
    #[inline]
    #[must_use]
    pub const fn at(key: VoxelKey, color: Color) -> Self {
        Self::new(key.x, key.y, key.z, color)
    }

    /// Returns the cell this voxel occupies.
    #[inline]
    #[must_use]
    pub const fn key(self) -> VoxelKey {
        VoxelKey::new(self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantize_rounds_half_up() {
        assert_eq!(quantize(0.4), Some(0));
        assert_eq!(quantize(0.5), Some(1));
        assert_eq!(quantize(-0.5), Some(0));
        assert_eq!(quantize(-0.51), Some(-1));
        assert_eq!(quantize(-1.5), Some(-1));
        assert_eq!(quantize(2.5), Some(3));
        assert_eq!(quantize(7.0), Some(7));
    }

    #[test]
    fn test_quantize_just_below_half() {
        // floor(x + 0.5) would round this up
        assert_eq!(quantize(0.499_999_999_999_999_94), Some(0));
    }

    #[test]
    fn test_quantize_rejects_non_finite() {
        assert_eq!(quantize(f64::NAN), None);
        assert_eq!(quantize(f64::INFINITY), None);
        assert_eq!(quantize(f64::NEG_INFINITY), None);
        assert_eq!(VoxelKey::quantize(0.0, f64::NAN, 0.0), None);
    }

    #[test]
    fn test_quantize_rejects_out_of_range() {
        assert_eq!(quantize(1e12), None);
        assert_eq!(quantize(-1e12), None);
        assert_eq!(quantize(3e9), None);
        assert_eq!(VoxelKey::quantize(0.0, 0.0, -4e9), None);
    }

    #[test]
    fn test_quantize_range_edges() {
        assert_eq!(quantize(2_147_483_647.4), Some(i32::MAX));
        assert_eq!(quantize(2_147_483_647.5), None);
        assert_eq!(quantize(-2_147_483_648.5), Some(i32::MIN));
        assert_eq!(quantize(-2_147_483_648.6), None);
    }

    #[test]
    fn test_key_quantize_matches_integer_key() {
        assert_eq!(
            VoxelKey::quantize(0.4, 0.5, -0.5),
            Some(VoxelKey::new(0, 1, 0))
        );
    }

    #[test]
    fn test_color_channels() {
        let color = Color::from_rgb(0x12, 0x34, 0x56);
        assert_eq!(color, Color(0x0012_3456));
        assert_eq!(color.rgb(), (0x12, 0x34, 0x56));
        assert_eq!(color.to_string(), "#123456");
    }

    #[test]
    fn test_voxel_is_pod() {
        let voxels = [Voxel::new(1, 2, 3, Color(4)), Voxel::new(-1, 0, 1, Color(5))];
        let bytes: &[u8] = bytemuck::cast_slice(&voxels);
        assert_eq!(bytes.len(), 2 * std::mem::size_of::<Voxel>());
        assert_eq!(std::mem::size_of::<Voxel>(), 16);
    }
}
