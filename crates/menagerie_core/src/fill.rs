//! # Ellipsoid Fill
//!
//! Solid rasterization of an axis-aligned ellipsoid into a [`VoxelMap`].
//!
//! The ellipsoid has radius `r` on X and Z and `r * vertical_scale` on Y, so
//! `vertical_scale = 1.0` is a sphere, values below one flatten it and values
//! above one stretch it.
//!
//! ## Algorithm
//!
//! 1. Bound the ellipsoid with a lattice box:
//!    `[floor(c - r), ceil(c + r)]` on X/Z and
//!    `[floor(cy - r*s), ceil(cy + r*s)]` on Y
//! 2. Visit every cell of the box exactly once
//! 3. Keep the cell iff `dx² + (dy / s)² + dz² <= r²`
//!
//! ## Degenerate input
//!
//! A zero radius keeps at most the center cell. A negative radius or a
//! negative scale inverts the box, so nothing is written. NaN or infinite
//! parameters write nothing.

use crate::bounds::Bounds;
use crate::map::VoxelMap;
use crate::voxel::{lattice_coord, Color, VoxelKey};

/// An axis-aligned ellipsoid in continuous space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    /// Center position `[x, y, z]`.
    pub center: [f64; 3],
    /// Horizontal (X/Z) radius.
    pub radius: f64,
    /// Y extent relative to the horizontal radius.
    pub vertical_scale: f64,
}

impl Ellipsoid {
    /// Creates a sphere.
    #[inline]
    #[must_use]
    pub const fn sphere(x: f64, y: f64, z: f64, radius: f64) -> Self {
        Self {
            center: [x, y, z],
            radius,
            vertical_scale: 1.0,
        }
    }

    /// Stretches (`> 1`) or flattens (`< 1`) the Y extent.
    #[inline]
    #[must_use]
    pub const fn with_vertical_scale(mut self, vertical_scale: f64) -> Self {
        self.vertical_scale = vertical_scale;
        self
    }

    /// Returns true if every parameter is a finite number.
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.center.iter().all(|c| c.is_finite())
            && self.radius.is_finite()
            && self.vertical_scale.is_finite()
    }

    /// Lattice box that conservatively covers the ellipsoid.
    ///
    /// `None` for non-finite parameters, or when a corner of the box falls
    /// outside the `i32` lattice. The box may be empty.
    #[must_use]
    pub fn lattice_bounds(&self) -> Option<Bounds> {
        if !self.is_finite() {
            return None;
        }
        let [cx, cy, cz] = self.center;
        let r = self.radius;
        let ry = r * self.vertical_scale;
        Some(Bounds::new(
            VoxelKey::new(
                lattice_coord((cx - r).floor())?,
                lattice_coord((cy - ry).floor())?,
                lattice_coord((cz - r).floor())?,
            ),
            VoxelKey::new(
                lattice_coord((cx + r).ceil())?,
                lattice_coord((cy + ry).ceil())?,
                lattice_coord((cz + r).ceil())?,
            ),
        ))
    }

    /// Membership test for a lattice cell.
    ///
    /// Any NaN along the way makes the comparison false.
    #[inline]
    #[must_use]
    pub fn contains(&self, key: VoxelKey) -> bool {
        let [cx, cy, cz] = self.center;
        let dx = f64::from(key.x) - cx;
        let dy = (f64::from(key.y) - cy) / self.vertical_scale;
        let dz = f64::from(key.z) - cz;
        dx * dx + dy * dy + dz * dz <= self.radius * self.radius
    }

    /// Every lattice cell inside the ellipsoid, X outermost.
    pub fn lattice_points(&self) -> impl Iterator<Item = VoxelKey> {
        let this = *self;
        self.lattice_bounds()
            .into_iter()
            .flat_map(Bounds::keys)
            .filter(move |&key| this.contains(key))
    }

    /// Writes every cell inside the ellipsoid into `map`.
    pub fn fill(&self, map: &mut VoxelMap, color: Color) {
        for key in self.lattice_points() {
            map.insert(key, color);
        }
    }
}

/// Fills a solid ellipsoid.
///
/// # Arguments
///
/// * `cx`, `cy`, `cz` - Center
/// * `radius` - Horizontal (X/Z) radius
/// * `color` - Color written to every included cell
/// * `vertical_scale` - Y extent relative to the radius (`1.0` for a sphere)
#[inline]
pub fn fill_ellipsoid(
    map: &mut VoxelMap,
    cx: f64,
    cy: f64,
    cz: f64,
    radius: f64,
    color: Color,
    vertical_scale: f64,
) {
    Ellipsoid::sphere(cx, cy, cz, radius)
        .with_vertical_scale(vertical_scale)
        .fill(map, color);
}

/// Fills a solid sphere. Same as [`fill_ellipsoid`] with a scale of `1.0`.
#[inline]
pub fn fill_sphere(map: &mut VoxelMap, cx: f64, cy: f64, cz: f64, radius: f64, color: Color) {
    Ellipsoid::sphere(cx, cy, cz, radius).fill(map, color);
}
