//! Inclusive integer bounding boxes.

use crate::voxel::VoxelKey;

/// Axis-aligned box of lattice cells, inclusive on both ends.
///
/// A box whose `min` exceeds its `max` on any axis is empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bounds {
    /// Lowest corner.
    pub min: VoxelKey,
    /// Highest corner.
    pub max: VoxelKey,
}

impl Bounds {
    /// Creates bounds from two corners.
    #[inline]
    #[must_use]
    pub const fn new(min: VoxelKey, max: VoxelKey) -> Self {
        Self { min, max }
    }

    /// Bounds covering a single cell.
    #[inline]
    #[must_use]
    pub const fn point(key: VoxelKey) -> Self {
        Self { min: key, max: key }
    }

    /// Grows the box to cover `key`.
    #[inline]
    pub fn include(&mut self, key: VoxelKey) {
        self.min.x = self.min.x.min(key.x);
        self.min.y = self.min.y.min(key.y);
        self.min.z = self.min.z.min(key.z);
        self.max.x = self.max.x.max(key.x);
        self.max.y = self.max.y.max(key.y);
        self.max.z = self.max.z.max(key.z);
    }

    /// Returns true if the box holds no cells.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Returns true if `key` lies inside the box.
    #[inline]
    #[must_use]
    pub const fn contains(&self, key: VoxelKey) -> bool {
        key.x >= self.min.x
            && key.x <= self.max.x
            && key.y >= self.min.y
            && key.y <= self.max.y
            && key.z >= self.min.z
            && key.z <= self.max.z
    }

    /// Width (X axis) in cells.
    #[inline]
    #[must_use]
    pub fn width(&self) -> u64 {
        span(self.min.x, self.max.x)
    }

    /// Height (Y axis) in cells.
    #[inline]
    #[must_use]
    pub fn height(&self) -> u64 {
        span(self.min.y, self.max.y)
    }

    /// Depth (Z axis) in cells.
    #[inline]
    #[must_use]
    pub fn depth(&self) -> u64 {
        span(self.min.z, self.max.z)
    }

    /// Total cells in the box.
    #[inline]
    #[must_use]
    pub fn volume(&self) -> u64 {
        self.width()
            .saturating_mul(self.height())
            .saturating_mul(self.depth())
    }

    /// Every cell in the box, X outermost and Z innermost.
    pub fn keys(self) -> impl Iterator<Item = VoxelKey> {
        let Self { min, max } = self;
        (min.x..=max.x).flat_map(move |x| {
            (min.y..=max.y).flat_map(move |y| (min.z..=max.z).map(move |z| VoxelKey::new(x, y, z)))
        })
    }
}

/// Number of integers in `lo..=hi`, zero when inverted.
#[inline]
fn span(lo: i32, hi: i32) -> u64 {
    u64::try_from(i64::from(hi) - i64::from(lo) + 1).unwrap_or(0)
}
