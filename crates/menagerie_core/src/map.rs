//! # Voxel Map
//!
//! Deduplicating sparse store used while a model is being assembled.
//!
//! ## Lifecycle
//!
//! 1. Created empty at the start of a build
//! 2. Mutated through [`VoxelMap::set`] and the fill functions
//! 3. Flattened once with [`VoxelMap::into_voxels`]
//!
//! Later writes replace earlier ones at the same cell. Nothing is merged.

use std::collections::HashMap;

use crate::bounds::Bounds;
use crate::voxel::{Color, Voxel, VoxelKey};

/// Coordinate-keyed voxel store with overwrite-wins semantics.
#[derive(Clone, Debug, Default)]
pub struct VoxelMap {
    /// One color per occupied cell.
    cells: HashMap<VoxelKey, Color>,
}

impl VoxelMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty map sized for `capacity` cells.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: HashMap::with_capacity(capacity),
        }
    }

    /// Writes a voxel at a continuous position.
    ///
    /// Each axis is rounded half-up to the nearest cell. A NaN or infinite
    /// coordinate excludes the write.
    #[inline]
    pub fn set(&mut self, x: f64, y: f64, z: f64, color: Color) {
        if let Some(key) = VoxelKey::quantize(x, y, z) {
            self.cells.insert(key, color);
        }
    }

    /// Writes a voxel at an already-quantized cell.
    ///
    /// Returns the color that was replaced, if any.
    #[inline]
    pub fn insert(&mut self, key: VoxelKey, color: Color) -> Option<Color> {
        self.cells.insert(key, color)
    }

    /// Returns the color stored at `key`.
    #[inline]
    #[must_use]
    pub fn get(&self, key: VoxelKey) -> Option<Color> {
        self.cells.get(&key).copied()
    }

    /// Returns true if `key` is occupied.
    #[inline]
    #[must_use]
    pub fn contains(&self, key: VoxelKey) -> bool {
        self.cells.contains_key(&key)
    }

    /// Number of occupied cells.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if nothing has been written.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates every stored voxel, one per cell, in no particular order.
    pub fn values(&self) -> impl Iterator<Item = Voxel> + '_ {
        self.cells.iter().map(|(&key, &color)| Voxel::at(key, color))
    }

    /// Smallest box covering every occupied cell.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        let mut keys = self.cells.keys().copied();
        let mut bounds = Bounds::point(keys.next()?);
        for key in keys {
            bounds.include(key);
        }
        Some(bounds)
    }

    /// Flattens the map into its voxels, ending the build.
    #[must_use]
    pub fn into_voxels(self) -> Vec<Voxel> {
        self.cells
            .into_iter()
            .map(|(key, color)| Voxel::at(key, color))
            .collect()
    }
}
