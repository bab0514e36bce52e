//! # Voxel Models
//!
//! The finished output of a build: a deduplicated voxel list in a stable
//! order, ready to hand to a renderer.

use std::collections::BTreeMap;

use menagerie_core::{Bounds, Color, Voxel, VoxelMap};

use crate::species::Species;

/// A built animal figure.
///
/// Voxels are sorted by `(y, z, x)`, bottom layer first, so two builds with
/// the same inputs compare equal element by element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoxelModel {
    species: Species,
    voxels: Vec<Voxel>,
}

impl VoxelModel {
    /// Freezes an assembled map into a model.
    #[must_use]
    pub fn from_map(species: Species, map: VoxelMap) -> Self {
        let mut voxels = map.into_voxels();
        voxels.sort_unstable_by_key(|v| (v.y, v.z, v.x));
        Self { species, voxels }
    }

    /// Species this model depicts.
    #[must_use]
    pub const fn species(&self) -> Species {
        self.species
    }

    /// Species name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.species.name()
    }

    /// All voxels.
    #[must_use]
    pub fn voxels(&self) -> &[Voxel] {
        &self.voxels
    }

    /// Number of voxels.
    #[must_use]
    pub fn voxel_count(&self) -> usize {
        self.voxels.len()
    }

    /// Tight bounding box, `None` for an empty model.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        let mut iter = self.voxels.iter();
        let first = iter.next()?;
        let mut bounds = Bounds::point(first.key());
        for voxel in iter {
            bounds.include(voxel.key());
        }
        Some(bounds)
    }

    /// Voxel count per color.
    #[must_use]
    pub fn color_histogram(&self) -> BTreeMap<Color, usize> {
        let mut histogram = BTreeMap::new();
        for voxel in &self.voxels {
            *histogram.entry(voxel.color).or_insert(0) += 1;
        }
        histogram
    }

    /// Raw bytes of the voxel list (16 bytes per voxel, native endian).
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.voxels)
    }

    /// Consumes the model, returning its voxels.
    #[must_use]
    pub fn into_voxels(self) -> Vec<Voxel> {
        self.voxels
    }
}
