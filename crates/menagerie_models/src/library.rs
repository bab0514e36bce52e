//! # Model Library
//!
//! Entry point for building figures. Every build gets a fresh
//! [`VoxelMap`], so builds share nothing and can run on separate threads.

use menagerie_core::VoxelMap;
use rand::Rng;

use crate::animals::{birds, pets, reptiles, wildlife};
use crate::config::ModelConfig;
use crate::model::VoxelModel;
use crate::seed::ModelSeed;
use crate::species::Species;

/// Builds species models against one configuration.
#[derive(Clone, Debug, Default)]
pub struct ModelLibrary {
    config: ModelConfig,
}

impl ModelLibrary {
    /// Initial map capacity; the largest figures hold a few thousand voxels.
    const CAPACITY_HINT: usize = 4096;

    /// Creates a library using `config`.
    #[must_use]
    pub const fn new(config: ModelConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Builds one model, drawing any random choices from `rng`.
    #[must_use]
    pub fn build<R: Rng + ?Sized>(&self, species: Species, rng: &mut R) -> VoxelModel {
        let _span = tracing::debug_span!("build", species = species.name()).entered();

        let mut map = VoxelMap::with_capacity(Self::CAPACITY_HINT);
        self.sculpt(species, &mut map, rng);
        let model = VoxelModel::from_map(species, map);

        tracing::debug!(voxels = model.voxel_count(), "model built");
        model
    }

    /// Builds one model reproducibly from `seed`.
    ///
    /// The species gets its own stream derived from the seed, so the result
    /// does not depend on what else is built.
    #[must_use]
    pub fn build_seeded(&self, species: Species, seed: ModelSeed) -> VoxelModel {
        let mut rng = seed.derive(species.index()).rng();
        self.build(species, &mut rng)
    }

    /// Builds every species in parallel, one thread each.
    ///
    /// The result is in [`Species::ALL`] order and equals building each
    /// species with [`ModelLibrary::build_seeded`].
    #[must_use]
    pub fn build_all(&self, seed: ModelSeed) -> Vec<VoxelModel> {
        std::thread::scope(|scope| {
            let handles: Vec<_> = Species::ALL
                .into_iter()
                .map(|species| scope.spawn(move || self.build_seeded(species, seed)))
                .collect();

            handles
                .into_iter()
                .map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
                })
                .collect()
        })
    }

    fn sculpt<R: Rng + ?Sized>(&self, species: Species, map: &mut VoxelMap, rng: &mut R) {
        let config = &self.config;
        match species {
            Species::Eagle => birds::eagle(map, config, rng),
            Species::Twins => birds::twins(map, config, rng),
            Species::Rabbit => pets::rabbit(map, config, rng),
            Species::Cat => pets::cat(map, config),
            Species::Dog => pets::dog(map, config),
            Species::Squirrel => pets::squirrel(map, config),
            Species::Turtle => wildlife::turtle(map, config),
            Species::Fish => wildlife::fish(map, config),
            Species::Elephant => wildlife::elephant(map, config),
            Species::Lion => wildlife::lion(map, config),
            Species::Bear => wildlife::bear(map, config),
            Species::Snake => reptiles::snake(map, config),
            Species::Dinosaur => reptiles::dinosaur(map, config),
        }
    }
}
