//! # MENAGERIE Models
//!
//! Voxel animal figures assembled with [`menagerie_core`].
//!
//! ## Design Principles
//!
//! 1. **Content, not engine**: every species is a fixed composition of
//!    ellipsoid fills and single-voxel writes
//! 2. **Injected randomness**: the few species with random foliage take an
//!    explicit `Rng`; a [`ModelSeed`] makes them reproducible
//! 3. **External configuration**: floor height and palette come from
//!    [`ModelConfig`], optionally loaded from TOML
//!
//! ## Example
//!
//! ```rust
//! use menagerie_models::{ModelLibrary, ModelSeed, Species};
//!
//! let library = ModelLibrary::default();
//! let turtle = library.build_seeded(Species::Turtle, ModelSeed::new(7));
//! assert!(turtle.voxel_count() > 0);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

mod animals;
pub mod config;
pub mod error;
pub mod library;
pub mod model;
pub mod palette;
pub mod seed;
pub mod species;

pub use config::ModelConfig;
pub use error::{ModelError, ModelResult};
pub use library::ModelLibrary;
pub use model::VoxelModel;
pub use palette::{colors, Palette};
pub use seed::ModelSeed;
pub use species::Species;
