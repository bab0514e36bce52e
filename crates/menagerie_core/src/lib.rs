//! # MENAGERIE Core Engine
//!
//! The voxel assembly engine behind every MENAGERIE model.
//!
//! ## Architecture Rules
//!
//! 1. **One voxel per cell** - The map is keyed by quantized coordinates
//! 2. **Last write wins** - Overlapping shapes overwrite in call order
//! 3. **Total functions** - NaN and infinite inputs are excluded, never a panic
//!
//! ## Example
//!
//! ```rust
//! use menagerie_core::{fill_ellipsoid, Color, VoxelMap};
//!
//! let mut map = VoxelMap::new();
//! // Dark body, then a lighter stripe painted over it
//! fill_ellipsoid(&mut map, 0.0, 6.0, 0.0, 4.5, Color(0x4A3728), 1.4);
//! map.set(0.0, 6.0, 4.0, Color(0xE8D5B0));
//!
//! let voxels = map.into_voxels();
//! assert!(!voxels.is_empty());
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod bounds;
pub mod fill;
pub mod map;
pub mod shape;
pub mod voxel;

pub use bounds::Bounds;
pub use fill::{fill_ellipsoid, fill_sphere, Ellipsoid};
pub use map::VoxelMap;
pub use shape::{fill_cuboid, steps, unit_steps, Steps};
pub use voxel::{quantize, Color, Voxel, VoxelKey};
