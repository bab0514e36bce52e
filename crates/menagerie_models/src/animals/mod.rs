//! Species generators.
//!
//! Each generator writes one figure into an empty map. Coordinates are
//! relative to the origin on the x/z plane and to `floor_y` vertically.
//! Write order matters: later writes replace earlier ones.

pub(crate) mod birds;
pub(crate) mod pets;
pub(crate) mod reptiles;
pub(crate) mod wildlife;
