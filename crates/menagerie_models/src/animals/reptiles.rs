//! Snake and dinosaur.

use std::f64::consts::PI;

use menagerie_core::{fill_cuboid, fill_ellipsoid, fill_sphere, VoxelMap};

use crate::config::ModelConfig;

const SNAKE_SEGMENTS: u32 = 60;
const SNAKE_COILS: f64 = 3.0;

/// Point on the snake's rising spiral for segment `i`, with the fraction of
/// the body already laid down.
fn coil_point(i: u32, base_y: f64) -> ([f64; 3], f64) {
    let t = f64::from(i) / f64::from(SNAKE_SEGMENTS);
    let angle = t * PI * 2.0 * SNAKE_COILS;
    let radius = 6.0 - t * 3.0;
    (
        [angle.cos() * radius, base_y + t * 12.0, angle.sin() * radius],
        t,
    )
}

/// Snake coiled three times, narrowing toward the head on top.
pub(crate) fn snake(map: &mut VoxelMap, config: &ModelConfig) {
    let p = &config.palette;
    let cy = config.floor_y + 1.0;

    // Banded body
    for i in 0..SNAKE_SEGMENTS {
        let ([px, py, pz], t) = coil_point(i, cy);
        let color = if i % 6 < 3 { p.green } else { p.dark };
        fill_sphere(map, px, py, pz, 1.5 - t * 0.3, color);
    }

    let head_y = cy + 12.5;
    fill_ellipsoid(map, -1.0, head_y, -1.0, 2.5, p.green, 0.8);

    // With the default floor the pupils land on the same cells as the gold.
    map.set(-2.5, head_y + 1.0, 0.5, p.gold);
    map.set(0.5, head_y + 1.0, 0.5, p.gold);
    map.set(-2.5, head_y + 1.5, 0.5, p.black);
    map.set(0.5, head_y + 1.5, 0.5, p.black);

    // Forked tongue
    map.set(-1.0, head_y - 0.5, 2.0, p.red);
    map.set(-1.0, head_y - 0.5, 3.0, p.red);
    map.set(-1.5, head_y - 0.5, 4.0, p.red);
    map.set(-0.5, head_y - 0.5, 4.0, p.red);

    // Diamonds along the back
    for i in (0..SNAKE_SEGMENTS).step_by(4) {
        let ([px, py, pz], _) = coil_point(i, cy);
        map.set(px, py + 1.5, pz, p.gold);
    }
}

/// Upright theropod with a spined back and a long tail.
pub(crate) fn dinosaur(map: &mut VoxelMap, config: &ModelConfig) {
    let p = &config.palette;
    let cy = config.floor_y + 1.0;

    fill_ellipsoid(map, 0.0, cy + 8.0, 0.0, 5.0, p.green, 1.2);
    fill_cuboid(map, [-3.0, cy + 5.0, 4.0], [3.0, cy + 9.0, 4.0], p.white);

    // Legs and clawed feet
    for y in 0..7 {
        let y = f64::from(y);
        fill_sphere(map, -3.0, cy + y, 0.0, 2.0, p.green);
        fill_sphere(map, 3.0, cy + y, 0.0, 2.0, p.green);
    }
    fill_ellipsoid(map, -3.0, cy, 1.5, 2.5, p.green, 0.5);
    fill_ellipsoid(map, 3.0, cy, 1.5, 2.5, p.green, 0.5);
    map.set(-3.0, cy, 4.0, p.ivory);
    map.set(3.0, cy, 4.0, p.ivory);
    map.set(-4.0, cy, 3.5, p.ivory);
    map.set(4.0, cy, 3.5, p.ivory);

    // Small arms
    for i in 0..3 {
        let i = f64::from(i);
        map.set(-4.0, cy + 9.0 - i, 3.0 + i, p.green);
        map.set(4.0, cy + 9.0 - i, 3.0 + i, p.green);
    }
    map.set(-4.0, cy + 6.0, 6.0, p.ivory);
    map.set(4.0, cy + 6.0, 6.0, p.ivory);

    for y in 0..5 {
        let y = f64::from(y);
        fill_sphere(map, 0.0, cy + 11.0 + y, 2.0 + y * 0.5, 2.5 - y * 0.2, p.green);
    }

    // Head and jaw
    let (hy, hz) = (cy + 16.0, 5.0);
    fill_ellipsoid(map, 0.0, hy, hz, 3.5, p.green, 0.8);
    fill_ellipsoid(map, 0.0, hy - 1.5, hz + 2.0, 2.5, p.green, 0.5);

    for x in -1..=1 {
        let x = f64::from(x);
        map.set(x, hy - 2.0, hz + 3.5, p.ivory);
        map.set(x, hy - 0.5, hz + 4.0, p.ivory);
    }

    map.set(-2.0, hy + 1.0, hz + 2.5, p.red);
    map.set(2.0, hy + 1.0, hz + 2.5, p.red);
    map.set(-2.0, hy + 1.5, hz + 2.5, p.black);
    map.set(2.0, hy + 1.5, hz + 2.5, p.black);

    map.set(-1.0, hy, hz + 4.0, p.dark);
    map.set(1.0, hy, hz + 4.0, p.dark);

    // Spines
    for i in 0..12 {
        let i = f64::from(i);
        let sz = -2.0 + i * 0.8;
        let sy = cy + 10.0 + (i * 0.3).sin() * 2.0;
        map.set(0.0, sy + 3.0, sz, p.orange);
        map.set(0.0, sy + 4.0, sz, p.orange);
    }

    // Tail thins out but never below half a voxel.
    for i in 0..15 {
        let i = f64::from(i);
        let radius = (2.5 - i * 0.12).max(0.5);
        fill_sphere(map, 0.0, cy + 7.0 - i * 0.3, -5.0 - i * 1.2, radius, p.green);
    }
    map.set(0.0, cy + 2.0, -22.0, p.dark);
}

#[cfg(test)]
mod tests {
    use super::*;
    use menagerie_core::VoxelKey;

    #[test]
    fn test_coil_rises_and_tightens() {
        let (start, t0) = coil_point(0, 0.0);
        let (end, t1) = coil_point(SNAKE_SEGMENTS - 1, 0.0);
        assert_eq!(t0, 0.0);
        assert!(t1 < 1.0);
        assert_eq!(start, [6.0, 0.0, 0.0]);
        assert!(end[1] > 11.0);
        let reach = |[x, _, z]: [f64; 3]| (x * x + z * z).sqrt();
        assert!(reach(end) < reach(start));
    }

    #[test]
    fn test_snake_eyes() {
        let config = ModelConfig::default();
        let mut map = VoxelMap::new();
        snake(&mut map, &config);

        // head_y = 1.5; both eye writes round to y = 3.
        assert_eq!(map.get(VoxelKey::new(-2, 3, 1)), Some(config.palette.black));
        assert_eq!(map.get(VoxelKey::new(1, 3, 1)), Some(config.palette.black));
        assert_eq!(map.get(VoxelKey::new(-1, 1, 4)), Some(config.palette.red));
    }

    #[test]
    fn test_dinosaur_tail_tip() {
        let config = ModelConfig::default();
        let mut map = VoxelMap::new();
        dinosaur(&mut map, &config);

        let bounds = map.bounds().unwrap();
        assert_eq!(bounds.min.z, -22);
        assert_eq!(map.get(VoxelKey::new(0, -9, -22)), Some(config.palette.dark));
        assert_eq!(map.get(VoxelKey::new(-3, -11, 4)), Some(config.palette.ivory));
    }
}
