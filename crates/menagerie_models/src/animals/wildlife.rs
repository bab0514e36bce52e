//! Larger animals: turtle, fish, elephant, lion and bear.

use std::f64::consts::TAU;

use menagerie_core::{fill_cuboid, fill_ellipsoid, fill_sphere, steps, Color, VoxelMap};

use crate::config::ModelConfig;

/// Scale highlights on the fish, fixed regardless of palette.
const FISH_SCALE: Color = Color(0x33_77DD);

/// Turtle with a two-layer domed shell.
pub(crate) fn turtle(map: &mut VoxelMap, config: &ModelConfig) {
    let p = &config.palette;
    let cy = config.floor_y + 1.0;

    fill_ellipsoid(map, 0.0, cy + 3.0, 0.0, 6.0, p.green, 0.6);
    fill_ellipsoid(map, 0.0, cy + 4.0, 0.0, 5.0, p.dark, 0.5);

    for (x, z) in [(-4.0, 3.0), (4.0, 3.0), (-4.0, -3.0), (4.0, -3.0)] {
        fill_sphere(map, x, cy + 1.0, z, 2.0, p.wood);
    }

    fill_sphere(map, 0.0, cy + 2.0, 6.0, 2.5, p.wood);
    map.set(-1.0, cy + 3.0, 8.0, p.black);
    map.set(1.0, cy + 3.0, 8.0, p.black);
    fill_sphere(map, 0.0, cy + 1.5, -5.0, 1.5, p.wood);
}

/// Fish swimming along +X, hovering above the floor.
pub(crate) fn fish(map: &mut VoxelMap, config: &ModelConfig) {
    let p = &config.palette;
    let cy = config.floor_y + 6.0;

    fill_ellipsoid(map, 0.0, cy, 0.0, 5.0, p.blue, 0.7);

    // Belly
    fill_cuboid(map, [-3.0, cy - 3.0, -1.0], [3.0, cy - 2.0, 1.0], p.white);

    // Dorsal fin
    for x in -2..=1 {
        let x = f64::from(x);
        map.set(x, cy + 3.0, 0.0, p.gold);
        map.set(x, cy + 4.0, 0.0, p.gold);
        if x > -2.0 {
            map.set(x, cy + 5.0, 0.0, p.gold);
        }
    }

    // Tail fin fans out toward the back.
    for y in -3_i32..=3 {
        let wide = y.abs() > 1;
        let y = f64::from(y);
        map.set(-6.0, cy + y, 0.0, p.gold);
        map.set(-7.0, cy + y * 1.3, 0.0, p.gold);
        if wide {
            map.set(-8.0, cy + y * 1.5, 0.0, p.gold);
        }
    }

    // Pectoral fins
    for i in 0..3 {
        let i = f64::from(i);
        map.set(1.0 - i, cy - 2.0, 3.0 + i, p.blue);
        map.set(1.0 - i, cy - 2.0, -3.0 - i, p.blue);
    }

    map.set(3.0, cy + 1.0, 2.0, p.black);
    map.set(3.0, cy + 1.0, -2.0, p.black);
    map.set(3.0, cy + 1.5, 2.0, p.white);
    map.set(3.0, cy + 1.5, -2.0, p.white);

    map.set(5.0, cy, 0.0, p.red);

    // Scale highlights; the front row covers the lower eye cells.
    for x in steps(-3.0, 3.0, 2.0) {
        for z in steps(-2.0, 2.0, 2.0) {
            map.set(x, cy + 1.0, z, FISH_SCALE);
        }
    }
}

/// Elephant with big ears, curled trunk and tusks.
pub(crate) fn elephant(map: &mut VoxelMap, config: &ModelConfig) {
    let p = &config.palette;
    let cy = config.floor_y + 1.0;

    fill_ellipsoid(map, 0.0, cy + 7.0, 0.0, 6.0, p.gray, 0.9);
    fill_cuboid(map, [-3.0, cy + 3.0, -3.0], [3.0, cy + 3.0, 3.0], p.dark_gray);

    // Legs
    for y in 0..6 {
        let y = f64::from(y);
        for (x, z) in [(-4.0, 3.0), (4.0, 3.0), (-4.0, -3.0), (4.0, -3.0)] {
            fill_sphere(map, x, cy + y, z, 2.0, p.gray);
        }
    }

    // Toenails
    for (ox, oz) in [(-4.0, 3.0), (-4.0, -3.0), (4.0, 3.0), (4.0, -3.0)] {
        map.set(ox - 1.0, cy, oz, p.ivory);
        map.set(ox + 1.0, cy, oz, p.ivory);
        map.set(ox, cy, oz + 1.0, p.ivory);
    }

    let hy = cy + 12.0;
    fill_ellipsoid(map, 0.0, hy, 4.0, 4.0, p.gray, 0.9);
    map.set(-2.5, hy + 1.0, 7.0, p.black);
    map.set(2.5, hy + 1.0, 7.0, p.black);

    // Ears: a dark flap with a lighter outer rim around the middle.
    for y in -2_i32..=3 {
        let rim = y.abs() < 2;
        let y = f64::from(y);
        for z in 0..=3 {
            let z = f64::from(z);
            map.set(-5.0, hy + y, 2.0 + z, p.dark_gray);
            map.set(5.0, hy + y, 2.0 + z, p.dark_gray);
            if rim {
                map.set(-6.0, hy + y, 3.0 + z * 0.5, p.gray);
                map.set(6.0, hy + y, 3.0 + z * 0.5, p.gray);
            }
        }
    }

    // Trunk tapers as it curves down and forward.
    for i in 0..10 {
        let i = f64::from(i);
        fill_sphere(map, 0.0, hy - 1.0 - i * 0.8, 7.0 + i * 0.5, 1.5 - i * 0.08, p.gray);
    }

    for i in 0..5 {
        let i = f64::from(i);
        map.set(-1.5, hy - 2.0 - i, 6.0 + i * 0.3, p.ivory);
        map.set(1.5, hy - 2.0 - i, 6.0 + i * 0.3, p.ivory);
    }

    // Tail
    for i in 0..5 {
        let i = f64::from(i);
        map.set(0.0, cy + 10.0 - i, -6.0 - i * 0.5, p.dark_gray);
    }
    map.set(-0.5, cy + 5.0, -9.0, p.dark_gray);
    map.set(0.5, cy + 5.0, -9.0, p.dark_gray);
}

/// Standing lion with a ring mane and tufted tail.
pub(crate) fn lion(map: &mut VoxelMap, config: &ModelConfig) {
    let p = &config.palette;
    let cy = config.floor_y + 1.0;

    for y in 0..7 {
        let y = f64::from(y);
        fill_sphere(map, 0.0, cy + 3.0 + y, 0.0, 3.5 - y * 0.15, p.gold);
    }
    fill_cuboid(map, [-2.0, cy + 3.0, 3.0], [2.0, cy + 6.0, 3.0], p.white);

    for y in 0..5 {
        let y = f64::from(y);
        for (x, z) in [(-2.5, 2.0), (2.5, 2.0), (-2.5, -2.0), (2.5, -2.0)] {
            fill_sphere(map, x, cy + y, z, 1.5, p.gold);
        }
    }

    let hy = cy + 10.0;
    fill_ellipsoid(map, 0.0, hy, 1.0, 3.0, p.gold, 0.9);

    // Mane: two rings of tufts, the inner one slightly behind.
    for a in steps(0.0, TAU, 0.4) {
        let mx = a.cos() * 4.0;
        let my = a.sin() * 3.5;
        fill_sphere(map, mx, hy + my * 0.8, 0.0, 1.5, p.orange);
        fill_sphere(map, mx * 0.8, hy + my * 0.7, -0.5, 1.2, p.orange);
    }

    // Muzzle
    fill_ellipsoid(map, 0.0, hy - 1.0, 3.5, 1.8, p.white, 0.7);
    map.set(0.0, hy - 0.5, 5.0, p.black);
    map.set(-1.0, hy - 2.0, 4.0, p.red);
    map.set(1.0, hy - 2.0, 4.0, p.red);

    map.set(-1.5, hy + 1.0, 3.0, p.black);
    map.set(1.5, hy + 1.0, 3.0, p.black);
    map.set(-1.5, hy + 1.5, 3.0, p.gold);
    map.set(1.5, hy + 1.5, 3.0, p.gold);

    map.set(-2.0, hy + 3.0, 1.0, p.gold);
    map.set(2.0, hy + 3.0, 1.0, p.gold);

    for i in 0..10 {
        let i = f64::from(i);
        map.set(0.0, cy + 6.0 + (i * 0.4).sin() * 2.0, -4.0 - i * 0.8, p.gold);
    }
    fill_sphere(map, 0.0, cy + 6.0, -12.0, 1.5, p.orange);
}

/// Sitting bear with forepaws out front.
pub(crate) fn bear(map: &mut VoxelMap, config: &ModelConfig) {
    let p = &config.palette;
    let cy = config.floor_y + 1.0;

    fill_ellipsoid(map, 0.0, cy + 6.0, 0.0, 5.0, p.dark, 1.1);
    fill_cuboid(map, [-3.0, cy + 3.0, 4.0], [3.0, cy + 7.0, 4.0], p.light);

    // Haunches and forepaws
    fill_ellipsoid(map, -3.0, cy + 2.0, 1.0, 2.5, p.dark, 1.1);
    fill_ellipsoid(map, 3.0, cy + 2.0, 1.0, 2.5, p.dark, 1.1);
    fill_sphere(map, -2.0, cy + 4.0, 4.0, 1.8, p.dark);
    fill_sphere(map, 2.0, cy + 4.0, 4.0, 1.8, p.dark);
    map.set(-2.0, cy + 3.0, 5.5, p.light);
    map.set(2.0, cy + 3.0, 5.5, p.light);

    for x in [-2.0, 2.0] {
        fill_cuboid(map, [x, cy, 2.0], [x, cy + 3.0, 3.0], p.dark);
    }

    let hy = cy + 11.0;
    fill_ellipsoid(map, 0.0, hy, 1.0, 3.5, p.dark, 0.9);
    fill_ellipsoid(map, 0.0, hy - 1.0, 4.0, 2.0, p.light, 0.7);
    map.set(0.0, hy - 0.5, 5.5, p.black);
    map.set(-0.5, hy - 2.0, 4.5, p.black);
    map.set(0.5, hy - 2.0, 4.5, p.black);
    map.set(-1.5, hy + 0.5, 3.5, p.black);
    map.set(1.5, hy + 0.5, 3.5, p.black);

    // Round ears with light centers
    fill_sphere(map, -2.5, hy + 3.0, 0.0, 1.2, p.dark);
    fill_sphere(map, 2.5, hy + 3.0, 0.0, 1.2, p.dark);
    fill_sphere(map, -2.5, hy + 3.0, 0.5, 0.8, p.light);
    fill_sphere(map, 2.5, hy + 3.0, 0.5, 0.8, p.light);

    fill_sphere(map, 0.0, cy + 8.0, -5.0, 1.5, p.dark);
}

#[cfg(test)]
mod tests {
    use super::*;
    use menagerie_core::VoxelKey;

    fn build(generator: fn(&mut VoxelMap, &ModelConfig)) -> (VoxelMap, ModelConfig) {
        let config = ModelConfig::default();
        let mut map = VoxelMap::new();
        generator(&mut map, &config);
        (map, config)
    }

    #[test]
    fn test_turtle_shape() {
        let (map, config) = build(turtle);
        let bounds = map.bounds().unwrap();
        // Shell is 13 wide; the head pokes out to z = 8.
        assert_eq!(bounds.min.x, -6);
        assert_eq!(bounds.max.x, 6);
        assert_eq!(bounds.max.z, 8);
        assert_eq!(map.get(VoxelKey::new(1, -8, 8)), Some(config.palette.black));
    }

    #[test]
    fn test_fish_scales_cover_front_eye() {
        let (map, config) = build(fish);
        // cy = -6
        assert_eq!(map.get(VoxelKey::new(3, -5, 2)), Some(FISH_SCALE));
        assert_eq!(map.get(VoxelKey::new(3, -4, 2)), Some(config.palette.white));
        assert_eq!(map.get(VoxelKey::new(5, -6, 0)), Some(config.palette.red));
        assert_eq!(map.get(VoxelKey::new(-8, -10, 0)), Some(config.palette.gold));
    }

    #[test]
    fn test_elephant_tusks_and_toenails() {
        let (map, config) = build(elephant);
        let ivory = map.values().filter(|v| v.color == config.palette.ivory).count();
        // Twelve toenails plus ten tusk cells.
        assert_eq!(ivory, 22);
    }

    #[test]
    fn test_lion_mane_is_orange() {
        let (map, config) = build(lion);
        let orange = map.values().filter(|v| v.color == config.palette.orange).count();
        assert!(orange > 50);
        // Tail tuft
        assert_eq!(map.get(VoxelKey::new(0, -5, -12)), Some(config.palette.orange));
    }

    #[test]
    fn test_bear_face() {
        let (map, config) = build(bear);
        // hy = 0
        assert_eq!(map.get(VoxelKey::new(0, 0, 6)), Some(config.palette.black));
        assert_eq!(map.get(VoxelKey::new(-1, 1, 4)), Some(config.palette.black));
    }
}
