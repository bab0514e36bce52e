//! Small sitting animals: cat, dog, rabbit and squirrel.

use menagerie_core::{fill_ellipsoid, fill_sphere, VoxelMap};
use rand::Rng;

use crate::config::ModelConfig;

/// Sitting cat with white chest, pointed ears and a tail wrapped around
/// the front.
pub(crate) fn cat(map: &mut VoxelMap, config: &ModelConfig) {
    let p = &config.palette;
    let cy = config.floor_y + 1.0;

    // Paws
    fill_ellipsoid(map, -3.0, cy + 2.0, 0.0, 2.2, p.dark, 1.2);
    fill_ellipsoid(map, 3.0, cy + 2.0, 0.0, 2.2, p.dark, 1.2);

    // Body: stacked spheres narrowing upward, white front.
    for y in 0..7 {
        let y = f64::from(y);
        let r = 3.5 - y * 0.2;
        fill_sphere(map, 0.0, cy + 2.0 + y, 0.0, r, p.dark);
        fill_sphere(map, 0.0, cy + 2.0 + y, 2.0, r * 0.6, p.white);
    }

    // Legs
    for y in 0..5 {
        let y = f64::from(y);
        for z in [3.0, 2.0] {
            map.set(-1.5, cy + y, z, p.white);
            map.set(1.5, cy + y, z, p.white);
        }
    }

    let hy = cy + 9.0;
    fill_ellipsoid(map, 0.0, hy, 0.0, 3.2, p.light, 0.8);

    // Ears
    for side in [-2.0, 2.0] {
        map.set(side, hy + 3.0, 0.0, p.dark);
        map.set(side * 0.8, hy + 3.0, 1.0, p.white);
        map.set(side, hy + 4.0, 0.0, p.dark);
    }

    // Tail
    for i in 0..12 {
        let a = f64::from(i) * 0.3;
        let (tx, tz) = (a.cos() * 4.5, a.sin() * 4.5);
        if tz > -2.0 {
            map.set(tx, cy, tz, p.dark);
            map.set(tx, cy + 1.0, tz, p.dark);
        }
    }

    // Face. With the default floor the gold irises land on the same cells
    // as the pupils.
    map.set(-1.0, hy + 0.5, 2.5, p.gold);
    map.set(1.0, hy + 0.5, 2.5, p.gold);
    map.set(-1.0, hy + 0.5, 3.0, p.black);
    map.set(1.0, hy + 0.5, 3.0, p.black);
    map.set(0.0, hy, 3.0, p.talon);
}

/// Rabbit sitting on a mossy log.
pub(crate) fn rabbit<R: Rng + ?Sized>(map: &mut VoxelMap, config: &ModelConfig, rng: &mut R) {
    let p = &config.palette;
    let log_y = config.floor_y + 2.5;

    // Log with lighter end grain and the occasional tuft of moss.
    for x in -6..=6 {
        let end = x == -6 || x == 6;
        let x = f64::from(x);
        let radius = 2.8 + (x * 0.5).sin() * 0.2;
        fill_sphere(map, x, log_y, 0.0, radius, p.dark);
        if end {
            fill_sphere(map, x, log_y, 0.0, radius - 0.5, p.wood);
        }
        if rng.gen::<f64>() > 0.8 {
            let z = (rng.gen::<f64>() - 0.5) * 2.0;
            map.set(x, log_y + radius, z, p.green);
        }
    }

    // Body
    let by = log_y + 2.5;
    fill_sphere(map, -1.5, by + 1.5, -1.5, 1.8, p.white);
    fill_sphere(map, 1.5, by + 1.5, -1.5, 1.8, p.white);
    fill_ellipsoid(map, 0.0, by + 2.0, 0.0, 2.2, p.white, 0.8);
    fill_sphere(map, 0.0, by + 2.5, 1.5, 1.5, p.white);
    map.set(-1.2, by, 2.2, p.light);
    map.set(1.2, by, 2.2, p.light);
    map.set(-2.2, by, -0.5, p.white);
    map.set(2.2, by, -0.5, p.white);
    fill_sphere(map, 0.0, by + 1.5, -2.5, 1.0, p.white);

    // Head with cheeks
    let (hy, hz) = (by + 4.5, 1.0);
    fill_sphere(map, 0.0, hy, hz, 1.7, p.white);
    fill_sphere(map, -1.1, hy - 0.5, hz + 0.5, 1.0, p.white);
    fill_sphere(map, 1.1, hy - 0.5, hz + 0.5, 1.0, p.white);

    // Ears lean back as they rise; the light inner stripe wins overlaps.
    for y in 0..5 {
        let y = f64::from(y);
        let curve = y * 0.2;
        for side in [-1.0, 1.0] {
            map.set(side * 0.8, hy + 1.5 + y, hz - curve, p.white);
            map.set(side * 1.2, hy + 1.5 + y, hz - curve, p.white);
            map.set(side, hy + 1.5 + y, hz - curve + 0.5, p.light);
        }
    }

    map.set(-0.8, hy + 0.2, hz + 1.5, p.black);
    map.set(0.8, hy + 0.2, hz + 1.5, p.black);
    map.set(0.0, hy - 0.5, hz + 1.8, p.talon);
}

/// Sitting dog with floppy ears and a raised tail.
pub(crate) fn dog(map: &mut VoxelMap, config: &ModelConfig) {
    let p = &config.palette;
    let cy = config.floor_y + 1.0;

    fill_ellipsoid(map, -2.5, cy + 2.0, -1.0, 2.0, p.wood, 1.2);
    fill_ellipsoid(map, 2.5, cy + 2.0, -1.0, 2.0, p.wood, 1.2);

    for y in 0..8 {
        let y = f64::from(y);
        let r = 3.8 - y * 0.15;
        fill_sphere(map, 0.0, cy + 2.0 + y, 0.0, r, p.wood);
        fill_sphere(map, 0.0, cy + 2.0 + y, 2.5, r * 0.5, p.light);
    }

    // Legs
    for y in 0..6 {
        let y = f64::from(y);
        for z in [3.5, 2.5] {
            map.set(-1.5, cy + y, z, p.light);
            map.set(1.5, cy + y, z, p.light);
        }
    }

    // Head and snout
    let hy = cy + 10.0;
    fill_ellipsoid(map, 0.0, hy, 1.0, 3.5, p.wood, 0.9);
    fill_ellipsoid(map, 0.0, hy - 1.0, 3.5, 2.0, p.light, 0.8);
    map.set(0.0, hy - 0.5, 5.5, p.black);

    // Ears hang down the sides.
    for y in 0..4 {
        let y = f64::from(y);
        for side in [-3.5, 3.5] {
            map.set(side, hy + 1.0 - y, 0.0, p.dark);
            map.set(side, hy + 1.0 - y, 1.0, p.wood);
        }
    }

    for i in 0..8 {
        let i = f64::from(i);
        let tx = (i * 0.5).sin() * 1.5;
        map.set(tx, cy + 3.0 + i * 0.8, -4.0 - i * 0.5, p.wood);
    }

    map.set(-1.5, hy + 1.0, 4.0, p.black);
    map.set(1.5, hy + 1.0, 4.0, p.black);
}

/// Squirrel with a bushy tail curling up behind it.
pub(crate) fn squirrel(map: &mut VoxelMap, config: &ModelConfig) {
    let p = &config.palette;
    let cy = config.floor_y + 1.0;

    fill_ellipsoid(map, -1.5, cy + 1.0, 0.0, 1.5, p.wood, 1.2);
    fill_ellipsoid(map, 1.5, cy + 1.0, 0.0, 1.5, p.wood, 1.2);

    for y in 0..6 {
        let y = f64::from(y);
        let r = 2.8 - y * 0.15;
        fill_sphere(map, 0.0, cy + 1.0 + y, 0.0, r, p.wood);
        fill_sphere(map, 0.0, cy + 1.0 + y, 1.5, r * 0.6, p.white);
    }

    let hy = cy + 7.0;
    fill_ellipsoid(map, 0.0, hy, 0.5, 2.5, p.wood, 0.9);
    fill_ellipsoid(map, 0.0, hy - 0.5, 2.5, 1.2, p.white, 0.8);
    map.set(0.0, hy, 3.5, p.black);

    for side in [-1.5, 1.5] {
        map.set(side, hy + 2.0, 0.0, p.wood);
        map.set(side, hy + 3.0, 0.0, p.wood);
    }

    // Tail: thickest in the middle.
    for i in 0..12 {
        let taper = f64::from((i - 6_i32).abs()) * 0.15;
        let i = f64::from(i);
        let ty = cy + 1.0 + i * 0.8;
        let tz = -2.0 - (i * 0.3).sin() * 3.0;
        fill_sphere(map, 0.0, ty, tz, 2.5 - taper, p.wood);
    }

    map.set(-1.0, hy + 0.5, 2.5, p.black);
    map.set(1.0, hy + 0.5, 2.5, p.black);
}
