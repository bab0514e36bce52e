//! Eagles on branches.

use menagerie_core::{fill_cuboid, fill_ellipsoid, fill_sphere, VoxelMap};
use rand::Rng;

use crate::config::ModelConfig;
use crate::palette::Palette;

/// Eagle perched on a wavy branch with random leaf clusters.
pub(crate) fn eagle<R: Rng + ?Sized>(map: &mut VoxelMap, config: &ModelConfig, rng: &mut R) {
    let p = &config.palette;

    // Branch
    for x in -8..8 {
        let x = f64::from(x);
        let y = (x * 0.2).sin() * 1.5;
        let z = (x * 0.1).cos() * 1.5;
        fill_sphere(map, x, y, z, 1.8, p.wood);
        if rng.gen::<f64>() > 0.7 {
            let dz = (rng.gen::<f64>() - 0.5) * 3.0;
            fill_sphere(map, x, y + 2.0, z + dz, 1.5, p.green);
        }
    }

    let (ex, ey, ez) = (0.0, 2.0, 2.0);

    // Body
    fill_ellipsoid(map, ex, ey + 6.0, ez, 4.5, p.dark, 1.4);
    fill_cuboid(map, [ex - 2.0, ey + 4.0, ez + 3.0], [ex + 2.0, ey + 9.0, ez + 3.0], p.light);
    for x in [-4.0, -3.0, 3.0, 4.0] {
        fill_cuboid(map, [x, ey + 4.0, ez - 2.0], [x, ey + 10.0, ez + 3.0], p.dark);
    }
    fill_cuboid(map, [ex - 2.0, ey, ez - 5.0], [ex + 2.0, ey + 4.0, ez - 3.0], p.white);

    // Head
    let (hy, hz) = (ey + 12.0, ez + 1.0);
    fill_sphere(map, ex, hy, hz, 2.8, p.white);
    fill_sphere(map, ex, hy - 2.0, hz, 2.5, p.white);

    for (dx, dy) in [(-2.0, 0.0), (-2.0, 1.0), (2.0, 0.0), (2.0, 1.0)] {
        map.set(ex + dx, ey + dy, ez, p.talon);
    }

    // Beak
    for (dx, dz) in [(0.0, 1.0), (0.0, 2.0), (1.0, 1.0), (-1.0, 1.0)] {
        map.set(ex + dx, hy, hz + 2.0 + dz, p.gold);
    }
    map.set(ex, hy - 1.0, hz + 3.0, p.gold);

    // Eyes
    map.set(ex - 1.5, hy + 0.5, hz + 1.5, p.black);
    map.set(ex + 1.5, hy + 0.5, hz + 1.5, p.black);
    map.set(ex - 1.5, hy + 1.5, hz + 1.5, p.white);
    map.set(ex + 1.5, hy + 1.5, hz + 1.5, p.white);
}

/// Two small eagles on separate branches, left one set back and right one
/// set forward.
pub(crate) fn twins<R: Rng + ?Sized>(map: &mut VoxelMap, config: &ModelConfig, rng: &mut R) {
    small_eagle(map, &config.palette, rng, -10.0, 2.0);
    small_eagle(map, &config.palette, rng, 10.0, -2.0);
}

fn small_eagle<R: Rng + ?Sized>(map: &mut VoxelMap, p: &Palette, rng: &mut R, ox: f64, oz: f64) {
    for x in -5..5 {
        let x = f64::from(x);
        let y = (x * 0.4).sin() * 0.5;
        fill_sphere(map, ox + x, y, oz, 1.2, p.wood);
        if rng.gen::<f64>() > 0.8 {
            fill_sphere(map, ox + x, y + 1.0, oz, 1.0, p.green);
        }
    }

    let (ex, ey, ez) = (ox, 1.5, oz);
    fill_ellipsoid(map, ex, ey + 4.0, ez, 3.0, p.dark, 1.4);
    fill_cuboid(map, [ex - 1.0, ey + 2.0, ez + 2.0], [ex + 1.0, ey + 6.0, ez + 2.0], p.light);
    fill_cuboid(map, [ex - 1.0, ey + 2.0, ez - 3.0], [ex + 1.0, ey + 3.0, ez - 3.0], p.white);
    for x in [ex - 3.0, ex + 3.0] {
        fill_cuboid(map, [x, ey + 2.0, ez - 1.0], [x, ey + 6.0, ez + 2.0], p.dark);
    }

    let (hy, hz) = (ey + 8.0, ez + 1.0);
    fill_sphere(map, ex, hy, hz, 2.0, p.white);
    map.set(ex, hy, hz + 2.0, p.gold);
    map.set(ex, hy - 0.5, hz + 2.0, p.gold);
    map.set(ex - 1.0, hy + 0.5, hz + 1.0, p.black);
    map.set(ex + 1.0, hy + 0.5, hz + 1.0, p.black);
    map.set(ex - 1.0, ey, ez, p.talon);
    map.set(ex + 1.0, ey, ez, p.talon);
}
