//! Counting-loop helpers for slab-shaped detail.
//!
//! Model code often walks a range with a fractional start
//! (`3.5, 4.5, ... 7.5`) and writes one voxel per step. [`steps`] reproduces
//! that walk, and [`fill_cuboid`] runs it on all three axes.

use crate::map::VoxelMap;
use crate::voxel::Color;

/// Iterator over `start, start + step, ...` while the value is `<= end`.
///
/// Values are accumulated, not multiplied, so the sequence is the same one a
/// hand-written counting loop would produce. The walk ends early if adding
/// `step` no longer moves the value.
#[derive(Clone, Debug)]
pub struct Steps {
    next: f64,
    end: f64,
    step: f64,
}

impl Iterator for Steps {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        if self.next <= self.end {
            let value = self.next;
            let advanced = value + self.step;
            self.next = if advanced > value { advanced } else { f64::NAN };
            Some(value)
        } else {
            None
        }
    }
}

/// Walks from `start` to `end` inclusive in increments of `step`.
///
/// Empty when `step` is not a positive finite number or either bound is not
/// finite.
#[must_use]
pub fn steps(start: f64, end: f64, step: f64) -> Steps {
    let valid = start.is_finite() && end.is_finite() && step.is_finite() && step > 0.0;
    Steps {
        next: if valid { start } else { f64::NAN },
        end,
        step,
    }
}

/// Walks from `start` to `end` inclusive in unit increments.
#[inline]
#[must_use]
pub fn unit_steps(start: f64, end: f64) -> Steps {
    steps(start, end, 1.0)
}

/// Writes a voxel at every unit step between `min` and `max` on each axis.
///
/// Each position goes through [`VoxelMap::set`], so fractional corners are
/// rounded exactly like single writes are.
pub fn fill_cuboid(map: &mut VoxelMap, min: [f64; 3], max: [f64; 3], color: Color) {
    for x in unit_steps(min[0], max[0]) {
        for y in unit_steps(min[1], max[1]) {
            for z in unit_steps(min[2], max[2]) {
                map.set(x, y, z, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxel::VoxelKey;

    #[test]
    fn test_unit_steps_inclusive() {
        let values: Vec<f64> = unit_steps(-2.0, 2.0).collect();
        assert_eq!(values, vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_fractional_start() {
        let values: Vec<f64> = unit_steps(3.5, 7.5).collect();
        assert_eq!(values, vec![3.5, 4.5, 5.5, 6.5, 7.5]);
        assert_eq!(unit_steps(3.5, 7.9).count(), 5);
    }

    #[test]
    fn test_angle_walk_count() {
        // 0.0, 0.4, ... stays below a full turn for 16 values.
        assert_eq!(steps(0.0, std::f64::consts::TAU, 0.4).count(), 16);
    }

    #[test]
    fn test_invalid_steps_are_empty() {
        assert_eq!(steps(0.0, 5.0, 0.0).count(), 0);
        assert_eq!(steps(0.0, 5.0, -1.0).count(), 0);
        assert_eq!(steps(0.0, 5.0, f64::NAN).count(), 0);
        assert_eq!(steps(f64::NEG_INFINITY, 5.0, 1.0).count(), 0);
        assert_eq!(steps(f64::NAN, 5.0, 1.0).count(), 0);
        assert_eq!(unit_steps(2.0, 1.0).count(), 0);
    }

    #[test]
    fn test_stalled_walk_ends() {
        // 1e17 + 1.0 == 1e17 in f64.
        assert_eq!(steps(1e17, 1e17 + 100.0, 1.0).count(), 1);
        assert_eq!(steps(1.0, 2.0, 1e-300).count(), 1);
    }

    #[test]
    fn test_fill_cuboid_far_from_origin_terminates() {
        let mut map = VoxelMap::new();
        fill_cuboid(&mut map, [1e17, 0.0, 0.0], [1e17 + 100.0, 1.0, 0.0], Color(7));
        assert!(map.is_empty());
    }

    #[test]
    fn test_fill_cuboid() {
        let mut map = VoxelMap::new();
        fill_cuboid(&mut map, [-2.0, 4.0, 5.0], [2.0, 9.0, 5.0], Color(7));
        assert_eq!(map.len(), 5 * 6);
        assert!(map.contains(VoxelKey::new(-2, 4, 5)));
        assert!(map.contains(VoxelKey::new(2, 9, 5)));
    }

    #[test]
    fn test_fill_cuboid_fractional_rounds_each_step() {
        let mut map = VoxelMap::new();
        fill_cuboid(&mut map, [0.0, 3.5, 0.0], [0.0, 7.5, 0.0], Color(7));
        let bounds = map.bounds().unwrap();
        assert_eq!(bounds.min.y, 4);
        assert_eq!(bounds.max.y, 8);
        assert_eq!(map.len(), 5);
    }
}
