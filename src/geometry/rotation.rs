// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Two-axis rotation applied in place.
//!
//! Rotations accumulate: each application rotates the already-rotated points, there is no
//! canonical pose to return to. The sines and cosines are computed once in [`Rotation::new`], so
//! applying a fixed increment from the tick handler costs only multiplies and adds.

use libm::{cosf, sinf};

use crate::geometry::Point3;

/// Precomputed rotation by `angle_x` followed by `angle_y` (radians).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rotation {
    cos_x: f32,
    sin_x: f32,
    cos_y: f32,
    sin_y: f32,
}

impl Rotation {
    pub fn new(angle_x: f32, angle_y: f32) -> Self {
        Self {
            cos_x: cosf(angle_x),
            sin_x: sinf(angle_x),
            cos_y: cosf(angle_y),
            sin_y: sinf(angle_y),
        }
    }

    /// Rotation that leaves every point unchanged.
    pub const fn identity() -> Self {
        Self {
            cos_x: 1.0,
            sin_x: 0.0,
            cos_y: 1.0,
            sin_y: 0.0,
        }
    }

    /// Rotate a single point in place.
    ///
    /// The first stage turns x and z by `angle_x`; the second turns y and the new z by `angle_y`.
    #[inline]
    pub fn apply(&self, p: &mut Point3) {
        let x = p.x * self.cos_x - p.z * self.sin_x;
        let z = p.z * self.cos_x + p.x * self.sin_x;

        let y = p.y * self.cos_y - z * self.sin_y;
        let z = z * self.cos_y + p.y * self.sin_y;

        p.x = x;
        p.y = y;
        p.z = z;
    }

    /// Rotate every point in place.
    pub fn apply_all(&self, points: &mut [Point3]) {
        for p in points.iter_mut() {
            self.apply(p);
        }
    }
}

/// Rotate `points` in place by `angle_x` then `angle_y`.
pub fn rotate(points: &mut [Point3], angle_x: f32, angle_y: f32) {
    Rotation::new(angle_x, angle_y).apply_all(points);
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::{FRAC_PI_2, PI};

    fn close(a: f32, b: f32) -> bool {
        libm::fabsf(a - b) < 1e-5
    }

    fn norm(p: Point3) -> f32 {
        libm::sqrtf(p.x * p.x + p.y * p.y + p.z * p.z)
    }

    #[test]
    fn quarter_turn_about_x_stage() {
        // First stage maps (x, z) -> (x cos - z sin, z cos + x sin).
        let mut p = Point3::new(1.0, 0.0, 0.0);
        rotate(core::slice::from_mut(&mut p), FRAC_PI_2, 0.0);
        assert!(close(p.x, 0.0));
        assert!(close(p.y, 0.0));
        assert!(close(p.z, 1.0));
    }

    #[test]
    fn second_stage_uses_rotated_z() {
        // After the first stage z becomes 1.0; the second stage then moves it into -y.
        let mut p = Point3::new(1.0, 0.0, 0.0);
        rotate(core::slice::from_mut(&mut p), FRAC_PI_2, FRAC_PI_2);
        assert!(close(p.x, 0.0));
        assert!(close(p.y, -1.0));
        assert!(close(p.z, 0.0));
    }

    #[test]
    fn rotations_accumulate() {
        let mut once = [Point3::new(0.3, -0.2, 0.5)];
        let mut twice = once;

        rotate(&mut once, PI / 45.0, PI / 180.0);

        let half = Rotation::new(PI / 90.0, 0.0);
        half.apply_all(&mut twice);
        half.apply_all(&mut twice);

        // Two half steps about the first axis equal one full step there.
        let mut expected = [Point3::new(0.3, -0.2, 0.5)];
        rotate(&mut expected, PI / 45.0, 0.0);
        assert!(close(twice[0].x, expected[0].x));
        assert!(close(twice[0].z, expected[0].z));
        assert_ne!(once[0], expected[0]);
    }

    #[test]
    fn identity_leaves_points_alone() {
        let mut pts = [Point3::new(0.5, -0.5, 0.25), Point3::new(-1.0, 2.0, 3.0)];
        let before = pts;
        Rotation::identity().apply_all(&mut pts);
        assert_eq!(pts, before);
    }

    #[test]
    fn length_is_preserved_over_many_increments() {
        let step = Rotation::new(PI / 90.0, PI / 360.0);
        let mut p = Point3::new(0.5, 0.5, 0.5);
        let start = norm(p);

        for _ in 0..1_000 {
            step.apply(&mut p);
        }

        assert!(libm::fabsf(norm(p) - start) < 1e-3, "length drifted to {}", norm(p));
    }
}
