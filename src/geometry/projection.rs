// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Translate-and-scale projection into device space.
//!
//! `out = (p + translate) * scale` on x and y; z is dropped. With the shipped constants
//! (`translate = 1.0`, `scale = 255 - 10`) a unit cube is not centred in the output range, and part
//! of the rotating shape lands beyond `device_max`. The quantizer saturates those samples.

use crate::error::ConfigError;
use crate::geometry::{Point2, Point3};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Projection {
    translate: f32,
    scale: f32,
}

impl Projection {
    pub const fn new(translate: f32, scale: f32) -> Self {
        Self { translate, scale }
    }

    /// Projection whose scale is `device_max - margin`.
    pub fn with_margin(translate: f32, device_max: u16, margin: u16) -> Result<Self, ConfigError> {
        if device_max == 0 || margin >= device_max {
            return Err(ConfigError::DeviceRange { device_max, margin });
        }
        Ok(Self::new(translate, f32::from(device_max - margin)))
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    #[inline]
    pub fn translate(&self) -> f32 {
        self.translate
    }

    #[inline]
    pub fn project(&self, p: Point3) -> Point2<f32> {
        Point2 {
            x: (p.x + self.translate) * self.scale,
            y: (p.y + self.translate) * self.scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_scale_is_245() {
        let proj = Projection::with_margin(1.0, 255, 10).unwrap();
        assert_eq!(proj.scale(), 245.0);
        assert_eq!(proj.translate(), 1.0);
    }

    #[test]
    fn projects_cube_corners() {
        let proj = Projection::with_margin(1.0, 255, 10).unwrap();

        assert_eq!(
            proj.project(Point3::new(-0.5, -0.5, 0.9)),
            Point2::new(122.5, 122.5)
        );
        assert_eq!(
            proj.project(Point3::new(0.5, -1.0, 0.0)),
            Point2::new(367.5, 0.0)
        );
    }

    #[test]
    fn rejects_margin_that_eats_the_range() {
        assert_eq!(
            Projection::with_margin(1.0, 10, 10),
            Err(ConfigError::DeviceRange {
                device_max: 10,
                margin: 10
            })
        );
        assert!(Projection::with_margin(1.0, 0, 0).is_err());
    }
}
