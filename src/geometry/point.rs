// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Point types.

/// Object-space coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Device-space coordinate.
///
/// `Point2<f32>` is a projected position before quantization; `Point2<u16>` is a value ready for
/// the output channels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Point2<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl Point2<f32> {
    /// Linear interpolation toward `other` by fraction `t`.
    ///
    /// Evaluated as `a*(1-t) + b*t` so that `t = 0.0` returns `self` and `t = 1.0` returns `other`
    /// bit for bit.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let s = 1.0 - t;
        Self {
            x: self.x * s + other.x * t,
            y: self.y * s + other.y * t,
        }
    }
}
