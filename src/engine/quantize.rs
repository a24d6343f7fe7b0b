// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Saturating quantizer from device-space reals to channel values.
//!
//! Values are truncated toward zero and clamped to `0..=max`. Out-of-range input saturates at the
//! nearest bound; NaN maps to 0.

use crate::geometry::Point2;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Quantizer {
    max: u16,
}

impl Quantizer {
    pub const fn new(max: u16) -> Self {
        Self { max }
    }

    #[inline]
    pub fn max(&self) -> u16 {
        self.max
    }

    #[inline]
    pub fn quantize(&self, v: f32) -> u16 {
        // Written so NaN falls into the first branch.
        if !(v > 0.0) {
            0
        } else if v >= f32::from(self.max) {
            self.max
        } else {
            v as u16
        }
    }

    #[inline]
    pub fn quantize_point(&self, p: Point2<f32>) -> Point2<u16> {
        Point2 {
            x: self.quantize(p.x),
            y: self.quantize(p.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const Q: Quantizer = Quantizer::new(255);

    #[test]
    fn truncates_in_range_values() {
        assert_eq!(Q.quantize(0.0), 0);
        assert_eq!(Q.quantize(0.99), 0);
        assert_eq!(Q.quantize(122.5), 122);
        assert_eq!(Q.quantize(254.999), 254);
        assert_eq!(Q.quantize(255.0), 255);
    }

    #[test]
    fn saturates_instead_of_wrapping() {
        assert_eq!(Q.quantize(256.0), 255);
        assert_eq!(Q.quantize(457.3), 255);
        assert_eq!(Q.quantize(70_000.0), 255);
        assert_eq!(Q.quantize(f32::INFINITY), 255);
        assert_eq!(Q.quantize(-0.5), 0);
        assert_eq!(Q.quantize(-300.0), 0);
        assert_eq!(Q.quantize(f32::NEG_INFINITY), 0);
        assert_eq!(Q.quantize(f32::NAN), 0);
    }

    #[test]
    fn output_stays_in_domain_and_is_monotonic() {
        let mut prev = 0;
        let mut v = -50.0_f32;
        while v < 400.0 {
            let q = Q.quantize(v);
            assert!(q <= Q.max());
            assert!(q >= prev, "quantize({}) = {} < {}", v, q, prev);
            prev = q;
            v += 0.37;
        }
        assert_eq!(prev, 255);
    }

    #[test]
    fn respects_smaller_domains() {
        let q = Quantizer::new(100);
        assert_eq!(q.quantize(150.0), 100);
        assert_eq!(
            q.quantize_point(Point2::new(42.7, 1e9)),
            Point2::new(42, 100)
        );
    }
}
