// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Static waveform source: two precomputed tables replayed in lockstep.
//!
//! Both tables share the length `N` through the type, so a mismatch cannot be expressed. The tables
//! are normally baked in at build time, but can also be traced from a closed 2D polyline with
//! [`StaticWaveform::from_polyline`], which is how the shipped tables were produced.

use libm::{fabsf, floorf};

use crate::engine::{Sample, SampleSource};
use crate::error::ConfigError;
use crate::geometry::Point2;

pub struct StaticWaveform<const N: usize> {
    xs: [u8; N],
    ys: [u8; N],
    index: usize,
}

impl<const N: usize> StaticWaveform<N> {
    pub fn new(xs: [u8; N], ys: [u8; N]) -> Result<Self, ConfigError> {
        if N == 0 {
            return Err(ConfigError::EmptyWaveform);
        }
        Ok(Self { xs, ys, index: 0 })
    }

    /// Trace a closed polyline into `N` samples.
    ///
    /// Each of the `P` segments, including the one from the last point back to the first, is split
    /// into `steps` samples at `t = i / steps`. All samples are divided by the largest absolute
    /// coordinate, scaled to `device_max`, and rounded half-up. `P * steps` must equal `N`.
    pub fn from_polyline<const P: usize>(
        points: &[[f32; 2]; P],
        steps: usize,
        device_max: u8,
    ) -> Result<Self, ConfigError> {
        let expected = P * steps;
        if expected != N {
            return Err(ConfigError::PolylineLength {
                expected,
                actual: N,
            });
        }

        let norm = points
            .iter()
            .flat_map(|p| p.iter())
            .fold(0.0_f32, |acc, &c| if fabsf(c) > acc { fabsf(c) } else { acc });
        if !(norm > 0.0) {
            return Err(ConfigError::DegeneratePolyline);
        }

        let scale = f32::from(device_max);
        let to_device = |v: f32| -> u8 {
            let scaled = floorf(v / norm * scale + 0.5);
            if scaled <= 0.0 {
                0
            } else if scaled >= scale {
                device_max
            } else {
                scaled as u8
            }
        };

        let mut xs = [0u8; N];
        let mut ys = [0u8; N];

        for (segment, a) in points.iter().enumerate() {
            let a = Point2::new(a[0], a[1]);
            let b = points[(segment + 1) % P];
            let b = Point2::new(b[0], b[1]);

            for step in 0..steps {
                let t = step as f32 / steps as f32;
                let i = segment * steps + step;
                xs[i] = to_device(a.x + (b.x - a.x) * t);
                ys[i] = to_device(a.y + (b.y - a.y) * t);
            }
        }

        Self::new(xs, ys)
    }

    /// Index of the sample the next call returns.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    pub fn xs(&self) -> &[u8; N] {
        &self.xs
    }

    pub fn ys(&self) -> &[u8; N] {
        &self.ys
    }
}

impl<const N: usize> SampleSource for StaticWaveform<N> {
    #[inline]
    fn next_sample(&mut self) -> Sample {
        let sample = Point2::new(
            u16::from(self.xs[self.index]),
            u16::from(self.ys[self.index]),
        );
        self.index = (self.index + 1) % N;
        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{WAVEFORM_LEN, WAVEFORM_POLYLINE, WAVEFORM_STEPS, WAVEFORM_XS, WAVEFORM_YS};

    fn reference() -> StaticWaveform<WAVEFORM_LEN> {
        StaticWaveform::new(WAVEFORM_XS, WAVEFORM_YS).unwrap()
    }

    #[test]
    fn replays_reference_tables() {
        let mut wave = reference();

        assert_eq!(wave.next_sample(), Point2::new(73, 255));
        for _ in 1..125 {
            wave.next_sample();
        }
        assert_eq!(wave.index(), 125);
        assert_eq!(wave.next_sample(), Point2::new(88, 255));
        assert_eq!(wave.index(), 0);
        assert_eq!(wave.next_sample(), Point2::new(73, 255));
    }

    #[test]
    fn index_is_tick_count_mod_len() {
        let mut wave = reference();
        for t in 0..3 * WAVEFORM_LEN + 5 {
            assert_eq!(wave.index(), t % WAVEFORM_LEN);
            wave.next_sample();
        }
    }

    #[test]
    fn sequence_has_exact_period() {
        let mut a = reference();
        let mut b = reference();
        for _ in 0..WAVEFORM_LEN {
            b.next_sample();
        }
        for _ in 0..2 * WAVEFORM_LEN {
            assert_eq!(a.next_sample(), b.next_sample());
        }
    }

    #[test]
    fn polyline_reproduces_shipped_tables() {
        let traced =
            StaticWaveform::<WAVEFORM_LEN>::from_polyline(&WAVEFORM_POLYLINE, WAVEFORM_STEPS, 255)
                .unwrap();
        assert_eq!(traced.xs(), &WAVEFORM_XS);
        assert_eq!(traced.ys(), &WAVEFORM_YS);
    }

    #[test]
    fn polyline_square() {
        let square = [[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]];
        let wave = StaticWaveform::<8>::from_polyline(&square, 2, 200).unwrap();
        assert_eq!(wave.xs(), &[0, 100, 200, 200, 200, 100, 0, 0]);
        assert_eq!(wave.ys(), &[0, 0, 0, 100, 200, 200, 200, 100]);
    }

    #[test]
    fn polyline_length_must_match() {
        let square = [[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]];
        assert_eq!(
            StaticWaveform::<10>::from_polyline(&square, 2, 255).err(),
            Some(ConfigError::PolylineLength {
                expected: 8,
                actual: 10
            })
        );
    }

    #[test]
    fn polyline_needs_extent() {
        let dot = [[0.0, 0.0], [0.0, 0.0]];
        assert_eq!(
            StaticWaveform::<4>::from_polyline(&dot, 2, 255).err(),
            Some(ConfigError::DegeneratePolyline)
        );
    }

    #[test]
    fn rejects_empty_tables() {
        assert_eq!(
            StaticWaveform::<0>::new([], []).err(),
            Some(ConfigError::EmptyWaveform)
        );
    }
}
