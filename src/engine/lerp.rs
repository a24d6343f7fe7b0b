// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Interpolation fractions for one segment.

use crate::error::ConfigError;

/// `M` fractions in `[0, 1]`, strictly increasing, starting at exactly 0.0 and ending at exactly
/// 1.0. The endpoints guarantee each segment starts on its first vertex and ends on its second.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LerpTable<const M: usize> {
    fractions: [f32; M],
}

impl<const M: usize> LerpTable<M> {
    pub fn new(fractions: [f32; M]) -> Result<Self, ConfigError> {
        if M < 2 {
            return Err(ConfigError::LerpTableTooShort);
        }
        if fractions[0] != 0.0 || fractions[M - 1] != 1.0 {
            return Err(ConfigError::LerpEndpoints);
        }
        for position in 1..M {
            if !(fractions[position] > fractions[position - 1]) {
                return Err(ConfigError::LerpNotIncreasing { position });
            }
        }
        Ok(Self { fractions })
    }

    #[inline]
    pub const fn len(&self) -> usize {
        M
    }

    #[inline]
    pub fn get(&self, index: usize) -> f32 {
        self.fractions[index % M]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_uniform_table() {
        let table = LerpTable::new([0.0, 0.25, 0.5, 0.75, 1.0]).unwrap();
        assert_eq!(table.len(), 5);
        assert_eq!(table.get(0), 0.0);
        assert_eq!(table.get(4), 1.0);
        assert_eq!(table.get(6), 0.25);
    }

    #[test]
    fn rejects_bad_endpoints() {
        assert_eq!(
            LerpTable::new([0.1, 0.5, 1.0]),
            Err(ConfigError::LerpEndpoints)
        );
        assert_eq!(
            LerpTable::new([0.0, 0.5, 0.9]),
            Err(ConfigError::LerpEndpoints)
        );
    }

    #[test]
    fn rejects_non_increasing() {
        assert_eq!(
            LerpTable::new([0.0, 0.5, 0.5, 1.0]),
            Err(ConfigError::LerpNotIncreasing { position: 2 })
        );
        assert_eq!(
            LerpTable::new([0.0, f32::NAN, 1.0]),
            Err(ConfigError::LerpNotIncreasing { position: 1 })
        );
    }

    #[test]
    fn rejects_single_entry() {
        assert_eq!(LerpTable::new([0.0]), Err(ConfigError::LerpTableTooShort));
    }
}
