// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Prescaler and reload selection for the two timers.
//!
//! Kept free of any peripheral access so the arithmetic can be checked on the host.

use crate::error::ConfigError;

/// Counter rate of the tick timer. 100 kHz keeps the reload inside 16 bits down to ~2 Hz.
pub const TICK_COUNTER_HZ: u32 = 100_000;

/// Register values for one timer.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TimerSetup {
    /// Written to PSC; the counter runs at `timclk / (prescaler + 1)`.
    pub prescaler: u16,
    /// Written to ARR; one period is `reload + 1` counts.
    pub reload: u32,
}

impl TimerSetup {
    /// Frequency the timer actually overflows at with these settings.
    pub fn frequency_hz(&self, timclk_hz: u32) -> u32 {
        timclk_hz / ((u32::from(self.prescaler) + 1) * (self.reload + 1))
    }
}

/// PWM timer: one period spans the whole device domain (`reload = device_max`), and the prescaler
/// is the nearest divider that brings the period close to `carrier_hz`.
pub fn pwm_timing(timclk_hz: u32, carrier_hz: u32, device_max: u16) -> Result<TimerSetup, ConfigError> {
    let counts = u32::from(device_max) + 1;
    let per_period = carrier_hz.checked_mul(counts);

    let divider = match per_period {
        Some(p) if carrier_hz > 0 && p <= timclk_hz => (timclk_hz + p / 2) / p,
        _ => return Err(ConfigError::CarrierRate { carrier_hz }),
    };

    let prescaler = u16::try_from(divider - 1).map_err(|_| ConfigError::CarrierRate { carrier_hz })?;

    Ok(TimerSetup {
        prescaler,
        reload: u32::from(device_max),
    })
}

/// Tick timer: counter at [`TICK_COUNTER_HZ`], reload chosen for `rate_hz`.
pub fn tick_timing(timclk_hz: u32, rate_hz: u32) -> Result<TimerSetup, ConfigError> {
    if rate_hz == 0 || rate_hz > TICK_COUNTER_HZ || timclk_hz < TICK_COUNTER_HZ {
        return Err(ConfigError::TickRate { rate_hz });
    }

    let prescaler =
        u16::try_from(timclk_hz / TICK_COUNTER_HZ - 1).map_err(|_| ConfigError::TickRate { rate_hz })?;

    let reload = TICK_COUNTER_HZ / rate_hz - 1;
    if reload > 0xFFFF {
        return Err(ConfigError::TickRate { rate_hz });
    }

    Ok(TimerSetup { prescaler, reload })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pwm_at_96mhz() {
        let setup = pwm_timing(96_000_000, 25_600, 255).unwrap();
        assert_eq!(setup.reload, 255);
        assert_eq!(setup.prescaler, 14);
        assert_eq!(setup.frequency_hz(96_000_000), 25_000);
    }

    #[test]
    fn pwm_at_84mhz_matches_thirteen_divider() {
        // 84 MHz / (13 * 256) ~= 25.2 kHz
        let setup = pwm_timing(84_000_000, 25_600, 255).unwrap();
        assert_eq!(setup.prescaler, 12);
    }

    #[test]
    fn pwm_rejects_unreachable_carrier() {
        assert_eq!(
            pwm_timing(16_000_000, 100_000, 255),
            Err(ConfigError::CarrierRate { carrier_hz: 100_000 })
        );
        assert!(pwm_timing(16_000_000, 0, 255).is_err());
    }

    #[test]
    fn tick_750_and_500() {
        let fast = tick_timing(96_000_000, 750).unwrap();
        assert_eq!(fast.prescaler, 959);
        assert_eq!(fast.reload, 132);
        assert_eq!(fast.frequency_hz(96_000_000), 751);

        let slow = tick_timing(96_000_000, 500).unwrap();
        assert_eq!(slow.reload, 199);
        assert_eq!(slow.frequency_hz(96_000_000), 500);
    }

    #[test]
    fn tick_rejects_out_of_range_rates() {
        assert!(tick_timing(96_000_000, 0).is_err());
        assert!(tick_timing(96_000_000, 200_000).is_err());
        assert_eq!(
            tick_timing(96_000_000, 1),
            Err(ConfigError::TickRate { rate_hz: 1 })
        );
    }
}
