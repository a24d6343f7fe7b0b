// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Two-channel PWM output on TIM2 (CH3 = X, CH4 = Y).
//!
//! Each channel is a PWM carrier whose duty cycle, after an external RC low-pass filter, becomes
//! the analog deflection voltage. One PWM period spans the whole device domain (ARR =
//! `device_max`), so a compare value of `v` gives a duty of `v / (device_max + 1)`.
//!
//! Compare registers are preloaded: a value written during one carrier period takes effect at the
//! next update event, never mid-period.

use stm32f7xx_hal::pac;

use crate::display::{Channel, ChannelWrite};
use crate::error::ConfigError;
use crate::hw::pins::DeflectionPins;
use crate::timing::{pwm_timing, TimerSetup};

pub struct PwmPair {
    tim: pac::TIM2,
    pins: DeflectionPins,
    setup: TimerSetup,
}

impl PwmPair {
    /// Configure TIM2 CH3/CH4 as edge-aligned PWM mode 1 at roughly `carrier_hz`.
    ///
    /// `timclk_hz` is the APB1 timer clock.
    pub fn tim2(
        tim2: pac::TIM2,
        pins: DeflectionPins,
        timclk_hz: u32,
        carrier_hz: u32,
        device_max: u16,
    ) -> Result<Self, ConfigError> {
        let setup = pwm_timing(timclk_hz, carrier_hz, device_max)?;

        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb1enr.modify(|_, w| w.tim2en().set_bit());

        let tim = tim2;

        // Disable counter while configuring
        tim.cr1.modify(|_, w| w.cen().clear_bit());

        // Edge-aligned, up-counting, buffered ARR
        tim.cr1
            .modify(|_, w| unsafe { w.cms().bits(0b00).dir().clear_bit().arpe().set_bit() });

        tim.psc.write(|w| unsafe { w.bits(u32::from(setup.prescaler)) });
        tim.arr.write(|w| unsafe { w.bits(setup.reload) });

        // CH3/CH4: PWM mode 1 with compare preload
        tim.ccmr2_output().modify(|_, w| unsafe {
            w.oc3m()
                .bits(0b110)
                .oc3pe()
                .set_bit()
                .oc4m()
                .bits(0b110)
                .oc4pe()
                .set_bit()
        });

        // Start at zero deflection
        tim.ccr3.write(|w| unsafe { w.bits(0) });
        tim.ccr4.write(|w| unsafe { w.bits(0) });

        // Active-high outputs, enabled
        tim.ccer.modify(|_, w| {
            w.cc3p()
                .clear_bit()
                .cc4p()
                .clear_bit()
                .cc3e()
                .set_bit()
                .cc4e()
                .set_bit()
        });

        // Load PSC/ARR/CCR shadows, then run
        tim.egr.write(|w| w.ug().set_bit());
        tim.cr1.modify(|_, w| w.cen().set_bit());

        Ok(Self {
            tim,
            pins,
            setup,
        })
    }

    /// Programmed prescaler and reload.
    #[inline]
    pub fn setup(&self) -> TimerSetup {
        self.setup
    }

    /// Carrier frequency actually produced.
    #[inline]
    pub fn carrier_hz(&self, timclk_hz: u32) -> u32 {
        self.setup.frequency_hz(timclk_hz)
    }

    /// Stop the carrier and return the timer and pins.
    pub fn free(self) -> (pac::TIM2, DeflectionPins) {
        self.tim.cr1.modify(|_, w| w.cen().clear_bit());
        (self.tim, self.pins)
    }
}

impl ChannelWrite for PwmPair {
    #[inline]
    fn write_channel(&mut self, channel: Channel, value: u16) {
        let value = u32::from(value);
        match channel {
            Channel::A => self.tim.ccr3.write(|w| unsafe { w.bits(value) }),
            Channel::B => self.tim.ccr4.write(|w| unsafe { w.bits(value) }),
        }
    }
}
