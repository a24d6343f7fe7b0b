// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Periodic tick source on TIM3.
//!
//! TIM3 counts at [`TICK_COUNTER_HZ`](crate::timing::TICK_COUNTER_HZ) and raises its update
//! interrupt once per tick. The `TIM3` handler in the binary owns the display and must call
//! [`TickTimer::clear_interrupt`] before returning.

use cortex_m::peripheral::NVIC;
use stm32f7xx_hal::pac;

use crate::error::ConfigError;
use crate::timing::{tick_timing, TimerSetup};

pub struct TickTimer {
    tim: pac::TIM3,
    setup: TimerSetup,
}

impl TickTimer {
    /// Configure TIM3 to overflow at `rate_hz`. The interrupt stays masked until
    /// [`listen`](Self::listen).
    pub fn tim3(tim3: pac::TIM3, timclk_hz: u32, rate_hz: u32) -> Result<Self, ConfigError> {
        let setup = tick_timing(timclk_hz, rate_hz)?;

        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb1enr.modify(|_, w| w.tim3en().set_bit());

        let tim = tim3;

        // Disable counter while configuring
        tim.cr1.modify(|_, w| w.cen().clear_bit());

        tim.psc.write(|w| unsafe { w.bits(u32::from(setup.prescaler)) });
        tim.arr.write(|w| unsafe { w.bits(setup.reload) });

        // Only counter overflow raises the update event
        tim.cr1.modify(|_, w| w.urs().set_bit());

        // Load shadows without leaving a pending flag behind
        tim.egr.write(|w| w.ug().set_bit());
        tim.sr.modify(|_, w| w.uif().clear_bit());

        // Reset counter
        tim.cnt.write(|w| unsafe { w.bits(0) });

        Ok(Self { tim, setup })
    }

    /// Enable the update interrupt and start counting.
    pub fn listen(&mut self) {
        self.tim.dier.modify(|_, w| w.uie().set_bit());
        self.tim.cr1.modify(|_, w| w.cen().set_bit());

        unsafe { NVIC::unmask(pac::Interrupt::TIM3) };
    }

    /// Acknowledge the update interrupt.
    #[inline]
    pub fn clear_interrupt(&mut self) {
        self.tim.sr.modify(|_, w| w.uif().clear_bit());
    }

    #[inline]
    pub fn setup(&self) -> TimerSetup {
        self.setup
    }

    /// Tick rate actually produced.
    #[inline]
    pub fn rate_hz(&self, timclk_hz: u32) -> u32 {
        self.setup.frequency_hz(timclk_hz)
    }

    /// Mask the interrupt, stop the counter, and return the timer.
    pub fn free(self) -> pac::TIM3 {
        NVIC::mask(pac::Interrupt::TIM3);
        self.tim.dier.modify(|_, w| w.uie().clear_bit());
        self.tim.cr1.modify(|_, w| w.cen().clear_bit());
        self.tim
    }
}
