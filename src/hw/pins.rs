// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the vector display board (STM32F777).

use stm32f7xx_hal::{
    gpio::{gpioa, Alternate},
    pac,
    prelude::*,
};

/// All board pins. Construct this once at startup using:
///
/// ```ignore
/// let pins = BoardPins::new(dp.GPIOA);
/// ```
pub struct BoardPins {
    pub usart1: Usart1Pins,
    pub deflection: DeflectionPins,
}

pub struct Usart1Pins {
    pub tx: gpioa::PA9<Alternate<7>>,
    pub rx: gpioa::PA10<Alternate<7>>,
}

/// PWM outputs feeding the X/Y low-pass filters.
pub struct DeflectionPins {
    pub x: gpioa::PA2<Alternate<1>>, // TIM2_CH3
    pub y: gpioa::PA3<Alternate<1>>, // TIM2_CH4
}

impl BoardPins {
    /// Create all named pins from raw GPIO peripherals.
    pub fn new(gpioa: pac::GPIOA) -> Self {
        let gpioa = gpioa.split();

        Self {
            usart1: Usart1Pins {
                tx: gpioa.pa9.into_alternate::<7>(),
                rx: gpioa.pa10.into_alternate::<7>(),
            },

            deflection: DeflectionPins {
                x: gpioa.pa2.into_alternate::<1>(),
                y: gpioa.pa3.into_alternate::<1>(),
            },
        }
    }
}
