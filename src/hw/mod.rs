// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Hardware Layer
//!
//! MCU-level wrappers for the STM32F777. Only built with the `firmware` feature.
//!
//! - [`pins`] - Board pin assignments.
//! - [`pwm`] - TIM2 two-channel PWM output (the X/Y deflection channels).
//! - [`tick`] - TIM3 periodic tick interrupt.
//! - [`usart`] - Blocking debug console for startup logging.

pub mod pins;
pub mod pwm;
pub mod tick;
pub mod usart;

pub use pins::BoardPins;
pub use pwm::PwmPair;
pub use tick::TickTimer;
pub use usart::Console;
