// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Vectorscope Firmware
//!
//! Drives an analog XY vector display (an oscilloscope in XY mode) from two PWM channels of an
//! STM32F777. A periodic timer interrupt asks the active sample source for the next (x, y) pair
//! and writes it to both channels. The default source traces a slowly rotating wireframe cube; the
//! alternative replays a fixed pair of tables.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`geometry`] | Points, in-place rotation, projection, wireframe model |
//! | [`engine`] | Sample sources (wireframe tracer, static waveform) and the quantizer |
//! | [`display`] | Tick dispatch: one sample to both channels per tick |
//! | [`config`] | Build-time constants and source selection |
//! | [`timing`] | Timer prescaler/reload arithmetic |
//! | `hw` | MCU-level wrappers around TIM2, TIM3, USART (`firmware` feature) |
//!
//! ## Getting Started
//!
//! Run the host tests:
//!
//! ```bash
//! cargo test
//! ```
//!
//! Flash the board:
//!
//! ```bash
//! cargo run --release --features firmware --target thumbv7em-none-eabihf
//! ```
//!
//! Add `static-waveform` or `tick-500hz` to `--features` for the other shipped variants.
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![no_std]

pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod timing;

#[cfg(feature = "firmware")]
pub mod hw;

pub use error::ConfigError;
