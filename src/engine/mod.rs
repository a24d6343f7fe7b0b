// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Sample Engines
//!
//! Everything that decides what the beam does on the next tick.
//!
//! ## Modules
//!
//! - [`quantize`] - Saturating conversion from device-space reals to channel values.
//! - [`lerp`] - Validated table of interpolation fractions.
//! - [`tracer`] - Wireframe tracer: walks the edges of a rotating model.
//! - [`waveform`] - Replays two fixed sample tables in lockstep.
//!
//! Both engines implement [`SampleSource`]. The active one is chosen at build time, so the tick
//! path is monomorphic.

pub mod lerp;
pub mod quantize;
pub mod tracer;
pub mod waveform;

pub use lerp::LerpTable;
pub use quantize::Quantizer;
pub use tracer::WireframeTracer;
pub use waveform::StaticWaveform;

use crate::geometry::Point2;

/// One quantized (x, y) pair, ready for the output channels.
pub type Sample = Point2<u16>;

/// Anything that can produce the next sample from inside the tick handler.
///
/// Implementations must run in bounded, constant time: no allocation, no blocking, no loops whose
/// length depends on runtime data.
pub trait SampleSource {
    fn next_sample(&mut self) -> Sample;
}
