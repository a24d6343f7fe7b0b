// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Tick dispatch.
//!
//! [`Display`] pairs the active [`SampleSource`] with an output driver. The periodic tick handler
//! calls [`Display::tick`] and nothing else: one sample is pulled, then written to channel A (x)
//! and channel B (y) before the handler returns.

use crate::engine::{Sample, SampleSource};

/// Analog output channel.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Channel {
    /// Horizontal deflection
    A,
    /// Vertical deflection
    B,
}

/// Write primitive exposed by the output driver.
///
/// The value is already in the device domain. The write must take effect before the next carrier
/// cycle and must not block.
pub trait ChannelWrite {
    fn write_channel(&mut self, channel: Channel, value: u16);
}

pub struct Display<S, O> {
    source: S,
    output: O,
}

impl<S: SampleSource, O: ChannelWrite> Display<S, O> {
    pub fn new(source: S, output: O) -> Self {
        Self { source, output }
    }

    /// Emit one sample on both channels.
    #[inline]
    pub fn tick(&mut self) -> Sample {
        let sample = self.source.next_sample();
        self.output.write_channel(Channel::A, sample.x);
        self.output.write_channel(Channel::B, sample.y);
        sample
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    /// Consume the display and return its parts.
    pub fn free(self) -> (S, O) {
        (self.source, self.output)
    }
}
