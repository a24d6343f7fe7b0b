// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Configuration errors.
//!
//! Everything in this crate is fixed at build time, so the only failures are bad constants. They
//! are detected once, when the engine is constructed at startup, and never inside the tick path.

use core::fmt;

/// Reason a compile-time configuration was rejected.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Edge walk has fewer than two entries.
    WalkTooShort,
    /// Edge walk references a vertex that does not exist.
    VertexOutOfRange { position: usize, vertex: u8 },
    /// Two consecutive walk entries (with wraparound) name the same vertex.
    DegenerateSegment { position: usize },
    /// Lerp table has fewer than two fractions.
    LerpTableTooShort,
    /// Lerp table does not start at 0.0 or end at 1.0.
    LerpEndpoints,
    /// Lerp table is not strictly increasing at `position`.
    LerpNotIncreasing { position: usize },
    /// Static waveform tables are empty.
    EmptyWaveform,
    /// Polyline points times steps does not equal the table length.
    PolylineLength { expected: usize, actual: usize },
    /// Polyline has no extent to normalize against.
    DegeneratePolyline,
    /// Device domain is empty or the projection margin consumes all of it.
    DeviceRange { device_max: u16, margin: u16 },
    /// Tick rate cannot be produced by the tick timer.
    TickRate { rate_hz: u32 },
    /// Carrier frequency cannot be produced by the PWM timer.
    CarrierRate { carrier_hz: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ConfigError::WalkTooShort => f.write_str("edge walk needs at least two entries"),
            ConfigError::VertexOutOfRange { position, vertex } => {
                write!(f, "edge walk entry {} names missing vertex {}", position, vertex)
            }
            ConfigError::DegenerateSegment { position } => {
                write!(f, "edge walk entry {} repeats the next vertex", position)
            }
            ConfigError::LerpTableTooShort => f.write_str("lerp table needs at least two entries"),
            ConfigError::LerpEndpoints => f.write_str("lerp table must run from 0.0 to 1.0"),
            ConfigError::LerpNotIncreasing { position } => {
                write!(f, "lerp table not increasing at entry {}", position)
            }
            ConfigError::EmptyWaveform => f.write_str("waveform tables are empty"),
            ConfigError::PolylineLength { expected, actual } => {
                write!(f, "polyline yields {} samples, table holds {}", expected, actual)
            }
            ConfigError::DegeneratePolyline => f.write_str("polyline has zero extent"),
            ConfigError::DeviceRange { device_max, margin } => {
                write!(f, "device max {} leaves no room for margin {}", device_max, margin)
            }
            ConfigError::TickRate { rate_hz } => write!(f, "unsupported tick rate {} Hz", rate_hz),
            ConfigError::CarrierRate { carrier_hz } => {
                write!(f, "unsupported carrier {} Hz", carrier_hz)
            }
        }
    }
}
