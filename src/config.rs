// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Build-time configuration.
//!
//! Geometry, tables, and rates are compile-time constants. Cargo features pick between the shipped
//! variants:
//!
//! | Feature | Effect |
//! | ------- | ------ |
//! | `static-waveform` | Replay [`WAVEFORM_XS`]/[`WAVEFORM_YS`] instead of tracing the cube |
//! | `tick-500hz` | Tick at 500 Hz instead of 750 Hz |
//!
//! [`build_source`] turns the constants into the active [`SampleSource`](crate::engine::SampleSource),
//! validating everything once at startup.

use core::f32::consts::PI;

use crate::engine::{LerpTable, Quantizer, StaticWaveform, WireframeTracer};
use crate::error::ConfigError;
use crate::geometry::{Point3, Projection, Rotation, WireframeModel};

// ---------------------------------------------------------------------------------------------
// Output domain and rates
// ---------------------------------------------------------------------------------------------

/// Largest value an output channel accepts (8-bit PWM).
pub const DEVICE_MAX: u16 = 255;

/// Inset subtracted from [`DEVICE_MAX`] to form the projection scale.
pub const MARGIN: u16 = 10;

/// Offset added to object-space coordinates before scaling.
pub const TRANSLATE: f32 = 1.0;

/// PWM carrier frequency of each analog channel.
pub const CARRIER_HZ: u32 = 25_600;

#[cfg(not(feature = "tick-500hz"))]
pub const TICK_RATE_HZ: u32 = 750;
#[cfg(feature = "tick-500hz")]
pub const TICK_RATE_HZ: u32 = 500;

// ---------------------------------------------------------------------------------------------
// Wireframe cube
// ---------------------------------------------------------------------------------------------

pub const NUM_CUBE_POINTS: usize = 8;
pub const EDGE_WALK_LEN: usize = 18;
pub const NUM_LERP_POINTS: usize = 8;

/// Unit cube centred on the origin. 0..4 is the z = -0.5 face, 4..8 the z = +0.5 face.
pub const CUBE_POINTS: [Point3; NUM_CUBE_POINTS] = [
    Point3::new(-0.5, -0.5, -0.5),
    Point3::new(0.5, -0.5, -0.5),
    Point3::new(0.5, 0.5, -0.5),
    Point3::new(-0.5, 0.5, -0.5),
    Point3::new(-0.5, -0.5, 0.5),
    Point3::new(0.5, -0.5, 0.5),
    Point3::new(0.5, 0.5, 0.5),
    Point3::new(-0.5, 0.5, 0.5),
];

/// Pen path over [`CUBE_POINTS`]: back face, across, front face, then the remaining three side
/// edges with short retraces. The last entry joins back to the first.
pub const EDGE_WALK: [u8; EDGE_WALK_LEN] = [0, 1, 2, 3, 0, 4, 5, 6, 7, 4, 5, 1, 5, 6, 2, 6, 7, 3];

pub const LERP_TABLE: [f32; NUM_LERP_POINTS] = [
    0.0,
    1.0 / 7.0,
    2.0 / 7.0,
    3.0 / 7.0,
    4.0 / 7.0,
    5.0 / 7.0,
    6.0 / 7.0,
    1.0,
];

/// Rotation applied once before the first tick, `(angle_x, angle_y)` in radians.
pub const PRIMING_ROTATION: (f32, f32) = (PI / 6.0, PI / 8.0);

/// Rotation applied after every full walk, `(angle_x, angle_y)` in radians.
pub const ROTATION_INCREMENT: (f32, f32) = (PI / 90.0, PI / 360.0);

// ---------------------------------------------------------------------------------------------
// Static waveform
// ---------------------------------------------------------------------------------------------

pub const WAVEFORM_LEN: usize = 126;
pub const WAVEFORM_STEPS: usize = 7;

/// Closed polyline the static tables are traced from (see [`StaticWaveform::from_polyline`]).
pub const WAVEFORM_POLYLINE: [[f32; 2]; 18] = [
    [2.0, 7.0],
    [5.0, 7.0],
    [6.0, 6.0],
    [6.0, 3.0],
    [3.0, 3.0],
    [2.0, 4.0],
    [2.0, 7.0],
    [3.0, 6.0],
    [6.0, 6.0],
    [5.0, 7.0],
    [5.0, 4.0],
    [6.0, 3.0],
    [3.0, 3.0],
    [3.0, 6.0],
    [3.0, 3.0],
    [2.0, 4.0],
    [5.0, 4.0],
    [5.0, 7.0],
];

#[rustfmt::skip]
pub const WAVEFORM_XS: [u8; WAVEFORM_LEN] = [
    73, 88, 104, 120, 135, 151, 167, 182, 187, 193, 198, 203, 208, 213, 219, 219,
    219, 219, 219, 219, 219, 219, 203, 187, 172, 156, 141, 125, 109, 104, 99, 94,
    88, 83, 78, 73, 73, 73, 73, 73, 73, 73, 73, 78, 83, 88, 94, 99,
    104, 109, 125, 141, 156, 172, 187, 203, 219, 213, 208, 203, 198, 193, 187, 182,
    182, 182, 182, 182, 182, 182, 182, 187, 193, 198, 203, 208, 213, 219, 203, 187,
    172, 156, 141, 125, 109, 109, 109, 109, 109, 109, 109, 109, 109, 109, 109, 109,
    109, 109, 109, 104, 99, 94, 88, 83, 78, 73, 88, 104, 120, 135, 151, 167,
    182, 182, 182, 182, 182, 182, 182, 182, 167, 151, 135, 120, 104, 88,
];

#[rustfmt::skip]
pub const WAVEFORM_YS: [u8; WAVEFORM_LEN] = [
    255, 255, 255, 255, 255, 255, 255, 255, 250, 245, 239, 234, 229, 224, 219, 203,
    187, 172, 156, 141, 125, 109, 109, 109, 109, 109, 109, 109, 109, 114, 120, 125,
    130, 135, 141, 146, 161, 177, 193, 208, 224, 239, 255, 250, 245, 239, 234, 229,
    224, 219, 219, 219, 219, 219, 219, 219, 219, 224, 229, 234, 239, 245, 250, 255,
    239, 224, 208, 193, 177, 161, 146, 141, 135, 130, 125, 120, 114, 109, 109, 109,
    109, 109, 109, 109, 109, 125, 141, 156, 172, 187, 203, 219, 203, 187, 172, 156,
    141, 125, 109, 114, 120, 125, 130, 135, 141, 146, 146, 146, 146, 146, 146, 146,
    146, 161, 177, 193, 208, 224, 239, 255, 255, 255, 255, 255, 255, 255,
];

// ---------------------------------------------------------------------------------------------
// Source selection
// ---------------------------------------------------------------------------------------------

pub type CubeTracer = WireframeTracer<NUM_CUBE_POINTS, EDGE_WALK_LEN, NUM_LERP_POINTS>;
pub type ReferenceWaveform = StaticWaveform<WAVEFORM_LEN>;

#[cfg(not(feature = "static-waveform"))]
pub type ActiveSource = CubeTracer;
#[cfg(feature = "static-waveform")]
pub type ActiveSource = ReferenceWaveform;

/// Short name of the active source, for the startup banner.
#[cfg(not(feature = "static-waveform"))]
pub const ACTIVE_SOURCE_NAME: &str = "wireframe cube";
#[cfg(feature = "static-waveform")]
pub const ACTIVE_SOURCE_NAME: &str = "static waveform";

/// Build the rotating cube tracer from the constants above.
pub fn cube_tracer() -> Result<CubeTracer, ConfigError> {
    let model = WireframeModel::new(CUBE_POINTS, EDGE_WALK)?;
    let lerp = LerpTable::new(LERP_TABLE)?;
    let projection = Projection::with_margin(TRANSLATE, DEVICE_MAX, MARGIN)?;

    let (px, py) = PRIMING_ROTATION;
    let (ix, iy) = ROTATION_INCREMENT;

    Ok(WireframeTracer::new(
        model,
        lerp,
        projection,
        &Rotation::new(px, py),
        Rotation::new(ix, iy),
        Quantizer::new(DEVICE_MAX),
    ))
}

/// Build the static waveform from the baked tables.
pub fn reference_waveform() -> Result<ReferenceWaveform, ConfigError> {
    StaticWaveform::new(WAVEFORM_XS, WAVEFORM_YS)
}

/// Build whichever source the enabled features select.
pub fn build_source() -> Result<ActiveSource, ConfigError> {
    #[cfg(not(feature = "static-waveform"))]
    {
        cube_tracer()
    }
    #[cfg(feature = "static-waveform")]
    {
        reference_waveform()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SampleSource;

    /// Index of `(a, b)` as an undirected cube edge, or `None` if the pair is not an edge.
    fn cube_edge(a: u8, b: u8) -> Option<usize> {
        #[rustfmt::skip]
        const EDGES: [(u8, u8); 12] = [
            (0, 1), (1, 2), (2, 3), (3, 0),
            (4, 5), (5, 6), (6, 7), (7, 4),
            (0, 4), (1, 5), (2, 6), (3, 7),
        ];
        EDGES
            .iter()
            .position(|&(x, y)| (x, y) == (a, b) || (y, x) == (a, b))
    }

    #[test]
    fn walk_has_no_degenerate_segment() {
        for i in 0..EDGE_WALK_LEN {
            assert_ne!(EDGE_WALK[i], EDGE_WALK[(i + 1) % EDGE_WALK_LEN], "entry {}", i);
        }
    }

    #[test]
    fn walk_traces_every_cube_edge() {
        let mut seen = [false; 12];
        for i in 0..EDGE_WALK_LEN {
            let a = EDGE_WALK[i];
            let b = EDGE_WALK[(i + 1) % EDGE_WALK_LEN];
            let edge = cube_edge(a, b).expect("walk segment is not a cube edge");
            seen[edge] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn lerp_table_is_valid() {
        assert!(LerpTable::new(LERP_TABLE).is_ok());
    }

    #[test]
    fn builders_succeed() {
        assert!(cube_tracer().is_ok());
        assert!(reference_waveform().is_ok());
        assert!(build_source().is_ok());
    }

    #[test]
    fn static_scenario() {
        let mut wave = reference_waveform().unwrap();
        let first = wave.next_sample();
        assert_eq!((first.x, first.y), (73, 255));
    }

    #[test]
    fn tick_rate_matches_feature() {
        if cfg!(feature = "tick-500hz") {
            assert_eq!(TICK_RATE_HZ, 500);
        } else {
            assert_eq!(TICK_RATE_HZ, 750);
        }
    }
}
