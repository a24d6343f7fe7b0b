// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Wireframe tracer.
//!
//! Walks the model's edge walk one segment at a time, emitting `M` interpolated samples per
//! segment. After the last segment of the walk the whole model is rotated by a fixed increment and
//! the walk starts over, so the shape turns a little every `E * M` ticks.
//!
//! State is `(edge_index, lerp_index)` plus the projected endpoints `v1`, `v2` of the current
//! segment. Each tick:
//!
//! 1. emit `lerp(v1, v2, lerp_table[lerp_index])`
//! 2. advance `lerp_index`; on wrap advance `edge_index`
//! 3. on an edge change reuse `v2` as the new `v1` and project only the new far endpoint, or, when
//!    the walk wraps, rotate and reproject both endpoints of segment 0
//!
//! Every tick does a bounded amount of work: at most one rotation of `V` vertices and two
//! projections.
//!
//! ```ignore
//! let mut tracer = WireframeTracer::new(model, lerp, projection, &priming, increment, quantizer);
//!
//! // From the tick handler:
//! let sample = tracer.next_sample();
//! ```

use crate::engine::{LerpTable, Quantizer, Sample, SampleSource};
use crate::geometry::{Point2, Projection, Rotation, WireframeModel};

pub struct WireframeTracer<const V: usize, const E: usize, const M: usize> {
    model: WireframeModel<V, E>,
    lerp: LerpTable<M>,
    projection: Projection,
    increment: Rotation,
    quantizer: Quantizer,

    edge_index: usize,
    lerp_index: usize,

    /// Projected start of the current segment
    v1: Point2<f32>,
    /// Projected end of the current segment
    v2: Point2<f32>,

    /// Completed walks, i.e. increment rotations applied so far
    walks: u32,
}

impl<const V: usize, const E: usize, const M: usize> WireframeTracer<V, E, M> {
    /// Build a tracer. `priming` is applied to the model once, before the endpoints of segment 0
    /// are projected; `increment` is applied after every full walk.
    pub fn new(
        mut model: WireframeModel<V, E>,
        lerp: LerpTable<M>,
        projection: Projection,
        priming: &Rotation,
        increment: Rotation,
        quantizer: Quantizer,
    ) -> Self {
        model.rotate(priming);

        let v1 = projection.project(model.walk_vertex(0));
        let v2 = projection.project(model.walk_vertex(1));

        Self {
            model,
            lerp,
            projection,
            increment,
            quantizer,
            edge_index: 0,
            lerp_index: 0,
            v1,
            v2,
            walks: 0,
        }
    }

    /// Produce the next device-space point and advance the state machine.
    pub fn next_point(&mut self) -> Point2<f32> {
        let point = self.v1.lerp(self.v2, self.lerp.get(self.lerp_index));

        self.lerp_index = (self.lerp_index + 1) % M;
        if self.lerp_index == 0 {
            self.advance_edge();
        }

        point
    }

    fn advance_edge(&mut self) {
        self.edge_index = (self.edge_index + 1) % E;

        if self.edge_index == 0 {
            self.model.rotate(&self.increment);
            self.walks = self.walks.wrapping_add(1);

            self.v1 = self.projection.project(self.model.walk_vertex(0));
            self.v2 = self.projection.project(self.model.walk_vertex(1));
        } else {
            self.v1 = self.v2;
            self.v2 = self
                .projection
                .project(self.model.walk_vertex(self.edge_index + 1));
        }
    }

    /// Current `(edge_index, lerp_index)`.
    #[inline]
    pub fn position(&self) -> (usize, usize) {
        (self.edge_index, self.lerp_index)
    }

    /// Projected `(v1, v2)` of the current segment.
    #[inline]
    pub fn endpoints(&self) -> (Point2<f32>, Point2<f32>) {
        (self.v1, self.v2)
    }

    /// Number of increment rotations applied since construction (wraps at `u32::MAX`).
    #[inline]
    pub fn walks(&self) -> u32 {
        self.walks
    }

    #[inline]
    pub fn model(&self) -> &WireframeModel<V, E> {
        &self.model
    }

    /// Ticks between two increment rotations.
    #[inline]
    pub const fn period(&self) -> usize {
        E * M
    }
}

impl<const V: usize, const E: usize, const M: usize> SampleSource for WireframeTracer<V, E, M> {
    #[inline]
    fn next_sample(&mut self) -> Sample {
        let point = self.next_point();
        self.quantizer.quantize_point(point)
    }
}
