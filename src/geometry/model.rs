// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Wireframe model: a fixed vertex set plus a closed edge walk.
//!
//! The walk is the pen path. Entry `i` and entry `(i + 1) mod E` are the endpoints of segment `i`,
//! so the last entry connects back to the first. Consecutive entries must differ, which rules out
//! zero-length segments.

use crate::error::ConfigError;
use crate::geometry::{Point3, Rotation};

pub struct WireframeModel<const V: usize, const E: usize> {
    vertices: [Point3; V],
    walk: [u8; E],
}

impl<const V: usize, const E: usize> WireframeModel<V, E> {
    /// Validate and take ownership of `vertices` and `walk`.
    pub fn new(vertices: [Point3; V], walk: [u8; E]) -> Result<Self, ConfigError> {
        if E < 2 {
            return Err(ConfigError::WalkTooShort);
        }

        for (position, &vertex) in walk.iter().enumerate() {
            if usize::from(vertex) >= V {
                return Err(ConfigError::VertexOutOfRange { position, vertex });
            }
            if vertex == walk[(position + 1) % E] {
                return Err(ConfigError::DegenerateSegment { position });
            }
        }

        Ok(Self { vertices, walk })
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        V
    }

    #[inline]
    pub fn edge_walk(&self) -> &[u8; E] {
        &self.walk
    }

    #[inline]
    pub fn vertices(&self) -> &[Point3; V] {
        &self.vertices
    }

    #[inline]
    pub fn vertices_mut(&mut self) -> &mut [Point3; V] {
        &mut self.vertices
    }

    /// Current position of the vertex at walk entry `position mod E`.
    #[inline]
    pub fn walk_vertex(&self, position: usize) -> Point3 {
        self.vertices[usize::from(self.walk[position % E])]
    }

    /// Rotate every vertex in place. Rotations accumulate.
    pub fn rotate(&mut self, rotation: &Rotation) {
        rotation.apply_all(&mut self.vertices);
    }
}
