// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Geometry
//!
//! Object-space primitives for the wireframe tracer.
//!
//! ## Modules
//!
//! - [`point`] - 3D object-space points and 2D device-space points.
//! - [`rotation`] - Cumulative two-axis rotation applied in place.
//! - [`projection`] - Translate-and-scale map from object space to device space.
//! - [`model`] - Wireframe vertices plus the closed edge walk the pen follows.

pub mod model;
pub mod point;
pub mod projection;
pub mod rotation;

pub use model::WireframeModel;
pub use point::{Point2, Point3};
pub use projection::Projection;
pub use rotation::{rotate, Rotation};
