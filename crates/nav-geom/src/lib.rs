// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Geometry kernel for navigation surfaces.

This crate provides:
- A `Vec3` value type plus scalar helpers (`math`).
- Zero-copy views over flat vertex and index buffers (`buffer`).
- Float and quantized bounding boxes, and triangles (`types`).
- Segment clipping, point classification, and polygon predicates (`query`).

Design notes:
- The `y` axis is vertical. Every `*_2d` routine works on the horizontal
  `(x, z)` plane and ignores height.
- Routines are pure and reentrant. Nothing is cached between calls; the only
  shared state is the read-only tolerance table in `tolerance`.
- Degenerate geometry (zero-length vectors, zero-area triangles, non-convex
  polygons) is a caller contract. Predicates report `None`/`false` where the
  arithmetic has a defined “no result”; other routines return whatever the
  float math yields.
- Float32 throughout.
"]

/// Errors raised when wrapping caller buffers in typed views.
pub mod error;
/// Vector algebra and scalar helpers.
pub mod math;
/// Typed views over flat vertex and index buffers.
pub mod buffer;
/// Segment, point, and polygon queries on the horizontal plane.
pub mod query;
/// Numeric tolerances shared by the predicates.
pub mod tolerance;
/// Foundational geometric types.
pub mod types;

pub use buffer::{IndexedPolygon, VertexSlice};
pub use error::GeomError;
pub use math::Vec3;
pub use tolerance::Tolerances;
pub use types::aabb::Aabb;
pub use types::quant::QuantAabb;
pub use types::triangle::{tri_area_2d, Triangle};
