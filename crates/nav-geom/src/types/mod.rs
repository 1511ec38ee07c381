// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core geometry types used by the query layer (bounds, triangles).
//!
//! Overlap semantics are inclusive on faces: boxes that only touch are
//! reported as overlapping, in both the float and quantized representations.

#[doc = "Axis-aligned bounding boxes over float coordinates."]
pub mod aabb;
#[doc = "Axis-aligned bounding boxes over quantized `u16` coordinates."]
pub mod quant;
#[doc = "Triangles, closest points, and height sampling."]
pub mod triangle;

/// Inclusive per-axis overlap shared by the float and quantized boxes.
pub(crate) fn overlaps_inclusive<T: PartialOrd>(
    a_min: &[T; 3],
    a_max: &[T; 3],
    b_min: &[T; 3],
    b_max: &[T; 3],
) -> bool {
    !(a_min[0] > b_max[0]
        || a_max[0] < b_min[0]
        || a_min[1] > b_max[1]
        || a_max[1] < b_min[1]
        || a_min[2] > b_max[2]
        || a_max[2] < b_min[2])
}
