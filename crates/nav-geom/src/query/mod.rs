// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Horizontal-plane queries over segments and polygons.
//!
//! Every routine here projects onto `(x, z)` and ignores height. Polygon
//! routines expect at least three vertices; this is not checked (use
//! [`crate::VertexSlice::polygon`] upstream when the input is untrusted).

mod point;
mod polygon;
mod segment;

pub use point::{distance_pt_poly_edges_sqr, distance_pt_seg_sqr_2d, point_in_polygon};
pub use polygon::{
    overlap_poly_poly_2d, overlap_poly_poly_2d_with, overlap_range, poly_center, project_poly,
    random_point_in_convex_poly,
};
pub use segment::{
    intersect_seg_seg_2d, intersect_seg_seg_2d_with, intersect_segment_poly_2d,
    intersect_segment_poly_2d_with, SegSegHit, SegmentPolyHit,
};
