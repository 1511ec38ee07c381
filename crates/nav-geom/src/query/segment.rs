// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Segment clipping against convex polygons and segment/segment intersection.

use tracing::trace;

use crate::buffer::VertexSlice;
use crate::math::Vec3;
use crate::tolerance::Tolerances;

/// Clipped parametric interval of a segment inside a convex polygon.
///
/// Parameters are fractions of the segment `p0 -> p1`. The edge fields name
/// the polygon edge (by its start vertex) that produced the bound, or `None`
/// when the segment's own endpoint is the binding constraint on that side.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentPolyHit {
    /// Entry parameter.
    pub tmin: f32,
    /// Exit parameter.
    pub tmax: f32,
    /// Edge the segment enters through.
    pub seg_min: Option<usize>,
    /// Edge the segment leaves through.
    pub seg_max: Option<usize>,
}

/// Clips segment `p0 -> p1` against a convex polygon on the horizontal plane.
///
/// The polygon interior is the side where `perp_2d(edge, p - edge_start)` is
/// non-negative, i.e. the vertices run clockwise viewed from above with `x`
/// right and `z` up the page. Returns `None` when the clipped interval is
/// empty or the segment runs parallel to an edge on its outside.
pub fn intersect_segment_poly_2d(
    p0: &Vec3,
    p1: &Vec3,
    poly: VertexSlice<'_>,
) -> Option<SegmentPolyHit> {
    intersect_segment_poly_2d_with(p0, p1, poly, &Tolerances::DEFAULT)
}

/// [`intersect_segment_poly_2d`] with explicit tolerances.
pub fn intersect_segment_poly_2d_with(
    p0: &Vec3,
    p1: &Vec3,
    poly: VertexSlice<'_>,
    tol: &Tolerances,
) -> Option<SegmentPolyHit> {
    let mut hit = SegmentPolyHit {
        tmin: 0.0,
        tmax: 1.0,
        seg_min: None,
        seg_max: None,
    };

    let dir = p1.sub(p0);

    for (j, vj, vi) in poly.edge_segments() {
        let edge = vi.sub(&vj);
        let diff = p0.sub(&vj);
        let n = edge.perp_2d(&diff);
        let d = dir.perp_2d(&edge);
        if d.abs() < tol.segment_poly_parallel {
            if n < 0.0 {
                trace!(edge = j, "segment parallel to and outside polygon edge");
                return None;
            }
            continue;
        }
        let t = n / d;
        if d < 0.0 {
            // entering across this edge
            if t > hit.tmin {
                hit.tmin = t;
                hit.seg_min = Some(j);
                if hit.tmin > hit.tmax {
                    trace!(edge = j, tmin = hit.tmin, tmax = hit.tmax, "segment enters after leaving");
                    return None;
                }
            }
        } else if t < hit.tmax {
            // leaving across this edge
            hit.tmax = t;
            hit.seg_max = Some(j);
            if hit.tmax < hit.tmin {
                trace!(edge = j, tmin = hit.tmin, tmax = hit.tmax, "segment leaves before entering");
                return None;
            }
        }
    }

    Some(hit)
}

/// Line parameters where two segments cross on the horizontal plane.
///
/// `s` is the fraction along the first segment and `t` along the second.
/// Neither is clamped: the crossing may lie on the infinite extensions.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegSegHit {
    /// Parameter along `ap -> aq`.
    pub s: f32,
    /// Parameter along `bp -> bq`.
    pub t: f32,
}

impl SegSegHit {
    /// `true` when the crossing lies within both segments (`s, t ∈ [0, 1]`).
    pub fn within_extents(&self) -> bool {
        (0.0..=1.0).contains(&self.s) && (0.0..=1.0).contains(&self.t)
    }
}

/// Intersects the lines through `ap -> aq` and `bp -> bq` on the horizontal plane.
///
/// Returns `None` when the segments are parallel or degenerate.
pub fn intersect_seg_seg_2d(ap: &Vec3, aq: &Vec3, bp: &Vec3, bq: &Vec3) -> Option<SegSegHit> {
    intersect_seg_seg_2d_with(ap, aq, bp, bq, &Tolerances::DEFAULT)
}

/// [`intersect_seg_seg_2d`] with explicit tolerances.
pub fn intersect_seg_seg_2d_with(
    ap: &Vec3,
    aq: &Vec3,
    bp: &Vec3,
    bq: &Vec3,
    tol: &Tolerances,
) -> Option<SegSegHit> {
    let u = aq.sub(ap);
    let v = bq.sub(bp);
    let w = ap.sub(bp);
    let d = u.perp_2d(&v);
    if d.abs() < tol.segment_pair_parallel {
        trace!(det = d, "segments parallel or degenerate");
        return None;
    }
    Some(SegSegHit {
        s: v.perp_2d(&w) / d,
        t: u.perp_2d(&w) / d,
    })
}
