// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use tracing::trace;

use crate::buffer::{IndexedPolygon, VertexSlice};
use crate::math::Vec3;
use crate::tolerance::Tolerances;
use crate::types::triangle::tri_area_2d;

/// Arithmetic mean of a polygon's vertices, each axis averaged independently.
///
/// An empty polygon yields NaN components.
#[allow(clippy::cast_precision_loss)] // vertex counts are u16-indexed, exact in f32
pub fn poly_center(poly: &IndexedPolygon<'_>) -> Vec3 {
    let sum = poly.iter().fold(Vec3::ZERO, |acc, v| acc.add(&v));
    sum.scale(1.0 / poly.len() as f32)
}

/// Projects every vertex onto `axis` (horizontal dot product) and returns the
/// `(min, max)` interval.
///
/// An empty polygon yields `(inf, -inf)`.
pub fn project_poly(axis: &Vec3, poly: VertexSlice<'_>) -> (f32, f32) {
    poly.iter()
        .map(|v| axis.dot_2d(&v))
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(mn, mx), d| {
            (mn.min(d), mx.max(d))
        })
}

/// `true` when `[amin, amax]` and `[bmin, bmax]` overlap by more than `eps`.
///
/// Intervals that merely touch (or overlap by less than `eps`) are treated as
/// separated.
pub fn overlap_range(amin: f32, amax: f32, bmin: f32, bmax: f32, eps: f32) -> bool {
    !((amin + eps) > bmax || (amax - eps) < bmin)
}

/// Does some edge normal of `edges_of` separate `a` from `b`?
fn has_separating_edge(
    edges_of: VertexSlice<'_>,
    a: VertexSlice<'_>,
    b: VertexSlice<'_>,
    eps: f32,
) -> bool {
    edges_of.edge_segments().any(|(j, va, vb)| {
        let n = Vec3::new(vb.z() - va.z(), 0.0, -(vb.x() - va.x()));
        let (amin, amax) = project_poly(&n, a);
        let (bmin, bmax) = project_poly(&n, b);
        let separated = !overlap_range(amin, amax, bmin, bmax, eps);
        if separated {
            trace!(edge = j, amin, amax, bmin, bmax, "separating axis found");
        }
        separated
    })
}

/// Separating-axis overlap test for two convex polygons on the horizontal plane.
///
/// Tests the edge normals of `a`, then of `b`, and stops at the first
/// separating axis. Both polygons must be convex; the result for non-convex
/// input is unspecified. Contact along a shared edge does not count as overlap.
pub fn overlap_poly_poly_2d(a: VertexSlice<'_>, b: VertexSlice<'_>) -> bool {
    overlap_poly_poly_2d_with(a, b, &Tolerances::DEFAULT)
}

/// [`overlap_poly_poly_2d`] with explicit tolerances.
pub fn overlap_poly_poly_2d_with(a: VertexSlice<'_>, b: VertexSlice<'_>, tol: &Tolerances) -> bool {
    !(has_separating_edge(a, a, b, tol.sat) || has_separating_edge(b, a, b, tol.sat))
}

/// Area-weighted uniform sample inside a convex polygon.
///
/// `s` picks the fan triangle (weighted by horizontal area) and `t` the
/// position within it; both should be uniform in `[0, 1)`. Fan triangles are
/// rooted at vertex 0 and use the clockwise (positive-area) winding of
/// [`tri_area_2d`].
///
/// # Panics
/// Panics if `poly` is empty.
pub fn random_point_in_convex_poly(poly: VertexSlice<'_>, s: f32, t: f32) -> Vec3 {
    let n = poly.len();
    let pa = poly.vertex(0);
    let fan_area = |i: usize| tri_area_2d(&pa, &poly.vertex(i - 1), &poly.vertex(i));

    let area_sum: f32 = (2..n).map(|i| fan_area(i).max(0.001)).sum();
    let thr = s * area_sum;

    let mut acc = 0.0;
    let mut u = 1.0;
    let mut tri = n - 1;
    for i in 2..n {
        let dacc = fan_area(i);
        if thr >= acc && thr < acc + dacc {
            u = (thr - acc) / dacc;
            tri = i;
            break;
        }
        acc += dacc;
    }

    let v = t.sqrt();
    let wa = 1.0 - v;
    let wb = (1.0 - u) * v;
    let wc = u * v;
    let pb = poly.vertex(tri.saturating_sub(1));
    let pc = poly.vertex(tri);
    pa.scale(wa).mad(&pb, wb).mad(&pc, wc)
}
