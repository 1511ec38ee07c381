// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::buffer::VertexSlice;
use crate::math::Vec3;

/// Does the +x ray from `pt` cross edge `vj -> vi`?
///
/// Half-open in `z`: an edge counts when exactly one endpoint lies strictly
/// above `pt.z`, so a vertex on the ray is counted once.
#[inline]
fn ray_crosses(pt: &Vec3, vi: &Vec3, vj: &Vec3) -> bool {
    ((vi.z() > pt.z()) != (vj.z() > pt.z()))
        && (pt.x() < (vj.x() - vi.x()) * (pt.z() - vi.z()) / (vj.z() - vi.z()) + vi.x())
}

/// Parity (ray casting) point-in-polygon test on the horizontal plane.
///
/// Works for any simple polygon regardless of winding. Points exactly on the
/// boundary get whatever the half-open crossing rule gives them.
pub fn point_in_polygon(pt: &Vec3, poly: VertexSlice<'_>) -> bool {
    poly.edge_segments()
        .filter(|(_, vj, vi)| ray_crosses(pt, vi, vj))
        .count()
        % 2
        == 1
}

/// Squared horizontal distance from `pt` to segment `p -> q`, plus the
/// clamped parameter `t ∈ [0, 1]` of the closest point on the segment.
///
/// A zero-length segment yields `t = 0` and the distance to `p`.
pub fn distance_pt_seg_sqr_2d(pt: &Vec3, p: &Vec3, q: &Vec3) -> (f32, f32) {
    let pqx = q.x() - p.x();
    let pqz = q.z() - p.z();
    let dx = pt.x() - p.x();
    let dz = pt.z() - p.z();
    let d = pqx * pqx + pqz * pqz;
    let mut t = pqx * dx + pqz * dz;
    if d > 0.0 {
        t /= d;
    }
    let t = t.clamp(0.0, 1.0);
    let dx = p.x() + t * pqx - pt.x();
    let dz = p.z() + t * pqz - pt.z();
    (dx * dx + dz * dz, t)
}

/// Squared horizontal distance from `pt` to every polygon edge, fused with the
/// parity inside test.
///
/// Edge `k` runs from vertex `k` to vertex `k + 1` (wrapping); its squared
/// distance goes to `ed[k]` and its closest-point parameter to `et[k]`.
/// Returns `true` when `pt` is inside the polygon, exactly as
/// [`point_in_polygon`] would.
///
/// # Panics
/// Panics if `ed` or `et` is shorter than the polygon's vertex count.
pub fn distance_pt_poly_edges_sqr(
    pt: &Vec3,
    poly: VertexSlice<'_>,
    ed: &mut [f32],
    et: &mut [f32],
) -> bool {
    assert!(
        ed.len() >= poly.len() && et.len() >= poly.len(),
        "edge output buffers shorter than polygon ({} vertices)",
        poly.len()
    );
    let mut inside = false;
    for (j, vj, vi) in poly.edge_segments() {
        if ray_crosses(pt, &vi, &vj) {
            inside = !inside;
        }
        let (d, t) = distance_pt_seg_sqr_2d(pt, &vj, &vi);
        ed[j] = d;
        et[j] = t;
    }
    inside
}
