// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs, clippy::expect_used, clippy::cast_precision_loss)]
//! Property tests for the kernel's algebraic and geometric invariants.

use proptest::prelude::*;

use nav_geom::query::{intersect_segment_poly_2d, point_in_polygon, poly_center};
use nav_geom::tolerance::COLOCATION_EPSILON;
use nav_geom::{Aabb, IndexedPolygon, QuantAabb, Triangle, Vec3, VertexSlice};

fn coord() -> impl Strategy<Value = f32> {
    -100.0_f32..100.0
}

fn vec3() -> impl Strategy<Value = Vec3> {
    (coord(), coord(), coord()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn aabb() -> impl Strategy<Value = Aabb> {
    (vec3(), 0.0_f32..50.0, 0.0_f32..50.0, 0.0_f32..50.0)
        .prop_map(|(c, hx, hy, hz)| Aabb::from_center_half_extents(c, hx, hy, hz))
}

fn quant_aabb() -> impl Strategy<Value = QuantAabb> {
    (any::<[u16; 3]>(), any::<[u16; 3]>()).prop_map(|(a, b)| {
        QuantAabb::new(
            [a[0].min(b[0]), a[1].min(b[1]), a[2].min(b[2])],
            [a[0].max(b[0]), a[1].max(b[1]), a[2].max(b[2])],
        )
    })
}

/// Regular polygon wound clockwise from above, as the segment clipper expects.
fn convex_polygon() -> impl Strategy<Value = Vec<Vec3>> {
    (3_usize..12, -50.0_f32..50.0, -50.0_f32..50.0, 0.5_f32..20.0, 0.0_f32..1.0)
        .prop_map(|(n, cx, cz, r, phase)| {
            (0..n)
                .map(|k| {
                    let a = -((k as f32 + phase) * std::f32::consts::TAU / n as f32);
                    Vec3::new(cx + r * a.cos(), 0.0, cz + r * a.sin())
                })
                .collect()
        })
}

/// Twice the 3D area of triangle `abc`.
fn area3(a: &Vec3, b: &Vec3, c: &Vec3) -> f32 {
    b.sub(a).cross(&c.sub(a)).length()
}

proptest! {
    #[test]
    fn normalize_yields_unit_length(v in vec3()) {
        prop_assume!(v.length() > 1e-3);
        let n = v.normalize();
        prop_assert!((n.length() - 1.0).abs() < 1e-5, "|n| = {}", n.length());
        prop_assert_eq!(v.try_normalize(), Some(n));
    }

    #[test]
    fn length_squared_matches_squared_length(v in vec3()) {
        let l = v.length();
        let l2 = v.length_squared();
        prop_assert!((l * l - l2).abs() <= l2 * 1e-6, "{} vs {}", l * l, l2);
    }

    #[test]
    fn colocation_reflexive_and_bounded(p in (-10.0_f32..10.0, -10.0_f32..10.0, -10.0_f32..10.0),
                                        off in 1e-3_f32..1.0) {
        let p = Vec3::new(p.0, p.1, p.2);
        prop_assert!(p.colocated(&p));
        let q = p.add(&Vec3::new(off, 0.0, 0.0));
        prop_assert!(off > COLOCATION_EPSILON);
        prop_assert!(!p.colocated(&q));
    }

    #[test]
    fn aabb_overlap_is_symmetric(a in aabb(), b in aabb()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        prop_assert!(a.overlaps(&a));
    }

    #[test]
    fn quant_overlap_is_symmetric(a in quant_aabb(), b in quant_aabb()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    #[test]
    fn aabb_face_contact_counts(a in aabb(), w in 0.0_f32..10.0) {
        let max = a.max();
        let b = Aabb::new(
            Vec3::new(max.x(), a.min().y(), a.min().z()),
            Vec3::new(max.x() + w, max.y(), max.z()),
        );
        prop_assert!(a.overlaps(&b));
        prop_assert!(b.overlaps(&a));
    }

    #[test]
    fn closest_point_is_on_triangle_and_nearest(p in vec3(), a in vec3(), b in vec3(), c in vec3()) {
        let area = area3(&a, &b, &c);
        prop_assume!(area > 100.0);
        let t = Triangle::new(a, b, c);
        let q = t.closest_point(&p);

        // Inside the hull: the three sub-triangles around q tile abc.
        let sum = area3(&q, &b, &c) + area3(&a, &q, &c) + area3(&a, &b, &q);
        prop_assert!((sum - area).abs() <= 1e-3 * area + 0.05, "sub-areas {} vs {}", sum, area);

        // No farther than any vertex, edge midpoint, or the centroid.
        let centroid = a.add(&b).add(&c).scale(1.0 / 3.0);
        let candidates = [a, b, c, a.lerp(&b, 0.5), b.lerp(&c, 0.5), a.lerp(&c, 0.5), centroid];
        let dq = p.distance(&q);
        for x in candidates {
            let dx = p.distance(&x);
            prop_assert!(dq <= dx + 1e-3 * (1.0 + dx), "closest {} farther than {}", dq, dx);
        }
    }

    #[test]
    fn centroid_of_convex_polygon_is_inside(verts in convex_polygon()) {
        let indices: Vec<u16> = (0..verts.len()).map(|i| u16::try_from(i).unwrap_or(u16::MAX)).collect();
        let pool = VertexSlice::new(&verts);
        let poly = IndexedPolygon::try_new(&indices, pool).expect("indices in range");
        prop_assert!(point_in_polygon(&poly_center(&poly), pool));
    }

    #[test]
    fn segment_from_centroid_exits_once(verts in convex_polygon(), dir in 0.0_f32..std::f32::consts::TAU) {
        let pool = VertexSlice::new(&verts);
        let indices: Vec<u16> = (0..verts.len()).map(|i| u16::try_from(i).unwrap_or(u16::MAX)).collect();
        let center = poly_center(&IndexedPolygon::new(&indices, pool));
        // Far enough to leave any generated polygon.
        let end = center.add(&Vec3::new(100.0 * dir.cos(), 0.0, 100.0 * dir.sin()));
        let hit = intersect_segment_poly_2d(&center, &end, pool).expect("starts inside");
        prop_assert_eq!(hit.tmin, 0.0);
        prop_assert_eq!(hit.seg_min, None);
        prop_assert!(hit.tmax > 0.0 && hit.tmax < 1.0);
        prop_assert!(hit.seg_max.is_some_and(|e| e < verts.len()));
    }
}
