// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::math::Vec3;
use crate::tolerance::BARYCENTRIC_EPSILON;

/// Signed horizontal-plane area of triangle `abc` (twice the geometric area).
///
/// Also reads as the side of line `ab` that `c` falls on: positive when the
/// vertices run clockwise viewed from above (`x` right, `z` up the page).
pub fn tri_area_2d(a: &Vec3, b: &Vec3, c: &Vec3) -> f32 {
    let abx = b.x() - a.x();
    let abz = b.z() - a.z();
    let acx = c.x() - a.x();
    let acz = c.z() - a.z();
    acx * abz - abx * acz
}

/// Triangle given by three explicit vertices.
///
/// No winding is enforced, but the barycentric sign tests in
/// [`Triangle::closest_point`] and [`Triangle::closest_height`] assume the
/// vertices are consistently ordered across a mesh.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    /// Vertex A.
    pub a: Vec3,
    /// Vertex B.
    pub b: Vec3,
    /// Vertex C.
    pub c: Vec3,
}

impl Triangle {
    /// Creates a triangle from its vertices.
    pub const fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { a, b, c }
    }

    /// Signed horizontal-plane area (see [`tri_area_2d`]).
    pub fn signed_area_2d(&self) -> f32 {
        tri_area_2d(&self.a, &self.b, &self.c)
    }

    /// Closest point on the triangle (boundary or interior) to `p`.
    ///
    /// Classifies `p` into one of the seven Voronoi regions, testing vertex A,
    /// vertex B, edge AB, vertex C, edge AC, edge BC, and finally the face, and
    /// returns at the first match. The order fixes which answer wins on
    /// boundaries between regions.
    pub fn closest_point(&self, p: &Vec3) -> Vec3 {
        let Self { a, b, c } = self;

        // Vertex region outside A.
        let ab = b.sub(a);
        let ac = c.sub(a);
        let ap = p.sub(a);
        let d1 = ab.dot(&ap);
        let d2 = ac.dot(&ap);
        if d1 <= 0.0 && d2 <= 0.0 {
            return *a;
        }

        // Vertex region outside B.
        let bp = p.sub(b);
        let d3 = ab.dot(&bp);
        let d4 = ac.dot(&bp);
        if d3 >= 0.0 && d4 <= d3 {
            return *b;
        }

        // Edge region AB.
        let vc = d1 * d4 - d3 * d2;
        if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
            let v = d1 / (d1 - d3);
            return a.mad(&ab, v);
        }

        // Vertex region outside C.
        let cp = p.sub(c);
        let d5 = ab.dot(&cp);
        let d6 = ac.dot(&cp);
        if d6 >= 0.0 && d5 <= d6 {
            return *c;
        }

        // Edge region AC.
        let vb = d5 * d2 - d1 * d6;
        if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
            let w = d2 / (d2 - d6);
            return a.mad(&ac, w);
        }

        // Edge region BC.
        let va = d3 * d6 - d5 * d4;
        if va <= 0.0 && (d4 - d3) >= 0.0 && (d5 - d6) >= 0.0 {
            let w = (d4 - d3) / ((d4 - d3) + (d5 - d6));
            return b.mad(&c.sub(b), w);
        }

        // Face region.
        let denom = 1.0 / (va + vb + vc);
        let v = vb * denom;
        let w = vc * denom;
        a.mad(&ab, v).mad(&ac, w)
    }

    /// Height of the triangle's plane under `p`, if `p` projects into the
    /// triangle on the horizontal plane.
    ///
    /// Uses [`BARYCENTRIC_EPSILON`] as slack so points on a shared edge are
    /// answered by both neighbours. A triangle with zero horizontal area
    /// divides by zero and yields an unspecified result.
    pub fn closest_height(&self, p: &Vec3) -> Option<f32> {
        self.closest_height_with(p, BARYCENTRIC_EPSILON)
    }

    /// [`Triangle::closest_height`] with an explicit barycentric slack.
    pub fn closest_height_with(&self, p: &Vec3, eps: f32) -> Option<f32> {
        let v0 = self.c.sub(&self.a);
        let v1 = self.b.sub(&self.a);
        let v2 = p.sub(&self.a);

        let dot00 = v0.dot_2d(&v0);
        let dot01 = v0.dot_2d(&v1);
        let dot02 = v0.dot_2d(&v2);
        let dot11 = v1.dot_2d(&v1);
        let dot12 = v1.dot_2d(&v2);

        let inv_denom = 1.0 / (dot00 * dot11 - dot01 * dot01);
        let u = (dot11 * dot02 - dot01 * dot12) * inv_denom;
        let v = (dot00 * dot12 - dot01 * dot02) * inv_denom;

        if u >= -eps && v >= -eps && (u + v) <= 1.0 + eps {
            Some(self.a.y() + v0.y() * u + v1.y() * v)
        } else {
            None
        }
    }
}
