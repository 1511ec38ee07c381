// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::buffer::VertexSlice;
use crate::error::GeomError;
use crate::math::Vec3;

/// Float axis-aligned box, used for tile and polygon bounds.
///
/// `min <= max` per axis is a caller contract; debug builds check it in
/// [`Aabb::new`].
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    min: Vec3,
    max: Vec3,
}

impl Aabb {
    /// Box spanning `min..=max`.
    #[must_use]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        debug_assert!(
            min.x() <= max.x() && min.y() <= max.y() && min.z() <= max.z(),
            "invalid AABB: min > max"
        );
        Self { min, max }
    }

    /// Lower corner.
    #[must_use]
    pub fn min(&self) -> Vec3 {
        self.min
    }

    /// Upper corner.
    #[must_use]
    pub fn max(&self) -> Vec3 {
        self.max
    }

    /// Box around `center` reaching `hx`, `hy`, `hz` along each axis.
    #[must_use]
    pub fn from_center_half_extents(center: Vec3, hx: f32, hy: f32, hz: f32) -> Self {
        let reach = Vec3::new(hx, hy, hz);
        Self::new(center.sub(&reach), center.add(&reach))
    }

    /// Inclusive overlap: boxes that only touch still count.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        super::overlaps_inclusive(
            &self.min.to_array(),
            &self.max.to_array(),
            &other.min.to_array(),
            &other.max.to_array(),
        )
    }

    /// Returns `true` if `p` lies inside or on the box.
    #[must_use]
    pub fn contains_point(&self, p: &Vec3) -> bool {
        let a = p.to_array();
        super::overlaps_inclusive(&a, &a, &self.min.to_array(), &self.max.to_array())
    }

    /// Smallest box enclosing both.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut min = self.min;
        let mut max = self.max;
        min.min_assign(&other.min);
        max.max_assign(&other.max);
        Self { min, max }
    }

    /// Grows the box by `margin` on every side.
    #[must_use]
    pub fn inflate(&self, margin: f32) -> Self {
        let pad = Vec3::new(margin, margin, margin);
        Self {
            min: self.min.sub(&pad),
            max: self.max.add(&pad),
        }
    }

    /// Tight bounds of a point set.
    ///
    /// # Errors
    /// Returns [`GeomError::EmptyPointSet`] if `points` is empty.
    pub fn from_points(points: &[Vec3]) -> Result<Self, GeomError> {
        Self::from_vertices(VertexSlice::new(points))
    }

    /// Builds the minimal AABB that contains every vertex of `verts`.
    ///
    /// # Errors
    /// Returns [`GeomError::EmptyPointSet`] if `verts` is empty.
    pub fn from_vertices(verts: VertexSlice<'_>) -> Result<Self, GeomError> {
        let mut it = verts.iter();
        let first = it.next().ok_or(GeomError::EmptyPointSet)?;
        let mut min = first;
        let mut max = first;
        for p in it {
            min.min_assign(&p);
            max.max_assign(&p);
        }
        Ok(Self { min, max })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn from_points_is_tight() {
        let pts = [
            Vec3::new(1.0, -2.0, 0.0),
            Vec3::new(-3.0, 4.0, 2.0),
            Vec3::new(0.5, 0.0, -1.0),
        ];
        let b = Aabb::from_points(&pts).unwrap();
        assert_eq!(b.min().to_array(), [-3.0, -2.0, -1.0]);
        assert_eq!(b.max().to_array(), [1.0, 4.0, 2.0]);
        assert!(pts.iter().all(|p| b.contains_point(p)));
        assert_eq!(Aabb::from_points(&[]), Err(GeomError::EmptyPointSet));
    }

    #[test]
    fn union_and_inflate() {
        let a = Aabb::from_center_half_extents(Vec3::ZERO, 1.0, 1.0, 1.0);
        let b = Aabb::from_center_half_extents(Vec3::new(4.0, 0.0, 0.0), 1.0, 1.0, 1.0);
        let u = a.union(&b);
        assert_eq!(u.min().to_array(), [-1.0, -1.0, -1.0]);
        assert_eq!(u.max().to_array(), [5.0, 1.0, 1.0]);
        assert!(!a.overlaps(&b));
        assert!(a.inflate(1.0).overlaps(&b.inflate(1.0)));
    }
}
