// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use bytemuck::{Pod, Zeroable};

use crate::tolerance::COLOCATION_EPSILON_SQ;

/// 3D vector used for points, directions, and polygon vertices.
///
/// * `y` is the vertical (height) axis. Methods suffixed `_2d` project onto
///   the horizontal `(x, z)` plane and ignore `y`.
/// * The layout is exactly three packed `f32`s, so a flat `[x, y, z, x, y,
///   z, ...]` buffer can be viewed as `&[Vec3]` without copying (see
///   [`crate::VertexSlice::from_flat`]).
/// * Arithmetic returns new values; the in-place accumulators
///   ([`Vec3::min_assign`], [`Vec3::max_assign`]) exist for running bounds.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Vec3 {
    data: [f32; 3],
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// `+x`.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// `+y`, the up direction.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// `+z`.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Builds a vector from `(x, y, z)`.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
    }

    /// Components as `[x, y, z]`.
    pub fn to_array(self) -> [f32; 3] {
        self.data
    }

    /// X component.
    pub fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y (height) component.
    pub fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z component.
    pub fn z(&self) -> f32 {
        self.data[2]
    }

    fn zip_with(&self, other: &Self, f: impl Fn(f32, f32) -> f32) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(f(ax, bx), f(ay, by), f(az, bz))
    }

    /// Overwrites all three components.
    pub fn set(&mut self, x: f32, y: f32, z: f32) {
        self.data = [x, y, z];
    }

    /// Component-wise sum.
    pub fn add(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a + b)
    }

    /// Component-wise difference `self - other`.
    pub fn sub(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a - b)
    }

    /// Multiplies every component by `s`.
    pub fn scale(&self, s: f32) -> Self {
        Self {
            data: self.data.map(|c| c * s),
        }
    }

    /// Negates every component.
    pub fn neg(&self) -> Self {
        self.scale(-1.0)
    }

    /// Scaled addition: `self + other * s`.
    pub fn mad(&self, other: &Self, s: f32) -> Self {
        self.zip_with(other, |a, b| a + b * s)
    }

    /// Linear interpolation `self + (other - self) * t`.
    ///
    /// `t` is not clamped; values outside `[0, 1]` extrapolate along the line.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        self.zip_with(other, |a, b| a + (b - a) * t)
    }

    /// Lowers each component of `self` to the matching component of `v`.
    pub fn min_assign(&mut self, v: &Self) {
        for (dst, src) in self.data.iter_mut().zip(v.data) {
            *dst = super::min(*dst, src);
        }
    }

    /// Raises each component of `self` to the matching component of `v`.
    pub fn max_assign(&mut self, v: &Self) {
        for (dst, src) in self.data.iter_mut().zip(v.data) {
            *dst = super::max(*dst, src);
        }
    }

    /// Dot product.
    pub fn dot(&self, other: &Self) -> f32 {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        ax * bx + ay * by + az * bz
    }

    /// Right-handed cross product `self x other`.
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Euclidean length.
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Squared length; avoids the square root for comparisons.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Self) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Squared Euclidean distance to another point.
    pub fn distance_squared(&self, other: &Self) -> f32 {
        other.sub(self).length_squared()
    }

    /// Distance to another point on the horizontal plane.
    pub fn distance_2d(&self, other: &Self) -> f32 {
        self.distance_2d_squared(other).sqrt()
    }

    /// Squared distance to another point on the horizontal plane.
    pub fn distance_2d_squared(&self, other: &Self) -> f32 {
        let dx = other.x() - self.x();
        let dz = other.z() - self.z();
        dx * dx + dz * dz
    }

    /// Dot product on the horizontal plane.
    pub fn dot_2d(&self, other: &Self) -> f32 {
        self.x() * other.x() + self.z() * other.z()
    }

    /// Horizontal perp product `self.z * other.x - self.x * other.z`.
    ///
    /// Positive when `other` lies clockwise of `self` viewed from above with
    /// `x` right and `z` up the page.
    pub fn perp_2d(&self, other: &Self) -> f32 {
        self.z() * other.x() - self.x() * other.z()
    }

    /// Unit vector in the same direction.
    ///
    /// No degeneracy guard: a zero vector yields NaN components. Use
    /// [`Vec3::try_normalize`] when the input may be degenerate.
    pub fn normalize(&self) -> Self {
        self.scale(1.0 / self.length())
    }

    /// Normalizes the vector in place. Same contract as [`Vec3::normalize`].
    pub fn normalize_in_place(&mut self) {
        *self = self.normalize();
    }

    /// Normalizes the vector, or returns `None` when its length is zero or
    /// not finite.
    pub fn try_normalize(&self) -> Option<Self> {
        let len = self.length();
        (len > 0.0 && len.is_finite()).then(|| self.scale(1.0 / len))
    }

    /// Loose coincidence test: squared distance below
    /// [`COLOCATION_EPSILON_SQ`].
    ///
    /// Upstream mesh generation drifts by fractions of a voxel, so exact
    /// equality is the wrong question for shared vertices.
    pub fn colocated(&self, other: &Self) -> bool {
        self.colocated_within(other, COLOCATION_EPSILON_SQ)
    }

    /// Coincidence test against an explicit squared distance threshold.
    pub fn colocated_within(&self, other: &Self, threshold_sq: f32) -> bool {
        self.distance_squared(other) < threshold_sq
    }

    /// `true` when every component is finite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|c| c.is_finite())
    }

    /// `true` when `x` and `z` are finite; `y` is not inspected.
    pub fn is_finite_2d(&self) -> bool {
        self.x().is_finite() && self.z().is_finite()
    }
}

/// Reads `[x, y, z]` as a vector.
///
/// ```
/// use nav_geom::Vec3;
/// let up = Vec3::from([0.0, 1.0, 0.0]);
/// assert_eq!(up, Vec3::UNIT_Y);
/// ```
impl From<[f32; 3]> for Vec3 {
    fn from(value: [f32; 3]) -> Self {
        Self { data: value }
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(value: Vec3) -> Self {
        value.data
    }
}

const _: () = assert!(std::mem::size_of::<Vec3>() == 12);

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn lerp_extrapolates_outside_unit_interval() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(2.0, 4.0, -2.0);
        assert_eq!(a.lerp(&b, 0.5).to_array(), [1.0, 2.0, -1.0]);
        assert_eq!(a.lerp(&b, 2.0).to_array(), [4.0, 8.0, -4.0]);
    }

    #[test]
    fn mad_adds_scaled_vector() {
        let v = Vec3::new(1.0, 1.0, 1.0).mad(&Vec3::new(1.0, -2.0, 0.5), 2.0);
        assert_eq!(v.to_array(), [3.0, -3.0, 2.0]);
    }

    #[test]
    fn running_bounds_accumulate_componentwise() {
        let mut mn = Vec3::new(1.0, 1.0, 1.0);
        let mut mx = mn;
        for p in [Vec3::new(-1.0, 3.0, 0.5), Vec3::new(2.0, 0.0, 4.0)] {
            mn.min_assign(&p);
            mx.max_assign(&p);
        }
        assert_eq!(mn.to_array(), [-1.0, 0.0, 0.5]);
        assert_eq!(mx.to_array(), [2.0, 3.0, 4.0]);
    }

    #[test]
    fn horizontal_products_ignore_height() {
        let u = Vec3::new(1.0, 100.0, 0.0);
        let v = Vec3::new(0.0, -50.0, 1.0);
        assert_eq!(u.dot_2d(&v), 0.0);
        assert_eq!(u.perp_2d(&v), -1.0);
        assert_eq!(v.perp_2d(&u), 1.0);
        assert_eq!(u.distance_2d_squared(&v), 2.0);
    }

    #[test]
    fn normalize_zero_is_nan_but_try_normalize_is_none() {
        assert!(!Vec3::ZERO.normalize().is_finite());
        assert_eq!(Vec3::ZERO.try_normalize(), None);
        let mut v = Vec3::new(3.0, 0.0, 4.0);
        v.normalize_in_place();
        assert!((v.length() - 1.0).abs() < 1e-6);
        assert_eq!(Vec3::new(0.0, 2.0, 0.0).try_normalize(), Some(Vec3::UNIT_Y));
    }

    #[test]
    fn set_overwrites_components() {
        let mut v = Vec3::ZERO;
        v.set(1.0, 2.0, 3.0);
        assert_eq!(<[f32; 3]>::from(v), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn finiteness_checks() {
        assert!(Vec3::new(1.0, 2.0, 3.0).is_finite());
        assert!(!Vec3::new(1.0, f32::NAN, 3.0).is_finite());
        assert!(Vec3::new(1.0, f32::NAN, 3.0).is_finite_2d());
        assert!(!Vec3::new(f32::INFINITY, 0.0, 3.0).is_finite_2d());
    }
}
