// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scalar helpers and the [`Vec3`] value type.
//!
//! The scalar helpers are generic so the same `min`/`max`/`clamp` serve
//! `f32` coordinates and the `u16` quantized bounds alike.

use core::ops::{Mul, Neg};

mod vec3;

pub use vec3::Vec3;

/// Returns the smaller of two values (`b` on ties).
#[inline]
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

/// Returns the larger of two values (`b` on ties).
#[inline]
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

/// Clamps `v` to `[mn, mx]`.
///
/// The range is not validated; with `mn > mx` the lower bound wins for values
/// below it and the upper bound for everything else.
#[inline]
pub fn clamp<T: PartialOrd>(v: T, mn: T, mx: T) -> T {
    if v < mn {
        mn
    } else if v > mx {
        mx
    } else {
        v
    }
}

/// Absolute value for any signed type whose `Default` is zero.
#[inline]
pub fn abs<T>(a: T) -> T
where
    T: PartialOrd + Neg<Output = T> + Default,
{
    if a < T::default() {
        -a
    } else {
        a
    }
}

/// Returns `a * a`.
#[inline]
pub fn sqr<T>(a: T) -> T
where
    T: Mul<Output = T> + Copy,
{
    a * a
}

/// Swaps two values in place.
#[inline]
pub fn swap<T>(a: &mut T, b: &mut T) {
    core::mem::swap(a, b);
}

/// Next power of two at or above `v`.
///
/// Zero and values above `2^31` wrap to zero.
pub fn next_pow2(v: u32) -> u32 {
    if v == 0 {
        return 0;
    }
    v.checked_next_power_of_two().unwrap_or(0)
}

/// Integer base-2 logarithm, with `ilog2(0) == 0`.
pub fn ilog2(v: u32) -> u32 {
    (v | 1).ilog2()
}

/// Rounds `x` up to the next multiple of four.
pub fn align4(x: i32) -> i32 {
    (x + 3) & !3
}
