// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Numeric tolerances used by the predicates.
//!
//! The constants are the process-wide defaults. [`Tolerances`] bundles the
//! same values so a host can persist or tune them and call the `*_with`
//! variants of the predicates; the plain variants always use
//! [`Tolerances::DEFAULT`].

/// Distance below which two points are considered colocated.
pub const COLOCATION_EPSILON: f32 = 1.0 / 16384.0;

/// Squared colocation distance, compared against squared point distances.
pub const COLOCATION_EPSILON_SQ: f32 = COLOCATION_EPSILON * COLOCATION_EPSILON;

/// Slack on barycentric coordinates for height queries.
///
/// Points interpolated along a shared edge land a hair outside one of the two
/// adjacent triangles; this slack lets both of them answer.
pub const BARYCENTRIC_EPSILON: f32 = 1e-4;

/// Interval slack for the separating-axis overlap test.
pub const SAT_EPSILON: f32 = 1e-4;

/// Denominator magnitude below which a segment counts as parallel to a polygon edge.
pub const SEGMENT_POLY_PARALLEL_EPSILON: f32 = 1e-8;

/// Determinant magnitude below which two segments count as parallel.
pub const SEGMENT_PAIR_PARALLEL_EPSILON: f32 = 1e-6;

/// Bundle of every tolerance the kernel consults.
///
/// With the `serde` feature enabled, missing fields deserialize to their
/// default values so partial overrides are accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Tolerances {
    /// Squared colocation distance (see [`COLOCATION_EPSILON_SQ`]).
    pub colocation_sq: f32,
    /// Barycentric slack for height queries (see [`BARYCENTRIC_EPSILON`]).
    pub barycentric: f32,
    /// Separating-axis interval slack (see [`SAT_EPSILON`]).
    pub sat: f32,
    /// Segment/edge parallel threshold (see [`SEGMENT_POLY_PARALLEL_EPSILON`]).
    pub segment_poly_parallel: f32,
    /// Segment/segment parallel threshold (see [`SEGMENT_PAIR_PARALLEL_EPSILON`]).
    pub segment_pair_parallel: f32,
}

impl Tolerances {
    /// The compile-time defaults.
    pub const DEFAULT: Self = Self {
        colocation_sq: COLOCATION_EPSILON_SQ,
        barycentric: BARYCENTRIC_EPSILON,
        sat: SAT_EPSILON,
        segment_poly_parallel: SEGMENT_POLY_PARALLEL_EPSILON,
        segment_pair_parallel: SEGMENT_PAIR_PARALLEL_EPSILON,
    };
}

impl Default for Tolerances {
    fn default() -> Self {
        Self::DEFAULT
    }
}
