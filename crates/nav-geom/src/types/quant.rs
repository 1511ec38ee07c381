// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// Axis-aligned bounding box over quantized (fixed-point) `u16` coordinates.
///
/// Mesh layers store per-node bounds this way to keep tree nodes small. The
/// quantization grid is the caller's business; this type only compares.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuantAabb {
    min: [u16; 3],
    max: [u16; 3],
}

impl QuantAabb {
    /// Constructs a quantized box from its corners.
    #[must_use]
    pub fn new(min: [u16; 3], max: [u16; 3]) -> Self {
        debug_assert!(
            min[0] <= max[0] && min[1] <= max[1] && min[2] <= max[2],
            "invalid quantized AABB: min > max"
        );
        Self { min, max }
    }

    /// Returns the minimum corner.
    #[must_use]
    pub fn min(&self) -> [u16; 3] {
        self.min
    }

    /// Returns the maximum corner.
    #[must_use]
    pub fn max(&self) -> [u16; 3] {
        self.max
    }

    /// Returns `true` if this box overlaps another (inclusive on faces).
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        super::overlaps_inclusive(&self.min, &self.max, &other.min, &other.max)
    }
}
