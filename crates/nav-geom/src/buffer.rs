// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Zero-copy views over caller-owned vertex and index buffers.
//!
//! Mesh layers hand geometry around as flat `[x, y, z, x, y, z, ...]` arrays,
//! optionally addressed through `u16` index lists into a shared pool. The
//! views here wrap those buffers without copying and replace manual `3 * i`
//! offset arithmetic with typed vertex access.
//!
//! # Example
//!
//! ```
//! use nav_geom::VertexSlice;
//!
//! let flat = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 1.0];
//! let tri = VertexSlice::from_flat(&flat)?;
//! assert_eq!(tri.len(), 3);
//! assert_eq!(tri.vertex(2).to_array(), [1.0, 0.0, 1.0]);
//! # Ok::<(), nav_geom::GeomError>(())
//! ```

use tracing::debug;

use crate::error::GeomError;
use crate::math::Vec3;

/// Borrowed, ordered run of vertices.
///
/// Depending on the caller this is a polygon boundary (order defines winding)
/// or an unordered point cloud.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexSlice<'a> {
    verts: &'a [Vec3],
}

impl<'a> VertexSlice<'a> {
    /// Wraps an already typed vertex slice.
    pub const fn new(verts: &'a [Vec3]) -> Self {
        Self { verts }
    }

    /// Views a flat coordinate buffer as vertices.
    ///
    /// # Errors
    ///
    /// Returns [`GeomError::RaggedVertexBuffer`] if `coords.len()` is not a
    /// multiple of 3.
    pub fn from_flat(coords: &'a [f32]) -> Result<Self, GeomError> {
        if coords.len() % 3 != 0 {
            debug!(len = coords.len(), "rejecting ragged vertex buffer");
            return Err(GeomError::RaggedVertexBuffer { len: coords.len() });
        }
        let verts = bytemuck::try_cast_slice(coords)?;
        Ok(Self { verts })
    }

    /// Checks that the view has enough vertices to form a polygon.
    ///
    /// # Errors
    ///
    /// Returns [`GeomError::TooFewVertices`] when fewer than 3 vertices are present.
    pub fn polygon(self) -> Result<Self, GeomError> {
        if self.verts.len() < 3 {
            debug!(count = self.verts.len(), "rejecting degenerate polygon");
            return Err(GeomError::TooFewVertices {
                count: self.verts.len(),
            });
        }
        Ok(self)
    }

    /// Number of vertices.
    pub const fn len(&self) -> usize {
        self.verts.len()
    }

    /// `true` when the view holds no vertices.
    pub const fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// Returns vertex `i`.
    ///
    /// # Panics
    /// Panics if `i >= self.len()`.
    pub fn vertex(&self, i: usize) -> Vec3 {
        self.verts[i]
    }

    /// Returns vertex `i`, or `None` when out of range.
    pub fn get(&self, i: usize) -> Option<Vec3> {
        self.verts.get(i).copied()
    }

    /// Typed vertices.
    pub const fn as_slice(&self) -> &'a [Vec3] {
        self.verts
    }

    /// The underlying flat coordinate buffer.
    pub fn as_flat(&self) -> &'a [f32] {
        bytemuck::cast_slice(self.verts)
    }

    /// Iterates vertices in order.
    pub fn iter(&self) -> core::iter::Copied<core::slice::Iter<'a, Vec3>> {
        self.verts.iter().copied()
    }

    /// Iterates the closed boundary as `(start, end)` index pairs.
    ///
    /// The first pair is `(len - 1, 0)`, then `(0, 1)`, `(1, 2)`, and so on;
    /// every edge is identified by its start index.
    pub fn edges(&self) -> Edges {
        Edges::new(self.verts.len())
    }

    /// Iterates the closed boundary as `(start_index, start, end)`.
    pub fn edge_segments(&self) -> impl Iterator<Item = (usize, Vec3, Vec3)> + 'a {
        let verts = self.verts;
        Edges::new(verts.len()).map(move |(j, i)| (j, verts[j], verts[i]))
    }
}

impl<'a> From<&'a [Vec3]> for VertexSlice<'a> {
    fn from(verts: &'a [Vec3]) -> Self {
        Self::new(verts)
    }
}

impl<'a> IntoIterator for VertexSlice<'a> {
    type Item = Vec3;
    type IntoIter = core::iter::Copied<core::slice::Iter<'a, Vec3>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Wrap-around edge traversal over a polygon with `len` vertices.
///
/// Yields `(previous, current)` index pairs starting at `(len - 1, 0)`.
#[derive(Debug, Clone)]
pub struct Edges {
    prev: usize,
    next: usize,
    len: usize,
}

impl Edges {
    /// Traversal over `len` vertices; empty when `len == 0`.
    pub const fn new(len: usize) -> Self {
        Self {
            prev: len.saturating_sub(1),
            next: 0,
            len,
        }
    }
}

impl Iterator for Edges {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.len {
            return None;
        }
        let item = (self.prev, self.next);
        self.prev = self.next;
        self.next += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.len - self.next;
        (rem, Some(rem))
    }
}

impl ExactSizeIterator for Edges {}

/// Polygon addressed through an index buffer into a shared vertex pool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexedPolygon<'a> {
    indices: &'a [u16],
    pool: VertexSlice<'a>,
}

impl<'a> IndexedPolygon<'a> {
    /// Pairs an index buffer with its pool without validation.
    ///
    /// Out-of-range indices panic when the vertex is accessed.
    pub const fn new(indices: &'a [u16], pool: VertexSlice<'a>) -> Self {
        Self { indices, pool }
    }

    /// Pairs an index buffer with its pool, validating every index and the
    /// minimum polygon size.
    ///
    /// # Errors
    ///
    /// Returns [`GeomError::TooFewVertices`] for fewer than 3 indices and
    /// [`GeomError::IndexOutOfRange`] for the first index past the pool.
    pub fn try_new(indices: &'a [u16], pool: VertexSlice<'a>) -> Result<Self, GeomError> {
        if indices.len() < 3 {
            debug!(count = indices.len(), "rejecting degenerate indexed polygon");
            return Err(GeomError::TooFewVertices {
                count: indices.len(),
            });
        }
        if let Some((position, &index)) = indices
            .iter()
            .enumerate()
            .find(|&(_, &ix)| usize::from(ix) >= pool.len())
        {
            debug!(position, index, vertex_count = pool.len(), "index out of range");
            return Err(GeomError::IndexOutOfRange {
                position,
                index,
                vertex_count: pool.len(),
            });
        }
        Ok(Self { indices, pool })
    }

    /// Number of polygon vertices (indices).
    pub const fn len(&self) -> usize {
        self.indices.len()
    }

    /// `true` when the polygon has no indices.
    pub const fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The index buffer.
    pub const fn indices(&self) -> &'a [u16] {
        self.indices
    }

    /// The shared vertex pool.
    pub const fn pool(&self) -> VertexSlice<'a> {
        self.pool
    }

    /// Returns the `k`-th polygon vertex.
    ///
    /// # Panics
    /// Panics if `k` or the index it names is out of range.
    pub fn vertex(&self, k: usize) -> Vec3 {
        self.pool.vertex(usize::from(self.indices[k]))
    }

    /// Iterates polygon vertices in index order.
    pub fn iter(&self) -> impl Iterator<Item = Vec3> + 'a {
        let pool = self.pool;
        self.indices.iter().map(move |&ix| pool.vertex(usize::from(ix)))
    }
}
