// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error type for buffer views.
//!
//! Geometric routines never fail; they report "no result" through `Option` or
//! `bool`. The only recoverable errors come from wrapping untyped caller
//! buffers, where a length or index can be malformed.

use thiserror::Error;

/// Errors that can occur when building typed views over caller buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeomError {
    /// A flat coordinate buffer does not hold a whole number of vertices.
    #[error("vertex buffer length {len} is not a multiple of 3")]
    RaggedVertexBuffer {
        /// Number of `f32` values in the buffer.
        len: usize,
    },

    /// Reinterpreting the coordinate buffer as vertices failed.
    #[error("vertex cast error: {0}")]
    VertexCast(#[from] bytemuck::PodCastError),

    /// An index buffer entry points past the end of the vertex pool.
    #[error("index {index} at position {position} out of bounds, pool holds {vertex_count} vertices")]
    IndexOutOfRange {
        /// Position within the index buffer.
        position: usize,
        /// The offending index value.
        index: u16,
        /// Number of vertices in the pool.
        vertex_count: usize,
    },

    /// A polygon was given fewer than three vertices.
    #[error("polygon needs at least 3 vertices, got {count}")]
    TooFewVertices {
        /// Number of vertices supplied.
        count: usize,
    },

    /// A bounding box was requested for an empty point set.
    #[error("cannot bound an empty point set")]
    EmptyPointSet,
}
