//! Error types for DCEL construction and mutation.

use thiserror::Error;

/// Errors that can occur while building or editing a [`crate::Dcel`].
///
/// These cover the engine's *contract violations* — preconditions a
/// caller is expected to uphold (no loop edges, no duplicate edges, no
/// dangling vertex references). Lookup misses (`find_vertex`,
/// `find_hedge`) are not errors; they return `None`. A missing edge
/// passed to `remove_edge`/`split_edge` is not an error either; it
/// warns and no-ops, per the engine's failure semantics.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DcelError {
    /// An edge between these two coordinates already exists.
    ///
    /// The engine does not support parallel edges between the same
    /// vertex pair: reconnecting already-connected vertices is
    /// rejected rather than silently creating a second edge.
    #[error("edge ({x1}, {y1})-({x2}, {y2}) already exists")]
    DuplicateEdge {
        /// X coordinate of the first endpoint.
        x1: f64,
        /// Y coordinate of the first endpoint.
        y1: f64,
        /// X coordinate of the second endpoint.
        x2: f64,
        /// Y coordinate of the second endpoint.
        y2: f64,
    },

    /// An edge's two endpoints are identical; loops are not supported.
    #[error("edge endpoints are identical: ({x}, {y})")]
    LoopEdge {
        /// X coordinate of the (shared) endpoint.
        x: f64,
        /// Y coordinate of the (shared) endpoint.
        y: f64,
    },

    /// Bulk construction referenced a point index outside the supplied
    /// point list.
    #[error("edge references unknown point index {0}")]
    UnknownVertex(usize),
}
