#![warn(missing_docs)]

//! A planar subdivision engine built on a doubly connected edge list.
//!
//! `Dcel` maintains a planar graph embedded in the 2D plane: vertices,
//! half-edges (mated pairs forming directed edges), and the faces they
//! bound. It supports building a subdivision from a point/edge list and
//! incrementally editing it — `add_edge`, `remove_edge`, `split_edge` —
//! re-deriving the affected faces after each edit rather than rebuilding
//! the whole structure from scratch.
//!
//! Vertices, half-edges, and faces live in arenas
//! ([`slotmap::SlotMap`]) owned by the `Dcel` and reference each other
//! by handle, not by borrow — the half-edge graph is cyclic by
//! construction, and handles sidestep the lifetime problems that would
//! otherwise create.
//!
//! # Example
//!
//! ```
//! use dcel::Dcel;
//!
//! let points = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
//! let edges = [(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)];
//! let mut d = Dcel::from_points_edges(&points, &edges).unwrap();
//!
//! assert_eq!(d.internal_faces().len(), 2);
//! assert_eq!(d.external_faces().len(), 1);
//! assert!(d.debug_invariants().is_ok());
//! ```

mod check;
#[allow(clippy::module_inception)]
mod dcel;
mod error;
mod face;
mod hedge;
mod ids;
mod vertex;

pub use crate::dcel::Dcel;
pub use error::DcelError;
pub use face::Face;
pub use hedge::Hedge;
pub use ids::{FaceId, HedgeId, VertexId};
pub use vertex::Vertex;
