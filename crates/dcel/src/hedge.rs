use crate::ids::{FaceId, HedgeId, VertexId};

/// A half-edge — one direction of an edge, bounding a face.
///
/// The four linkage fields are `Option` only transiently, during the
/// same operation that creates this half-edge; once a public `Dcel`
/// method returns, every reachable half-edge has all four populated.
#[derive(Debug, Clone)]
pub struct Hedge {
    /// Origin vertex of this half-edge.
    pub origin: VertexId,
    /// The other half-edge of this edge, running in the opposite direction.
    pub twin: Option<HedgeId>,
    /// Next half-edge around the face boundary.
    pub next: Option<HedgeId>,
    /// Previous half-edge around the face boundary.
    pub prev: Option<HedgeId>,
    /// The face this half-edge bounds.
    pub face: Option<FaceId>,
}

impl Hedge {
    /// Construct a half-edge with the given origin and no linkage yet.
    pub fn new(origin: VertexId) -> Self {
        Self {
            origin,
            twin: None,
            next: None,
            prev: None,
            face: None,
        }
    }
}
