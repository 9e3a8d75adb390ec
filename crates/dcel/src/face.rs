use crate::ids::{FaceId, HedgeId, VertexId};

/// A face — a bounded region traced by a cycle of half-edges.
///
/// `vertex_list`, `area`, and `holes` are lazily computed from the
/// boundary walk starting at `wedge`. They cannot be recomputed by
/// methods on `Face` itself — a `Face` held inside the `Dcel`'s arena
/// cannot borrow back into that same arena to walk its neighbors — so
/// recomputation lives on `Dcel` (see `Dcel::face_vertex_list`,
/// `Dcel::face_area`, `Dcel::face_holes`). This struct only holds the
/// cache and its dirty flags.
#[derive(Debug, Clone)]
pub struct Face {
    /// Any half-edge on this face's boundary; walking `next` from here
    /// returns to `wedge` after visiting every half-edge of the face.
    pub wedge: HedgeId,
    /// Cached sequence of origin vertices visited by the boundary walk.
    pub vertex_list: Option<Vec<VertexId>>,
    /// Cached signed area (shoelace over `vertex_list`).
    pub area: Option<f64>,
    /// Cached set of faces whose boundary lies strictly inside this one.
    pub holes: Option<Vec<FaceId>>,
    /// Set whenever the boundary may have changed; forces a re-walk.
    pub vertex_list_dirty: bool,
    /// Set whenever face membership may have globally changed.
    pub holes_dirty: bool,
}

impl Face {
    /// Construct a face with boundary starting at `wedge`; caches start
    /// empty and dirty.
    pub fn new(wedge: HedgeId) -> Self {
        Self {
            wedge,
            vertex_list: None,
            area: None,
            holes: None,
            vertex_list_dirty: true,
            holes_dirty: true,
        }
    }
}
