use slotmap::new_key_type;

new_key_type! {
    /// Handle for a vertex in the subdivision.
    pub struct VertexId;
    /// Handle for a half-edge in the subdivision.
    pub struct HedgeId;
    /// Handle for a face in the subdivision.
    pub struct FaceId;
}
