use crate::dcel::Dcel;
use dcel_geom::{polar_angle, signed_area};

impl Dcel {
    /// Walk every vertex, half-edge, and face and assert the structural
    /// invariants this engine promises after any public operation
    /// returns. Read-only — recomputes face areas fresh from a boundary
    /// walk rather than trusting (or refreshing) the lazy cache, so it
    /// can be called between assertions in a test without needing
    /// `&mut`.
    ///
    /// Returns the first violation found, if any.
    pub fn debug_invariants(&self) -> Result<(), String> {
        for (h, hedge) in self.hedges.iter() {
            let twin = hedge.twin.ok_or_else(|| format!("hedge {h:?} has no twin"))?;
            if twin == h {
                return Err(format!("hedge {h:?} is its own twin"));
            }
            let twin_twin = self.hedges[twin]
                .twin
                .ok_or_else(|| format!("hedge {twin:?} has no twin"))?;
            if twin_twin != h {
                return Err(format!("twin involution broken at {h:?}"));
            }

            let next = hedge.next.ok_or_else(|| format!("hedge {h:?} has no next"))?;
            let prev = hedge.prev.ok_or_else(|| format!("hedge {h:?} has no prev"))?;
            if self.hedges[next].prev != Some(h) {
                return Err(format!("next/prev mismatch at {h:?}"));
            }
            if self.hedges[prev].next != Some(h) {
                return Err(format!("prev/next mismatch at {h:?}"));
            }
            if self.hedges[next].origin != self.hedges[twin].origin {
                return Err(format!("boundary consistency broken at {h:?}"));
            }

            let face = hedge.face.ok_or_else(|| format!("hedge {h:?} has no face"))?;
            if !self.faces.contains_key(face) {
                return Err(format!("hedge {h:?} references a disposed face {face:?}"));
            }
        }

        for (v, vertex) in self.vertices.iter() {
            let k = vertex.incident.len();
            for &h in &vertex.incident {
                let twin = self.hedges[h]
                    .twin
                    .ok_or_else(|| format!("hedge {h:?} has no twin"))?;
                let dest = self.hedges[twin].origin;
                if dest != v {
                    return Err(format!(
                        "hedge {h:?} listed incident to {v:?} but arrives at {dest:?}"
                    ));
                }
            }
            for (i, &h) in vertex.incident.iter().enumerate() {
                let hnext = vertex.incident[(i + 1) % k];
                let hnext_twin = self.hedges[hnext]
                    .twin
                    .ok_or_else(|| format!("hedge {hnext:?} has no twin"))?;
                if self.hedges[h].next != Some(hnext_twin) {
                    return Err(format!(
                        "rotational linkage broken around {v:?} between {h:?} and {hnext:?}"
                    ));
                }
            }
            let angles: Vec<f64> = vertex
                .incident
                .iter()
                .map(|&h| {
                    let far = self.vertices[self.hedges[h].origin].point;
                    polar_angle(vertex.point, far)
                })
                .collect();
            for w in angles.windows(2) {
                if w[0] > w[1] {
                    return Err(format!("incident list at {v:?} is not angle-sorted"));
                }
            }
        }

        let mut any_external = false;
        for (f, face) in self.faces.iter() {
            let wedge = face.wedge;
            let mut verts = Vec::new();
            let mut cur = wedge;
            loop {
                if self.hedges[cur].face != Some(f) {
                    return Err(format!(
                        "hedge {cur:?} on face {f:?}'s boundary belongs to a different face"
                    ));
                }
                verts.push(self.hedges[cur].origin);
                cur = self.hedges[cur]
                    .next
                    .ok_or_else(|| format!("hedge {cur:?} has no next"))?;
                if cur == wedge {
                    break;
                }
            }
            let points: Vec<_> = verts.iter().map(|&v| self.vertices[v].point).collect();
            if signed_area(&points) <= 0.0 {
                any_external = true;
            }
        }
        if !self.faces.is_empty() && !any_external {
            return Err("non-empty subdivision has no external face".to_string());
        }

        Ok(())
    }
}
