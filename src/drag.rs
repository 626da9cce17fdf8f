use crate::picking::{Hit, PickTarget};
use glam::Vec3;

#[derive(Clone, Copy, Debug)]
struct DragSession {
    node: usize,
    /// Captured at pick time: node position minus hit point, so the grabbed
    /// surface point stays under the pointer while dragging.
    offset: Vec3,
}

/// Two-state pointer-drag machine: Idle, or Dragging one mesh node.
///
/// Holding the session as an `Option` keeps the "target set iff active"
/// invariant by construction. Single pointer device; at most one session.
#[derive(Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Pick-down. Grabs the nearest hit, if any, and captures the position
    /// offset. Returns true when a drag began so the caller can disable
    /// camera navigation.
    pub fn pointer_down(&mut self, hits: &[Hit], target: &impl PickTarget) -> bool {
        let Some(hit) = hits.first() else {
            return false;
        };
        self.session = Some(DragSession {
            node: hit.node,
            offset: target.node_position(hit.node) - hit.point,
        });
        true
    }

    /// Pointer move, in either state. Returns the marker position for this
    /// event, or None when the ray misses (marker should hide).
    ///
    /// While dragging with a hit, applies `hit.point + offset` to the target
    /// node's x and z only; y stays at its pick-time height. A miss leaves
    /// the node where the previous event put it — no extrapolation.
    pub fn pointer_move(&mut self, hits: &[Hit], target: &mut impl PickTarget) -> Option<Vec3> {
        let hit = hits.first()?;
        if let Some(session) = self.session {
            let candidate = hit.point + session.offset;
            target.set_node_xz(session.node, candidate.x, candidate.z);
        }
        Some(hit.point)
    }

    /// Pick-release: unconditional return to Idle, whatever the current ray
    /// state. The caller re-enables camera navigation.
    pub fn pointer_up(&mut self) {
        self.session = None;
    }
}
