use crate::picking::{Hit, PickRoot, Ray};
use glam::Vec3;

/// Persistent visual marker for the current pointer/model intersection.
#[derive(Clone, Copy, Debug)]
pub struct Marker {
    pub position: Vec3,
    pub visible: bool,
}

/// Scene host state read by the render loop and written by event handlers.
/// `model` stays unset until the asset load completes (or forever, on load
/// failure — the viewer keeps running with no pickable geometry).
pub struct SceneState {
    pub model: Option<PickRoot>,
    pub marker: Marker,
}

impl SceneState {
    pub fn new() -> Self {
        Self {
            model: None,
            marker: Marker {
                position: Vec3::ZERO,
                visible: false,
            },
        }
    }

    /// Picking query over the loaded model. An unset root yields an empty
    /// result, identical to a geometric miss.
    pub fn intersect(&self, ray: &Ray) -> Vec<Hit> {
        self.model
            .as_ref()
            .map(|model| model.intersect(ray))
            .unwrap_or_default()
    }

    /// Move the marker to the event's hit point, or hide it on a miss.
    pub fn apply_hover(&mut self, hit_point: Option<Vec3>) {
        match hit_point {
            Some(point) => {
                self.marker.position = point;
                self.marker.visible = true;
            }
            None => self.marker.visible = false,
        }
    }
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new()
    }
}
