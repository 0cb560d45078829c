//! Pointer and keyboard handling for the 3D view, independent of egui.

use glam::Vec3;
use shared::{FurnitureId, FurnitureItem, ViewMode};

use crate::geometry::{step_yaw, SNAP_DEGREES};
use crate::state::{AppState, EditorTool};

use super::camera::OrbitCamera;
use super::picking::{pick_furniture, ray_ground_plane, Ray};

/// Bounds of the pending arrow-key scale factor
pub const MIN_PENDING_SCALE: f64 = 0.5;
pub const MAX_PENDING_SCALE: f64 = 2.0;
/// Change of the pending factor per arrow press
pub const SCALE_STEP: f64 = 0.1;

#[derive(Debug, Clone, PartialEq)]
struct DragState {
    id: FurnitureId,
    /// Item position minus the grab point on the floor plane
    offset: Vec3,
}

/// Drag, rotate and scale gestures of the 3D view
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportInteraction {
    drag: Option<DragState>,
    pending_scale: f64,
}

impl Default for ViewportInteraction {
    fn default() -> Self {
        Self {
            drag: None,
            pending_scale: 1.0,
        }
    }
}

fn editable(state: &AppState) -> bool {
    !state.preview_mode
}

/// Pick among the items the 3D view actually draws
fn pick_visible<'a>(ray: &Ray, state: &'a AppState) -> Option<(&'a FurnitureItem, f32)> {
    pick_furniture(
        ray,
        state
            .scene
            .furniture()
            .iter()
            .filter(|item| state.layers.shows_kind(&item.kind)),
    )
}

impl ViewportInteraction {
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Orbiting is suspended while dragging furniture or when locked
    pub fn can_orbit(&self, state: &AppState) -> bool {
        !state.rotation_locked && !self.is_dragging()
    }

    pub fn pending_scale(&self) -> f64 {
        self.pending_scale
    }

    /// Begin dragging when the select tool presses on the selected item.
    /// Returns true when a drag started.
    pub fn pointer_down(&mut self, ray: &Ray, state: &AppState) -> bool {
        if !editable(state) || state.tool != EditorTool::Select {
            return false;
        }
        let Some((hit, _)) = pick_visible(ray, state) else {
            return false;
        };
        if !state.view.is_selected(&hit.id) {
            return false;
        }
        let Some(grab) = ray_ground_plane(ray, 0.0) else {
            return false;
        };
        let position = Vec3::new(hit.position.x as f32, 0.0, hit.position.z as f32);
        self.drag = Some(DragState {
            id: hit.id.clone(),
            offset: position - grab,
        });
        tracing::debug!("3D drag started on {}", hit.id);
        true
    }

    /// Follow the pointer on the floor plane; the item stays inside the room
    pub fn pointer_move(&mut self, ray: &Ray, state: &mut AppState) {
        let Some(drag) = &self.drag else {
            return;
        };
        if state.scene.get_furniture_item(&drag.id).is_none() {
            tracing::debug!("Dragged item {} vanished, cancelling", drag.id);
            self.drag = None;
            return;
        }
        let Some(point) = ray_ground_plane(ray, 0.0) else {
            return;
        };
        let target = point + drag.offset;
        let id = drag.id.clone();
        state
            .scene
            .move_furniture_item(&id, target.x as f64, target.z as f64);
    }

    pub fn pointer_up(&mut self) {
        self.drag = None;
    }

    /// Select the item under the pointer, or clear the selection
    pub fn click(&mut self, ray: &Ray, state: &mut AppState) {
        if !editable(state) {
            return;
        }
        match pick_visible(ray, state) {
            Some((hit, _)) => {
                let id = hit.id.clone();
                state.view.select(id);
            }
            None => state.view.clear_selection(),
        }
    }

    /// With the rotate tool, a double-click on the selected item turns it
    /// one snap step. Returns true when the item rotated.
    pub fn double_click(&mut self, ray: &Ray, state: &mut AppState) -> bool {
        if !editable(state) || state.tool != EditorTool::Rotate {
            return false;
        }
        let Some((hit, _)) = pick_visible(ray, state) else {
            return false;
        };
        if !state.view.is_selected(&hit.id) {
            return false;
        }
        let id = hit.id.clone();
        let yaw = step_yaw(hit.rotation.y, SNAP_DEGREES);
        state.scene.set_furniture_yaw(&id, yaw)
    }

    /// Step the pending scale factor. Only active with the scale tool and a
    /// selection.
    pub fn scale_key(&mut self, steps: f64, state: &AppState) {
        if !editable(state) || state.tool != EditorTool::Scale || state.selected_item().is_none() {
            return;
        }
        self.pending_scale =
            (self.pending_scale + steps * SCALE_STEP).clamp(MIN_PENDING_SCALE, MAX_PENDING_SCALE);
    }

    /// Apply the pending factor to the selected item's dimensions and
    /// reset it. Returns true when the item changed.
    pub fn scale_key_released(&mut self, state: &mut AppState) -> bool {
        let factor = std::mem::replace(&mut self.pending_scale, 1.0);
        if (factor - 1.0).abs() < f64::EPSILON {
            return false;
        }
        let Some(id) = state.view.selected().map(str::to_string) else {
            return false;
        };
        state.scene.scale_furniture_item(&id, factor)
    }
}

/// Announce the camera to the hub when it moved past the sync threshold.
/// Returns true when the hub accepted the update.
pub fn push_camera(camera: &OrbitCamera, state: &mut AppState) -> bool {
    if state.view.mode() != ViewMode::ThreeD {
        return false;
    }
    let patch = camera.sync_patch();
    let current = state.view.transform();
    let threshold = state.settings.viewport.sync_threshold;
    let moved = patch.position.is_some_and(|p| {
        (p.x - current.position.x).abs() > threshold || (p.y - current.position.y).abs() > threshold
    }) || patch
        .rotation
        .is_some_and(|r| (r - current.rotation).abs() > threshold);
    moved && state.view.sync_view_transform(patch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::item;
    use crate::state::AppSettings;
    use shared::FurnitureKind;

    fn state_with_chair() -> AppState {
        let mut s = AppState::with_settings(AppSettings::default());
        s.add_item(item("chair", FurnitureKind::Chair, 0.0, 0.0));
        s
    }

    fn down_at(x: f32, z: f32) -> Ray {
        Ray {
            origin: Vec3::new(x, 10.0, z),
            direction: Vec3::NEG_Y,
        }
    }

    #[test]
    fn test_click_selects_and_clears() {
        let mut s = state_with_chair();
        let mut i = ViewportInteraction::default();
        s.view.clear_selection();
        i.click(&down_at(0.1, 0.1), &mut s);
        assert_eq!(s.view.selected(), Some("chair"));
        i.click(&down_at(2.5, 1.5), &mut s);
        assert!(s.view.selected().is_none());
    }

    #[test]
    fn test_drag_keeps_grab_offset_and_clamps() {
        let mut s = state_with_chair();
        let mut i = ViewportInteraction::default();
        assert!(i.pointer_down(&down_at(0.2, 0.0), &s));
        assert!(!i.can_orbit(&s));
        i.pointer_move(&down_at(1.2, 0.5), &mut s);
        let p = s.scene.get_furniture_item("chair").unwrap().position;
        assert!((p.x - 1.0).abs() < 1e-5);
        assert!((p.z - 0.5).abs() < 1e-5);

        i.pointer_move(&down_at(50.0, 0.0), &mut s);
        let p = s.scene.get_furniture_item("chair").unwrap().position;
        assert!((p.x - (s.scene.room().length / 2.0 - 0.5)).abs() < 1e-5);
        i.pointer_up();
        assert!(i.can_orbit(&s));
    }

    #[test]
    fn test_drag_requires_selected_item() {
        let mut s = state_with_chair();
        s.view.clear_selection();
        let mut i = ViewportInteraction::default();
        assert!(!i.pointer_down(&down_at(0.0, 0.0), &s));
    }

    #[test]
    fn test_drag_aborts_when_item_removed() {
        let mut s = state_with_chair();
        let mut i = ViewportInteraction::default();
        assert!(i.pointer_down(&down_at(0.0, 0.0), &s));
        s.scene.remove_furniture_item("chair");
        i.pointer_move(&down_at(1.0, 1.0), &mut s);
        assert!(!i.is_dragging());
    }

    #[test]
    fn test_preview_blocks_editing() {
        let mut s = state_with_chair();
        s.preview_mode = true;
        let mut i = ViewportInteraction::default();
        assert!(!i.pointer_down(&down_at(0.0, 0.0), &s));
        i.click(&down_at(3.0, 0.0), &mut s);
        assert_eq!(s.view.selected(), Some("chair"));
    }

    #[test]
    fn test_double_click_rotates_with_rotate_tool() {
        let mut s = state_with_chair();
        let mut i = ViewportInteraction::default();
        assert!(!i.double_click(&down_at(0.0, 0.0), &mut s));
        s.tool = EditorTool::Rotate;
        assert!(i.double_click(&down_at(0.0, 0.0), &mut s));
        assert!(i.double_click(&down_at(0.0, 0.0), &mut s));
        assert_eq!(s.scene.get_furniture_item("chair").unwrap().rotation.y, 30.0);
    }

    #[test]
    fn test_pending_scale_clamps_and_applies_on_release() {
        let mut s = state_with_chair();
        s.tool = EditorTool::Scale;
        let mut i = ViewportInteraction::default();
        for _ in 0..20 {
            i.scale_key(1.0, &s);
        }
        assert!((i.pending_scale() - MAX_PENDING_SCALE).abs() < 1e-9);
        assert!(i.scale_key_released(&mut s));
        assert_eq!(i.pending_scale(), 1.0);
        let dims = s.scene.get_furniture_item("chair").unwrap().dimensions;
        assert!((dims.width - 2.0).abs() < 1e-9);

        for _ in 0..20 {
            i.scale_key(-1.0, &s);
        }
        assert!((i.pending_scale() - MIN_PENDING_SCALE).abs() < 1e-9);
    }

    #[test]
    fn test_scale_key_ignored_without_scale_tool() {
        let s = state_with_chair();
        let mut i = ViewportInteraction::default();
        i.scale_key(1.0, &s);
        assert_eq!(i.pending_scale(), 1.0);
    }

    #[test]
    fn test_hidden_items_cannot_be_picked() {
        let mut s = state_with_chair();
        s.layers.toggle(crate::state::layers::FURNITURE);
        let mut i = ViewportInteraction::default();
        assert!(!i.pointer_down(&down_at(0.0, 0.0), &s));
        assert!(!i.is_dragging());

        s.view.clear_selection();
        i.click(&down_at(0.0, 0.0), &mut s);
        assert!(s.view.selected().is_none());

        s.view.select("chair");
        s.tool = EditorTool::Rotate;
        assert!(!i.double_click(&down_at(0.0, 0.0), &mut s));

        s.layers.toggle(crate::state::layers::FURNITURE);
        s.view.clear_selection();
        i.click(&down_at(0.0, 0.0), &mut s);
        assert_eq!(s.view.selected(), Some("chair"));
    }

    #[test]
    fn test_lamp_hidden_with_lighting_layer() {
        let mut s = state_with_chair();
        s.add_item(item("lamp", FurnitureKind::Lamp, 2.0, 0.0));
        s.view.clear_selection();
        s.layers.toggle(crate::state::layers::LIGHTING);
        let mut i = ViewportInteraction::default();
        i.click(&down_at(2.0, 0.0), &mut s);
        assert!(s.view.selected().is_none());
        i.click(&down_at(0.0, 0.0), &mut s);
        assert_eq!(s.view.selected(), Some("chair"));
    }

    #[test]
    fn test_rotation_lock_blocks_orbit() {
        let mut s = state_with_chair();
        s.rotation_locked = true;
        assert!(!ViewportInteraction::default().can_orbit(&s));
    }

    #[test]
    fn test_camera_push_respects_threshold() {
        let mut s = state_with_chair();
        let mut camera = OrbitCamera::default();
        assert!(push_camera(&camera, &mut s));
        assert!(!push_camera(&camera, &mut s));
        camera.rotate(0.0001, 0.0);
        assert!(!push_camera(&camera, &mut s));
        camera.rotate(10.0, 0.0);
        assert!(push_camera(&camera, &mut s));
    }
}
