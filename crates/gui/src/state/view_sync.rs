//! Cross-view shared UI state: active view, selection and the logical view
//! transform. Views never touch each other's derived state; everything that
//! crosses between them goes through [`ViewSyncHub`].

use shared::{FurnitureId, PlanarPoint, Vec3, ViewMode, ViewTransform, ViewTransformPatch};

use super::scene::SceneState;

/// Differences at or below this are treated as equal when merging transforms
pub const TRANSFORM_EPSILON: f64 = 1e-3;

/// Mediator between the floor plan and the 3D view
#[derive(Debug, Clone)]
pub struct ViewSyncHub {
    mode: ViewMode,
    selected: Option<FurnitureId>,
    transform: ViewTransform,
    /// Incremented each time the merged transform actually changes
    transform_version: u64,
}

impl Default for ViewSyncHub {
    fn default() -> Self {
        Self {
            mode: ViewMode::ThreeD,
            selected: None,
            transform: ViewTransform::default(),
            transform_version: 0,
        }
    }
}

impl ViewSyncHub {
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Switch the active view. Entering the floor plan forces every item onto
    /// the floor; entering 3D leaves furniture alone. A selection whose item
    /// no longer exists is dropped.
    pub fn set_view_mode(&mut self, mode: ViewMode, scene: &mut SceneState) {
        if mode == ViewMode::TwoD {
            let flattened = scene.flatten_furniture();
            if flattened > 0 {
                tracing::debug!(flattened, "items dropped to floor for 2D view");
            }
        }
        if mode != self.mode {
            tracing::debug!(from = ?self.mode, to = ?mode, "view mode switched");
            self.mode = mode;
        }
        self.validate_selection(scene);
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    pub fn select(&mut self, id: impl Into<FurnitureId>) {
        self.selected = Some(id.into());
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Clear the selection when its item is gone. Returns true if cleared.
    pub fn validate_selection(&mut self, scene: &SceneState) -> bool {
        let missing = self
            .selected
            .as_deref()
            .is_some_and(|id| scene.get_furniture_item(id).is_none());
        if missing {
            self.selected = None;
        }
        missing
    }

    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    pub fn transform_version(&self) -> u64 {
        self.transform_version
    }

    /// Merge `patch` into the shared transform. Nothing happens unless some
    /// component moved by more than [`TRANSFORM_EPSILON`]; this breaks the
    /// loop of two views re-announcing each other's updates.
    /// Returns true when the transform changed.
    pub fn sync_view_transform(&mut self, patch: ViewTransformPatch) -> bool {
        let mut next = self.transform;
        if let Some(position) = patch.position {
            next.position = position;
        }
        if let Some(scale) = patch.scale {
            next.scale = scale;
        }
        if let Some(rotation) = patch.rotation {
            next.rotation = rotation;
        }

        let differs = |a: f64, b: f64| (a - b).abs() > TRANSFORM_EPSILON;
        let changed = differs(next.position.x, self.transform.position.x)
            || differs(next.position.y, self.transform.position.y)
            || differs(next.scale, self.transform.scale)
            || differs(next.rotation, self.transform.rotation);
        if changed {
            self.transform = next;
            self.transform_version += 1;
        }
        changed
    }

    /// Map a position between the views. The views share one coordinate
    /// system, so x and z pass through; y is zeroed when the source is the
    /// floor plan.
    pub fn convert_coordinates(position: Vec3, from: ViewMode, _to: ViewMode) -> Vec3 {
        match from {
            ViewMode::TwoD => Vec3::on_floor(position.x, position.z),
            ViewMode::ThreeD => position,
        }
    }
}

/// Patch carrying only a pan position
pub fn position_patch(x: f64, y: f64) -> ViewTransformPatch {
    ViewTransformPatch {
        position: Some(PlanarPoint { x, y }),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::item;
    use proptest::prelude::*;
    use shared::{FurniturePatch, FurnitureKind};

    #[test]
    fn test_defaults() {
        let hub = ViewSyncHub::default();
        assert_eq!(hub.mode(), ViewMode::ThreeD);
        assert_eq!(hub.transform(), ViewTransform::default());
        assert!(hub.selected().is_none());
    }

    #[test]
    fn test_switch_to_2d_flattens() {
        let mut scene = SceneState::default();
        scene.add_furniture_item(item("a", FurnitureKind::Lamp, 0.0, 0.0));
        scene.update_furniture_item("a", &FurniturePatch::position(Vec3::new(0.0, 1.2, 0.0)));
        let mut hub = ViewSyncHub::default();
        hub.set_view_mode(ViewMode::TwoD, &mut scene);
        assert_eq!(hub.mode(), ViewMode::TwoD);
        assert_eq!(scene.get_furniture_item("a").unwrap().position.y, 0.0);
    }

    #[test]
    fn test_switch_to_3d_leaves_furniture() {
        let mut scene = SceneState::default();
        scene.add_furniture_item(item("a", FurnitureKind::Lamp, 0.0, 0.0));
        scene.update_furniture_item("a", &FurniturePatch::position(Vec3::new(0.0, 1.2, 0.0)));
        let v = scene.furniture_version();
        let mut hub = ViewSyncHub::default();
        hub.set_view_mode(ViewMode::ThreeD, &mut scene);
        assert_eq!(scene.furniture_version(), v);
        assert_eq!(scene.get_furniture_item("a").unwrap().position.y, 1.2);
    }

    #[test]
    fn test_switch_drops_stale_selection() {
        let mut scene = SceneState::default();
        let mut hub = ViewSyncHub::default();
        hub.select("ghost");
        hub.set_view_mode(ViewMode::TwoD, &mut scene);
        assert!(hub.selected().is_none());
    }

    #[test]
    fn test_sync_ignores_tiny_changes() {
        let mut hub = ViewSyncHub::default();
        assert!(!hub.sync_view_transform(ViewTransformPatch {
            scale: Some(1.0 + TRANSFORM_EPSILON / 2.0),
            ..Default::default()
        }));
        assert_eq!(hub.transform_version(), 0);
        assert!(hub.sync_view_transform(position_patch(2.0, -1.0)));
        assert_eq!(hub.transform().position, PlanarPoint { x: 2.0, y: -1.0 });
        assert!(!hub.sync_view_transform(position_patch(2.0, -1.0)));
        assert_eq!(hub.transform_version(), 1);
    }

    #[test]
    fn test_sync_merges_partial() {
        let mut hub = ViewSyncHub::default();
        hub.sync_view_transform(ViewTransformPatch {
            rotation: Some(45.0),
            ..Default::default()
        });
        hub.sync_view_transform(ViewTransformPatch {
            scale: Some(2.0),
            ..Default::default()
        });
        let t = hub.transform();
        assert_eq!(t.rotation, 45.0);
        assert_eq!(t.scale, 2.0);
    }

    #[test]
    fn test_convert_coordinates() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(
            ViewSyncHub::convert_coordinates(p, ViewMode::TwoD, ViewMode::ThreeD),
            Vec3::new(1.0, 0.0, 3.0)
        );
        assert_eq!(ViewSyncHub::convert_coordinates(p, ViewMode::ThreeD, ViewMode::TwoD), p);
    }

    proptest! {
        #[test]
        fn prop_2d_switch_zeroes_every_height(ys in prop::collection::vec(-3.0f64..3.0, 0..8)) {
            let mut scene = SceneState::default();
            for (i, y) in ys.iter().enumerate() {
                let mut it = item(&format!("i{i}"), FurnitureKind::Decor, 0.0, 0.0);
                it.position.y = *y;
                scene.add_furniture_item(it);
            }
            let mut hub = ViewSyncHub::default();
            hub.set_view_mode(ViewMode::TwoD, &mut scene);
            prop_assert!(scene.furniture().iter().all(|f| f.position.y == 0.0));
        }
    }
}
