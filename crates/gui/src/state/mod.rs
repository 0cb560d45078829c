pub mod history;
pub mod layers;
pub mod scene;
pub mod settings;
pub mod tool;
pub mod view_sync;

pub use history::HistoryEngine;
pub use layers::LayerSet;
pub use scene::{item_display_name, SceneState};
pub use settings::AppSettings;
pub use tool::EditorTool;
pub use view_sync::ViewSyncHub;

use shared::{DesignId, DesignSnapshot, FurnitureId, FurnitureItem, FurnitureKind, ViewMode};

use crate::catalog::{self, RoomTemplate};

/// Panel visibility flags
pub struct PanelVisibility {
    pub catalog: bool,
    pub properties: bool,
    pub layers: bool,
}

impl Default for PanelVisibility {
    fn default() -> Self {
        Self {
            catalog: true,
            properties: true,
            layers: true,
        }
    }
}

/// Identity of the open design
#[derive(Debug, Clone)]
pub struct DesignMeta {
    pub id: DesignId,
    pub name: String,
    /// Path of the last captured thumbnail, empty if none
    pub thumbnail: String,
}

impl Default for DesignMeta {
    fn default() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: "Untitled Design".to_string(),
            thumbnail: String::new(),
        }
    }
}

impl DesignMeta {
    /// File name stem for exports: lower-case, spaces as dashes
    pub fn export_stem(&self) -> String {
        let stem = self.name.trim().to_lowercase().replace(' ', "-");
        if stem.is_empty() {
            "design".to_string()
        } else {
            stem
        }
    }
}

/// Combined application state
pub struct AppState {
    pub scene: SceneState,
    pub history: HistoryEngine,
    pub view: ViewSyncHub,
    pub layers: LayerSet,
    pub settings: AppSettings,
    pub tool: EditorTool,
    pub panels: PanelVisibility,
    pub design: DesignMeta,
    /// Hides helpers and disables editing in the 3D view
    pub preview_mode: bool,
    /// Disables orbit rotation in the 3D view
    pub rotation_locked: bool,
    /// Show settings window
    pub show_settings_window: bool,
    /// Furniture version last handed to the history engine
    recorded_version: Option<u64>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(AppSettings::load())
    }
}

impl AppState {
    pub fn with_settings(settings: AppSettings) -> Self {
        let mut state = Self {
            scene: SceneState::default(),
            history: HistoryEngine::with_limit(settings.history.limit),
            view: ViewSyncHub::default(),
            layers: LayerSet::default(),
            settings,
            tool: EditorTool::default(),
            panels: PanelVisibility::default(),
            design: DesignMeta::default(),
            preview_mode: false,
            rotation_locked: false,
            show_settings_window: false,
            recorded_version: None,
        };
        state.record_history();
        state
    }

    /// Snapshot the furniture collection if it changed since the last call.
    /// Runs once per frame; the history engine drops unchanged snapshots.
    pub fn record_history(&mut self) {
        let version = self.scene.furniture_version();
        if self.recorded_version != Some(version) {
            self.history.save_state(self.scene.furniture());
            self.recorded_version = Some(version);
        }
    }

    pub fn undo(&mut self) -> bool {
        self.record_history();
        let Some(previous) = self.history.undo() else {
            return false;
        };
        self.apply_history_snapshot(previous);
        true
    }

    pub fn redo(&mut self) -> bool {
        self.record_history();
        let Some(next) = self.history.redo() else {
            return false;
        };
        self.apply_history_snapshot(next);
        true
    }

    fn apply_history_snapshot(&mut self, items: Vec<FurnitureItem>) {
        self.scene.replace_furniture_items(items);
        // Already recorded: keep the redo branch intact
        self.recorded_version = Some(self.scene.furniture_version());
        self.view.validate_selection(&self.scene);
    }

    pub fn selected_item(&self) -> Option<&FurnitureItem> {
        self.view
            .selected()
            .and_then(|id| self.scene.get_furniture_item(id))
    }

    /// Insert an item, pull it inside the room and select it
    pub fn add_item(&mut self, item: FurnitureItem) -> FurnitureId {
        let id = item.id.clone();
        let (x, z) = (item.position.x, item.position.z);
        self.scene.add_furniture_item(item);
        self.scene.move_furniture_item(&id, x, z);
        self.view.select(id.clone());
        id
    }

    /// Add a generic item of `kind` at the room centre
    pub fn quick_add(&mut self, kind: FurnitureKind) -> FurnitureId {
        self.add_item(catalog::quick_item(kind))
    }

    /// Remove the selected item, if any
    pub fn delete_selected(&mut self) -> bool {
        let Some(id) = self.view.selected().map(str::to_string) else {
            return false;
        };
        self.view.clear_selection();
        self.scene.remove_furniture_item(&id).is_some()
    }

    /// Copy the selected item half a meter along x
    pub fn duplicate_selected(&mut self) -> Option<FurnitureId> {
        let mut copy = self.selected_item()?.clone();
        copy.id = catalog::new_item_id();
        copy.name = format!("{} copy", copy.name);
        copy.position.x += 0.5;
        Some(self.add_item(copy))
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view.set_view_mode(mode, &mut self.scene);
    }

    pub fn toggle_view_mode(&mut self) {
        self.set_view_mode(self.view.mode().toggled());
    }

    /// Replace room dimensions, floor type and shape
    pub fn apply_room_template(&mut self, template: &RoomTemplate) {
        tracing::info!("Applying room template '{}'", template.id);
        self.scene.set_room_dimensions(template.dimensions);
        self.scene.set_room_shape(template.shape);
        self.scene.set_floor_type(template.floor_type);
    }

    /// Add every item of a recommendation set, each pulled inside the room.
    /// The last one added stays selected. Unknown ids add nothing.
    pub fn apply_recommendation(&mut self, set_id: &str) -> Vec<FurnitureId> {
        let Some(set) = catalog::recommendation_set(set_id) else {
            tracing::warn!("Unknown recommendation set '{}'", set_id);
            return Vec::new();
        };
        tracing::info!("Applying recommendation set '{}' ({} items)", set.id, set.items.len());
        set.instantiate().into_iter().map(|item| self.add_item(item)).collect()
    }

    /// Start an empty design with default room settings
    pub fn new_design(&mut self) {
        self.scene = SceneState::default();
        self.design = DesignMeta::default();
        self.view.clear_selection();
        self.history.reset(self.scene.furniture());
        self.recorded_version = Some(self.scene.furniture_version());
    }

    /// Replace the whole design; history restarts from the loaded furniture
    pub fn load_design(&mut self, snapshot: &DesignSnapshot) {
        tracing::info!(
            "Loaded design '{}' ({} items)",
            snapshot.name,
            snapshot.furniture_items.len()
        );
        self.scene.load_snapshot(snapshot);
        self.design = DesignMeta {
            id: snapshot.id.clone(),
            name: snapshot.name.clone(),
            thumbnail: snapshot.thumbnail.clone(),
        };
        self.view.clear_selection();
        self.history.reset(self.scene.furniture());
        self.recorded_version = Some(self.scene.furniture_version());
    }

    /// Capture the open design for the store
    pub fn snapshot(&self) -> DesignSnapshot {
        self.scene
            .to_snapshot(&self.design.id, &self.design.name, &self.design.thumbnail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::item;
    use shared::RoomDimensions;

    fn state() -> AppState {
        AppState::with_settings(AppSettings::default())
    }

    #[test]
    fn test_initial_history_has_empty_entry() {
        let s = state();
        assert_eq!(s.history.past_len(), 1);
        assert!(!s.history.can_undo());
    }

    #[test]
    fn test_add_then_undo_clears_selection() {
        let mut s = state();
        let id = s.add_item(item("a", FurnitureKind::Chair, 0.0, 0.0));
        s.record_history();
        assert_eq!(s.view.selected(), Some(id.as_str()));
        assert!(s.undo());
        assert!(s.scene.furniture().is_empty());
        assert!(s.view.selected().is_none());
        assert!(s.redo());
        assert_eq!(s.scene.furniture().len(), 1);
    }

    #[test]
    fn test_undo_without_history() {
        let mut s = state();
        assert!(!s.undo());
        assert!(!s.redo());
    }

    #[test]
    fn test_add_pulls_item_inside() {
        let mut s = state();
        s.add_item(item("far", FurnitureKind::Table, 100.0, 0.0));
        let x = s.scene.get_furniture_item("far").unwrap().position.x;
        assert!((x - (s.scene.room().length / 2.0 - 0.5)).abs() < 1e-12);
    }

    #[test]
    fn test_recommendation_lands_inside_small_room() {
        let mut s = state();
        s.scene.set_room_dimensions(RoomDimensions::new(3.0, 2.0, 2.5));
        let ids = s.apply_recommendation("modern-living");
        assert_eq!(ids.len(), 4);
        assert_eq!(s.scene.furniture().len(), 4);
        assert_eq!(s.view.selected(), ids.last().map(String::as_str));

        let room = s.scene.room();
        for item in s.scene.furniture() {
            let half_x = ((room.length - item.dimensions.width) / 2.0).max(0.0);
            let half_z = ((room.width - item.dimensions.depth) / 2.0).max(0.0);
            assert!(item.position.x.abs() <= half_x + 1e-9, "{} escaped on x", item.name);
            assert!(item.position.z.abs() <= half_z + 1e-9, "{} escaped on z", item.name);
        }
    }

    #[test]
    fn test_unknown_recommendation_adds_nothing() {
        let mut s = state();
        assert!(s.apply_recommendation("baroque").is_empty());
        assert!(s.scene.furniture().is_empty());
    }

    #[test]
    fn test_duplicate_and_delete() {
        let mut s = state();
        s.add_item(item("a", FurnitureKind::Sofa, 0.0, 0.0));
        let copy = s.duplicate_selected().unwrap();
        assert_ne!(copy, "a");
        assert_eq!(s.scene.furniture().len(), 2);
        assert_eq!(s.view.selected(), Some(copy.as_str()));
        assert!(s.delete_selected());
        assert_eq!(s.scene.furniture().len(), 1);
        assert!(!s.delete_selected());
    }

    #[test]
    fn test_load_design_resets_history() {
        let mut s = state();
        s.add_item(item("a", FurnitureKind::Chair, 0.0, 0.0));
        s.record_history();
        let snap = s.snapshot();
        let mut other = state();
        other.load_design(&snap);
        assert_eq!(other.scene.furniture().len(), 1);
        assert_eq!(other.design.id, snap.id);
        assert!(!other.history.can_undo());
        other.record_history();
        assert!(!other.history.can_undo());
    }

    #[test]
    fn test_export_stem() {
        let meta = DesignMeta {
            name: "My Living Room".into(),
            ..Default::default()
        };
        assert_eq!(meta.export_stem(), "my-living-room");
    }

    #[test]
    fn test_room_template_does_not_touch_history() {
        let mut s = state();
        let template = catalog::room_template("bedroom").unwrap();
        s.apply_room_template(template);
        s.record_history();
        assert_eq!(s.scene.room().length, 4.8);
        assert_eq!(s.scene.appearance().floor_type, shared::FloorType::Carpet);
        assert!(!s.history.can_undo());
    }
}
