//! Headless editor harness for programmatic scene manipulation.
//!
//! Drives the same state, gestures and caches as the GUI, without egui
//! input. Every operation ends like a GUI frame does: history is recorded
//! and the active view announces its transform.

use glam::Vec3;
use kurbo::{Point, Size};
use shared::{FurnitureId, FurnitureItem, FurnitureKind, RoomDimensions, ViewMode};

use crate::catalog;
use crate::plan::PlanView;
use crate::state::{AppSettings, AppState, EditorTool};
use crate::viewport::camera::OrbitCamera;
use crate::viewport::interaction::{push_camera, ViewportInteraction};
use crate::viewport::picking::Ray;
use crate::viewport::scene_mesh::MeshCache;

/// Canvas used for floor-plan gestures
pub const CANVAS: Size = Size::new(800.0, 600.0);

/// Headless editor: state, both views' gesture machines and the mesh cache
pub struct EditorHarness {
    pub state: AppState,
    pub plan: PlanView,
    pub camera: OrbitCamera,
    pub viewport: ViewportInteraction,
    meshes: MeshCache,
}

impl EditorHarness {
    /// Create a harness with default settings (nothing read from disk)
    pub fn new() -> Self {
        Self::with_settings(AppSettings::default())
    }

    pub fn with_settings(settings: AppSettings) -> Self {
        let camera = OrbitCamera::new(settings.viewport.fov_degrees);
        let mut harness = Self {
            state: AppState::with_settings(settings),
            plan: PlanView::default(),
            camera,
            viewport: ViewportInteraction::default(),
            meshes: MeshCache::new(),
        };
        harness.frame();
        harness
    }

    /// End-of-frame bookkeeping
    pub fn frame(&mut self) {
        let padding = self.state.settings.plan.fit_padding as f64;
        let room = self.state.scene.room();
        self.plan.prepare(CANVAS, &room, padding);
        match self.state.view.mode() {
            ViewMode::TwoD => {
                self.plan.push(&mut self.state);
            }
            ViewMode::ThreeD => {
                push_camera(&self.camera, &mut self.state);
            }
        }
        self.state.record_history();
    }

    // ── Scene manipulation ────────────────────────────────────

    /// Add an item (pulled inside the room) and select it
    pub fn add(&mut self, item: FurnitureItem) -> FurnitureId {
        let id = self.state.add_item(item);
        self.frame();
        id
    }

    /// Add a catalog template by name at the room centre
    pub fn add_template(&mut self, name: &str) -> Option<FurnitureId> {
        let template = catalog::furniture_templates()
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))?;
        Some(self.add(template.instantiate(shared::Vec3::ZERO)))
    }

    pub fn apply_recommendation(&mut self, set_id: &str) -> Vec<FurnitureId> {
        let ids = self.state.apply_recommendation(set_id);
        self.frame();
        ids
    }

    pub fn quick_add(&mut self, kind: FurnitureKind) -> FurnitureId {
        let id = self.state.quick_add(kind);
        self.frame();
        id
    }

    pub fn move_item(&mut self, id: &str, x: f64, z: f64) -> bool {
        let moved = self.state.scene.move_furniture_item(id, x, z);
        self.frame();
        moved
    }

    pub fn rotate_item(&mut self, id: &str, yaw: f64) -> bool {
        let rotated = self.state.scene.set_furniture_yaw(id, yaw);
        self.frame();
        rotated
    }

    pub fn scale_item(&mut self, id: &str, factor: f64) -> bool {
        let scaled = self.state.scene.scale_furniture_item(id, factor);
        self.frame();
        scaled
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let removed = self.state.scene.remove_furniture_item(id).is_some();
        self.state.view.validate_selection(&self.state.scene);
        self.frame();
        removed
    }

    pub fn set_room(&mut self, room: RoomDimensions) {
        self.state.scene.set_room_dimensions(room);
        self.frame();
    }

    pub fn undo(&mut self) -> bool {
        let undone = self.state.undo();
        self.frame();
        undone
    }

    pub fn redo(&mut self) -> bool {
        let redone = self.state.redo();
        self.frame();
        redone
    }

    pub fn select(&mut self, id: &str) -> bool {
        if self.state.scene.get_furniture_item(id).is_none() {
            return false;
        }
        self.state.view.select(id);
        true
    }

    pub fn clear_selection(&mut self) {
        self.state.view.clear_selection();
    }

    pub fn set_tool(&mut self, tool: EditorTool) {
        self.state.tool = tool;
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.state.set_view_mode(mode);
        self.frame();
    }

    // ── Floor-plan gestures (canvas pixels) ───────────────────

    pub fn plan_press(&mut self, x: f64, y: f64) {
        let transform = self.plan.transform;
        self.plan
            .interaction
            .pointer_down(Point::new(x, y), &transform, &mut self.state);
        self.frame();
    }

    pub fn plan_move(&mut self, x: f64, y: f64) -> bool {
        let changed = self.plan.interaction.pointer_track(
            Point::new(x, y),
            &mut self.plan.transform,
            &mut self.state,
        );
        self.frame();
        changed
    }

    pub fn plan_release(&mut self) {
        self.plan.interaction.pointer_up();
        self.frame();
    }

    /// Press, move, release
    pub fn plan_drag(&mut self, from: (f64, f64), to: (f64, f64)) {
        self.plan_press(from.0, from.1);
        self.plan_move(to.0, to.1);
        self.plan_release();
    }

    pub fn plan_wheel(&mut self, x: f64, y: f64, notches: f64) {
        self.plan.interaction.wheel(
            Point::new(x, y),
            notches,
            &mut self.plan.transform,
            &self.state,
        );
        self.frame();
    }

    /// Canvas position of a world floor point
    pub fn plan_screen(&self, x: f64, z: f64) -> (f64, f64) {
        let p = self.plan.transform.world_to_screen(Point::new(x, z));
        (p.x, p.y)
    }

    // ── 3D gestures (aimed at floor points) ───────────────────

    /// Ray from the camera to the floor point (x, 0, z)
    pub fn ray_to(&self, x: f64, z: f64) -> Ray {
        let origin = self.camera.eye_position();
        let target = Vec3::new(x as f32, 0.0, z as f32);
        Ray {
            origin,
            direction: (target - origin).normalize_or_zero(),
        }
    }

    pub fn viewport_click(&mut self, x: f64, z: f64) {
        let ray = self.ray_to(x, z);
        self.viewport.click(&ray, &mut self.state);
        self.frame();
    }

    pub fn viewport_double_click(&mut self, x: f64, z: f64) -> bool {
        let ray = self.ray_to(x, z);
        let rotated = self.viewport.double_click(&ray, &mut self.state);
        self.frame();
        rotated
    }

    /// Press on (x, z), drag to (tx, tz), release. Returns whether a drag
    /// started.
    pub fn viewport_drag(&mut self, from: (f64, f64), to: (f64, f64)) -> bool {
        let started = self.viewport.pointer_down(&self.ray_to(from.0, from.1), &self.state);
        let ray = self.ray_to(to.0, to.1);
        self.viewport.pointer_move(&ray, &mut self.state);
        self.viewport.pointer_up();
        self.frame();
        started
    }

    /// Hold an arrow key for `steps` repeats (negative shrinks), then release
    pub fn viewport_scale_keys(&mut self, steps: i32) -> bool {
        let direction = f64::from(steps.signum());
        for _ in 0..steps.unsigned_abs() {
            self.viewport.scale_key(direction, &self.state);
        }
        let applied = self.viewport.scale_key_released(&mut self.state);
        self.frame();
        applied
    }

    pub fn orbit(&mut self, dx: f32, dy: f32) -> bool {
        if !self.viewport.can_orbit(&self.state) {
            return false;
        }
        self.camera.rotate(dx, dy);
        self.frame();
        true
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn item(&self, id: &str) -> Option<&FurnitureItem> {
        self.state.scene.get_furniture_item(id)
    }

    pub fn item_count(&self) -> usize {
        self.state.scene.furniture().len()
    }

    pub fn selected(&self) -> Option<&str> {
        self.state.view.selected()
    }

    /// Rebuild the 3D meshes if the scene changed and count them
    pub fn mesh_count(&mut self) -> usize {
        self.meshes.sync(&self.state.scene, &self.state.layers);
        self.meshes.meshes().len()
    }

    pub fn has_mesh(&mut self, id: &str) -> bool {
        self.meshes.sync(&self.state.scene, &self.state.layers);
        self.meshes.meshes().contains_key(id)
    }

    /// Export the open design as JSON
    pub fn export_json(&self) -> String {
        serde_json::to_string_pretty(&self.state.snapshot()).unwrap_or_default()
    }

    /// Load a design from JSON; history restarts
    pub fn load_json(&mut self, json: &str) -> Result<(), String> {
        let snapshot: shared::DesignSnapshot =
            serde_json::from_str(json).map_err(|e| format!("JSON parse error: {e}"))?;
        self.state.load_design(&snapshot);
        self.frame();
        Ok(())
    }
}

impl Default for EditorHarness {
    fn default() -> Self {
        Self::new()
    }
}
