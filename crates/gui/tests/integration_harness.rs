//! Integration tests for the headless EditorHarness.
//!
//! Drives both views through the same gesture machines the GUI uses.

use roomcraft_lib::fixtures::{item, living_room, sized_item};
use roomcraft_lib::harness::EditorHarness;
use roomcraft_lib::state::layers::{FURNITURE, LIGHTING, WALLS_FLOOR};
use roomcraft_lib::state::EditorTool;
use roomcraft_lib::viewport::scene_mesh::{FLOOR_ID, WALLS_ID};
use shared::{FurnitureKind, RoomDimensions, Vec3, ViewMode};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn harness_with_chair() -> EditorHarness {
    let mut h = EditorHarness::new();
    h.add(item("chair", FurnitureKind::Chair, 0.0, 0.0));
    h.clear_selection();
    h
}

#[test]
fn test_added_item_is_selected_and_clamped() {
    let mut h = EditorHarness::new();
    let id = h.add(item("far", FurnitureKind::Table, 40.0, -40.0));
    assert_eq!(h.selected(), Some(id.as_str()));

    let room = h.state.scene.room();
    let p = h.item(&id).unwrap().position;
    assert!(approx(p.x, room.length / 2.0 - 0.5));
    assert!(approx(p.z, -(room.width / 2.0 - 0.5)));
}

#[test]
fn test_move_is_clamped_inside_room() {
    let mut h = harness_with_chair();
    assert!(h.move_item("chair", 1.0, 0.5));
    assert!(approx(h.item("chair").unwrap().position.x, 1.0));

    h.move_item("chair", 100.0, 100.0);
    let room = h.state.scene.room();
    let p = h.item("chair").unwrap().position;
    assert!(approx(p.x, room.length / 2.0 - 0.5));
    assert!(approx(p.z, room.width / 2.0 - 0.5));
    assert!(!h.move_item("missing", 0.0, 0.0));
}

#[test]
fn test_shrinking_room_keeps_items_where_they_are() {
    let mut h = harness_with_chair();
    h.move_item("chair", 2.5, 0.0);
    h.set_room(RoomDimensions::new(3.0, 3.0, 2.5));
    // Constraint is applied on the next move, not on resize
    assert!(approx(h.item("chair").unwrap().position.x, 2.5));
    h.move_item("chair", 2.5, 0.0);
    assert!(approx(h.item("chair").unwrap().position.x, 1.0));
}

#[test]
fn test_undo_redo_cycle() {
    let mut h = EditorHarness::new();
    h.add(item("a", FurnitureKind::Chair, 0.0, 0.0));
    h.add(item("b", FurnitureKind::Sofa, 1.0, 0.0));
    assert_eq!(h.item_count(), 2);

    assert!(h.undo());
    assert_eq!(h.item_count(), 1);
    assert!(h.undo());
    assert_eq!(h.item_count(), 0);
    assert!(!h.undo());

    assert!(h.redo());
    assert!(h.redo());
    assert_eq!(h.item_count(), 2);
    assert!(!h.redo());
}

#[test]
fn test_new_edit_discards_redo() {
    let mut h = harness_with_chair();
    h.move_item("chair", 1.0, 0.0);
    assert!(h.undo());
    assert!(h.state.history.can_redo());
    h.rotate_item("chair", 30.0);
    assert!(!h.state.history.can_redo());
    assert!(!h.redo());
}

#[test]
fn test_undo_restores_selection_validity() {
    let mut h = EditorHarness::new();
    h.add(item("a", FurnitureKind::Chair, 0.0, 0.0));
    assert_eq!(h.selected(), Some("a"));
    assert!(h.undo());
    assert_eq!(h.item_count(), 0);
    assert!(h.selected().is_none());
}

#[test]
fn test_remove_clears_selection() {
    let mut h = EditorHarness::new();
    h.add(item("a", FurnitureKind::Chair, 0.0, 0.0));
    assert!(h.remove("a"));
    assert!(h.selected().is_none());
    assert!(!h.remove("a"));
}

#[test]
fn test_quick_add_uses_catalog_defaults() {
    let mut h = EditorHarness::new();
    let id = h.quick_add(FurnitureKind::Sofa);
    let sofa = h.item(&id).unwrap();
    assert_eq!(sofa.kind, FurnitureKind::Sofa);
    assert_eq!(sofa.position.y, 0.0);
    assert!(sofa.dimensions.width > 0.0);
}

// ── Floor plan gestures ───────────────────────────────────────

#[test]
fn test_plan_drag_moves_item() {
    let mut h = harness_with_chair();
    let from = h.plan_screen(0.0, 0.0);
    let to = h.plan_screen(-1.0, 1.0);
    h.plan_drag(from, to);
    assert_eq!(h.selected(), Some("chair"));
    let p = h.item("chair").unwrap().position;
    assert!(approx(p.x, -1.0));
    assert!(approx(p.z, 1.0));
    assert!(!h.plan.interaction.is_active());
}

#[test]
fn test_plan_drag_ends_when_pointer_leaves_canvas() {
    let mut h = harness_with_chair();
    let (x, y) = h.plan_screen(0.0, 0.0);
    h.plan_press(x, y);
    assert!(h.plan.interaction.is_active());

    assert!(!h.plan_move(900.0, y));
    assert!(!h.plan.interaction.is_active());
    let back = h.plan_screen(1.0, 0.0);
    assert!(!h.plan_move(back.0, back.1));
    assert!(approx(h.item("chair").unwrap().position.x, 0.0));
}

#[test]
fn test_plan_drag_on_empty_floor_pans() {
    let mut h = harness_with_chair();
    let before = h.plan.transform.offset;
    h.plan_drag((5.0, 5.0), (45.0, 25.0));
    let after = h.plan.transform.offset;
    assert!(approx(after.x - before.x, 40.0));
    assert!(approx(after.y - before.y, 20.0));
    assert!(h.selected().is_none());
    assert!(approx(h.item("chair").unwrap().position.x, 0.0));
}

#[test]
fn test_plan_wheel_zoom_is_announced_in_2d() {
    let mut h = harness_with_chair();
    h.set_view_mode(ViewMode::TwoD);
    let scale = h.plan.transform.scale;
    let version = h.state.view.transform_version();

    h.plan_wheel(400.0, 300.0, 1.0);
    assert!(approx(h.plan.transform.scale, scale * 1.1));
    assert!(h.state.view.transform_version() > version);
    assert!(approx(
        h.state.view.transform().scale,
        h.plan.transform.relative_scale()
    ));
}

#[test]
fn test_plan_rotate_tool_points_item_at_pointer() {
    let mut h = harness_with_chair();
    h.set_tool(EditorTool::Rotate);
    let center = h.plan_screen(0.0, 0.0);
    h.plan_press(center.0, center.1);
    h.plan_release();
    assert_eq!(h.selected(), Some("chair"));
    assert_eq!(h.item("chair").unwrap().yaw(), 0.0);

    let below = h.plan_screen(0.0, 1.5);
    h.plan_press(below.0, below.1);
    h.plan_release();
    assert!(approx(h.item("chair").unwrap().yaw(), 90.0));
}

#[test]
fn test_plan_scale_tool_drag() {
    let mut h = harness_with_chair();
    h.set_tool(EditorTool::Scale);
    let (x, y) = h.plan_screen(0.0, 0.0);
    // First press selects
    h.plan_press(x, y);
    h.plan_release();
    assert_eq!(h.selected(), Some("chair"));

    h.plan_press(x, y);
    assert!(h.plan_move(x, y + 50.0));
    h.plan_release();
    let dims = h.item("chair").unwrap().dimensions;
    assert!(approx(dims.width, 1.5));
    assert!(approx(dims.depth, 1.5));
    assert!(approx(dims.height, 1.5));
}

#[test]
fn test_plan_drag_records_each_changed_frame() {
    let mut h = harness_with_chair();
    let from = h.plan_screen(0.0, 0.0);
    let (tx, ty) = h.plan_screen(1.0, 0.0);
    h.plan_press(from.0, from.1);
    h.plan_move((from.0 + tx) / 2.0, (from.1 + ty) / 2.0);
    h.plan_move(tx, ty);
    h.plan_release();
    assert!(approx(h.item("chair").unwrap().position.x, 1.0));

    // Each frame with a change is its own step
    assert!(h.undo());
    assert!(approx(h.item("chair").unwrap().position.x, 0.5));
}

// ── 3D gestures ───────────────────────────────────────────────

#[test]
fn test_viewport_click_selects_and_misses_clear() {
    let mut h = harness_with_chair();
    h.viewport_click(0.0, 0.0);
    assert_eq!(h.selected(), Some("chair"));
    h.viewport_click(2.5, 1.5);
    assert!(h.selected().is_none());
}

#[test]
fn test_viewport_drag_requires_selection() {
    let mut h = harness_with_chair();
    assert!(!h.viewport_drag((0.0, 0.0), (1.0, 0.5)));
    assert!(approx(h.item("chair").unwrap().position.x, 0.0));

    h.select("chair");
    assert!(h.viewport_drag((0.0, 0.0), (1.0, 0.5)));
    let p = h.item("chair").unwrap().position;
    assert!((p.x - 1.0).abs() < 1e-4);
    assert!((p.z - 0.5).abs() < 1e-4);
}

#[test]
fn test_viewport_double_click_steps_rotation() {
    let mut h = harness_with_chair();
    h.select("chair");
    assert!(!h.viewport_double_click(0.0, 0.0));

    h.set_tool(EditorTool::Rotate);
    assert!(h.viewport_double_click(0.0, 0.0));
    assert!(approx(h.item("chair").unwrap().yaw(), 15.0));
    assert!(h.viewport_double_click(0.0, 0.0));
    assert!(approx(h.item("chair").unwrap().yaw(), 30.0));
}

#[test]
fn test_double_click_keeps_negative_yaw_sign() {
    let mut h = harness_with_chair();
    h.rotate_item("chair", -165.0);
    h.select("chair");
    h.set_tool(EditorTool::Rotate);
    assert!(h.viewport_double_click(0.0, 0.0));
    assert!(approx(h.item("chair").unwrap().yaw(), -150.0));
}

#[test]
fn test_viewport_scale_keys() {
    let mut h = harness_with_chair();
    h.select("chair");
    assert!(!h.viewport_scale_keys(2));

    h.set_tool(EditorTool::Scale);
    assert!(h.viewport_scale_keys(3));
    assert!(approx(h.item("chair").unwrap().dimensions.width, 1.3));

    // Pending factor saturates at 2x
    assert!(h.viewport_scale_keys(20));
    assert!(approx(h.item("chair").unwrap().dimensions.width, 2.6));
    assert!(approx(h.viewport.pending_scale(), 1.0));
}

#[test]
fn test_preview_mode_blocks_editing() {
    let mut h = harness_with_chair();
    h.state.preview_mode = true;
    h.viewport_click(0.0, 0.0);
    assert!(h.selected().is_none());
    h.select("chair");
    assert!(!h.viewport_drag((0.0, 0.0), (1.0, 0.0)));
}

#[test]
fn test_rotation_lock_stops_orbit() {
    let mut h = EditorHarness::new();
    let version = h.state.view.transform_version();
    assert!(h.orbit(40.0, 0.0));
    assert!(h.state.view.transform_version() > version);

    h.state.rotation_locked = true;
    assert!(!h.orbit(40.0, 0.0));
}

// ── View sync ─────────────────────────────────────────────────

#[test]
fn test_entering_plan_puts_items_on_floor() {
    let mut h = EditorHarness::new();
    let mut shelf = item("shelf", FurnitureKind::Storage, 0.0, 0.0);
    shelf.position = Vec3::new(0.0, 1.2, 0.0);
    h.add(shelf);
    h.set_view_mode(ViewMode::ThreeD);
    assert!(approx(h.item("shelf").unwrap().position.y, 1.2));

    h.set_view_mode(ViewMode::TwoD);
    assert_eq!(h.state.view.mode(), ViewMode::TwoD);
    assert_eq!(h.item("shelf").unwrap().position.y, 0.0);
    assert_eq!(h.selected(), Some("shelf"));
}

#[test]
fn test_selection_survives_view_switch() {
    let mut h = harness_with_chair();
    h.viewport_click(0.0, 0.0);
    h.set_view_mode(ViewMode::TwoD);
    assert_eq!(h.selected(), Some("chair"));
    h.set_view_mode(ViewMode::ThreeD);
    assert_eq!(h.selected(), Some("chair"));
}

// ── Meshes and layers ─────────────────────────────────────────

#[test]
fn test_meshes_follow_scene_and_layers() {
    let mut h = EditorHarness::new();
    h.load_json(&serde_json::to_string(&living_room()).unwrap())
        .unwrap();
    // Floor, walls and three items
    assert_eq!(h.mesh_count(), 5);

    h.state.layers.toggle(LIGHTING);
    assert!(!h.has_mesh("lamp"));
    assert!(h.has_mesh("sofa"));

    h.state.layers.toggle(FURNITURE);
    assert_eq!(h.mesh_count(), 2);

    h.state.layers.toggle(WALLS_FLOOR);
    assert_eq!(h.mesh_count(), 0);
    assert!(!h.has_mesh(FLOOR_ID));
    assert!(!h.has_mesh(WALLS_ID));
}

#[test]
fn test_removed_item_loses_mesh() {
    let mut h = harness_with_chair();
    assert!(h.has_mesh("chair"));
    h.remove("chair");
    assert!(!h.has_mesh("chair"));
}

// ── Designs ───────────────────────────────────────────────────

#[test]
fn test_json_round_trip() {
    let mut h = EditorHarness::new();
    h.load_json(&serde_json::to_string(&living_room()).unwrap())
        .unwrap();
    h.add(sized_item("rug", FurnitureKind::Decor, 1.0, 1.0, [1.6, 1.0, 0.02]));
    let json = h.export_json();

    let mut other = EditorHarness::new();
    other.load_json(&json).unwrap();
    assert_eq!(other.item_count(), 4);
    assert_eq!(other.state.design.name, "Living Room");
    assert!(approx(other.state.scene.room().length, 6.0));
    let rug = other.item("rug").unwrap();
    assert!(approx(rug.dimensions.height, 0.02));
    assert!(!other.state.history.can_undo());
}

#[test]
fn test_bad_json_leaves_scene_alone() {
    let mut h = harness_with_chair();
    assert!(h.load_json("not json").is_err());
    assert!(h.load_json(r#"{"name": "missing fields"}"#).is_err());
    assert_eq!(h.item_count(), 1);
}

#[test]
fn test_recommendation_set_fills_room() {
    let mut h = EditorHarness::new();
    h.set_room(RoomDimensions::new(3.5, 2.5, 2.6));
    let ids = h.apply_recommendation("cozy-traditional");
    assert_eq!(ids.len(), 4);
    assert_eq!(h.item_count(), 4);

    let room = h.state.scene.room();
    for id in &ids {
        let item = h.item(id).unwrap();
        let half_x = ((room.length - item.dimensions.width) / 2.0).max(0.0);
        let half_z = ((room.width - item.dimensions.depth) / 2.0).max(0.0);
        assert!(item.position.x.abs() <= half_x + 1e-9);
        assert!(item.position.z.abs() <= half_z + 1e-9);
    }

    // One history entry per applied set
    assert!(h.undo());
    assert_eq!(h.item_count(), 0);
    assert!(h.apply_recommendation("unknown").is_empty());
}
