//! Integration tests for the EditorCommand JSON protocol.
//!
//! Tests the full command pipeline: JSON string -> parse -> execute -> response.

use roomcraft_lib::command::{execute_json, execute_json_batch};
use roomcraft_lib::harness::EditorHarness;
use shared::ViewMode;

#[test]
fn test_command_add_template() {
    let mut h = EditorHarness::new();
    let json = r#"{"command": "add_item", "template": "Modern Sectional Sofa", "x": 1.0, "z": -0.5}"#;

    let resp = execute_json(&mut h, json).unwrap();
    assert!(resp.success);
    let data = resp.data.unwrap();
    let id = data["id"].as_str().unwrap().to_string();
    assert_eq!(h.item_count(), 1);
    assert_eq!(h.selected(), Some(id.as_str()));
}

#[test]
fn test_command_add_unknown_template() {
    let mut h = EditorHarness::new();
    let resp = execute_json(&mut h, r#"{"command": "add_item", "template": "Spaceship"}"#).unwrap();
    assert!(!resp.success);
    assert!(resp.error.unwrap().contains("Spaceship"));
    assert_eq!(h.item_count(), 0);
}

#[test]
fn test_command_add_needs_template_or_kind() {
    let mut h = EditorHarness::new();
    let resp = execute_json(&mut h, r#"{"command": "add_item", "x": 1.0}"#).unwrap();
    assert!(!resp.success);
}

#[test]
fn test_command_move_and_inspect() {
    let mut h = EditorHarness::new();
    let resp = execute_json(&mut h, r#"{"command": "add_item", "kind": "chair"}"#).unwrap();
    let id = resp.data.unwrap()["id"].as_str().unwrap().to_string();

    let cmd = format!(r#"{{"command": "move_item", "id": "{id}", "x": 1.5, "z": 1.0}}"#);
    let resp = execute_json(&mut h, &cmd).unwrap();
    assert!(resp.success);
    let position = &resp.data.unwrap()["position"];
    assert_eq!(position[0].as_f64(), Some(1.5));
    assert_eq!(position[1].as_f64(), Some(1.0));

    let resp = execute_json(&mut h, r#"{"command": "inspect"}"#).unwrap();
    let data = resp.data.unwrap();
    assert_eq!(data["item_count"], 1);
    assert_eq!(data["items"][0]["id"], id.as_str());
    assert_eq!(data["items"][0]["type"], "chair");
    assert_eq!(data["can_undo"], true);
    assert_eq!(data["can_redo"], false);
}

#[test]
fn test_command_rotate_and_scale() {
    let mut h = EditorHarness::new();
    let resp = execute_json(&mut h, r#"{"command": "add_item", "kind": "table"}"#).unwrap();
    let id = resp.data.unwrap()["id"].as_str().unwrap().to_string();

    let cmd = format!(r#"{{"command": "rotate_item", "id": "{id}", "yaw": 45}}"#);
    assert!(execute_json(&mut h, &cmd).unwrap().success);
    assert_eq!(h.item(&id).unwrap().yaw(), 45.0);

    let width = h.item(&id).unwrap().dimensions.width;
    let cmd = format!(r#"{{"command": "scale_item", "id": "{id}", "factor": 2}}"#);
    assert!(execute_json(&mut h, &cmd).unwrap().success);
    assert!((h.item(&id).unwrap().dimensions.width - width * 2.0).abs() < 1e-9);

    let cmd = format!(r#"{{"command": "scale_item", "id": "{id}", "factor": -1}}"#);
    let resp = execute_json(&mut h, &cmd).unwrap();
    assert!(!resp.success);
}

#[test]
fn test_command_undo_redo() {
    let mut h = EditorHarness::new();
    execute_json(&mut h, r#"{"command": "add_item", "kind": "lamp"}"#).unwrap();
    assert_eq!(h.item_count(), 1);

    let resp = execute_json(&mut h, r#"{"command": "undo"}"#).unwrap();
    assert_eq!(resp.data.unwrap()["undone"], true);
    assert_eq!(h.item_count(), 0);

    let resp = execute_json(&mut h, r#"{"command": "undo"}"#).unwrap();
    assert!(resp.success);
    assert_eq!(resp.data.unwrap()["undone"], false);

    let resp = execute_json(&mut h, r#"{"command": "redo"}"#).unwrap();
    assert_eq!(resp.data.unwrap()["redone"], true);
    assert_eq!(h.item_count(), 1);
}

#[test]
fn test_command_select_and_clear() {
    let mut h = EditorHarness::new();
    let resp = execute_json(&mut h, r#"{"command": "add_item", "kind": "sofa"}"#).unwrap();
    let id = resp.data.unwrap()["id"].as_str().unwrap().to_string();

    execute_json(&mut h, r#"{"command": "clear_selection"}"#).unwrap();
    assert!(h.selected().is_none());

    let cmd = format!(r#"{{"command": "select", "id": "{id}"}}"#);
    assert!(execute_json(&mut h, &cmd).unwrap().success);
    assert_eq!(h.selected(), Some(id.as_str()));

    let resp = execute_json(&mut h, r#"{"command": "select", "id": "nope"}"#).unwrap();
    assert!(!resp.success);
    assert_eq!(h.selected(), Some(id.as_str()));
}

#[test]
fn test_command_set_view_mode() {
    let mut h = EditorHarness::new();
    let resp = execute_json(&mut h, r#"{"command": "set_view_mode", "mode": "2d"}"#).unwrap();
    assert!(resp.success);
    assert_eq!(h.state.view.mode(), ViewMode::TwoD);

    let resp = execute_json(&mut h, r#"{"command": "inspect"}"#).unwrap();
    assert_eq!(resp.data.unwrap()["view_mode"], "2d");
}

#[test]
fn test_command_set_room_floors_dimensions() {
    let mut h = EditorHarness::new();
    let resp = execute_json(
        &mut h,
        r#"{"command": "set_room", "length": 5.0, "width": 0.0, "height": 2.4}"#,
    )
    .unwrap();
    assert!(resp.success);
    let room = h.state.scene.room();
    assert_eq!(room.length, 5.0);
    assert_eq!(room.width, 0.1);
    assert_eq!(room.height, 2.4);
}

#[test]
fn test_command_export_design() {
    let mut h = EditorHarness::new();
    execute_json(&mut h, r#"{"command": "add_item", "kind": "storage", "x": 1.0}"#).unwrap();
    let resp = execute_json(&mut h, r#"{"command": "export_design"}"#).unwrap();
    let json = resp.data.unwrap()["design_json"].as_str().unwrap().to_string();

    let mut other = EditorHarness::new();
    other.load_json(&json).unwrap();
    assert_eq!(other.item_count(), 1);
}

#[test]
fn test_command_batch() {
    let mut h = EditorHarness::new();
    let json = r#"[
        {"command": "set_room", "length": 4.0, "width": 3.0, "height": 2.5},
        {"command": "add_item", "kind": "chair", "x": 10.0},
        {"command": "add_item", "kind": "table"},
        {"command": "set_view_mode", "mode": "2d"},
        {"command": "remove_item", "id": "missing"}
    ]"#;

    let results = execute_json_batch(&mut h, json).unwrap();
    assert_eq!(results.len(), 5);
    assert!(results[..4].iter().all(|r| r.success));
    assert!(!results[4].success);
    assert_eq!(h.item_count(), 2);

    // Chair was pulled inside the 4 m room
    let x = results[1].data.as_ref().unwrap()["position"][0].as_f64().unwrap();
    assert!(x <= 2.0);
}

#[test]
fn test_command_invalid_json() {
    let mut h = EditorHarness::new();
    assert!(execute_json(&mut h, "not json").is_err());
    assert!(execute_json(&mut h, r#"{"command": "fly"}"#).is_err());
    assert!(execute_json_batch(&mut h, r#"{"command": "undo"}"#).is_err());
}
