//! JSON command protocol for scripted editing.
//!
//! Each command runs on an [`EditorHarness`] and answers with a
//! [`CommandResponse`].

use serde::{Deserialize, Serialize};
use shared::{FurnitureKind, RoomDimensions, ViewMode};

use crate::harness::EditorHarness;
use crate::state::item_display_name;

/// A command a script can execute.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum EditorCommand {
    /// Add a catalog template by name, or a generic item of `kind`
    AddItem {
        #[serde(default)]
        template: Option<String>,
        #[serde(default)]
        kind: Option<String>,
        #[serde(default)]
        x: f64,
        #[serde(default)]
        z: f64,
    },
    /// Move an item (clamped to the room)
    MoveItem { id: String, x: f64, z: f64 },
    /// Set an item's yaw in degrees
    RotateItem { id: String, yaw: f64 },
    /// Multiply an item's dimensions
    ScaleItem { id: String, factor: f64 },
    /// Remove an item
    RemoveItem { id: String },
    /// Select an item by id
    Select { id: String },
    /// Clear selection.
    ClearSelection,
    /// Undo the last edit.
    Undo,
    /// Redo the last undone edit.
    Redo,
    /// Switch between "2d" and "3d"
    SetViewMode { mode: ViewMode },
    /// Replace the room dimensions (clamped to 0.1 m)
    SetRoom {
        length: f64,
        width: f64,
        height: f64,
    },
    /// Inspect the scene: list all items.
    Inspect,
    /// Export the design as JSON.
    ExportDesign,
}

/// Response from executing a command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
            data: None,
        }
    }

    fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(msg.into()),
            data: None,
        }
    }
}

fn unknown_item(id: &str) -> CommandResponse {
    CommandResponse::err(format!("Unknown item '{id}'"))
}

/// Execute a single command on the harness.
pub fn execute_command(harness: &mut EditorHarness, cmd: EditorCommand) -> CommandResponse {
    match cmd {
        EditorCommand::AddItem { template, kind, x, z } => {
            let mut item = match (template, kind) {
                (Some(name), _) => {
                    let Some(t) = crate::catalog::furniture_templates()
                        .iter()
                        .find(|t| t.name.eq_ignore_ascii_case(&name))
                    else {
                        return CommandResponse::err(format!("Unknown template '{name}'"));
                    };
                    t.instantiate(shared::Vec3::ZERO)
                }
                (None, Some(kind)) => crate::catalog::quick_item(FurnitureKind::from(kind.as_str())),
                (None, None) => return CommandResponse::err("add_item needs a template or a kind"),
            };
            item.position = shared::Vec3::on_floor(x, z);
            let id = harness.add(item);
            let position = harness.item(&id).map(|i| [i.position.x, i.position.z]);
            CommandResponse::ok_with_data(serde_json::json!({ "id": id, "position": position }))
        }

        EditorCommand::MoveItem { id, x, z } => {
            if harness.item(&id).is_none() {
                return unknown_item(&id);
            }
            harness.move_item(&id, x, z);
            let position = harness.item(&id).map(|i| [i.position.x, i.position.z]);
            CommandResponse::ok_with_data(serde_json::json!({ "position": position }))
        }

        EditorCommand::RotateItem { id, yaw } => {
            if !yaw.is_finite() {
                return CommandResponse::err("yaw must be finite");
            }
            if harness.item(&id).is_none() {
                return unknown_item(&id);
            }
            harness.rotate_item(&id, yaw);
            CommandResponse::ok()
        }

        EditorCommand::ScaleItem { id, factor } => {
            if harness.item(&id).is_none() {
                return unknown_item(&id);
            }
            if !harness.scale_item(&id, factor) {
                return CommandResponse::err(format!("Invalid scale factor {factor}"));
            }
            let dims = harness.item(&id).map(|i| i.dimensions);
            CommandResponse::ok_with_data(serde_json::json!({ "dimensions": dims }))
        }

        EditorCommand::RemoveItem { id } => {
            if !harness.remove(&id) {
                return unknown_item(&id);
            }
            CommandResponse::ok()
        }

        EditorCommand::Select { id } => {
            if !harness.select(&id) {
                return unknown_item(&id);
            }
            CommandResponse::ok_with_data(serde_json::json!({ "selected": id }))
        }

        EditorCommand::ClearSelection => {
            harness.clear_selection();
            CommandResponse::ok()
        }

        EditorCommand::Undo => {
            let success = harness.undo();
            CommandResponse::ok_with_data(serde_json::json!({ "undone": success }))
        }

        EditorCommand::Redo => {
            let success = harness.redo();
            CommandResponse::ok_with_data(serde_json::json!({ "redone": success }))
        }

        EditorCommand::SetViewMode { mode } => {
            harness.set_view_mode(mode);
            CommandResponse::ok_with_data(serde_json::json!({ "mode": mode }))
        }

        EditorCommand::SetRoom {
            length,
            width,
            height,
        } => {
            harness.set_room(RoomDimensions::new(length, width, height));
            CommandResponse::ok_with_data(serde_json::json!({ "room": harness.state.scene.room() }))
        }

        EditorCommand::Inspect => {
            let items: Vec<serde_json::Value> = harness
                .state
                .scene
                .furniture()
                .iter()
                .map(|item| {
                    serde_json::json!({
                        "id": item.id,
                        "name": item_display_name(item),
                        "type": item.kind,
                        "position": [item.position.x, item.position.z],
                        "rotation": item.yaw(),
                        "dimensions": item.dimensions,
                    })
                })
                .collect();
            CommandResponse::ok_with_data(serde_json::json!({
                "item_count": items.len(),
                "items": items,
                "selected": harness.selected(),
                "view_mode": harness.state.view.mode(),
                "can_undo": harness.state.history.can_undo(),
                "can_redo": harness.state.history.can_redo(),
            }))
        }

        EditorCommand::ExportDesign => {
            let json = harness.export_json();
            CommandResponse::ok_with_data(serde_json::json!({ "design_json": json }))
        }
    }
}

/// Parse and execute a single JSON command string.
pub fn execute_json(harness: &mut EditorHarness, json: &str) -> Result<CommandResponse, String> {
    let cmd: EditorCommand =
        serde_json::from_str(json).map_err(|e| format!("Invalid command JSON: {e}"))?;
    Ok(execute_command(harness, cmd))
}

/// Parse and execute multiple JSON commands (array).
pub fn execute_json_batch(
    harness: &mut EditorHarness,
    json: &str,
) -> Result<Vec<CommandResponse>, String> {
    let cmds: Vec<EditorCommand> =
        serde_json::from_str(json).map_err(|e| format!("Invalid commands JSON: {e}"))?;
    Ok(cmds
        .into_iter()
        .map(|cmd| execute_command(harness, cmd))
        .collect())
}
