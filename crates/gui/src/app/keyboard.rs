//! Keyboard shortcut handling

use eframe::egui;

use crate::state::{AppState, EditorTool};
use crate::ui::toolbar;

/// Handle keyboard shortcuts for the application.
/// Arrow keys belong to the 3D view and are handled there.
pub fn handle_keyboard(ctx: &egui::Context, state: &mut AppState) {
    // Don't handle shortcuts when a text field is focused
    if ctx.memory(|m| m.focused().is_some()) {
        return;
    }

    ctx.input(|i| {
        // Ctrl+Z: undo
        if i.modifiers.command && i.key_pressed(egui::Key::Z) && !i.modifiers.shift {
            toolbar::action_undo(state);
        }
        // Ctrl+Shift+Z or Ctrl+Y: redo
        if (i.modifiers.command && i.modifiers.shift && i.key_pressed(egui::Key::Z))
            || (i.modifiers.command && i.key_pressed(egui::Key::Y))
        {
            toolbar::action_redo(state);
        }
        // Escape: deselect
        if i.key_pressed(egui::Key::Escape) {
            state.view.clear_selection();
        }
        // Delete / Backspace: remove selected item
        if i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace) {
            toolbar::action_delete(state);
        }
        // Ctrl+D: duplicate
        if i.modifiers.command && i.key_pressed(egui::Key::D) {
            toolbar::action_duplicate(state);
        }
        // Tab: switch between floor plan and 3D
        if i.key_pressed(egui::Key::Tab) {
            state.toggle_view_mode();
        }

        if !i.modifiers.command {
            for tool in EditorTool::ALL {
                if i.key_pressed(tool_key(tool)) {
                    state.tool = tool;
                }
            }
        }
    });
}

fn tool_key(tool: EditorTool) -> egui::Key {
    match tool {
        EditorTool::Select => egui::Key::V,
        EditorTool::Rotate => egui::Key::R,
        EditorTool::Scale => egui::Key::S,
    }
}
