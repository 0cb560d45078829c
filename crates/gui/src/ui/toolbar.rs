//! Toolbar actions and UI

use egui::Ui;
use shared::ViewMode;

use crate::state::{AppState, EditorTool};

// ── Public actions (callable from menus and shortcuts too) ───

pub fn action_undo(state: &mut AppState) {
    if !state.undo() {
        tracing::debug!("Nothing to undo");
    }
}

pub fn action_redo(state: &mut AppState) {
    if !state.redo() {
        tracing::debug!("Nothing to redo");
    }
}

pub fn action_delete(state: &mut AppState) {
    if state.delete_selected() {
        tracing::info!("Deleted selected item");
    }
}

pub fn action_duplicate(state: &mut AppState) {
    if let Some(id) = state.duplicate_selected() {
        tracing::info!("Duplicated item as {id}");
    }
}

pub fn action_fit_furniture(state: &mut AppState) {
    let moved = state.scene.constrain_all_to_room();
    tracing::info!("Pulled {moved} items inside the room");
}

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        // ── View switch ──
        let mode = state.view.mode();
        for (target, label, tip) in [
            (ViewMode::TwoD, "2D Plan", "Top-down floor plan (Tab)"),
            (ViewMode::ThreeD, "3D Room", "Orbit view of the room (Tab)"),
        ] {
            if ui
                .selectable_label(mode == target, label)
                .on_hover_text(tip)
                .clicked()
            {
                state.set_view_mode(target);
            }
        }

        ui.separator();

        // ── Tools ──
        for tool in EditorTool::ALL {
            if ui
                .selectable_label(state.tool == tool, tool.label())
                .on_hover_text(format!("{} ({})", tool.label(), tool.shortcut()))
                .clicked()
            {
                state.tool = tool;
            }
        }

        ui.separator();

        // ── History ──
        if ui
            .add_enabled(state.history.can_undo(), egui::Button::new("⟲ Undo"))
            .on_hover_text("Undo (Ctrl+Z)")
            .clicked()
        {
            action_undo(state);
        }
        if ui
            .add_enabled(state.history.can_redo(), egui::Button::new("⟳ Redo"))
            .on_hover_text("Redo (Ctrl+Shift+Z)")
            .clicked()
        {
            action_redo(state);
        }

        ui.separator();

        let has_selection = state.selected_item().is_some();
        if ui
            .add_enabled(has_selection, egui::Button::new("Duplicate"))
            .on_hover_text("Duplicate selected (Ctrl+D)")
            .clicked()
        {
            action_duplicate(state);
        }
        if ui
            .add_enabled(has_selection, egui::Button::new("Delete"))
            .on_hover_text("Delete selected (Del)")
            .clicked()
        {
            action_delete(state);
        }
        if ui
            .button("Fit")
            .on_hover_text("Pull every item inside the room")
            .clicked()
        {
            action_fit_furniture(state);
        }

        // ── 3D-only toggles ──
        if mode == ViewMode::ThreeD {
            ui.separator();
            ui.toggle_value(&mut state.preview_mode, "👁 Preview")
                .on_hover_text("Hide helpers and disable editing");
            ui.toggle_value(&mut state.rotation_locked, "🔒 Lock")
                .on_hover_text("Disable orbit rotation");
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add(
                egui::TextEdit::singleline(&mut state.design.name)
                    .desired_width(180.0)
                    .hint_text("Design name"),
            );
            ui.label("Design:");
        });
    });
}
