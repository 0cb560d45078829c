//! Application menu bar and settings window

use eframe::egui;
use shared::{RoomShape, ViewMode};

use super::session::{CaptureTarget, Session};
use crate::catalog;
use crate::export;
use crate::state::scene::{read_snapshot_file, write_snapshot_file};
use crate::state::settings::AppSettings;
use crate::state::AppState;
use crate::ui::toolbar;
use crate::viewport::ViewportPanel;

/// Show the file menu
pub fn file_menu(ui: &mut egui::Ui, state: &mut AppState, session: &mut Session) {
    ui.menu_button("File", |ui| {
        if ui.button("New Design").clicked() {
            state.new_design();
            ui.close_menu();
        }
        if ui.button("Open…").clicked() {
            ui.close_menu();
            if let Some(path) = rfd::FileDialog::new()
                .set_title("Open Design")
                .add_filter("JSON", &["json"])
                .pick_file()
            {
                match read_snapshot_file(&path) {
                    Ok(snapshot) => {
                        state.load_design(&snapshot);
                        tracing::info!("Loaded design from {}", path.display());
                    }
                    Err(e) => session.report_error(ui.ctx(), format!("Failed to open design: {e}")),
                }
            }
        }
        if ui
            .add_enabled(session.store.is_some(), egui::Button::new("Designs…"))
            .clicked()
        {
            session.show_designs = true;
            ui.close_menu();
        }
        ui.separator();
        if ui
            .add_enabled(session.store.is_some(), egui::Button::new("Save"))
            .clicked()
        {
            ui.close_menu();
            session.save_design(ui.ctx(), state);
        }
        if ui.button("Save As…").clicked() {
            ui.close_menu();
            if let Some(path) = rfd::FileDialog::new()
                .set_title("Save Design")
                .add_filter("JSON", &["json"])
                .set_file_name(format!("{}.json", state.design.export_stem()))
                .save_file()
            {
                match write_snapshot_file(&path, &state.snapshot()) {
                    Ok(()) => tracing::info!("Saved design to {}", path.display()),
                    Err(e) => session.report_error(ui.ctx(), format!("Failed to save design: {e}")),
                }
            }
        }
        ui.separator();
        if ui.button("Export Image…").clicked() {
            ui.close_menu();
            if let Some(path) = rfd::FileDialog::new()
                .set_title("Export Image")
                .add_filter("PNG", &["png"])
                .set_file_name(export::export_file_name(&state.design.export_stem()))
                .save_file()
            {
                session.request_capture(CaptureTarget::Export(path));
            }
        }
        ui.separator();
        if ui.button("Quit").clicked() {
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

/// Show the edit menu
pub fn edit_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button("Edit", |ui| {
        if ui
            .add_enabled(state.history.can_undo(), egui::Button::new("Undo"))
            .clicked()
        {
            toolbar::action_undo(state);
            ui.close_menu();
        }
        if ui
            .add_enabled(state.history.can_redo(), egui::Button::new("Redo"))
            .clicked()
        {
            toolbar::action_redo(state);
            ui.close_menu();
        }
        ui.separator();
        let has_selection = state.selected_item().is_some();
        if ui
            .add_enabled(has_selection, egui::Button::new("Duplicate"))
            .clicked()
        {
            toolbar::action_duplicate(state);
            ui.close_menu();
        }
        if ui
            .add_enabled(has_selection, egui::Button::new("Delete"))
            .clicked()
        {
            toolbar::action_delete(state);
            ui.close_menu();
        }
        if ui
            .add_enabled(has_selection, egui::Button::new("Deselect"))
            .clicked()
        {
            state.view.clear_selection();
            ui.close_menu();
        }
        ui.separator();
        if ui.button("Fit Furniture into Room").clicked() {
            toolbar::action_fit_furniture(state);
            ui.close_menu();
        }
        if ui.button("Place All on Floor").clicked() {
            let moved = state.scene.flatten_furniture();
            tracing::info!("Placed {moved} items on the floor");
            ui.close_menu();
        }
    });
}

/// Show the view menu
pub fn view_menu(ui: &mut egui::Ui, state: &mut AppState, viewport: &mut ViewportPanel) {
    ui.menu_button("View", |ui| {
        let mode = state.view.mode();
        if ui.radio(mode == ViewMode::TwoD, "Floor Plan (2D)").clicked() {
            state.set_view_mode(ViewMode::TwoD);
            ui.close_menu();
        }
        if ui.radio(mode == ViewMode::ThreeD, "Room (3D)").clicked() {
            state.set_view_mode(ViewMode::ThreeD);
            ui.close_menu();
        }
        ui.separator();
        ui.checkbox(&mut state.panels.catalog, "Catalog");
        ui.checkbox(&mut state.panels.properties, "Properties");
        ui.checkbox(&mut state.panels.layers, "Layers");
        ui.checkbox(&mut state.settings.ui.show_status_bar, "Status Bar");
        ui.separator();
        ui.checkbox(&mut state.preview_mode, "Preview Mode");
        ui.checkbox(&mut state.rotation_locked, "Lock Rotation");
        if ui.button("Reset Camera").clicked() {
            viewport.reset_camera(state.settings.viewport.fov_degrees);
            ui.close_menu();
        }
    });
}

/// Show the room menu
pub fn room_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button("Room", |ui| {
        ui.label("Templates");
        for template in catalog::room_templates() {
            if ui.button(format!("  {}", template.name)).clicked() {
                state.apply_room_template(template);
                ui.close_menu();
            }
        }
        ui.separator();
        ui.label("Shape");
        let current = state.scene.shape();
        for shape in RoomShape::ALL {
            if ui.radio(current == shape, shape.label()).clicked() {
                state.scene.set_room_shape(shape);
                ui.close_menu();
            }
        }
    });
}

/// Show the settings menu
pub fn settings_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button("Settings", |ui| {
        if ui.button("Preferences…").clicked() {
            state.show_settings_window = true;
            ui.close_menu();
        }
    });
}

/// Show the settings window
pub fn settings_window(ctx: &egui::Context, state: &mut AppState) {
    let mut open = state.show_settings_window;
    egui::Window::new("Settings")
        .open(&mut open)
        .resizable(true)
        .default_width(380.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                show_plan_settings(ui, state);
                show_viewport_settings(ui, state);
                show_history_settings(ui, state);
                show_ui_settings(ui, state);
                show_settings_buttons(ui, state);
            });
        });
    state.show_settings_window = open && state.show_settings_window;
}

fn show_plan_settings(ui: &mut egui::Ui, state: &mut AppState) {
    let plan = &mut state.settings.plan;
    ui.heading("Floor Plan");
    ui.horizontal(|ui| {
        ui.label("Grid step:");
        ui.add(
            egui::DragValue::new(&mut plan.grid_step)
                .speed(0.05)
                .range(0.1..=5.0)
                .suffix(" m"),
        );
    });
    ui.horizontal(|ui| {
        ui.label("Fit padding:");
        ui.add(
            egui::DragValue::new(&mut plan.fit_padding)
                .speed(1.0)
                .range(0.0..=300.0)
                .suffix(" px"),
        );
    });
    ui.horizontal(|ui| {
        ui.label("Zoom per notch:");
        ui.add(
            egui::DragValue::new(&mut plan.zoom_factor)
                .speed(0.01)
                .range(1.01..=2.0),
        );
    });
    ui.horizontal(|ui| {
        ui.label("Zoom range:");
        ui.add(
            egui::DragValue::new(&mut plan.min_scale)
                .speed(1.0)
                .range(1.0..=plan.max_scale)
                .suffix(" px/m"),
        );
        ui.label("to");
        ui.add(
            egui::DragValue::new(&mut plan.max_scale)
                .speed(1.0)
                .range(plan.min_scale..=2000.0)
                .suffix(" px/m"),
        );
    });
    ui.checkbox(&mut plan.show_compass, "Show compass");
    ui.add_space(10.0);
}

fn show_viewport_settings(ui: &mut egui::Ui, state: &mut AppState) {
    let viewport = &mut state.settings.viewport;
    ui.heading("3D View");
    ui.horizontal(|ui| {
        ui.label("Background:");
        let mut color = egui::Color32::from_rgb(
            viewport.background_color[0],
            viewport.background_color[1],
            viewport.background_color[2],
        );
        if ui.color_edit_button_srgba(&mut color).changed() {
            viewport.background_color = [color.r(), color.g(), color.b()];
        }
    });

    ui.horizontal(|ui| {
        ui.label("Selection:");
        let mut color = egui::Color32::from_rgb(
            viewport.selection_color[0],
            viewport.selection_color[1],
            viewport.selection_color[2],
        );
        if ui.color_edit_button_srgba(&mut color).changed() {
            viewport.selection_color = [color.r(), color.g(), color.b()];
        }
    });

    ui.horizontal(|ui| {
        ui.label("Grid:");
        let [r, g, b, a] = viewport.grid_color;
        let mut color = egui::Color32::from_rgba_unmultiplied(r, g, b, a);
        if ui.color_edit_button_srgba(&mut color).changed() {
            viewport.grid_color = color.to_srgba_unmultiplied();
        }
    });

    ui.horizontal(|ui| {
        ui.label("Field of view:");
        ui.add(
            egui::DragValue::new(&mut viewport.fov_degrees)
                .speed(0.5)
                .range(20.0..=100.0)
                .suffix("°"),
        );
    });
    ui.add_space(10.0);
}

fn show_history_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("History");
    ui.horizontal(|ui| {
        ui.label("Undo steps:");
        let response = ui.add(
            egui::DragValue::new(&mut state.settings.history.limit)
                .speed(1.0)
                .range(0..=1000),
        );
        if response.changed() {
            state.history.set_limit(state.settings.history.limit);
        }
    });
    ui.label(
        egui::RichText::new("0 keeps every step")
            .small()
            .color(ui.visuals().weak_text_color()),
    );
    ui.add_space(10.0);
}

fn show_ui_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Interface");
    ui.horizontal(|ui| {
        ui.label("Font size:");
        ui.add(
            egui::DragValue::new(&mut state.settings.ui.font_size)
                .speed(0.5)
                .range(8.0..=24.0)
                .suffix(" pt"),
        );
    });
    ui.checkbox(&mut state.settings.ui.show_status_bar, "Show status bar");
    ui.add_space(10.0);
}

fn show_settings_buttons(ui: &mut egui::Ui, state: &mut AppState) {
    ui.separator();
    ui.horizontal(|ui| {
        if ui.button("Apply").clicked() {
            state.settings.save();
        }
        if ui.button("Reset").clicked() {
            state.settings = AppSettings::default();
            state.history.set_limit(state.settings.history.limit);
        }
        if ui.button("Close").clicked() {
            state.show_settings_window = false;
        }
    });
}
