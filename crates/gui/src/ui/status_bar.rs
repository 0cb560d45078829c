use egui::Ui;

use crate::app::StatusMessage;
use crate::state::{item_display_name, AppState};

pub fn show(ui: &mut Ui, state: &AppState, message: Option<&StatusMessage>) {
    ui.horizontal(|ui| {
        let room = state.scene.room();
        ui.weak(format!(
            "Room {:.2} × {:.2} × {:.2} m",
            room.length, room.width, room.height
        ));
        ui.separator();
        ui.weak(format!("Items: {}", state.scene.furniture().len()));
        ui.separator();

        match state.selected_item() {
            Some(item) => {
                ui.label(format!(
                    "Selected: {} at ({:.2}, {:.2})",
                    item_display_name(item),
                    item.position.x,
                    item.position.z
                ));
            }
            None => {
                ui.weak("Ready");
            }
        }

        ui.separator();
        ui.weak(format!("{} · {}", state.view.mode().label(), state.tool.label()));

        if let Some(message) = message {
            ui.separator();
            if message.is_error {
                ui.colored_label(egui::Color32::from_rgb(200, 60, 50), &message.text);
            } else {
                ui.label(&message.text);
            }
        }

        // Right-aligned zoom
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak(format!("Zoom {:.0}%", state.view.transform().scale * 100.0));
        });
    });
}
