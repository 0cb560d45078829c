//! Layer visibility panel

use egui::Ui;

use crate::state::layers::{DECOR, FURNITURE, LIGHTING, MEASUREMENTS, WALLS_FLOOR};
use crate::state::AppState;

const BUILTIN: [&str; 5] = [WALLS_FLOOR, FURNITURE, LIGHTING, DECOR, MEASUREMENTS];

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Layers");
    ui.separator();

    let mut toggled = None;
    let mut removed = None;
    for layer in state.layers.all() {
        ui.horizontal(|ui| {
            let mut visible = layer.visible;
            if ui.checkbox(&mut visible, &layer.name).changed() {
                toggled = Some(layer.id.clone());
            }
            if !BUILTIN.contains(&layer.id.as_str()) {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("✕").on_hover_text("Remove layer").clicked() {
                        removed = Some(layer.id.clone());
                    }
                });
            }
        });
    }
    if let Some(id) = toggled {
        state.layers.toggle(&id);
    }
    if let Some(id) = removed {
        state.layers.remove(&id);
    }

    ui.add_space(4.0);
    let id = ui.make_persistent_id("new_layer_name");
    let mut name = ui.data_mut(|d| d.get_temp::<String>(id)).unwrap_or_default();
    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut name)
                .desired_width(120.0)
                .hint_text("New layer"),
        );
        let submit = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (ui.button("Add").clicked() || submit) && state.layers.add(&name).is_some() {
            name.clear();
        }
    });
    ui.data_mut(|d| d.insert_temp(id, name));
}
