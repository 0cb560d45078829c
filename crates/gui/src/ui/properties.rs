//! Properties panel for the selected furniture item

use egui::Ui;
use shared::parse_numeric;
use shared::{Dimensions, FurnitureItem, FurniturePatch, Vec3};

use crate::state::scene::{parse_hex_color, short_id};
use crate::state::{item_display_name, AppState};
use crate::ui::toolbar;

const MATERIALS: [&str; 7] = ["fabric", "leather", "wood", "metal", "glass", "ceramic", "plastic"];

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Properties");
    ui.separator();

    let Some(item) = state.selected_item().cloned() else {
        ui.add_space(10.0);
        ui.vertical_centered(|ui| {
            ui.weak("Select an item");
            ui.weak("to edit its properties");
        });
        return;
    };

    ui.horizontal(|ui| {
        ui.strong(item_display_name(&item));
        ui.weak(format!("({})", item.kind.as_str()));
    });
    ui.add_space(4.0);

    if let Some(patch) = show_item_fields(ui, &item) {
        state.scene.update_furniture_item(&item.id, &patch);
        // Position edits go through the room constraint
        if patch.position.is_some() || patch.dimensions.is_some() {
            if let Some(updated) = state.scene.get_furniture_item(&item.id) {
                let (x, z) = (updated.position.x, updated.position.z);
                state.scene.move_furniture_item(&item.id, x, z);
            }
        }
    }

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui.button("Duplicate").clicked() {
            toolbar::action_duplicate(state);
        }
        if ui.button("Delete").clicked() {
            toolbar::action_delete(state);
        }
    });
}

/// Editable fields; returns a patch when something changed
fn show_item_fields(ui: &mut Ui, item: &FurnitureItem) -> Option<FurniturePatch> {
    let mut patch = FurniturePatch::default();

    egui::CollapsingHeader::new("Item")
        .id_salt("item_info")
        .default_open(true)
        .show(ui, |ui| {
            egui::Grid::new("item_props")
                .num_columns(2)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    ui.label("ID:");
                    ui.monospace(short_id(&item.id));
                    ui.end_row();

                    ui.label("Name:");
                    let mut name = item.name.clone();
                    if ui.text_edit_singleline(&mut name).changed() {
                        patch.name = Some(name);
                    }
                    ui.end_row();
                });
        });

    ui.add_space(6.0);
    egui::CollapsingHeader::new("Transform")
        .id_salt("item_transform")
        .default_open(true)
        .show(ui, |ui| {
            egui::Grid::new("item_transform_grid")
                .num_columns(2)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    let mut x = item.position.x;
                    let mut z = item.position.z;
                    ui.label("X:");
                    let dx = numeric_field(ui, "pos_x", &mut x, " m");
                    ui.end_row();
                    ui.label("Z:");
                    let dz = numeric_field(ui, "pos_z", &mut z, " m");
                    ui.end_row();
                    if dx || dz {
                        patch.position = Some(Vec3::new(x, item.position.y, z));
                    }

                    let mut yaw = item.yaw();
                    ui.label("Rotation:");
                    if ui
                        .add(
                            egui::DragValue::new(&mut yaw)
                                .speed(1.0)
                                .range(-360.0..=360.0)
                                .suffix("°"),
                        )
                        .changed()
                    {
                        patch.rotation = Some(Vec3::new(item.rotation.x, yaw, item.rotation.z));
                    }
                    ui.end_row();
                });
        });

    ui.add_space(6.0);
    egui::CollapsingHeader::new("Dimensions")
        .id_salt("item_dims")
        .default_open(true)
        .show(ui, |ui| {
            egui::Grid::new("item_dims_grid")
                .num_columns(2)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    let mut d = item.dimensions;
                    ui.label("Width:");
                    let w = numeric_field(ui, "dim_w", &mut d.width, " m");
                    ui.end_row();
                    ui.label("Depth:");
                    let dp = numeric_field(ui, "dim_d", &mut d.depth, " m");
                    ui.end_row();
                    ui.label("Height:");
                    let h = numeric_field(ui, "dim_h", &mut d.height, " m");
                    ui.end_row();
                    if (w || dp || h) && positive(&d) {
                        patch.dimensions = Some(d);
                    }
                });
        });

    ui.add_space(6.0);
    egui::CollapsingHeader::new("Appearance")
        .id_salt("item_look")
        .default_open(true)
        .show(ui, |ui| {
            egui::Grid::new("item_look_grid")
                .num_columns(2)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    ui.label("Color:");
                    if let Some(color) = color_field(ui, &item.color) {
                        patch.color = Some(color);
                    }
                    ui.end_row();

                    ui.label("Material:");
                    let mut material = item.material.clone();
                    egui::ComboBox::from_id_salt("material_combo")
                        .selected_text(&material)
                        .show_ui(ui, |ui| {
                            for m in MATERIALS {
                                ui.selectable_value(&mut material, m.to_string(), m);
                            }
                        });
                    if material != item.material {
                        patch.material = Some(material);
                    }
                    ui.end_row();
                });
        });

    let changed = patch.name.is_some()
        || patch.position.is_some()
        || patch.dimensions.is_some()
        || patch.rotation.is_some()
        || patch.color.is_some()
        || patch.material.is_some();
    changed.then_some(patch)
}

fn positive(d: &Dimensions) -> bool {
    d.width > 0.0 && d.depth > 0.0 && d.height > 0.0
}

/// Text field accepting numbers or simple expressions ("1.2*2").
/// The edit buffer lives in egui memory so partial input survives frames.
pub fn numeric_field(ui: &mut Ui, salt: &str, value: &mut f64, suffix: &str) -> bool {
    let id = ui.make_persistent_id(salt);
    let mut text = ui
        .data_mut(|d| d.get_temp::<String>(id))
        .unwrap_or_else(|| format!("{:.2}", value));

    let response = ui
        .horizontal(|ui| {
            let response = ui.add(egui::TextEdit::singleline(&mut text).desired_width(80.0));
            ui.label(suffix.trim());
            response
        })
        .inner;

    if response.has_focus() {
        ui.data_mut(|d| d.insert_temp(id, text.clone()));
        return false;
    }
    ui.data_mut(|d| d.remove::<String>(id));
    if !response.lost_focus() {
        return false;
    }
    match parse_numeric(&text) {
        Some(v) if v.is_finite() && (v - *value).abs() > 1e-9 => {
            *value = v;
            true
        }
        Some(_) => false,
        None => {
            tracing::debug!("Ignoring non-numeric input '{text}'");
            false
        }
    }
}

/// Hex colour picker; returns the new "#rrggbb" when edited
pub fn color_field(ui: &mut Ui, hex: &str) -> Option<String> {
    let [r, g, b] = parse_hex_color(hex).unwrap_or([128, 128, 128]);
    let mut color = egui::Color32::from_rgb(r, g, b);
    if ui.color_edit_button_srgba(&mut color).changed() {
        Some(format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b()))
    } else {
        None
    }
}
