//! Furniture catalog and room settings panel

use egui::Ui;
use shared::{FloorType, FurnitureKind, RoomDimensions, RoomShape, Vec3};

use crate::catalog::{self, Category};
use crate::state::AppState;
use crate::ui::properties::{color_field, numeric_field};

/// Search text and category filter, kept in egui memory between frames
#[derive(Clone, Default)]
struct CatalogFilter {
    query: String,
    category: Option<Category>,
}

pub fn show(ui: &mut Ui, state: &mut AppState) {
    show_room_section(ui, state);
    ui.add_space(6.0);
    ui.separator();
    show_furniture_section(ui, state);
    ui.add_space(6.0);
    ui.separator();
    show_recommendation_section(ui, state);
}

fn show_room_section(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Room");
    ui.separator();

    egui::ComboBox::from_id_salt("room_template")
        .selected_text("Apply template…")
        .width(ui.available_width() - 8.0)
        .show_ui(ui, |ui| {
            for template in catalog::room_templates() {
                let room = template.dimensions;
                if ui
                    .selectable_label(false, template.name)
                    .on_hover_text(format!(
                        "{:.1} × {:.1} m, {}",
                        room.length,
                        room.width,
                        template.floor_type.label()
                    ))
                    .clicked()
                {
                    state.apply_room_template(template);
                }
            }
        });
    ui.add_space(4.0);

    let mut room = state.scene.room();
    let mut changed = false;
    egui::Grid::new("room_dims")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            ui.label("Length:");
            changed |= numeric_field(ui, "room_length", &mut room.length, " m");
            ui.end_row();
            ui.label("Width:");
            changed |= numeric_field(ui, "room_width", &mut room.width, " m");
            ui.end_row();
            ui.label("Height:");
            changed |= numeric_field(ui, "room_height", &mut room.height, " m");
            ui.end_row();
        });
    if changed {
        state
            .scene
            .set_room_dimensions(RoomDimensions::new(room.length, room.width, room.height));
    }

    let mut shape = state.scene.shape();
    let mut floor_type = state.scene.appearance().floor_type;
    egui::Grid::new("room_look")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            ui.label("Shape:");
            egui::ComboBox::from_id_salt("room_shape")
                .selected_text(shape.label())
                .show_ui(ui, |ui| {
                    for s in RoomShape::ALL {
                        ui.selectable_value(&mut shape, s, s.label());
                    }
                });
            ui.end_row();

            ui.label("Floor:");
            egui::ComboBox::from_id_salt("floor_type")
                .selected_text(floor_type.label())
                .show_ui(ui, |ui| {
                    for f in FloorType::ALL {
                        ui.selectable_value(&mut floor_type, f, f.label());
                    }
                });
            ui.end_row();

            ui.label("Walls:");
            if let Some(color) = color_field(ui, &state.scene.appearance().wall_color) {
                state.scene.set_wall_color(color);
            }
            ui.end_row();

            ui.label("Floor color:");
            if let Some(color) = color_field(ui, &state.scene.appearance().floor_color) {
                state.scene.set_floor_color(color);
            }
            ui.end_row();
        });
    if shape != state.scene.shape() {
        state.scene.set_room_shape(shape);
    }
    if floor_type != state.scene.appearance().floor_type {
        state.scene.set_floor_type(floor_type);
    }
}

fn show_furniture_section(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Furniture");
    ui.separator();

    let id = ui.make_persistent_id("catalog_filter");
    let mut filter = ui
        .data_mut(|d| d.get_temp::<CatalogFilter>(id))
        .unwrap_or_default();

    ui.add(
        egui::TextEdit::singleline(&mut filter.query)
            .hint_text("🔍 Search furniture")
            .desired_width(f32::INFINITY),
    );
    ui.horizontal_wrapped(|ui| {
        ui.selectable_value(&mut filter.category, None, "All");
        for category in Category::ALL {
            ui.selectable_value(&mut filter.category, Some(category), category.label());
        }
    });
    ui.add_space(4.0);

    let matches = catalog::search(filter.category, &filter.query);
    if matches.is_empty() {
        ui.weak("No furniture matches");
    }
    for template in matches {
        let d = template.dimensions;
        let response = ui
            .add_sized(
                [ui.available_width(), 0.0],
                egui::Button::new(template.name).wrap(),
            )
            .on_hover_text(format!(
                "{:.2} × {:.2} × {:.2} m · {}",
                d.width, d.depth, d.height, template.material
            ));
        if response.clicked() {
            let id = state.add_item(template.instantiate(Vec3::ZERO));
            tracing::info!("Added '{}' as {id}", template.name);
        }
    }
    ui.data_mut(|d| d.insert_temp(id, filter));

    ui.add_space(8.0);
    ui.label("Quick add");
    ui.horizontal_wrapped(|ui| {
        for kind in FurnitureKind::BUILTIN {
            if ui
                .small_button(kind.as_str())
                .on_hover_text("Add a 1 m cube of this kind")
                .clicked()
            {
                state.quick_add(kind);
            }
        }
    });
}

fn show_recommendation_section(ui: &mut Ui, state: &mut AppState) {
    egui::CollapsingHeader::new("Recommended sets")
        .id_salt("recommendation_sets")
        .show(ui, |ui| {
            for set in catalog::recommendation_sets() {
                ui.group(|ui| {
                    ui.strong(set.name);
                    ui.weak(set.description);
                    let names: Vec<&str> = set.items.iter().map(|i| i.name).collect();
                    ui.label(names.join(", "));
                    if ui.button(format!("Add {} items", set.items.len())).clicked() {
                        state.apply_recommendation(set.id);
                    }
                });
            }
        });
}
