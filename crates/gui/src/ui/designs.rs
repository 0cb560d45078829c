//! Saved-designs browser window

use eframe::egui;
use shared::DesignSnapshot;

use crate::app::Session;
use crate::state::scene::DesignStore;
use crate::state::AppState;

/// What the user picked in the browser
pub enum DesignAction {
    Open(String),
    Delete(String),
    Refresh,
}

/// Cached listing of the store
#[derive(Default)]
pub struct DesignBrowser {
    entries: Option<Vec<DesignSnapshot>>,
    filter: String,
}

impl DesignBrowser {
    pub fn invalidate(&mut self) {
        self.entries = None;
    }

    fn entries(&mut self, session: &Session) -> &[DesignSnapshot] {
        self.entries.get_or_insert_with(|| {
            let Some(store) = session.store.as_ref() else {
                return Vec::new();
            };
            match store.list() {
                Ok(list) => list,
                Err(e) => {
                    tracing::error!("Failed to list designs: {e}");
                    Vec::new()
                }
            }
        })
    }

    pub fn show(
        &mut self,
        ctx: &egui::Context,
        open: &mut bool,
        session: &Session,
    ) -> Option<DesignAction> {
        let mut action = None;
        egui::Window::new("Saved Designs")
            .open(open)
            .resizable(true)
            .default_width(520.0)
            .default_height(420.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut self.filter)
                            .hint_text("🔍 Filter by name")
                            .desired_width(220.0),
                    );
                    if ui.button("⟳ Refresh").clicked() {
                        action = Some(DesignAction::Refresh);
                    }
                });
                ui.separator();

                let filter = self.filter.trim().to_lowercase();
                let entries = self.entries(session);
                let visible: Vec<&DesignSnapshot> = entries
                    .iter()
                    .filter(|d| filter.is_empty() || d.name.to_lowercase().contains(&filter))
                    .collect();
                if visible.is_empty() {
                    ui.add_space(20.0);
                    ui.vertical_centered(|ui| {
                        ui.weak("No saved designs");
                    });
                    return;
                }

                egui::ScrollArea::vertical().show(ui, |ui| {
                    for design in visible {
                        if let Some(a) = design_row(ui, design) {
                            action = Some(a);
                        }
                        ui.separator();
                    }
                });
            });
        action
    }
}

fn design_row(ui: &mut egui::Ui, design: &DesignSnapshot) -> Option<DesignAction> {
    let mut action = None;
    ui.horizontal(|ui| {
        let size = egui::vec2(96.0, 72.0);
        if design.thumbnail.is_empty() || !std::path::Path::new(&design.thumbnail).exists() {
            let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
            ui.painter()
                .rect_filled(rect, 4.0, ui.visuals().extreme_bg_color);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "No preview",
                egui::FontId::proportional(10.0),
                ui.visuals().weak_text_color(),
            );
        } else {
            ui.add(
                egui::Image::new(format!("file://{}", design.thumbnail))
                    .fit_to_exact_size(size)
                    .corner_radius(4),
            );
        }

        ui.vertical(|ui| {
            ui.strong(&design.name);
            let room = design.room_dimensions;
            ui.weak(format!(
                "{:.1} × {:.1} m · {} items",
                room.length,
                room.width,
                design.furniture_items.len()
            ));
            ui.weak(format!(
                "Edited {}",
                design.last_edited.format("%Y-%m-%d %H:%M")
            ));
            ui.horizontal(|ui| {
                if ui.button("Open").clicked() {
                    action = Some(DesignAction::Open(design.id.clone()));
                }
                if ui.button("Delete").clicked() {
                    action = Some(DesignAction::Delete(design.id.clone()));
                }
            });
        });
    });
    action
}

/// Carry out a browser action
pub fn apply(
    ctx: &egui::Context,
    action: DesignAction,
    state: &mut AppState,
    session: &mut Session,
    browser: &mut DesignBrowser,
) {
    match action {
        DesignAction::Open(id) => {
            session.open_design(ctx, state, &id);
            session.show_designs = false;
        }
        DesignAction::Delete(id) => {
            session.delete_design(ctx, &id);
            browser.invalidate();
        }
        DesignAction::Refresh => browser.invalidate(),
    }
}
