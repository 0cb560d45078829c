//! 2D floor plan panel

mod painter;

use egui::Ui;
use kurbo::{Point, Size};

use crate::plan::PlanView;
use crate::state::AppState;

/// Scroll distance treated as one wheel notch
const SCROLL_NOTCH: f32 = 50.0;

/// Floor plan canvas with pan/zoom and item gestures
#[derive(Default)]
pub struct FloorPlanPanel {
    view: PlanView,
    /// Screen rectangle of the last frame, used to crop screenshots
    last_rect: Option<egui::Rect>,
}

impl FloorPlanPanel {
    pub fn rect(&self) -> Option<egui::Rect> {
        self.last_rect
    }

    pub fn show(&mut self, ui: &mut Ui, state: &mut AppState) {
        let (rect, response) = ui.allocate_exact_size(
            ui.available_size(),
            egui::Sense::click_and_drag(),
        );
        self.last_rect = Some(rect);

        let canvas = Size::new(rect.width() as f64, rect.height() as f64);
        self.view.prepare(
            canvas,
            &state.scene.room(),
            state.settings.plan.fit_padding as f64,
        );

        self.handle_pointer(&response, ui, rect, state);
        self.view.push(state);

        if !ui.is_rect_visible(rect) {
            return;
        }
        let painter = ui.painter_at(rect);
        painter::paint(&painter, rect, &self.view.transform, state);

        if response.hovered() && !self.view.interaction.is_active() {
            response.on_hover_cursor(egui::CursorIcon::Crosshair);
        }
    }

    fn handle_pointer(&mut self, response: &egui::Response, ui: &Ui, rect: egui::Rect, state: &mut AppState) {
        let to_canvas = |pos: egui::Pos2| Point::new((pos.x - rect.min.x) as f64, (pos.y - rect.min.y) as f64);
        let (pressed, released, latest, scroll) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.latest_pos(),
                i.raw_scroll_delta.y,
            )
        });

        if pressed && response.hovered() {
            if let Some(pos) = latest {
                self.view
                    .interaction
                    .pointer_down(to_canvas(pos), &self.view.transform, state);
            }
        }

        if self.view.interaction.is_active() {
            match latest {
                Some(pos) if ui.input(|i| i.pointer.primary_down()) => {
                    self.view
                        .interaction
                        .pointer_track(to_canvas(pos), &mut self.view.transform, state);
                }
                // Pointer left the window
                None => self.view.interaction.pointer_leave(),
                _ => {}
            }
        }

        if released {
            self.view.interaction.pointer_up();
        }

        if response.hovered() && scroll.abs() > 0.0 {
            if let Some(pos) = latest {
                let notches = (scroll / SCROLL_NOTCH).clamp(-3.0, 3.0) as f64;
                let notches = if notches.abs() < 1.0 { notches.signum() } else { notches.round() };
                for _ in 0..notches.abs() as usize {
                    self.view.interaction.wheel(
                        to_canvas(pos),
                        notches.signum(),
                        &mut self.view.transform,
                        state,
                    );
                }
            }
        }
    }
}
