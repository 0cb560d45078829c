//! Main application module

mod keyboard;
mod menus;
mod session;
mod styles;

use eframe::egui;
use shared::{DesignSnapshot, ViewMode};

use crate::floor_plan::FloorPlanPanel;
use crate::state::AppState;
use crate::ui::{catalog_panel, designs, layers, properties, status_bar, toolbar};
use crate::viewport::ViewportPanel;
pub use session::{Session, StatusMessage};

/// Main application
pub struct RoomcraftApp {
    state: AppState,
    viewport: ViewportPanel,
    floor_plan: FloorPlanPanel,
    session: Session,
    designs: designs::DesignBrowser,
    /// Last applied font size (to detect changes)
    last_font_size: f32,
}

impl RoomcraftApp {
    pub fn new(cc: &eframe::CreationContext<'_>, initial_design: Option<DesignSnapshot>) -> Self {
        let mut state = AppState::default();
        if let Some(snapshot) = initial_design {
            state.load_design(&snapshot);
        }

        styles::configure_styles(&cc.egui_ctx, state.settings.ui.font_size);
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let mut viewport = ViewportPanel::new(state.settings.viewport.fov_degrees);
        if let Some(gl) = cc.gl.as_ref() {
            viewport.init_gl(gl);
        }

        let last_font_size = state.settings.ui.font_size;

        Self {
            state,
            viewport,
            floor_plan: FloorPlanPanel::default(),
            session: Session::new(),
            designs: designs::DesignBrowser::default(),
            last_font_size,
        }
    }

    fn active_view_rect(&self) -> Option<egui::Rect> {
        match self.state.view.mode() {
            ViewMode::TwoD => self.floor_plan.rect(),
            ViewMode::ThreeD => self.viewport.rect(),
        }
    }

    fn handle_screenshots(&mut self, ctx: &egui::Context) {
        let shot = ctx.input(|i| {
            i.raw.events.iter().find_map(|e| match e {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        });
        if let Some(image) = shot {
            let rect = self.active_view_rect();
            self.session.handle_screenshot(ctx, &self.state, &image, rect);
        }
        self.session.poll_capture_request(ctx);
    }

    fn show_left_panel(&mut self, ctx: &egui::Context) {
        if !self.state.panels.catalog {
            return;
        }
        egui::SidePanel::left("catalog")
            .default_width(250.0)
            .width_range(200.0..=400.0)
            .resizable(true)
            .frame(egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(6)))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("catalog_scroll")
                    .show(ui, |ui| {
                        catalog_panel::show(ui, &mut self.state);
                    });
            });
    }

    fn show_right_panel(&mut self, ctx: &egui::Context) {
        let show_props = self.state.panels.properties;
        let show_layers = self.state.panels.layers;
        if !show_props && !show_layers {
            return;
        }

        egui::SidePanel::right("right_panel")
            .default_width(270.0)
            .width_range(200.0..=450.0)
            .resizable(true)
            .frame(egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(6)))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("props_scroll")
                    .show(ui, |ui| {
                        if show_props {
                            properties::show(ui, &mut self.state);
                        }
                        if show_props && show_layers {
                            ui.add_space(4.0);
                            ui.separator();
                            ui.add_space(4.0);
                        }
                        if show_layers {
                            layers::show(ui, &mut self.state);
                        }
                    });
            });
    }
}

impl eframe::App for RoomcraftApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.settings.ui.font_size != self.last_font_size {
            styles::apply_font_size(ctx, self.state.settings.ui.font_size);
            self.last_font_size = self.state.settings.ui.font_size;
        }

        self.handle_screenshots(ctx);
        keyboard::handle_keyboard(ctx, &mut self.state);

        // ── Menu bar ──────────────────────────────────────────
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                menus::file_menu(ui, &mut self.state, &mut self.session);
                menus::edit_menu(ui, &mut self.state);
                menus::view_menu(ui, &mut self.state, &mut self.viewport);
                menus::room_menu(ui, &mut self.state);
                menus::settings_menu(ui, &mut self.state);
            });
        });

        menus::settings_window(ctx, &mut self.state);

        if self.session.show_designs {
            let mut open = true;
            if let Some(action) = self.designs.show(ctx, &mut open, &self.session) {
                designs::apply(ctx, action, &mut self.state, &mut self.session, &mut self.designs);
            }
            self.session.show_designs = open && self.session.show_designs;
        } else {
            self.designs.invalidate();
        }

        // ── Toolbar ───────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .frame(egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(8, 4)))
            .show(ctx, |ui| {
                toolbar::show(ui, &mut self.state);
            });

        // ── Status bar ───────────────────────────────────────
        if self.state.settings.ui.show_status_bar {
            let now = ctx.input(|i| i.time);
            egui::TopBottomPanel::bottom("status_bar")
                .exact_height(22.0)
                .frame(egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(8, 2)))
                .show(ctx, |ui| {
                    status_bar::show(ui, &self.state, self.session.status(now));
                });
        }

        self.show_left_panel(ctx);
        self.show_right_panel(ctx);

        // ── Central panel: floor plan or 3D view ─────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| match self.state.view.mode() {
                ViewMode::TwoD => self.floor_plan.show(ui, &mut self.state),
                ViewMode::ThreeD => self.viewport.show(ui, &mut self.state),
            });

        self.state.record_history();
    }

    fn on_exit(&mut self, gl: Option<&glow::Context>) {
        self.session.autosave(&self.state);
        self.state.settings.save();
        if let Some(gl) = gl {
            self.viewport.destroy_gl(gl);
        }
    }
}
