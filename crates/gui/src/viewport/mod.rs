//! 3D room view with OpenGL rendering

mod gl_renderer;
pub use roomcraft_lib::viewport::{camera, interaction, mesh, picking, scene_mesh};
mod overlays;
mod renderer;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use egui::Ui;

use crate::state::AppState;
use camera::OrbitCamera;
use gl_renderer::GlRenderer;
use interaction::{push_camera, ViewportInteraction};
use mesh::{LineMeshData, MeshData};
use scene_mesh::{selection_box, MeshCache};

/// 3D viewport panel with OpenGL rendering
pub struct ViewportPanel {
    camera: OrbitCamera,
    gl_renderer: Option<Arc<Mutex<GlRenderer>>>,
    mesh_cache: MeshCache,
    /// Snapshot of the cache handed to the paint callback
    gpu_meshes: Arc<HashMap<String, MeshData>>,
    interaction: ViewportInteraction,
    /// Screen rectangle of the last frame, used to crop screenshots
    last_rect: Option<egui::Rect>,
}

impl ViewportPanel {
    pub fn new(fov_degrees: f32) -> Self {
        Self {
            camera: OrbitCamera::new(fov_degrees),
            gl_renderer: None,
            mesh_cache: MeshCache::new(),
            gpu_meshes: Arc::new(HashMap::new()),
            interaction: ViewportInteraction::default(),
            last_rect: None,
        }
    }

    /// Initialize GL renderer (must be called with a GL context)
    pub fn init_gl(&mut self, gl: &glow::Context) {
        match GlRenderer::new(gl) {
            Ok(renderer) => self.gl_renderer = Some(Arc::new(Mutex::new(renderer))),
            Err(e) => tracing::error!("GL renderer unavailable, using software fallback: {e}"),
        }
    }

    pub fn destroy_gl(&mut self, gl: &glow::Context) {
        if let Some(renderer) = self.gl_renderer.take() {
            if let Ok(mut r) = renderer.lock() {
                r.destroy(gl);
            }
        }
    }

    pub fn reset_camera(&mut self, fov_degrees: f32) {
        self.camera = OrbitCamera::new(fov_degrees);
    }

    pub fn rect(&self) -> Option<egui::Rect> {
        self.last_rect
    }

    pub fn show(&mut self, ui: &mut Ui, state: &mut AppState) {
        let (rect, response) = ui.allocate_exact_size(
            ui.available_size(),
            egui::Sense::click_and_drag(),
        );
        self.last_rect = Some(rect);
        self.camera.fov = state.settings.viewport.fov_degrees.to_radians();

        self.handle_pointer(&response, ui, rect, state);
        self.handle_scale_keys(ui, state);

        // ── Scroll zoom ─────────────────────────────
        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll.abs() > 0.1 {
                self.camera.zoom(scroll * 0.002);
            }
        }

        push_camera(&self.camera, state);

        if self.mesh_cache.sync(&state.scene, &state.layers) {
            self.gpu_meshes = Arc::new(self.mesh_cache.meshes().clone());
        }

        if !ui.is_rect_visible(rect) {
            return;
        }

        let overlay = self.selection_lines(state);
        self.render_gl(ui, rect, state, overlay);

        let painter = ui.painter_at(rect);
        overlays::draw_selection_label(&painter, rect, &self.camera, state);
        overlays::draw_pending_scale(&painter, rect, state, self.interaction.pending_scale());
        overlays::draw_mode_badges(&painter, rect, state);
        overlays::draw_empty_hint(&painter, rect, state);
    }

    fn handle_pointer(&mut self, response: &egui::Response, ui: &Ui, rect: egui::Rect, state: &mut AppState) {
        let pointer = response.interact_pointer_pos().or_else(|| response.hover_pos());

        if response.drag_started_by(egui::PointerButton::Primary) {
            if let Some(pos) = pointer {
                let ray = self.camera.screen_ray(pos, rect);
                self.interaction.pointer_down(&ray, state);
            }
        }

        if response.dragged_by(egui::PointerButton::Primary) {
            if self.interaction.is_dragging() {
                if let Some(pos) = pointer {
                    let ray = self.camera.screen_ray(pos, rect);
                    self.interaction.pointer_move(&ray, state);
                }
            } else if self.interaction.can_orbit(state) {
                let delta = response.drag_delta();
                self.camera.rotate(delta.x * 0.5, delta.y * 0.5);
            }
        }

        if response.dragged_by(egui::PointerButton::Secondary)
            || response.dragged_by(egui::PointerButton::Middle)
        {
            let delta = response.drag_delta();
            let speed = self.camera.distance * 0.0015;
            self.camera.pan(-delta.x * speed, delta.y * speed);
        }

        if response.drag_stopped() || !ui.input(|i| i.pointer.primary_down()) {
            self.interaction.pointer_up();
        }

        if let Some(pos) = pointer {
            if response.double_clicked() {
                let ray = self.camera.screen_ray(pos, rect);
                self.interaction.double_click(&ray, state);
            } else if response.clicked() {
                let ray = self.camera.screen_ray(pos, rect);
                self.interaction.click(&ray, state);
            }
        }
    }

    /// Arrow keys step a pending scale applied when the key is released
    fn handle_scale_keys(&mut self, ui: &Ui, state: &mut AppState) {
        if ui.ctx().memory(|m| m.focused().is_some()) {
            return;
        }
        let (up, down, released) = ui.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowUp),
                i.key_pressed(egui::Key::ArrowDown),
                i.key_released(egui::Key::ArrowUp) || i.key_released(egui::Key::ArrowDown),
            )
        });
        if up {
            self.interaction.scale_key(1.0, state);
        }
        if down {
            self.interaction.scale_key(-1.0, state);
        }
        if released && self.interaction.scale_key_released(state) {
            tracing::debug!("Applied arrow-key scale");
        }
    }

    fn selection_lines(&self, state: &AppState) -> Option<LineMeshData> {
        if state.preview_mode {
            return None;
        }
        let item = state.selected_item()?;
        let c = state.settings.viewport.selection_color;
        let color = [c[0] as f32 / 255.0, c[1] as f32 / 255.0, c[2] as f32 / 255.0, 1.0];
        Some(selection_box(item, color))
    }

    fn render_gl(&self, ui: &mut Ui, rect: egui::Rect, state: &AppState, overlay: Option<LineMeshData>) {
        let Some(gl_renderer) = &self.gl_renderer else {
            // Fallback: software rendering
            renderer::paint_viewport(ui, rect, &self.camera, state, &self.gpu_meshes, overlay.as_ref());
            return;
        };

        let renderer_clone = gl_renderer.clone();
        let camera = self.camera.clone();
        let meshes = self.gpu_meshes.clone();
        let version = self.mesh_cache.version();
        let grid_color = state.settings.viewport.grid_color;
        let grid_visible = !state.preview_mode;
        let bg_color = state.settings.viewport.background_color;

        let callback = egui::PaintCallback {
            rect,
            callback: Arc::new(eframe::egui_glow::CallbackFn::new(move |info, painter| {
                let gl = painter.gl();

                let clip = info.clip_rect_in_pixels();
                let viewport = [
                    clip.left_px as f32,
                    clip.from_bottom_px as f32,
                    clip.width_px as f32,
                    clip.height_px as f32,
                ];

                let Ok(mut r) = renderer_clone.lock() else {
                    return;
                };
                let synced = r
                    .update_grid(gl, grid_color)
                    .and_then(|_| r.sync_from_meshes(gl, &meshes, version))
                    .and_then(|_| r.sync_overlay(gl, overlay.as_ref()));
                if let Err(e) = synced {
                    tracing::error!("GPU upload failed: {e}");
                    return;
                }

                let params = gl_renderer::RenderParams {
                    viewport,
                    grid_visible,
                    bg_color,
                };
                r.paint(gl, &camera, &params);
            })),
        };

        ui.painter().add(callback);
    }
}
