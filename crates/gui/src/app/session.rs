//! Design persistence and screen capture bookkeeping for the running app

use std::path::PathBuf;
use std::sync::Arc;

use eframe::egui;

use crate::export;
use crate::state::scene::{DesignStore, FileDesignStore};
use crate::state::AppState;

/// What the next screenshot is for
#[derive(Debug, Clone, PartialEq)]
pub enum CaptureTarget {
    /// PNG export of the active view
    Export(PathBuf),
    /// Store thumbnail for the open design
    Thumbnail,
}

/// Transient message shown in the status bar
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
    /// `ctx.input(|i| i.time)` when it was posted
    pub posted_at: f64,
}

const STATUS_SECONDS: f64 = 4.0;

/// Everything outside `AppState` that the menus act on
pub struct Session {
    pub store: Option<FileDesignStore>,
    pub show_designs: bool,
    capture: Option<CaptureTarget>,
    capture_requested: bool,
    status: Option<StatusMessage>,
}

impl Session {
    pub fn new() -> Self {
        let store = match FileDesignStore::open_default() {
            Ok(store) => {
                tracing::info!("Design store at {}", store.root().display());
                Some(store)
            }
            Err(e) => {
                tracing::warn!("Design store unavailable: {e}");
                None
            }
        };
        Self {
            store,
            show_designs: false,
            capture: None,
            capture_requested: false,
            status: None,
        }
    }

    pub fn notify(&mut self, ctx: &egui::Context, text: impl Into<String>) {
        self.post(ctx, text.into(), false);
    }

    pub fn report_error(&mut self, ctx: &egui::Context, text: impl Into<String>) {
        let text = text.into();
        tracing::error!("{text}");
        self.post(ctx, text, true);
    }

    fn post(&mut self, ctx: &egui::Context, text: String, is_error: bool) {
        let posted_at = ctx.input(|i| i.time);
        self.status = Some(StatusMessage {
            text,
            is_error,
            posted_at,
        });
    }

    /// Current status message, dropped once it has been visible long enough
    pub fn status(&mut self, now: f64) -> Option<&StatusMessage> {
        if self
            .status
            .as_ref()
            .is_some_and(|s| now - s.posted_at > STATUS_SECONDS)
        {
            self.status = None;
        }
        self.status.as_ref()
    }

    /// Save the open design to the store and schedule a thumbnail capture
    pub fn save_design(&mut self, ctx: &egui::Context, state: &mut AppState) {
        let Some(store) = self.store.as_mut() else {
            self.report_error(ctx, "No design store available");
            return;
        };
        let thumbnail = store.thumbnail_path(&state.design.id);
        state.design.thumbnail = thumbnail.to_string_lossy().into_owned();
        match store.put(&state.snapshot()) {
            Ok(()) => {
                let name = state.design.name.clone();
                self.notify(ctx, format!("Saved '{name}'"));
                self.request_capture(CaptureTarget::Thumbnail);
            }
            Err(e) => self.report_error(ctx, format!("Save failed: {e}")),
        }
    }

    /// Save without UI feedback (on exit)
    pub fn autosave(&mut self, state: &AppState) {
        let Some(store) = self.store.as_mut() else {
            return;
        };
        if state.scene.furniture().is_empty() && state.design.thumbnail.is_empty() {
            // Never-saved empty design
            return;
        }
        if let Err(e) = store.put(&state.snapshot()) {
            tracing::warn!("Autosave failed: {e}");
        }
    }

    pub fn open_design(&mut self, ctx: &egui::Context, state: &mut AppState, id: &str) {
        let Some(store) = self.store.as_ref() else {
            return;
        };
        match store.get(id) {
            Ok(snapshot) => {
                state.load_design(&snapshot);
                self.notify(ctx, format!("Opened '{}'", snapshot.name));
            }
            Err(e) => self.report_error(ctx, format!("Open failed: {e}")),
        }
    }

    pub fn delete_design(&mut self, ctx: &egui::Context, id: &str) {
        let Some(store) = self.store.as_mut() else {
            return;
        };
        match store.delete(id) {
            Ok(()) => self.notify(ctx, "Design deleted"),
            Err(e) => self.report_error(ctx, format!("Delete failed: {e}")),
        }
    }

    pub fn request_capture(&mut self, target: CaptureTarget) {
        self.capture = Some(target);
        self.capture_requested = false;
    }

    /// Ask the backend for a screenshot once per pending capture
    pub fn poll_capture_request(&mut self, ctx: &egui::Context) {
        if self.capture.is_some() && !self.capture_requested {
            ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::default()));
            self.capture_requested = true;
        }
    }

    /// Write a delivered screenshot, cropped to `view_rect`
    pub fn handle_screenshot(
        &mut self,
        ctx: &egui::Context,
        state: &AppState,
        image: &Arc<egui::ColorImage>,
        view_rect: Option<egui::Rect>,
    ) {
        let Some(target) = self.capture.take() else {
            return;
        };
        self.capture_requested = false;
        let ppp = ctx.pixels_per_point();
        let cropped = match view_rect {
            Some(rect) => export::crop(image, rect, ppp),
            None => (**image).clone(),
        };

        match target {
            CaptureTarget::Export(path) => match export::save_png(&cropped, &path) {
                Ok(()) => self.notify(ctx, format!("Exported {}", path.display())),
                Err(e) => self.report_error(ctx, format!("Export failed: {e}")),
            },
            CaptureTarget::Thumbnail => {
                if state.design.thumbnail.is_empty() {
                    return;
                }
                let path = PathBuf::from(&state.design.thumbnail);
                match export::save_thumbnail(&cropped, &path) {
                    Ok(()) => {
                        let uri = format!("file://{}", path.display());
                        ctx.forget_image(&uri);
                    }
                    Err(e) => tracing::warn!("Thumbnail capture failed: {e}"),
                }
            }
        }
    }
}
