//! Viewport overlay drawing (item label, scale and lock indicators)

use egui::{Align2, Color32, FontId, Painter};

use crate::state::{item_display_name, AppState, EditorTool};

use super::camera::OrbitCamera;
use super::scene_mesh::label_anchor;

const BADGE_FILL: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 150);
const BADGE_TEXT: Color32 = Color32::from_rgb(235, 235, 240);

/// Name tag floating above the selected item
pub fn draw_selection_label(painter: &Painter, rect: egui::Rect, camera: &OrbitCamera, state: &AppState) {
    if state.preview_mode {
        return;
    }
    let Some(item) = state.selected_item() else {
        return;
    };
    let Some(screen) = camera.project(label_anchor(item), rect) else {
        return;
    };
    if !rect.contains(screen) {
        return;
    }
    badge(painter, screen, Align2::CENTER_BOTTOM, &item_display_name(item));
}

/// Pending arrow-key scale factor
pub fn draw_pending_scale(painter: &Painter, rect: egui::Rect, state: &AppState, pending: f64) {
    if state.tool != EditorTool::Scale || state.selected_item().is_none() {
        return;
    }
    let text = if (pending - 1.0).abs() < 1e-9 {
        "↑/↓ to scale".to_string()
    } else {
        format!("Scale ×{pending:.1}")
    };
    badge(
        painter,
        egui::pos2(rect.center().x, rect.top() + 12.0),
        Align2::CENTER_TOP,
        &text,
    );
}

/// Corner badges for rotation lock and preview mode
pub fn draw_mode_badges(painter: &Painter, rect: egui::Rect, state: &AppState) {
    let mut y = rect.top() + 8.0;
    for (on, text) in [
        (state.rotation_locked, "🔒 Rotation locked"),
        (state.preview_mode, "👁 Preview"),
    ] {
        if on {
            badge(painter, egui::pos2(rect.right() - 8.0, y), Align2::RIGHT_TOP, text);
            y += 24.0;
        }
    }
}

/// Navigation hint for an empty room
pub fn draw_empty_hint(painter: &Painter, rect: egui::Rect, state: &AppState) {
    if !state.scene.furniture().is_empty() {
        return;
    }
    painter.text(
        egui::pos2(rect.center().x, rect.bottom() - 20.0),
        Align2::CENTER_BOTTOM,
        "Add furniture from the catalog · drag to orbit · scroll to zoom",
        FontId::proportional(11.0),
        Color32::from_rgb(110, 105, 100),
    );
}

fn badge(painter: &Painter, pos: egui::Pos2, align: Align2, text: &str) {
    let galley = painter.layout_no_wrap(text.to_string(), FontId::proportional(12.0), BADGE_TEXT);
    let rect = align
        .anchor_size(pos, galley.size())
        .expand2(egui::vec2(6.0, 3.0));
    painter.rect_filled(rect, 4.0, BADGE_FILL);
    painter.galley(rect.min + egui::vec2(6.0, 3.0), galley, BADGE_TEXT);
}
