//! Application style configuration

use eframe::egui;

/// Configure initial application styles with given font size
pub fn configure_styles(ctx: &egui::Context, font_size: f32) {
    let mut style = (*ctx.style()).clone();

    // Warm light theme
    style.visuals = egui::Visuals::light();

    // Rounding
    style.visuals.window_corner_radius = egui::CornerRadius::same(6);
    style.visuals.menu_corner_radius = egui::CornerRadius::same(4);
    style.visuals.widgets.noninteractive.corner_radius = egui::CornerRadius::same(3);
    style.visuals.widgets.inactive.corner_radius = egui::CornerRadius::same(3);
    style.visuals.widgets.hovered.corner_radius = egui::CornerRadius::same(3);
    style.visuals.widgets.active.corner_radius = egui::CornerRadius::same(3);

    // Spacing
    style.spacing.item_spacing = egui::vec2(6.0, 4.0);
    style.spacing.button_padding = egui::vec2(6.0, 3.0);
    style.spacing.menu_margin = egui::Margin::same(4);

    style.visuals.panel_fill = egui::Color32::from_rgb(246, 243, 238);
    style.visuals.window_fill = egui::Color32::from_rgb(250, 248, 245);
    style.visuals.extreme_bg_color = egui::Color32::from_rgb(255, 253, 250);

    // Selection highlight
    style.visuals.selection.bg_fill = egui::Color32::from_rgb(196, 160, 120);
    style.visuals.selection.stroke = egui::Stroke::new(1.0, egui::Color32::from_rgb(90, 60, 30));

    apply_text_styles(&mut style, font_size);

    ctx.set_style(style);
}

/// Apply font size to all text styles
pub fn apply_font_size(ctx: &egui::Context, font_size: f32) {
    let mut style = (*ctx.style()).clone();
    apply_text_styles(&mut style, font_size);
    ctx.set_style(style);
}

fn apply_text_styles(style: &mut egui::Style, font_size: f32) {
    for (text_style, size) in [
        (egui::TextStyle::Body, font_size),
        (egui::TextStyle::Button, font_size),
        (egui::TextStyle::Small, font_size * 0.85),
        (egui::TextStyle::Heading, font_size * 1.3),
    ] {
        style.text_styles.insert(text_style, egui::FontId::proportional(size));
    }
    style.text_styles.insert(
        egui::TextStyle::Monospace,
        egui::FontId::monospace(font_size),
    );
}
