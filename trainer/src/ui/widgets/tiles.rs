//! # Dashboard Tiles

use crate::ui::theme::Theme;

/// Clickable dashboard tile; returns true when clicked
pub fn render_tile(
    ui: &mut egui::Ui,
    icon: &str,
    title: &str,
    subtitle: &str,
    enabled: bool,
    theme: &Theme,
) -> bool {
    let text_color = if enabled { theme.normal } else { theme.dim };
    let frame = egui::Frame::new()
        .fill(theme.surface)
        .stroke(egui::Stroke::new(1.0, theme.border))
        .corner_radius(10)
        .inner_margin(egui::Margin::same(12));

    let response = frame
        .show(ui, |ui| {
            ui.set_min_size(egui::vec2(150.0, 90.0));
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(icon).size(26.0));
                ui.label(egui::RichText::new(title).size(16.0).strong().color(text_color));
                ui.label(egui::RichText::new(subtitle).size(12.0).color(theme.dim));
            });
        })
        .response;

    if !enabled {
        return false;
    }
    let response = response.interact(egui::Sense::click());
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response.clicked()
}

/// Labelled progress bar
pub fn render_progress(ui: &mut egui::Ui, label: &str, fraction: f32, theme: &Theme) {
    ui.label(egui::RichText::new(label).size(13.0).color(theme.dim));
    ui.add(
        egui::ProgressBar::new(fraction)
            .text(format!("{:.0}%", fraction * 100.0))
            .fill(theme.selected),
    );
    ui.add_space(6.0);
}
