//! # Form Components
//!
//! Reusable form elements for consistent UI across screens

use crate::ui::theme::Theme;

/// Render a labelled single-line text input
pub fn render_text_input(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    width: f32,
) -> egui::Response {
    ui.label(egui::RichText::new(label).size(14.0));
    ui.add_sized(
        [width, 30.0],
        egui::TextEdit::singleline(value).hint_text(hint),
    )
}

/// Render a labelled multi-line text input
pub fn render_text_area(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    width: f32,
) -> egui::Response {
    ui.label(egui::RichText::new(label).size(14.0));
    ui.add_sized(
        [width, 60.0],
        egui::TextEdit::multiline(value).hint_text(hint),
    )
}

/// Render a styled button with optional icon
pub fn render_button(
    ui: &mut egui::Ui,
    text: &str,
    icon: Option<&str>,
    fill_color: Option<egui::Color32>,
    enabled: bool,
) -> egui::Response {
    let button_text = match icon {
        Some(icon) => format!("{} {}", icon, text),
        None => text.to_string(),
    };

    let mut button = egui::Button::new(egui::RichText::new(button_text).size(15.0))
        .min_size(egui::vec2(120.0, 34.0));
    if let Some(color) = fill_color {
        button = button.fill(color);
    }

    ui.add_enabled(enabled, button)
}

/// Render a form heading
pub fn render_form_heading(ui: &mut egui::Ui, text: &str, theme: &Theme) {
    ui.label(egui::RichText::new(text).size(22.0).strong().color(theme.selected));
    ui.add_space(12.0);
}

/// Render an error message
pub fn render_error(ui: &mut egui::Ui, error: &str, theme: &Theme) {
    ui.label(egui::RichText::new(error).size(14.0).color(theme.error));
    ui.add_space(8.0);
}

/// Render a help/hint text
pub fn render_hint(ui: &mut egui::Ui, hint: &str, theme: &Theme) {
    ui.label(egui::RichText::new(hint).size(13.0).color(theme.dim));
}

/// Centered spinner with a caption
pub fn render_loading(ui: &mut egui::Ui, caption: &str, theme: &Theme) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.spinner();
        ui.add_space(8.0);
        render_hint(ui, caption, theme);
    });
}

/// Header row with a back button to the dashboard
pub fn render_back_header(ui: &mut egui::Ui, title: &str, theme: &Theme) -> bool {
    let mut back = false;
    ui.horizontal(|ui| {
        back = ui.button("← Back").clicked();
        ui.add_space(8.0);
        ui.label(egui::RichText::new(title).size(20.0).strong().color(theme.normal));
    });
    ui.separator();
    back
}
