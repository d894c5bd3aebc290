//! # Bottom Navigation Bar
//!
//! Home, Learn, Test, Profile, plus Admin for content managers. Only visible
//! once a user is authenticated.

use crate::app::router::nav_items;
use crate::app::{AppLike, AppState};
use crate::ui::theme::Theme;

/// Render the bottom navigation bar
pub fn render_nav_bar(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
    if !state.is_authenticated() {
        return;
    }

    let theme = Theme::default();
    let items = nav_items(state.session.roles());
    let width = ui.available_width() / items.len().max(1) as f32;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(0.0, 0.0);
        for item in items {
            let active = state.router.is_active(&item.view);
            let color = if active { theme.selected } else { theme.dim };
            let text = egui::RichText::new(format!("{}\n{}", item.icon, item.label))
                .size(13.0)
                .color(color);

            let response = ui.add_sized(
                [width, 48.0],
                egui::Button::new(text).frame(false),
            );
            if response.clicked() && !active {
                app.navigate(item.view);
            }
        }
    });
}
