//! # Session Screen
//!
//! Identity loading, the blocking error screen and the demo account selector.

use crate::app::{AppLike, AppState, SessionState};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
    let theme = Theme::default();

    match &state.session {
        SessionState::Loading => forms::render_loading(ui, "Loading your profile...", &theme),
        SessionState::Failed(message) => {
            ui.vertical_centered(|ui| {
                ui.add_space(80.0);
                ui.label(egui::RichText::new("⚠").size(48.0).color(theme.error));
                ui.add_space(8.0);
                ui.label(egui::RichText::new("Access error").size(22.0).strong());
                ui.add_space(8.0);
                forms::render_error(ui, message, &theme);
            });
        }
        SessionState::SelectingUser(roster) => {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                forms::render_form_heading(ui, "Choose a demo account", &theme);
                forms::render_hint(ui, "The app was opened outside the messenger.", &theme);
                ui.add_space(16.0);

                for user in roster {
                    let label = format!("{}\n{}", user.full_name, user.roles_label());
                    let button = egui::Button::new(egui::RichText::new(label).size(15.0))
                        .min_size(egui::vec2(280.0, 48.0));
                    if ui.add(button).clicked() {
                        app.select_demo_user(user.clone());
                    }
                    ui.add_space(6.0);
                }
            });
        }
        SessionState::Authenticated(_) => {}
    }
}
