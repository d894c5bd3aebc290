//! # User Management Screen
//!
//! One role selector per user. Changes apply immediately and are rolled back
//! if the server rejects them.

use shared::UserRole;

use crate::app::{AppLike, AppState, View};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
    let theme = Theme::default();
    if forms::render_back_header(ui, "User management", &theme) {
        app.navigate(View::Home);
        return;
    }

    let users = &state.users;
    if users.loading {
        forms::render_loading(ui, "Loading users...", &theme);
        return;
    }
    if let Some(error) = &users.error {
        forms::render_error(ui, error, &theme);
        return;
    }
    if users.users.is_empty() {
        forms::render_hint(ui, "No users found.", &theme);
        return;
    }

    let mut change = None;
    egui::ScrollArea::vertical().show(ui, |ui| {
        egui::Grid::new("user_roles")
            .num_columns(2)
            .spacing(egui::vec2(16.0, 8.0))
            .striped(true)
            .show(ui, |ui| {
                for user in &users.users {
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(&user.full_name).strong());
                        forms::render_hint(ui, &format!("Telegram ID {}", user.telegram_id), &theme);
                    });

                    let current = user.roles.first().copied();
                    let mut selected = current;
                    egui::ComboBox::from_id_salt(("role", &user.id))
                        .selected_text(current.map(|role| role.label()).unwrap_or("No role"))
                        .width(180.0)
                        .show_ui(ui, |ui| {
                            for role in UserRole::all() {
                                ui.selectable_value(&mut selected, Some(*role), role.label());
                            }
                        });
                    if selected != current {
                        if let Some(role) = selected {
                            change = Some((user.id.clone(), role));
                        }
                    }
                    ui.end_row();
                }
            });
    });

    if let Some((user_id, role)) = change {
        app.change_user_role(user_id, role);
    }
}
