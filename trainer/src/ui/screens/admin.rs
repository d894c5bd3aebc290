//! # Admin Screen
//!
//! Content list with the inline "new menu item" form, categories, and a
//! users overview linking to role management.

use shared::roles;

use crate::app::{AdminTab, AppLike, AppState, View};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

const FORM_WIDTH: f32 = 320.0;

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
    let theme = Theme::default();
    if forms::render_back_header(ui, "Admin panel", &theme) {
        app.navigate(View::Home);
        return;
    }

    let user_roles = state.session.roles();
    ui.horizontal(|ui| {
        for tab in AdminTab::visible(user_roles) {
            if ui.selectable_label(state.admin.tab == tab, tab.title()).clicked() {
                app.select_admin_tab(tab);
            }
        }
    });
    ui.separator();

    if state.admin.loading {
        forms::render_loading(ui, "Loading...", &theme);
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| match state.admin.tab {
        AdminTab::Content => render_content(ui, state, app, &theme),
        AdminTab::Categories => render_categories(ui, state, app, &theme),
        AdminTab::Users => render_users(ui, state, app, &theme),
    });
}

fn render_content(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike, theme: &Theme) {
    let admin = &state.admin;
    let can_edit = roles::can_manage_content(state.session.roles());

    if can_edit && !admin.form_open {
        if forms::render_button(ui, "Add menu item", Some("+"), Some(theme.selected), true).clicked() {
            app.open_menu_item_form();
        }
        ui.add_space(8.0);
    }

    if admin.form_open {
        render_menu_item_form(ui, state, app, theme);
        ui.separator();
    }

    if admin.items.is_empty() {
        forms::render_hint(ui, "The menu is empty.", theme);
        return;
    }

    for item in &admin.items {
        egui::Frame::new()
            .fill(theme.surface)
            .corner_radius(8)
            .inner_margin(egui::Margin::same(8))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(&item.name).strong());
                        forms::render_hint(
                            ui,
                            &format!("{} · {:.0} ₽", admin.category_name(item.category_id), item.price),
                            theme,
                        );
                    });
                    if !item.is_active {
                        ui.label(egui::RichText::new("hidden").color(theme.warning));
                    }
                    // Editing and archiving are not wired to the data service yet
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.add_enabled(false, egui::Button::new("🗄 Archive"));
                        ui.add_enabled(false, egui::Button::new("✏ Edit"));
                    });
                });
            });
        ui.add_space(4.0);
    }
}

fn render_menu_item_form(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike, theme: &Theme) {
    let admin = &state.admin;
    forms::render_form_heading(ui, "New menu item", theme);

    {
        let mut guard = app.state().write();
        let form = &mut guard.admin.form;
        forms::render_text_input(ui, "Name", &mut form.name, "Caesar salad", FORM_WIDTH);
        forms::render_text_area(ui, "Description", &mut form.description, "Short description", FORM_WIDTH);
        forms::render_text_input(ui, "Price", &mut form.price, "450", FORM_WIDTH);

        ui.label(egui::RichText::new("Category").size(14.0));
        let selected = form
            .category_id
            .map(|id| admin.category_name(id).to_string())
            .unwrap_or_else(|| "Choose a category".to_string());
        egui::ComboBox::from_id_salt("menu_item_category")
            .selected_text(selected)
            .width(FORM_WIDTH)
            .show_ui(ui, |ui| {
                for category in &admin.categories {
                    ui.selectable_value(&mut form.category_id, Some(category.id), category.name.as_str());
                }
            });

        forms::render_text_input(ui, "Image URL", &mut form.image_url, "https://...", FORM_WIDTH);
        forms::render_text_input(ui, "Ingredients", &mut form.ingredients, "comma separated", FORM_WIDTH);
        forms::render_text_input(ui, "Allergens", &mut form.allergens, "comma separated", FORM_WIDTH);
        ui.checkbox(&mut form.is_active, "Visible to staff");
    }

    if let Some(error) = &admin.form_error {
        forms::render_error(ui, error, theme);
    }

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        let label = if admin.submitting { "Saving..." } else { "Save" };
        if forms::render_button(ui, label, Some("✔"), Some(theme.success), !admin.submitting).clicked() {
            app.submit_menu_item();
        }
        if forms::render_button(ui, "Cancel", None, None, true).clicked() {
            app.close_menu_item_form();
        }
    });
}

fn render_categories(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike, theme: &Theme) {
    let admin = &state.admin;

    ui.horizontal(|ui| {
        {
            let mut guard = app.state().write();
            ui.add_sized(
                [220.0, 30.0],
                egui::TextEdit::singleline(&mut guard.admin.new_category).hint_text("New category"),
            );
        }
        if forms::render_button(ui, "Add", Some("+"), Some(theme.selected), !admin.adding_category).clicked() {
            app.add_category();
        }
    });
    ui.add_space(8.0);

    if admin.categories.is_empty() {
        forms::render_hint(ui, "No categories yet.", theme);
    }
    for category in &admin.categories {
        ui.label(format!("• {}", category.name));
    }
}

fn render_users(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike, theme: &Theme) {
    if !roles::can_manage_users(state.session.roles()) {
        forms::render_error(ui, "You do not have permission to manage users.", theme);
        return;
    }

    if forms::render_button(ui, "Manage roles", Some("👥"), Some(theme.selected), true).clicked() {
        app.navigate(View::UserManagement);
    }
    ui.add_space(8.0);

    for user in &state.admin.users {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&user.full_name).strong());
            forms::render_hint(ui, &user.roles_label(), theme);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{App, SessionState};
    use crate::core::mock::{menu_item, user, MockGateway};
    use shared::UserRole;
    use std::sync::Arc;

    fn painted_text(shape: &egui::Shape, out: &mut Vec<String>) {
        match shape {
            egui::Shape::Text(text) => out.push(text.galley.text().to_string()),
            egui::Shape::Vec(shapes) => shapes.iter().for_each(|s| painted_text(s, out)),
            _ => {}
        }
    }

    #[test]
    fn test_content_rows_show_edit_and_archive() {
        let mut app = App::with_gateway(Arc::new(MockGateway::default()), View::Admin);
        {
            let mut state = app.state.write();
            state.session = SessionState::Authenticated(user("me", vec![UserRole::GeneralManager]));
            state.admin.loading = false;
            state.admin.items = vec![menu_item(1, "Borscht")];
        }
        let snapshot = app.state.read().clone();

        let ctx = egui::Context::default();
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| render(ui, &snapshot, &mut app));
        });

        let mut texts = Vec::new();
        for clipped in &output.shapes {
            painted_text(&clipped.shape, &mut texts);
        }
        assert!(texts.iter().any(|t| t.contains("Borscht")));
        assert!(texts.iter().any(|t| t.contains("Edit")));
        assert!(texts.iter().any(|t| t.contains("Archive")));
    }
}
