//! # Dashboards
//!
//! Manager and staff home screens.

use crate::app::{AppLike, AppState, View};
use crate::ui::theme::Theme;
use crate::ui::widgets::tiles;

/// Static progress shown on the staff dashboard
const MENU_LEARNED: f32 = 0.75;
const AVERAGE_SCORE: f32 = 0.92;

fn greeting(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    let name = state
        .session
        .user()
        .map(|user| user.full_name.as_str())
        .unwrap_or_default();
    ui.label(egui::RichText::new(format!("Hello, {}!", name)).size(22.0).strong());
    ui.label(egui::RichText::new(state.session.user().map(|u| u.roles_label()).unwrap_or_default()).color(theme.dim));
    ui.add_space(12.0);
}

pub fn render_manager(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
    let theme = Theme::default();
    greeting(ui, state, &theme);

    let mut target = None;
    egui::Grid::new("manager_tiles")
        .num_columns(2)
        .spacing(egui::vec2(12.0, 12.0))
        .show(ui, |ui| {
            if tiles::render_tile(ui, "👥", "Users", "Roles and staff", true, &theme) {
                target = Some(View::UserManagement);
            }
            if tiles::render_tile(ui, "🍽", "Content", "Menu and categories", true, &theme) {
                target = Some(View::Admin);
            }
            ui.end_row();
            if tiles::render_tile(ui, "📝", "Quiz editor", "Create a test", true, &theme) {
                target = Some(View::QuizEditor);
            }
            tiles::render_tile(ui, "📊", "Analytics", "Coming soon", false, &theme);
            ui.end_row();
        });

    if let Some(view) = target {
        app.navigate(view);
    }
}

pub fn render_staff(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
    let theme = Theme::default();
    greeting(ui, state, &theme);

    let mut target = None;
    egui::Grid::new("staff_tiles")
        .num_columns(2)
        .spacing(egui::vec2(12.0, 12.0))
        .show(ui, |ui| {
            if tiles::render_tile(ui, "📚", "Learn", "Menu flashcards", true, &theme) {
                target = Some(View::Learn);
            }
            if tiles::render_tile(ui, "📝", "Test", "Check yourself", true, &theme) {
                target = Some(View::Test);
            }
            ui.end_row();
            if tiles::render_tile(ui, "🎮", "Game", "Find the dish", true, &theme) {
                target = Some(View::Game);
            }
            if tiles::render_tile(ui, "👤", "Profile", "Achievements", true, &theme) {
                target = Some(View::Profile);
            }
            ui.end_row();
        });

    ui.add_space(16.0);
    ui.label(egui::RichText::new("Your progress").size(16.0).strong());
    tiles::render_progress(ui, "Menu learned", MENU_LEARNED, &theme);
    tiles::render_progress(ui, "Average test score", AVERAGE_SCORE, &theme);

    if let Some(view) = target {
        app.navigate(view);
    }
}
