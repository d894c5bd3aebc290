//! # Game Screen
//!
//! "Find the dish": a name and four photos, one of which matches.

use crate::app::{AppLike, AppState, Feedback, MatchGame, View};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

const PHOTO_SIZE: egui::Vec2 = egui::vec2(150.0, 150.0);

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
    let theme = Theme::default();
    if forms::render_back_header(ui, "Find the dish", &theme) {
        app.navigate(View::Home);
        return;
    }

    let game = match (&state.game.game, state.game.loading) {
        (Some(game), false) => game,
        _ => {
            forms::render_loading(ui, "Preparing the game...", &theme);
            return;
        }
    };

    if game.not_enough_items() {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            forms::render_hint(ui, "Not enough dishes on the menu to play. At least four are needed.", &theme);
        });
        return;
    }

    if game.is_over() {
        render_over(ui, game, app, &theme);
        return;
    }

    render_round(ui, game, app, &theme);
}

fn render_round(ui: &mut egui::Ui, game: &MatchGame, app: &mut impl AppLike, theme: &Theme) {
    let Some(round) = game.round() else {
        return;
    };

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(format!("Score: {}", game.score())).size(16.0).strong());
    });
    ui.add_space(8.0);
    ui.vertical_centered(|ui| {
        forms::render_hint(ui, "Find the photo of", theme);
        ui.label(egui::RichText::new(&round.target.name).size(22.0).strong().color(theme.selected));
    });
    ui.add_space(12.0);

    let locked = game.feedback().is_some();
    let mut chosen = None;
    egui::Grid::new("game_photos")
        .num_columns(2)
        .spacing(egui::vec2(10.0, 10.0))
        .show(ui, |ui| {
            for (i, option) in round.options.iter().enumerate() {
                let button = egui::Button::image(
                    egui::Image::new(option.image_url.as_str())
                        .fit_to_exact_size(PHOTO_SIZE)
                        .corner_radius(8),
                );
                if ui.add_enabled(!locked, button).clicked() {
                    chosen = Some(option.id);
                }
                if i % 2 == 1 {
                    ui.end_row();
                }
            }
        });

    ui.add_space(10.0);
    match game.feedback() {
        Some(Feedback::Correct) => {
            ui.label(egui::RichText::new("✔ Correct!").size(18.0).color(theme.success));
        }
        Some(Feedback::Incorrect) => {
            ui.label(egui::RichText::new("✖ Wrong").size(18.0).color(theme.error));
        }
        None => {}
    }

    if let Some(item_id) = chosen {
        app.choose_photo(item_id);
    }
}

fn render_over(ui: &mut egui::Ui, game: &MatchGame, app: &mut impl AppLike, theme: &Theme) {
    ui.vertical_centered(|ui| {
        ui.add_space(50.0);
        ui.label(egui::RichText::new("Game over").size(24.0).strong());
        ui.add_space(8.0);
        ui.label(egui::RichText::new(format!("Your score: {}", game.score())).size(18.0));
        ui.add_space(16.0);
        if forms::render_button(ui, "Play again", Some("↻"), Some(theme.selected), true).clicked() {
            app.restart_game();
        }
    });
}
