//! # Profile Screen

use crate::app::{AppLike, AppState, View};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
    let theme = Theme::default();
    if forms::render_back_header(ui, "Profile", &theme) {
        app.navigate(View::Home);
        return;
    }

    let Some(user) = state.session.user() else {
        return;
    };

    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(56.0, 56.0), egui::Sense::hover());
        ui.painter().circle_filled(rect.center(), 28.0, theme.selected);
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            user.initials(),
            egui::FontId::proportional(22.0),
            theme.background,
        );
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(&user.full_name).size(20.0).strong());
            forms::render_hint(ui, &user.roles_label(), &theme);
        });
    });
    ui.add_space(12.0);

    let profile = &state.profile;
    if profile.loading {
        forms::render_loading(ui, "Loading achievements...", &theme);
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.label(
            egui::RichText::new(format!(
                "Achievements {}/{}",
                profile.earned_count(),
                profile.achievements.len()
            ))
            .size(16.0)
            .strong(),
        );
        ui.add_space(6.0);
        for achievement in &profile.achievements {
            let earned = profile.is_earned(achievement);
            let color = if earned { theme.normal } else { theme.dim };
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(if earned { "🏆" } else { "🔒" }).size(20.0));
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&achievement.name).strong().color(color));
                    forms::render_hint(ui, &achievement.description, &theme);
                    if let Some(label) = profile.earned_label(achievement) {
                        ui.label(egui::RichText::new(label).size(12.0).color(theme.success));
                    }
                });
            });
            ui.add_space(4.0);
        }

        ui.add_space(12.0);
        ui.label(egui::RichText::new("Leaderboard").size(16.0).strong());
        ui.add_space(6.0);
        egui::Grid::new("leaderboard").num_columns(3).striped(true).show(ui, |ui| {
            for entry in &profile.leaderboard {
                let color = if entry.user.id == user.id { theme.selected } else { theme.normal };
                ui.label(egui::RichText::new(format!("#{}", entry.rank)).color(color));
                ui.label(egui::RichText::new(&entry.user.full_name).color(color));
                ui.label(egui::RichText::new(entry.score.to_string()).color(color));
                ui.end_row();
            }
        });
    });
}
