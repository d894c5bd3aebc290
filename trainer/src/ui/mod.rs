//! # GUI Rendering
//!
//! Frame-level layout: a bottom navigation bar for signed-in users and a
//! central panel that switches on the session and the resolved destination.
//!
//! Rendering reads a cloned [`AppState`] snapshot so no lock is held while
//! widgets are laid out.

pub mod screens;
pub mod theme;
pub mod widgets;

use crate::app::{App, AppLike, AppState, Destination, SessionState};
use crate::ui::widgets::notifications::NotificationManager;

/// Main render function, called every frame by eframe
pub fn render(ctx: &egui::Context, app: &mut App, notifications: &mut NotificationManager) {
    let state = match app.state.try_read() {
        Some(guard) => guard.clone(),
        // Lock is held by another task, skip this frame
        None => {
            ctx.request_repaint();
            return;
        }
    };

    for (level, message) in app.take_notifications() {
        notifications.push(level, message);
    }

    if state.is_authenticated() {
        egui::TopBottomPanel::bottom("nav_bar")
            .resizable(false)
            .show(ctx, |ui| {
                widgets::nav_bar::render_nav_bar(ui, &state, app);
            });
    }

    egui::CentralPanel::default().show(ctx, |ui| {
        render_content(ui, &state, app);
    });

    notifications.show(ctx);

    if app.is_animating() {
        ctx.request_repaint();
    }
}

fn render_content(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
    if !matches!(state.session, SessionState::Authenticated(_)) {
        screens::session::render(ui, state, app);
        return;
    }

    match state.destination() {
        Destination::ManagerDashboard => screens::dashboard::render_manager(ui, state, app),
        Destination::StaffDashboard => screens::dashboard::render_staff(ui, state, app),
        Destination::Learn => screens::learn::render(ui, state, app),
        Destination::Test => screens::test::render(ui, state, app),
        Destination::Game => screens::game::render(ui, state, app),
        Destination::Profile => screens::profile::render(ui, state, app),
        Destination::Admin => screens::admin::render(ui, state, app),
        Destination::UserManagement => screens::user_management::render(ui, state, app),
        Destination::QuizEditor => screens::quiz_editor::render(ui, state, app),
    }
}
