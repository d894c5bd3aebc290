//! # Event Handler
//!
//! Handles async event results from background tasks, updating application state accordingly.
//!
//! Screen loads are applied only while the view they were requested for is still
//! current; anything older is logged and dropped.

use shared::{MenuItem, MenuItemCategory, Quiz, User};

use crate::app::events::{AdminData, ProfileData};
use crate::app::state::{
    session, FlashcardDeck, GameState, LearnState, MatchGame, NotificationLevel, PendingRoleChange,
    SessionState, View,
};
use crate::app::{App, AppEvent, AppLike};
use crate::core::{AppError, Result};

/// Message raised once when an optimistic role change is rolled back
pub const ROLE_UPDATE_FAILED: &str = "Failed to update the user's role.";

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    /// Handle async event results
    ///
    /// Acquires the write lock per event for a minimal duration.
    fn handle_event_impl(&mut self, event: AppEvent) {
        if let Some(view) = event.requested_for() {
            let current = self.state.read().router.current.clone();
            if *view != current {
                tracing::debug!(
                    event = event.name(),
                    requested_for = view.name(),
                    current = current.name(),
                    "Dropping result for a view that is no longer shown"
                );
                return;
            }
        }

        match event {
            AppEvent::SessionResolved { telegram_id, result } => {
                self.handle_session_resolved(telegram_id, result);
            }
            AppEvent::MenuLoaded { view, items } => self.handle_menu_loaded(view, items),
            AppEvent::QuizzesLoaded { quizzes, .. } => self.handle_quizzes_loaded(quizzes),
            AppEvent::ProfileLoaded { data, .. } => self.handle_profile_loaded(data),
            AppEvent::AdminLoaded { data, .. } => self.handle_admin_loaded(data),
            AppEvent::UsersLoaded { result, .. } => self.handle_users_loaded(result),
            AppEvent::RoleUpdateFinished { change, result } => {
                self.handle_role_update_finished(change, result);
            }
            AppEvent::MenuItemAdded(result) => self.handle_menu_item_added(result),
            AppEvent::CategoryAdded(result) => self.handle_category_added(result),
            AppEvent::QuizCreated(result) => self.handle_quiz_created(result),
        }
    }
}

impl App {
    fn handle_session_resolved(&mut self, telegram_id: i64, result: Result<Option<User>>) {
        let authenticated = {
            let mut state = self.state.write();
            let found = result.and_then(|user| {
                user.ok_or_else(|| AppError::NotFound(session::not_found_message(telegram_id)))
            });
            state.session = match found {
                Ok(user) => session::authenticate(user),
                Err(e) => {
                    tracing::warn!(telegram_id, error = %e, "Host user could not be signed in");
                    SessionState::Failed(e.message().to_string())
                }
            };
            state.session.is_authenticated()
        };

        if authenticated {
            self.enter_current_view();
        }
    }

    fn handle_menu_loaded(&mut self, view: View, items: Vec<MenuItem>) {
        let mut state = self.state.write();
        match view {
            View::Learn => {
                state.learn = LearnState {
                    loading: false,
                    deck: FlashcardDeck::new(items, &mut rand::rng()),
                };
            }
            View::Game => {
                let game = MatchGame::new(items, &mut rand::rng());
                if game.not_enough_items() {
                    tracing::info!(count = game.pool().len(), "Not enough dishes for the game");
                }
                state.game = GameState {
                    loading: false,
                    game: Some(game),
                };
            }
            other => tracing::warn!(view = other.name(), "Menu items delivered to a view that does not use them"),
        }
    }

    fn handle_quizzes_loaded(&mut self, quizzes: Vec<Quiz>) {
        let mut state = self.state.write();
        state.test.quizzes = quizzes;
        state.test.loading = false;
    }

    fn handle_profile_loaded(&mut self, data: ProfileData) {
        let mut state = self.state.write();
        state.profile.achievements = data.achievements;
        state.profile.earned = data.earned;
        state.profile.leaderboard = data.leaderboard;
        state.profile.loading = false;
    }

    fn handle_admin_loaded(&mut self, data: AdminData) {
        let mut state = self.state.write();
        state.admin.users = data.users;
        state.admin.items = data.items;
        state.admin.categories = data.categories;
        state.admin.loading = false;
    }

    fn handle_users_loaded(&mut self, result: Result<Vec<User>>) {
        let mut state = self.state.write();
        state.users.loading = false;
        match result {
            Ok(users) => {
                state.users.users = users;
                state.users.error = None;
            }
            Err(e) => state.users.error = Some(e.message().to_string()),
        }
    }

    fn handle_role_update_finished(&mut self, change: PendingRoleChange, result: Result<()>) {
        if result.is_ok() {
            return;
        }
        let mut state = self.state.write();
        state.users.rollback(&change);
        state.notify(NotificationLevel::Error, ROLE_UPDATE_FAILED);
    }

    fn handle_menu_item_added(&mut self, result: Result<MenuItem>) {
        let mut state = self.state.write();
        if let Ok(item) = &result {
            state.notify(NotificationLevel::Success, format!("\"{}\" added to the menu", item.name));
        }
        state.admin.finish_submit(result);
    }

    fn handle_category_added(&mut self, result: Result<MenuItemCategory>) {
        let mut state = self.state.write();
        match &result {
            Ok(category) => state.notify(NotificationLevel::Success, format!("Category \"{}\" added", category.name)),
            Err(e) => state.notify(NotificationLevel::Error, e.message()),
        }
        state.admin.finish_add_category(&result);
    }

    fn handle_quiz_created(&mut self, result: Result<Quiz>) {
        let go_home = {
            let mut state = self.state.write();
            let on_editor = state.router.current == View::QuizEditor;
            match &result {
                Ok(quiz) => {
                    state.notify(NotificationLevel::Success, format!("Quiz \"{}\" created", quiz.title));
                }
                Err(e) if !on_editor => state.notify(NotificationLevel::Error, e.message()),
                Err(_) => {}
            }
            state.quiz_editor.finish_submit(&result);
            result.is_ok() && on_editor
        };

        if go_home {
            self.navigate(View::Home);
        }
    }
}
