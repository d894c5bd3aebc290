//! # Navigation Handlers
//!
//! View changes. Entering a content view resets its state and starts its load.

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, View};
use crate::app::tasks::{self, Gateway};

/// Handle view change
///
/// Internal handler function - use [`crate::app::App::navigate`] instead.
pub(crate) fn navigate(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    gateway: Gateway,
    view: View,
) {
    state.write().router.navigate(view);
    enter_current_view(state, event_tx, gateway);
}

/// Reset the current view's state and start its data load
pub(crate) fn enter_current_view(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    gateway: Gateway,
) {
    let (view, user_id) = {
        let mut state = state.write();
        let view = state.router.current.clone();
        state.reset_view(&view);
        (view, state.session.user().map(|user| user.id.clone()))
    };

    match view {
        View::Learn | View::Game => tasks::content::load_menu(gateway, event_tx, view),
        View::Test => tasks::content::load_quizzes(gateway, event_tx),
        View::Profile => match user_id {
            Some(user_id) => tasks::profile::load_profile(gateway, event_tx, user_id),
            None => state.write().profile.loading = false,
        },
        View::Admin => tasks::admin::load_admin(gateway, event_tx),
        View::UserManagement => tasks::admin::load_users(gateway, event_tx),
        View::QuizEditor | View::Home | View::Unknown(_) => {}
    }
}
