//! # Session Handlers
//!
//! Startup identity resolution and the demo account selector.

use async_channel::Sender;
use parking_lot::RwLock;
use shared::User;
use std::sync::Arc;

use crate::app::events::AppEvent;
use crate::app::handlers::navigation;
use crate::app::state::{session, AppState, SessionState};
use crate::app::tasks::{self, Gateway};
use crate::services::identity::parse_init_data;

/// Establish the session from the host launch payload
///
/// Internal handler function - use [`crate::app::App::start_session`] instead.
pub(crate) fn start_session(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    gateway: Gateway,
    launch_data: Option<&str>,
) {
    let identity = match launch_data.map(parse_init_data).transpose() {
        Ok(identity) => identity.flatten(),
        Err(e) => {
            tracing::error!(error = %e, "Host launch payload rejected");
            state.write().session = SessionState::Failed(e.message().to_string());
            return;
        }
    };

    match identity {
        Some(identity) => {
            tracing::info!(
                telegram_id = identity.id,
                name = %identity.display_name(),
                language = identity.language_code.as_deref().unwrap_or("unknown"),
                "Resolving host user"
            );
            state.write().session = SessionState::Loading;
            tasks::session::resolve_user(gateway, event_tx, identity.id);
        }
        None => {
            tracing::info!("No host launch payload, offering demo accounts");
            state.write().session = SessionState::SelectingUser(session::demo_roster());
        }
    }
}

/// Authenticate as a demo account; no network call is made
///
/// Internal handler function - use [`crate::app::App::select_demo_user`] instead.
pub(crate) fn select_demo_user(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    gateway: Gateway,
    user: User,
) {
    {
        let mut state = state.write();
        if !matches!(state.session, SessionState::SelectingUser(_)) {
            tracing::warn!(user_id = %user.id, "Demo selection ignored outside the selector");
            return;
        }
        tracing::info!(user_id = %user.id, roles = %user.roles_label(), "Demo user selected");
        state.session = session::authenticate(user);
        if !state.session.is_authenticated() {
            return;
        }
    }
    navigation::enter_current_view(state, event_tx, gateway);
}
