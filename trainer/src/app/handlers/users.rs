//! # User Management Handlers

use async_channel::Sender;
use parking_lot::RwLock;
use shared::UserRole;
use std::sync::Arc;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::app::tasks::{self, Gateway};

/// Assign a single role to a user, optimistically
///
/// Internal handler function - use [`crate::app::App::change_user_role`] instead.
pub(crate) fn change_user_role(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    gateway: Gateway,
    user_id: String,
    role: UserRole,
) {
    let change = {
        let mut state = state.write();
        if !shared::roles::can_manage_users(state.session.roles()) {
            tracing::warn!(user_id = %user_id, "Role change without permission ignored");
            return;
        }
        state.users.apply_optimistic(&user_id, vec![role])
    };

    if let Some(change) = change {
        tasks::admin::update_roles(gateway, event_tx, change);
    }
}
