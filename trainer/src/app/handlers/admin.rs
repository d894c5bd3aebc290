//! # Admin Handlers
//!
//! Menu item form and category submission. Validation runs before any
//! network call.

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::app::events::AppEvent;
use crate::app::state::{AdminTab, AppState, NotificationLevel};
use crate::app::tasks::{self, Gateway};

pub(crate) fn select_tab(state: Arc<RwLock<AppState>>, tab: AdminTab) {
    state.write().admin.tab = tab;
}

pub(crate) fn open_menu_item_form(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    if !shared::roles::can_manage_content(state.session.roles()) {
        return;
    }
    state.admin.open_form();
}

pub(crate) fn close_menu_item_form(state: Arc<RwLock<AppState>>) {
    state.write().admin.close_form();
}

/// Validate the form and insert the menu item
///
/// Internal handler function - use [`crate::app::App::submit_menu_item`] instead.
pub(crate) fn submit_menu_item(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    gateway: Gateway,
) {
    let item = match state.write().admin.begin_submit() {
        Ok(item) => item,
        Err(e) => {
            tracing::debug!(error = %e, "Menu item form rejected");
            return;
        }
    };
    tasks::admin::add_menu_item(gateway, event_tx, item);
}

/// Insert the category typed into the categories tab
///
/// Internal handler function - use [`crate::app::App::add_category`] instead.
pub(crate) fn add_category(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    gateway: Gateway,
) {
    let name = {
        let mut state = state.write();
        match state.admin.begin_add_category() {
            Ok(name) => name,
            Err(e) => {
                state.notify(NotificationLevel::Warning, e.message());
                return;
            }
        }
    };
    tasks::admin::add_category(gateway, event_tx, name);
}
