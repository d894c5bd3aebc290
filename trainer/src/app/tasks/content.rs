//! # Content Tasks
//!
//! Menu and quiz loads for the training screens. Failures are logged and
//! degrade to an empty list.

use async_channel::Sender;
use tokio::spawn;
use tracing::{debug, error};

use super::Gateway;
use crate::app::events::AppEvent;
use crate::app::state::View;

/// Load active menu items for `view` (Learn or Game)
pub(crate) fn load_menu(gateway: Gateway, event_tx: Sender<AppEvent>, view: View) {
    spawn(async move {
        let items = match gateway.get_menu_items().await {
            Ok(items) => {
                debug!(view = view.name(), count = items.len(), "Menu items loaded");
                items
            }
            Err(e) => {
                error!(view = view.name(), error = %e, "Failed to load menu items");
                Vec::new()
            }
        };
        let _ = event_tx.send(AppEvent::MenuLoaded { view, items }).await;
    });
}

/// Load quizzes with their questions for the Test screen
pub(crate) fn load_quizzes(gateway: Gateway, event_tx: Sender<AppEvent>) {
    spawn(async move {
        let quizzes = match gateway.get_quizzes().await {
            Ok(quizzes) => {
                debug!(count = quizzes.len(), "Quizzes loaded");
                quizzes
            }
            Err(e) => {
                error!(error = %e, "Failed to load quizzes");
                Vec::new()
            }
        };
        let _ = event_tx
            .send(AppEvent::QuizzesLoaded { view: View::Test, quizzes })
            .await;
    });
}
