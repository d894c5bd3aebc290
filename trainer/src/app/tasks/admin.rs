//! # Admin Tasks
//!
//! Loads and writes behind the admin panel, user management and the quiz editor.

use async_channel::Sender;
use shared::{NewCategory, NewMenuItem, NewQuiz};
use tokio::spawn;
use tracing::{error, info, warn};

use super::Gateway;
use crate::app::events::{AdminData, AppEvent};
use crate::app::state::{PendingRoleChange, View};

/// Load users, menu items and categories for the admin panel
pub(crate) fn load_admin(gateway: Gateway, event_tx: Sender<AppEvent>) {
    spawn(async move {
        let (users, items, categories) = tokio::join!(
            gateway.get_all_users(),
            gateway.get_menu_items(),
            gateway.get_categories(),
        );

        let data = AdminData {
            users: users.unwrap_or_else(|e| {
                error!(error = %e, "Failed to load users");
                Vec::new()
            }),
            items: items.unwrap_or_else(|e| {
                error!(error = %e, "Failed to load menu items");
                Vec::new()
            }),
            categories: categories.unwrap_or_else(|e| {
                error!(error = %e, "Failed to load categories");
                Vec::new()
            }),
        };

        let _ = event_tx
            .send(AppEvent::AdminLoaded { view: View::Admin, data })
            .await;
    });
}

/// Load the user list for role management
pub(crate) fn load_users(gateway: Gateway, event_tx: Sender<AppEvent>) {
    spawn(async move {
        let result = gateway.get_all_users().await;
        if let Err(e) = &result {
            error!(error = %e, "Failed to load users");
        }
        let _ = event_tx
            .send(AppEvent::UsersLoaded { view: View::UserManagement, result })
            .await;
    });
}

/// Persist a role change that has already been applied locally
pub(crate) fn update_roles(gateway: Gateway, event_tx: Sender<AppEvent>, change: PendingRoleChange) {
    spawn(async move {
        let result = gateway
            .update_user_roles(&change.user_id, &change.requested)
            .await;
        match &result {
            Ok(()) => info!(user_id = %change.user_id, roles = ?change.requested, "User roles updated"),
            Err(e) => warn!(user_id = %change.user_id, error = %e, "Role update failed, rolling back"),
        }
        let _ = event_tx
            .send(AppEvent::RoleUpdateFinished { change, result })
            .await;
    });
}

pub(crate) fn add_menu_item(gateway: Gateway, event_tx: Sender<AppEvent>, item: NewMenuItem) {
    spawn(async move {
        let result = gateway.add_menu_item(item).await;
        match &result {
            Ok(item) => info!(id = item.id, name = %item.name, "Menu item added"),
            Err(e) => error!(error = %e, "Failed to add menu item"),
        }
        let _ = event_tx.send(AppEvent::MenuItemAdded(result)).await;
    });
}

pub(crate) fn add_category(gateway: Gateway, event_tx: Sender<AppEvent>, name: String) {
    spawn(async move {
        let result = gateway.add_category(NewCategory { name }).await;
        match &result {
            Ok(category) => info!(id = category.id, name = %category.name, "Category added"),
            Err(e) => error!(error = %e, "Failed to add category"),
        }
        let _ = event_tx.send(AppEvent::CategoryAdded(result)).await;
    });
}

pub(crate) fn create_quiz(gateway: Gateway, event_tx: Sender<AppEvent>, quiz: NewQuiz) {
    spawn(async move {
        let result = gateway.create_quiz(quiz).await;
        match &result {
            Ok(quiz) => info!(
                quiz_id = quiz.id,
                questions = quiz.questions.len(),
                "Quiz created"
            ),
            Err(e) => error!(error = %e, "Failed to create quiz"),
        }
        let _ = event_tx.send(AppEvent::QuizCreated(result)).await;
    });
}
