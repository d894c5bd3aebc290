//! # Application Events
//!
//! Event types for async task communication between background tasks and the main thread.
//!
//! Screen loads carry the [`View`] they were requested for. A result that arrives
//! after the user has moved to another view is dropped by the event handler.

use shared::{
    Achievement, LeaderboardEntry, MenuItem, MenuItemCategory, Quiz, User, UserAchievement,
};

use crate::app::state::{PendingRoleChange, View};
use crate::core::Result;

/// Profile data fetched together; each part degrades to empty on its own
#[derive(Debug, Clone, Default)]
pub struct ProfileData {
    pub achievements: Vec<Achievement>,
    pub earned: Vec<UserAchievement>,
    pub leaderboard: Vec<LeaderboardEntry>,
}

/// Admin panel data fetched together
#[derive(Debug, Clone, Default)]
pub struct AdminData {
    pub users: Vec<User>,
    pub items: Vec<MenuItem>,
    pub categories: Vec<MenuItemCategory>,
}

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Identity lookup for the host user finished
    SessionResolved {
        telegram_id: i64,
        result: Result<Option<User>>,
    },
    /// Active menu items loaded (Learn and Game)
    MenuLoaded { view: View, items: Vec<MenuItem> },
    /// Quiz list loaded
    QuizzesLoaded { view: View, quizzes: Vec<Quiz> },
    /// Achievements and leaderboard loaded
    ProfileLoaded { view: View, data: ProfileData },
    /// Users, items and categories for the admin panel loaded
    AdminLoaded { view: View, data: AdminData },
    /// User list for role management loaded
    UsersLoaded { view: View, result: Result<Vec<User>> },
    /// Role update finished; failures roll back `change`
    RoleUpdateFinished {
        change: PendingRoleChange,
        result: Result<()>,
    },
    /// Menu item insert finished
    MenuItemAdded(Result<MenuItem>),
    /// Category insert finished
    CategoryAdded(Result<MenuItemCategory>),
    /// Quiz with its questions and answers created
    QuizCreated(Result<Quiz>),
}

impl AppEvent {
    /// View a screen load was requested for, if this is a screen load
    pub fn requested_for(&self) -> Option<&View> {
        match self {
            AppEvent::MenuLoaded { view, .. }
            | AppEvent::QuizzesLoaded { view, .. }
            | AppEvent::ProfileLoaded { view, .. }
            | AppEvent::AdminLoaded { view, .. }
            | AppEvent::UsersLoaded { view, .. } => Some(view),
            _ => None,
        }
    }

    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            AppEvent::SessionResolved { .. } => "SessionResolved",
            AppEvent::MenuLoaded { .. } => "MenuLoaded",
            AppEvent::QuizzesLoaded { .. } => "QuizzesLoaded",
            AppEvent::ProfileLoaded { .. } => "ProfileLoaded",
            AppEvent::AdminLoaded { .. } => "AdminLoaded",
            AppEvent::UsersLoaded { .. } => "UsersLoaded",
            AppEvent::RoleUpdateFinished { .. } => "RoleUpdateFinished",
            AppEvent::MenuItemAdded(_) => "MenuItemAdded",
            AppEvent::CategoryAdded(_) => "CategoryAdded",
            AppEvent::QuizCreated(_) => "QuizCreated",
        }
    }
}
