//! # Service Traits
//!
//! The data gateway: a thin facade over list/get/insert calls on the hosted
//! data service. No caching, retries or pagination happen behind it.

use async_trait::async_trait;
use shared::{
    Achievement, LeaderboardEntry, MenuItem, MenuItemCategory, NewCategory, NewMenuItem, NewQuiz,
    Quiz, User, UserAchievement, UserRole,
};

use super::error::Result;

/// Remote data operations used by the screens.
///
/// Implemented by [`crate::services::api::SupabaseClient`]; tests substitute an
/// in-memory implementation.
#[async_trait]
pub trait DataGateway: Send + Sync {
    /// Resolve a launch identity to a user record, `None` when no row matches
    async fn get_current_user(&self, telegram_id: i64) -> Result<Option<User>>;

    /// Every user with their roles
    async fn get_all_users(&self) -> Result<Vec<User>>;

    /// Replace a user's role set
    async fn update_user_roles(&self, user_id: &str, roles: &[UserRole]) -> Result<()>;

    /// Active menu items
    async fn get_menu_items(&self) -> Result<Vec<MenuItem>>;

    /// Single menu item by id
    async fn get_menu_item(&self, id: i64) -> Result<Option<MenuItem>>;

    /// Insert a menu item (name normalised), returning the stored row
    async fn add_menu_item(&self, item: NewMenuItem) -> Result<MenuItem>;

    async fn get_categories(&self) -> Result<Vec<MenuItemCategory>>;

    /// Insert a category (name normalised), returning the stored row
    async fn add_category(&self, category: NewCategory) -> Result<MenuItemCategory>;

    /// Quizzes with their questions and answers embedded
    async fn get_quizzes(&self) -> Result<Vec<Quiz>>;

    /// Insert a quiz with its questions and answers
    async fn create_quiz(&self, quiz: NewQuiz) -> Result<Quiz>;

    async fn get_achievements(&self) -> Result<Vec<Achievement>>;

    async fn get_user_achievements(&self, user_id: &str) -> Result<Vec<UserAchievement>>;

    /// Top three entries. Scores are generated, not derived from play data.
    async fn get_leaderboard(&self) -> Result<Vec<LeaderboardEntry>>;
}
