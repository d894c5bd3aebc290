//! # Data Transfer Objects (DTOs)
//!
//! Rows and insert payloads exchanged with the hosted data service's REST
//! surface.
//!
//! ## Module Organization
//!
//! - [`user`] - Staff members, role tags, leaderboard rows
//! - [`menu`] - Menu items and categories
//! - [`quiz`] - Quizzes, questions, answers and their drafts
//! - [`achievement`] - Achievements and earned achievements
//!
//! ## Serialization Format
//!
//! - **Field naming**: snake_case, identical to the table columns
//! - **Enums**: snake_case strings (`general_manager`, `single_choice`)
//! - **Embedded relations**: nested arrays, e.g. `questions(*, answers(*))`
//!
//! ```text
//! GET /rest/v1/users?select=id,telegram_id,full_name,user_roles(roles(name))&telegram_id=eq.101
//!
//! [{
//!   "id": "5c1f...",
//!   "telegram_id": 101,
//!   "full_name": "Anna Petrova",
//!   "user_roles": [{ "roles": { "name": "waiter" } }]
//! }]
//! ```

pub mod achievement;
pub mod menu;
pub mod quiz;
pub mod user;

pub use achievement::*;
pub use menu::*;
pub use quiz::*;
pub use user::*;

use serde::{Deserialize, Serialize};

/// Error body returned by the REST surface
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{} ({})", self.message, code),
            None => f.write_str(&self.message),
        }
    }
}
