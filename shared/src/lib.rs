//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the training client and the hosted
//! data service. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Rows and insert payloads
//!   - **[`dto::user`]**: Staff members, roles and leaderboard rows
//!   - **[`dto::menu`]**: Menu items and categories
//!   - **[`dto::quiz`]**: Quizzes and quiz drafts
//!   - **[`dto::achievement`]**: Achievements
//! - **[`roles`]**: Role sets gating dashboards, admin actions and navigation
//! - **[`utils`]**: Name normalisation and form-input helpers
//!
//! ## Wire Format
//!
//! Field names match the table columns (snake_case). Embedded relations arrive
//! as nested arrays and default to empty when the select omits them.
//!
//! ## Usage
//!
//! ```rust
//! use shared::{capitalize_name, NewCategory, User, UserRole};
//! use shared::roles::is_manager;
//!
//! let category = NewCategory { name: capitalize_name(" soups ") };
//! assert_eq!(category.name, "Soups");
//!
//! let user = User::new("5", 105, "Olga Smirnova", vec![UserRole::SuperAdmin]);
//! assert!(is_manager(&user.roles));
//! ```

pub mod dto;
pub mod roles;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
