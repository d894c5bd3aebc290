//! # Data Service Client Module
//!
//! HTTP client for the hosted data service's REST surface.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - SupabaseClient, request helpers, DataGateway impl
//! ├── users.rs    - Identity resolution, staff list, role assignment
//! ├── menu.rs     - Menu items and categories
//! ├── quizzes.rs  - Quiz read and three-step quiz creation
//! └── profile.rs  - Achievements and leaderboard
//! ```

pub mod client;
pub mod menu;
pub mod profile;
pub mod quizzes;
pub mod users;

pub use client::SupabaseClient;
