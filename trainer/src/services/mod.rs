//! # Services Module
//!
//! External integrations of the training client.
//!
//! ```text
//! services/
//! ├── api/         - Data service REST client (DataGateway implementation)
//! └── identity.rs  - Host launch payload parsing
//! ```
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                Trainer (egui)                │
//! │  ┌────────────────┐    ┌──────────────────┐  │
//! │  │ SupabaseClient │    │ parse_init_data  │  │
//! │  └───────┬────────┘    └────────┬─────────┘  │
//! └──────────┼──────────────────────┼────────────┘
//!            │ HTTPS/JSON           │ launch payload
//!            ▼                      ▼
//! ┌─────────────────────┐  ┌──────────────────────┐
//! │ /rest/v1/users      │  │ chat host (Telegram) │
//! │ /rest/v1/menu_items │  └──────────────────────┘
//! │ /rest/v1/quizzes    │
//! │ /rest/v1/rpc/...    │
//! └─────────────────────┘
//! ```

pub mod api;
pub mod identity;
