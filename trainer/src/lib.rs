//! # Restaurant Staff Trainer - Library Root
//!
//! A native **egui** client for training restaurant staff on the menu.
//! This library crate contains all modules used by the binary crate (`main.rs`).
//!
//! ## Features
//!
//! - **Learn**: Swipeable flashcards for every active dish
//! - **Test**: Quizzes with instant answer feedback and a scored result
//! - **Game**: Match a dish name to its photo among four
//! - **Profile**: Achievements and a leaderboard
//! - **Admin**: Menu content, categories, user roles, and a quiz editor
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              trainer (this crate)                      │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe  - Immediate-mode GUI and native window │
//! │  egui-notify    - Toasts                               │
//! │  Tokio          - Async runtime                        │
//! │  Reqwest        - HTTP client                          │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          │ HTTPS (REST + RPC)
//!          ▼
//! ┌─────────────────────────┐
//! │  Hosted data service    │
//! │  (Supabase PostgREST)   │
//! └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Application state, routing, events, handlers and async tasks
//! - **config**: Environment configuration
//! - **core**: Error type and the [`core::DataGateway`] trait
//! - **debug**: Logging setup
//! - **services**: Data service client and host launch identity parsing
//! - **ui**: Screens, widgets and theme
//! - **utils**: Form validation
//!
//! ## Core Concepts
//!
//! ### Event-Driven Architecture
//!
//! User actions run on the main thread and spawn Tokio tasks for network
//! calls. Each task sends exactly one `AppEvent` back over an async channel,
//! drained once per frame.
//!
//! ### State Management
//!
//! Application state is wrapped in `Arc<RwLock<AppState>>`. Locks are held
//! briefly; rendering works on a cloned snapshot.
//!
//! ## Testing
//!
//! ```bash
//! cargo test --workspace
//! ```
//!
//! Tests run against an in-memory gateway and never touch the network.

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;
pub mod utils;
