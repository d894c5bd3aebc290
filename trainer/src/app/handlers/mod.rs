//! # Event Handlers
//!
//! User action handlers organized by screen.

pub mod admin;
pub mod navigation;
pub mod quiz_editor;
pub mod session;
pub mod training;
pub mod users;
