//! # Async Tasks
//!
//! Background calls to the data gateway. Every task sends exactly one
//! [`crate::app::AppEvent`] back to the main thread.

pub mod admin;
pub mod content;
pub mod profile;
pub mod session;

use std::sync::Arc;

use crate::core::DataGateway;

/// Shared handle to the data gateway passed into tasks
pub(crate) type Gateway = Arc<dyn DataGateway>;
