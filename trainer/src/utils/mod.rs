//! # Utility Functions
//!
//! Shared utility functions used across the training client.
//!
//! ## Modules
//!
//! - **[`validation`]**: Admin form validation (menu items, categories, quiz drafts)
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Name normalisation and comma-list splitting
//! - [`crate::core`]: Core abstractions and error types

pub mod validation;
