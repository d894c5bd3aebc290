//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: The [`DataGateway`] trait every screen talks to
//!
//! ## Dependency Injection
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use trainer::core::DataGateway;
//!
//! // In production: the REST client
//! let gateway: Arc<dyn DataGateway> = Arc::new(SupabaseClient::new(&config));
//!
//! // In tests: an in-memory gateway
//! let gateway: Arc<dyn DataGateway> = Arc::new(MockGateway::default());
//! ```

pub mod error;
pub mod service;

#[cfg(test)]
pub(crate) mod mock;

pub use error::{AppError, Result};
pub use service::DataGateway;
