//! # Logging Infrastructure
//!
//! File-based structured logging for the training client.
//!
//! ## Features
//!
//! - **File-based logging**: Structured logs to `logs/trainer.log` (daily rotation)
//! - **Console output**: Compact stderr layer for development
//! - **Panic hook**: Panics are written to the log with their location
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `trainer=debug,info`)
//! - `TRAINER_LOG_DIR`: Log directory (default: `logs`)
//! - `TRAINER_LOG_CONSOLE`: Also log to stderr when set to `1` or `true`

pub mod config;
pub mod logger;

pub use config::DebugConfig;
pub use logger::init as init_logger;

/// Initialize logging
///
/// Call this at application startup, before any other operations.
pub fn init() {
    init_logger();
}
