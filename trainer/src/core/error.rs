//! # Common Error Types
//!
//! Consolidated error handling for the training client.
//!
//! ## Error Categories
//!
//! - **Api**: Data service communication errors (network, HTTP status, JSON parsing)
//! - **NotFound**: A row the client needed does not exist (unknown launch identity)
//! - **Validation**: Local form validation, raised before any network call
//! - **State**: Invalid state transitions
//! - **Config**: Missing or malformed environment configuration
//!
//! ## Usage Pattern
//!
//! ```rust
//! use trainer::core::error::AppError;
//!
//! fn parse_price(input: &str) -> Result<f64, AppError> {
//!     match input.trim().parse::<f64>() {
//!         Ok(price) if price > 0.0 => Ok(price),
//!         _ => Err(AppError::Validation("Price must be greater than 0".to_string())),
//!     }
//! }
//!
//! assert!(parse_price("0").is_err());
//! ```
//!
//! Screens show the message only; [`AppError::message`] strips the category
//! prefix that `Display` adds.

use thiserror::Error;

/// Application-wide error type.
///
/// # Example
///
/// ```rust
/// use trainer::core::error::AppError;
///
/// let err = AppError::Api("Connection timeout".to_string());
/// assert_eq!(err.to_string(), "API error: Connection timeout");
/// assert_eq!(err.message(), "Connection timeout");
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// Data service communication error.
    ///
    /// - Network failures (connection refused, timeout, DNS errors)
    /// - HTTP errors with the service's error body
    /// - JSON parsing errors (malformed rows)
    #[error("API error: {0}")]
    Api(String),

    /// Requested row does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Input validation error, raised before any request is made.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Invalid state transition.
    #[error("State error: {0}")]
    State(String),

    /// Environment configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Message without the category prefix, for inline display
    pub fn message(&self) -> &str {
        match self {
            AppError::Api(msg)
            | AppError::NotFound(msg)
            | AppError::Validation(msg)
            | AppError::State(msg)
            | AppError::Config(msg) => msg,
        }
    }
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Api(format!("Failed to parse response: {}", err))
        } else {
            AppError::Api(format!("Network error: {}", err))
        }
    }
}

impl From<shared::ErrorResponse> for AppError {
    fn from(err: shared::ErrorResponse) -> Self {
        AppError::Api(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_message() {
        let err = AppError::NotFound("User with Telegram ID 7 was not found".into());
        assert_eq!(err.to_string(), "Not found: User with Telegram ID 7 was not found");
        assert_eq!(err.message(), "User with Telegram ID 7 was not found");
    }

    #[test]
    fn test_from_error_response() {
        let body = shared::ErrorResponse {
            message: "duplicate key value".into(),
            code: Some("23505".into()),
            ..Default::default()
        };
        assert_eq!(AppError::from(body), AppError::Api("duplicate key value (23505)".into()));
    }
}
