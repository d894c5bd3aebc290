//! # Host Launch Identity
//!
//! The chat host launches the client with URL-encoded init data
//! (`query_id=...&user=%7B%22id%22%3A101...%7D&auth_date=...&hash=...`).
//! Only the `user` object is read. The hash is not verified here.

use serde::{Deserialize, Serialize};

use crate::core::error::{AppError, Result};

/// The `user` object from the launch payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HostIdentity {
    pub id: i64,
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub language_code: Option<String>,
}

impl HostIdentity {
    pub fn display_name(&self) -> String {
        match &self.last_name {
            Some(last) if !last.is_empty() => format!("{} {}", self.first_name, last),
            _ => self.first_name.clone(),
        }
    }
}

/// Extract the host identity from raw init data.
///
/// Returns `Ok(None)` when the payload is empty or carries no `user` field,
/// and a validation error when the field is present but malformed.
///
/// ```rust
/// use trainer::services::identity::parse_init_data;
///
/// let raw = "query_id=AA&user=%7B%22id%22%3A101%2C%22first_name%22%3A%22Anna%22%7D&hash=x";
/// let identity = parse_init_data(raw).unwrap().unwrap();
/// assert_eq!(identity.id, 101);
/// assert_eq!(identity.display_name(), "Anna");
/// ```
pub fn parse_init_data(raw: &str) -> Result<Option<HostIdentity>> {
    let raw = raw.trim().trim_start_matches('?');
    if raw.is_empty() {
        return Ok(None);
    }

    let Some(encoded) = raw
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "user")
        .map(|(_, value)| value)
    else {
        return Ok(None);
    };

    let spaced = encoded.replace('+', " ");
    let decoded = urlencoding::decode(&spaced)
        .map_err(|e| AppError::Validation(format!("Launch payload is not valid UTF-8: {}", e)))?;

    serde_json::from_str::<HostIdentity>(&decoded)
        .map(Some)
        .map_err(|e| AppError::Validation(format!("Launch payload user is malformed: {}", e)))
}
