//! # Application Configuration
//!
//! Runtime settings read from the environment (a `.env` file is loaded first
//! when present).
//!
//! | variable | default |
//! |---|---|
//! | `SUPABASE_URL` | required |
//! | `SUPABASE_ANON_KEY` | required |
//! | `TRAINER_REQUEST_TIMEOUT_SECS` | `10` |
//! | `TG_WEB_APP_DATA` | unset: demo user selector |
//! | `TRAINER_START_VIEW` | `home` |

use std::env;
use std::time::Duration;

use crate::core::{AppError, Result};

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Base URL of the data service, without trailing slash
    pub supabase_url: String,
    /// Public anon key, sent as `apikey` and bearer token
    pub supabase_anon_key: String,
    pub request_timeout: Duration,
    /// Raw host launch payload (URL-encoded init data)
    pub launch_data: Option<String>,
    pub start_view: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let supabase_url = lookup("SUPABASE_URL")
            .ok_or_else(|| AppError::Config("SUPABASE_URL must be set in environment".into()))?
            .trim_end_matches('/')
            .to_string();

        let supabase_anon_key = lookup("SUPABASE_ANON_KEY")
            .ok_or_else(|| AppError::Config("SUPABASE_ANON_KEY must be set in environment".into()))?;

        let timeout_secs: u64 = lookup("TRAINER_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|| "10".to_string())
            .parse()
            .map_err(|_| {
                AppError::Config("TRAINER_REQUEST_TIMEOUT_SECS must be a valid number".into())
            })?;

        let launch_data = lookup("TG_WEB_APP_DATA").filter(|raw| !raw.trim().is_empty());

        let start_view = lookup("TRAINER_START_VIEW").unwrap_or_else(|| "home".to_string());

        Ok(Self {
            supabase_url,
            supabase_anon_key,
            request_timeout: Duration::from_secs(timeout_secs),
            launch_data,
            start_view,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if !self.supabase_url.starts_with("http://") && !self.supabase_url.starts_with("https://") {
            return Err(AppError::Config(
                "SUPABASE_URL must be an http(s) URL".to_string(),
            ));
        }

        if self.supabase_anon_key.trim().is_empty() {
            return Err(AppError::Config("SUPABASE_ANON_KEY must not be empty".to_string()));
        }

        if self.request_timeout.is_zero() {
            return Err(AppError::Config(
                "TRAINER_REQUEST_TIMEOUT_SECS must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[
            ("SUPABASE_URL", "https://demo.supabase.co/"),
            ("SUPABASE_ANON_KEY", "anon"),
        ]))
        .unwrap();

        assert_eq!(config.supabase_url, "https://demo.supabase.co");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.launch_data, None);
        assert_eq!(config.start_view, "home");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_key() {
        let err = AppConfig::from_lookup(lookup(&[("SUPABASE_URL", "https://demo.supabase.co")]))
            .unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = AppConfig::from_lookup(lookup(&[
            ("SUPABASE_URL", "demo.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
        ]))
        .unwrap();
        assert!(config.validate().is_err());

        let config = AppConfig::from_lookup(lookup(&[
            ("SUPABASE_URL", "https://demo.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
            ("TRAINER_REQUEST_TIMEOUT_SECS", "0"),
        ]))
        .unwrap();
        assert!(config.validate().is_err());

        assert!(AppConfig::from_lookup(lookup(&[
            ("SUPABASE_URL", "https://demo.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
            ("TRAINER_REQUEST_TIMEOUT_SECS", "ten"),
        ]))
        .is_err());
    }
}
