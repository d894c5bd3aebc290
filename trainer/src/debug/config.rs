//! Debug configuration from environment variables

use std::path::PathBuf;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_LEVEL: &str = "trainer=info,warn";

/// File name prefix of the rolling log
pub const LOG_FILE_NAME: &str = "trainer.log";

/// Debug system configuration
#[derive(Debug, Clone)]
pub struct DebugConfig {
    /// Log level filter (e.g., "trainer=debug,info")
    pub log_level: String,
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Mirror logs to stderr
    pub console: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_dir: PathBuf::from("logs"),
            console: cfg!(feature = "debug-mode"),
        }
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            log_level: lookup("RUST_LOG")
                .filter(|level| !level.trim().is_empty())
                .unwrap_or(defaults.log_level),
            log_dir: lookup("TRAINER_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            console: lookup("TRAINER_LOG_CONSOLE")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true"))
                .unwrap_or(defaults.console),
        }
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = DebugConfig::from_lookup(|_| None);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.log_file(), PathBuf::from("logs").join("trainer.log"));
        assert!(!config.is_debug_enabled());
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("RUST_LOG", "trainer=debug"),
            ("TRAINER_LOG_DIR", "/tmp/trainer-logs"),
            ("TRAINER_LOG_CONSOLE", "1"),
        ]
        .into_iter()
        .collect();
        let config = DebugConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()));
        assert!(config.is_debug_enabled());
        assert!(config.console);
        assert_eq!(config.log_dir, PathBuf::from("/tmp/trainer-logs"));

        for (value, expected) in [("true", true), ("TRUE", true), (" 1 ", true), ("0", false), ("yes", false)] {
            let config = DebugConfig::from_lookup(|key| {
                (key == "TRAINER_LOG_CONSOLE").then(|| value.to_string())
            });
            assert_eq!(config.console, expected, "TRAINER_LOG_CONSOLE={value:?}");
        }
    }
}
