//! Environment configuration for the CFO services
//!
//! Every setting has a default so the server starts with an empty
//! environment. Values are read once at startup and passed down explicitly.

use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_DATA_DIR: &str = "server/data";
pub const DEFAULT_LOG_DIR: &str = "server/logs";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// File name of the persisted ledger inside the data directory
pub const USAGE_FILE_NAME: &str = "usage.json";
/// File name of the JSON log inside the log directory
pub const LOG_FILE_NAME: &str = "app.log";

/// Settings for the hosted generative-text service
#[derive(Debug, Clone, PartialEq)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            api_base: DEFAULT_GEMINI_API_BASE.to_string(),
        }
    }
}

impl GeminiConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("GEMINI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            model: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            api_base: env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| DEFAULT_GEMINI_API_BASE.to_string()),
        }
    }
}

/// Process-wide configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub port: u16,
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
    pub snapshot_path: Option<PathBuf>,
    pub gemini: GeminiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            snapshot_path: None,
            gemini: GeminiConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment, honouring a `.env` file
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|s| u16::from_str(s.trim()).ok())
                .unwrap_or(DEFAULT_PORT),
            data_dir: env::var("CFO_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR)),
            log_dir: env::var("CFO_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_DIR)),
            snapshot_path: env::var("CFO_SNAPSHOT_PATH").ok().map(PathBuf::from),
            gemini: GeminiConfig::from_env(),
        }
    }

    pub fn usage_path(&self) -> PathBuf {
        self.data_dir.join(USAGE_FILE_NAME)
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }

    /// Create the data and log directories if they are missing
    pub fn ensure_directories(&self) -> std::io::Result<()> {
        for dir in [&self.data_dir, &self.log_dir] {
            create_dir(dir)?;
        }
        Ok(())
    }
}

fn create_dir(dir: &Path) -> std::io::Result<()> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "PORT",
            "CFO_DATA_DIR",
            "CFO_LOG_DIR",
            "CFO_SNAPSHOT_PATH",
            "GEMINI_API_KEY",
            "GEMINI_MODEL",
            "GEMINI_API_BASE",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_when_environment_is_empty() {
        clear_env();
        let config = AppConfig::from_env();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.usage_path(), PathBuf::from("server/data/usage.json"));
        assert_eq!(config.log_path(), PathBuf::from("server/logs/app.log"));
        assert_eq!(config.gemini.model, DEFAULT_GEMINI_MODEL);
        assert!(config.snapshot_path.is_none());
    }

    #[test]
    #[serial]
    fn test_environment_overrides() {
        clear_env();
        env::set_var("PORT", "8080");
        env::set_var("CFO_DATA_DIR", "/tmp/cfo-data");
        env::set_var("GEMINI_API_KEY", "secret");
        env::set_var("GEMINI_MODEL", "gemini-pro");

        let config = AppConfig::from_env();
        assert_eq!(config.port, 8080);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/cfo-data"));
        assert_eq!(config.gemini.api_key.as_deref(), Some("secret"));
        assert_eq!(config.gemini.model, "gemini-pro");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_bad_port_and_blank_key_fall_back() {
        clear_env();
        env::set_var("PORT", "not-a-port");
        env::set_var("GEMINI_API_KEY", "   ");

        let config = AppConfig::from_env();
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.gemini.api_key.is_none());
        clear_env();
    }

    #[test]
    fn test_ensure_directories_creates_both() {
        let root = tempfile::tempdir().unwrap();
        let config = AppConfig {
            data_dir: root.path().join("nested/data"),
            log_dir: root.path().join("nested/logs"),
            ..AppConfig::default()
        };
        config.ensure_directories().unwrap();
        assert!(config.data_dir.is_dir());
        assert!(config.log_dir.is_dir());
    }
}
