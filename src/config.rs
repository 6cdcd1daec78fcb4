use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Auth gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the Menuza API (the `/auth/*` routes hang off this)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:3000/api".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate of the event loop in milliseconds
    #[serde(default = "default_refresh_rate")]
    pub refresh_rate_ms: u64,
}

fn default_refresh_rate() -> u64 {
    250
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            refresh_rate_ms: default_refresh_rate(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to log to file in TUI mode (false = stderr for debugging)
    #[serde(default = "default_log_to_file")]
    pub to_file: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_to_file() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            to_file: default_log_to_file(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PathsConfig {
    /// Override for the data directory (empty = platform data dir)
    #[serde(default)]
    pub data_dir: String,
}

impl Config {
    /// Path to the project-local config file
    pub fn project_config_path() -> PathBuf {
        PathBuf::from("menuza.toml")
    }

    /// Path to the user config file under the platform config dir
    pub fn user_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_default()
            .join("menuza")
            .join("menuza.toml")
    }

    pub fn load(config_path: Option<&str>) -> Result<Self> {
        // Start with embedded defaults so menuza works without config files
        let defaults = Config::default();
        let defaults_json =
            serde_json::to_string(&defaults).context("Failed to serialize default config")?;

        let mut builder = config::Config::builder().add_source(config::File::from_str(
            &defaults_json,
            config::FileFormat::Json,
        ));

        // Project-local config in the working directory
        let project_config = Self::project_config_path();
        if project_config.exists() {
            builder = builder.add_source(config::File::from(project_config));
        }

        // User config in ~/.config/menuza/ (optional global overrides)
        let user_config = Self::user_config_path();
        if user_config.exists() {
            builder = builder.add_source(config::File::from(user_config));
        }

        // Explicit config file (CLI override)
        if let Some(path) = config_path {
            builder = builder.add_source(config::File::with_name(path));
        }

        // Environment variables with MENUZA_ prefix
        builder = builder.add_source(
            config::Environment::with_prefix("MENUZA")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to load configuration")?;
        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Save config to the user config file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::user_config_path();

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create menuza config directory")?;
        }

        let toml_str =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        std::fs::write(&config_path, toml_str).context("Failed to write config file")?;

        Ok(())
    }

    /// Get absolute path to the data directory
    pub fn data_path(&self) -> PathBuf {
        if self.paths.data_dir.is_empty() {
            return dirs::data_dir().unwrap_or_default().join("menuza");
        }
        let path = PathBuf::from(&self.paths.data_dir);
        if path.is_absolute() {
            path
        } else {
            std::env::current_dir().unwrap_or_default().join(path)
        }
    }

    /// Get path to the stored credential token file
    pub fn token_path(&self) -> PathBuf {
        self.data_path().join("authToken")
    }

    /// Get absolute path to logs directory
    pub fn logs_path(&self) -> PathBuf {
        self.data_path().join("logs")
    }

    /// Login endpoint URL
    pub fn login_url(&self) -> String {
        format!("{}/auth/login", self.api.base_url.trim_end_matches('/'))
    }

    /// Signup endpoint URL
    pub fn signup_url(&self) -> String {
        format!("{}/auth/signup", self.api.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:3000/api");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.ui.refresh_rate_ms, 250);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.to_file);
        assert!(config.paths.data_dir.is_empty());
    }

    #[test]
    fn test_endpoint_urls_strip_trailing_slash() {
        let mut config = Config::default();
        config.api.base_url = "https://api.menuza.app/api/".to_string();
        assert_eq!(config.login_url(), "https://api.menuza.app/api/auth/login");
        assert_eq!(
            config.signup_url(),
            "https://api.menuza.app/api/auth/signup"
        );
    }

    #[test]
    fn test_load_explicit_config_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("menuza.toml");
        std::fs::write(
            &path,
            "[api]\nbase_url = \"https://staging.menuza.app/api\"\ntimeout_secs = 5\n",
        )
        .unwrap();

        let config = Config::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.api.base_url, "https://staging.menuza.app/api");
        assert_eq!(config.api.timeout_secs, 5);
        // Untouched sections keep defaults
        assert_eq!(config.ui.refresh_rate_ms, 250);
    }

    #[test]
    fn test_data_path_respects_override() {
        let mut config = Config::default();
        config.paths.data_dir = "/tmp/menuza-test".to_string();
        assert_eq!(config.data_path(), PathBuf::from("/tmp/menuza-test"));
        assert_eq!(
            config.token_path(),
            PathBuf::from("/tmp/menuza-test/authToken")
        );
        assert_eq!(config.logs_path(), PathBuf::from("/tmp/menuza-test/logs"));
    }
}
