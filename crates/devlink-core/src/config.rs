//! Configuration management for devlink.
//!
//! Loads configuration from ${DEVLINK_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding `api_url`.
pub const API_URL_ENV: &str = "DEVLINK_API_URL";
/// Environment variable overriding `token`.
pub const TOKEN_ENV: &str = "DEVLINK_TOKEN";

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for devlink configuration and data directories.
    //!
    //! DEVLINK_HOME resolution order:
    //! 1. DEVLINK_HOME environment variable (if set)
    //! 2. ~/.config/devlink (default)

    use std::path::PathBuf;

    /// Returns the devlink home directory.
    pub fn devlink_home() -> PathBuf {
        if let Ok(home) = std::env::var("DEVLINK_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".devlink"),
            |h| h.join(".config").join("devlink"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        devlink_home().join("config.toml")
    }

    /// Returns the directory holding rolling log files.
    pub fn logs_dir() -> PathBuf {
        devlink_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the profile API
    pub api_url: String,

    /// Session token sent as `x-auth-token`
    pub token: Option<String>,

    /// Notification lifetime in milliseconds
    pub alert_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: Self::DEFAULT_API_URL.to_string(),
            token: None,
            alert_timeout_ms: Self::DEFAULT_ALERT_TIMEOUT_MS,
        }
    }
}

impl Config {
    const DEFAULT_API_URL: &str = "http://localhost:5000";
    const DEFAULT_ALERT_TIMEOUT_MS: u64 = 5000;

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Sets (or with `None`, removes) the `token` key in a config file.
    ///
    /// Creates the file from the default template if it doesn't exist.
    /// Preserves existing fields and comments using toml_edit.
    pub fn save_token(path: &Path, token: Option<&str>) -> Result<()> {
        use toml_edit::{DocumentMut, value};

        let contents = if path.exists() {
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?
        } else {
            default_config_template().to_string()
        };

        let mut doc: DocumentMut = contents
            .parse()
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        match token.map(str::trim).filter(|t| !t.is_empty()) {
            Some(token) => doc["token"] = value(token),
            None => {
                doc.remove("token");
            }
        }

        Self::write_config(path, &doc.to_string())
    }

    /// Returns the API base URL with precedence: env > config > default.
    pub fn effective_api_url(&self) -> Result<String> {
        resolve_api_url(std::env::var(API_URL_ENV).ok().as_deref(), &self.api_url)
    }

    /// Returns the session token with precedence: env > config.
    pub fn effective_token(&self) -> Option<String> {
        resolve_token(std::env::var(TOKEN_ENV).ok().as_deref(), self.token.as_deref())
    }

    fn write_config(path: &Path, contents: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
        }
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

fn resolve_api_url(env_url: Option<&str>, config_url: &str) -> Result<String> {
    let url = non_empty(env_url)
        .or_else(|| non_empty(Some(config_url)))
        .unwrap_or(Config::DEFAULT_API_URL);

    let parsed = url::Url::parse(url).with_context(|| format!("Invalid API base URL: {url}"))?;
    if parsed.cannot_be_a_base() {
        anyhow::bail!("Invalid API base URL: {url}");
    }
    Ok(url.trim_end_matches('/').to_string())
}

fn resolve_token(env_token: Option<&str>, config_token: Option<&str>) -> Option<String> {
    non_empty(env_token)
        .or_else(|| non_empty(config_token))
        .map(ToString::to_string)
}
