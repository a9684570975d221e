//! Client configuration and CLI settings storage

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::SlackError;

pub const DEFAULT_BASE_URL: &str = "https://slack.com/api";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Immutable settings shared by every call made through one client.
#[derive(Clone)]
pub struct ClientConfig {
    token: String,
    base_url: String,
    debug: bool,
    timeout: Duration,
}

impl ClientConfig {
    /// Config with the default base URL, a 30 second timeout and debug off.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            debug: false,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Point the client at another API root (e.g. a mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Log outgoing parameters and raw response bodies at debug level.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub(crate) fn validate(&self) -> Result<(), SlackError> {
        if self.token.trim().is_empty() {
            return Err(SlackError::Config("token must not be empty".to_string()));
        }
        if self.base_url.is_empty() {
            return Err(SlackError::Config("base URL must not be empty".to_string()));
        }
        Ok(())
    }
}

// Keep the token out of logs and panic messages.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("debug", &self.debug)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Settings persisted by the CLI between runs
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Slack API token (xoxp-/xoxb-)
    pub token: Option<String>,
    /// API root override
    pub base_url: Option<String>,
}

impl Settings {
    /// Get config directory path
    fn config_dir() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "slack-users", "slack-users")
            .context("Could not determine config directory")?;
        Ok(proj_dirs.config_dir().to_path_buf())
    }

    /// Get config file path
    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load settings from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Save settings to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).context("Failed to read config file")?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content).context("Failed to write config file")?;

        // Set restrictive permissions on config file (contains the token)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = fs::Permissions::from_mode(0o600);
            fs::set_permissions(path, perms).context("Failed to set config permissions")?;
        }

        Ok(())
    }

    /// Build a [`ClientConfig`], preferring `SLACK_TOKEN` / `SLACK_API_URL`
    /// from the environment over stored values.
    pub fn client_config(&self, debug: bool) -> Result<ClientConfig> {
        let token = std::env::var("SLACK_TOKEN")
            .ok()
            .filter(|t| !t.is_empty())
            .or_else(|| self.token.clone())
            .context(
                "No Slack token. Set SLACK_TOKEN or run 'slack-users login --token <TOKEN>'.",
            )?;

        let base_url = std::env::var("SLACK_API_URL")
            .ok()
            .filter(|u| !u.is_empty())
            .or_else(|| self.base_url.clone());

        let mut config = ClientConfig::new(token).with_debug(debug);
        if let Some(url) = base_url {
            config = config.with_base_url(url);
        }
        Ok(config)
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }
}
