use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

const CONFIG_DIR: &str = ".askdocs";
const CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding `backend.url`
pub const BACKEND_URL_ENV: &str = "BACKEND_URL";
/// Environment variable overriding `relay.port`
pub const RELAY_PORT_ENV: &str = "FRONTEND_PORT";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub relay: RelayConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL; `health` and `ask` are joined onto it
    #[serde(default = "default_backend_url")]
    pub url: String,

    /// Request timeout in seconds (unset = wait indefinitely)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: default_backend_url(),
            timeout_secs: None,
        }
    }
}

fn default_backend_url() -> String {
    "http://localhost:8000/api/v1".to_string()
}

/// Relay server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Host to bind to
    #[serde(default = "default_relay_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_relay_port")]
    pub port: u16,

    /// Timeout for forwarded `/ask` requests
    #[serde(default = "default_ask_timeout")]
    pub ask_timeout_secs: u64,

    /// Timeout for forwarded `/health` requests
    #[serde(default = "default_health_timeout")]
    pub health_timeout_secs: u64,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: default_relay_host(),
            port: default_relay_port(),
            ask_timeout_secs: default_ask_timeout(),
            health_timeout_secs: default_health_timeout(),
        }
    }
}

fn default_relay_host() -> String {
    "0.0.0.0".to_string()
}

fn default_relay_port() -> u16 {
    5000
}

fn default_ask_timeout() -> u64 {
    30
}

fn default_health_timeout() -> u64 {
    5
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Show a spinner while a question is in flight
    #[serde(default = "default_true")]
    pub spinner: bool,

    /// Snippet lines shown per document
    #[serde(default = "default_snippet_lines")]
    pub snippet_lines: usize,

    /// Canned questions offered by `:examples` in chat
    #[serde(default = "default_examples")]
    pub examples: Vec<String>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            spinner: true,
            snippet_lines: default_snippet_lines(),
            examples: default_examples(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_snippet_lines() -> usize {
    6
}

fn default_examples() -> Vec<String> {
    [
        "What is Newton's first law of motion?",
        "Explain the concept of kinetic energy.",
        "What is the difference between speed and velocity?",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Write logs to rotating files
    #[serde(default)]
    pub enabled: bool,

    /// Also log to stderr
    #[serde(default)]
    pub stderr: bool,

    /// trace, debug, info, warn or error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log directory, relative to the working directory unless absolute
    #[serde(default = "default_log_directory")]
    pub directory: PathBuf,

    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,

    /// hourly, daily, minutely or never
    #[serde(default = "default_rotation")]
    pub rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            stderr: false,
            level: default_log_level(),
            directory: default_log_directory(),
            file_prefix: default_file_prefix(),
            rotation: default_rotation(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_directory() -> PathBuf {
    PathBuf::from(CONFIG_DIR).join("logs")
}

fn default_file_prefix() -> String {
    "askdocs.log".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Config {
    /// Load configuration for `root`, then apply environment overrides.
    ///
    /// Looks for `.askdocs/config.toml` under `root`, then in the user's
    /// config directory, and falls back to defaults.
    pub fn load(root: &Path) -> Result<Self> {
        let mut config = match Self::locate(root) {
            Some(path) => Self::load_file(&path)?,
            None => Config::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Parse a single config file, without overrides.
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        toml::from_str(&content).with_context(|| format!("Failed to parse config from {:?}", path))
    }

    /// Save configuration to the .askdocs directory
    pub fn save(&self, root: &Path) -> Result<()> {
        let config_dir = Self::askdocs_dir(root);
        let config_path = config_dir.join(CONFIG_FILE);

        std::fs::create_dir_all(&config_dir)
            .with_context(|| format!("Failed to create config directory {:?}", config_dir))?;

        let content =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        std::fs::write(&config_path, content)
            .with_context(|| format!("Failed to write config to {:?}", config_path))?;

        Ok(())
    }

    /// Apply `BACKEND_URL` and `FRONTEND_PORT` as looked up by `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(BACKEND_URL_ENV).filter(|u| !u.trim().is_empty()) {
            self.backend.url = url;
        }

        if let Some(port) = lookup(RELAY_PORT_ENV) {
            match port.trim().parse::<u16>() {
                Ok(port) => self.relay.port = port,
                Err(_) => warn!("Ignoring invalid {}: {}", RELAY_PORT_ENV, port),
            }
        }
    }

    pub fn askdocs_dir(root: &Path) -> PathBuf {
        root.join(CONFIG_DIR)
    }

    pub fn config_path(root: &Path) -> PathBuf {
        Self::askdocs_dir(root).join(CONFIG_FILE)
    }

    /// Config file in the user's platform config directory
    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "askdocs").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    fn locate(root: &Path) -> Option<PathBuf> {
        let local = Self::config_path(root);
        if local.exists() {
            return Some(local);
        }
        Self::global_config_path().filter(|p| p.exists())
    }
}
