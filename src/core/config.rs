use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    #[serde(default = "default_num_threads")]
    pub num_threads: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_min_username_length")]
    pub min_username_length: usize,
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,
    /// Seconds a session token stays valid after login
    #[serde(default = "default_session_ttl")]
    pub session_ttl: i64,
    /// Seconds between expired-session sweeps
    #[serde(default = "default_cleanup_interval")]
    pub cleanup_interval: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            min_username_length: default_min_username_length(),
            min_password_length: default_min_password_length(),
            session_ttl: default_session_ttl(),
            cleanup_interval: default_cleanup_interval(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_console")]
    pub console: bool,
}

// Default value functions
fn default_num_threads() -> usize {
    num_cpus::get()
}

fn default_min_username_length() -> usize {
    2
}

fn default_min_password_length() -> usize {
    6
}

fn default_session_ttl() -> i64 {
    86400 // 24 hours
}

fn default_cleanup_interval() -> u64 {
    300 // 5 minutes
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_console() -> bool {
    false
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse config file")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate server config
        if self.server.port == 0 {
            bail!("Server port must be greater than 0");
        }

        if self.server.num_threads == 0 {
            bail!("num_threads must be greater than 0");
        }

        // Validate auth config
        if self.auth.min_username_length == 0 {
            bail!("min_username_length must be greater than 0");
        }

        if self.auth.min_password_length == 0 {
            bail!("min_password_length must be greater than 0");
        }

        if self.auth.session_ttl <= 0 {
            bail!("session_ttl must be greater than 0");
        }

        if self.auth.cleanup_interval == 0 {
            bail!("cleanup_interval must be greater than 0");
        }

        // Sweeping more often than sessions can expire is wasted work
        if self.auth.session_ttl <= self.auth.cleanup_interval as i64 {
            bail!(
                "session_ttl ({}) must be greater than cleanup_interval ({})",
                self.auth.session_ttl,
                self.auth.cleanup_interval
            );
        }

        // Validate logging config
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            bail!(
                "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
                self.logging.level
            );
        }

        let valid_formats = ["json", "console"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            bail!(
                "Invalid log format '{}'. Must be one of: json, console",
                self.logging.format
            );
        }

        Ok(())
    }
}
