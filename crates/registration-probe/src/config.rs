//! Probe configuration loaded from environment variables.

use crate::error::AppResult;
use anyhow::Context;
use config::builder::DefaultState;
use config::ConfigBuilder;
use registration_contract::ValidationRules;
use serde::Deserialize;
use std::time::Duration;

/// Probe configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Registration server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Scenario run configuration
    #[serde(default)]
    pub probe: ProbeConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server host
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Bound on one request/response exchange
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,

    /// Bound on the "is the server listening" check
    #[serde(default = "default_probe_timeout", with = "humantime_serde")]
    pub probe_timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProbeConfig {
    /// Which scenarios to run and against what
    #[serde(default)]
    pub mode: ProbeMode,

    /// Pause before each case
    #[serde(default = "default_pause", with = "humantime_serde")]
    pub pause: Duration,

    /// Also require letter-first, `[A-Za-z0-9_]` usernames
    #[serde(default)]
    pub strict_username: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeMode {
    /// Every scenario against the server
    #[default]
    Full,
    /// One normal registration against the server
    Quick,
    /// Every scenario against the in-process contract
    Offline,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            timeout: default_timeout(),
            probe_timeout: default_probe_timeout(),
        }
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            mode: ProbeMode::default(),
            pause: default_pause(),
            strict_username: false,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".into()
}

fn default_port() -> u16 {
    8080
}

fn default_timeout() -> Duration {
    Duration::from_secs(5)
}

fn default_probe_timeout() -> Duration {
    Duration::from_secs(1)
}

fn default_pause() -> Duration {
    Duration::from_millis(500)
}

fn default_log_level() -> String {
    "info".into()
}

impl ServerConfig {
    /// `host:port` for socket connects.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl ProbeConfig {
    /// Rules used for offline runs.
    pub fn rules(&self) -> ValidationRules {
        if self.strict_username {
            ValidationRules::strict()
        } else {
            ValidationRules::default()
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> AppResult<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let builder = config::Config::builder().add_source(
            config::Environment::default()
                .separator("__")
                .try_parsing(false),
        );

        Self::from_builder(builder)
    }

    /// Build configuration from an arbitrary set of sources.
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> AppResult<Self> {
        let config = builder.build().context("Failed to build configuration")?;

        let config: Self = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        Ok(config)
    }
}
