//! Application configuration.
//!
//! Layers, lowest priority first: built-in defaults, an optional config file
//! (`--config` / `CONFIG_FILE`, else `./config.{yaml,toml,json}` when present),
//! `ORGCHAT_`-prefixed variables such as `ORGCHAT_SERVER__PORT=8000`, and
//! finally CLI flags and their env aliases (`PORT`, `BIND_HOST`, ...).

use std::time::Duration;

use clap::Parser;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::session::LifecycleTiming;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_SENT_DELAY_MS: u64 = 500;
const DEFAULT_REPLY_MIN_DELAY_MS: u64 = 1000;
const DEFAULT_REPLY_MAX_DELAY_MS: u64 = 3000;
const DEFAULT_READ_DELAY_MS: u64 = 1000;
const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 30 * 60;
const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 60;
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_LOG_FILTER: &str = "info,orgchat=debug";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Address to bind
    #[arg(long, env = "BIND_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Directory served under /static
    #[arg(long, env = "STATIC_DIR")]
    pub static_dir: Option<String>,

    /// Emit logs as JSON
    #[arg(long, env = "LOG_JSON")]
    pub log_json: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub lifecycle: LifecycleConfig,
    pub sessions: SessionConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
}

/// Delays driving the simulated send/reply sequence.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct LifecycleConfig {
    pub sent_delay_ms: u64,
    pub reply_min_delay_ms: u64,
    pub reply_max_delay_ms: u64,
    pub read_delay_ms: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub idle_timeout_secs: u64,
    pub sweep_interval_secs: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct UiConfig {
    pub static_dir: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub format: LogFormat,
    pub filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
                request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            },
            lifecycle: LifecycleConfig::default(),
            sessions: SessionConfig {
                idle_timeout_secs: DEFAULT_IDLE_TIMEOUT_SECS,
                sweep_interval_secs: DEFAULT_SWEEP_INTERVAL_SECS,
            },
            ui: UiConfig {
                static_dir: DEFAULT_STATIC_DIR.to_string(),
            },
            logging: LoggingConfig {
                format: LogFormat::Compact,
                filter: DEFAULT_LOG_FILTER.to_string(),
            },
        }
    }
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            sent_delay_ms: DEFAULT_SENT_DELAY_MS,
            reply_min_delay_ms: DEFAULT_REPLY_MIN_DELAY_MS,
            reply_max_delay_ms: DEFAULT_REPLY_MAX_DELAY_MS,
            read_delay_ms: DEFAULT_READ_DELAY_MS,
        }
    }
}

impl LifecycleConfig {
    #[must_use]
    pub fn timing(&self) -> LifecycleTiming {
        LifecycleTiming {
            sent_after: Duration::from_millis(self.sent_delay_ms),
            reply_min: Duration::from_millis(self.reply_min_delay_ms),
            reply_max: Duration::from_millis(self.reply_max_delay_ms),
            read_after: Duration::from_millis(self.read_delay_ms),
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }

    #[must_use]
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("server.request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS)?
            .set_default("lifecycle.sent_delay_ms", DEFAULT_SENT_DELAY_MS)?
            .set_default("lifecycle.reply_min_delay_ms", DEFAULT_REPLY_MIN_DELAY_MS)?
            .set_default("lifecycle.reply_max_delay_ms", DEFAULT_REPLY_MAX_DELAY_MS)?
            .set_default("lifecycle.read_delay_ms", DEFAULT_READ_DELAY_MS)?
            .set_default("sessions.idle_timeout_secs", DEFAULT_IDLE_TIMEOUT_SECS)?
            .set_default("sessions.sweep_interval_secs", DEFAULT_SWEEP_INTERVAL_SECS)?
            .set_default("ui.static_dir", DEFAULT_STATIC_DIR)?
            .set_default("logging.format", "compact")?
            .set_default("logging.filter", DEFAULT_LOG_FILTER)?;

        // Explicit file must exist; the cwd fallback is optional.
        builder = match &cli.config {
            Some(path) => builder.add_source(File::with_name(path).required(true)),
            None => builder.add_source(File::with_name("config").required(false)),
        };

        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(dir) = cli.static_dir {
            builder = builder.set_override("ui.static_dir", dir)?;
        }
        if let Some(json) = cli.log_json {
            builder = builder.set_override("logging.format", if json { "json" } else { "compact" })?;
        }

        builder = builder.add_source(
            Environment::with_prefix("ORGCHAT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let cfg: AppConfig = builder.build()?.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        let lifecycle = &self.lifecycle;
        if lifecycle.reply_min_delay_ms > lifecycle.reply_max_delay_ms {
            return Err(config::ConfigError::Message(format!(
                "lifecycle.reply_min_delay_ms ({}) exceeds lifecycle.reply_max_delay_ms ({})",
                lifecycle.reply_min_delay_ms, lifecycle.reply_max_delay_ms
            )));
        }
        if self.sessions.sweep_interval_secs == 0 {
            return Err(config::ConfigError::Message(
                "sessions.sweep_interval_secs must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
