//! Configuration data model.
//!
//! Everything but the channel has a default. The legacy one-line file
//! `CHAN='#channel'` is valid TOML and deserializes as-is.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::nickname::generate_nickname;
use crate::app::state::DEFAULT_GREETING;

/// Root bot configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// The one channel the bot joins and listens to.
    #[serde(alias = "CHAN")]
    pub channel: String,
    #[serde(default)]
    pub channel_key: Option<String>,
    /// Sent to the channel once the join has completed.
    #[serde(default = "default_greeting")]
    pub greeting: String,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), String> {
        let channel = self.channel.as_str();
        if channel.is_empty() {
            return Err("channel must not be empty".into());
        }
        if channel.chars().any(|c| c == ' ' || c == ',' || c.is_control()) {
            return Err(format!("invalid channel name {:?}", channel));
        }
        if let Some(key) = &self.channel_key {
            if key.is_empty() || key.chars().any(|c| c == ' ' || c.is_control()) {
                return Err(format!("invalid channel key {:?}", key));
            }
        }
        if self.server.nickname.is_empty() || self.server.nickname.contains(' ') {
            return Err(format!("invalid nickname {:?}", self.server.nickname));
        }
        Ok(())
    }
}

/// The IRC server to connect to and who to be there.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "generate_nickname")]
    pub nickname: String,
    #[serde(default = "default_realname")]
    pub realname: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            nickname: generate_nickname(),
            realname: default_realname(),
        }
    }
}

/// Reply pacing and protocol quirks.
#[derive(Debug, Clone, Deserialize)]
pub struct BehaviorConfig {
    /// Pause between consecutive throttled replies.
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,
    /// Answer PING with the server's token instead of the channel name.
    #[serde(default)]
    pub echo_ping_token: bool,
}

impl BehaviorConfig {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
            echo_ping_token: false,
        }
    }
}

/// Diagnostic log output.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Append to this file instead of writing to stderr.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_greeting() -> String {
    DEFAULT_GREETING.into()
}
fn default_host() -> String {
    "chat.freenode.net".into()
}
fn default_port() -> u16 {
    6667
}
fn default_realname() -> String {
    "Real OwO".into()
}
fn default_reply_delay_ms() -> u64 {
    700
}
fn default_log_level() -> String {
    "info".into()
}
