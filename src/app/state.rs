use crate::config::AppConfig;
use std::fmt;

pub const DEFAULT_GREETING: &str = "Hello! I am robot.";

/// Where the session stands in the connection lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Connecting,
    Registering,
    Joining,
    Active,
    Closed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Connecting => "connecting",
            Phase::Registering => "registering",
            Phase::Joining => "joining",
            Phase::Active => "active",
            Phase::Closed => "closed",
        };
        f.write_str(name)
    }
}

/// Mutable state of one connection, owned by the receive loop.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Configured channel, ASCII lower-cased.
    pub channel: String,
    pub greeting: String,
    /// Answer PING with the server token instead of the channel name.
    pub echo_ping_token: bool,
    /// Set once the join-complete numeric has been seen; never reset.
    pub intro_sent: bool,
    pub phase: Phase,
}

impl SessionState {
    pub fn new(channel: &str) -> Self {
        Self {
            channel: channel.to_ascii_lowercase(),
            greeting: DEFAULT_GREETING.to_string(),
            echo_ping_token: false,
            intro_sent: false,
            phase: Phase::Connecting,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            greeting: config.greeting.clone(),
            echo_ping_token: config.behavior.echo_ping_token,
            ..Self::new(&config.channel)
        }
    }

    /// Move to `phase`, returning whether anything changed.
    pub fn advance(&mut self, phase: Phase) -> bool {
        if self.phase == phase {
            return false;
        }
        tracing::info!("session {} -> {}", self.phase, phase);
        self.phase = phase;
        true
    }

    pub fn is_own_channel(&self, target: &str) -> bool {
        self.channel.eq_ignore_ascii_case(target)
    }
}
