//! The connection session: registration, then one receive loop.
//!
//! Each line is read, handled and fully answered (throttle pauses included)
//! before the next one is read. The session owns the transport, so the socket
//! is released whenever [`Session::run`] returns.

use crate::app::action::Action;
use crate::app::handler;
use crate::app::state::{Phase, SessionState};
use crate::irc::connection::Connection;
use std::io;
use std::time::Duration;
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncWrite};

pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(700);

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("connection error: {0}")]
    Io(#[from] io::Error),
}

/// Who the bot says it is during registration.
#[derive(Debug, Clone)]
pub struct Identity {
    pub nickname: String,
    pub realname: String,
}

pub struct Session<R, W> {
    conn: Connection<R, W>,
    state: SessionState,
    identity: Identity,
    channel_key: Option<String>,
    reply_delay: Duration,
}

impl<R, W> Session<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(conn: Connection<R, W>, state: SessionState, identity: Identity) -> Self {
        Self {
            conn,
            state,
            identity,
            channel_key: None,
            reply_delay: DEFAULT_REPLY_DELAY,
        }
    }

    pub fn channel_key(mut self, key: Option<String>) -> Self {
        self.channel_key = key;
        self
    }

    /// Pause inserted between throttled replies.
    pub fn reply_delay(mut self, delay: Duration) -> Self {
        self.reply_delay = delay;
        self
    }

    /// Register, join, then serve until the server closes the stream.
    ///
    /// Returns the final state. Consumes the session so the transport is
    /// dropped on every path out of here.
    pub async fn run(mut self) -> Result<SessionState, SessionError> {
        self.register().await?;

        while let Some(line) = self.conn.next_line().await? {
            if line.is_empty() {
                break;
            }
            tracing::debug!(">> {}", line);
            for action in handler::handle_line(&mut self.state, &line) {
                self.perform(action).await?;
            }
        }

        self.state.advance(Phase::Closed);
        Ok(self.state)
    }

    async fn register(&mut self) -> io::Result<()> {
        let Identity { nickname, realname } = &self.identity;
        self.conn.send(&format!("NICK {}", nickname)).await?;
        self.conn.send(&format!("USER {} 0 * :{}", nickname, realname)).await?;
        let join = match &self.channel_key {
            Some(key) => format!("JOIN {} {}", self.state.channel, key),
            None => format!("JOIN {}", self.state.channel),
        };
        self.conn.send(&join).await?;
        self.state.advance(Phase::Registering);
        Ok(())
    }

    async fn perform(&mut self, action: Action) -> io::Result<()> {
        match action {
            Action::SendMessage { target, text } => self.conn.send_privmsg(&target, &text).await,
            Action::Pong { token } => self.conn.send_pong(&token).await,
            Action::Throttle => {
                tokio::time::sleep(self.reply_delay).await;
                Ok(())
            }
        }
    }
}
