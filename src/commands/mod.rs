//! Bot commands.
//!
//! Channel messages of the form `@name [arg]` are parsed into an
//! [`Invocation`] and routed through a fixed table of handlers. Handlers are
//! pure: they return the [`Reply`] sequence and the session performs it.

pub mod convert;
pub mod ip;

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static INVOCATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@([^ ]+)(?: (.*))?").expect("invocation pattern is a valid regex"));

/// One step of a command's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Say(String),
    /// Throttle pause before the next line.
    Pause,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("missing argument")]
    MissingArgument,
    #[error("invalid number {input:?}")]
    InvalidNumber { input: String },
}

/// A `@name arg` command found in a channel message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invocation<'a> {
    pub name: &'a str,
    pub arg: Option<&'a str>,
}

/// Parse `@name` or `@name remainder`. Anything else is not a command.
pub fn parse_invocation(text: &str) -> Option<Invocation<'_>> {
    let caps = INVOCATION_RE.captures(text)?;
    Some(Invocation {
        name: caps.get(1)?.as_str(),
        arg: caps.get(2).map(|m| m.as_str()),
    })
}

type Handler = fn(Option<&str>) -> Result<Vec<Reply>, CommandError>;

const COMMANDS: &[(&str, Handler)] = &[
    ("help", help),
    ("repeat", repeat),
    ("convert", convert::run),
    ("ip", ip::run),
];

/// Run the handler named by `invocation`.
///
/// Unknown commands and handler failures produce no reply.
pub fn dispatch(invocation: &Invocation<'_>) -> Vec<Reply> {
    let Some((_, handler)) = COMMANDS.iter().find(|(name, _)| *name == invocation.name) else {
        tracing::debug!("ignoring unknown command @{}", invocation.name);
        return Vec::new();
    };
    match handler(invocation.arg) {
        Ok(replies) => replies,
        Err(e) => {
            tracing::warn!("@{} {:?} failed: {}", invocation.name, invocation.arg, e);
            Vec::new()
        }
    }
}

fn help(_arg: Option<&str>) -> Result<Vec<Reply>, CommandError> {
    Ok(vec![
        Reply::Say("@repeat <Message>".into()),
        Reply::Say("@convert <Number>".into()),
        Reply::Say("@ip <String>".into()),
    ])
}

fn repeat(arg: Option<&str>) -> Result<Vec<Reply>, CommandError> {
    Ok(vec![Reply::Say(arg.unwrap_or_default().to_string())])
}
