//! IRC message parser.
//!
//! Turns one raw line into a [`Message`] using a single regular expression:
//!
//! ```text
//! [":" prefix " "] command *14(" " middle) [" " [":"] trailing]
//! prefix = nick [["!" user] "@" host]
//! ```
//!
//! The match is anchored at the start of the line only.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static MESSAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?::(([^@! ]*)(?:(?:!([^@]*))?@([^ ]*))?) )?",
        r"([^ ]+)",
        r"((?: [^: ][^ ]*){0,14})",
        r"(?: :?(.*))?",
    ))
    .expect("message grammar is a valid regex")
});

/// Reasons a line could not be turned into a [`Message`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line does not match the IRC message grammar: {0:?}")]
    Malformed(String),
}

/// A parsed IRC line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// The full prefix without its leading `:`.
    pub prefix: Option<String>,
    /// Sender nickname, or server name.
    pub nick: Option<String>,
    pub username: Option<String>,
    pub hostname: Option<String>,
    /// Textual command (`PRIVMSG`) or three-digit numeric (`366`).
    pub command: String,
    /// Middle parameters followed by the trailing one, if any.
    pub params: Vec<String>,
}

impl Message {
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let caps = MESSAGE_RE
            .captures(line)
            .ok_or_else(|| ParseError::Malformed(line.to_string()))?;
        let group = |i: usize| caps.get(i).map(|m| m.as_str().to_string());

        let command = group(5).ok_or_else(|| ParseError::Malformed(line.to_string()))?;

        // The middle block starts with a separator, so the first split
        // element is always empty.
        let middle = caps.get(6).map_or("", |m| m.as_str());
        let mut params: Vec<String> = middle.split(' ').skip(1).map(str::to_string).collect();
        match caps.get(7) {
            Some(trailing) if !trailing.as_str().is_empty() => {
                params.push(trailing.as_str().to_string())
            }
            _ => {}
        }

        Ok(Self {
            prefix: group(1),
            nick: group(2),
            username: group(3),
            hostname: group(4),
            command,
            params,
        })
    }

    /// First parameter, usually the target of the command.
    pub fn target(&self) -> Option<&str> {
        self.params.first().map(String::as_str)
    }

    /// Last parameter, usually the free-form text.
    pub fn text(&self) -> Option<&str> {
        self.params.last().map(String::as_str)
    }
}

impl std::str::FromStr for Message {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
