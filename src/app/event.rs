use crate::irc::message::Message;

/// RPL_WELCOME
pub const RPL_WELCOME: &str = "001";
/// RPL_ENDOFNAMES, sent once a JOIN has completed.
pub const RPL_ENDOFNAMES: &str = "366";

/// What a parsed server message means to the bot.
#[derive(Debug, PartialEq, Eq)]
pub enum IrcEvent<'a> {
    Welcome,
    EndOfNames,
    Ping { token: Option<&'a str> },
    /// A PRIVMSG with its target and text.
    ChannelMessage {
        from: Option<&'a str>,
        target: &'a str,
        text: &'a str,
    },
    Other,
}

impl<'a> IrcEvent<'a> {
    pub fn classify(msg: &'a Message) -> Self {
        match msg.command.as_str() {
            RPL_WELCOME => IrcEvent::Welcome,
            RPL_ENDOFNAMES => IrcEvent::EndOfNames,
            "PING" => IrcEvent::Ping { token: msg.text() },
            "PRIVMSG" if msg.params.len() >= 2 => IrcEvent::ChannelMessage {
                from: msg.nick.as_deref(),
                target: msg.target().unwrap_or_default(),
                text: msg.text().unwrap_or_default(),
            },
            _ => IrcEvent::Other,
        }
    }
}
