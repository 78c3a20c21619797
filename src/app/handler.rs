use crate::app::action::Action;
use crate::app::event::IrcEvent;
use crate::app::state::{Phase, SessionState};
use crate::commands::{self, Reply};
use crate::irc::message::Message;

/// Parse one raw line and react to it. Unparseable lines are skipped.
pub fn handle_line(state: &mut SessionState, line: &str) -> Vec<Action> {
    match Message::parse(line) {
        Ok(msg) => {
            tracing::trace!(
                prefix = ?msg.prefix,
                user = ?msg.username,
                host = ?msg.hostname,
                "{} {:?}",
                msg.command,
                msg.params
            );
            handle_message(state, &msg)
        }
        Err(e) => {
            tracing::debug!("skipping line: {}", e);
            vec![]
        }
    }
}

pub fn handle_message(state: &mut SessionState, msg: &Message) -> Vec<Action> {
    match IrcEvent::classify(msg) {
        IrcEvent::Welcome => {
            if state.phase == Phase::Registering {
                state.advance(Phase::Joining);
            }
            vec![]
        }
        IrcEvent::EndOfNames if !state.intro_sent => {
            state.intro_sent = true;
            state.advance(Phase::Active);
            tracing::info!("joined {}, sending introduction", state.channel);
            vec![Action::SendMessage {
                target: state.channel.clone(),
                text: state.greeting.clone(),
            }]
        }
        IrcEvent::Ping { token } => {
            tracing::debug!("ping {:?}", token);
            let token = match token {
                Some(token) if state.echo_ping_token => token.to_string(),
                // Historical behaviour: answer with the channel name
                _ => state.channel.clone(),
            };
            vec![Action::Pong { token }]
        }
        IrcEvent::ChannelMessage { from, target, text } => {
            if !state.is_own_channel(target) {
                return vec![];
            }
            let Some(invocation) = commands::parse_invocation(text) else {
                return vec![];
            };
            tracing::info!(
                "command @{} {:?} from {}",
                invocation.name,
                invocation.arg,
                from.unwrap_or("?")
            );
            commands::dispatch(&invocation)
                .into_iter()
                .map(|reply| match reply {
                    Reply::Say(text) => Action::SendMessage {
                        target: state.channel.clone(),
                        text,
                    },
                    Reply::Pause => Action::Throttle,
                })
                .collect()
        }
        IrcEvent::EndOfNames | IrcEvent::Other => vec![],
    }
}
