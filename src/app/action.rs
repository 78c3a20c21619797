/// Something the session must do on the wire, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SendMessage { target: String, text: String },
    Pong { token: String },
    /// Wait the configured reply delay before the next action.
    Throttle,
}
