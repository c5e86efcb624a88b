//! Actions that drive the game state machine

use super::state::Sender;

/// The only ways game state can change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append a message; the reducer assigns its id
    AppendMessage { sender: Sender, text: String },
    /// Count one accepted user submission
    RecordTurn,
    /// Seed the secret word (once)
    SetTheme { theme: String },
    /// Mark the game finished
    Finish,
}

impl Action {
    pub fn ai(text: impl Into<String>) -> Self {
        Action::AppendMessage {
            sender: Sender::Ai,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Action::AppendMessage {
            sender: Sender::User,
            text: text.into(),
        }
    }
}
