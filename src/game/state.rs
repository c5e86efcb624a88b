//! Game state types

use serde::{Deserialize, Serialize};

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    #[serde(rename = "AI")]
    Ai,
    User,
}

/// One entry in the chat history. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Position in the history; unique and monotonic within a session
    pub id: u32,
    pub text: String,
    pub sender: Sender,
}

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Onboarding messages may be shown, no theme yet
    #[default]
    Initializing,
    /// Theme set, accepting turns
    Active,
    /// Terminal
    Finished,
}

/// Complete state of one game session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(super) theme: String,
    pub(super) messages: Vec<ChatMessage>,
    pub(super) user_turn: u32,
    pub(super) phase: Phase,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Secret word; empty until initialization completes
    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn user_turn(&self) -> u32 {
        self.user_turn
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn last_message(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub(super) fn next_message_id(&self) -> u32 {
        u32::try_from(self.messages.len()).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sender_wire_names() {
        assert_eq!(serde_json::to_string(&Sender::Ai).unwrap(), "\"AI\"");
        assert_eq!(serde_json::to_string(&Sender::User).unwrap(), "\"User\"");
    }

    #[test]
    fn fresh_state_is_initializing() {
        let state = GameState::new();
        assert_eq!(state.phase(), Phase::Initializing);
        assert!(state.theme().is_empty());
        assert!(state.messages().is_empty());
        assert_eq!(state.user_turn(), 0);
        assert!(!state.is_finished());
    }
}
