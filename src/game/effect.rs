//! Effects produced by state transitions

use super::state::ChatMessage;

/// Observable consequences of a transition, consumed by the front end
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// History grew; re-render and scroll to the newest message
    MessageAppended(ChatMessage),
    /// Turn counter now holds `turn`
    TurnRecorded { turn: u32 },
    /// Theme seeded; the game accepts turns
    ThemeSet,
    /// Game reached its terminal state
    GameFinished,
}
