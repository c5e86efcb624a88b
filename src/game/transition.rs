//! Pure state transition function
//!
//! Given the same state and action it always produces the same result, with
//! no I/O.

use super::state::{ChatMessage, GameState, Phase};
use super::{Action, Effect};
use thiserror::Error;

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: GameState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: GameState) -> Self {
        Self {
            new_state: state,
            effects: vec![],
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Errors that can occur during transition. The state is left untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("game is not accepting turns ({0:?})")]
    NotActive(Phase),
    #[error("theme has already been set")]
    ThemeAlreadySet,
    #[error("theme must not be empty")]
    EmptyTheme,
}

pub fn transition(state: &GameState, action: Action) -> Result<TransitionResult, TransitionError> {
    match action {
        Action::AppendMessage { sender, text } => {
            let message = ChatMessage {
                id: state.next_message_id(),
                text,
                sender,
            };
            let mut next = state.clone();
            next.messages.push(message.clone());
            Ok(TransitionResult::new(next).with_effect(Effect::MessageAppended(message)))
        }

        Action::RecordTurn => {
            if state.phase != Phase::Active {
                return Err(TransitionError::NotActive(state.phase));
            }
            let mut next = state.clone();
            next.user_turn += 1;
            let turn = next.user_turn;
            Ok(TransitionResult::new(next).with_effect(Effect::TurnRecorded { turn }))
        }

        Action::SetTheme { theme } => {
            if state.phase != Phase::Initializing || !state.theme.is_empty() {
                return Err(TransitionError::ThemeAlreadySet);
            }
            let theme = theme.trim();
            if theme.is_empty() {
                return Err(TransitionError::EmptyTheme);
            }
            let mut next = state.clone();
            next.theme = theme.to_string();
            next.phase = Phase::Active;
            Ok(TransitionResult::new(next).with_effect(Effect::ThemeSet))
        }

        Action::Finish => {
            if state.phase == Phase::Finished {
                return Ok(TransitionResult::new(state.clone()));
            }
            let mut next = state.clone();
            next.phase = Phase::Finished;
            Ok(TransitionResult::new(next).with_effect(Effect::GameFinished))
        }
    }
}
