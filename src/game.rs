//! Game state machine
//!
//! Pure state transitions in the Elm Architecture style: every mutation is an
//! [`Action`] applied by [`transition`], which returns the new state and the
//! effects the front end should react to.

mod action;
mod effect;
mod script;
mod state;
mod transition;
mod turn;

#[cfg(test)]
mod proptests;

pub use action::Action;
pub use effect::Effect;
pub use script::{GameScript, MAX_GAME_TURN};
pub use state::{ChatMessage, GameState, Phase, Sender};
pub use transition::{transition, TransitionError, TransitionResult};
pub use turn::{abandon_turn, begin_turn, resolve_turn, TurnOutcome, Verdict};
