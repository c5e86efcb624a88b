//! Turn resolution policy
//!
//! A turn is split around the judge call: [`begin_turn`] records the question
//! before the call, [`resolve_turn`] applies the answer after it. The turn
//! number returned by `begin_turn` is the one the termination check uses, so
//! "finished" means the stored count after this submission reached the limit.

use super::script::GameScript;
use super::state::{GameState, Phase};
use super::transition::{transition, TransitionError, TransitionResult};
use super::Action;
use std::fmt;

/// The judge's answer, interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Yes,
    No,
    Ambiguous,
    Unknown,
    /// Anything outside the five tokens
    Other(String),
}

impl Verdict {
    pub const CORRECT: &'static str = "正解";
    pub const YES: &'static str = "はい";
    pub const NO: &'static str = "いいえ";
    pub const AMBIGUOUS: &'static str = "どちらとも言えない";
    pub const UNKNOWN: &'static str = "わからない";

    /// Exact match on the token; no trimming or normalization
    pub fn from_token(token: &str) -> Self {
        match token {
            Self::CORRECT => Verdict::Correct,
            Self::YES => Verdict::Yes,
            Self::NO => Verdict::No,
            Self::AMBIGUOUS => Verdict::Ambiguous,
            Self::UNKNOWN => Verdict::Unknown,
            other => Verdict::Other(other.to_string()),
        }
    }

    pub fn token(&self) -> &str {
        match self {
            Verdict::Correct => Self::CORRECT,
            Verdict::Yes => Self::YES,
            Verdict::No => Self::NO,
            Verdict::Ambiguous => Self::AMBIGUOUS,
            Verdict::Unknown => Self::UNKNOWN,
            Verdict::Other(text) => text,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// How a resolved turn left the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    Continue,
    Solved,
    OutOfTurns,
}

fn chain(acc: TransitionResult, action: Action) -> Result<TransitionResult, TransitionError> {
    let step = transition(&acc.new_state, action)?;
    let mut effects = acc.effects;
    effects.extend(step.effects);
    Ok(TransitionResult {
        new_state: step.new_state,
        effects,
    })
}

/// Append the user's question and count the turn. Returns the turn number
/// after the increment.
pub fn begin_turn(
    state: &GameState,
    question: &str,
) -> Result<(TransitionResult, u32), TransitionError> {
    if state.phase() != Phase::Active {
        return Err(TransitionError::NotActive(state.phase()));
    }
    let result = chain(TransitionResult::new(state.clone()), Action::user(question))?;
    let result = chain(result, Action::RecordTurn)?;
    let turn = result.new_state.user_turn();
    Ok((result, turn))
}

/// Apply the judge's answer for the turn numbered `turn`.
pub fn resolve_turn(
    state: &GameState,
    script: &GameScript,
    turn: u32,
    answer: &str,
) -> Result<(TransitionResult, TurnOutcome), TransitionError> {
    if state.phase() != Phase::Active {
        return Err(TransitionError::NotActive(state.phase()));
    }
    let theme = state.theme().to_string();
    let verdict = Verdict::from_token(answer);
    let result = TransitionResult::new(state.clone());

    if verdict == Verdict::Correct {
        let result = chain(result, Action::ai(script.correct_message(&theme)))?;
        let result = chain(result, Action::Finish)?;
        return Ok((result, TurnOutcome::Solved));
    }

    if let Verdict::Other(text) = &verdict {
        tracing::warn!(answer = %text, "Judge answered outside the expected tokens");
    }

    let result = chain(result, Action::ai(verdict.token()))?;
    if turn >= script.max_turns {
        let result = chain(result, Action::ai(script.game_over_message(&theme)))?;
        let result = chain(result, Action::Finish)?;
        return Ok((result, TurnOutcome::OutOfTurns));
    }
    Ok((result, TurnOutcome::Continue))
}

/// Close a turn the judge never answered. Earlier turns leave the state as
/// it is so the question can be asked again; the last turn ends the game.
pub fn abandon_turn(
    state: &GameState,
    script: &GameScript,
    turn: u32,
) -> Result<Option<TransitionResult>, TransitionError> {
    if state.phase() != Phase::Active {
        return Err(TransitionError::NotActive(state.phase()));
    }
    if turn < script.max_turns {
        return Ok(None);
    }
    let theme = state.theme().to_string();
    let result = chain(
        TransitionResult::new(state.clone()),
        Action::ai(script.game_over_message(&theme)),
    )?;
    let result = chain(result, Action::Finish)?;
    Ok(Some(result))
}
