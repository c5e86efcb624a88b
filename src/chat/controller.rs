//! Chat controller: request lifecycle around the game state machine

use super::backend::{BackendError, GameBackend};
use crate::game::{
    abandon_turn, begin_turn, resolve_turn, transition, Action, Effect, GameScript, GameState,
    TransitionResult, TurnOutcome,
};
use std::sync::Arc;
use std::time::Duration;

/// Longest question the chat accepts
pub const MAX_INPUT_CHARS: usize = 50;

/// Cosmetic delays shown before each onboarding message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pacing {
    delays: Vec<Duration>,
}

impl Pacing {
    pub fn standard() -> Self {
        Self {
            delays: vec![
                Duration::from_millis(50),
                Duration::from_millis(1000),
                Duration::from_millis(750),
            ],
        }
    }

    pub fn none() -> Self {
        Self { delays: Vec::new() }
    }

    /// `ROKINATOR_NO_PACING` set to anything disables the delays
    pub fn from_env() -> Self {
        if std::env::var_os("ROKINATOR_NO_PACING").is_some() {
            Self::none()
        } else {
            Self::standard()
        }
    }

    pub fn delay_before(&self, index: usize) -> Duration {
        self.delays.get(index).copied().unwrap_or(Duration::ZERO)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Char(char),
    Backspace,
    Other,
}

/// A key event as the front end saw it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    /// An input method is still composing text
    pub composing: bool,
}

impl KeyPress {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            composing: false,
        }
    }

    pub fn composing(key: Key) -> Self {
        Self {
            key,
            composing: true,
        }
    }
}

/// An accepted submission waiting for the judge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTurn {
    pub theme: String,
    pub question: String,
    /// Turn number after this submission was counted
    pub turn: u32,
}

pub struct ChatBox {
    backend: Arc<dyn GameBackend>,
    script: GameScript,
    pacing: Pacing,
    state: GameState,
    input: String,
    awaiting_response: bool,
    scroll_requested: bool,
}

impl ChatBox {
    pub fn new(backend: Arc<dyn GameBackend>, script: GameScript, pacing: Pacing) -> Self {
        Self {
            backend,
            script,
            pacing,
            state: GameState::new(),
            input: String::new(),
            awaiting_response: false,
            scroll_requested: false,
        }
    }

    pub fn backend(&self) -> Arc<dyn GameBackend> {
        Arc::clone(&self.backend)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn script(&self) -> &GameScript {
        &self.script
    }

    pub fn pacing(&self) -> &Pacing {
        &self.pacing
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_awaiting_response(&self) -> bool {
        self.awaiting_response
    }

    pub fn input_enabled(&self) -> bool {
        !self.awaiting_response && !self.state.is_finished()
    }

    /// True once after every change to the message history
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_requested)
    }

    fn commit(&mut self, result: TransitionResult) {
        for effect in &result.effects {
            match effect {
                Effect::MessageAppended(message) => {
                    tracing::debug!(id = message.id, sender = ?message.sender, "Message appended");
                    self.scroll_requested = true;
                }
                Effect::TurnRecorded { turn } => {
                    tracing::debug!(turn, "Turn recorded");
                }
                Effect::ThemeSet => tracing::info!("Theme set, game started"),
                Effect::GameFinished => {
                    tracing::info!(turns = result.new_state.user_turn(), "Game finished");
                }
            }
        }
        self.state = result.new_state;
    }

    fn dispatch(&mut self, action: Action) -> bool {
        match transition(&self.state, action) {
            Ok(result) => {
                self.commit(result);
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "Action rejected");
                false
            }
        }
    }

    // ============================================================
    // Initialization
    // ============================================================

    pub fn onboarding_len(&self) -> usize {
        self.script.onboarding.len()
    }

    pub fn push_onboarding(&mut self, index: usize) {
        if let Some(text) = self.script.onboarding.get(index).cloned() {
            self.dispatch(Action::ai(text));
        }
    }

    /// Seed the theme and announce the start. A failed fetch is logged and
    /// leaves the session initializing.
    pub fn apply_theme(&mut self, result: Result<String, BackendError>) -> bool {
        match result {
            Ok(theme) => {
                if !self.dispatch(Action::SetTheme { theme }) {
                    return false;
                }
                let ready = self.script.ready.clone();
                self.dispatch(Action::ai(ready));
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching theme");
                false
            }
        }
    }

    /// Onboarding messages, theme fetch, readiness message; in that order.
    pub async fn initialize(&mut self) -> bool {
        for index in 0..self.onboarding_len() {
            let delay = self.pacing.delay_before(index);
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            self.push_onboarding(index);
        }
        let result = self.backend.fetch_theme().await;
        self.apply_theme(result)
    }

    // ============================================================
    // Input
    // ============================================================

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Edits the input, or starts a submission on Enter. Enter does nothing
    /// while an input method is composing.
    pub fn handle_key(&mut self, press: KeyPress) -> Option<PendingTurn> {
        if !self.input_enabled() {
            return None;
        }
        match press.key {
            Key::Enter if press.composing => None,
            Key::Enter => self.begin_submit(),
            Key::Char(c) => {
                if self.input.chars().count() < MAX_INPUT_CHARS {
                    self.input.push(c);
                }
                None
            }
            Key::Backspace => {
                self.input.pop();
                None
            }
            Key::Other => None,
        }
    }

    // ============================================================
    // Submission
    // ============================================================

    /// Validate the input and record the question. Rejected input is
    /// cleared and nothing else changes.
    pub fn begin_submit(&mut self) -> Option<PendingTurn> {
        let question = std::mem::take(&mut self.input);

        if self.awaiting_response
            || question.trim().is_empty()
            || question.chars().count() > MAX_INPUT_CHARS
        {
            tracing::debug!(awaiting = self.awaiting_response, "Submission rejected");
            return None;
        }

        match begin_turn(&self.state, &question) {
            Ok((result, turn)) => {
                self.commit(result);
                self.awaiting_response = true;
                Some(PendingTurn {
                    theme: self.state.theme().to_string(),
                    question,
                    turn,
                })
            }
            Err(e) => {
                tracing::debug!(error = %e, "Submission rejected");
                None
            }
        }
    }

    /// Apply the judge's answer. The in-flight flag is cleared whatever
    /// happened. A failed call adds no answer: the game stays active, unless
    /// it was the last turn, which ends the game.
    pub fn complete_submit(
        &mut self,
        pending: PendingTurn,
        answer: Result<String, BackendError>,
    ) -> Option<TurnOutcome> {
        self.awaiting_response = false;

        let answer = match answer {
            Ok(answer) => answer,
            Err(e) => {
                tracing::error!(error = %e, turn = pending.turn, "Error fetching judge response");
                return self.abandon(&pending);
            }
        };

        match resolve_turn(&self.state, &self.script, pending.turn, &answer) {
            Ok((result, outcome)) => {
                self.commit(result);
                Some(outcome)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Answer arrived for a game that is not active");
                None
            }
        }
    }

    fn abandon(&mut self, pending: &PendingTurn) -> Option<TurnOutcome> {
        match abandon_turn(&self.state, &self.script, pending.turn) {
            Ok(Some(result)) => {
                self.commit(result);
                Some(TurnOutcome::OutOfTurns)
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "Failure arrived for a game that is not active");
                None
            }
        }
    }

    pub async fn submit(&mut self) -> Option<TurnOutcome> {
        let pending = self.begin_submit()?;
        let answer = self
            .backend
            .classify(&pending.theme, &pending.question)
            .await;
        self.complete_submit(pending, answer)
    }
}
