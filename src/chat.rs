//! Chat interface
//!
//! Drives the game state machine from user input and owns the transient UI
//! state (input text, in-flight flag, scroll request) that is not part of the
//! game itself.

mod backend;
mod controller;
mod http;

#[cfg(test)]
mod testing;

pub use backend::{BackendError, GameBackend, LocalBackend};
pub use controller::{ChatBox, Key, KeyPress, Pacing, PendingTurn, MAX_INPUT_CHARS};
pub use http::HttpBackend;
