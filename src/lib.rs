//! Rokinator - a word-guessing chat game
//!
//! The player asks yes/no questions about a hidden theme word; an LLM judge
//! answers each one until the word is guessed or the turns run out.

pub mod api;
pub mod chat;
pub mod game;
pub mod judge;
pub mod llm;
pub mod theme;
pub mod tui;
