//! HTTP API: theme selection and the judge

mod handlers;
mod types;

pub use handlers::create_router;
pub use types::*;

use crate::judge::Judge;
use crate::theme::ThemeProvider;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub themes: Arc<ThemeProvider>,
    /// `None` when no credential is configured; `/api/gpt` answers 500
    pub judge: Option<Judge>,
}

impl AppState {
    pub fn new(themes: ThemeProvider, judge: Option<Judge>) -> Self {
        Self {
            themes: Arc::new(themes),
            judge,
        }
    }
}
