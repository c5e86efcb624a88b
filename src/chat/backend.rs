//! Where the chat gets its theme and answers from

use crate::judge::Judge;
use crate::llm::LlmError;
use crate::theme::ThemeProvider;
use async_trait::async_trait;
use thiserror::Error;

/// Failure of either external call. The chat treats every variant as
/// "no answer available", never as a wrong guess.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("judge failed: {0}")]
    Judge(#[from] LlmError),
    #[error("judge is not configured (missing OPENAI_API_KEY)")]
    JudgeUnavailable,
}

/// Theme source and classifier used by the chat controller
#[async_trait]
pub trait GameBackend: Send + Sync {
    async fn fetch_theme(&self) -> Result<String, BackendError>;

    async fn classify(&self, theme: &str, question: &str) -> Result<String, BackendError>;
}

/// In-process backend: no server involved
pub struct LocalBackend {
    themes: ThemeProvider,
    judge: Option<Judge>,
}

impl LocalBackend {
    pub fn new(themes: ThemeProvider, judge: Option<Judge>) -> Self {
        Self { themes, judge }
    }
}

#[async_trait]
impl GameBackend for LocalBackend {
    async fn fetch_theme(&self) -> Result<String, BackendError> {
        Ok(self.themes.pick())
    }

    async fn classify(&self, theme: &str, question: &str) -> Result<String, BackendError> {
        let judge = self.judge.as_ref().ok_or(BackendError::JudgeUnavailable)?;
        Ok(judge.classify(theme, question).await?)
    }
}
