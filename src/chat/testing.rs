//! Scripted backend for chat tests

use super::backend::{BackendError, GameBackend};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Backend returning a fixed theme and queued answers
pub struct ScriptedBackend {
    theme: Option<String>,
    answers: Mutex<VecDeque<Result<String, BackendError>>>,
    questions: Mutex<Vec<(String, String)>>,
}

impl ScriptedBackend {
    pub fn new(theme: &str) -> Self {
        Self {
            theme: Some(theme.to_string()),
            answers: Mutex::new(VecDeque::new()),
            questions: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_theme() -> Self {
        Self {
            theme: None,
            answers: Mutex::new(VecDeque::new()),
            questions: Mutex::new(Vec::new()),
        }
    }

    pub fn queue_answer(&self, answer: &str) {
        self.answers
            .lock()
            .unwrap()
            .push_back(Ok(answer.to_string()));
    }

    pub fn queue_failure(&self) {
        self.answers
            .lock()
            .unwrap()
            .push_back(Err(BackendError::Status(500)));
    }

    /// `(theme, question)` pairs in call order
    pub fn questions(&self) -> Vec<(String, String)> {
        self.questions.lock().unwrap().clone()
    }
}

#[async_trait]
impl GameBackend for ScriptedBackend {
    async fn fetch_theme(&self) -> Result<String, BackendError> {
        self.theme
            .clone()
            .ok_or_else(|| BackendError::Transport("connection refused".to_string()))
    }

    async fn classify(&self, theme: &str, question: &str) -> Result<String, BackendError> {
        self.questions
            .lock()
            .unwrap()
            .push((theme.to_string(), question.to_string()));
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(BackendError::Transport("no answer queued".to_string())))
    }
}
