//! The game master: classifies a question about the secret theme word

use crate::llm::{LlmError, LlmRequest, LlmService};
use std::sync::Arc;

/// Instruction given to the model before the theme word is appended
pub const GAME_MASTER_PROMPT: &str = r"You're a game master of a word-estimating-game.
From now, you will be asked a question on the theme word.
Please pick a proper response among the following options.
- 正解 if the question refers the theme word.
- はい if the question is logically related to the theme word.
- いいえ if the question is logically unrelated to the theme word.
- どちらとも言えない if the question is ambiguous.
- わからない if you don't know the answer or the input is not a question.

You must output only one of the above options, without any additional explanation.
";

/// Build the system prompt for a given theme
pub fn system_prompt(theme: &str) -> String {
    format!("{GAME_MASTER_PROMPT}The theme word for this game is {theme}")
}

/// Judge client. Stateless per call; interpretation of the answer is left to
/// the caller.
#[derive(Clone)]
pub struct Judge {
    llm: Arc<dyn LlmService>,
}

impl Judge {
    pub fn new(llm: Arc<dyn LlmService>) -> Self {
        Self { llm }
    }

    pub fn model_id(&self) -> &str {
        self.llm.model_id()
    }

    /// Callers validate `theme` (non-empty) and `question` (1..=50 chars).
    pub async fn classify(&self, theme: &str, question: &str) -> Result<String, LlmError> {
        let request = LlmRequest::new(system_prompt(theme), question);
        let response = self.llm.complete(&request).await?;
        let answer = response.text().trim().to_string();
        tracing::debug!(answer = %answer, "Judge answered");
        Ok(answer)
    }
}
