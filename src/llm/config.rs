//! Environment-driven configuration for the judge's LLM backend

use super::openai::DEFAULT_MODEL;
use super::{LlmService, LoggingService, OpenAIService};
use std::sync::Arc;

/// Configuration for the LLM provider
#[derive(Debug, Clone, Default)]
pub struct LlmConfig {
    pub openai_api_key: Option<String>,
    /// OpenAI-compatible base URL (e.g., `http://localhost:8080/v1`)
    pub gateway: Option<String>,
    /// Model name sent to the completion endpoint
    pub model: Option<String>,
}

impl LlmConfig {
    pub fn from_env() -> Self {
        Self {
            openai_api_key: std::env::var("OPENAI_API_KEY").ok(),
            gateway: std::env::var("LLM_GATEWAY").ok(),
            model: std::env::var("JUDGE_MODEL").ok(),
        }
    }

    pub fn model_name(&self) -> &str {
        self.model
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_MODEL)
    }

    /// Build the logging-wrapped service, or `None` when no credential is
    /// configured. The caller decides how loudly to complain.
    pub fn build_service(&self) -> Option<Arc<dyn LlmService>> {
        let api_key = self.openai_api_key.as_ref().filter(|k| !k.is_empty())?;

        match OpenAIService::new(
            api_key.clone(),
            self.model_name().to_string(),
            self.gateway.as_deref(),
        ) {
            Ok(service) => Some(Arc::new(LoggingService::new(Arc::new(service)))),
            Err(e) => {
                tracing::error!(error = %e, "Failed to create LLM service");
                None
            }
        }
    }
}
