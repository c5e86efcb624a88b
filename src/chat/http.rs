//! Backend that talks to a running rokinator server

use super::backend::{BackendError, GameBackend};
use crate::api::{GptRequest, GptResponse, ThemeResponse};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(90);

pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Result<Self, BackendError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| BackendError::Transport(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn theme_url(&self) -> String {
        format!("{}/api/theme", self.base_url)
    }

    pub fn gpt_url(&self) -> String {
        format!("{}/api/gpt", self.base_url)
    }

    async fn read_json<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, BackendError> {
        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status(status.as_u16()));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))
    }
}

#[async_trait]
impl GameBackend for HttpBackend {
    async fn fetch_theme(&self) -> Result<String, BackendError> {
        let response = self
            .client
            .get(self.theme_url())
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;
        let body: ThemeResponse = Self::read_json(response).await?;
        Ok(body.theme)
    }

    async fn classify(&self, theme: &str, question: &str) -> Result<String, BackendError> {
        let request = GptRequest {
            text: question.to_string(),
            theme: theme.to_string(),
        };
        let response = self
            .client
            .post(self.gpt_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;
        let body: GptResponse = Self::read_json(response).await?;
        Ok(body.text)
    }
}
