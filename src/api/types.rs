//! API request and response types

use serde::{Deserialize, Serialize};

/// Response for `GET /api/theme`
#[derive(Debug, Serialize, Deserialize)]
pub struct ThemeResponse {
    pub theme: String,
}

/// Request body for `POST /api/gpt`
#[derive(Debug, Serialize, Deserialize)]
pub struct GptRequest {
    pub text: String,
    pub theme: String,
}

/// Response for `POST /api/gpt`
#[derive(Debug, Serialize, Deserialize)]
pub struct GptResponse {
    pub text: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
