//! HTTP request handlers

use super::types::{ErrorResponse, GptRequest, GptResponse, ThemeResponse};
use super::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Questions this long or longer are refused by the judge endpoint
pub const MAX_TEXT_CHARS: usize = 50;

/// Create the API router. Routes answer 405 to any other method.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/theme", get(get_theme))
        .route("/api/gpt", post(ask_judge))
        .route("/version", get(get_version))
        .with_state(state)
}

// ============================================================
// Theme
// ============================================================

async fn get_theme(State(state): State<AppState>) -> Json<ThemeResponse> {
    let theme = state.themes.pick();
    tracing::debug!("Theme picked");
    Json(ThemeResponse { theme })
}

// ============================================================
// Judge
// ============================================================

async fn ask_judge(
    State(state): State<AppState>,
    payload: Result<Json<GptRequest>, JsonRejection>,
) -> Result<Json<GptResponse>, AppError> {
    let Json(req) = payload.map_err(|e| {
        tracing::debug!(error = %e, "Rejected judge request body");
        AppError::BadRequest("Invalid text".to_string())
    })?;

    let text_len = req.text.chars().count();
    if text_len == 0 || text_len >= MAX_TEXT_CHARS || req.theme.is_empty() {
        return Err(AppError::BadRequest("Invalid text".to_string()));
    }

    let Some(judge) = state.judge.as_ref() else {
        tracing::error!("OPENAI_API_KEY is not set");
        return Err(AppError::Internal);
    };

    let text = judge.classify(&req.theme, &req.text).await.map_err(|e| {
        tracing::error!(error = %e, kind = ?e.kind, "Error fetching GPT response");
        AppError::Internal
    })?;

    Ok(Json(GptResponse { text }))
}

// ============================================================
// Version
// ============================================================

async fn get_version() -> &'static str {
    concat!("rokinator ", env!("CARGO_PKG_VERSION"))
}

// ============================================================
// Error Handling
// ============================================================

enum AppError {
    BadRequest(String),
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
