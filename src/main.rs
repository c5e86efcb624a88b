//! Rokinator server
//!
//! Serves the theme and judge endpoints the chat client talks to.

use rokinator::api::{create_router, AppState};
use rokinator::judge::Judge;
use rokinator::llm::LlmConfig;
use rokinator::theme::ThemeProvider;
use std::net::SocketAddr;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rokinator=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration
    let port: u16 = std::env::var("ROKINATOR_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    let themes = ThemeProvider::from_env()?;
    tracing::info!(words = themes.words().len(), "Theme list loaded");

    let llm_config = LlmConfig::from_env();
    let judge = llm_config.build_service().map(Judge::new);
    match &judge {
        Some(judge) => tracing::info!(model = %judge.model_id(), "Judge initialized"),
        None => tracing::warn!("No LLM API key configured. Set OPENAI_API_KEY."),
    }

    let state = AppState::new(themes, judge);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let compression = CompressionLayer::new()
        .gzip(true)
        .br(true)
        .deflate(true)
        .zstd(true);

    let app = create_router(state)
        .layer(cors)
        .layer(compression)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Rokinator server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
