//! Rokinator terminal chat
//!
//! Talks to a running server when `ROKINATOR_SERVER_URL` is set, otherwise
//! plays in-process with the same theme list and judge the server would use.

use rokinator::chat::{ChatBox, GameBackend, HttpBackend, LocalBackend, Pacing};
use rokinator::game::GameScript;
use rokinator::judge::Judge;
use rokinator::llm::LlmConfig;
use rokinator::theme::ThemeProvider;
use rokinator::tui;
use std::fs::File;
use std::sync::{Arc, Mutex};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    // The terminal belongs to the UI, so logs go to a file
    let path = std::env::temp_dir().join("rokinator-chat.log");
    let file = File::create(&path)?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rokinator=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .init();

    tracing::info!(path = %path.display(), "Chat logging initialized");
    Ok(())
}

fn build_backend() -> Result<Arc<dyn GameBackend>, Box<dyn std::error::Error>> {
    if let Ok(url) = std::env::var("ROKINATOR_SERVER_URL") {
        tracing::info!(url = %url, "Using remote server");
        return Ok(Arc::new(HttpBackend::new(&url)?));
    }

    let themes = ThemeProvider::from_env()?;
    let judge = LlmConfig::from_env().build_service().map(Judge::new);
    if judge.is_none() {
        tracing::warn!("No LLM API key configured; questions will fail");
    }
    Ok(Arc::new(LocalBackend::new(themes, judge)))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging()?;

    let backend = build_backend()?;
    let mut chat = ChatBox::new(backend, GameScript::default(), Pacing::from_env());

    tui::install_panic_hook();
    let mut terminal = tui::init()?;
    let result = tui::run(&mut terminal, &mut chat).await;
    tui::restore()?;

    result?;
    Ok(())
}
