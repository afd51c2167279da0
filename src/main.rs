mod app;
mod chat;
mod config;
mod model;
mod plan;
mod prompts;
mod scanner;
mod sessions;
mod state;
#[cfg(test)]
mod test_util;

use crate::app::{build_app, serve};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "healthcoach=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    // Fails here (before binding) when GEMINI_API_KEY is absent.
    let app_state = AppState::init()?;
    tracing::info!(model = %app_state.config.gemini_model, "model gateway configured");

    let app = build_app(app_state);
    serve(app).await
}
