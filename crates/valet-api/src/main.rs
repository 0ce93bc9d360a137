//! Valet REST API entry point.
//!
//! Reads configuration from the environment, opens the conversation store,
//! and serves the chat API. Fails fast when `OPENAI_API_KEY` is absent or
//! the store cannot be opened.

use tracing_subscriber::EnvFilter;

use valet_api::http::router::build_router;
use valet_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("valet=info,tower_http=warn")),
        )
        .with_target(false)
        .init();

    let config = valet_infra::config::load_config()?;
    let state = AppState::init(&config).await?;
    let router = build_router(state, &config.web_dir);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, model = %config.model, "valet listening");
    axum::serve(listener, router).await?;

    Ok(())
}
