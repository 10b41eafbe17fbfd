mod analysis;
mod config;
mod extract;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{CompletionGateway, OpenAiClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting resume analysis service v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Decide the completion gateway once; it is read-only afterwards. A
    // missing credential is not fatal: the service keeps serving and the
    // analysis endpoints report a configuration error.
    let gateway = match config.openai_api_key.clone() {
        Some(api_key) => {
            info!("OpenAI client initialized (model: {})", llm_client::MODEL);
            CompletionGateway::configured(OpenAiClient::new(api_key))
        }
        None => {
            error!("OPENAI_API_KEY environment variable not found; analysis endpoints will return a configuration error");
            CompletionGateway::unconfigured()
        }
    };

    let state = AppState { gateway };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
