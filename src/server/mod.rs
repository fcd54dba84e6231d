pub mod handlers;
mod types;

pub use types::*;

use crate::{Result, config::Config, llm::GeminiClient};
use axum::{Router, routing::post};
use std::{net::SocketAddr, sync::Arc};
use tower_http::cors::CorsLayer;
use tracing::info;

pub async fn run(config: Config) -> Result<()> {
    // Initialize the completion client
    let client = GeminiClient::new(config.llm.clone());

    // Create application state
    let app_state = handlers::AppState {
        client: Arc::new(client),
        prompt_prefix: config.llm.prompt_prefix.clone(),
    };

    // Create router; the chatbox frontend calls from another origin
    let app = Router::new()
        .route("/webhook", post(handlers::webhook))
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Webhook listening on http://{}/webhook", addr);
    info!("Model: {}", config.llm.model);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
