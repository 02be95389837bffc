// Main entry point for the chat API server

use anyhow::{Context, Result};
use chat_server::{
    server::{build_app, AxumAppState},
    Config,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,chat_server=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting GraphQL chat server");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        provider = ?config.chat_provider,
        model = %config.openai_model,
        credential_configured = config.openai_api_key.is_some(),
        "Configuration loaded"
    );
    if config.openai_api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; sendMessage will report a missing credential");
    }

    // Build application
    let app = build_app(AxumAppState::from_config(&config));

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    if config.graphiql_enabled {
        tracing::info!("GraphQL playground: http://localhost:{}/graphql", config.port);
    }
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
