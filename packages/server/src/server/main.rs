// Main entry point for API server

use anyhow::{Context, Result};
use api_core::{server::build_app, Config};
use mongodb::Client;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,api_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting food-supply coordination API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Connect to the document store
    tracing::info!("Connecting to MongoDB...");
    let client = Client::with_uri_str(&config.mongodb_uri)
        .await
        .context("Failed to create MongoDB client")?;
    let db = client.database(&config.mongodb_db);
    tracing::info!("Connected to MongoDB");

    // Build application
    let (app, auth_service) = build_app(db, &config)?;

    // Back the email-uniqueness invariant with a store-level index before
    // accepting requests
    auth_service
        .ensure_indexes()
        .await
        .context("Failed to create account indexes")?;

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
