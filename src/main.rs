use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{AppState, router};
use medibot_core::{
    CoreConfig, OpenAiAssistant,
    config::request_timeout_from_env_value,
    constants::DEFAULT_REST_ADDR,
};

/// Main entry point for the MediBot server
///
/// Serves the chat page and the REST API on the configured address. Configuration is read once
/// here, from the process environment and an optional `.env` file, and passed into the router.
///
/// # Environment Variables
/// - `MEDIBOT_REST_ADDR`: REST server address (default: "0.0.0.0:5000")
/// - `OPENAI_API_KEY`: chat API key (required)
/// - `MEDIBOT_MODEL`: chat model (default: "gpt-4.1-mini")
/// - `OPENAI_BASE_URL`: chat API base URL (default: "https://api.openai.com/v1")
/// - `MEDIBOT_REQUEST_TIMEOUT_SECS`: chat request timeout (default: 60)
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the chat API key is missing or malformed,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("medibot_run=info".parse()?)
                .add_directive("api_rest=info".parse()?)
                .add_directive("medibot_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("MEDIBOT_REST_ADDR").unwrap_or_else(|_| DEFAULT_REST_ADDR.into());

    let cfg = CoreConfig::new(
        &std::env::var("OPENAI_API_KEY").unwrap_or_default(),
        std::env::var("MEDIBOT_MODEL").ok(),
        std::env::var("OPENAI_BASE_URL").ok(),
        request_timeout_from_env_value(std::env::var("MEDIBOT_REQUEST_TIMEOUT_SECS").ok())?,
    )?;
    let assistant = OpenAiAssistant::new(cfg)?;

    let app = router(AppState::new(assistant));

    tracing::info!("++ Starting MediBot on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("-- MediBot stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
