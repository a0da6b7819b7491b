mod config;
mod routes;

use config::{ConfigError, ServerConfig};

/// Startup failures. Each one ends the process with a logged reason.
#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "leavedesk server stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    if dotenvy::dotenv().is_ok() {
        tracing::debug!("loaded .env");
    }
    let config = ServerConfig::from_env()?;
    let app = routes::app()?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr: addr.clone(), source })?;

    tracing::info!(port = config.port, "leavedesk listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
