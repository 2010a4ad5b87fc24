use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod routes;

use config::ServerConfig;

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;
    if !config.dir.join("index.html").exists() {
        warn!("No index.html in {}; build the frontend with `trunk build` first", config.dir.display());
    }

    let app = routes::build_router(&config.dir);

    use tokio::net::TcpListener;

    let listener = TcpListener::bind(config.addr()).await?;
    info!("Revel landing page server");
    info!("Serving directory: {}", config.dir.display());
    info!("Server running at: http://localhost:{}", config.port);
    info!("Press Ctrl+C to stop the server");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
