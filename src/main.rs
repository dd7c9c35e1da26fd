use saffa_phrases::phrases::index::PhraseIndex;
use saffa_phrases::server::config::ServerConfig;
use saffa_phrases::server::routes::build_router;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env_and_args()?;

    let level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    // 1. Phrase index (must be complete before anything is served):
    let index = match PhraseIndex::load(&config.data_path) {
        Ok(index) => Arc::new(index),
        Err(e) => {
            tracing::error!("Failed to load phrase index: {}", e);
            return Err(e.into());
        }
    };
    tracing::info!("Categories: {:?}", index.categories());

    // 2. HTTP Router:
    let app = build_router(index);

    // 3. Start HTTP server:
    tracing::info!("HTTP server listening on {}", config.bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
    }
}
