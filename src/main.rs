//! Fitlog API server
//!
//! Loads configuration, opens the document store, and serves the HTTP
//! API until a shutdown signal arrives. The store connection is
//! released once the server has drained.

use fitlog::api::{serve, AppState};
use fitlog::config::{Config, LoggingConfig};
use fitlog::store::DocumentStore;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Config first: the logging section drives subscriber setup
    let config = Config::load_default();
    init_logging(&config.logging);

    tracing::info!("Fitlog v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Store path: {}", config.store.path);

    let docs = Arc::new(DocumentStore::open(Path::new(&config.store.path))?);

    let state = AppState::new(Arc::clone(&docs), config.api.clone());

    serve(state, &config.api).await?;

    // Server has drained; release the store connection
    tracing::info!("Shutting down...");
    docs.close().await;

    tracing::info!("Fitlog shutdown complete");
    Ok(())
}

/// Initialize the tracing subscriber from the logging config
///
/// `RUST_LOG` still wins when set; otherwise the configured level
/// applies to this crate's spans.
fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| format!("fitlog={}", logging.level)),
    );

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
