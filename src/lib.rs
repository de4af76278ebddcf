//! # Fitlog
//!
//! A minimal exercise-tracking web API: clients create users, log timed
//! exercise entries against them, and query filtered logs.
//!
//! ## Modules
//!
//! - [`store`]: document store and typed user/exercise accessors
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fitlog::api::{serve, AppState};
//! use fitlog::config::Config;
//! use fitlog::store::DocumentStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!
//!     let docs = Arc::new(DocumentStore::open(config.store.path.as_ref())?);
//!     let state = AppState::new(Arc::clone(&docs), config.api.clone());
//!
//!     serve(state, &config.api).await?;
//!
//!     // Release the store connection once the server has drained
//!     docs.close().await;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod store;

// Re-export top-level types for convenience
pub use api::{build_router, serve, ApiError, ApiResult, AppState};
pub use config::{ApiConfig, Config, ConfigError, LoggingConfig, StoreConfig};
pub use store::{
    DocumentStore, Exercise, ExerciseStore, LogFilter, StoreError, StoreResult, User, UserStore,
    UserSummary,
};
