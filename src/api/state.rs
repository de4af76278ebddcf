//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use crate::config::ApiConfig;
use crate::store::{DocumentStore, ExerciseStore, UserStore};
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Document store handle, shared by all accessors
    pub docs: Arc<DocumentStore>,
    /// User store accessor
    pub users: Arc<UserStore>,
    /// Exercise store accessor
    pub exercises: Arc<ExerciseStore>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create AppState over an opened document store
    pub fn new(docs: Arc<DocumentStore>, config: ApiConfig) -> Self {
        Self {
            users: Arc::new(UserStore::new(Arc::clone(&docs))),
            exercises: Arc::new(ExerciseStore::new(Arc::clone(&docs))),
            docs,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
