//! Application state.
//!
//! Cloned into every handler. Holds the immutable configuration and the
//! executor that runs statements; there is no other shared state.

use std::sync::Arc;

use projman_core::query::QueryExecutor;

use crate::config::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Configuration built at startup.
    pub config: Arc<Config>,
    /// Statement executor (SQLite in production).
    pub executor: Arc<dyn QueryExecutor>,
}

impl AppState {
    pub fn new(config: Config, executor: Arc<dyn QueryExecutor>) -> Self {
        Self {
            config: Arc::new(config),
            executor,
        }
    }
}
