use std::sync::Arc;

use crate::config::AppConfig;
use crate::metrics::Metrics;

/// The shared application state.
///
/// Holds everything the HTTP handlers and the background watcher share: the
/// immutable configuration and the gauge set. It's designed to be thread-safe
/// and cloneable for use with Axum's request extraction system.
#[derive(Clone)]
pub struct AppState {
    /// The application configuration.
    ///
    /// Contains server settings, the watched backup directory and the
    /// freshness policy. Immutable after startup.
    pub config: Arc<AppConfig>,
    /// The application metrics.
    ///
    /// Written by the watcher after every scan and read by the `/metrics`
    /// and `/status` handlers.
    pub metrics: Metrics,
}

impl AppState {
    /// Creates a new `AppState` with a fresh, all-zero gauge set.
    ///
    /// Until the first scan completes, `/metrics` reports the backup as not
    /// fresh and `/status` shows no last-backup data.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
            metrics: Metrics::new(),
        }
    }
}
