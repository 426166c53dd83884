use std::path::PathBuf;
use std::time::{Instant, SystemTime};

use tokio::task;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::metrics::format_bytes;
use crate::scanner;
use crate::state::AppState;
use crate::types::ScanOptions;

/// Background loop: scan, publish, wait for the next tick, repeat until the
/// token is cancelled.
///
/// The first scan runs immediately, so the gauges carry real values right
/// after startup instead of a full poll interval later.
pub async fn run(state: AppState, cancel: CancellationToken) {
    let mut ticker = tokio::time::interval(state.config.watcher.poll_interval());
    // Verpasste Ticks nicht nachholen; der nächste Scan liest ohnehin den
    // aktuellen Stand.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!(
        dir = %state.config.watcher.backup_dir,
        interval_secs = state.config.watcher.poll_interval_secs,
        max_age_hours = state.config.watcher.max_age_hours,
        "backup watcher started"
    );

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                info!("backup watcher stopped");
                break;
            }
            _ = ticker.tick() => {
                poll_once(&state).await;
            }
        }
    }
}

/// Runs a single scan on the blocking pool and publishes the outcome.
pub async fn poll_once(state: &AppState) {
    let root = PathBuf::from(&state.config.watcher.backup_dir);
    let options = ScanOptions::from(&state.config.watcher);
    let started = Instant::now();

    let outcome = task::spawn_blocking(move || scanner::scan(&root, &options)).await;

    match outcome {
        Ok(Ok(result)) => {
            state
                .metrics
                .record_scan(&result, state.config.watcher.max_age(), SystemTime::now());
            debug!(
                files = result.total_files,
                dirs = result.total_dirs,
                total = %format_bytes(result.total_size),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "scan finished"
            );
        }
        Ok(Err(err)) => {
            state.metrics.record_failure();
            error!(error = %err, "scan failed");
        }
        Err(err) => {
            state.metrics.record_failure();
            error!(error = %err, "scan task panicked");
        }
    }
}
