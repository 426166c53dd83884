use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

// Health check endpoint - lightweight, answers as long as the process lives
pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

// Readiness probe: checks that the watched directory is reachable, with
// timeout protection (backup targets are often network mounts)
pub async fn readyz(State(state): State<AppState>) -> impl IntoResponse {
    let stat = tokio::fs::metadata(&state.config.watcher.backup_dir);
    match tokio::time::timeout(std::time::Duration::from_secs(5), stat).await {
        Ok(Ok(meta)) if meta.is_dir() => (StatusCode::OK, "ready").into_response(),
        Ok(Ok(_)) => {
            (StatusCode::SERVICE_UNAVAILABLE, "not ready: backup path is not a directory")
                .into_response()
        }
        Ok(Err(e)) => (StatusCode::SERVICE_UNAVAILABLE, format!("not ready: {}", e)).into_response(),
        Err(_) => (StatusCode::SERVICE_UNAVAILABLE, "not ready: timeout").into_response(),
    }
}

// Status endpoint: returns the JSON snapshot, including the latest file path
// that the Prometheus exposition deliberately leaves out
pub async fn status(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.metrics.get_snapshot();
    Json(snapshot)
}

// Prometheus-compatible text exposition format
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    let m = state.metrics.get_snapshot();
    let body = format!(
        "# HELP backupwacht_backup_status 1 if the newest backup exists and is fresh\n# TYPE backupwacht_backup_status gauge\nbackupwacht_backup_status {}\n\
# HELP backupwacht_last_backup_timestamp_seconds Unix timestamp of the newest backup file\n# TYPE backupwacht_last_backup_timestamp_seconds gauge\nbackupwacht_last_backup_timestamp_seconds {}\n\
# HELP backupwacht_last_backup_size_bytes Size of the newest backup file\n# TYPE backupwacht_last_backup_size_bytes gauge\nbackupwacht_last_backup_size_bytes {}\n\
# HELP backupwacht_backup_folder_size_bytes Total size of the backup directory\n# TYPE backupwacht_backup_folder_size_bytes gauge\nbackupwacht_backup_folder_size_bytes {}\n\
# HELP backupwacht_backup_files Files in the backup directory\n# TYPE backupwacht_backup_files gauge\nbackupwacht_backup_files {}\n\
# HELP backupwacht_scans_completed Total scans completed\n# TYPE backupwacht_scans_completed counter\nbackupwacht_scans_completed {}\n\
# HELP backupwacht_scans_failed Total scans failed\n# TYPE backupwacht_scans_failed counter\nbackupwacht_scans_failed {}\n\
# HELP backupwacht_uptime_seconds Uptime seconds\n# TYPE backupwacht_uptime_seconds gauge\nbackupwacht_uptime_seconds {}\n",
        if m.backup_fresh { 1 } else { 0 },
        m.last_backup_timestamp,
        m.last_backup_size_bytes,
        m.backup_folder_size_bytes,
        m.backup_files,
        m.scans_completed,
        m.scans_failed,
        m.uptime_seconds,
    );
    ([(header::CONTENT_TYPE, "text/plain; version=0.0.4")], body)
}

// Version/Build info endpoint (JSON)
pub async fn version() -> impl IntoResponse {
    let body = serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "package": {
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "authors": env!("CARGO_PKG_AUTHORS"),
            "license": env!("CARGO_PKG_LICENSE"),
        },
        "build": {
            "profile": if cfg!(debug_assertions) { "debug" } else { "release" },
            "os": std::env::consts::OS,
            "arch": std::env::consts::ARCH,
        }
    });
    (StatusCode::OK, Json(body))
}
