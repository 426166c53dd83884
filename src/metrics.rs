use serde::Serialize;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant, SystemTime};

use chrono::{DateTime, Utc};

use crate::scanner::ScanResult;

/// Gauge state shared between the watcher (single writer) and the HTTP
/// handlers (many readers).
///
/// Every value is an atomic, so readers never block a scan and a scrape that
/// lands mid-update sees a mix of old and new values at worst. That is fine
/// for Prometheus semantics; the next scrape converges.
#[derive(Clone)]
pub struct Metrics {
    /// 1 solange der letzte Scan erfolgreich war, ein Backup fand und dieses
    /// jünger als `max_age` ist.
    pub backup_fresh: Arc<AtomicBool>,
    /// Unix-Sekunden der jüngsten Backup-Datei, 0 = noch nie eine gesehen.
    pub last_backup_timestamp: Arc<AtomicI64>,
    pub last_backup_size: Arc<AtomicU64>,
    pub folder_size: Arc<AtomicU64>,
    pub backup_files: Arc<AtomicU64>,
    pub scans_completed: Arc<AtomicU64>,
    pub scans_failed: Arc<AtomicU64>,
    /// Path of the newest backup file. Kept out of the Prometheus exposition
    /// (label cardinality) and only surfaced in the JSON status snapshot.
    pub last_backup_file: Arc<RwLock<Option<String>>>,
    pub start_time: Instant,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            backup_fresh: Arc::new(AtomicBool::new(false)),
            last_backup_timestamp: Arc::new(AtomicI64::new(0)),
            last_backup_size: Arc::new(AtomicU64::new(0)),
            folder_size: Arc::new(AtomicU64::new(0)),
            backup_files: Arc::new(AtomicU64::new(0)),
            scans_completed: Arc::new(AtomicU64::new(0)),
            scans_failed: Arc::new(AtomicU64::new(0)),
            last_backup_file: Arc::new(RwLock::new(None)),
            start_time: Instant::now(),
        }
    }

    /// Publishes the result of a completed scan.
    ///
    /// With no file in the tree only the freshness gauge drops; the size and
    /// timestamp gauges keep their last known values so dashboards still show
    /// what the final backup looked like. A latest file whose re-stat failed
    /// updates everything except its size gauge.
    pub fn record_scan(&self, result: &ScanResult, max_age: Duration, now: SystemTime) {
        self.scans_completed.fetch_add(1, Ordering::Relaxed);

        let Some(latest) = &result.latest else {
            self.backup_fresh.store(false, Ordering::Relaxed);
            return;
        };

        // Eine mtime in der Zukunft ergibt Alter 0 und zählt damit als frisch.
        let age = now.duration_since(latest.modified).unwrap_or_default();
        self.backup_fresh.store(age <= max_age, Ordering::Relaxed);

        let timestamp = latest
            .modified
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0);
        self.last_backup_timestamp.store(timestamp, Ordering::Relaxed);

        if let Some(size) = latest.size {
            self.last_backup_size.store(size, Ordering::Relaxed);
        }
        self.folder_size.store(result.total_size, Ordering::Relaxed);
        self.backup_files.store(result.total_files, Ordering::Relaxed);

        if let Ok(mut guard) = self.last_backup_file.write() {
            *guard = Some(latest.path.display().to_string());
        }
    }

    /// Publishes a failed scan: the freshness gauge drops, everything else
    /// keeps its last known value.
    pub fn record_failure(&self) {
        self.scans_failed.fetch_add(1, Ordering::Relaxed);
        self.backup_fresh.store(false, Ordering::Relaxed);
    }

    pub fn get_snapshot(&self) -> MetricsSnapshot {
        let last_backup_timestamp = self.last_backup_timestamp.load(Ordering::Relaxed);
        let last_backup_size_bytes = self.last_backup_size.load(Ordering::Relaxed);
        let backup_folder_size_bytes = self.folder_size.load(Ordering::Relaxed);
        let last_backup_file = self
            .last_backup_file
            .read()
            .map(|guard| guard.clone())
            .unwrap_or(None);

        MetricsSnapshot {
            backup_fresh: self.backup_fresh.load(Ordering::Relaxed),
            last_backup_timestamp,
            last_backup_at: (last_backup_timestamp > 0)
                .then(|| DateTime::from_timestamp(last_backup_timestamp, 0))
                .flatten(),
            last_backup_file,
            last_backup_size_bytes,
            last_backup_size_human: format_bytes(last_backup_size_bytes),
            backup_folder_size_bytes,
            backup_folder_size_human: format_bytes(backup_folder_size_bytes),
            backup_files: self.backup_files.load(Ordering::Relaxed),
            scans_completed: self.scans_completed.load(Ordering::Relaxed),
            scans_failed: self.scans_failed.load(Ordering::Relaxed),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            collected_at: Utc::now(),
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time view of the gauges, served as JSON on `/status`.
#[derive(Serialize)]
pub struct MetricsSnapshot {
    pub backup_fresh: bool,
    pub last_backup_timestamp: i64,
    pub last_backup_at: Option<DateTime<Utc>>,
    pub last_backup_file: Option<String>,
    pub last_backup_size_bytes: u64,
    pub last_backup_size_human: String,
    pub backup_folder_size_bytes: u64,
    pub backup_folder_size_human: String,
    pub backup_files: u64,
    pub scans_completed: u64,
    pub scans_failed: u64,
    pub uptime_seconds: u64,
    pub collected_at: DateTime<Utc>,
}

/// Formats a byte count with SI prefixes (factor 1000), matching what most
/// backup tooling prints: `999` stays `"999 B"`, `1000` becomes `"1.0 kB"`.
pub fn format_bytes(bytes: u64) -> String {
    const UNIT: u64 = 1000;
    const PREFIXES: [char; 6] = ['k', 'M', 'G', 'T', 'P', 'E'];

    if bytes < UNIT {
        return format!("{} B", bytes);
    }
    let mut div = UNIT;
    let mut exp = 0usize;
    let mut n = bytes / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }
    format!("{:.1} {}B", bytes as f64 / div as f64, PREFIXES[exp])
}
