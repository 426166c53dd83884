use crate::config::WatcherConfig;

/// Options applied to a single directory scan.
///
/// With the defaults (`follow_symlinks = false`, no excludes) the scan visits
/// every entry under the root, which is the behavior the exporter ships with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Follow symbolic links instead of treating them as opaque entries.
    pub follow_symlinks: bool,
    /// Glob patterns; matching entries (and their subtrees) are skipped.
    pub excludes: Vec<String>,
}

impl From<&WatcherConfig> for ScanOptions {
    fn from(cfg: &WatcherConfig) -> Self {
        Self { follow_symlinks: cfg.follow_symlinks, excludes: cfg.excludes.clone() }
    }
}
