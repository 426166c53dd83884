use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the backup-directory scan.
///
/// A `Walk` or `Mtime` error aborts the whole scan: the watcher publishes no
/// partial sizes for that cycle and only forces the status gauge unhealthy.
/// The next poll interval is the retry.
#[derive(Debug, Error)]
pub enum ScanError {
    /// An exclude pattern did not compile. Configuration validation catches
    /// this at startup, so hitting it during a scan means the options were
    /// built by hand.
    #[error("invalid exclude pattern: {0}")]
    Pattern(#[from] globset::Error),

    /// Traversal failed: the root is missing, a directory could not be read,
    /// or an entry could not be stat-ed mid-walk.
    #[error("cannot walk {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// An entry's modification time could not be read.
    #[error("cannot read modification time of {}: {source}", path.display())]
    Mtime {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
