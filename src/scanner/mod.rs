use std::{
    fs,
    path::{Path, PathBuf},
    time::SystemTime,
};

use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::warn;
use walkdir::WalkDir;

use crate::error::ScanError;
use crate::types::ScanOptions;

/// The most-recently-modified regular file found by a scan.
#[derive(Debug, Clone, PartialEq)]
pub struct LatestFile {
    pub path: PathBuf,
    pub modified: SystemTime,
    /// Byte size from a fresh stat after the walk; `None` when that stat
    /// failed, e.g. because the file was rotated away mid-cycle.
    pub size: Option<u64>,
}

/// Result of one pass over the backup directory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanResult {
    /// Newest regular file, absent when the tree holds none.
    pub latest: Option<LatestFile>,
    /// Byte sum over all regular files under the root.
    pub total_size: u64,
    pub total_files: u64,
    pub total_dirs: u64,
}

/// Walks `root` recursively and accumulates size and latest-file signals.
///
/// Directories contribute nothing to `total_size`. The latest file is picked
/// with a strict `>` on the modification time, so an equal timestamp keeps
/// the earlier hit (traversal order decides that tie). Any traversal failure
/// aborts the scan as a whole; no partial result is returned.
pub fn scan(root: &Path, options: &ScanOptions) -> Result<ScanResult, ScanError> {
    let excludes = build_globset(&options.excludes)?;

    let mut result = ScanResult::default();
    let mut latest: Option<(PathBuf, SystemTime)> = None;

    let walker = WalkDir::new(root)
        .follow_links(options.follow_symlinks)
        .into_iter()
        .filter_entry(move |entry| !matches_excludes(entry.path(), &excludes));

    for entry in walker {
        let entry = entry.map_err(|err| {
            let path = err.path().map(Path::to_path_buf).unwrap_or_else(|| root.to_path_buf());
            ScanError::Walk { path, source: err }
        })?;

        let file_type = entry.file_type();
        if file_type.is_dir() {
            if entry.depth() > 0 {
                result.total_dirs += 1;
            }
            continue;
        }
        if !file_type.is_file() {
            // Symlinks (wenn nicht verfolgt), FIFOs, Sockets
            continue;
        }

        let meta = entry.metadata().map_err(|err| ScanError::Walk {
            path: entry.path().to_path_buf(),
            source: err,
        })?;
        result.total_files += 1;
        result.total_size = result.total_size.saturating_add(meta.len());

        let modified = meta.modified().map_err(|source| ScanError::Mtime {
            path: entry.path().to_path_buf(),
            source,
        })?;
        let newer = match &latest {
            Some((_, newest)) => modified > *newest,
            None => true,
        };
        if newer {
            latest = Some((entry.into_path(), modified));
        }
    }

    // Size comes from a second stat after the walk, so an in-flight backup
    // reports what is on disk now rather than what the traversal saw.
    result.latest = latest.map(|(path, modified)| {
        let size = match fs::metadata(&path) {
            Ok(meta) => Some(meta.len()),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "stat of latest backup file failed");
                None
            }
        };
        LatestFile { path, modified, size }
    });

    Ok(result)
}

fn build_globset(patterns: &[String]) -> Result<GlobSet, ScanError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        if pattern.trim().is_empty() {
            continue;
        }
        // Normalisiere Backslashes zu Slashes, damit Muster plattformunabhängig
        // mit der Pfadnormalisierung in `matches_excludes` übereinstimmen.
        let norm = pattern.trim().replace('\\', "/");
        builder.add(Glob::new(&norm)?);
    }
    Ok(builder.build()?)
}

fn matches_excludes(path: &Path, set: &GlobSet) -> bool {
    if set.is_empty() {
        return false;
    }
    let normalized = path.to_string_lossy().replace('\\', "/");
    set.is_match(&normalized)
}
