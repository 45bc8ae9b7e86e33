//! Source folder scanning.
//!
//! Stage 1 of the pipeline. Lists the image files directly inside the source
//! folder and captures the filesystem facts later stages need (file name, stem
//! and creation time). Subdirectories are not descended into and nothing is
//! written.
//!
//! ## Recognized Files
//!
//! A regular file is picked up when its extension, compared case-insensitively,
//! is one of [`IMAGE_EXTENSIONS`]. Symlinks count when they point at a regular
//! file. Everything else (directories, sidecars, dangling links) is ignored.
//!
//! Results are returned in file-name order so that later stages never depend
//! on the order the operating system happens to list entries in.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use tracing::{debug, warn};
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Source folder not found: {0}")]
    MissingSource(PathBuf),
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif"];

/// An image file discovered in the source folder.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaFile {
    pub path: PathBuf,
    /// Full file name, extension included.
    pub file_name: String,
    /// File name without its final extension.
    pub stem: String,
    /// Creation time, or last status change where creation time is unavailable.
    pub created: SystemTime,
}

/// List the image files directly inside `source`.
pub fn scan(source: &Path) -> Result<Vec<MediaFile>, ScanError> {
    if !source.is_dir() {
        return Err(ScanError::MissingSource(source.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(source)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        let path = entry.path();
        if !is_image(path) {
            continue;
        }
        let (Some(file_name), Some(stem)) = (
            path.file_name().and_then(|n| n.to_str()),
            path.file_stem().and_then(|s| s.to_str()),
        ) else {
            warn!(path = %path.display(), "skipping image with non-UTF-8 file name");
            continue;
        };
        let metadata = fs::metadata(path).map_err(|source| ScanError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(file = file_name, "found image");
        files.push(MediaFile {
            path: path.to_path_buf(),
            file_name: file_name.to_string(),
            stem: stem.to_string(),
            created: created_at(&metadata),
        });
    }

    Ok(files)
}

/// Whether `path` is a regular file with an allowed image extension.
pub fn is_image(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    IMAGE_EXTENSIONS.contains(&ext.as_str())
}

/// Creation time of a file, falling back to its last status change.
pub fn created_at(metadata: &fs::Metadata) -> SystemTime {
    metadata
        .created()
        .unwrap_or_else(|_| status_changed_at(metadata))
}

#[cfg(unix)]
fn status_changed_at(metadata: &fs::Metadata) -> SystemTime {
    use std::os::unix::fs::MetadataExt;
    use std::time::Duration;

    let secs = metadata.ctime();
    if secs >= 0 {
        let nanos = u32::try_from(metadata.ctime_nsec()).unwrap_or(0);
        UNIX_EPOCH + Duration::new(secs.unsigned_abs(), nanos)
    } else {
        UNIX_EPOCH
            .checked_sub(Duration::from_secs(secs.unsigned_abs()))
            .unwrap_or(UNIX_EPOCH)
    }
}

#[cfg(not(unix))]
fn status_changed_at(metadata: &fs::Metadata) -> SystemTime {
    metadata.modified().unwrap_or(UNIX_EPOCH)
}
