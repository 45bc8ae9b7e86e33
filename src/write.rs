//! Writing the site to disk.
//!
//! Stage 5 of the pipeline. Every build replaces the previous one: all `*.html`
//! files in the pages folder are removed before the new pages are written, so
//! a page for an image that was deleted or renamed never lingers in the
//! listing. Other files in the pages folder are left alone.
//!
//! Writes are full-file overwrites in UTF-8. There is no recovery from a
//! failed write; the error carries the path and the build stops.

use crate::config::PathsConfig;
use crate::generate::RenderedPage;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn io_at(path: &Path) -> impl FnOnce(io::Error) -> WriteError + '_ {
    move |source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Create the source and pages folders under `root` if they are missing.
pub fn ensure_dirs(root: &Path, paths: &PathsConfig) -> Result<(), WriteError> {
    for dir in [root.join(&paths.source), root.join(&paths.pages)] {
        fs::create_dir_all(&dir).map_err(io_at(&dir))?;
    }
    Ok(())
}

/// Delete every `*.html` file directly inside `pages_dir`.
///
/// Returns the removed paths in name order. A missing folder removes nothing.
pub fn clear_generated_pages(pages_dir: &Path) -> Result<Vec<PathBuf>, WriteError> {
    if !pages_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut stale = Vec::new();
    for entry in fs::read_dir(pages_dir).map_err(io_at(pages_dir))? {
        let path = entry.map_err(io_at(pages_dir))?.path();
        if path.is_file() && path.extension().is_some_and(|e| e == "html") {
            stale.push(path);
        }
    }
    stale.sort();

    for path in &stale {
        fs::remove_file(path).map_err(io_at(path))?;
        debug!(path = %path.display(), "removed stale page");
    }
    Ok(stale)
}

/// Write rendered pages under `root`, creating parent folders as needed.
///
/// Returns the absolute paths written, in input order.
pub fn write_pages(root: &Path, pages: &[RenderedPage]) -> Result<Vec<PathBuf>, WriteError> {
    let mut written = Vec::with_capacity(pages.len());
    for page in pages {
        let target = root.join(&page.path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(io_at(parent))?;
        }
        fs::write(&target, page.html.as_bytes()).map_err(io_at(&target))?;
        debug!(path = %target.display(), bytes = page.html.len(), "wrote page");
        written.push(target);
    }
    Ok(written)
}
