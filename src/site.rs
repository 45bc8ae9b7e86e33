//! Pipeline orchestration.
//!
//! [`plan`] runs the read-only stages (scan, rank, label) and [`build`] adds
//! rendering and writing on top. Both work relative to a site root and the
//! resolved [`SiteConfig`].

use crate::config::{ConfigError, SiteConfig};
use crate::generate::{self, RenderedPage};
use crate::label;
use crate::rank;
use crate::scan::{self, ScanError};
use crate::types::Document;
use crate::write::{self, WriteError};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Outcome of a full build.
#[derive(Debug)]
pub struct BuildReport {
    /// Documents in timeline order. Empty for an empty-state build.
    pub documents: Vec<Document>,
    /// Pages written, relative to the site root.
    pub pages: Vec<PathBuf>,
    /// Stale pages removed before writing.
    pub removed: Vec<PathBuf>,
}

/// Scan, rank and label the images under `root`. Writes nothing.
pub fn plan(root: &Path, config: &SiteConfig) -> Result<Vec<Document>, BuildError> {
    let source = root.join(&config.paths.source);
    info!(source = %source.display(), "scanning");
    let files = scan::scan(&source)?;
    let ranked = rank::rank(files);
    let documents = label::label_documents(ranked);
    info!(documents = documents.len(), "planned timeline");
    Ok(documents)
}

/// Regenerate the whole site under `root`.
pub fn build(root: &Path, config: &SiteConfig) -> Result<BuildReport, BuildError> {
    write::ensure_dirs(root, &config.paths)?;
    let documents = plan(root, config)?;

    let rendered: Vec<RenderedPage> = generate::render_site(&documents, config);

    let removed = write::clear_generated_pages(&root.join(&config.paths.pages))?;
    info!(removed = removed.len(), "cleared stale pages");
    write::write_pages(root, &rendered)?;
    info!(pages = rendered.len(), "wrote site");

    Ok(BuildReport {
        documents,
        pages: rendered.into_iter().map(|p| p.path).collect(),
        removed,
    })
}
