//! Shared types passed between pipeline stages.
//!
//! A [`Document`] is created fresh for every discovered image on each run and
//! carries everything the renderer and writer need. Nothing here is persisted.

use crate::rank::SortKey;
use serde::Serialize;
use std::path::PathBuf;

/// One image in the timeline, after ranking and labeling.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    /// Path to the source image.
    pub source_path: PathBuf,
    /// File name of the source image, extension included.
    pub file_name: String,
    /// Human-readable label shown in navigation and as page heading.
    ///
    /// Stored raw; escaping happens at the markup boundary.
    pub label: String,
    /// Alt text for the image viewer.
    pub alt: String,
    /// URL-safe slug, unique within the run.
    pub slug: String,
    /// Key the document was ordered by.
    pub sort_key: SortKey,
}

impl Document {
    /// Page file name inside the pages directory (`<slug>.html`).
    pub fn page_file_name(&self) -> String {
        format!("{}.html", self.slug)
    }
}
