//! Shared test utilities for the image-timeline test suite.
//!
//! Provides fixture setup, document builders and bulk extractors for the
//! pipeline's data structures.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_source(&["b.png", "a.png"]);
//! let docs = plan(tmp.path(), &SiteConfig::default()).unwrap();
//! assert_eq!(slugs(&docs), ["b", "a"]);
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;
use tempfile::TempDir;

use crate::label::slugify;
use crate::rank::SortKey;
use crate::types::Document;

// =========================================================================
// Fixture setup
// =========================================================================

/// Create a site root with a `pdfs/` folder holding empty files.
///
/// Files are created in the given order, so their creation times are
/// non-decreasing in that order.
pub fn setup_source(file_names: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("pdfs");
    std::fs::create_dir_all(&source).unwrap();
    for name in file_names {
        std::fs::write(source.join(name), b"").unwrap();
    }
    tmp
}

/// Build a document without touching the filesystem.
///
/// The slug is derived from the file stem; the sort key is a fallback key at
/// the epoch.
pub fn doc(label: &str, file_name: &str) -> Document {
    let stem = file_name
        .rsplit_once('.')
        .map(|(s, _)| s)
        .unwrap_or(file_name);
    Document {
        source_path: PathBuf::from("pdfs").join(file_name),
        file_name: file_name.to_string(),
        label: label.to_string(),
        alt: label.to_string(),
        slug: slugify(stem),
        sort_key: SortKey::Fallback {
            created: UNIX_EPOCH,
            name: file_name.to_lowercase(),
        },
    }
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// All labels in timeline order.
pub fn labels(docs: &[Document]) -> Vec<&str> {
    docs.iter().map(|d| d.label.as_str()).collect()
}

/// All slugs in timeline order.
pub fn slugs(docs: &[Document]) -> Vec<&str> {
    docs.iter().map(|d| d.slug.as_str()).collect()
}

// =========================================================================
// Output tree helpers
// =========================================================================

/// Every file under `root` with its bytes, keyed by relative path.
pub fn read_tree(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    walkdir::WalkDir::new(root)
        .into_iter()
        .map(|e| e.unwrap())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let rel = e.path().strip_prefix(root).unwrap().to_path_buf();
            (rel, std::fs::read(e.path()).unwrap())
        })
        .collect()
}

/// Relative paths of all generated `.html` files, sorted.
pub fn generated_files(root: &Path) -> Vec<PathBuf> {
    read_tree(root)
        .into_keys()
        .filter(|p| p.extension().is_some_and(|e| e == "html"))
        .collect()
}
