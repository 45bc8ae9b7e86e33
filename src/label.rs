//! Labels and slugs.
//!
//! Stage 3 of the pipeline. Turns ranked files into [`Document`]s with a
//! display label and a slug that is unique within the run.
//!
//! ## Slugs
//!
//! The file stem is lowercased, every run of characters outside `[a-z0-9]` is
//! collapsed into a single `-`, and leading/trailing dashes are stripped. A stem
//! with nothing left becomes [`PLACEHOLDER_SLUG`].
//!
//! Uniqueness is tracked by a [`SlugSet`] that the caller owns and threads
//! through labeling. A candidate already in the set gets `-2`, `-3`, ... until
//! it is free, and the chosen slug is registered before the next document is
//! labeled, so earlier documents in the ordering keep the bare slug.
//!
//! ## Labels
//!
//! Labels come from [`naming::display_label`]. They are stored raw and escaped
//! by the templates when rendered.

use crate::naming;
use crate::rank::SortKey;
use crate::scan::MediaFile;
use crate::types::Document;
use std::collections::HashSet;
use tracing::debug;

pub const PLACEHOLDER_SLUG: &str = "document";

/// Derive a slug from a filename stem.
///
/// - `"Photo"` → `"photo"`
/// - `"[Fase 1] Nuevos destinos - Propietarios - ES"` → `"fase-1-nuevos-destinos-propietarios-es"`
/// - `"--Año 2024!!"` → `"a-o-2024"`
/// - `"***"` → `"document"`
pub fn slugify(stem: &str) -> String {
    let mut slug = String::with_capacity(stem.len());
    let mut prev_dash = false;
    for c in stem.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
            prev_dash = false;
        } else if !prev_dash {
            slug.push('-');
            prev_dash = true;
        }
    }

    let trimmed = slug.trim_matches('-');
    if trimmed.is_empty() {
        PLACEHOLDER_SLUG.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Slugs already handed out during a run.
#[derive(Debug, Default)]
pub struct SlugSet {
    seen: HashSet<String>,
}

impl SlugSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `candidate`, suffixing it with `-2`, `-3`, ... if taken.
    pub fn claim(&mut self, candidate: &str) -> String {
        if self.seen.insert(candidate.to_string()) {
            return candidate.to_string();
        }
        let mut index = 2u32;
        loop {
            let suffixed = format!("{candidate}-{index}");
            if self.seen.insert(suffixed.clone()) {
                debug!(candidate, slug = %suffixed, "slug collision");
                return suffixed;
            }
            index += 1;
        }
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.seen.contains(slug)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// Build a single [`Document`], claiming its slug from `slugs`.
pub fn label_document(file: MediaFile, sort_key: SortKey, slugs: &mut SlugSet) -> Document {
    let label = naming::display_label(&file.stem);
    let slug = slugs.claim(&slugify(&file.stem));
    Document {
        source_path: file.path,
        file_name: file.file_name,
        alt: label.clone(),
        label,
        slug,
        sort_key,
    }
}

/// Label every ranked file, preserving order.
pub fn label_documents(ranked: Vec<(MediaFile, SortKey)>) -> Vec<Document> {
    let mut slugs = SlugSet::new();
    ranked
        .into_iter()
        .map(|(file, key)| label_document(file, key, &mut slugs))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::path::PathBuf;
    use std::time::UNIX_EPOCH;

    fn ranked(file_name: &str) -> (MediaFile, SortKey) {
        let stem = file_name
            .rsplit_once('.')
            .map(|(s, _)| s)
            .unwrap_or(file_name)
            .to_string();
        let file = MediaFile {
            path: PathBuf::from("pdfs").join(file_name),
            file_name: file_name.to_string(),
            stem,
            created: UNIX_EPOCH,
        };
        let key = crate::rank::sort_key(&file);
        (file, key)
    }

    // =========================================================================
    // slugify
    // =========================================================================

    #[test]
    fn slugify_lowercases() {
        assert_eq!(slugify("Photo"), "photo");
    }

    #[test]
    fn slugify_collapses_runs() {
        assert_eq!(slugify("a  --  b"), "a-b");
        assert_eq!(slugify("a_b.c"), "a-b-c");
    }

    #[test]
    fn slugify_strips_edges() {
        assert_eq!(slugify("  [hello] "), "hello");
    }

    #[test]
    fn slugify_newsletter_name() {
        assert_eq!(
            slugify("[Fase 1] Nuevos destinos - Propietarios - ES"),
            "fase-1-nuevos-destinos-propietarios-es"
        );
    }

    #[test]
    fn slugify_non_ascii_becomes_dash() {
        assert_eq!(slugify("Año 2024"), "a-o-2024");
        assert_eq!(slugify("café"), "caf");
    }

    #[test]
    fn slugify_empty_falls_back_to_placeholder() {
        assert_eq!(slugify(""), PLACEHOLDER_SLUG);
        assert_eq!(slugify("***"), PLACEHOLDER_SLUG);
        assert_eq!(slugify("ñ"), PLACEHOLDER_SLUG);
    }

    // =========================================================================
    // SlugSet
    // =========================================================================

    #[test]
    fn claim_returns_candidate_when_free() {
        let mut slugs = SlugSet::new();
        assert_eq!(slugs.claim("photo"), "photo");
        assert!(slugs.contains("photo"));
        assert_eq!(slugs.len(), 1);
    }

    #[test]
    fn claim_suffixes_in_sequence() {
        let mut slugs = SlugSet::new();
        assert_eq!(slugs.claim("photo"), "photo");
        assert_eq!(slugs.claim("photo"), "photo-2");
        assert_eq!(slugs.claim("photo"), "photo-3");
    }

    #[test]
    fn claim_skips_suffixes_already_taken() {
        let mut slugs = SlugSet::new();
        slugs.claim("photo");
        slugs.claim("photo-2");
        assert_eq!(slugs.claim("photo"), "photo-3");
    }

    #[test]
    fn new_set_is_empty() {
        assert!(SlugSet::new().is_empty());
    }

    // =========================================================================
    // label_documents
    // =========================================================================

    #[test]
    fn case_variants_get_distinct_slugs() {
        let docs = label_documents(vec![ranked("Photo.PNG"), ranked("photo.png")]);
        let slugs: Vec<&str> = docs.iter().map(|d| d.slug.as_str()).collect();
        assert_eq!(slugs, ["photo", "photo-2"]);
    }

    #[test]
    fn labels_follow_naming_convention() {
        let docs = label_documents(vec![
            ranked("[Fase 1] Nuevos destinos - No propietarios - EN.png"),
            ranked("[Fase 2] Nuevos destinos - Propietarios - ES.png"),
        ]);
        assert_eq!(docs[0].label, "[F1] - No propietarios - EN");
        assert_eq!(docs[1].label, "[F2] - Propietarios - ES");
    }

    #[test]
    fn alt_matches_label() {
        let docs = label_documents(vec![ranked("Team <photo>.jpg")]);
        assert_eq!(docs[0].label, "Team <photo>");
        assert_eq!(docs[0].alt, docs[0].label);
    }

    #[test]
    fn documents_keep_rank_order_and_source() {
        let docs = label_documents(vec![ranked("b.png"), ranked("a.png")]);
        assert_eq!(docs[0].file_name, "b.png");
        assert_eq!(docs[0].source_path, PathBuf::from("pdfs/b.png"));
        assert_eq!(docs[0].page_file_name(), "b.html");
        assert_eq!(docs[1].file_name, "a.png");
    }

    #[test]
    fn accumulator_is_threaded_across_calls() {
        let mut slugs = SlugSet::new();
        let (f1, k1) = ranked("x.png");
        let (f2, k2) = ranked("X.gif");
        assert_eq!(label_document(f1, k1, &mut slugs).slug, "x");
        assert_eq!(label_document(f2, k2, &mut slugs).slug, "x-2");
    }

    proptest! {
        #[test]
        fn slug_charset_and_edges(stem in "\\PC{0,40}") {
            let slug = slugify(&stem);
            prop_assert!(!slug.is_empty());
            prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
            prop_assert!(!slug.starts_with('-'));
            prop_assert!(!slug.ends_with('-'));
            prop_assert!(!slug.contains("--"));
        }

        #[test]
        fn claimed_slugs_are_distinct(candidates in proptest::collection::vec("[a-c]{1,2}(-[2-3])?", 0..30)) {
            let mut slugs = SlugSet::new();
            let claimed: Vec<String> = candidates.iter().map(|c| slugs.claim(c)).collect();
            let unique: HashSet<&String> = claimed.iter().collect();
            prop_assert_eq!(unique.len(), claimed.len());
        }
    }
}
