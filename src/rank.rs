//! Document ordering.
//!
//! Stage 2 of the pipeline. Every scanned file gets a [`SortKey`]:
//!
//! - Names that follow the newsletter convention (see [`crate::naming`]) get a
//!   structured key `(phase, audience, language, name)`.
//! - Everything else gets a fallback key `(created, name)`.
//!
//! `SortKey` derives `Ord` with the structured variant declared first, so every
//! structured key sorts before every fallback key. Within a phase, owners come
//! before non-owners and Spanish before English. Fallback files are ordered by
//! creation time, oldest first. The `name` component is the lowercased file
//! name; two files whose names differ only in case are finally ordered by
//! their original file name so the result never depends on directory order.

use crate::naming::{self, Audience, Language};
use crate::scan::MediaFile;
use serde::Serialize;
use std::time::SystemTime;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SortKey {
    Structured {
        phase: u64,
        audience: Audience,
        language: Language,
        name: String,
    },
    Fallback {
        created: SystemTime,
        name: String,
    },
}

impl SortKey {
    pub fn is_structured(&self) -> bool {
        matches!(self, SortKey::Structured { .. })
    }
}

/// Compute the sort key for a single file.
pub fn sort_key(file: &MediaFile) -> SortKey {
    let name = file.file_name.to_lowercase();
    match naming::parse_media_name(&file.stem) {
        Some(parsed) => SortKey::Structured {
            phase: parsed.phase,
            audience: parsed.audience,
            language: parsed.language,
            name,
        },
        None => SortKey::Fallback {
            created: file.created,
            name,
        },
    }
}

/// Order scanned files into the final timeline.
pub fn rank(files: Vec<MediaFile>) -> Vec<(MediaFile, SortKey)> {
    let mut keyed: Vec<(MediaFile, SortKey)> = files
        .into_iter()
        .map(|file| {
            let key = sort_key(&file);
            debug!(
                file = %file.file_name,
                structured = key.is_structured(),
                "ranked"
            );
            (file, key)
        })
        .collect();

    keyed.sort_by(|(a_file, a_key), (b_file, b_key)| {
        a_key
            .cmp(b_key)
            .then_with(|| a_file.file_name.cmp(&b_file.file_name))
    });
    keyed
}
