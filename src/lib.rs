//! # Image Timeline
//!
//! Generates a static browsing site from a folder of images: one HTML page per
//! image, a shared navigation bar, mobile controls and a pin-notes panel wired
//! to an external annotation script.
//!
//! # Architecture: Five-Stage Pipeline
//!
//! ```text
//! 1. Scan      pdfs/            →  files            (filesystem → MediaFile list)
//! 2. Rank      files            →  ordered files    (naming convention, then creation time)
//! 3. Label     ordered files    →  documents        (labels + unique slugs)
//! 4. Generate  documents        →  rendered pages   (maud templates, pure)
//! 5. Write     rendered pages   →  index.html, pages/*.html
//! ```
//!
//! Stages 1–3 are read-only and exposed together as [`site::plan`]; the whole
//! pipeline is [`site::build`]. Rendering never touches the filesystem, so the
//! templates are unit-tested as plain strings.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1: lists image files in the source folder |
//! | [`naming`] | Newsletter filename grammar shared by ranking and labeling |
//! | [`rank`] | Stage 2: sort keys and the final ordering |
//! | [`label`] | Stage 3: display labels and run-unique slugs |
//! | [`generate`] | Stage 4: HTML pages via Maud |
//! | [`write`] | Stage 5: stale page removal and page writes |
//! | [`site`] | Pipeline orchestration and the build report |
//! | [`config`] | Optional `site.toml` loading, merging and validation |
//! | [`types`] | The [`types::Document`] passed between stages |
//! | [`output`] | CLI report formatting |
//! | [`logging`] | `tracing` subscriber setup |
//!
//! # Ordering
//!
//! Files named like `[Fase N] Nuevos destinos - <Propietarios|No propietarios> - <ES|EN>`
//! come first, by phase, then owners before non-owners, then Spanish before
//! English. Anything else follows, oldest first. The first document is the
//! landing page; the rest live in the pages folder.
//!
//! # Determinism
//!
//! Given unchanged inputs, a rebuild produces byte-identical files: the scan is
//! sorted, every ordering tie is broken by file name, and rendering has no
//! timestamps or random identifiers.

pub mod config;
pub mod generate;
pub mod label;
pub mod logging;
pub mod naming;
pub mod output;
pub mod rank;
pub mod scan;
pub mod site;
pub mod types;
pub mod write;

#[cfg(test)]
pub(crate) mod test_helpers;
