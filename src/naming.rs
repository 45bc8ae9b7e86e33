//! Filename parsing for the newsletter naming convention.
//!
//! Source images are exported from a design tool with names like:
//!
//! ```text
//! [Fase 1] Nuevos destinos - Propietarios - ES.png
//! [Fase 1] Nuevos destinos - No propietarios - EN.png
//! [F2] Propietarios - ES.jpg
//! ```
//!
//! Two parsers live here, one per consumer:
//!
//! - [`parse_media_name`] feeds the ranker. It is tolerant: `[Fase N]`, `[F N]`
//!   and `[FN]` prefixes are accepted and the `Nuevos destinos -` infix is
//!   optional.
//! - [`display_label`] feeds the labeler. It only rewrites names that carry the
//!   full `[Fase N] Nuevos destinos - ` prefix; anything else is shown as-is.
//!
//! Both match case-insensitively against the whitespace-trimmed stem.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static MEDIA_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\[(?:Fase\s*|F)\s*(\d+)\]\s*(?:Nuevos destinos\s*-\s*)?(Propietarios|No propietarios)\s*-\s*(ES|EN)$",
    )
    .expect("media name pattern must compile")
});

static LABEL_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\[Fase\s*(\d+)\]\s*Nuevos destinos\s*-\s*(.+)$")
        .expect("label pattern must compile")
});

/// Target audience of a newsletter asset. Owners come first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Audience {
    Propietarios,
    NoPropietarios,
}

/// Language of a newsletter asset. Spanish comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Language {
    Es,
    En,
}

/// Result of parsing a stem that follows the naming convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaName {
    pub phase: u64,
    pub audience: Audience,
    pub language: Language,
}

/// Parse a filename stem (no extension) against the ranking grammar.
///
/// - `"[Fase 2] Nuevos destinos - Propietarios - ES"` → phase 2, owners, Spanish
/// - `"[F3] No propietarios - EN"` → phase 3, non-owners, English
/// - `"  [fase 1] nuevos destinos - no propietarios - es "` → phase 1 (trimmed, any case)
/// - `"Photo"` → `None`
pub fn parse_media_name(stem: &str) -> Option<MediaName> {
    let caps = MEDIA_NAME.captures(stem.trim())?;
    // Absurdly long digit runs overflow; treat them as not matching.
    let phase = caps[1].parse::<u64>().ok()?;
    let audience = if caps[2].eq_ignore_ascii_case("propietarios") {
        Audience::Propietarios
    } else {
        Audience::NoPropietarios
    };
    let language = if caps[3].eq_ignore_ascii_case("es") {
        Language::Es
    } else {
        Language::En
    };
    Some(MediaName {
        phase,
        audience,
        language,
    })
}

/// Human-readable label for a filename stem.
///
/// - `"[Fase 1] Nuevos destinos - Propietarios - ES"` → `"[F1] - Propietarios - ES"`
/// - `"[Fase 2] Nuevos destinos - No propietarios - EN"` → `"[F2] - No propietarios - EN"`
/// - `"Team photo"` → `"Team photo"`
///
/// The phase digits are kept as written.
pub fn display_label(stem: &str) -> String {
    let stem = stem.trim();
    match LABEL_NAME.captures(stem) {
        Some(caps) => format!("[F{}] - {}", &caps[1], caps[2].trim()),
        None => stem.to_string(),
    }
}
