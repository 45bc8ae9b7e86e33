//! CLI output formatting.
//!
//! Output is information-first: each document leads with its position in the
//! timeline and its label, with the source file and target page as indented
//! context lines.
//!
//! ## Check
//!
//! ```text
//! Timeline
//! 001 [F1] - No propietarios - EN
//!     Source: [Fase 1] Nuevos destinos - No propietarios - EN.png
//!     Order: phase 1, No propietarios, EN
//!     Page: index.html
//! 002 Team photo
//!     Source: Team photo.jpg
//!     Order: creation time
//!     Page: pages/team-photo.html
//! ```
//!
//! ## Build
//!
//! ```text
//! 001 [F1] - No propietarios - EN → index.html
//!     Source: [Fase 1] Nuevos destinos - No propietarios - EN.png
//! 002 Team photo → pages/team-photo.html
//!     Source: Team photo.jpg
//!
//! Removed 1 stale page
//! Generated 2 pages
//! ```
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::config::PathsConfig;
use crate::generate::page_path;
use crate::naming::{Audience, Language};
use crate::rank::SortKey;
use crate::site::BuildReport;
use crate::types::Document;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// Describe why a document sits where it does.
fn describe_key(key: &SortKey) -> String {
    match key {
        SortKey::Structured {
            phase,
            audience,
            language,
            ..
        } => {
            let audience = match audience {
                Audience::Propietarios => "Propietarios",
                Audience::NoPropietarios => "No propietarios",
            };
            let language = match language {
                Language::Es => "ES",
                Language::En => "EN",
            };
            format!("phase {phase}, {audience}, {language}")
        }
        SortKey::Fallback { .. } => "creation time".to_string(),
    }
}

fn empty_notice(paths: &PathsConfig) -> String {
    format!("No image files found in {}/", paths.source)
}

/// Format the planned timeline for `check`.
pub fn format_check_output(docs: &[Document], paths: &PathsConfig) -> Vec<String> {
    if docs.is_empty() {
        return vec![empty_notice(paths)];
    }

    let mut lines = vec!["Timeline".to_string()];
    for (i, doc) in docs.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), doc.label));
        lines.push(format!("    Source: {}", doc.file_name));
        lines.push(format!("    Order: {}", describe_key(&doc.sort_key)));
        lines.push(format!(
            "    Page: {}",
            page_path(i, doc, paths).display()
        ));
    }
    lines
}

pub fn print_check_output(docs: &[Document], paths: &PathsConfig) {
    for line in format_check_output(docs, paths) {
        println!("{}", line);
    }
}

/// Format the result of `build`.
pub fn format_build_output(report: &BuildReport, paths: &PathsConfig) -> Vec<String> {
    let mut lines = Vec::new();

    if report.documents.is_empty() {
        lines.push(empty_notice(paths));
        lines.push("Generated empty-state index.html".to_string());
        return lines;
    }

    for (i, (doc, page)) in report.documents.iter().zip(&report.pages).enumerate() {
        lines.push(format!(
            "{} {} → {}",
            format_index(i + 1),
            doc.label,
            page.display()
        ));
        lines.push(format!("    Source: {}", doc.file_name));
    }

    lines.push(String::new());
    if !report.removed.is_empty() {
        lines.push(format!("Removed {}", plural(report.removed.len(), "stale page")));
    }
    lines.push(format!("Generated {}", plural(report.pages.len(), "page")));
    lines
}

pub fn print_build_output(report: &BuildReport, paths: &PathsConfig) {
    for line in format_build_output(report, paths) {
        println!("{}", line);
    }
}
