//! HTML page generation.
//!
//! Stage 4 of the pipeline. Takes the ordered, labeled documents and renders
//! one page per document. Rendering is pure: pages come back as strings with
//! their target path and [`crate::write`] puts them on disk.
//!
//! ## Generated Pages
//!
//! - **Landing page** (`index.html`): the first document in the ordering.
//! - **Subpages** (`pages/<slug>.html`): every other document.
//! - **Empty state** (`index.html`): rendered alone when there are no images.
//!
//! Every document page carries the same building blocks:
//!
//! - a top bar with the site title, the current label and the full navigation
//! - the image viewer
//! - the pin-notes panel, keyed by slug through `data-page-key`; its behavior
//!   lives in the external annotation script
//! - mobile controls: a pages dropdown and a previous/next stepper
//!
//! ## Relative Links
//!
//! The landing page sits at the site root and subpages one folder down, so
//! every link depends on where the referring page lives. [`Location`] carries
//! that and [`Links`] resolves document, asset and image URLs from it.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Labels are stored raw and escaped by maud in both text and attribute
//! positions.

use crate::config::{PathsConfig, SiteConfig};
use crate::types::Document;
use maud::{DOCTYPE, Markup, html};
use std::path::PathBuf;

/// Where a page is written, relative to the site root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// The site root (`index.html`).
    Root,
    /// Inside the pages folder.
    Nested,
}

impl Location {
    /// Location of the document at `index` in the ordering.
    pub fn of(index: usize) -> Self {
        if index == 0 {
            Location::Root
        } else {
            Location::Nested
        }
    }

    fn to_root(self) -> &'static str {
        match self {
            Location::Root => "",
            Location::Nested => "../",
        }
    }
}

/// Resolves URLs as seen from a page at a given [`Location`].
#[derive(Debug, Clone, Copy)]
pub struct Links<'a> {
    paths: &'a PathsConfig,
    location: Location,
}

impl<'a> Links<'a> {
    pub fn new(paths: &'a PathsConfig, location: Location) -> Self {
        Self { paths, location }
    }

    /// Link to the document at `index` in the ordering.
    pub fn document(&self, index: usize, doc: &Document) -> String {
        match (self.location, index) {
            (Location::Root, 0) => "index.html".to_string(),
            (Location::Nested, 0) => "../index.html".to_string(),
            (Location::Root, _) => format!("{}/{}", self.paths.pages, doc.page_file_name()),
            (Location::Nested, _) => doc.page_file_name(),
        }
    }

    /// Link to a shared asset given relative to the site root.
    pub fn asset(&self, path: &str) -> String {
        format!("{}{}", self.location.to_root(), path)
    }

    /// Image URL for a document, with the file name percent-encoded.
    pub fn media(&self, doc: &Document) -> String {
        format!(
            "{}{}/{}",
            self.location.to_root(),
            self.paths.source,
            urlencoding::encode(&doc.file_name)
        )
    }
}

/// A rendered page and where it goes.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    /// Target path relative to the site root.
    pub path: PathBuf,
    pub html: String,
}

/// Render every page of the site.
///
/// The first document becomes `index.html`; the rest go to the pages folder.
/// With no documents a single empty-state `index.html` is returned.
pub fn render_site(docs: &[Document], config: &SiteConfig) -> Vec<RenderedPage> {
    if docs.is_empty() {
        return vec![RenderedPage {
            path: PathBuf::from("index.html"),
            html: render_empty_page(config).into_string(),
        }];
    }

    docs.iter()
        .enumerate()
        .map(|(index, doc)| RenderedPage {
            path: page_path(index, doc, &config.paths),
            html: render_document_page(docs, index, config).into_string(),
        })
        .collect()
}

/// Target path of the document at `index`, relative to the site root.
pub fn page_path(index: usize, doc: &Document, paths: &PathsConfig) -> PathBuf {
    if index == 0 {
        PathBuf::from("index.html")
    } else {
        PathBuf::from(&paths.pages).join(doc.page_file_name())
    }
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(
    lang: &str,
    title: &str,
    stylesheet: &str,
    script: Option<&str>,
    body: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(lang) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1, viewport-fit=cover";
                title { (title) }
                link rel="stylesheet" href=(stylesheet);
            }
            body {
                (body)
                @if let Some(src) = script {
                    script src=(src) {}
                }
            }
        }
    }
}

/// Renders the top bar with brand and desktop navigation
fn topbar(site_title: &str, page_label: &str, nav: Markup) -> Markup {
    html! {
        header.topbar {
            div.brand {
                span.brand-app { (site_title) }
                span.brand-page { (page_label) }
            }
            nav.nav { (nav) }
        }
    }
}

/// Renders the desktop navigation links, marking the active document
pub fn render_nav(docs: &[Document], active: usize, links: &Links) -> Markup {
    html! {
        @if docs.is_empty() {
            span.nav-empty { "No images found" }
        }
        @for (index, doc) in docs.iter().enumerate() {
            a.nav-link.is-active[index == active] href=(links.document(index, doc)) title=(doc.label) {
                (doc.label)
            }
        }
    }
}

/// Renders the mobile dropdown links, same set as the desktop navigation
pub fn render_mobile_menu(docs: &[Document], active: usize, links: &Links) -> Markup {
    html! {
        @if docs.is_empty() {
            span.mobile-menu-empty { "No images found" }
        }
        @for (index, doc) in docs.iter().enumerate() {
            a.mobile-menu-link.is-active[index == active] href=(links.document(index, doc)) title=(doc.label) {
                (doc.label)
            }
        }
    }
}

fn step_button(href: Option<&str>, aria_label: &str, arrow: &str) -> Markup {
    html! {
        @if let Some(href) = href {
            a.mobile-step-btn href=(href) aria-label=(aria_label) { (arrow) }
        } @else {
            span.mobile-step-btn.is-disabled aria-hidden="true" { (arrow) }
        }
    }
}

/// Renders the floating mobile controls: pages dropdown plus prev/next stepper
pub fn render_mobile_controls(prev: Option<&str>, next: Option<&str>, menu: Markup) -> Markup {
    html! {
        div.mobile-fab-stack aria-label="Mobile navigation controls" {
            details.mobile-menu {
                summary.mobile-menu-toggle aria-label="Open pages menu" {
                    span.mobile-menu-bars aria-hidden="true" {}
                    span.mobile-menu-bars aria-hidden="true" {}
                    span.mobile-menu-bars aria-hidden="true" {}
                    span.sr-only { "Pages" }
                }
                nav.mobile-menu-panel { (menu) }
            }
            div.mobile-stepper role="navigation" aria-label="Page steps" {
                (step_button(prev, "Previous page", "←"))
                span.mobile-step-divider aria-hidden="true" {}
                (step_button(next, "Next page", "→"))
            }
        }
    }
}

/// Renders the image viewer
fn viewer(src: &str, alt: &str) -> Markup {
    html! {
        section.main-pane {
            div.viewer-wrap {
                img.media-viewer src=(src) alt=(alt);
            }
        }
    }
}

/// Renders the pin-notes panel scaffolding for the annotation script
pub fn render_notes_panel(page_key: &str) -> Markup {
    html! {
        aside.comments data-page-key=(page_key) {
            div.comments-top {
                h2 { "Pin Notes" }
                p.comment-hint { "Click on the image to place a pin and add a note." }
                p.comment-live.sr-only aria-live="polite" aria-atomic="true" role="status" {}
                p.comment-live-alert.sr-only aria-live="assertive" aria-atomic="true" {}
                label.comment-author-label for="comment-author" { "Your name" }
                input #comment-author .comment-author type="text" maxlength="40" placeholder="e.g. Ana";
                p.comment-count { "0 notes" }
                button.comment-clear type="button" { "Clear all notes" }
            }
            div.comment-log-wrap {
                h3.comment-log-title { "Chronological Notes" }
                p.comment-log-empty { "No notes yet." }
                ol.comment-log {}
            }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the page for the document at `index`
pub fn render_document_page(docs: &[Document], index: usize, config: &SiteConfig) -> Markup {
    let doc = &docs[index];
    let links = Links::new(&config.paths, Location::of(index));

    let prev = index
        .checked_sub(1)
        .map(|i| links.document(i, &docs[i]));
    let next = docs.get(index + 1).map(|d| links.document(index + 1, d));

    let body = html! {
        (topbar(&config.site.title, &doc.label, render_nav(docs, index, &links)))
        main.content {
            div.layout {
                (viewer(&links.media(doc), &doc.alt))
                (render_notes_panel(&doc.slug))
            }
        }
        (render_mobile_controls(
            prev.as_deref(),
            next.as_deref(),
            render_mobile_menu(docs, index, &links),
        ))
    };

    let title = format!("{} | {}", doc.label, config.site.title);
    let script = links.asset(&config.paths.script);
    base_document(
        &config.site.lang,
        &title,
        &links.asset(&config.paths.stylesheet),
        Some(script.as_str()),
        body,
    )
}

/// Renders the landing page shown when the source folder has no images
pub fn render_empty_page(config: &SiteConfig) -> Markup {
    let links = Links::new(&config.paths, Location::Root);
    let body = html! {
        (topbar(&config.site.title, &config.site.title, render_nav(&[], 0, &links)))
        main.content {
            div.empty-state {
                h1 { "No image files found" }
                p {
                    "Add files to the "
                    code { (config.paths.source) "/" }
                    " folder and run "
                    code { "image-timeline build" }
                    "."
                }
            }
        }
    };

    base_document(
        &config.site.lang,
        &config.site.title,
        &links.asset(&config.paths.stylesheet),
        None,
        body,
    )
}

// ============================================================================
// Tests
// ============================================================================
