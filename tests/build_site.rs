//! End-to-end site builds against temporary site roots.
//!
//! Run with: `cargo test --test build_site`

use image_timeline::config::{self, SiteConfig};
use image_timeline::site;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn site_with_images(names: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("pdfs");
    fs::create_dir_all(&source).unwrap();
    for name in names {
        fs::write(source.join(name), b"\x89PNG").unwrap();
    }
    tmp
}

fn html_files(root: &Path) -> BTreeMap<PathBuf, String> {
    let mut files = BTreeMap::new();
    let index = root.join("index.html");
    if index.exists() {
        files.insert(PathBuf::from("index.html"), fs::read_to_string(index).unwrap());
    }
    if let Ok(entries) = fs::read_dir(root.join("pages")) {
        for entry in entries {
            let path = entry.unwrap().path();
            let rel = path.strip_prefix(root).unwrap().to_path_buf();
            files.insert(rel, fs::read_to_string(&path).unwrap());
        }
    }
    files
}

#[test]
fn newsletter_example_orders_and_labels() {
    let tmp = site_with_images(&[
        "[Fase 2] Nuevos destinos - Propietarios - ES.png",
        "[Fase 1] Nuevos destinos - No propietarios - EN.png",
    ]);
    let report = site::build(tmp.path(), &SiteConfig::default()).unwrap();

    let labels: Vec<&str> = report.documents.iter().map(|d| d.label.as_str()).collect();
    assert_eq!(
        labels,
        ["[F1] - No propietarios - EN", "[F2] - Propietarios - ES"]
    );

    let files = html_files(tmp.path());
    let index = &files[&PathBuf::from("index.html")];
    assert!(index.contains(r#"<span class="brand-page">[F1] - No propietarios - EN</span>"#));
    assert!(index.contains(
        r#"href="pages/fase-2-nuevos-destinos-propietarios-es.html" aria-label="Next page""#
    ));

    let second = &files[&PathBuf::from("pages/fase-2-nuevos-destinos-propietarios-es.html")];
    assert!(second.contains(r#"href="../index.html" aria-label="Previous page""#));
    assert!(!second.contains(r#"aria-label="Next page""#));
    assert!(second.contains(r#"data-page-key="fase-2-nuevos-destinos-propietarios-es""#));
}

#[test]
fn case_variant_names_get_suffixed_slugs() {
    let tmp = site_with_images(&["Photo.PNG", "photo.png"]);
    let report = site::build(tmp.path(), &SiteConfig::default()).unwrap();

    let slugs: Vec<&str> = report.documents.iter().map(|d| d.slug.as_str()).collect();
    assert_eq!(slugs.len(), 2);
    assert!(slugs.contains(&"photo"));
    assert!(slugs.contains(&"photo-2"));
    assert_eq!(slugs[0], "photo");
}

#[test]
fn empty_source_produces_only_landing_page() {
    let tmp = site_with_images(&[]);
    site::build(tmp.path(), &SiteConfig::default()).unwrap();

    let files = html_files(tmp.path());
    assert_eq!(files.len(), 1);
    let index = &files[&PathBuf::from("index.html")];
    assert!(index.contains(r#"<div class="empty-state">"#));
    assert!(index.contains(r#"<span class="nav-empty">No images found</span>"#));
}

#[test]
fn rebuild_is_byte_identical() {
    let tmp = site_with_images(&[
        "[Fase 1] Nuevos destinos - Propietarios - ES.png",
        "[Fase 1] Nuevos destinos - Propietarios - EN.png",
        "Team photo.jpg",
        "cover.webp",
    ]);
    site::build(tmp.path(), &SiteConfig::default()).unwrap();
    let first = html_files(tmp.path());
    site::build(tmp.path(), &SiteConfig::default()).unwrap();
    assert_eq!(first, html_files(tmp.path()));
}

#[test]
fn removed_image_drops_its_page() {
    let tmp = site_with_images(&["a.png", "b.png", "c.png"]);
    site::build(tmp.path(), &SiteConfig::default()).unwrap();
    assert!(tmp.path().join("pages/c.html").exists());

    fs::remove_file(tmp.path().join("pdfs/c.png")).unwrap();
    site::build(tmp.path(), &SiteConfig::default()).unwrap();

    assert!(!tmp.path().join("pages/c.html").exists());
    let files = html_files(tmp.path());
    assert_eq!(files.len(), 2);
    for html in files.values() {
        assert!(!html.contains("c.html"));
    }
}

#[test]
fn every_page_links_to_every_document() {
    let tmp = site_with_images(&["a.png", "b.png", "c.png"]);
    let report = site::build(tmp.path(), &SiteConfig::default()).unwrap();
    let files = html_files(tmp.path());
    assert_eq!(files.len(), report.documents.len());

    for html in files.values() {
        assert_eq!(html.matches(r#"class="nav-link"#).count(), 3);
        assert_eq!(html.matches(r#"class="mobile-menu-link"#).count(), 3);
        assert_eq!(html.matches("is-active").count(), 2);
    }
}

#[test]
fn site_toml_is_applied() {
    let tmp = site_with_images(&["a.png"]);
    fs::write(
        tmp.path().join(config::CONFIG_FILE),
        "[site]\ntitle = \"Newsletter Review\"\nlang = \"es\"\n",
    )
    .unwrap();

    let site_config = config::load_config(tmp.path()).unwrap();
    site::build(tmp.path(), &site_config).unwrap();

    let index = fs::read_to_string(tmp.path().join("index.html")).unwrap();
    assert!(index.contains(r#"<html lang="es">"#));
    assert!(index.contains("<title>a | Newsletter Review</title>"));
}
