//! Site configuration module.
//!
//! Handles loading, validating, and merging `site.toml`. The file is optional
//! and lives at the site root; stock defaults are overridden key by key by
//! whatever the user sets.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! title = "Image Timeline"   # Brand text and <title> suffix
//! lang = "en"                # <html lang> attribute
//!
//! [paths]
//! source = "pdfs"            # Image folder, relative to the site root
//! pages = "pages"            # Generated subpage folder, relative to the site root
//! stylesheet = "styles.css"  # Shared stylesheet, relative to the site root
//! script = "comments.js"     # Annotation script, relative to the site root
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Override just the values you want:
//!
//! ```toml
//! [site]
//! title = "Newsletter Review"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path};
use thiserror::Error;

pub const CONFIG_FILE: &str = "site.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `site.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Branding shown on every page.
    pub site: SiteSection,
    /// Locations of inputs, outputs and shared assets.
    pub paths: PathsConfig,
}

/// Branding settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSection {
    /// Brand text in the top bar, also appended to every `<title>`.
    pub title: String,
    /// Value of the `<html lang>` attribute.
    pub lang: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "Image Timeline".to_string(),
            lang: "en".to_string(),
        }
    }
}

/// Paths relative to the site root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Folder holding the source images.
    pub source: String,
    /// Folder receiving one HTML file per non-landing document.
    pub pages: String,
    /// Shared stylesheet. Referenced, never generated.
    pub stylesheet: String,
    /// Annotation script. Referenced, never generated.
    pub script: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            source: "pdfs".to_string(),
            pages: "pages".to_string(),
            stylesheet: "styles.css".to_string(),
            script: "comments.js".to_string(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are usable for page generation.
    ///
    /// `source` and `pages` must be single relative segments: nested pages link
    /// back to the root with a single `../`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.title must not be empty".into(),
            ));
        }
        if self.site.lang.trim().is_empty() {
            return Err(ConfigError::Validation("site.lang must not be empty".into()));
        }
        for (key, value) in [
            ("paths.source", &self.paths.source),
            ("paths.pages", &self.paths.pages),
        ] {
            if !is_single_segment(value) {
                return Err(ConfigError::Validation(format!(
                    "{key} must be a single folder name relative to the site root, got {value:?}"
                )));
            }
        }
        if self.paths.source == self.paths.pages {
            return Err(ConfigError::Validation(
                "paths.source and paths.pages must differ".into(),
            ));
        }
        for (key, value) in [
            ("paths.stylesheet", &self.paths.stylesheet),
            ("paths.script", &self.paths.script),
        ] {
            if !is_relative_file(value) {
                return Err(ConfigError::Validation(format!(
                    "{key} must be a relative path, got {value:?}"
                )));
            }
        }
        Ok(())
    }
}

fn is_single_segment(value: &str) -> bool {
    let mut components = Path::new(value).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !value.contains(['/', '\\'])
}

fn is_relative_file(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with(['/', '\\'])
        && Path::new(value)
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged onto.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `site.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(root: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = root.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `site.toml` in the site root, falling back to defaults.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `site.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Image Timeline Configuration
# ============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file at the site root as site.toml.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Branding
# ---------------------------------------------------------------------------
[site]
# Shown in the top bar and appended to every page title.
title = "Image Timeline"

# Value of the <html lang> attribute.
lang = "en"

# ---------------------------------------------------------------------------
# Paths (relative to the site root)
# ---------------------------------------------------------------------------
[paths]
# Folder holding the source images. Created if missing.
source = "pdfs"

# Folder for generated subpages. Every *.html inside is replaced on each build.
pages = "pages"

# Shared stylesheet and annotation script. Referenced, never generated.
stylesheet = "styles.css"
script = "comments.js"
"##
}
