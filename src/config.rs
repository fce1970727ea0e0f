//! Site configuration module.
//!
//! Handles loading, validating, and merging `roster.toml`. Config files are
//! sparse: user values are merged over stock defaults, unknown keys are
//! rejected to catch typos early, and the merged result is validated.
//!
//! ## Secrets come from the environment
//!
//! The build runs in CI against a private spreadsheet export, so the values
//! that must not live in the repository are taken from environment variables
//! after the file is loaded:
//!
//! | Variable             | Overrides          |
//! |----------------------|--------------------|
//! | `ROSTER_CSV_URL`     | `source`           |
//! | `ROSTER_ACCESS_CODE` | `site.access_code` |
//! | `ROSTER_SHEET_LINK`  | `site.sheet_link`  |
//!
//! Environment application goes through [`SiteConfig::apply_env`] with an
//! injected lookup function, so tests never mutate process environment.
//!
//! ## Required vs. optional
//!
//! The source location is the one required value: [`SiteConfig::resolve_source`]
//! fails with a descriptive error when neither the file nor the environment
//! provides it, before any output is written. The access code and sheet link
//! are optional — no code means no gate, no sheet link means the directory
//! button falls back to the source URL.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
    #[error(
        "no roster source configured: set `source` in roster.toml or the ROSTER_CSV_URL environment variable"
    )]
    MissingSource,
}

/// Site configuration loaded from `roster.toml`.
///
/// All fields have defaults except the source location, which must come from
/// the file or the environment before a build can start.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Roster source: an `http(s)` URL or a local CSV path.
    pub source: Option<String>,
    /// Published-site settings (base URL, title, gate code, sheet link).
    pub site: SiteInfo,
    /// Output tree layout (page and QR directory names).
    pub output: OutputLayout,
    /// QR image rendering settings.
    pub qr: QrConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            source: None,
            site: SiteInfo::default(),
            output: OutputLayout::default(),
            qr: QrConfig::default(),
            colors: ColorConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Overlay deploy secrets from an environment lookup.
    ///
    /// The lookup is injected (rather than reading `std::env` directly) so
    /// tests can exercise overrides without process-global mutation.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("ROSTER_CSV_URL") {
            self.source = Some(url);
        }
        if let Some(link) = lookup("ROSTER_SHEET_LINK") {
            self.site.sheet_link = Some(link);
        }
        if let Some(code) = lookup("ROSTER_ACCESS_CODE") {
            let code = code.trim().to_string();
            self.site.access_code = (!code.is_empty()).then_some(code);
        }
    }

    /// The configured source location, or a fatal error if there is none.
    pub fn resolve_source(&self) -> Result<&str, ConfigError> {
        self.source
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingSource)
    }

    /// Target of the directory page's "open the sheet" button.
    ///
    /// Falls back to the source URL when no explicit link is configured;
    /// `None` only when neither exists (the button is then omitted).
    pub fn sheet_link(&self) -> Option<&str> {
        self.site
            .sheet_link
            .as_deref()
            .or(self.source.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.base_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.base_url must not be empty".into(),
            ));
        }
        for (key, value) in [
            ("output.pages_dir", &self.output.pages_dir),
            ("output.qr_dir", &self.output.qr_dir),
        ] {
            if value.is_empty() || value.contains(['/', '\\']) {
                return Err(ConfigError::Validation(format!(
                    "{key} must be a single non-empty path component"
                )));
            }
        }
        if self.qr.module_size == 0 || self.qr.module_size > 32 {
            return Err(ConfigError::Validation(
                "qr.module_size must be 1-32".into(),
            ));
        }
        Ok(())
    }
}

/// Published-site settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    /// Public address the site will be served from; QR codes encode
    /// `{base_url}/{pages_dir}/{slug}.html`.
    pub base_url: String,
    /// Site title shown on every page.
    pub title: String,
    /// Contact address shown in the profile-page footer.
    pub contact_email: Option<String>,
    /// Target of the directory's "open the sheet" button.
    pub sheet_link: Option<String>,
    /// Shared access code for the directory gate. Only its SHA-256 digest is
    /// ever shipped; absent means the directory is not gated. This is a
    /// deterrent, not access control — the page data is still downloadable.
    pub access_code: Option<String>,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            base_url: "https://example.org".to_string(),
            title: "Member directory".to_string(),
            contact_email: None,
            sheet_link: None,
            access_code: None,
        }
    }
}

/// Output tree layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputLayout {
    /// Directory (under the output root) for profile pages and the index.
    pub pages_dir: String,
    /// Directory (under the output root) for QR images.
    pub qr_dir: String,
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self {
            pages_dir: "members".to_string(),
            qr_dir: "qrs".to_string(),
        }
    }
}

/// QR image rendering settings.
///
/// Fixed settings mean byte-identical PNGs across rebuilds of the same
/// roster, which keeps deploys idempotent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QrConfig {
    /// Pixels per QR module.
    pub module_size: u32,
    /// Render the quiet-zone border around the code.
    pub quiet_zone: bool,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            module_size: 6,
            quiet_zone: true,
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light mode color scheme.
    pub light: ColorScheme,
    /// Dark mode color scheme.
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    /// Page background.
    pub background: String,
    /// Card/table surface background.
    pub surface: String,
    /// Primary text color.
    pub text: String,
    /// Muted/secondary text (counters, footers).
    pub text_muted: String,
    /// Buttons and links.
    pub accent: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#f8f9fb".to_string(),
            surface: "#ffffff".to_string(),
            text: "#111111".to_string(),
            text_muted: "#555555".to_string(),
            accent: "#0d6efd".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0f1115".to_string(),
            surface: "#161a22".to_string(),
            text: "#e6e6e6".to_string(),
            text_muted: "#9aa1ac".to_string(),
            accent: "#4d8dff".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// The canonical representation of all default values, used as the base
/// layer for merging user overrides on top.
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

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file doesn't exist — running with stock
/// defaults plus environment variables is a supported setup.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
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

/// Load config from the given file path.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(path)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `roster.toml` with all keys documented.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Simple Roster Configuration
# ===========================
# All settings are optional except the roster source, which may also come
# from the ROSTER_CSV_URL environment variable (the environment wins).
# Values shown below are the defaults. Unknown keys are an error.

# Roster source: an http(s) URL to a CSV export, or a local CSV path.
# Usually left unset here and provided as a CI secret via ROSTER_CSV_URL.
# source = "https://docs.google.com/spreadsheets/d/.../export?format=csv"

# ---------------------------------------------------------------------------
# Published site
# ---------------------------------------------------------------------------
[site]
# Public address the site is served from. Each member's QR code encodes
# {base_url}/{pages_dir}/{slug}.html.
base_url = "https://example.org"

# Title shown on every generated page.
title = "Member directory"

# Contact address for the profile-page footer (omit to hide the footer).
# contact_email = "secretary@example.org"

# Target of the directory page's "Open the sheet" button.
# Defaults to the roster source URL. Also settable via ROSTER_SHEET_LINK.
# sheet_link = "https://docs.google.com/spreadsheets/d/.../edit"

# Shared access code for the directory gate. Only its SHA-256 digest is
# embedded in the page; no code means no gate. Also settable via
# ROSTER_ACCESS_CODE. NOTE: this is a deterrent, not access control — the
# directory data is still fully present in the downloaded page.
# access_code = "1959"

# ---------------------------------------------------------------------------
# Output tree layout (directories under the output root)
# ---------------------------------------------------------------------------
[output]
pages_dir = "members"
qr_dir = "qrs"

# ---------------------------------------------------------------------------
# QR images
# ---------------------------------------------------------------------------
[qr]
# Pixels per QR module (1-32).
module_size = 6

# Render the quiet-zone border around the code.
quiet_zone = true

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#f8f9fb"
surface = "#ffffff"
text = "#111111"
text_muted = "#555555"
accent = "#0d6efd"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0f1115"
surface = "#161a22"
text = "#e6e6e6"
text_muted = "#9aa1ac"
accent = "#4d8dff"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {light_bg};
    --color-surface: {light_surface};
    --color-text: {light_text};
    --color-text-muted: {light_text_muted};
    --color-accent: {light_accent};
}}

@media (prefers-color-scheme: dark) {{
    :root {{
        --color-bg: {dark_bg};
        --color-surface: {dark_surface};
        --color-text: {dark_text};
        --color-text-muted: {dark_text_muted};
        --color-accent: {dark_accent};
    }}
}}"#,
        light_bg = colors.light.background,
        light_surface = colors.light.surface,
        light_text = colors.light.text,
        light_text_muted = colors.light.text_muted,
        light_accent = colors.light.accent,
        dark_bg = colors.dark.background,
        dark_surface = colors.dark.surface,
        dark_text = colors.dark.text,
        dark_text_muted = colors.dark.text_muted,
        dark_accent = colors.dark.accent,
    )
}
