//! Reunion configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The file lives in
//! the submissions directory next to the profile files and overrides the
//! stock defaults key by key.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! language = "en"            # "en" or "he" (Hebrew pages render right-to-left)
//!
//! [event]
//! title = "Class Reunion"
//! subtitle = "Remember, reconnect, make new memories"
//! description = ""           # Markdown shown under the header
//!
//! [intake]
//! max_photo_bytes = 10485760 # Larger photos are dropped (logged, left unset)
//!
//! [colors.light]
//! background = "#f8fafc"
//! text = "#0f172a"
//! text_muted = "#64748b"     # Hints, captions, empty states
//! border = "#e2e8f0"
//! accent = "#0d9488"         # Active tab, headings, buttons
//! accent_hover = "#0f766e"
//!
//! [colors.dark]
//! background = "#0f172a"
//! text = "#e2e8f0"
//! text_muted = "#94a3b8"
//! border = "#334155"
//! accent = "#14b8a6"
//! accent_hover = "#2dd4bf"
//!
//! [processing]
//! max_processes = 4          # Max parallel photo encoders (omit for auto = CPU cores)
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Override just the values you want:
//!
//! ```toml
//! language = "he"
//!
//! [event]
//! title = "מפגש מחזור"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::locale::Language;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the config file inside the submissions directory.
pub const CONFIG_FILENAME: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Reunion configuration loaded from `config.toml`.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReunionConfig {
    /// Language of captions, export headers, notices, and page text.
    pub language: Language,
    /// Event title and header text.
    pub event: EventConfig,
    /// Limits applied while reading submissions.
    pub intake: IntakeConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
    /// Parallel encoding settings.
    pub processing: ProcessingConfig,
}

impl ReunionConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.event.title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "event.title must not be empty".into(),
            ));
        }
        if self.intake.max_photo_bytes == 0 {
            return Err(ConfigError::Validation(
                "intake.max_photo_bytes must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

/// Header text shown on every page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EventConfig {
    pub title: String,
    pub subtitle: String,
    /// Markdown rendered below the header. Empty means none.
    pub description: String,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            title: "Class Reunion".to_string(),
            subtitle: "Remember, reconnect, make new memories".to_string(),
            description: String::new(),
        }
    }
}

/// Submission intake limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IntakeConfig {
    /// Photos larger than this many bytes fail to encode and are left unset.
    pub max_photo_bytes: u64,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            max_photo_bytes: 10 * 1024 * 1024,
        }
    }
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel photo encoders.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config
        .max_processes
        .map(|n| n.clamp(1, cores))
        .unwrap_or(cores)
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub light: ColorScheme,
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
    pub background: String,
    pub text: String,
    /// Muted/secondary text (hints, captions, empty states).
    pub text_muted: String,
    pub border: String,
    /// Active tab, headings, and download buttons.
    pub accent: String,
    pub accent_hover: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#f8fafc".to_string(),
            text: "#0f172a".to_string(),
            text_muted: "#64748b".to_string(),
            border: "#e2e8f0".to_string(),
            accent: "#0d9488".to_string(),
            accent_hover: "#0f766e".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0f172a".to_string(),
            text: "#e2e8f0".to_string(),
            text_muted: "#94a3b8".to_string(),
            border: "#334155".to_string(),
            accent: "#14b8a6".to_string(),
            accent_hover: "#2dd4bf".to_string(),
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
/// This is the base layer user overrides are merged on top of.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(ReunionConfig::default()).expect("default config must serialize")
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

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `config.toml`.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(dir: &Path) -> Result<ReunionConfig, ConfigError> {
    let merged = match load_raw_config(dir)? {
        Some(overlay) => merge_toml(stock_defaults_value(), overlay),
        None => stock_defaults_value(),
    };
    let config: ReunionConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Reunion Book Configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file in the submissions directory, next to the profile files.
# Unknown keys will cause an error.

# Language of captions, export headers, notices, and page text: "en" or "he".
# Hebrew pages render right-to-left.
language = "en"

# ---------------------------------------------------------------------------
# Event header
# ---------------------------------------------------------------------------
[event]
title = "Class Reunion"
subtitle = "Remember, reconnect, make new memories"

# Markdown shown under the header on every page. Empty for none.
description = ""

# ---------------------------------------------------------------------------
# Submission intake
# ---------------------------------------------------------------------------
[intake]
# Photos larger than this are skipped with a warning; the profile is still
# accepted, just without that photo.
max_photo_bytes = 10485760

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#f8fafc"
text = "#0f172a"
text_muted = "#64748b"    # Hints, captions, empty states
border = "#e2e8f0"
accent = "#0d9488"        # Active tab, headings, buttons
accent_hover = "#0f766e"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0f172a"
text = "#e2e8f0"
text_muted = "#94a3b8"
border = "#334155"
accent = "#14b8a6"
accent_hover = "#2dd4bf"

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel photo encoders.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {light_bg};
    --color-text: {light_text};
    --color-text-muted: {light_text_muted};
    --color-border: {light_border};
    --color-accent: {light_accent};
    --color-accent-hover: {light_accent_hover};
}}

@media (prefers-color-scheme: dark) {{
    :root {{
        --color-bg: {dark_bg};
        --color-text: {dark_text};
        --color-text-muted: {dark_text_muted};
        --color-border: {dark_border};
        --color-accent: {dark_accent};
        --color-accent-hover: {dark_accent_hover};
    }}
}}"#,
        light_bg = colors.light.background,
        light_text = colors.light.text,
        light_text_muted = colors.light.text_muted,
        light_border = colors.light.border,
        light_accent = colors.light.accent,
        light_accent_hover = colors.light.accent_hover,
        dark_bg = colors.dark.background,
        dark_text = colors.dark.text,
        dark_text_muted = colors.dark.text_muted,
        dark_border = colors.dark.border,
        dark_accent = colors.dark.accent,
        dark_accent_hover = colors.dark.accent_hover,
    )
}
