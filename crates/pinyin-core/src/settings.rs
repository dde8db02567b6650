//! Analysis settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`
//!
//! Callers that need several configurations side by side use
//! `parse_settings_toml` / `load_settings_file` directly instead.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::config::{ConfigError, NGramConfig, TransformConfig};
use crate::lookup::TableLookup;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), ConfigError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| ConfigError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub transform: TransformConfig,
    /// `None` when the `[ngram]` section is absent or disabled.
    pub ngram: Option<NGramConfig>,
    /// User readings layered over the builtin table.
    pub readings: TableLookup,
}

#[derive(Deserialize)]
struct RawSettings {
    transform: RawTransform,
    #[serde(default)]
    ngram: Option<RawNGram>,
    #[serde(default)]
    readings: BTreeMap<String, Vec<String>>,
}

#[derive(Deserialize)]
struct RawTransform {
    emit_original: bool,
    output_mode: String,
    min_qualifying_length: i64,
    #[serde(default)]
    max_readings: Option<usize>,
}

#[derive(Deserialize)]
struct RawNGram {
    enabled: bool,
    min_gram: usize,
    max_gram: usize,
    #[serde(default = "default_true")]
    emit_original: bool,
}

fn default_true() -> bool {
    true
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, ConfigError> {
    let raw: RawSettings =
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;

    let t = raw.transform;
    let mut transform = TransformConfig::new(
        t.emit_original,
        t.output_mode.parse()?,
        t.min_qualifying_length.max(1) as usize,
    );
    if let Some(max) = t.max_readings {
        transform = transform.with_max_readings(max)?;
    }

    let ngram = match raw.ngram {
        Some(n) if n.enabled => Some(NGramConfig::new(n.min_gram, n.max_gram, n.emit_original)?),
        _ => None,
    };

    Ok(Settings {
        transform,
        ngram,
        readings: TableLookup::from_map(&raw.readings)?,
    })
}

pub fn load_settings_file(path: &Path) -> Result<Settings, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_settings_toml(&content)
}
