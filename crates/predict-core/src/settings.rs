//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Largest accepted `correction.max_distance`. Beyond this a BK-tree search
/// visits most of the tree and the suggestions stop being useful.
const MAX_CORRECTION_DISTANCE: usize = 4;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
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

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub correction: CorrectionSettings,
    pub predictions: PredictionSettings,
    pub load: LoadSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorrectionSettings {
    pub max_distance: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PredictionSettings {
    pub default_limit: usize,
    pub max_auto_suggest: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoadSettings {
    pub shuffle: bool,
    #[serde(default)]
    pub shuffle_seed: Option<u64>,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive_usize {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }

    check_positive_usize!(correction.max_distance);
    check_positive_usize!(predictions.default_limit);
    check_positive_usize!(predictions.max_auto_suggest);

    if s.correction.max_distance > MAX_CORRECTION_DISTANCE {
        return Err(SettingsError::InvalidValue {
            field: "correction.max_distance".to_string(),
            reason: format!("must be at most {MAX_CORRECTION_DISTANCE}"),
        });
    }

    Ok(())
}
