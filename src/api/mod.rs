//! Host-facing layer: a lock-guarded engine plus process-wide setup calls.

mod service;
mod types;


pub use service::PredictionService;
pub use types::ApiError;

use std::path::Path;

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

pub fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Load a settings TOML file. Must run before the first engine is built.
pub fn settings_load_config(path: &Path) -> Result<(), ApiError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApiError::Io {
        msg: format!("{}: {e}", path.display()),
    })?;
    predict_core::settings::init_custom(content)?;
    Ok(())
}

pub fn settings_default_config() -> String {
    predict_core::settings::DEFAULT_SETTINGS_TOML.to_string()
}

/// Install JSON tracing into `log_dir`. Always `false` without the `trace`
/// feature.
pub fn trace_init(log_dir: &Path) -> bool {
    crate::trace_init::init_tracing(log_dir)
}
