use predict_core::dict::DictError;
use predict_core::settings::SettingsError;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
    #[error("internal error: {msg}")]
    Internal { msg: String },
}

impl From<DictError> for ApiError {
    fn from(e: DictError) -> Self {
        match e {
            DictError::Io(io) => ApiError::Io { msg: io.to_string() },
            _ => ApiError::InvalidData { msg: e.to_string() },
        }
    }
}

impl From<SettingsError> for ApiError {
    fn from(e: SettingsError) -> Self {
        ApiError::InvalidData { msg: e.to_string() }
    }
}
