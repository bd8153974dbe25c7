use std::path::Path;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use predict_core::engine::EngineStats;
use predict_core::{LearnReport, PredictionEngine};
use tracing::debug;

use super::ApiError;

/// A [`PredictionEngine`] shared between threads.
///
/// Queries run under the read lock. `learn` and `commit` hold the write
/// lock for the whole call, so a commit never overlaps a learn or another
/// commit.
#[derive(Debug, Default)]
pub struct PredictionService {
    inner: RwLock<PredictionEngine>,
}

impl PredictionService {
    pub fn new(engine: PredictionEngine) -> Self {
        Self {
            inner: RwLock::new(engine),
        }
    }

    pub fn open(path: &Path) -> Result<Self, ApiError> {
        let engine = PredictionEngine::open(path).map_err(|e| match e {
            predict_core::dict::DictError::Io(io) => ApiError::Io {
                msg: format!("{}: {io}", path.display()),
            },
            other => other.into(),
        })?;
        Ok(Self::new(engine))
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, PredictionEngine>, ApiError> {
        self.inner
            .read()
            .map_err(|e| ApiError::Internal { msg: e.to_string() })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, PredictionEngine>, ApiError> {
        self.inner
            .write()
            .map_err(|e| ApiError::Internal { msg: e.to_string() })
    }

    pub fn complete(&self, prefix: &str) -> Result<Vec<String>, ApiError> {
        Ok(self.read()?.get_auto_complete_suggestions(prefix))
    }

    pub fn suggest(&self, prefix: &str) -> Result<Vec<String>, ApiError> {
        Ok(self.read()?.get_auto_suggest_word_suggestions(prefix))
    }

    pub fn next_words(&self, preceding: &str) -> Result<Vec<String>, ApiError> {
        Ok(self.read()?.get_next_word_suggestions(preceding))
    }

    pub fn correct(&self, word: &str) -> Result<Vec<String>, ApiError> {
        Ok(self.read()?.get_auto_correct_suggestions(word))
    }

    pub fn predict(&self, text: &str, limit: usize) -> Result<Vec<String>, ApiError> {
        Ok(self.read()?.get_all_predictions(text, limit))
    }

    /// [`predict`](Self::predict) with `predictions.default_limit`.
    pub fn predict_default(&self, text: &str) -> Result<Vec<String>, ApiError> {
        let limit = predict_core::settings::settings().predictions.default_limit;
        self.predict(text, limit)
    }

    pub fn learn(&self, text: &str, learn_new_words: bool) -> Result<LearnReport, ApiError> {
        let report = self.write()?.learn_data(text, learn_new_words);
        debug!(?report, "service learn");
        Ok(report)
    }

    pub fn commit(&self, destination: &Path) -> Result<usize, ApiError> {
        let engine = self.write()?;
        Ok(engine.commit(destination)?)
    }

    pub fn stats(&self) -> Result<EngineStats, ApiError> {
        Ok(self.read()?.stats())
    }

    /// Take the engine back out, e.g. to hand it to a single-threaded caller.
    pub fn into_inner(self) -> Result<PredictionEngine, ApiError> {
        self.inner
            .into_inner()
            .map_err(|e| ApiError::Internal { msg: e.to_string() })
    }
}
