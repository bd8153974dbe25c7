//! Word prediction engine for text-entry hosts.
//!
//! The algorithms live in `predict-core`; this crate adds a thread-safe
//! service wrapper for hosts and optional JSON trace output.

pub mod api;
mod trace_init;

pub use trace_init::TRACE_FILE_NAME;

pub use predict_core::{dict, settings, LearnReport, PredictionEngine};
pub use predict_core::engine::EngineStats;
