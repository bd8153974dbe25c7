pub mod dict;
pub mod engine;
pub mod fuzzy;
pub mod prefix;
pub mod settings;
pub mod successor;

pub use engine::{LearnReport, PredictionEngine};
