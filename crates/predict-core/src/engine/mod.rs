//! Hybrid word prediction: completion, correction and next-word lookup over
//! one corpus, plus online learning.
//!
//! The engine owns three indexes built from the same dictionary:
//! - [`PrefixIndex`] for completion, and as the record of which words are known
//! - [`FuzzyIndex`] for correction
//! - [`SuccessorStore`] for next-word prediction
//!
//! Queries take `&self`; [`learn_data`](PredictionEngine::learn_data) takes
//! `&mut self`. There is no internal locking: callers sharing an engine
//! across threads wrap it in a lock (see the root crate's
//! `PredictionService`).

mod dispatch;
mod learn;
#[cfg(test)]
mod tests;

pub use dispatch::{dispatch, Dispatch};
pub use learn::LearnReport;

use std::cmp::Reverse;
use std::io::BufRead;
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug_span, info};

use crate::dict::{read_corpus, read_corpus_file, DictError, DictLine};
use crate::fuzzy::FuzzyIndex;
use crate::prefix::PrefixIndex;
use crate::settings::settings;
use crate::successor::SuccessorStore;

/// Word separator for both queries and learning input.
pub(crate) const SEPARATOR: char = ' ';

/// Non-empty space-separated pieces of `text`.
pub(crate) fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(SEPARATOR).filter(|t| !t.is_empty())
}

/// Size figures for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineStats {
    pub words: usize,
    pub fuzzy_words: usize,
    pub successor_keys: usize,
    pub successor_records: usize,
    pub prefix_height: usize,
}

#[derive(Debug, Clone, Default)]
pub struct PredictionEngine {
    prefix: PrefixIndex,
    fuzzy: FuzzyIndex,
    successors: SuccessorStore,
}

impl PredictionEngine {
    /// An engine with no words. Every query returns an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a dictionary file. Any malformed line fails the whole load.
    pub fn open(path: &Path) -> Result<Self, DictError> {
        let lines = read_corpus_file(path)?;
        Ok(Self::from_lines(lines))
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, DictError> {
        let lines = read_corpus(reader)?;
        Ok(Self::from_lines(lines))
    }

    /// Build from parsed lines. Prefix-tree insertion order follows the
    /// `[load]` settings: shuffled with a thread-local RNG by default, with
    /// a seeded RNG when `shuffle_seed` is set, or file order when
    /// `shuffle = false`.
    pub fn from_lines(lines: Vec<DictLine>) -> Self {
        let load = &settings().load;
        match (load.shuffle, load.shuffle_seed) {
            (false, _) => Self::build(lines, |prefix, entries| prefix.extend_in_order(entries)),
            (true, Some(seed)) => Self::from_lines_with_rng(lines, &mut StdRng::seed_from_u64(seed)),
            (true, None) => Self::from_lines_with_rng(lines, &mut rand::rng()),
        }
    }

    /// Build from parsed lines, shuffling prefix-tree insertion with `rng`.
    pub fn from_lines_with_rng<R: Rng + ?Sized>(lines: Vec<DictLine>, rng: &mut R) -> Self {
        Self::build(lines, |prefix, entries| prefix.bulk_load(entries, rng))
    }

    fn build(
        lines: Vec<DictLine>,
        fill_prefix: impl FnOnce(&mut PrefixIndex, Vec<(String, u64)>) -> usize,
    ) -> Self {
        let _span = debug_span!("load_corpus", lines = lines.len()).entered();
        let mut engine = Self::new();

        let entries = lines
            .iter()
            .map(|l| (l.word.clone(), l.frequency))
            .collect();
        fill_prefix(&mut engine.prefix, entries);

        // Fuzzy and successor structures keep file order
        for line in lines {
            engine.fuzzy.add(&line.word);
            engine.successors.ensure_key(&line.word);
            for record in &line.successors {
                engine
                    .successors
                    .merge(&line.word, &record.word, record.frequency);
            }
        }

        let stats = engine.stats();
        info!(
            words = stats.words,
            successor_keys = stats.successor_keys,
            successor_records = stats.successor_records,
            prefix_height = stats.prefix_height,
            "corpus loaded"
        );
        engine
    }

    /// Known words starting with `prefix`, most frequent first.
    pub fn get_auto_complete_suggestions(&self, prefix: &str) -> Vec<String> {
        self.prefix.prefix_search(prefix)
    }

    /// Words that have been seen following any word and start with
    /// `prefix`, by total successor count. Narrower than auto-complete: it
    /// only offers words the user has actually chained before.
    pub fn get_auto_suggest_word_suggestions(&self, prefix: &str) -> Vec<String> {
        if prefix.is_empty() {
            return Vec::new();
        }
        self.successors
            .successor_words()
            .into_iter()
            .map(|r| r.word)
            .filter(|w| w.starts_with(prefix))
            .take(settings().predictions.max_auto_suggest)
            .collect()
    }

    /// Words seen after `preceding`, most frequent first.
    pub fn get_next_word_suggestions(&self, preceding: &str) -> Vec<String> {
        self.successors
            .get(preceding)
            .into_iter()
            .map(|r| r.word)
            .collect()
    }

    /// Known words within `correction.max_distance` edits of `word`:
    /// nearest first, then most frequent.
    pub fn get_auto_correct_suggestions(&self, word: &str) -> Vec<String> {
        if word.is_empty() {
            return Vec::new();
        }
        let mut matches = self
            .fuzzy
            .search(word, settings().correction.max_distance);
        matches.sort_by_cached_key(|m| {
            (
                m.distance,
                Reverse(self.prefix.frequency(&m.word).unwrap_or(0)),
                m.word.clone(),
            )
        });
        matches.into_iter().map(|m| m.word).collect()
    }

    pub fn is_known(&self, word: &str) -> bool {
        self.prefix.contains(word)
    }

    pub fn frequency(&self, word: &str) -> Option<u64> {
        self.prefix.frequency(word)
    }

    pub fn prefix_index(&self) -> &PrefixIndex {
        &self.prefix
    }

    pub fn fuzzy_index(&self) -> &FuzzyIndex {
        &self.fuzzy
    }

    pub fn successor_store(&self) -> &SuccessorStore {
        &self.successors
    }

    pub fn stats(&self) -> EngineStats {
        EngineStats {
            words: self.prefix.len(),
            fuzzy_words: self.fuzzy.len(),
            successor_keys: self.successors.len(),
            successor_records: self.successors.iter().map(|(_, r)| r.len()).sum(),
            prefix_height: self.prefix.height(),
        }
    }
}
