use std::path::Path;

use tracing::{debug, debug_span, info};

use super::{tokens, PredictionEngine};
use crate::dict::{encode_line, write_corpus_file, DictError, FIELD_SEPARATOR, RECORD_SEPARATOR};

/// What a single [`PredictionEngine::learn_data`] call changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LearnReport {
    /// Words added to all three indexes.
    pub new_words: usize,
    /// Known-word occurrences whose frequency was bumped.
    pub incremented: usize,
    pub bigrams_merged: usize,
    /// Bigrams touching a word that is still unknown after this call.
    pub bigrams_skipped: usize,
}

/// A word must fit in one dictionary record: no format separators and no
/// control characters (a line break would split the record on reload).
fn is_learnable(token: &str) -> bool {
    !token.contains(&[FIELD_SEPARATOR, RECORD_SEPARATOR][..]) && !token.contains(char::is_control)
}

impl PredictionEngine {
    /// Learn from typed `text`.
    ///
    /// Every token is classified against the prefix index before anything
    /// changes. Each known occurrence gains one frequency point. With
    /// `learn_new_words`, each distinct unknown word becomes known once
    /// (frequency 1) in every index, however often it appears in `text`.
    /// Adjacent pairs are recorded as successors only when both words are
    /// known after this call, so the successor store never gains a key the
    /// prefix index does not recognise.
    pub fn learn_data(&mut self, text: &str, learn_new_words: bool) -> LearnReport {
        let mut report = LearnReport::default();
        if text.is_empty() {
            return report;
        }
        let _span = debug_span!("learn_data", learn_new_words).entered();

        let words: Vec<&str> = tokens(text).collect();
        let known_before: Vec<bool> = words
            .iter()
            .map(|&word| is_learnable(word) && self.prefix.contains(word))
            .collect();

        for (&word, &was_known) in words.iter().zip(&known_before) {
            if was_known {
                self.prefix.increment(word, 1);
                report.incremented += 1;
            } else if !is_learnable(word) {
                debug!(word, "not learnable");
            } else if learn_new_words && !self.prefix.contains(word) {
                self.add_word(word);
                report.new_words += 1;
            }
        }

        let known: Vec<bool> = words
            .iter()
            .zip(&known_before)
            .map(|(&word, &was_known)| was_known || (learn_new_words && is_learnable(word)))
            .collect();
        for (pair, flags) in words.windows(2).zip(known.windows(2)) {
            if flags[0] && flags[1] {
                self.successors.merge(pair[0], pair[1], 1);
                report.bigrams_merged += 1;
            } else {
                report.bigrams_skipped += 1;
            }
        }

        debug!(?report, "learned");
        report
    }

    /// Make `word` known in all three indexes.
    fn add_word(&mut self, word: &str) {
        self.prefix.insert(word, 1);
        self.fuzzy.add(word);
        // A key of its own, so commit writes the word out even if nothing
        // has followed it yet.
        self.successors.ensure_key(word);
    }

    /// Dictionary lines for the current state, one per successor key the
    /// prefix index knows, in key order.
    pub fn committed_lines(&self) -> Vec<String> {
        self.successors
            .iter()
            .filter_map(|(key, records)| {
                let Some(frequency) = self.prefix.frequency(key) else {
                    debug!(key, "skipping successor key unknown to prefix index");
                    return None;
                };
                Some(encode_line(key, frequency, records))
            })
            .collect()
    }

    /// Write the learned state to `destination` (atomic replace). Returns
    /// the number of lines written.
    pub fn commit(&self, destination: &Path) -> Result<usize, DictError> {
        let _span = debug_span!("commit", path = %destination.display()).entered();
        let lines = self.committed_lines();
        let written = write_corpus_file(destination, &lines)?;
        info!(
            written,
            skipped = self.successors.len() - written,
            "dictionary committed"
        );
        Ok(written)
    }
}
