use std::collections::HashSet;

use tracing::{debug, debug_span};

use super::{tokens, PredictionEngine, SEPARATOR};

/// A token containing one of these ends the phrase before it.
const PHRASE_TERMINATORS: &[char] = &['.', ','];

/// Which prediction source a piece of input text is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch<'a> {
    /// Text ends in a separator: predict what follows `preceding`.
    NextWord { preceding: &'a str },
    /// A single partial word: complete it, fall back to corrections.
    Complete { token: &'a str },
    /// The previous token closed a phrase: complete `token` without context.
    NewPhrase { token: &'a str },
    /// Complete `prefix` among words seen after `preceding`.
    Contextual { preceding: &'a str, prefix: &'a str },
}

/// Route `text` to a prediction source. `None` for text with no tokens.
pub fn dispatch(text: &str) -> Option<Dispatch<'_>> {
    let tokens: Vec<&str> = tokens(text).collect();
    let (&last, rest) = tokens.split_last()?;

    if text.ends_with(SEPARATOR) {
        return Some(Dispatch::NextWord { preceding: last });
    }
    let Some(&previous) = rest.last() else {
        return Some(Dispatch::Complete { token: last });
    };
    if previous.contains(PHRASE_TERMINATORS) {
        Some(Dispatch::NewPhrase { token: last })
    } else {
        Some(Dispatch::Contextual {
            preceding: previous,
            prefix: last,
        })
    }
}

impl PredictionEngine {
    /// One ranked suggestion list for the text typed so far, at most
    /// `limit` long (one shorter right after `.` or `,`).
    pub fn get_all_predictions(&self, text: &str, limit: usize) -> Vec<String> {
        let _span = debug_span!("get_all_predictions", text, limit).entered();
        if limit == 0 {
            return Vec::new();
        }
        let Some(route) = dispatch(text) else {
            return Vec::new();
        };

        let results = match route {
            Dispatch::NextWord { preceding } => {
                let mut next = self.get_next_word_suggestions(preceding);
                next.truncate(limit);
                next
            }
            Dispatch::Complete { token } => self.completions_with_corrections(token, limit),
            Dispatch::NewPhrase { token } => {
                // Long-standing behaviour: the new-phrase list stops one short of `limit`.
                let mut results = self.completions_with_corrections(token, limit);
                results.truncate(limit - 1);
                results
            }
            Dispatch::Contextual { preceding, prefix } => {
                self.contextual_completions(preceding, prefix, limit)
            }
        };

        debug!(?route, count = results.len());
        results
    }

    /// Completions of `token`, topped up with corrections when there are
    /// fewer than `limit`.
    fn completions_with_corrections(&self, token: &str, limit: usize) -> Vec<String> {
        let mut results = self.get_auto_complete_suggestions(token);
        if results.len() < limit {
            let mut seen: HashSet<String> = results.iter().cloned().collect();
            for word in self.get_auto_correct_suggestions(token) {
                if results.len() >= limit {
                    break;
                }
                if seen.insert(word.clone()) {
                    results.push(word);
                }
            }
        }
        results.truncate(limit);
        results
    }

    /// Successors of `preceding` that start with `prefix`, then other
    /// successor-derived words starting with `prefix`.
    fn contextual_completions(&self, preceding: &str, prefix: &str, limit: usize) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut results: Vec<String> = self
            .get_next_word_suggestions(preceding)
            .into_iter()
            .filter(|w| w.starts_with(prefix))
            .take(limit)
            .collect();
        seen.extend(results.iter().cloned());

        if results.len() < limit {
            for word in self.get_auto_suggest_word_suggestions(prefix) {
                if results.len() >= limit {
                    break;
                }
                if seen.insert(word.clone()) {
                    results.push(word);
                }
            }
        }
        results
    }
}
