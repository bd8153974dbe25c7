use std::collections::BTreeMap;
use std::fs;

use proptest::prelude::*;

use super::{engine_from, sample_engine};
use crate::engine::{LearnReport, PredictionEngine};
use crate::successor::SuccessorRecord;

/// key → successors sorted by word, for order-insensitive comparison.
fn successor_sets(engine: &PredictionEngine) -> BTreeMap<String, Vec<SuccessorRecord>> {
    engine
        .successor_store()
        .iter()
        .map(|(key, records)| {
            let mut records = records.to_vec();
            records.sort_by(|a, b| a.word.cmp(&b.word));
            (key.to_string(), records)
        })
        .collect()
}

#[test]
fn test_learn_two_new_words() {
    let mut engine = PredictionEngine::new();
    let report = engine.learn_data("the cat", true);
    assert_eq!(
        report,
        LearnReport {
            new_words: 2,
            incremented: 0,
            bigrams_merged: 1,
            bigrams_skipped: 0,
        }
    );
    assert_eq!(engine.frequency("the"), Some(1));
    assert_eq!(engine.frequency("cat"), Some(1));
    assert_eq!(
        engine.successor_store().get("the"),
        vec![SuccessorRecord::new("cat", 1)]
    );
    assert!(engine.fuzzy_index().contains("cat"));
    // "cat" has no successors yet but is committed like any known word
    assert!(engine.successor_store().contains_key("cat"));
}

#[test]
fn test_learn_empty_text_is_noop() {
    let mut engine = sample_engine();
    let before = engine.stats();
    assert_eq!(engine.learn_data("", true), LearnReport::default());
    assert_eq!(engine.learn_data("   ", true), LearnReport::default());
    assert_eq!(engine.stats(), before);
}

#[test]
fn test_learn_known_words_only_increments() {
    let mut engine = sample_engine();
    let report = engine.learn_data("the cat", false);
    assert_eq!(report.incremented, 2);
    assert_eq!(report.new_words, 0);
    assert_eq!(engine.frequency("the"), Some(121));
    assert_eq!(engine.frequency("cat"), Some(6));
    assert_eq!(
        engine.successor_store().get("the")[0],
        SuccessorRecord::new("cat", 4)
    );
}

#[test]
fn test_learn_without_new_words_skips_unknown_bigrams() {
    let mut engine = sample_engine();
    let report = engine.learn_data("the zebra ran", false);
    assert_eq!(report.incremented, 2);
    assert_eq!(report.bigrams_merged, 0);
    assert_eq!(report.bigrams_skipped, 2);

    assert!(!engine.is_known("zebra"));
    assert!(!engine.fuzzy_index().contains("zebra"));
    assert!(!engine.successor_store().contains_key("zebra"));
    assert!(!engine
        .get_next_word_suggestions("the")
        .contains(&"zebra".to_string()));
    assert_eq!(engine.frequency("ran"), Some(3));
}

#[test]
fn test_learn_new_words_everywhere() {
    let mut engine = sample_engine();
    let report = engine.learn_data("the zebra ran", true);
    assert_eq!(report.new_words, 1);
    assert_eq!(report.bigrams_merged, 2);

    assert_eq!(engine.frequency("zebra"), Some(1));
    assert!(engine.fuzzy_index().contains("zebra"));
    assert_eq!(engine.get_next_word_suggestions("zebra"), vec!["ran"]);
    assert!(engine
        .get_next_word_suggestions("the")
        .contains(&"zebra".to_string()));
    assert_eq!(engine.get_auto_complete_suggestions("ze"), vec!["zebra"]);
    assert!(engine
        .get_auto_correct_suggestions("zebar")
        .contains(&"zebra".to_string()));
}

#[test]
fn test_repeated_new_word_is_added_once() {
    let mut engine = PredictionEngine::new();
    let report = engine.learn_data("la la la", true);
    assert_eq!(report.new_words, 1);
    assert_eq!(report.incremented, 0);
    assert_eq!(report.bigrams_merged, 2);
    assert_eq!(engine.frequency("la"), Some(1));
    assert_eq!(engine.fuzzy_index().len(), 1);
    assert_eq!(
        engine.successor_store().get("la"),
        vec![SuccessorRecord::new("la", 2)]
    );

    // Known from now on, so every occurrence counts
    engine.learn_data("la la", true);
    assert_eq!(engine.frequency("la"), Some(3));
}

#[test]
fn test_known_and_new_words_classified_before_learning() {
    let mut engine = sample_engine();
    let report = engine.learn_data("the kite the kite", true);
    assert_eq!(report.new_words, 1);
    assert_eq!(report.incremented, 2);
    assert_eq!(engine.frequency("the"), Some(122));
    assert_eq!(engine.frequency("kite"), Some(1));
    assert_eq!(
        engine.successor_store().records("the").last(),
        Some(&SuccessorRecord::new("kite", 2))
    );
    assert_eq!(engine.get_next_word_suggestions("kite"), vec!["the"]);
}

#[test]
fn test_learn_ignores_extra_spaces() {
    let mut engine = sample_engine();
    engine.learn_data("  hello   help ", false);
    assert_eq!(
        engine.get_next_word_suggestions("hello"),
        vec!["world", "help"]
    );
}

#[test]
fn test_format_separators_are_never_learned() {
    let mut engine = sample_engine();
    let report = engine.learn_data("the a;b c&d", true);
    assert_eq!(report.new_words, 0);
    assert_eq!(report.bigrams_skipped, 2);
    assert!(!engine.is_known("a;b"));
    assert!(!engine.is_known("c&d"));
}

#[test]
fn test_control_characters_are_never_learned() {
    let mut engine = sample_engine();
    let report = engine.learn_data("hello\nworld the\tend cat\r", true);
    assert_eq!(report.new_words, 0);
    assert_eq!(report.bigrams_merged, 0);
    assert!(!engine.is_known("hello\nworld"));
    assert!(!engine.is_known("the\tend"));
    assert!(!engine.is_known("cat\r"));
    assert_eq!(engine.stats().words, 13);
}

#[test]
fn test_multi_line_text_survives_commit() {
    let mut engine = sample_engine();
    engine.learn_data("brave\nnew world\r\nagain", true);
    engine.learn_data("line one\nline two", true);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("multi.txt");
    let written = engine.commit(&path).unwrap();

    let reloaded = PredictionEngine::open(&path).unwrap();
    assert_eq!(reloaded.stats().words, written);
    assert_eq!(
        reloaded.prefix_index().entries(),
        engine.prefix_index().entries()
    );
    assert!(reloaded.is_known("line"));
    assert!(!reloaded.is_known("one\nline"));
}

#[test]
fn test_learning_changes_predictions() {
    let mut engine = sample_engine();
    engine.learn_data("hello there", true);
    engine.learn_data("hello there", true);
    assert_eq!(
        engine.get_all_predictions("hello ", 5),
        vec!["world", "there"]
    );
    for _ in 0..3 {
        engine.learn_data("hello there", false);
    }
    assert_eq!(
        engine.get_all_predictions("hello ", 5),
        vec!["there", "world"]
    );
}

#[test]
fn test_commit_writes_known_keys() {
    let engine = engine_from("the;120&cat;3&dog;2\ncat;5&\ndog;7\n");
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");

    assert_eq!(engine.commit(&path).unwrap(), 3);
    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, "the;120&cat;3&dog;2\ncat;5&\ndog;7&\n");
}

#[test]
fn test_commit_uses_current_frequencies() {
    let mut engine = engine_from("the;1&cat;1\ncat;1&\n");
    engine.learn_data("the cat", false);
    engine.learn_data("the mat", true);
    assert_eq!(
        engine.committed_lines(),
        vec!["the;3&cat;2&mat;1", "cat;2&", "mat;1&"]
    );
}

#[test]
fn test_commit_skips_keys_unknown_to_prefix_index() {
    let mut engine = sample_engine();
    engine.successors.merge("ghost", "the", 1);
    let lines = engine.committed_lines();
    assert_eq!(lines.len(), 13);
    assert!(!lines.iter().any(|l| l.starts_with("ghost;")));
}

#[test]
fn test_commit_empty_engine() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    assert_eq!(PredictionEngine::new().commit(&path).unwrap(), 0);
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn test_commit_reload_roundtrip() {
    let mut engine = sample_engine();
    engine.learn_data("the cat sat", false);
    engine.learn_data("hello brave new world", true);
    engine.learn_data("the dog ran far", false);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("learned.txt");
    engine.commit(&path).unwrap();

    let reloaded = PredictionEngine::open(&path).unwrap();
    assert_eq!(
        reloaded.prefix_index().entries(),
        engine.prefix_index().entries()
    );
    assert_eq!(successor_sets(&reloaded), successor_sets(&engine));
    assert_eq!(reloaded.stats().fuzzy_words, engine.stats().fuzzy_words);
}

proptest! {
    #[test]
    fn prop_frequencies_never_decrease(
        inputs in prop::collection::vec(("[a-d]{1,3}( [a-d]{1,3}){0,3}", any::<bool>()), 1..20),
    ) {
        let mut engine = sample_engine();
        let mut before = engine.prefix_index().entries();
        for (text, learn_new) in &inputs {
            engine.learn_data(text, *learn_new);
            let after = engine.prefix_index().entries();
            for (word, freq) in &before {
                prop_assert!(engine.frequency(word).unwrap() >= *freq);
            }
            prop_assert!(after.len() >= before.len());
            before = after;
        }
    }

    #[test]
    fn prop_successor_keys_are_known_words(
        inputs in prop::collection::vec(("[a-d]{1,3}( [a-d]{1,3}){0,3}", any::<bool>()), 1..20),
    ) {
        let mut engine = sample_engine();
        for (text, learn_new) in &inputs {
            engine.learn_data(text, *learn_new);
        }
        for key in engine.successor_store().keys() {
            prop_assert!(engine.is_known(key));
        }
        let stats = engine.stats();
        prop_assert_eq!(stats.words, stats.fuzzy_words);
        prop_assert_eq!(stats.words, stats.successor_keys);
    }
}
