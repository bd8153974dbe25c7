use std::fs;
use std::path::Path;
use std::process;

use predict_core::{LearnReport, PredictionEngine};

use super::open_engine;

/// Learn from `text` (or, when `text` is `-`, from every line of stdin) and
/// commit to `output`, defaulting to the dictionary itself.
pub fn learn(dict_file: &str, text: &str, new_words: bool, output: Option<&str>) {
    let mut engine = open_engine(dict_file);

    let input = if text == "-" {
        die!(
            std::io::read_to_string(std::io::stdin()),
            "Error reading stdin: {}"
        )
    } else {
        text.to_string()
    };

    let total = learn_lines(&mut engine, &input, new_words);

    let destination = output.unwrap_or(dict_file);
    let written = die!(
        engine.commit(Path::new(destination)),
        "Error writing {destination}: {}"
    );

    let file_size = fs::metadata(destination).map(|m| m.len()).unwrap_or(0);
    eprintln!(
        "Learned: {} new words, {} known words, {} bigrams ({} skipped)",
        total.new_words, total.incremented, total.bigrams_merged, total.bigrams_skipped
    );
    eprintln!(
        "Wrote {destination} ({written} lines, {:.1} KB)",
        file_size as f64 / 1024.0
    );
}

/// Learn each line of `input` separately, summing the reports.
pub fn learn_lines(engine: &mut PredictionEngine, input: &str, new_words: bool) -> LearnReport {
    let mut total = LearnReport::default();
    for line in input.lines() {
        let report = engine.learn_data(line, new_words);
        total.new_words += report.new_words;
        total.incremented += report.incremented;
        total.bigrams_merged += report.bigrams_merged;
        total.bigrams_skipped += report.bigrams_skipped;
    }
    total
}
