use std::fmt::Write;

use super::open_engine;

/// One suggestion per line, numbered from 1. `(none)` for an empty list.
pub fn format_suggestions(words: &[String]) -> String {
    if words.is_empty() {
        return "(none)\n".to_string();
    }
    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {word}", i + 1);
    }
    out
}

pub fn complete(dict_file: &str, prefix: &str) {
    let engine = open_engine(dict_file);
    print!(
        "{}",
        format_suggestions(&engine.get_auto_complete_suggestions(prefix))
    );
}

pub fn correct(dict_file: &str, word: &str) {
    let engine = open_engine(dict_file);
    print!(
        "{}",
        format_suggestions(&engine.get_auto_correct_suggestions(word))
    );
}

pub fn next(dict_file: &str, preceding: &str) {
    let engine = open_engine(dict_file);
    print!(
        "{}",
        format_suggestions(&engine.get_next_word_suggestions(preceding))
    );
}

pub fn suggest(dict_file: &str, prefix: &str) {
    let engine = open_engine(dict_file);
    print!(
        "{}",
        format_suggestions(&engine.get_auto_suggest_word_suggestions(prefix))
    );
}

/// `limit` defaults to `predictions.default_limit`.
pub fn predict(dict_file: &str, text: &str, limit: Option<usize>) {
    let engine = open_engine(dict_file);
    let limit = limit.unwrap_or(predict_core::settings::settings().predictions.default_limit);
    print!(
        "{}",
        format_suggestions(&engine.get_all_predictions(text, limit))
    );
}

pub fn info(dict_file: &str) {
    let engine = open_engine(dict_file);
    let stats = engine.stats();
    let file_size = std::fs::metadata(dict_file).map(|m| m.len()).unwrap_or(0);

    println!("Dictionary:        {dict_file}");
    println!("File size:         {:.1} KB", file_size as f64 / 1024.0);
    println!("Words:             {}", stats.words);
    println!("Correction words:  {}", stats.fuzzy_words);
    println!("Successor keys:    {}", stats.successor_keys);
    println!("Successor records: {}", stats.successor_records);
    println!("Prefix tree height: {}", stats.prefix_height);

    let top: Vec<String> = engine
        .successor_store()
        .successor_words()
        .into_iter()
        .take(10)
        .map(|r| format!("{} ({})", r.word, r.frequency))
        .collect();
    if !top.is_empty() {
        println!();
        println!("Most frequent successors: {}", top.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_numbered() {
        let words = vec!["cat".to_string(), "car".to_string()];
        assert_eq!(format_suggestions(&words), "  1. cat\n  2. car\n");
    }

    #[test]
    fn format_empty() {
        assert_eq!(format_suggestions(&[]), "(none)\n");
    }
}
