//! Word → successor records: which words followed a key word, how often.
//!
//! Records are kept per key in insertion order (the order they were read or
//! learned); every ranked read sorts a copy by frequency. Keys iterate in
//! insertion order too, which makes committed dictionaries diff-friendly.


use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessorRecord {
    pub word: String,
    pub frequency: u64,
}

impl SuccessorRecord {
    pub fn new(word: impl Into<String>, frequency: u64) -> Self {
        Self {
            word: word.into(),
            frequency,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SuccessorStore {
    /// key → position in `entries`
    index: HashMap<String, usize>,
    entries: Vec<(String, Vec<SuccessorRecord>)>,
}

/// Frequency descending, then word ascending.
fn rank(records: &mut [SuccessorRecord]) {
    records.sort_by(|a, b| {
        b.frequency
            .cmp(&a.frequency)
            .then_with(|| a.word.cmp(&b.word))
    });
}

impl SuccessorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Create an empty entry for `key`. Returns `true` if it was absent.
    pub fn ensure_key(&mut self, key: &str) -> bool {
        if self.index.contains_key(key) {
            return false;
        }
        self.index.insert(key.to_string(), self.entries.len());
        self.entries.push((key.to_string(), Vec::new()));
        true
    }

    /// Record that `successor` followed `key` `increment` more times.
    ///
    /// Records are matched on the successor word alone, so a record whose
    /// count already grew is still found and updated in place.
    pub fn merge(&mut self, key: &str, successor: &str, increment: u64) {
        self.ensure_key(key);
        let records = &mut self.entries[self.index[key]].1;
        match records.iter_mut().find(|r| r.word == successor) {
            Some(record) => record.frequency = record.frequency.saturating_add(increment),
            None => records.push(SuccessorRecord::new(successor, increment)),
        }
    }

    /// Successors of `key`, most frequent first.
    pub fn get(&self, key: &str) -> Vec<SuccessorRecord> {
        let mut records = self.records(key).to_vec();
        rank(&mut records);
        records
    }

    /// Successors of `key` in stored order.
    pub fn records(&self, key: &str) -> &[SuccessorRecord] {
        match self.index.get(key) {
            Some(&pos) => &self.entries[pos].1,
            None => &[],
        }
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// `(key, records in stored order)` in key insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SuccessorRecord])> {
        self.entries
            .iter()
            .map(|(key, records)| (key.as_str(), records.as_slice()))
    }

    /// Every word that has followed any key, with frequencies summed across
    /// keys, most frequent first.
    pub fn successor_words(&self) -> Vec<SuccessorRecord> {
        let mut totals: HashMap<&str, u64> = HashMap::new();
        for (_, records) in &self.entries {
            for r in records {
                let total = totals.entry(r.word.as_str()).or_default();
                *total = total.saturating_add(r.frequency);
            }
        }
        let mut merged: Vec<SuccessorRecord> = totals
            .into_iter()
            .map(|(word, frequency)| SuccessorRecord::new(word, frequency))
            .collect();
        rank(&mut merged);
        merged
    }
}
