//! BK-tree over known words, keyed by Levenshtein distance.
//!
//! Every child edge is labelled with the distance between the child's word
//! and its parent's. A search at distance `d` from a node only has to look
//! at edges labelled `d - max ..= d + max` (triangle inequality), which
//! keeps correction queries well below a full scan.

mod distance;

use std::collections::BTreeMap;

pub use distance::levenshtein;

#[derive(Debug, Clone)]
struct FuzzyNode {
    word: String,
    children: BTreeMap<usize, usize>,
}

/// A stored word within the requested distance of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzyMatch {
    pub word: String,
    pub distance: usize,
}

#[derive(Debug, Clone, Default)]
pub struct FuzzyIndex {
    /// `nodes[0]` is the root (the first word added).
    nodes: Vec<FuzzyNode>,
}

impl FuzzyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add `word`. Returns `false` if it is already stored or empty.
    pub fn add(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        if self.nodes.is_empty() {
            self.nodes.push(FuzzyNode {
                word: word.to_string(),
                children: BTreeMap::new(),
            });
            return true;
        }

        let mut idx = 0;
        loop {
            let d = levenshtein(&self.nodes[idx].word, word);
            if d == 0 {
                return false;
            }
            match self.nodes[idx].children.get(&d) {
                Some(&child) => idx = child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(FuzzyNode {
                        word: word.to_string(),
                        children: BTreeMap::new(),
                    });
                    self.nodes[idx].children.insert(d, child);
                    return true;
                }
            }
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        !self.search(word, 0).is_empty()
    }

    /// All stored words within `max_distance` edits of `word`, nearest
    /// first, ties in lexicographic order.
    pub fn search(&self, word: &str, max_distance: usize) -> Vec<FuzzyMatch> {
        self.search_visiting(word, max_distance).0
    }

    /// [`search`](Self::search) plus the number of nodes whose distance was
    /// computed.
    fn search_visiting(&self, word: &str, max_distance: usize) -> (Vec<FuzzyMatch>, usize) {
        let mut matches = Vec::new();
        let mut visited = 0;
        if self.nodes.is_empty() {
            return (matches, visited);
        }

        let mut stack = vec![0];
        while let Some(idx) = stack.pop() {
            visited += 1;
            let node = &self.nodes[idx];
            let d = levenshtein(&node.word, word);
            if d <= max_distance {
                matches.push(FuzzyMatch {
                    word: node.word.clone(),
                    distance: d,
                });
            }
            let low = d.saturating_sub(max_distance);
            let high = d.saturating_add(max_distance);
            stack.extend(node.children.range(low..=high).map(|(_, &child)| child));
        }

        matches.sort_by(|a, b| a.distance.cmp(&b.distance).then_with(|| a.word.cmp(&b.word)));
        (matches, visited)
    }

    /// Stored words in insertion order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.word.as_str())
    }
}
