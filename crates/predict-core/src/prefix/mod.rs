//! Ternary search tree over known words.
//!
//! Each node holds one character and three links: `lo`/`hi` for characters
//! that sort before/after the node's key at the same position, `eq` for the
//! next position. Nodes live in a flat arena and link by index; every walk
//! is iterative, so a chain-shaped tree cannot overflow the stack.
//!
//! The tree is the single source of truth for whether a word is known.
//! Its height depends on insertion order, which is why corpus loading goes
//! through [`PrefixIndex::bulk_load`] (shuffle, then insert).


use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct PrefixNode {
    key: char,
    lo: Option<usize>,
    eq: Option<usize>,
    hi: Option<usize>,
    word_end: bool,
    frequency: u64,
}

#[derive(Clone, Copy)]
enum Branch {
    Lo,
    Eq,
    Hi,
}

impl PrefixNode {
    fn new(key: char) -> Self {
        Self {
            key,
            lo: None,
            eq: None,
            hi: None,
            word_end: false,
            frequency: 0,
        }
    }

    fn link_mut(&mut self, branch: Branch) -> &mut Option<usize> {
        match branch {
            Branch::Lo => &mut self.lo,
            Branch::Eq => &mut self.eq,
            Branch::Hi => &mut self.hi,
        }
    }

    pub fn key(&self) -> char {
        self.key
    }

    pub fn is_word_end(&self) -> bool {
        self.word_end
    }

    /// Only meaningful when [`is_word_end`](Self::is_word_end) is true.
    pub fn frequency(&self) -> u64 {
        self.frequency
    }
}

#[derive(Debug, Clone, Default)]
pub struct PrefixIndex {
    nodes: Vec<PrefixNode>,
    root: Option<usize>,
    word_count: usize,
}

impl PrefixIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of known words.
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Insert `word` with `frequency`. Returns `true` if the word was not
    /// known before.
    ///
    /// Re-inserting a known word keeps the larger of the two frequencies;
    /// callers that want a bump use [`increment`](Self::increment).
    pub fn insert(&mut self, word: &str, frequency: u64) -> bool {
        let chars: Vec<char> = word.chars().collect();
        let Some(&first) = chars.first() else {
            return false;
        };

        let mut idx = match self.root {
            Some(root) => root,
            None => {
                let root = self.push(first);
                self.root = Some(root);
                root
            }
        };
        let mut pos = 0;
        loop {
            let c = chars[pos];
            let key = self.nodes[idx].key;
            if c < key {
                idx = self.descend_or_grow(idx, Branch::Lo, c);
            } else if c > key {
                idx = self.descend_or_grow(idx, Branch::Hi, c);
            } else if pos + 1 < chars.len() {
                pos += 1;
                idx = self.descend_or_grow(idx, Branch::Eq, chars[pos]);
            } else {
                break;
            }
        }

        let node = &mut self.nodes[idx];
        if node.word_end {
            node.frequency = node.frequency.max(frequency);
            false
        } else {
            node.word_end = true;
            node.frequency = frequency;
            self.word_count += 1;
            true
        }
    }

    /// Shuffle `entries` with `rng`, then insert them in the shuffled order.
    ///
    /// Dictionary sources are usually sorted, and sorted insertion turns the
    /// tree into a chain. A uniform permutation keeps the expected height
    /// logarithmic. Returns the number of newly known words.
    pub fn bulk_load<R: Rng + ?Sized>(
        &mut self,
        mut entries: Vec<(String, u64)>,
        rng: &mut R,
    ) -> usize {
        entries.shuffle(rng);
        self.extend_in_order(entries)
    }

    /// Insert `entries` in the given order (no shuffle).
    pub fn extend_in_order(&mut self, entries: impl IntoIterator<Item = (String, u64)>) -> usize {
        entries
            .into_iter()
            .filter(|(word, frequency)| self.insert(word, *frequency))
            .count()
    }

    /// Exact lookup. Returns `None` unless `word` is a known word.
    pub fn traverse(&self, word: &str) -> Option<&PrefixNode> {
        self.locate(word)
            .map(|idx| &self.nodes[idx])
            .filter(|node| node.word_end)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.traverse(word).is_some()
    }

    pub fn frequency(&self, word: &str) -> Option<u64> {
        self.traverse(word).map(PrefixNode::frequency)
    }

    /// Add `by` to the frequency of a known word and return the new value.
    /// Unknown words are left alone.
    pub fn increment(&mut self, word: &str, by: u64) -> Option<u64> {
        let idx = self.locate(word)?;
        let node = &mut self.nodes[idx];
        if !node.word_end {
            return None;
        }
        node.frequency = node.frequency.saturating_add(by);
        Some(node.frequency)
    }

    /// All known words starting with `prefix` (including `prefix` itself),
    /// frequency descending, ties in lexicographic order.
    pub fn prefix_search(&self, prefix: &str) -> Vec<String> {
        let Some(idx) = self.locate(prefix) else {
            return Vec::new();
        };

        let mut found = Vec::new();
        let node = &self.nodes[idx];
        if node.word_end {
            found.push((node.frequency, prefix.to_string()));
        }
        if let Some(eq) = node.eq {
            self.collect(eq, prefix.to_string(), &mut found);
        }

        found.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
        found.into_iter().map(|(_, word)| word).collect()
    }

    /// Every known word with its frequency, in lexicographic order.
    pub fn entries(&self) -> Vec<(String, u64)> {
        let mut found = Vec::new();
        if let Some(root) = self.root {
            self.collect(root, String::new(), &mut found);
        }
        let mut entries: Vec<(String, u64)> =
            found.into_iter().map(|(freq, word)| (word, freq)).collect();
        entries.sort();
        entries
    }

    /// Longest root-to-node path, counted in links. An empty tree and a
    /// single node both have height 0.
    pub fn height(&self) -> usize {
        let Some(root) = self.root else {
            return 0;
        };
        let mut max = 0;
        let mut stack = vec![(root, 0usize)];
        while let Some((idx, depth)) = stack.pop() {
            max = max.max(depth);
            let node = &self.nodes[idx];
            for child in [node.lo, node.eq, node.hi].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        max
    }

    fn push(&mut self, key: char) -> usize {
        self.nodes.push(PrefixNode::new(key));
        self.nodes.len() - 1
    }

    fn descend_or_grow(&mut self, parent: usize, branch: Branch, key: char) -> usize {
        if let Some(child) = *self.nodes[parent].link_mut(branch) {
            return child;
        }
        let child = self.push(key);
        *self.nodes[parent].link_mut(branch) = Some(child);
        child
    }

    /// Node for the last character of `word`'s path, word end or not.
    fn locate(&self, word: &str) -> Option<usize> {
        let mut chars = word.chars();
        let mut c = chars.next()?;
        let mut idx = self.root?;
        loop {
            let node = &self.nodes[idx];
            if c < node.key {
                idx = node.lo?;
            } else if c > node.key {
                idx = node.hi?;
            } else {
                match chars.next() {
                    Some(next) => {
                        c = next;
                        idx = node.eq?;
                    }
                    None => return Some(idx),
                }
            }
        }
    }

    /// Push every word end in the subtree at `start` into `out`. `base` is
    /// the text spelled by the path above `start`.
    fn collect(&self, start: usize, base: String, out: &mut Vec<(u64, String)>) {
        let mut stack = vec![(start, base)];
        while let Some((idx, base)) = stack.pop() {
            let node = &self.nodes[idx];
            if let Some(lo) = node.lo {
                stack.push((lo, base.clone()));
            }
            if let Some(hi) = node.hi {
                stack.push((hi, base.clone()));
            }
            let mut word = base;
            word.push(node.key);
            if node.word_end {
                out.push((node.frequency, word.clone()));
            }
            if let Some(eq) = node.eq {
                stack.push((eq, word));
            }
        }
    }
}
