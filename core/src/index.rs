use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::ops::Bound;

use crate::result::SearchResult;

/// Ordered word -> path -> positions structure. Ascending iteration at
/// every level comes from the BTree containers, so the serialized output
/// is stable regardless of insertion order.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    index: BTreeMap<String, BTreeMap<String, BTreeSet<u32>>>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts one (word, path, position) fact, creating the nested levels
    /// lazily. Re-adding an existing fact is a no-op.
    pub fn add(&mut self, word: &str, path: &str, position: u32) {
        debug_assert!(position >= 1, "positions are 1-based");
        self.index
            .entry(word.to_string())
            .or_default()
            .entry(path.to_string())
            .or_default()
            .insert(position);
    }

    pub fn has_word(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    pub fn has_path(&self, word: &str, path: &str) -> bool {
        self.index
            .get(word)
            .is_some_and(|paths| paths.contains_key(path))
    }

    pub fn has_position(&self, word: &str, path: &str, position: u32) -> bool {
        self.index
            .get(word)
            .and_then(|paths| paths.get(path))
            .is_some_and(|positions| positions.contains(&position))
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Words in ascending order, each with its path -> positions map.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeMap<String, BTreeSet<u32>>)> {
        self.index.iter()
    }

    /// Partial search: every index word that starts with a query word
    /// contributes its per-path occurrence count and earliest position.
    /// Contributions fold into one `SearchResult` per path, and the whole
    /// set is returned in rank order. A query word with no prefix match
    /// contributes nothing; an empty query list yields an empty vec.
    pub fn partial_search(&self, queries: &[String]) -> Vec<SearchResult> {
        let mut by_path: HashMap<String, usize> = HashMap::new();
        let mut results: Vec<SearchResult> = Vec::new();

        for query in queries {
            let from = (Bound::Included(query.as_str()), Bound::Unbounded);
            for (word, paths) in self.index.range::<str, _>(from) {
                if !word.starts_with(query.as_str()) {
                    // prefix matches are contiguous in key order
                    break;
                }
                for (path, positions) in paths {
                    let frequency = positions.len();
                    let Some(&position) = positions.first() else {
                        continue;
                    };
                    match by_path.get(path) {
                        Some(&slot) => results[slot].update(frequency, position),
                        None => {
                            by_path.insert(path.clone(), results.len());
                            results.push(SearchResult::new(path.clone(), frequency, position));
                        }
                    }
                }
            }
        }

        results.sort();
        results
    }
}
