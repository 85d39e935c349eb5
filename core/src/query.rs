use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::Result;

use crate::index::InvertedIndex;
use crate::result::SearchResult;
use crate::tokenizer;

/// Query results keyed by raw line text in first-occurrence order. Running
/// the same raw line again replaces its results in place without moving it.
#[derive(Debug, Default)]
pub struct QueryResults {
    entries: Vec<(String, Vec<SearchResult>)>,
    slots: HashMap<String, usize>,
}

impl QueryResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Searches the index for one raw query line and records the ranked
    /// results under the unmodified line text. A line that normalizes to
    /// nothing still gets an entry, with an empty result list.
    pub fn run_line(&mut self, line: &str, index: &InvertedIndex) {
        let words = tokenizer::split(line);
        let results = index.partial_search(&words);
        match self.slots.get(line) {
            Some(&slot) => self.entries[slot].1 = results,
            None => {
                self.slots.insert(line.to_string(), self.entries.len());
                self.entries.push((line.to_string(), results));
            }
        }
    }

    /// Runs every line of a query file. Fails only if the file itself
    /// cannot be read; anything recorded so far stays intact.
    pub fn run_file(&mut self, path: &Path, index: &InvertedIndex) -> Result<()> {
        let reader = BufReader::new(File::open(path)?);
        for line in reader.lines() {
            self.run_line(&line?, index);
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &[SearchResult])> {
        self.entries
            .iter()
            .map(|(line, results)| (line, results.as_slice()))
    }
}
