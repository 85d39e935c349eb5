use std::cmp::Ordering;

/// One matched path for a single query: the cumulative occurrence count
/// across every matching word, and the earliest position any of them was
/// seen at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    path: String,
    frequency: usize,
    position: u32,
}

impl SearchResult {
    pub fn new(path: String, frequency: usize, position: u32) -> Self {
        Self {
            path,
            frequency,
            position,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn frequency(&self) -> usize {
        self.frequency
    }

    pub fn position(&self) -> u32 {
        self.position
    }

    /// Folds in another matching word's contribution: frequencies add, the
    /// smaller position wins.
    pub fn update(&mut self, frequency: usize, position: u32) {
        self.frequency += frequency;
        if position < self.position {
            self.position = position;
        }
    }
}

impl Ord for SearchResult {
    /// Descending frequency, then ascending position, then ascending path.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .frequency
            .cmp(&self.frequency)
            .then(self.position.cmp(&other.position))
            .then_with(|| self.path.cmp(&other.path))
    }
}

impl PartialOrd for SearchResult {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
