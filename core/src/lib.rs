//! Core word-location indexing: text normalization, the ordered inverted
//! index with partial (prefix) search, and the canonical document writer.

pub mod index;
pub mod query;
pub mod result;
pub mod tokenizer;
pub mod write;

pub use index::InvertedIndex;
pub use query::QueryResults;
pub use result::SearchResult;
