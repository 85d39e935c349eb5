//! Corpus ingestion: discover `.txt` files under a root, tokenize them
//! into the inverted index, and drive query files against it. Every I/O
//! failure here is contained to the file it hit; the rest of the run
//! continues.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use walkdir::WalkDir;

use textdex_core::tokenizer;
use textdex_core::{InvertedIndex, QueryResults};

/// Collects corpus files under `root` in discovery order: regular files
/// whose extension is `txt`, case-insensitively. Entries that cannot be
/// read are skipped with a warning.
pub fn walk_corpus(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        match entry {
            Ok(entry) => {
                let path = entry.path();
                if path.is_file() && has_txt_extension(path) {
                    files.push(path.to_path_buf());
                }
            }
            Err(err) => tracing::warn!(%err, "skipping unreadable directory entry"),
        }
    }
    files
}

fn has_txt_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
}

/// Tokenizes one file into the index. Positions are 1-based and keep
/// counting across line boundaries. The file is read in full before any
/// fact is added, so a failed read contributes nothing.
pub fn ingest_file(path: &Path, index: &mut InvertedIndex) -> Result<()> {
    let text = fs::read_to_string(path)?;
    let key = path.display().to_string();
    let mut position: u32 = 0;
    for line in text.lines() {
        for word in tokenizer::split(line) {
            position += 1;
            index.add(&word, &key, position);
        }
    }
    Ok(())
}

/// Walks `root` and ingests every corpus file, skipping unreadable ones
/// with a warning.
pub fn build_index(root: &Path) -> InvertedIndex {
    let mut index = InvertedIndex::new();
    let files = walk_corpus(root);
    for file in &files {
        if let Err(err) = ingest_file(file, &mut index) {
            tracing::warn!(file = %file.display(), %err, "skipping unreadable file");
        }
    }
    tracing::info!(files = files.len(), words = index.len(), "corpus ingested");
    index
}

/// Runs every line of a query file against the index. An unreadable query
/// file is a warning; whatever was read before the failure is kept.
pub fn run_queries(path: &Path, index: &InvertedIndex) -> QueryResults {
    let mut results = QueryResults::new();
    if let Err(err) = results.run_file(path, index) {
        tracing::warn!(file = %path.display(), %err, "error reading query file");
    }
    tracing::info!(file = %path.display(), queries = results.len(), "queries evaluated");
    results
}
