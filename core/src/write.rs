//! Canonical document writer. Both documents are rendered to a `String`
//! first so callers and tests can compare the exact bytes; the `write_*`
//! wrappers put them on disk with a trailing newline already in place.

use std::fs;
use std::path::Path;

use anyhow::Result;

use crate::index::InvertedIndex;
use crate::query::QueryResults;

fn indent(level: usize) -> String {
    "  ".repeat(level)
}

/// JSON-escapes and quotes `text`.
fn quote(text: &str) -> String {
    serde_json::Value::String(text.to_string()).to_string()
}

/// Renders the index document: words ascending, paths ascending per word,
/// positions ascending per path, one value per line with two spaces of
/// indentation per nesting level. An empty index renders as `{}`.
pub fn index_document(index: &InvertedIndex) -> String {
    if index.is_empty() {
        return "{}\n".to_string();
    }

    let mut out = String::from("{");
    let mut first_word = true;
    for (word, paths) in index.iter() {
        if !first_word {
            out.push(',');
        }
        first_word = false;
        out.push_str(&format!("\n{}{}: {{", indent(1), quote(word)));

        let mut first_path = true;
        for (path, positions) in paths {
            if !first_path {
                out.push(',');
            }
            first_path = false;
            out.push_str(&format!("\n{}{}: [", indent(2), quote(path)));

            let mut first_position = true;
            for position in positions {
                if !first_position {
                    out.push(',');
                }
                first_position = false;
                out.push_str(&format!("\n{}{}", indent(3), position));
            }
            out.push_str(&format!("\n{}]", indent(2)));
        }
        out.push_str(&format!("\n{}}}", indent(1)));
    }
    out.push_str("\n}\n");
    out
}

/// Renders the query results document: raw query lines in first-occurrence
/// order, each holding its ranked results as `where`/`count`/`index`
/// objects. An empty collection renders as `{}`.
pub fn results_document(results: &QueryResults) -> String {
    if results.is_empty() {
        return "{}\n".to_string();
    }

    let mut out = String::from("{");
    let mut first_line = true;
    for (line, hits) in results.iter() {
        if !first_line {
            out.push(',');
        }
        first_line = false;
        out.push_str(&format!("\n{}{}: [", indent(1), quote(line)));

        let mut first_hit = true;
        for hit in hits {
            if !first_hit {
                out.push(',');
            }
            first_hit = false;
            out.push_str(&format!("\n{}{{", indent(2)));
            out.push_str(&format!("\n{}\"where\": {},", indent(3), quote(hit.path())));
            out.push_str(&format!("\n{}\"count\": {},", indent(3), hit.frequency()));
            out.push_str(&format!("\n{}\"index\": {}", indent(3), hit.position()));
            out.push_str(&format!("\n{}}}", indent(2)));
        }
        out.push_str(&format!("\n{}]", indent(1)));
    }
    out.push_str("\n}\n");
    out
}

/// Writes the index document to `path`.
pub fn write_index(path: &Path, index: &InvertedIndex) -> Result<()> {
    fs::write(path, index_document(index))?;
    Ok(())
}

/// Writes the query results document to `path`.
pub fn write_results(path: &Path, results: &QueryResults) -> Result<()> {
    fs::write(path, results_document(results))?;
    Ok(())
}
