use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Runs of characters that are neither Unicode alphanumeric nor whitespace.
    static ref CLEAN_RE: Regex =
        Regex::new(r"[^\p{Alphabetic}\p{Nd}\s]+").expect("valid regex");
}

/// Deletes every character that is not alphanumeric or whitespace, then
/// lowercases and trims. Unicode alphanumerics such as "á" and "9" survive;
/// "_", "-", "@" and friends do not.
pub fn clean(text: &str) -> String {
    CLEAN_RE
        .replace_all(text, "")
        .to_lowercase()
        .trim()
        .to_string()
}

/// Cleans `text` and splits it on whitespace runs. Empty tokens are
/// dropped; input that normalizes to nothing yields an empty vec.
pub fn split(text: &str) -> Vec<String> {
    clean(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_split() {
        let words = split("Hello, WORLD!");
        assert_eq!(words, vec!["hello", "world"]);
    }
}
