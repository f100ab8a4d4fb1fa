//! Corpus loading.
//!
//! A corpus is an ordered sequence of words: one word per non-blank line,
//! trimmed, order preserved. The default corpus is compiled into the binary;
//! a file on disk can stand in for it.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

static EMBEDDED: &str = include_str!("../data/words.txt");

/// Words from the embedded corpus
pub fn embedded() -> Vec<String> {
    parse(EMBEDDED)
}

/// Words from a file on disk
pub fn from_file(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read corpus {}", path.display()))?;
    Ok(parse(&text))
}

/// The file override when given, the embedded corpus otherwise
pub fn load(path: Option<&Path>) -> Result<Vec<String>> {
    match path {
        Some(path) => from_file(path),
        None => Ok(embedded()),
    }
}

fn parse(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_skips_blanks() {
        let words = parse("apple\n\n  banana  \n\t\ncherry\n");
        assert_eq!(words, ["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_parse_preserves_order() {
        assert_eq!(parse("b\na\nc"), ["b", "a", "c"]);
    }

    #[test]
    fn test_embedded_corpus_is_clean() {
        let words = embedded();
        assert!(words.len() > 100);
        assert!(words.iter().all(|w| !w.is_empty()));
        assert!(words.iter().all(|w| w.trim() == w));
    }
}
