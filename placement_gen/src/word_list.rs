use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;
use tracing::{debug, warn};

/// Reads whitespace-separated words from a file.
///
/// Only the first occurrence of a word is kept.
pub fn load_word_list(path: &Path) -> anyhow::Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list '{}'", path.display()))?;

    let mut seen = HashSet::new();
    let mut words = Vec::new();
    for token in contents.split_whitespace() {
        if seen.insert(token) {
            words.push(String::from(token));
        } else {
            warn!(word = token, "Dropping duplicate word");
        }
    }
    debug!(num_words = words.len(), path = %path.display(), "Loaded word list");
    Ok(words)
}
