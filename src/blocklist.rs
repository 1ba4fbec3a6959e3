//! Loading of user-supplied token exclusion lists.
//!
//! Both loaders degrade gracefully: a missing file or an unparseable pattern
//! line costs a diagnostic, never the whole analysis. Block words are run
//! through the same tokenizer as message text so the block set lives in the
//! same token space as the tokens it is meant to exclude.

use std::collections::HashSet;
use std::path::Path;

use regex::Regex;
use tracing::warn;

use crate::analysis::simple_tokens;
use crate::files;

/// Load a plain block-word file into a set of lowercase tokens.
///
/// `None` or a missing/unreadable file yields an empty set with a logged
/// notice.
pub fn load_block_words(path: Option<&Path>) -> HashSet<String> {
    let Some(path) = path else {
        return HashSet::new();
    };

    let content = match files::read_lossy(path) {
        Ok(content) => content,
        Err(err) => {
            warn!(path = %path.display(), %err, "block word file not readable, continuing with empty set");
            return HashSet::new();
        }
    };

    simple_tokens(&content.to_lowercase()).into_iter().collect()
}

/// Load a block-pattern file: one regex per non-empty, non-`#` line.
///
/// Lines that fail to compile are skipped with a diagnostic; the remaining
/// patterns still load, preserving file order.
pub fn load_block_patterns(path: Option<&Path>) -> Vec<Regex> {
    let Some(path) = path else {
        return Vec::new();
    };

    let content = match files::read_lossy(path) {
        Ok(content) => content,
        Err(err) => {
            warn!(path = %path.display(), %err, "block pattern file not readable, continuing with no patterns");
            return Vec::new();
        }
    };

    let mut patterns = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match Regex::new(line) {
            Ok(pattern) => patterns.push(pattern),
            Err(err) => {
                warn!(path = %path.display(), pattern = line, %err, "skipping invalid block pattern");
            }
        }
    }
    patterns
}
