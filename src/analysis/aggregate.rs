//! Frequency aggregation over message bodies.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use super::{tokens, TokenFilter};

/// Loose URL heuristic: an optional scheme, then two word-and-punctuation
/// runs joined by a dot. Deliberately permissive; it can over-strip
/// punctuation-heavy prose and under-strip exotic URLs, and that trade-off is
/// part of the contract.
static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:(?:https?|ftp)://)?[\w/\-?=%.]+\.[\w/\-?=%.]+")
        .expect("url pattern is valid")
});

/// Remove every URL-looking substring from a message.
pub fn strip_urls(text: &str) -> Cow<'_, str> {
    URL.replace_all(text, "")
}

/// Fold message bodies into a token frequency map.
///
/// Per body: skip if empty, strip URLs, lowercase, tokenize, then count every
/// token the filter accepts. Pure with respect to its inputs; repeated calls
/// with the same arguments produce the same map.
pub fn word_counts(texts: &[String], filter: &TokenFilter) -> HashMap<String, u64> {
    let mut counts = HashMap::new();

    for body in texts {
        if body.is_empty() {
            continue;
        }

        let stripped = strip_urls(body);
        let lowered = stripped.to_lowercase();

        for token in tokens(&lowered) {
            if filter.accepts(&token) {
                *counts.entry(token.text).or_insert(0) += 1;
            }
        }
    }

    counts
}

/// Rank a frequency map by descending count and truncate to `limit` entries.
///
/// Ties break alphabetically so the output is deterministic across runs.
pub fn ranked(counts: &HashMap<String, u64>, limit: usize) -> Vec<(String, u64)> {
    let mut entries: Vec<_> = counts
        .iter()
        .map(|(token, &count)| (token.clone(), count))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(limit);
    entries
}
