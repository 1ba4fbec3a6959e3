//! Token filter chain: length bounds, block set, block patterns.

use std::collections::HashSet;

use regex::Regex;

use super::{Token, TokenKind};

/// Longest word in a major English dictionary is 45 characters
/// (pneumonoultramicroscopicsilicovolcanoconiosis); anything longer is noise.
const MAX_TOKEN_LENGTH: usize = 45;

/// Decides which tokens are counted.
///
/// Stages run in order and the first rejection wins: length rule, exact
/// block-set membership, then block patterns in file order.
#[derive(Debug, Default)]
pub struct TokenFilter {
    /// Minimum length (in chars, inclusive) for word tokens. Symbol tokens
    /// bypass this bound.
    pub min_word_length: usize,
    /// Exact-match token exclusions, already lowercased.
    pub block_words: HashSet<String>,
    /// Pattern exclusions, matched with substring semantics.
    pub block_patterns: Vec<Regex>,
}

impl TokenFilter {
    /// A filter with only the length rules active.
    pub fn with_min_length(min_word_length: usize) -> Self {
        Self {
            min_word_length,
            ..Self::default()
        }
    }

    /// Whether the token survives every stage.
    pub fn accepts(&self, token: &Token) -> bool {
        let len = token.char_len();

        if len > MAX_TOKEN_LENGTH {
            return false;
        }
        if token.kind == TokenKind::Word && len < self.min_word_length {
            return false;
        }

        if self.block_words.contains(&token.text) {
            return false;
        }

        !self.block_patterns.iter().any(|p| p.is_match(&token.text))
    }
}
