//! Tokenization of message text into words and pictographic symbols.
//!
//! Two tokenizers are exposed:
//!
//! - [`tokens`] is the canonical one: Unicode word runs plus single-codepoint
//!   pictographic symbols, classified at match time.
//! - [`simple_tokens`] is the word-only fallback used for block-word files,
//!   where symbol awareness is not needed but the token space must otherwise
//!   match the one used for message text.

use std::sync::LazyLock;

use regex::Regex;

/// Classification of a token, fixed at tokenization time.
///
/// A token is exactly one of the two kinds; the kind decides which length
/// rule the filter chain applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Maximal run of word characters (`\w`: alphanumeric or underscore).
    Word,
    /// Single code point from the pictographic symbol blocks.
    Symbol,
}

/// A normalized token extracted from lowercased message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
}

impl Token {
    /// Token length in code points (the unit the length rules are defined in).
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Pictographic symbol ranges, matched one code point at a time so that
/// adjacent symbols become separate tokens instead of merging.
///
/// Covers the common emoji blocks (symbols & pictographs, emoticons,
/// transport, alchemical, geometric shapes extended, supplemental arrows-C,
/// supplemental symbols, chess, extended-A) plus dingbats and the
/// miscellaneous symbol block.
const SYMBOL_CLASS: &str = "[\u{1F300}-\u{1F5FF}\
\u{1F600}-\u{1F64F}\
\u{1F680}-\u{1F6FF}\
\u{1F700}-\u{1F77F}\
\u{1F780}-\u{1F7FF}\
\u{1F800}-\u{1F8FF}\
\u{1F900}-\u{1F9FF}\
\u{1FA00}-\u{1FA6F}\
\u{1FA70}-\u{1FAFF}\
\u{2700}-\u{27BF}\
\u{2600}-\u{26FF}]";

/// Canonical tokenizer pattern: word runs or single pictographic symbols.
/// The word arm comes first so a run is never split by the symbol arm.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\w+|{SYMBOL_CLASS}")).expect("token pattern is valid")
});

/// Word-only pattern for the fallback tokenizer.
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("word pattern is valid"));

/// Symbol-membership check, used to classify a matched token.
static SYMBOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SYMBOL_CLASS).expect("symbol pattern is valid"));

/// Split a text fragment into word and symbol tokens, in source order.
///
/// Whitespace, punctuation and formatting characters are skipped. The input
/// is expected to be lowercased already; tokenization itself does not fold
/// case.
pub fn tokens(text: &str) -> Vec<Token> {
    TOKEN
        .find_iter(text)
        .map(|m| {
            let text = m.as_str().to_string();
            let kind = if SYMBOL.is_match(&text) {
                TokenKind::Symbol
            } else {
                TokenKind::Word
            };
            Token { text, kind }
        })
        .collect()
}

/// Split a text fragment into word tokens only, discarding symbols.
pub fn simple_tokens(text: &str) -> Vec<String> {
    WORD.find_iter(text).map(|m| m.as_str().to_string()).collect()
}
