//! Text analysis pipeline: tokenization, filtering, frequency aggregation.
//!
//! The pipeline is a sequence of pure passes over message bodies:
//!
//! ```text
//! bodies -> strip URLs -> lowercase -> tokenize -> filter chain -> counts
//! ```
//!
//! Nothing here touches the filesystem; blocklist loading lives in
//! [`crate::blocklist`] and transcript segmentation in [`crate::source`].

mod aggregate;
mod filter;
mod tokenize;

pub use aggregate::{ranked, strip_urls, word_counts};
pub use filter::TokenFilter;
pub use tokenize::{simple_tokens, tokens, Token, TokenKind};
