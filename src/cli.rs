//! Command-line interface definition.

use std::path::PathBuf;

use clap::Parser;

/// Analyze a chat transcript and produce ranked word frequencies.
#[derive(Debug, Parser)]
#[command(name = "chatcloud", version, about)]
pub struct Cli {
    /// Path to the transcript file
    pub input_source: PathBuf,

    /// Transcript source type (e.g. 'whatsapp')
    pub input_type: String,

    /// File of words to exclude (tokenized, case-insensitive)
    #[arg(long, value_name = "FILE")]
    pub block_words: Option<PathBuf>,

    /// File of regex patterns to exclude, one per line ('#' comments allowed)
    #[arg(long, value_name = "FILE")]
    pub block_patterns: Option<PathBuf>,

    /// Directory the frequency table is written to
    #[arg(long, value_name = "DIR", default_value = "output")]
    pub output: PathBuf,

    /// Minimum word length to count (symbols are exempt)
    #[arg(long, value_name = "N", default_value_t = 3)]
    pub min_word_length: usize,

    /// Maximum number of entries in the ranked output
    #[arg(long, value_name = "N", default_value_t = 45)]
    pub max_words: usize,
}
