//! Analyze command handler
//!
//! Wires the pipeline together: resolve and read the transcript, load the
//! blocklists, segment with the selected source adapter, aggregate, then
//! write the ranked table as JSON and echo it to stdout.

use std::fs;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use chatcloud::analysis::{ranked, word_counts, TokenFilter};
use chatcloud::{blocklist, files, source};

use crate::cli::Cli;

/// Name of the frequency table written into the output directory.
const OUTPUT_FILENAME: &str = "frequencies.json";

/// One row of the ranked frequency table.
#[derive(Debug, Serialize)]
struct TokenCount {
    token: String,
    count: u64,
}

/// Run a full transcript analysis as described by the CLI arguments.
pub fn run(cli: &Cli) -> Result<()> {
    let adapter = source::for_name(&cli.input_type)?;

    let transcript_dir = cli.input_source.parent();
    let input_path = files::resolve(&cli.input_source, None);
    let raw = files::read_lossy(&input_path)
        .with_context(|| format!("Failed to read transcript {}", input_path.display()))?;

    // Blocklist files are looked up next to the transcript as a fallback.
    let words_path = cli
        .block_words
        .as_deref()
        .map(|p| files::resolve(p, transcript_dir));
    let patterns_path = cli
        .block_patterns
        .as_deref()
        .map(|p| files::resolve(p, transcript_dir));

    let block_words = blocklist::load_block_words(words_path.as_deref());
    let block_patterns = blocklist::load_block_patterns(patterns_path.as_deref());

    let filter = TokenFilter {
        min_word_length: cli.min_word_length,
        block_words,
        block_patterns,
    };

    let texts = adapter.extract_texts(&raw)?;
    info!(messages = texts.len(), source = adapter.name(), "transcript segmented");

    let counts = word_counts(&texts, &filter);
    let top = ranked(&counts, cli.max_words);
    info!(distinct = counts.len(), kept = top.len(), "frequencies aggregated");

    write_table(cli, &top)?;
    print_table(&top);

    Ok(())
}

/// Write the ranked table into `<output>/frequencies.json`.
fn write_table(cli: &Cli, top: &[(String, u64)]) -> Result<()> {
    fs::create_dir_all(&cli.output)
        .with_context(|| format!("Failed to create output directory {}", cli.output.display()))?;

    let rows: Vec<TokenCount> = top
        .iter()
        .map(|(token, count)| TokenCount {
            token: token.clone(),
            count: *count,
        })
        .collect();

    let path = cli.output.join(OUTPUT_FILENAME);
    let json = serde_json::to_string_pretty(&rows)?;
    fs::write(&path, json)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Frequency table saved to {}", path.display());
    Ok(())
}

/// Echo the ranked table to stdout, highest count first.
fn print_table(top: &[(String, u64)]) {
    for (token, count) in top {
        println!("{count:>8}  {token}");
    }
}
