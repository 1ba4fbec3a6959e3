//! chatcloud binary entry point.

mod cli;
mod commands;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = cli::Cli::parse();
    commands::analyze::run(&cli)
}

/// Set up a stderr subscriber; `CHATCLOUD_LOG` overrides the default level.
fn init_logging() {
    let filter = EnvFilter::try_from_env("CHATCLOUD_LOG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
