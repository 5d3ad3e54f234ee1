//! `liql` - compile LiQL filters, queries and search URLs from the shell.
//!
//! ```text
//! liql where --filter '{"id": 5, "replies.count(*)": [">", 0]}'
//! liql fields id subject view_href
//! liql --config community.yaml query --select id --from messages --limit 5 --url
//! ```
//!
//! Results go to stdout, logs to stderr.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let output = commands::run(&cli)?;
    println!("{output}");
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
