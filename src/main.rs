//! Best-hit classification for BLAST tabular search results.
//!
//! Reads an outfmt-6 table, keeps the top-scoring alignment per query
//! sequence, splits the winners into good and bad sets by a
//! percent-identity threshold, and writes the three resulting tables.

mod cli;
mod io;
mod pipeline;
mod record;

use anyhow::Result;
use clap::Parser;
use cli::{run_cli, Cli};

fn main() -> Result<()> {
    // Initialize logger
    env_logger::init();

    // Parse command line arguments
    let cli = Cli::parse();

    // Run CLI
    run_cli(cli)?;

    Ok(())
}
