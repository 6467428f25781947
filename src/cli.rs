//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;

/// Noughts - tic-tac-toe in the terminal against a random opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play tic-tac-toe against a random computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Pause before the computer moves, in milliseconds
    #[arg(long, default_value = "500")]
    pub delay_ms: u64,

    /// Seed the random source for a reproducible session
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log file path (the TUI owns the terminal, so logs go to a file)
    #[arg(long, default_value = "noughts.log")]
    pub log_file: PathBuf,
}
