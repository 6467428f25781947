//! Noughts - terminal tic-tac-toe against a random computer opponent.

use anyhow::Result;
use clap::Parser;
use noughts::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    noughts::tui::run(cli).await
}
