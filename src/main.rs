//! Gomoku - console five-in-a-row.

use anyhow::Result;
use clap::Parser;
use gomoku::{Cli, GameController, SaveFile, ScoreRepository};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Diagnostics go to stderr so they don't interleave with the game.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    info!(db_path = %cli.db_path, save_path = %cli.save_path.display(), "starting gomoku");

    let scores = ScoreRepository::new(cli.db_path)?;
    let save_file = SaveFile::new(cli.save_path);

    GameController::new(save_file, scores).run()
}
