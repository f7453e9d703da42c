//! Command-line interface for the console game.

use clap::Parser;

/// Gomoku - console five-in-a-row with a heuristic computer opponent
#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(about = "Five-in-a-row on a 10x10 board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the score database (created if it doesn't exist)
    #[arg(long, default_value = "gomoku.db")]
    pub db_path: String,

    /// Path to the autosave file
    #[arg(long, default_value = "game_save.json")]
    pub save_path: std::path::PathBuf,
}
