//! Command-line interface for the terminal front end.

use clap::Parser;
use clap::builder::RangedU64ValueParser;
use std::path::PathBuf;
use tictactoe_pro::MAX_BOARD_SIZE;

/// Tic-Tac-Toe Pro - play tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe_pro")]
#[command(about = "Two-player tic-tac-toe with a session scoreboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML game config (players and board size)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the configured board size
    #[arg(
        short,
        long,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_BOARD_SIZE as u64)
    )]
    pub board_size: Option<usize>,

    /// Write logs to this file (filtered by RUST_LOG, default "info")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
