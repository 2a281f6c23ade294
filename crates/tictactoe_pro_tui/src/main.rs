//! Tic-Tac-Toe Pro - terminal front end
//!
//! Renders the board and scoreboard and forwards key presses to the engine.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::Cli;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use std::path::Path;
use std::sync::Mutex;
use tictactoe_pro::{GameConfig, GameEngine};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let engine = build_engine(&cli)?;
    info!("Starting Tic-Tac-Toe Pro");

    let mut terminal = ratatui::init();
    let res = run_app(&mut terminal, App::new(engine));
    ratatui::restore();

    res
}

/// Sends logs to `path`; the terminal belongs to the UI.
fn init_logging(path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Loads the config (or defaults), applies CLI overrides, and builds the engine.
#[instrument(skip(cli))]
fn build_engine(cli: &Cli) -> Result<GameEngine> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    if let Some(board_size) = cli.board_size {
        config = config.with_board_size(board_size);
    }

    let engine = GameEngine::from_config(&config).context("Invalid game setup")?;
    Ok(engine)
}

fn run_app(terminal: &mut DefaultTerminal, mut app: App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, &app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }

    info!("Exiting");
    Ok(())
}
