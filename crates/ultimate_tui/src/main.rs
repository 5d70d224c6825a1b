//! Terminal front end for ultimate tic-tac-toe.

#![warn(missing_docs)]

mod app;
mod cli;
mod config;
mod input;
mod script;
mod tui;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use ultimate_tictactoe::GameEngine;

use cli::{Cli, Command};
use config::UltimateConfig;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { log_file } => {
            let config = UltimateConfig::load(cli.config.as_deref())?.with_overrides(
                cli.locale,
                cli.win_rule,
                log_file,
            );
            tui::run_tui(config)
        }
        Command::Script { moves, json } => {
            initialize_script_tracing();
            let config = UltimateConfig::load(cli.config.as_deref())?.with_overrides(
                cli.locale,
                cli.win_rule,
                None,
            );
            run_script(config, moves, json)
        }
    }
}

/// Script output goes to stdout, so logs go to stderr.
fn initialize_script_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run a move script headlessly
#[instrument(skip_all, fields(win_rule = %config.win_rule()))]
fn run_script(config: UltimateConfig, moves: Vec<String>, json: bool) -> Result<()> {
    let moves = script::parse_moves(&moves)?;
    info!(count = moves.len(), "Running move script");

    let mut engine = GameEngine::with_rule(*config.win_rule());
    let stdout = std::io::stdout();
    script::run_script(&mut engine, &moves, *config.locale(), json, &mut stdout.lock())
}
