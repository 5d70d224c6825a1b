//! Command-line interface for the `ultimate` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ultimate_tictactoe::{Locale, WinRule};

/// Ultimate tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "ultimate")]
#[command(about = "Ultimate tic-tac-toe for two players at one terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (default: ultimate.toml, if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Language for status text (en, ar)
    #[arg(long, global = true)]
    pub locale: Option<Locale>,

    /// Win condition (first-local-win, meta-board)
    #[arg(long, global = true)]
    pub win_rule: Option<WinRule>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Log file (overrides the config file)
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Apply a list of moves without a UI and print the resulting board
    Script {
        /// Moves as BOARD,CELL pairs (0-8 each), e.g. `4,0 0,4`
        #[arg(required = true)]
        moves: Vec<String>,

        /// Print the final game state as JSON
        #[arg(long)]
        json: bool,
    },
}
