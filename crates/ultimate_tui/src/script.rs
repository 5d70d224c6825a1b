//! Headless move scripts for reproducing positions.

use std::io::Write;

use anyhow::Result;
use derive_more::{Display, Error};
use tracing::{debug, instrument, warn};
use ultimate_tictactoe::{ActiveBoard, GameEngine, Locale, MoveOutcome, Position};

/// A script argument that is not a `BOARD,CELL` pair.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ScriptError {
    /// Token does not have the `BOARD,CELL` shape.
    #[display("Malformed move '{}': expected BOARD,CELL with indices 0-8", token)]
    Malformed {
        /// Offending token.
        token: String,
    },
    /// Nothing to play.
    #[display("No moves given")]
    Empty,
}

/// Parses `board,cell` pairs from whitespace-separated arguments. Each
/// side is an index or a position label (`center,top-left`).
///
/// Only the shape is checked here. Out-of-range indices are reported by
/// the engine when the move is played.
#[instrument(skip(args))]
pub fn parse_moves(args: &[String]) -> Result<Vec<(usize, usize)>, ScriptError> {
    let moves = args
        .iter()
        .flat_map(|arg| arg.split_whitespace())
        .map(parse_move)
        .collect::<Result<Vec<_>, _>>()?;

    if moves.is_empty() {
        return Err(ScriptError::Empty);
    }
    debug!(count = moves.len(), "Parsed moves");
    Ok(moves)
}

fn parse_move(token: &str) -> Result<(usize, usize), ScriptError> {
    let malformed = || ScriptError::Malformed {
        token: token.to_string(),
    };
    let (board, cell) = token.split_once([',', ':']).ok_or_else(malformed)?;
    let board = parse_index(board).ok_or_else(malformed)?;
    let cell = parse_index(cell).ok_or_else(malformed)?;
    Ok((board, cell))
}

/// Raw index, kept unchecked so the engine reports range errors, or a
/// position label such as `top-left`.
fn parse_index(part: &str) -> Option<usize> {
    let part = part.trim();
    match part.parse::<usize>() {
        Ok(index) => Some(index),
        Err(_) => Position::from_label_or_number(part).map(Position::to_index),
    }
}

/// Plays `moves` in order and writes each result, the final board and the
/// status. Rejected moves are reported and skipped.
#[instrument(skip(engine, out), fields(moves = moves.len()))]
pub fn run_script(
    engine: &mut GameEngine,
    moves: &[(usize, usize)],
    locale: Locale,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    for &(board, cell) in moves {
        let mover = engine.state().current_player();
        match engine.apply_move_at(board, cell) {
            Ok(outcome) => writeln!(out, "{mover} {board},{cell}: {}", describe(outcome))?,
            Err(e) => {
                warn!(board, cell, error = %e, "Scripted move rejected");
                writeln!(out, "{mover} {board},{cell}: {e}")?;
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", engine.state().boards().display())?;
    writeln!(out)?;
    writeln!(out, "{}", engine.current_status().localized(locale))?;

    if json {
        serde_json::to_writer_pretty(&mut *out, engine.state())?;
        writeln!(out)?;
    }
    Ok(())
}

fn describe(outcome: MoveOutcome) -> String {
    match outcome {
        MoveOutcome::Continue {
            next,
            active: ActiveBoard::Board(board),
        } => format!("ok, {next} plays in board {}", board.to_index()),
        MoveOutcome::Continue {
            next,
            active: ActiveBoard::Any,
        } => format!("ok, {next} plays in any board"),
        MoveOutcome::Won(player) => format!("{player} wins"),
        MoveOutcome::Drawn => "draw".to_string(),
    }
}
