//! Fullness and closure checks.

use tracing::instrument;

use super::win::check_winner;
use crate::types::{LocalBoard, Square};

/// Checks if the board is full (all squares occupied).
#[instrument(level = "trace", skip(board))]
pub fn is_full(board: &LocalBoard) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A board that can no longer take part in play under the meta-board rule:
/// full, or already won.
#[instrument(level = "trace", skip(board))]
pub fn is_closed(board: &LocalBoard) -> bool {
    is_full(board) || check_winner(board).is_some()
}
