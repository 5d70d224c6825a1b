//! Win detection on local boards and across the meta board.

use tracing::instrument;

use crate::position::Position;
use crate::types::{LocalBoard, LocalStatus, MetaBoard, Player};

/// The 8 winning triples: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Finds the first triple whose three marks are equal and present.
fn line_owner(mark_at: impl Fn(Position) -> Option<Player>) -> Option<Player> {
    LINES.iter().find_map(|&[a, b, c]| {
        let owner = mark_at(a)?;
        (mark_at(b) == Some(owner) && mark_at(c) == Some(owner)).then_some(owner)
    })
}

/// Checks a local board for three in a row.
#[instrument(level = "trace", skip(board))]
pub fn check_winner(board: &LocalBoard) -> Option<Player> {
    line_owner(|pos| board.get(pos).player())
}

/// Checks whether the local-board winners form a triple on the meta board.
///
/// Drawn and unfinished boards count as unclaimed.
#[instrument(level = "trace", skip(meta))]
pub fn meta_winner(meta: &MetaBoard) -> Option<Player> {
    line_owner(|pos| match meta.board(pos).status() {
        LocalStatus::Won(player) => Some(player),
        LocalStatus::InProgress | LocalStatus::Drawn => None,
    })
}
