//! First-class move, rejection and outcome types.
//!
//! Moves are domain events: they can be validated independently of
//! execution and logged or printed for reproduction.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::position::Position;
use crate::types::{ActiveBoard, Player};

/// A placement: a cell within a local board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, new)]
pub struct Move {
    /// Local board being played.
    board: Position,
    /// Cell within that board; also names the opponent's next board.
    cell: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.board.to_index(), self.cell.to_index())
    }
}

/// Game-rule reason a well-formed move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The game already has an outcome.
    #[display("Game is already over")]
    GameOver,
    /// The target square holds a mark.
    #[display("Square is already occupied")]
    CellOccupied,
    /// The active-board constraint names another board.
    #[display("Must play in the {} board", required)]
    WrongBoard {
        /// Board the current player is constrained to.
        required: Position,
    },
    /// The board has been won and is out of play (meta-board rule only).
    #[display("Board {} is already decided", board)]
    BoardClosed {
        /// The decided board.
        board: Position,
    },
}

/// Error returned by [`GameEngine::apply_move`](crate::GameEngine::apply_move).
///
/// A rejected move never changes state, so callers that ignore this value
/// see illegal input absorbed as a no-op.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The move breaks a game rule.
    #[display("Move rejected: {}", _0)]
    Rejected(Rejection),
    /// A raw index fell outside 0-8.
    #[display("Index {} is out of range (must be 0-8)", index)]
    InvalidIndex {
        /// The offending index.
        index: usize,
    },
    /// An invariant check failed on the candidate state.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

impl From<Rejection> for MoveError {
    fn from(rejection: Rejection) -> Self {
        MoveError::Rejected(rejection)
    }
}

/// Result of a legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Play continues.
    Continue {
        /// Player to move next.
        next: Player,
        /// Constraint on the next move.
        active: ActiveBoard,
    },
    /// The move decided the game for this player.
    Won(Player),
    /// The move filled the last playable cell without a winner.
    Drawn,
}
