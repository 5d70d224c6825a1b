//! Active board invariant: a constraint never names a closed board.

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::ActiveBoard;

/// Invariant: when play is constrained to a board, that board can take a
/// move (not full, and under the meta-board rule not won).
pub struct ActiveBoardOpenInvariant;

impl Invariant<GameEngine> for ActiveBoardOpenInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let state = engine.state();
        match state.active_board() {
            ActiveBoard::Any => true,
            ActiveBoard::Board(board) => {
                !state.phase().is_over()
                    && !engine.win_rule().is_closed(state.boards().board(board))
            }
        }
    }

    fn description() -> &'static str {
        "Active board constraint names an open board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square};

    #[test]
    fn test_any_board_holds() {
        assert!(ActiveBoardOpenInvariant::holds(&GameEngine::new()));
    }

    #[test]
    fn test_full_active_board_violates() {
        let mut engine = GameEngine::new();
        for cell in Position::ALL {
            engine
                .state
                .boards
                .board_mut(Position::Center)
                .set(cell, Square::Occupied(Player::O));
        }
        engine.state.active_board = ActiveBoard::Board(Position::Center);
        assert!(!ActiveBoardOpenInvariant::holds(&engine));
    }
}
