//! Balanced marks invariant: X and O alternate, X first.

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::Player;

/// Invariant: X has as many marks as O, or exactly one more.
///
/// While the game is in progress, X is to move exactly when the counts
/// are equal. This is the board-level shadow of strict turn alternation.
pub struct BalancedMarksInvariant;

impl Invariant<GameEngine> for BalancedMarksInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let state = engine.state();
        let x = state.boards().count(Player::X);
        let o = state.boards().count(Player::O);

        if x != o && x != o + 1 {
            return false;
        }

        if state.phase().is_over() {
            return true;
        }

        let expected = if x == o { Player::X } else { Player::O };
        state.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
