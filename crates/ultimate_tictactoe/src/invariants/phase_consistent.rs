//! Phase invariant: the recorded outcome matches the boards.

use super::Invariant;
use crate::engine::{GameEngine, WinRule};
use crate::rules;
use crate::types::{GamePhase, LocalStatus};

/// Invariant: a `Won` phase is backed by a winning line for that player,
/// and under the first-local-win rule no board is won while in progress.
pub struct PhaseConsistentInvariant;

impl Invariant<GameEngine> for PhaseConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let state = engine.state();
        let boards = state.boards();
        let any_local_win = || {
            boards
                .boards()
                .iter()
                .any(|b| matches!(b.status(), LocalStatus::Won(_)))
        };

        match (state.phase(), engine.win_rule()) {
            (GamePhase::Won(player), WinRule::FirstLocalWin) => boards
                .boards()
                .iter()
                .any(|b| b.status() == LocalStatus::Won(player)),
            (GamePhase::Won(player), WinRule::MetaBoard) => {
                rules::meta_winner(boards) == Some(player)
            }
            (GamePhase::InProgress, WinRule::FirstLocalWin) => !any_local_win(),
            (GamePhase::InProgress, WinRule::MetaBoard) => rules::meta_winner(boards).is_none(),
            (GamePhase::Drawn, WinRule::FirstLocalWin) => boards.is_full() && !any_local_win(),
            (GamePhase::Drawn, WinRule::MetaBoard) => {
                rules::meta_winner(boards).is_none()
                    && boards.boards().iter().all(rules::is_closed)
            }
        }
    }

    fn description() -> &'static str {
        "Game phase agrees with the board contents"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_fresh_game_holds() {
        assert!(PhaseConsistentInvariant::holds(&GameEngine::new()));
    }

    #[test]
    fn test_unbacked_win_violates() {
        let mut engine = GameEngine::new();
        engine.apply_move(Position::Center, Position::Center).unwrap();
        engine.state.phase = GamePhase::Won(Player::X);
        assert!(!PhaseConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_premature_draw_violates() {
        let mut engine = GameEngine::new();
        engine.state.phase = GamePhase::Drawn;
        assert!(!PhaseConsistentInvariant::holds(&engine));
    }
}
