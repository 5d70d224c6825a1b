//! The game engine: move legality, transitions and queries.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::action::{Move, MoveError, MoveOutcome, Rejection};
#[cfg(debug_assertions)]
use crate::invariants::{EngineInvariants, InvariantSet};
use crate::position::Position;
use crate::rules;
use crate::status::Status;
use crate::types::{ActiveBoard, GamePhase, GameState, LocalBoard, MetaBoard, Square};

/// Which condition ends the game with a winner.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum WinRule {
    /// The first three-in-a-row on any local board wins the whole game.
    /// Boards close only when full.
    #[default]
    FirstLocalWin,
    /// A local win claims that meta-position; three claimed positions in a
    /// row win the game. Won boards close and take no further moves.
    MetaBoard,
}

impl WinRule {
    /// True when `board` can take no further move under this rule.
    pub fn is_closed(self, board: &LocalBoard) -> bool {
        match self {
            WinRule::FirstLocalWin => rules::is_full(board),
            WinRule::MetaBoard => rules::is_closed(board),
        }
    }

    fn all_closed(self, meta: &MetaBoard) -> bool {
        meta.boards().iter().all(|b| self.is_closed(b))
    }
}

/// Ultimate tic-tac-toe engine.
///
/// Owns the single authoritative [`GameState`]. The state changes only
/// through [`apply_move`](Self::apply_move) and [`reset`](Self::reset);
/// a rejected move leaves it untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameEngine {
    pub(crate) state: GameState,
    win_rule: WinRule,
}

impl GameEngine {
    /// Creates a new game with the default rule.
    #[instrument]
    pub fn new() -> Self {
        Self::with_rule(WinRule::default())
    }

    /// Creates a new game with the given rule.
    #[instrument]
    pub fn with_rule(win_rule: WinRule) -> Self {
        Self {
            state: GameState::new(),
            win_rule,
        }
    }

    /// Read-only snapshot of the game.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The rule this game is played under.
    pub fn win_rule(&self) -> WinRule {
        self.win_rule
    }

    /// The status produced by the latest transition.
    pub fn current_status(&self) -> &Status {
        &self.state.status
    }

    /// Runs the legality gate for a move without applying it.
    pub fn check_move(&self, board: Position, cell: Position) -> Result<(), Rejection> {
        let state = &self.state;

        if state.phase.is_over() {
            return Err(Rejection::GameOver);
        }

        if !state.boards.board(board).is_empty(cell) {
            return Err(Rejection::CellOccupied);
        }

        if let ActiveBoard::Board(required) = state.active_board
            && required != board
        {
            return Err(Rejection::WrongBoard { required });
        }

        if self.win_rule.is_closed(state.boards.board(board)) {
            return Err(Rejection::BoardClosed { board });
        }

        Ok(())
    }

    /// True iff a move on this cell would be accepted.
    pub fn is_cell_playable(&self, board: Position, cell: Position) -> bool {
        self.check_move(board, cell).is_ok()
    }

    /// True iff the board satisfies the active constraint and can still
    /// take a move. Renderers use this to highlight boards.
    pub fn is_board_active(&self, board: Position) -> bool {
        !self.state.phase.is_over()
            && self.state.active_board.allows(board)
            && !self.win_rule.is_closed(self.state.boards.board(board))
    }

    /// Every move the current player may make.
    #[instrument(skip(self))]
    pub fn legal_moves(&self) -> Vec<Move> {
        Position::ALL
            .iter()
            .flat_map(|&board| Position::ALL.iter().map(move |&cell| Move::new(board, cell)))
            .filter(|mv| self.is_cell_playable(*mv.board(), *mv.cell()))
            .collect()
    }

    /// Applies a move from raw indices, bound-checking both.
    pub fn apply_move_at(&mut self, board: usize, cell: usize) -> Result<MoveOutcome, MoveError> {
        let board = Position::try_from(board)?;
        let cell = Position::try_from(cell)?;
        self.apply_move(board, cell)
    }

    /// Applies a [`Move`].
    pub fn play(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        self.apply_move(*mv.board(), *mv.cell())
    }

    /// Places the current player's mark on `cell` of `board`.
    ///
    /// The move passes a single gate (game not over, cell empty, board
    /// allowed by the active constraint) or is rejected with no effect.
    /// A legal move marks the cell, then either ends the game or hands the
    /// turn over with the next board set to `cell`, opening to any board
    /// when that one is closed.
    #[instrument(skip(self), fields(player = %self.state.current_player))]
    pub fn apply_move(
        &mut self,
        board: Position,
        cell: Position,
    ) -> Result<MoveOutcome, MoveError> {
        if let Err(rejection) = self.check_move(board, cell) {
            debug!(%rejection, "Move rejected");
            return Err(rejection.into());
        }

        let player = self.state.current_player;
        let mut next = self.state.clone();
        next.boards
            .board_mut(board)
            .set(cell, Square::Occupied(player));

        let winner = match rules::check_winner(next.boards.board(board)) {
            Some(local) => match self.win_rule {
                WinRule::FirstLocalWin => Some(local),
                WinRule::MetaBoard => {
                    debug!(%board, winner = %local, "Local board claimed");
                    rules::meta_winner(&next.boards)
                }
            },
            None => None,
        };

        let outcome = if let Some(winner) = winner {
            next.phase = GamePhase::Won(winner);
            next.active_board = ActiveBoard::Any;
            next.status = Status::Won { player: winner };
            MoveOutcome::Won(winner)
        } else if self.win_rule.all_closed(&next.boards) {
            next.phase = GamePhase::Drawn;
            next.active_board = ActiveBoard::Any;
            next.status = Status::Drawn;
            MoveOutcome::Drawn
        } else {
            let to_move = player.opponent();
            next.current_player = to_move;
            if self.win_rule.is_closed(next.boards.board(cell)) {
                next.active_board = ActiveBoard::Any;
                next.status = Status::AnyBoard { player: to_move };
            } else {
                next.active_board = ActiveBoard::Board(cell);
                next.status = Status::MustPlay {
                    player: to_move,
                    board: cell,
                };
            }
            MoveOutcome::Continue {
                next: to_move,
                active: next.active_board,
            }
        };

        let candidate = Self {
            state: next,
            win_rule: self.win_rule,
        };

        #[cfg(debug_assertions)]
        EngineInvariants::check_all(&candidate).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            tracing::warn!(%descriptions, "Invariant check failed, move discarded");
            MoveError::InvariantViolation(descriptions)
        })?;

        self.state = candidate.state;
        match outcome {
            MoveOutcome::Won(winner) => info!(%winner, "Game won"),
            MoveOutcome::Drawn => info!("Game drawn"),
            MoveOutcome::Continue { next, active } => {
                debug!(%next, ?active, "Move applied");
            }
        }
        Ok(outcome)
    }

    /// Restores the fresh starting state, keeping the rule.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(win_rule = %self.win_rule, "Resetting game");
        self.state = GameState::new();
    }
}
