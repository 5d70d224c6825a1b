//! Core domain types for ultimate tic-tac-toe.

use serde::{Deserialize, Serialize};

use crate::position::Position;
use crate::rules;
use crate::status::Status;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(p) => Some(p),
        }
    }
}

/// Outcome of a single local board, derived from its squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocalStatus {
    /// No line and at least one empty square.
    InProgress,
    /// A winning triple for this player.
    Won(Player),
    /// Full with no winning triple.
    Drawn,
}

/// One 3x3 sub-board.
///
/// Squares are held by value, so every board owns its storage and a
/// cloned or reset board never shares cells with another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocalBoard {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl LocalBoard {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// True when every square is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Status computed from the current squares.
    pub fn status(&self) -> LocalStatus {
        match rules::check_winner(self) {
            Some(player) => LocalStatus::Won(player),
            None if self.is_full() => LocalStatus::Drawn,
            None => LocalStatus::InProgress,
        }
    }

    /// Formats the board as three text rows (`.` for empty squares).
    pub fn display_rows(&self) -> [String; 3] {
        std::array::from_fn(|row| {
            (0..3)
                .map(|col| match self.squares[row * 3 + col] {
                    Square::Empty => '.',
                    Square::Occupied(Player::X) => 'X',
                    Square::Occupied(Player::O) => 'O',
                })
                .collect()
        })
    }
}

/// The 3x3 arrangement of local boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MetaBoard {
    /// Local boards in row-major order; board `i` sits at meta-position `i`.
    boards: [LocalBoard; 9],
}

impl MetaBoard {
    /// Creates a meta board of nine independent empty boards.
    pub fn new() -> Self {
        Self {
            boards: std::array::from_fn(|_| LocalBoard::new()),
        }
    }

    /// Gets the local board at the given meta-position.
    pub fn board(&self, pos: Position) -> &LocalBoard {
        &self.boards[pos.to_index()]
    }

    pub(crate) fn board_mut(&mut self, pos: Position) -> &mut LocalBoard {
        &mut self.boards[pos.to_index()]
    }

    /// Gets one square.
    pub fn square(&self, board: Position, cell: Position) -> Square {
        self.board(board).get(cell)
    }

    /// Returns all local boards.
    pub fn boards(&self) -> &[LocalBoard; 9] {
        &self.boards
    }

    /// True when all 81 cells are occupied.
    pub fn is_full(&self) -> bool {
        self.boards.iter().all(LocalBoard::is_full)
    }

    /// Number of squares held by `player` across all boards.
    pub fn count(&self, player: Player) -> usize {
        self.boards
            .iter()
            .flat_map(|b| b.squares().iter())
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Formats the meta board as an 11-line text grid.
    pub fn display(&self) -> String {
        let mut lines = Vec::with_capacity(11);
        for meta_row in 0..3 {
            let rows: Vec<[String; 3]> = (0..3)
                .map(|meta_col| self.boards[meta_row * 3 + meta_col].display_rows())
                .collect();
            for line in 0..3 {
                lines.push(format!(
                    "{} | {} | {}",
                    rows[0][line], rows[1][line], rows[2][line]
                ));
            }
            if meta_row < 2 {
                lines.push("----+-----+----".to_string());
            }
        }
        lines.join("\n")
    }
}

/// The sub-board the current player must play in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActiveBoard {
    /// Unconstrained: any open board may be played.
    Any,
    /// Constrained to this board.
    Board(Position),
}

impl ActiveBoard {
    /// True when `board` satisfies this constraint.
    pub fn allows(self, board: Position) -> bool {
        match self {
            ActiveBoard::Any => true,
            ActiveBoard::Board(required) => required == board,
        }
    }
}

/// Lifecycle of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Moves are accepted.
    InProgress,
    /// Game ended with a winner.
    Won(Player),
    /// Game ended with no winner.
    Drawn,
}

impl GamePhase {
    /// True for `Won` and `Drawn`.
    pub fn is_over(self) -> bool {
        !matches!(self, GamePhase::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GamePhase::Won(player) => Some(player),
            _ => None,
        }
    }
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) boards: MetaBoard,
    pub(crate) current_player: Player,
    pub(crate) active_board: ActiveBoard,
    pub(crate) phase: GamePhase,
    pub(crate) status: Status,
}

impl GameState {
    /// Creates the fresh starting state: empty boards, X to move, any board.
    pub fn new() -> Self {
        Self {
            boards: MetaBoard::new(),
            current_player: Player::X,
            active_board: ActiveBoard::Any,
            phase: GamePhase::InProgress,
            status: Status::Opening { player: Player::X },
        }
    }

    /// Returns the meta board.
    pub fn boards(&self) -> &MetaBoard {
        &self.boards
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the active board constraint.
    pub fn active_board(&self) -> ActiveBoard {
        self.active_board
    }

    /// Returns the game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Returns the winner, if the game was won.
    pub fn winner(&self) -> Option<Player> {
        self.phase.winner()
    }

    /// Returns the structured status.
    pub fn status(&self) -> &Status {
        &self.status
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
