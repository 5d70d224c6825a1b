//! Ultimate tic-tac-toe rule engine.
//!
//! A 3x3 grid of 3x3 local boards. The cell a player marks names the
//! local board the opponent must play next; if that board can take no
//! more moves, the opponent may play anywhere.
//!
//! # Example
//!
//! ```
//! use ultimate_tictactoe::{ActiveBoard, GameEngine, Player, Position};
//!
//! let mut engine = GameEngine::new();
//! engine.apply_move(Position::Center, Position::TopLeft)?;
//!
//! let state = engine.state();
//! assert_eq!(state.current_player(), Player::O);
//! assert_eq!(state.active_board(), ActiveBoard::Board(Position::TopLeft));
//! # Ok::<(), ultimate_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod position;
mod status;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError, MoveOutcome, Rejection};
pub use engine::{GameEngine, WinRule};
pub use position::Position;
pub use status::{Locale, Status};
pub use types::{
    ActiveBoard, GamePhase, GameState, LocalBoard, LocalStatus, MetaBoard, Player, Square,
};
