//! Game rules for ultimate tic-tac-toe.
//!
//! Pure functions over boards, kept apart from the engine's state
//! transitions so they can be tested and reused by invariants.

pub mod draw;
pub mod win;

pub use draw::{is_closed, is_full};
pub use win::{LINES, check_winner, meta_winner};
