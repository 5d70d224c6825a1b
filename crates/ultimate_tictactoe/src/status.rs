//! Structured status and its localized text.
//!
//! The engine records *what* happened (whose turn, which board); each
//! [`Locale`] turns that into a sentence.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::position::Position;
use crate::types::Player;

/// Status after the latest transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Fresh game: the first player may choose any cell.
    Opening {
        /// Player to move.
        player: Player,
    },
    /// The board named by the last move is closed, so any board is open.
    AnyBoard {
        /// Player to move.
        player: Player,
    },
    /// The player is constrained to one board.
    MustPlay {
        /// Player to move.
        player: Player,
        /// Required board.
        board: Position,
    },
    /// Game won.
    Won {
        /// Winner.
        player: Player,
    },
    /// Game drawn.
    Drawn,
}

impl Status {
    /// Renders the status in the given locale.
    #[instrument(level = "trace")]
    pub fn localized(&self, locale: Locale) -> String {
        match locale {
            Locale::English => self.english(),
            Locale::Arabic => self.arabic(),
        }
    }

    fn english(&self) -> String {
        match self {
            Status::Opening { player } => {
                format!("Player {player} starts. Choose any cell.")
            }
            Status::AnyBoard { player } => format!(
                "Player {player}'s turn. The target board is closed, play in any open board."
            ),
            Status::MustPlay { player, board } => format!(
                "Player {player}'s turn. You must play in the {} board.",
                Locale::English.board_name(*board)
            ),
            Status::Won { player } => format!("Player {player} wins the game!"),
            Status::Drawn => "The game ended in a draw!".to_string(),
        }
    }

    fn arabic(&self) -> String {
        match self {
            Status::Opening { player } => {
                format!("تبدأ اللعبة باللاعب {player}. اختر أي خانة.")
            }
            Status::AnyBoard { player } => format!(
                "دور اللاعب {player}. الشبكة التالية مغلقة. العب في أي شبكة متاحة."
            ),
            Status::MustPlay { player, board } => format!(
                "دور اللاعب {player}. يجب أن تلعب في الشبكة {}.",
                Locale::Arabic.board_name(*board)
            ),
            Status::Won { player } => format!("اللاعب {player} فاز باللعبة!"),
            Status::Drawn => "انتهت اللعبة بالتعادل!".to_string(),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.english())
    }
}

/// Language for human-readable text.
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
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Locale {
    /// English, left-to-right board names.
    #[default]
    #[serde(alias = "en")]
    #[strum(to_string = "en", serialize = "english")]
    English,
    /// Arabic. Board names are mirrored for a right-to-left reading order,
    /// so meta-position 0 is called "top right".
    #[serde(alias = "ar")]
    #[strum(to_string = "ar", serialize = "arabic")]
    Arabic,
}

impl Locale {
    /// Human-readable name of a meta-board position.
    pub fn board_name(self, board: Position) -> &'static str {
        match self {
            Locale::English => board.label(),
            Locale::Arabic => match board {
                Position::TopLeft => "أعلى اليمين",
                Position::TopCenter => "أعلى الوسط",
                Position::TopRight => "أعلى اليسار",
                Position::MiddleLeft => "وسط اليمين",
                Position::Center => "الوسط",
                Position::MiddleRight => "وسط اليسار",
                Position::BottomLeft => "أسفل اليمين",
                Position::BottomCenter => "أسفل الوسط",
                Position::BottomRight => "أسفل اليسار",
            },
        }
    }

    /// Title shown above the game.
    pub fn title(self) -> &'static str {
        match self {
            Locale::English => "Ultimate Tic-Tac-Toe",
            Locale::Arabic => "لعبة إكس-أو الكبرى",
        }
    }

    /// Notice shown when the terminal cannot fit the board.
    pub fn too_small(self, width: u16, height: u16) -> String {
        match self {
            Locale::English => format!("Terminal too small: need {width}x{height}"),
            Locale::Arabic => format!("النافذة صغيرة جداً: المطلوب {width}x{height}"),
        }
    }

    /// Label of the reset control.
    pub fn reset_label(self) -> &'static str {
        match self {
            Locale::English => "Restart game",
            Locale::Arabic => "إعادة اللعبة",
        }
    }
}
