//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use ultimate_tictactoe::Position;

/// Grid side length across the whole meta-board.
const GRID: usize = 9;

/// Keyboard cursor: one cell on the 9×9 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Board under the cursor.
    pub board: Position,
    /// Cell within that board.
    pub cell: Position,
}

impl Default for Cursor {
    fn default() -> Self {
        Self::centered_in(Position::Center)
    }
}

impl Cursor {
    /// Cursor on the center cell of `board`.
    pub fn centered_in(board: Position) -> Self {
        Self {
            board,
            cell: Position::Center,
        }
    }

    /// Global (row, column) on the 9×9 grid.
    pub fn grid(self) -> (usize, usize) {
        (
            self.board.row() * 3 + self.cell.row(),
            self.board.col() * 3 + self.cell.col(),
        )
    }

    /// Cursor at a global (row, column), if on the grid.
    pub fn from_grid(row: usize, col: usize) -> Option<Self> {
        Some(Self {
            board: Position::from_row_col(row / 3, col / 3)?,
            cell: Position::from_row_col(row % 3, col % 3)?,
        })
    }
}

/// Moves cursor based on arrow keys, crossing board boundaries.
pub fn move_cursor(cursor: Cursor, key: KeyCode) -> Cursor {
    let (row, col) = cursor.grid();

    let target = match key {
        KeyCode::Right if col + 1 < GRID => (row, col + 1),
        KeyCode::Left if col > 0 => (row, col - 1),
        KeyCode::Down if row + 1 < GRID => (row + 1, col),
        KeyCode::Up if row > 0 => (row - 1, col),
        // No change for other keys or edge cases
        _ => return cursor,
    };

    Cursor::from_grid(target.0, target.1).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Position::*;

    #[test]
    fn test_right_crosses_into_next_board() {
        let cursor = Cursor {
            board: TopLeft,
            cell: TopRight,
        };
        assert_eq!(
            move_cursor(cursor, KeyCode::Right),
            Cursor {
                board: TopCenter,
                cell: TopLeft,
            }
        );
    }

    #[test]
    fn test_down_crosses_into_board_below() {
        let cursor = Cursor {
            board: Center,
            cell: BottomCenter,
        };
        assert_eq!(
            move_cursor(cursor, KeyCode::Down),
            Cursor {
                board: BottomCenter,
                cell: TopCenter,
            }
        );
    }

    #[test]
    fn test_edges_do_not_wrap() {
        let corner = Cursor {
            board: TopLeft,
            cell: TopLeft,
        };
        assert_eq!(move_cursor(corner, KeyCode::Up), corner);
        assert_eq!(move_cursor(corner, KeyCode::Left), corner);

        let far = Cursor {
            board: BottomRight,
            cell: BottomRight,
        };
        assert_eq!(move_cursor(far, KeyCode::Down), far);
        assert_eq!(move_cursor(far, KeyCode::Right), far);
    }

    #[test]
    fn test_grid_round_trip_covers_all_cells() {
        for row in 0..GRID {
            for col in 0..GRID {
                let cursor = Cursor::from_grid(row, col).unwrap();
                assert_eq!(cursor.grid(), (row, col));
            }
        }
        assert!(Cursor::from_grid(9, 0).is_none());
    }

    #[test]
    fn test_other_keys_ignored() {
        let cursor = Cursor::default();
        assert_eq!(move_cursor(cursor, KeyCode::Char('x')), cursor);
    }
}
