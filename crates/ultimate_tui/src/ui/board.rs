//! Meta-board rendering and layout.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Block,
};
use ultimate_tictactoe::{GameEngine, LocalStatus, Player, Position};

use super::cell::{CellView, render_cell};
use crate::input::Cursor;

/// Columns per cell.
pub const CELL_WIDTH: u16 = 5;
/// Width of one bordered local board.
pub const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Height of one bordered local board.
pub const BOARD_HEIGHT: u16 = 3 + 2;
/// Columns between neighbouring local boards.
const BOARD_GAP: u16 = 1;
/// Width of the full meta-board.
pub const META_WIDTH: u16 = BOARD_WIDTH * 3 + BOARD_GAP * 2;
/// Height of the full meta-board.
pub const META_HEIGHT: u16 = BOARD_HEIGHT * 3;

/// Screen geometry of the meta-board, shared by drawing and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    boards: [Rect; 9],
}

impl BoardLayout {
    /// Centers the meta-board in `area`. `None` when it does not fit.
    pub fn new(area: Rect) -> Option<Self> {
        if area.width < META_WIDTH || area.height < META_HEIGHT {
            return None;
        }
        let meta = center_rect(area, META_WIDTH, META_HEIGHT);

        let boards = Position::ALL.map(|pos| {
            Rect::new(
                meta.x + pos.col() as u16 * (BOARD_WIDTH + BOARD_GAP),
                meta.y + pos.row() as u16 * BOARD_HEIGHT,
                BOARD_WIDTH,
                BOARD_HEIGHT,
            )
        });
        Some(Self { boards })
    }

    /// Outer rectangle (including border) of a local board.
    pub fn board(&self, board: Position) -> Rect {
        self.boards[board.to_index()]
    }

    /// Rectangle of one cell.
    pub fn cell(&self, board: Position, cell: Position) -> Rect {
        let outer = self.board(board);
        Rect::new(
            outer.x + 1 + cell.col() as u16 * CELL_WIDTH,
            outer.y + 1 + cell.row() as u16,
            CELL_WIDTH,
            1,
        )
    }

    /// Cell under a terminal coordinate, if any. Borders and gaps miss.
    pub fn hit(&self, column: u16, row: u16) -> Option<(Position, Position)> {
        let point = ratatui::layout::Position::new(column, row);
        Position::ALL.into_iter().find_map(|board| {
            Position::ALL
                .into_iter()
                .find(|cell| self.cell(board, *cell).contains(point))
                .map(|cell| (board, cell))
        })
    }
}

/// Renders all nine local boards.
pub fn render_meta_board(
    frame: &mut Frame,
    layout: &BoardLayout,
    engine: &GameEngine,
    cursor: Cursor,
) {
    for board in Position::ALL {
        render_local_board(frame, layout, engine, cursor, board);
    }
}

fn render_local_board(
    frame: &mut Frame,
    layout: &BoardLayout,
    engine: &GameEngine,
    cursor: Cursor,
    board: Position,
) {
    let local = engine.state().boards().board(board);

    let border_style = if engine.is_board_active(board) {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut block = Block::bordered().border_style(border_style);
    match local.status() {
        LocalStatus::Won(player) => {
            let title = Span::styled(format!(" {player} "), player_style(player));
            block = block.title(Line::from(title).centered());
        }
        LocalStatus::Drawn => {
            block = block.title(Line::from(" = ").centered());
        }
        LocalStatus::InProgress => {}
    }
    frame.render_widget(block, layout.board(board));

    for cell in Position::ALL {
        let view = CellView {
            square: local.get(cell),
            playable: engine.is_cell_playable(board, cell),
            selected: cursor.board == board && cursor.cell == cell,
        };
        render_cell(frame, layout.cell(board, cell), view);
    }
}

fn player_style(player: Player) -> Style {
    let color = match player {
        Player::X => Color::Red,
        Player::O => Color::Blue,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width.min(area.width),
        height.min(area.height),
    )
}
