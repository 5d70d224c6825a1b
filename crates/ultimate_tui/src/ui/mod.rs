//! Stateless UI rendering for ultimate tic-tac-toe.

mod board;
mod cell;

pub use board::{BoardLayout, META_HEIGHT, META_WIDTH};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

/// Screen regions of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Areas {
    /// Title bar.
    pub title: Rect,
    /// Meta-board region.
    pub board: Rect,
    /// Status line.
    pub status: Rect,
    /// Key help.
    pub help: Rect,
}

/// Splits the terminal area into title, board, status and help regions.
pub fn areas(area: Rect) -> Areas {
    let [title, board, status, help] = Layout::vertical([
        Constraint::Length(3),        // Title
        Constraint::Min(META_HEIGHT), // Board
        Constraint::Length(3),        // Status
        Constraint::Length(1),        // Help
    ])
    .areas(area);
    Areas {
        title,
        board,
        status,
        help,
    }
}

/// Meta-board layout for a terminal of the given area.
pub fn board_layout(area: Rect) -> Option<BoardLayout> {
    BoardLayout::new(areas(area).board)
}

/// Renders the whole application.
pub fn draw(frame: &mut Frame, app: &App) {
    let areas = areas(frame.area());
    let locale = app.locale();

    // Title
    let title = Paragraph::new(locale.title())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, areas.title);

    // Board
    match BoardLayout::new(areas.board) {
        Some(layout) => board::render_meta_board(frame, &layout, app.engine(), app.cursor()),
        None => {
            let notice = Paragraph::new(locale.too_small(META_WIDTH, META_HEIGHT))
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center);
            frame.render_widget(notice, areas.board);
        }
    }

    // Status
    let status = Paragraph::new(app.status_text())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, areas.status);

    // Help
    let help = Paragraph::new(format!(
        "Arrows: move | Enter/Space/click: play | 1-9: cell in active board | r: {} | q: quit",
        locale.reset_label()
    ))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, areas.help);
}
