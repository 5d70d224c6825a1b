//! Single-cell rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use ultimate_tictactoe::{Player, Square};

/// How one cell is drawn this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    /// Contents of the cell.
    pub square: Square,
    /// Whether a move here would be accepted.
    pub playable: bool,
    /// Whether the keyboard cursor sits here.
    pub selected: bool,
}

impl CellView {
    /// Symbol and style for this cell.
    pub fn appearance(self) -> (&'static str, Style) {
        let (symbol, base_style) = match self.square {
            Square::Occupied(Player::X) => (
                "X",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Square::Occupied(Player::O) => (
                "O",
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ),
            Square::Empty if self.playable => ("·", Style::default().fg(Color::Cyan)),
            Square::Empty => (" ", Style::default().fg(Color::DarkGray)),
        };

        let style = if self.selected {
            base_style.add_modifier(Modifier::REVERSED)
        } else {
            base_style
        };
        (symbol, style)
    }
}

/// Renders one cell centered in `area`.
pub fn render_cell(frame: &mut Frame, area: Rect, view: CellView) {
    let (symbol, style) = view.appearance();
    // Pad so the reverse-video cursor covers more than the glyph.
    let text = format!(" {symbol} ");
    let paragraph =
        Paragraph::new(Line::from(Span::styled(text, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_use_player_colors() {
        let x = CellView {
            square: Square::Occupied(Player::X),
            playable: false,
            selected: false,
        };
        let o = CellView {
            square: Square::Occupied(Player::O),
            ..x
        };
        assert_eq!(x.appearance().0, "X");
        assert_eq!(x.appearance().1.fg, Some(Color::Red));
        assert_eq!(o.appearance().0, "O");
        assert_eq!(o.appearance().1.fg, Some(Color::Blue));
    }

    #[test]
    fn test_playable_empty_cell_shows_dot() {
        let playable = CellView {
            square: Square::Empty,
            playable: true,
            selected: false,
        };
        let closed = CellView {
            playable: false,
            ..playable
        };
        assert_eq!(playable.appearance().0, "·");
        assert_eq!(closed.appearance().0, " ");
    }

    #[test]
    fn test_cursor_is_reverse_video() {
        let view = CellView {
            square: Square::Empty,
            playable: true,
            selected: true,
        };
        assert!(view.appearance().1.add_modifier.contains(Modifier::REVERSED));
    }
}
