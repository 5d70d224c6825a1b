//! Application state and input dispatch.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::{debug, info, instrument};
use ultimate_tictactoe::{ActiveBoard, GameEngine, Locale, MoveOutcome, Position, WinRule};

use crate::input::{Cursor, move_cursor};
use crate::ui;

/// What the event loop should do after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state. Owns the one engine for the session.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    cursor: Cursor,
    locale: Locale,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(win_rule: WinRule, locale: Locale) -> Self {
        Self {
            engine: GameEngine::with_rule(win_rule),
            cursor: Cursor::default(),
            locale,
        }
    }

    /// Gets the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Gets the display language.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Status line in the display language.
    pub fn status_text(&self) -> String {
        self.engine.current_status().localized(self.locale)
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if key.kind == KeyEventKind::Release {
            return AppAction::Continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => self.restart(),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key.code);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.play(self.cursor.board, self.cursor.cell);
            }
            KeyCode::Char(c @ '1'..='9') => self.play_digit(c),
            _ => {}
        }
        AppAction::Continue
    }

    /// Handles a mouse event against a terminal of size `area`.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let Some(layout) = ui::board_layout(area) else {
            return;
        };
        if let Some((board, cell)) = layout.hit(mouse.column, mouse.row) {
            debug!(%board, %cell, "Click on cell");
            self.cursor = Cursor { board, cell };
            self.play(board, cell);
        }
    }

    /// Attempts a move. Illegal moves are absorbed without changing state.
    pub fn play(&mut self, board: Position, cell: Position) -> Option<MoveOutcome> {
        match self.engine.apply_move(board, cell) {
            Ok(outcome) => {
                info!(%board, %cell, ?outcome, "Move played");
                if let MoveOutcome::Continue {
                    active: ActiveBoard::Board(next),
                    ..
                } = outcome
                {
                    self.cursor = Cursor::centered_in(next);
                }
                Some(outcome)
            }
            Err(e) => {
                debug!(%board, %cell, error = %e, "Move ignored");
                None
            }
        }
    }

    /// Plays cell `digit` (1-9) in the active board, or in the cursor's
    /// board when any board is open.
    fn play_digit(&mut self, digit: char) {
        let Some(cell) = digit
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
        else {
            return;
        };
        let board = match self.engine.state().active_board() {
            ActiveBoard::Board(board) => board,
            ActiveBoard::Any => self.cursor.board,
        };
        self.cursor = Cursor { board, cell };
        self.play(board, cell);
    }

    /// Restarts the game, keeping rule and locale.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.engine.reset();
        self.cursor = Cursor::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ultimate_tictactoe::{GameState, Player, Square};
    use Position::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(WinRule::FirstLocalWin, Locale::English)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_enter_plays_cursor_cell() {
        let mut app = app();
        assert_eq!(app.handle_key(press(KeyCode::Enter)), AppAction::Continue);
        assert_eq!(
            app.engine().state().boards().square(Center, Center),
            Square::Occupied(Player::X)
        );
        // Cursor follows the constraint to the sent-to board.
        assert_eq!(app.cursor(), Cursor::centered_in(Center));
    }

    #[test]
    fn test_digit_plays_in_active_board() {
        let mut app = app();
        app.play(Center, TopLeft);
        app.handle_key(press(KeyCode::Char('9')));
        assert_eq!(
            app.engine().state().boards().square(TopLeft, BottomRight),
            Square::Occupied(Player::O)
        );
    }

    #[test]
    fn test_illegal_move_is_absorbed() {
        let mut app = app();
        app.play(Center, TopLeft);
        let before = app.engine().state().clone();
        assert_eq!(app.play(BottomRight, BottomRight), None);
        assert_eq!(app.engine().state(), &before);
    }

    #[test]
    fn test_key_release_ignored() {
        let mut app = app();
        let mut release = press(KeyCode::Enter);
        release.kind = KeyEventKind::Release;
        app.handle_key(release);
        assert_eq!(app.engine().state(), &GameState::new());
    }

    #[test]
    fn test_quit_and_restart() {
        let mut app = app();
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.handle_key(press(KeyCode::Char('r'))), AppAction::Continue);
        assert_eq!(app.engine().state(), &GameState::new());
        assert_eq!(app.engine().win_rule(), WinRule::FirstLocalWin);
        assert_eq!(app.handle_key(press(KeyCode::Char('q'))), AppAction::Quit);
        assert_eq!(app.handle_key(press(KeyCode::Esc)), AppAction::Quit);
    }

    #[test]
    fn test_click_plays_hit_cell() {
        let mut app = app();
        let area = Rect::new(0, 0, 80, 24);
        let layout = ui::board_layout(area).unwrap();
        let rect = layout.cell(TopRight, BottomLeft);

        app.handle_mouse(click(rect.x + 2, rect.y), area);
        assert_eq!(
            app.engine().state().boards().square(TopRight, BottomLeft),
            Square::Occupied(Player::X)
        );
    }

    #[test]
    fn test_click_outside_board_does_nothing() {
        let mut app = app();
        app.handle_mouse(click(0, 0), Rect::new(0, 0, 80, 24));
        assert_eq!(app.engine().state(), &GameState::new());
    }
}
