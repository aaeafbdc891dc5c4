//! Keyboard input dispatch.

use crossterm::event::{KeyCode, KeyEvent};

use super::super::{app::App, types::Focus};
use super::{GameHandler, HistoryHandler, game_handler::Direction};

/// Helper struct for routing key presses to the board or the move list.
pub struct InputHandler<'a> {
    app: &'a mut App,
}

impl<'a> InputHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Returns true when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => {
                self.app.log("Exit requested");
                return true;
            }

            KeyCode::Char('s' | 'S') => HistoryHandler::new(self.app).toggle_sort(),

            KeyCode::Char('r' | 'R') => GameHandler::new(self.app).reset(),

            KeyCode::Tab | KeyCode::BackTab => {
                self.app.focus = self.app.focus.toggle();
                if self.app.focus == Focus::Moves {
                    self.app.selected_step = self.app.state().current_step();
                }
            }

            KeyCode::Char(c @ '1'..='9') => {
                // 1 = top-left, row-major
                let cell = c as usize - '1' as usize;
                GameHandler::new(self.app).play(cell);
            }

            KeyCode::Enter | KeyCode::Char(' ') => match self.app.focus {
                Focus::Board => GameHandler::new(self.app).play_at_cursor(),
                Focus::Moves => HistoryHandler::new(self.app).jump_to_selected(),
            },

            code => {
                if let Some(direction) = direction_for(code) {
                    self.navigate(direction);
                }
            }
        }
        false
    }

    fn navigate(&mut self, direction: Direction) {
        match (self.app.focus, direction) {
            (Focus::Board, _) => GameHandler::new(self.app).move_cursor(direction),
            (Focus::Moves, Direction::Up) => HistoryHandler::new(self.app).select_previous(),
            (Focus::Moves, Direction::Down) => HistoryHandler::new(self.app).select_next(),
            (Focus::Moves, _) => {}
        }
    }
}

fn direction_for(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => Some(Direction::Right),
        _ => None,
    }
}
