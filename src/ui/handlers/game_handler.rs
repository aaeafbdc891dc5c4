//! Board cursor and move placement.

use crate::{
    board::{BOARD_SIZE, CELL_COUNT},
    state::Action,
};

use super::super::app::App;

/// Direction for board cursor movement.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Helper struct for board interactions.
pub struct GameHandler<'a> {
    app: &'a mut App,
}

impl<'a> GameHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        let cursor = self.app.cursor;
        self.app.cursor = match direction {
            Direction::Up if cursor >= BOARD_SIZE => cursor - BOARD_SIZE,
            Direction::Down if cursor + BOARD_SIZE < CELL_COUNT => cursor + BOARD_SIZE,
            Direction::Left if cursor % BOARD_SIZE > 0 => cursor - 1,
            Direction::Right if cursor % BOARD_SIZE < BOARD_SIZE - 1 => cursor + 1,
            _ => cursor,
        };
    }

    pub fn play_at_cursor(&mut self) {
        self.play(self.app.cursor);
    }

    /// Places the next mark at `cell`. Occupied cells and finished boards
    /// leave the game untouched.
    pub fn play(&mut self, cell: usize) {
        self.app.cursor = cell;
        let mark = self.app.state().next_mark();
        if self.app.dispatch(Action::ApplyMove(cell)) {
            tracing::info!(cell, %mark, "move played");
        } else {
            self.app.log(format!("Cell {} is not playable", cell + 1));
        }
    }

    pub fn reset(&mut self) {
        self.app.dispatch(Action::Reset);
        self.app.cursor = 4;
        self.app.log("Game reset");
    }
}
