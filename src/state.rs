//! Authoritative game state and the actions that transform it.

use std::fmt;

use serde::Serialize;

use crate::{
    board::{Board, CELL_COUNT, Mark},
    verdict::{Verdict, evaluate},
};

/// A board snapshot together with the move that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub board: Board,
    /// Cell played to reach this board; `None` only for the initial entry.
    pub last_move: Option<usize>,
}

/// User intents accepted by [`GameState::reduce`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    ApplyMove(usize),
    JumpTo(usize),
    ToggleSort,
    Reset,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::ApplyMove(cell) => write!(f, "move at cell {}", cell),
            Action::JumpTo(step) => write!(f, "jump to step {}", step),
            Action::ToggleSort => write!(f, "toggle sort order"),
            Action::Reset => write!(f, "reset"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    history: Vec<HistoryEntry>,
    current_step: usize,
    next_mark: Mark,
    history_ascending: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry {
                board: Board::new(),
                last_move: None,
            }],
            current_step: 0,
            next_mark: Mark::X,
            history_ascending: true,
        }
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn next_mark(&self) -> Mark {
        self.next_mark
    }

    pub fn history_ascending(&self) -> bool {
        self.history_ascending
    }

    pub fn current_board(&self) -> &Board {
        &self.history[self.current_step].board
    }

    pub fn verdict(&self) -> Verdict {
        evaluate(self.current_board())
    }

    /// Produces the successor state for `action`. Rejected actions return an
    /// unchanged clone.
    pub fn reduce(&self, action: Action) -> GameState {
        match action {
            Action::ApplyMove(cell) => self.apply_move(cell),
            Action::JumpTo(step) => self.jump_to(step),
            Action::ToggleSort => self.toggle_sort_order(),
            Action::Reset => self.reset(),
        }
    }

    pub fn apply_move(&self, cell: usize) -> GameState {
        let current = self.current_board();
        if cell >= CELL_COUNT || !current.get(cell).is_empty() || evaluate(current).winner.is_some()
        {
            return self.clone();
        }

        let board = current.with_mark(cell, self.next_mark);
        let mut history = self.history[..=self.current_step].to_vec();
        history.push(HistoryEntry {
            board,
            last_move: Some(cell),
        });

        GameState {
            current_step: history.len() - 1,
            history,
            next_mark: self.next_mark.opponent(),
            history_ascending: self.history_ascending,
        }
    }

    pub fn jump_to(&self, step: usize) -> GameState {
        debug_assert!(
            step < self.history.len(),
            "step {} outside history of length {}",
            step,
            self.history.len()
        );
        if step >= self.history.len() {
            return self.clone();
        }

        GameState {
            current_step: step,
            next_mark: Mark::for_step(step),
            ..self.clone()
        }
    }

    pub fn toggle_sort_order(&self) -> GameState {
        GameState {
            history_ascending: !self.history_ascending,
            ..self.clone()
        }
    }

    /// Back to a fresh game. The sort preference is reset as well.
    pub fn reset(&self) -> GameState {
        GameState::new()
    }
}
