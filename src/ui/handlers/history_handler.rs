//! Move list navigation, history jumps and sort order.

use crate::{state::Action, view::ordered_moves};

use super::super::app::App;

/// Helper struct for managing the move list.
pub struct HistoryHandler<'a> {
    app: &'a mut App,
}

impl<'a> HistoryHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Move the selection one row up in display order.
    pub fn select_previous(&mut self) {
        self.shift_selection(-1);
    }

    /// Move the selection one row down in display order.
    pub fn select_next(&mut self) {
        self.shift_selection(1);
    }

    fn shift_selection(&mut self, offset: isize) {
        let moves = ordered_moves(self.app.state());
        let Some(position) = moves.iter().position(|m| m.step == self.app.selected_step) else {
            self.app.selected_step = self.app.state().current_step();
            return;
        };

        let target = position.saturating_add_signed(offset).min(moves.len() - 1);
        self.app.selected_step = moves[target].step;
    }

    /// Jump to the selected history entry.
    pub fn jump_to_selected(&mut self) {
        let step = self.app.selected_step;
        if step >= self.app.state().history().len() {
            self.app.selected_step = self.app.state().current_step();
            return;
        }

        if self.app.dispatch(Action::JumpTo(step)) {
            self.app.log(format!("Jumped to step {}", step));
        }
    }

    pub fn toggle_sort(&mut self) {
        self.app.dispatch(Action::ToggleSort);
        let order = if self.app.state().history_ascending() {
            "ascending"
        } else {
            "descending"
        };
        self.app.log(format!("Move list {}", order));
    }
}
