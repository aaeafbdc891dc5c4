mod board;
mod logs;
mod moves;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw(&self, f: &mut Frame) {
        let main_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(f.area());

        let left_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Status + key help
                Constraint::Length(7), // 3x3 grid
                Constraint::Min(5),    // logs panel
            ])
            .split(main_layout[0]);

        self.draw_status(f, left_layout[0]);
        self.draw_board(f, left_layout[1]);
        self.draw_logs(f, left_layout[2]);
        self.draw_moves(f, main_layout[1]);
    }
}
