use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::{ui::app::App, view::status_text};

const HELP_TEXT: &str = "Arrows move | Enter play | 1-9 cell | Tab list | s sort | r reset | q quit";

impl App {
    pub(in crate::ui) fn draw_status(&self, f: &mut Frame, area: Rect) {
        let verdict = self.state().verdict();

        let color = if verdict.winner.is_some() {
            Color::Green
        } else if verdict.is_draw {
            Color::Yellow
        } else {
            Color::White
        };

        let lines = vec![
            Line::styled(status_text(self.state()), Style::default().fg(color)),
            Line::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)),
        ];

        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Status")),
            area,
        );
    }
}
