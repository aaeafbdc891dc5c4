//! Board rendering with cursor and winning-line highlight.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    board::BOARD_SIZE,
    ui::{app::App, types::Focus},
};

impl App {
    pub(in crate::ui) fn draw_board(&self, f: &mut Frame, area: Rect) {
        let board = self.state().current_board();
        let verdict = self.state().verdict();

        let mut lines: Vec<Line> = Vec::new();
        for (r, row) in board.rows().enumerate() {
            if r > 0 {
                lines.push(Line::from("───┼───┼───"));
            }

            let mut spans: Vec<Span> = Vec::new();
            for (c, cell) in row.iter().enumerate() {
                let index = r * BOARD_SIZE + c;
                if c > 0 {
                    spans.push(Span::raw("│"));
                }

                let mut style = if verdict.highlights(index) {
                    Style::default().bg(Color::Green).fg(Color::Black)
                } else {
                    Style::default()
                };
                if self.focus == Focus::Board && index == self.cursor {
                    style = style.add_modifier(Modifier::REVERSED);
                }

                let symbol = match cell.mark() {
                    Some(mark) => mark.to_string(),
                    None => " ".to_string(),
                };
                spans.push(Span::styled(format!(" {} ", symbol), style));
            }
            lines.push(Line::from(spans));
        }

        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Board")),
            area,
        );
    }
}
