//! Move history list.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
};

use crate::{
    ui::{app::App, types::Focus},
    view::{ordered_moves, sort_label},
};

impl App {
    pub(in crate::ui) fn draw_moves(&self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = ordered_moves(self.state())
            .into_iter()
            .map(|entry| {
                let marker = if entry.selected { "▶ " } else { "  " };
                let mut style = if entry.selected {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                if self.focus == Focus::Moves && entry.step == self.selected_step {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                ListItem::new(format!("{}{}", marker, entry.description)).style(style)
            })
            .collect();

        let border_style = if self.focus == Focus::Moves {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };

        let title = format!("Moves | {} (s)", sort_label(self.state()));

        f.render_widget(
            List::new(items).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(title),
            ),
            area,
        );
    }
}
