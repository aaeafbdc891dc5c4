//! UI module tests.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

use super::{
    app::App,
    handlers::{GameHandler, HistoryHandler, InputHandler},
    types::{Focus, LogBuffer},
};
use crate::{
    board::{Cell, Mark},
    state::GameState,
};

/// Helper function to create a test app on a fresh game.
fn create_test_app() -> App {
    App::new(GameState::new(), LogBuffer::new())
}

fn press(app: &mut App, code: KeyCode) -> bool {
    InputHandler::new(app).handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn play(app: &mut App, cells: &[usize]) {
    for &cell in cells {
        GameHandler::new(app).play(cell);
    }
}

/// Renders the app and returns the screen as one line per row.
fn render(app: &App) -> Vec<String> {
    let backend = TestBackend::new(100, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.draw(f)).unwrap();

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

#[cfg(test)]
mod app_tests {
    use super::*;

    #[test]
    fn test_app_initialization() {
        let app = create_test_app();

        assert_eq!(app.cursor, 4);
        assert_eq!(app.focus, Focus::Board);
        assert_eq!(app.selected_step, 0);
        assert_eq!(app.state(), &GameState::new());
    }

    #[test]
    fn test_log_buffer_max_capacity() {
        let logs = LogBuffer::new();

        for i in 0..350 {
            logs.push(format!("Message {}", i));
        }

        let lines = logs.lines();
        assert_eq!(lines.len(), super::super::types::MAX_LOG_LINES);
        assert!(lines.last().unwrap().ends_with("Message 349"));
    }

    #[test]
    fn test_observer_logs_state_changes() {
        let mut app = create_test_app();
        play(&mut app, &[4]);

        let lines = app.logs.lines();
        assert!(lines.iter().any(|l| l.ends_with("Step 1: Next player: O")));
    }
}

#[cfg(test)]
mod input_handler_tests {
    use super::*;

    #[test]
    fn test_quit_keys() {
        let mut app = create_test_app();
        assert!(press(&mut app, KeyCode::Char('q')));
        assert!(press(&mut app, KeyCode::Esc));
        assert!(!press(&mut app, KeyCode::Char('x')));
    }

    #[test]
    fn test_digit_plays_cell() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('9'));

        let board = app.state().current_board();
        assert_eq!(board.get(0), Cell::Marked(Mark::X));
        assert_eq!(board.get(8), Cell::Marked(Mark::O));
        assert_eq!(app.cursor, 8);
    }

    #[test]
    fn test_cursor_navigation_and_enter() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left); // clamped at column 0
        assert_eq!(app.cursor, 0);

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.cursor, 4);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state().current_board().get(4), Cell::Marked(Mark::X));
    }

    #[test]
    fn test_occupied_cell_keypress_is_noop() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('5'));
        let before = app.state().clone();

        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.state(), &before);
    }

    #[test]
    fn test_sort_and_reset_keys() {
        let mut app = create_test_app();
        play(&mut app, &[0, 1]);

        press(&mut app, KeyCode::Char('s'));
        assert!(!app.state().history_ascending());

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.state(), &GameState::new());
        assert_eq!(app.selected_step, 0);
    }

    #[test]
    fn test_tab_switches_focus() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Moves);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Board);
    }
}

#[cfg(test)]
mod history_handler_tests {
    use super::*;

    #[test]
    fn test_list_navigation_and_jump() {
        let mut app = create_test_app();
        play(&mut app, &[0, 1, 2]);
        assert_eq!(app.selected_step, 3);

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected_step, 1);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state().current_step(), 1);
        assert_eq!(app.state().next_mark(), Mark::O);
        assert_eq!(app.state().history().len(), 4);
    }

    #[test]
    fn test_navigation_follows_display_order() {
        let mut app = create_test_app();
        play(&mut app, &[0, 1, 2]);
        HistoryHandler::new(&mut app).toggle_sort();

        // Descending: rows are steps 3, 2, 1, 0. Down walks toward the start.
        assert_eq!(app.selected_step, 3);
        HistoryHandler::new(&mut app).select_next();
        assert_eq!(app.selected_step, 2);
        HistoryHandler::new(&mut app).select_previous();
        HistoryHandler::new(&mut app).select_previous();
        assert_eq!(app.selected_step, 3);
    }

    #[test]
    fn test_move_after_jump_branches() {
        let mut app = create_test_app();
        play(&mut app, &[0, 1, 2, 3, 4]);

        app.selected_step = 2;
        HistoryHandler::new(&mut app).jump_to_selected();
        play(&mut app, &[8]);

        assert_eq!(app.state().history().len(), 4);
        assert_eq!(app.selected_step, 3);
    }
}

#[cfg(test)]
mod rendering_tests {
    use super::*;

    #[test]
    fn test_render_initial_screen() {
        let app = create_test_app();
        let screen = render(&app).join("\n");

        assert!(screen.contains("Next player: X"));
        assert!(screen.contains("Go to game start"));
        assert!(screen.contains("Ascending"));
    }

    #[test]
    fn test_render_win_and_descending_list() {
        let mut app = create_test_app();
        play(&mut app, &[0, 1, 4, 2, 8]);
        HistoryHandler::new(&mut app).toggle_sort();

        let screen = render(&app);
        let text = screen.join("\n");
        assert!(text.contains("Winner: X"));
        assert!(text.contains("Descending"));

        let last_move = screen
            .iter()
            .position(|l| l.contains("Go to move #5 (3, 3)"))
            .unwrap();
        let start = screen
            .iter()
            .position(|l| l.contains("Go to game start"))
            .unwrap();
        assert!(last_move < start);
    }
}
