use std::{fmt::Display, io::Stdout};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::{
    state::{Action, GameState},
    store::Store,
    view::status_text,
};

use super::{
    handlers::InputHandler,
    types::{Focus, LogBuffer},
};

/// Main application state container.
pub struct App {
    pub(in crate::ui) store: Store,
    /// Board cell under the cursor, row-major.
    pub(in crate::ui) cursor: usize,
    pub(in crate::ui) focus: Focus,
    /// History step highlighted in the move list.
    pub(in crate::ui) selected_step: usize,
    pub(in crate::ui) logs: LogBuffer,
}

impl App {
    pub fn new(initial: GameState, logs: LogBuffer) -> Self {
        let mut store = Store::new(initial);

        let observer_logs = logs.clone();
        store.subscribe(move |state| {
            observer_logs.push(format!("Step {}: {}", state.current_step(), status_text(state)));
        });

        let selected_step = store.state().current_step();
        Self {
            store,
            cursor: 4,
            focus: Focus::Board,
            selected_step,
            logs,
        }
    }

    pub fn state(&self) -> &GameState {
        self.store.state()
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        info!("UI started");
        self.log("New game");

        loop {
            terminal.draw(|f| self.draw(f))?;

            let event = event::read()?;
            if let Event::Key(key) = event {
                if key.kind == KeyEventKind::Press && InputHandler::new(self).handle_key(key) {
                    info!("UI exiting");
                    return Ok(());
                }
            }
        }
    }

    /// Sends `action` to the store and keeps the list selection on the
    /// current step when the position in history moves.
    pub(in crate::ui) fn dispatch(&mut self, action: Action) -> bool {
        let changed = self.store.dispatch(action);
        if changed && !matches!(action, Action::ToggleSort) {
            self.selected_step = self.store.state().current_step();
        }
        changed
    }

    pub(in crate::ui) fn log(&self, msg: impl Into<String> + Display) {
        tracing::info!("{}", &msg);
        self.logs.push(msg.into());
    }
}
