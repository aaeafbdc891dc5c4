//! Non-interactive play: apply a fixed move list and report the result.

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::{info, warn};

use crate::{
    board::CELL_COUNT,
    state::{Action, GameState},
    store::Store,
    verdict::Verdict,
    view::{MoveEntry, ordered_moves, status_text},
};

#[derive(Serialize)]
struct Report<'a> {
    state: &'a GameState,
    verdict: Verdict,
    status: String,
    moves: Vec<MoveEntry>,
}

pub fn parse_moves(input: &str) -> Result<Vec<usize>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| -> Result<usize> {
            let cell: usize = s
                .parse()
                .with_context(|| format!("invalid cell index: {}", s))?;
            if cell >= CELL_COUNT {
                bail!("cell index out of range (0-8): {}", cell);
            }
            Ok(cell)
        })
        .collect()
}

/// Plays `moves` from a fresh game. Moves the rules reject are skipped.
pub fn play(moves: &[usize], descending: bool) -> GameState {
    let mut initial = GameState::new();
    if descending {
        initial = initial.toggle_sort_order();
    }

    let mut store = Store::new(initial);
    for &cell in moves {
        if !store.dispatch(Action::ApplyMove(cell)) {
            warn!(cell, "move ignored");
        }
    }

    info!(
        steps = store.state().current_step(),
        "headless game finished"
    );
    store.state().clone()
}

pub fn render_text(state: &GameState) -> String {
    let mut out = String::new();
    out.push_str(&state.current_board().to_string());
    out.push('\n');
    out.push_str(&status_text(state));
    out.push('\n');

    for entry in ordered_moves(state) {
        let marker = if entry.selected { ">" } else { " " };
        out.push_str(&format!("{} {}. {}\n", marker, entry.step, entry.description));
    }
    out
}

pub fn render_json(state: &GameState) -> Result<String> {
    let report = Report {
        state,
        verdict: state.verdict(),
        status: status_text(state),
        moves: ordered_moves(state),
    };
    serde_json::to_string_pretty(&report).context("Failed to serialize game state")
}
