//! Pure projections of [`GameState`] used by the presentation layer.

use serde::Serialize;

use crate::{board::Location, state::GameState};

/// One row of the move list. `step` is the history index the entry jumps to,
/// independent of where the row is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveEntry {
    pub step: usize,
    pub description: String,
    pub selected: bool,
}

pub fn status_text(state: &GameState) -> String {
    let verdict = state.verdict();
    if let Some(winner) = verdict.winner {
        format!("Winner: {}", winner)
    } else if verdict.is_draw {
        "Draw".to_string()
    } else {
        format!("Next player: {}", state.next_mark())
    }
}

pub fn move_description(state: &GameState, step: usize) -> String {
    match state.history()[step].last_move {
        Some(cell) if step > 0 => {
            format!("Go to move #{} {}", step, Location::from_index(cell))
        }
        _ => "Go to game start".to_string(),
    }
}

pub fn move_descriptions(state: &GameState) -> Vec<String> {
    (0..state.history().len())
        .map(|step| move_description(state, step))
        .collect()
}

/// Move list in display order: chronological when ascending, reversed otherwise.
pub fn ordered_moves(state: &GameState) -> Vec<MoveEntry> {
    let mut moves: Vec<MoveEntry> = move_descriptions(state)
        .into_iter()
        .enumerate()
        .map(|(step, description)| MoveEntry {
            step,
            description,
            selected: step == state.current_step(),
        })
        .collect();

    if !state.history_ascending() {
        moves.reverse();
    }
    moves
}

pub fn sort_label(state: &GameState) -> &'static str {
    if state.history_ascending() {
        "Ascending"
    } else {
        "Descending"
    }
}
