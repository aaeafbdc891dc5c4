use std::fmt;

use serde::Serialize;

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A player's symbol.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// The mark that moves at `step`: X on even steps, O on odd ones.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Mark::X } else { Mark::O }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Mark),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }
}

/// 1-based position of a cell, as shown to the player.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub row: usize,
    pub col: usize,
}

impl Location {
    pub fn from_index(index: usize) -> Self {
        Self {
            row: index / BOARD_SIZE + 1,
            col: index % BOARD_SIZE + 1,
        }
    }
}

impl fmt::Display for Location {
    // Column first, x/y style.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Row-major 3×3 grid of cells.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn get(&self, index: usize) -> Cell {
        self.cells[index]
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }

    /// Returns a copy of this board with `mark` placed at `index`.
    pub(crate) fn with_mark(&self, index: usize, mark: Mark) -> Self {
        let mut cells = self.cells;
        cells[index] = Cell::Marked(mark);
        Self { cells }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(BOARD_SIZE)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f, "---+---+---")?;
            }
            let symbols: Vec<String> = row
                .iter()
                .map(|c| match c.mark() {
                    Some(mark) => format!(" {} ", mark),
                    None => "   ".to_string(),
                })
                .collect();
            writeln!(f, "{}", symbols.join("|"))?;
        }
        Ok(())
    }
}
