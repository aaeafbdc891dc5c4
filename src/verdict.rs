//! Win and draw detection.

use serde::Serialize;

use crate::board::{Board, Mark};

/// Winning triples, checked in order. The first full one is reported.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Outcome classification of a board snapshot.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Verdict {
    pub winner: Option<Mark>,
    pub winning_line: Option<[usize; 3]>,
    pub is_draw: bool,
}

impl Verdict {
    pub fn is_ongoing(&self) -> bool {
        self.winner.is_none() && !self.is_draw
    }

    pub fn is_finished(&self) -> bool {
        !self.is_ongoing()
    }

    pub fn highlights(&self, index: usize) -> bool {
        self.winning_line.is_some_and(|line| line.contains(&index))
    }
}

pub fn evaluate(board: &Board) -> Verdict {
    for line in WINNING_LINES {
        let [a, b, c] = line;
        let first = board.get(a);
        if first != board.get(b) || first != board.get(c) {
            continue;
        }
        if let Some(mark) = first.mark() {
            return Verdict {
                winner: Some(mark),
                winning_line: Some(line),
                is_draw: false,
            };
        }
    }

    Verdict {
        winner: None,
        winning_line: None,
        is_draw: board.is_full(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    fn board_from(pattern: &str) -> Board {
        let cells: Vec<Cell> = pattern
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                'X' => Cell::Marked(Mark::X),
                'O' => Cell::Marked(Mark::O),
                '.' => Cell::Empty,
                _ => panic!("Invalid cell"),
            })
            .collect();
        Board::from_cells(cells.try_into().unwrap())
    }

    #[test]
    fn test_empty_board_is_ongoing() {
        let verdict = evaluate(&Board::new());
        assert!(verdict.is_ongoing());
        assert_eq!(verdict.winning_line, None);
    }

    #[test]
    fn test_row_winner() {
        let verdict = evaluate(&board_from("... OOO X.X"));
        assert_eq!(verdict.winner, Some(Mark::O));
        assert_eq!(verdict.winning_line, Some([3, 4, 5]));
        assert!(!verdict.is_draw);
    }

    #[test]
    fn test_column_and_diagonal_winners() {
        let column = evaluate(&board_from("OX. .X. OX."));
        assert_eq!(column.winning_line, Some([1, 4, 7]));

        let anti_diagonal = evaluate(&board_from("OOX .X. X.."));
        assert_eq!(anti_diagonal.winner, Some(Mark::X));
        assert_eq!(anti_diagonal.winning_line, Some([2, 4, 6]));
    }

    #[test]
    fn test_first_line_in_order_wins_tie() {
        // Contrived board with two complete X lines: top row is listed first.
        let verdict = evaluate(&board_from("XXX X.. X.."));
        assert_eq!(verdict.winning_line, Some([0, 1, 2]));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let verdict = evaluate(&board_from("XOX XOO OXX"));
        assert!(verdict.is_draw);
        assert_eq!(verdict.winner, None);
        assert!(verdict.is_finished());
    }

    #[test]
    fn test_win_on_full_board_is_not_draw() {
        let verdict = evaluate(&board_from("XOX OXO OXX"));
        assert_eq!(verdict.winner, Some(Mark::X));
        assert!(!verdict.is_draw);
    }

    #[test]
    fn test_highlights_only_winning_cells() {
        let verdict = evaluate(&board_from("X.. .X. ..X"));
        assert!(verdict.highlights(4));
        assert!(!verdict.highlights(1));
        assert!(!Verdict::default().highlights(0));
    }
}
