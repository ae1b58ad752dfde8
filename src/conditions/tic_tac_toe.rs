//! Tic-tac-toe position evaluation.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{KataError, Result};

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Parse a cell character. `0` is accepted as a nought.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' | '0' => Some(Mark::O),
            _ => None,
        }
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

/// A 3×3 board; `None` is an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position(pub [[Option<Mark>; 3]; 3]);

impl Position {
    /// Parse three rows of three cells, e.g. `["X.O", " XO", "  X"]`.
    ///
    /// A space or `.` is an empty cell.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        if rows.len() != 3 {
            return Err(KataError::MalformedInput(format!(
                "tic-tac-toe needs 3 rows, got {}",
                rows.len()
            )));
        }
        let mut cells = [[None; 3]; 3];
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let chars: Vec<char> = row.chars().collect();
            if chars.len() != 3 {
                return Err(KataError::MalformedInput(format!("row {:?} is not 3 cells wide", row)));
            }
            for (c, &ch) in chars.iter().enumerate() {
                cells[r][c] = match ch {
                    ' ' | '.' => None,
                    other => Some(Mark::from_char(other).ok_or_else(|| {
                        KataError::MalformedInput(format!("unknown cell {:?}", other))
                    })?),
                };
            }
        }
        Ok(Self(cells))
    }

    fn line(&self, cells: [(usize, usize); 3]) -> Option<Mark> {
        let [a, b, c] = cells.map(|(r, c)| self.0[r][c]);
        match a {
            Some(mark) if b == a && c == a => Some(mark),
            _ => None,
        }
    }
}

/// The mark filling a whole row, column or diagonal, if any.
pub fn evaluate_tic_tac_toe_position(position: &Position) -> Option<Mark> {
    let diagonals = [[(0, 0), (1, 1), (2, 2)], [(2, 0), (1, 1), (0, 2)]];
    let rows = (0..3).map(|i| [(i, 0), (i, 1), (i, 2)]);
    let cols = (0..3).map(|i| [(0, i), (1, i), (2, i)]);

    diagonals
        .into_iter()
        .chain(rows)
        .chain(cols)
        .find_map(|line| position.line(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn winner(rows: [&str; 3]) -> Option<Mark> {
        evaluate_tic_tac_toe_position(&Position::parse(&rows).unwrap())
    }

    #[test]
    fn test_diagonal_win() {
        assert_eq!(winner(["X 0", " X0", "  X"]), Some(Mark::X));
        assert_eq!(winner(["X O", " O ", "OX "]), Some(Mark::O));
    }

    #[test]
    fn test_row_and_column_wins() {
        assert_eq!(winner(["000", " X ", "X X"]), Some(Mark::O));
        assert_eq!(winner(["X0 ", "X0 ", "X  "]), Some(Mark::X));
        assert_eq!(winner([".O.", "XOX", "XO."]), Some(Mark::O));
    }

    #[test]
    fn test_no_winner() {
        assert_eq!(winner(["0X0", " X ", "X0X"]), None);
        assert_eq!(winner(["   ", "   ", "   "]), None);
    }

    #[test]
    fn test_parse_rejects_bad_boards() {
        assert!(Position::parse(&["XXX", "OOO"]).is_err());
        assert!(Position::parse(&["XX", "OOO", "   "]).is_err());
        assert!(Position::parse(&["XXZ", "OOO", "   "]).is_err());
    }
}
