//! Word search where the word snakes through the grid.

/// Letter grid with visited marks for one search.
struct Puzzle<'a> {
    rows: Vec<Vec<char>>,
    word: &'a [char],
    visited: Vec<Vec<bool>>,
}

impl Puzzle<'_> {
    /// Depth-first search for `word[index..]` starting at (`row`, `col`).
    fn trace(&mut self, row: usize, col: usize, index: usize) -> bool {
        if self.visited[row][col] || self.rows[row][col] != self.word[index] {
            return false;
        }
        if index + 1 == self.word.len() {
            return true;
        }

        self.visited[row][col] = true;
        let found = self
            .neighbours(row, col)
            .into_iter()
            .flatten()
            .any(|(r, c)| self.trace(r, c, index + 1));
        self.visited[row][col] = false;
        found
    }

    /// Up, right, down and left neighbours that exist in the grid.
    fn neighbours(&self, row: usize, col: usize) -> [Option<(usize, usize)>; 4] {
        let exists = |r: usize, c: usize| self.rows.get(r).is_some_and(|cells| c < cells.len());
        [
            row.checked_sub(1).filter(|&r| exists(r, col)).map(|r| (r, col)),
            Some((row, col + 1)).filter(|&(r, c)| exists(r, c)),
            Some((row + 1, col)).filter(|&(r, c)| exists(r, c)),
            col.checked_sub(1).map(|c| (row, c)),
        ]
    }
}

/// True when `word` can be traced through `grid` moving up, down, left or
/// right between neighbouring cells, never visiting a cell twice.
///
/// Rows may differ in length. An empty word is never found.
pub fn find_string_in_snaking_puzzle<S: AsRef<str>>(grid: &[S], word: &str) -> bool {
    let word: Vec<char> = word.chars().collect();
    if word.is_empty() {
        return false;
    }
    let rows: Vec<Vec<char>> = grid.iter().map(|r| r.as_ref().chars().collect()).collect();
    let visited = rows.iter().map(|r| vec![false; r.len()]).collect();
    let mut puzzle = Puzzle { rows, word: &word, visited };

    for row in 0..puzzle.rows.len() {
        for col in 0..puzzle.rows[row].len() {
            if puzzle.trace(row, col, 0) {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: [&str; 5] = ["ANGULAR", "REDNCAE", "RFIDTCL", "AGNEGSA", "YTIRTSP"];

    #[test]
    fn test_words_present() {
        for word in ["ANGULAR", "REACT", "UNDEFINED", "RED", "STRING", "CLASS", "ARRAY"] {
            assert!(find_string_in_snaking_puzzle(&PUZZLE, word), "{} should be found", word);
        }
    }

    #[test]
    fn test_words_absent() {
        for word in ["FUNCTION", "NULL", ""] {
            assert!(!find_string_in_snaking_puzzle(&PUZZLE, word), "{} should not be found", word);
        }
    }

    #[test]
    fn test_cells_not_reused() {
        // "ABA" would need the single A twice.
        assert!(!find_string_in_snaking_puzzle(&["AB"], "ABA"));
        assert!(find_string_in_snaking_puzzle(&["ABA"], "ABA"));
        assert!(!find_string_in_snaking_puzzle(&["AB", "CD"], "ABDCA"));
        assert!(find_string_in_snaking_puzzle(&["AB", "CD"], "ABDC"));
    }

    #[test]
    fn test_no_diagonal_moves() {
        assert!(!find_string_in_snaking_puzzle(&["AX", "XB"], "AB"));
    }

    #[test]
    fn test_ragged_rows() {
        assert!(find_string_in_snaking_puzzle(&["ABC", "D"], "CBAD"));
        assert!(!find_string_in_snaking_puzzle(&["ABC", "D"], "CD"));
    }
}
