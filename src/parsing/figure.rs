//! Splitting an ASCII box figure into its rectangles.
//!
//! Figures are drawn with `+` corners, `-` horizontal edges and `|` vertical
//! edges. Every `+` is tried as a top-left corner; the smallest rectangle
//! hanging from it is redrawn on its own.

/// Lazily yields the rectangles of a figure; created by [`get_figure_rectangles`].
#[derive(Debug, Clone)]
pub struct FigureRectangles {
    grid: Vec<Vec<char>>,
    row: usize,
    col: usize,
}

impl FigureRectangles {
    fn at(&self, row: usize, col: usize) -> char {
        self.grid
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(' ')
    }

    /// Width and height of the smallest rectangle whose top-left corner is
    /// the `+` at (`top`, `left`).
    fn rectangle_from(&self, top: usize, left: usize) -> Option<(usize, usize)> {
        for bottom in (top + 1)..self.grid.len() {
            match self.at(bottom, left) {
                '+' => {}
                '|' => continue,
                _ => return None,
            }
            let row_len = self.grid[top].len();
            for right in (left + 1)..row_len {
                match self.at(bottom, right) {
                    '+' => {
                        if self.at(top, right) == '+' && self.closes(top, bottom, left, right) {
                            return Some((right - left + 1, bottom - top + 1));
                        }
                    }
                    '-' => {}
                    _ => break,
                }
            }
        }
        None
    }

    /// True when the top edge and the right edge between the corners are drawn.
    fn closes(&self, top: usize, bottom: usize, left: usize, right: usize) -> bool {
        let top_edge = ((left + 1)..right).all(|c| matches!(self.at(top, c), '-' | '+'));
        let right_edge = ((top + 1)..bottom).all(|r| self.at(r, right) == '|');
        top_edge && right_edge
    }
}

impl Iterator for FigureRectangles {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while self.row < self.grid.len() {
            while self.col < self.grid[self.row].len() {
                let (row, col) = (self.row, self.col);
                self.col += 1;
                if self.grid[row][col] != '+' {
                    continue;
                }
                if let Some((width, height)) = self.rectangle_from(row, col) {
                    return Some(draw_rectangle(width, height));
                }
            }
            self.row += 1;
            self.col = 0;
        }
        None
    }
}

/// Draw an empty rectangle of the given outer size, each row ending in `\n`.
pub fn draw_rectangle(width: usize, height: usize) -> String {
    let inner = width.saturating_sub(2);
    let edge = format!("+{}+\n", "-".repeat(inner));
    let side = format!("|{}|\n", " ".repeat(inner));
    let mut out = edge.clone();
    out.push_str(&side.repeat(height.saturating_sub(2)));
    out.push_str(&edge);
    out
}

/// Every minimal rectangle of `figure`, in scan order of its top-left corner.
pub fn get_figure_rectangles(figure: &str) -> FigureRectangles {
    FigureRectangles {
        grid: figure.split('\n').map(|line| line.chars().collect()).collect(),
        row: 0,
        col: 0,
    }
}
