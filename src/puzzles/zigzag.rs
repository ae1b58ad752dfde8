//! JPEG zig-zag ordering.

/// Square matrix whose cells hold their position in the zig-zag scan.
///
/// Values `0..n²` run along the anti-diagonals, alternating direction: even
/// diagonals are walked bottom-left to top-right, odd ones the other way.
pub fn get_zig_zag_matrix(n: usize) -> Vec<Vec<usize>> {
    let mut grid = vec![vec![0; n]; n];
    if n == 0 {
        return grid;
    }
    let mut value = 0;
    for diagonal in 0..(2 * n - 1) {
        let first_row = diagonal.saturating_sub(n - 1);
        let last_row = diagonal.min(n - 1);
        let rows: Box<dyn Iterator<Item = usize>> = if diagonal % 2 == 0 {
            Box::new((first_row..=last_row).rev())
        } else {
            Box::new(first_row..=last_row)
        };
        for row in rows {
            grid[row][diagonal - row] = value;
            value += 1;
        }
    }
    grid
}
