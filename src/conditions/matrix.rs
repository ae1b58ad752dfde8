//! Matrix multiplication.

/// Row-major integer matrix.
pub type Matrix = Vec<Vec<i64>>;

/// Number of columns, or `None` when the rows disagree or the matrix is empty.
fn columns(m: &[Vec<i64>]) -> Option<usize> {
    let width = m.first()?.len();
    if width == 0 || m.iter().any(|row| row.len() != width) {
        return None;
    }
    Some(width)
}

/// Standard product `m1 × m2`.
///
/// Returns `None` when the column count of `m1` differs from the row count of
/// `m2`, when either input is empty or ragged, or when an entry overflows
/// `i64`.
pub fn get_matrix_product(m1: &[Vec<i64>], m2: &[Vec<i64>]) -> Option<Matrix> {
    let inner = columns(m1)?;
    let width = columns(m2)?;
    if inner != m2.len() {
        return None;
    }

    m1.iter()
        .map(|row| {
            (0..width)
                .map(|k| {
                    row.iter()
                        .zip(m2)
                        .try_fold(0i64, |acc, (&a, b_row)| acc.checked_add(a.checked_mul(b_row[k])?))
                })
                .collect::<Option<Vec<i64>>>()
        })
        .collect()
}
