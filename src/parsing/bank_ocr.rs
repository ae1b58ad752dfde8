//! Bank OCR: decoding account numbers drawn with pipes and underscores.
//!
//! Each digit is a 3×3 glyph spread over three text rows:
//!
//! ```text
//!     _  _     _  _  _  _  _
//!   | _| _||_||_ |_   ||_||_|
//!   ||_  _|  | _||_|  ||_| _|
//! ```

use crate::error::{KataError, Result};

/// Width and height of one glyph.
const GLYPH_SIZE: usize = 3;

/// Glyph rows for the digits 0 through 9, three characters per digit.
const DIGIT_ROWS: [&str; GLYPH_SIZE] = [
    " _     _  _     _  _  _  _  _ ",
    "| |  | _| _||_||_ |_   ||_||_|",
    "|_|  ||_  _|  | _||_|  ||_| _|",
];

type Glyph = [[char; GLYPH_SIZE]; GLYPH_SIZE];

fn glyph_at(rows: &[Vec<char>], position: usize) -> Glyph {
    let mut glyph = [[' '; GLYPH_SIZE]; GLYPH_SIZE];
    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in glyph[r].iter_mut().enumerate() {
            *cell = row.get(position * GLYPH_SIZE + c).copied().unwrap_or(' ');
        }
    }
    glyph
}

fn digit_glyphs() -> [Glyph; 10] {
    let rows: Vec<Vec<char>> = DIGIT_ROWS.iter().map(|r| r.chars().collect()).collect();
    std::array::from_fn(|digit| glyph_at(&rows, digit))
}

/// Decode a scanned account number.
///
/// The first three lines of `scan` are read; short lines are treated as
/// padded with spaces. Any glyph that is not a digit is an error.
pub fn parse_bank_account(scan: &str) -> Result<u64> {
    let rows: Vec<Vec<char>> = scan.lines().take(GLYPH_SIZE).map(|l| l.chars().collect()).collect();
    if rows.len() < GLYPH_SIZE {
        return Err(KataError::MalformedInput(format!(
            "OCR scan needs {} rows, got {}",
            GLYPH_SIZE,
            rows.len()
        )));
    }
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    let digits = width.div_ceil(GLYPH_SIZE);
    if digits == 0 {
        return Err(KataError::MalformedInput("OCR scan is empty".to_string()));
    }

    let known = digit_glyphs();
    let mut number: u64 = 0;
    for position in 0..digits {
        let glyph = glyph_at(&rows, position);
        let digit = known
            .iter()
            .position(|g| *g == glyph)
            .ok_or(KataError::UnknownGlyph { position })?;
        number = number
            .checked_mul(10)
            .and_then(|n| n.checked_add(digit as u64))
            .ok_or_else(|| KataError::MalformedInput("account number overflows u64".to_string()))?;
    }
    Ok(number)
}
