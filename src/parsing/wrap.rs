//! Word wrapping.

use std::iter::Peekable;
use std::str::Split;

/// Lazily wraps text at word boundaries; created by [`wrap_text`].
#[derive(Debug, Clone)]
pub struct WrapText<'a> {
    words: Peekable<Split<'a, char>>,
    columns: usize,
}

impl<'a> Iterator for WrapText<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let mut line = self.words.next()?.to_string();
        let mut width = line.chars().count();
        while let Some(word) = self.words.peek() {
            let word_width = word.chars().count();
            if width + 1 + word_width > self.columns {
                break;
            }
            line.push(' ');
            line.push_str(word);
            width += 1 + word_width;
            self.words.next();
        }
        Some(line)
    }
}

/// Break `text` into lines of at most `columns` characters.
///
/// Lines only break at spaces. A word wider than `columns` is placed on a line
/// of its own rather than split.
pub fn wrap_text(text: &str, columns: usize) -> WrapText<'_> {
    WrapText {
        words: text.split(' ').peekable(),
        columns,
    }
}
