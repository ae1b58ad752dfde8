//! String katas: reversal, bracket matching, intervals and path prefixes.

use rustc_hash::FxHashMap;
use std::fmt::Display;

/// First character that occurs exactly once in `s`.
pub fn find_first_single_char(s: &str) -> Option<char> {
    let mut counts: FxHashMap<char, usize> = FxHashMap::default();
    for c in s.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    s.chars().find(|c| counts[c] == 1)
}

/// Render the interval between `a` and `b` in mathematical notation.
///
/// The smaller bound always comes first; `[`/`]` mark an included bound and
/// `(`/`)` an excluded one.
pub fn get_interval_string<T>(a: T, b: T, start_included: bool, end_included: bool) -> String
where
    T: PartialOrd + Display,
{
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    let open = if start_included { '[' } else { '(' };
    let close = if end_included { ']' } else { ')' };
    format!("{}{}, {}{}", open, low, high, close)
}

/// Reverse the characters of `s`.
pub fn reverse_string(s: &str) -> String {
    s.chars().rev().collect()
}

/// Closing bracket matching an opening one.
fn closer_for(c: char) -> Option<char> {
    match c {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        '<' => Some('>'),
        _ => None,
    }
}

/// True when every bracket in `s` is closed by its partner in nesting order.
///
/// Recognised pairs are `()`, `[]`, `{}` and `<>`. Any character that is not
/// an opening bracket must close the most recent open one.
pub fn is_brackets_balanced(s: &str) -> bool {
    let mut expected: Vec<char> = Vec::with_capacity(s.len());
    for c in s.chars() {
        match closer_for(c) {
            Some(closer) => expected.push(closer),
            None => {
                if expected.pop() != Some(c) {
                    return false;
                }
            }
        }
    }
    expected.is_empty()
}

/// Longest `/`-separated directory prefix shared by all `paths`.
///
/// Every common segment is followed by a slash, so paths that only share the
/// root yield `"/"` and paths with nothing in common yield `""`.
pub fn get_common_directory_path<S: AsRef<str>>(paths: &[S]) -> String {
    let Some((first, rest)) = paths.split_first() else {
        return String::new();
    };
    let others: Vec<Vec<&str>> = rest.iter().map(|p| p.as_ref().split('/').collect()).collect();

    let mut common = String::new();
    for (i, segment) in first.as_ref().split('/').enumerate() {
        if others.iter().any(|segments| segments.get(i) != Some(&segment)) {
            break;
        }
        common.push_str(segment);
        common.push('/');
    }
    common
}
