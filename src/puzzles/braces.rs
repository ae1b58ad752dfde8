//! Shell-style brace expansion.

use regex::Regex;
use rustc_hash::FxHashSet;
use std::sync::LazyLock;

/// An innermost brace group: no braces between the delimiters.
static BRACE_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^{}]*)\}").expect("brace group pattern is valid"));

/// Lazily expands brace groups; created by [`expand_braces`].
#[derive(Debug, Clone)]
pub struct BraceExpansion {
    pending: Vec<String>,
    yielded: FxHashSet<String>,
}

impl Iterator for BraceExpansion {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some(current) = self.pending.pop() {
            let Some(group) = BRACE_GROUP.captures(&current) else {
                if self.yielded.insert(current.clone()) {
                    return Some(current);
                }
                continue;
            };
            let whole = group.get(0).map_or(0..0, |m| m.range());
            let alternatives = group.get(1).map_or("", |m| m.as_str());
            for alternative in alternatives.split(',') {
                let mut expanded = current.clone();
                expanded.replace_range(whole.clone(), alternative);
                self.pending.push(expanded);
            }
        }
        None
    }
}

/// Every string produced by expanding the brace groups of `s`.
///
/// `"a{b,c}d"` expands to `abd` and `acd`; groups may nest. Each distinct
/// result is yielded once, in no particular order. Text without braces
/// yields itself.
pub fn expand_braces(s: &str) -> BraceExpansion {
    BraceExpansion {
        pending: vec![s.to_string()],
        yielded: FxHashSet::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(s: &str) -> Vec<String> {
        let mut out: Vec<String> = expand_braces(s).collect();
        out.sort();
        out
    }

    fn sorted_expected(items: &[&str]) -> Vec<String> {
        let mut out: Vec<String> = items.iter().map(|s| s.to_string()).collect();
        out.sort();
        out
    }

    #[test]
    fn test_two_groups() {
        assert_eq!(
            sorted("~/{Downloads,Pictures}/*.{jpg,gif,png}"),
            sorted_expected(&[
                "~/Downloads/*.jpg",
                "~/Downloads/*.gif",
                "~/Downloads/*.png",
                "~/Pictures/*.jpg",
                "~/Pictures/*.gif",
                "~/Pictures/*.png",
            ])
        );
    }

    #[test]
    fn test_nested_groups() {
        assert_eq!(
            sorted("It{{em,alic}iz,erat}e{d,}, please."),
            sorted_expected(&[
                "Itemized, please.",
                "Itemize, please.",
                "Italicized, please.",
                "Italicize, please.",
                "Iterated, please.",
                "Iterate, please.",
            ])
        );
        assert_eq!(
            sorted("thumbnail.{png,jp{e,}g}"),
            sorted_expected(&["thumbnail.png", "thumbnail.jpeg", "thumbnail.jpg"])
        );
    }

    #[test]
    fn test_no_braces() {
        assert_eq!(sorted("nothing to do"), sorted_expected(&["nothing to do"]));
    }

    #[test]
    fn test_duplicates_yielded_once() {
        assert_eq!(sorted("{a,a}{b,b}"), sorted_expected(&["ab"]));
    }

    #[test]
    fn test_fresh_iterator_per_call() {
        let first: Vec<String> = expand_braces("{x,y}").collect();
        let second: Vec<String> = expand_braces("{x,y}").collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }
}
