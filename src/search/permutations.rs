//! Permutations by Heap's algorithm.

/// Lazily yields permutations; created by [`get_permutations`].
///
/// This is the iterative form of Heap's algorithm: every permutation after
/// the first differs from the previous one by a single swap.
#[derive(Debug, Clone)]
pub struct Permutations {
    items: Vec<char>,
    counters: Vec<usize>,
    index: usize,
    started: bool,
}

impl Permutations {
    fn current(&self) -> String {
        self.items.iter().collect()
    }
}

impl Iterator for Permutations {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if !self.started {
            self.started = true;
            return Some(self.current());
        }
        while self.index < self.items.len() {
            let i = self.index;
            if self.counters[i] < i {
                let j = if i % 2 == 0 { 0 } else { self.counters[i] };
                self.items.swap(j, i);
                self.counters[i] += 1;
                self.index = 1;
                return Some(self.current());
            }
            self.counters[i] = 0;
            self.index += 1;
        }
        None
    }
}

/// All permutations of the characters of `chars`.
///
/// Characters are assumed distinct; repeated characters produce repeated
/// permutations. The order is the one Heap's algorithm generates, not
/// lexicographic. An empty string has exactly one (empty) permutation.
pub fn get_permutations(chars: &str) -> Permutations {
    let items: Vec<char> = chars.chars().collect();
    Permutations {
        counters: vec![0; items.len()],
        items,
        index: 1,
        started: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    fn sorted(chars: &str) -> Vec<String> {
        let mut out: Vec<String> = get_permutations(chars).collect();
        out.sort();
        out
    }

    #[test]
    fn test_small_sets() {
        assert_eq!(sorted("ab"), vec!["ab", "ba"]);
        assert_eq!(sorted("abc"), vec!["abc", "acb", "bac", "bca", "cab", "cba"]);
        assert_eq!(sorted("a"), vec!["a"]);
        assert_eq!(sorted(""), vec![""]);
    }

    #[test]
    fn test_heap_order() {
        let order: Vec<String> = get_permutations("abc").collect();
        assert_eq!(order, vec!["abc", "bac", "cab", "acb", "bca", "cba"]);
    }

    #[test]
    fn test_count_and_uniqueness() {
        let perms: Vec<String> = get_permutations("abcdef").collect();
        assert_eq!(perms.len(), 720);
        let unique: FxHashSet<&String> = perms.iter().collect();
        assert_eq!(unique.len(), 720);
    }

    #[test]
    fn test_lazy_take() {
        let first_two: Vec<String> = get_permutations("abcdefghij").take(2).collect();
        assert_eq!(first_two, vec!["abcdefghij", "bacdefghij"]);
    }
}
