//! Domino chains.
//!
//! A row of dominoes is a walk through a graph whose vertices are pip values
//! and whose edges are tiles, using every edge exactly once. Such a walk
//! exists exactly when the tiles form one connected component and at most
//! two pip values appear an odd number of times (Euler's criterion).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A domino tile. Either face may be played first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Domino(pub u8, pub u8);

impl From<[u8; 2]> for Domino {
    fn from([a, b]: [u8; 2]) -> Self {
        Domino(a, b)
    }
}

/// Minimal union-find over pip values.
#[derive(Default)]
struct Components {
    parent: FxHashMap<u8, u8>,
}

impl Components {
    fn find(&mut self, pip: u8) -> u8 {
        let parent = *self.parent.entry(pip).or_insert(pip);
        if parent == pip {
            return pip;
        }
        let root = self.find(parent);
        self.parent.insert(pip, root);
        root
    }

    fn union(&mut self, a: u8, b: u8) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra != rb {
            self.parent.insert(ra, rb);
        }
    }
}

/// True when all `dominoes` can be laid in a single row with touching faces
/// equal. The input is only read.
pub fn can_dominoes_make_row(dominoes: &[Domino]) -> bool {
    let mut degree: FxHashMap<u8, usize> = FxHashMap::default();
    let mut components = Components::default();
    for &Domino(a, b) in dominoes {
        *degree.entry(a).or_insert(0) += 1;
        *degree.entry(b).or_insert(0) += 1;
        components.union(a, b);
    }

    let odd = degree.values().filter(|&&d| d % 2 == 1).count();
    if odd > 2 {
        return false;
    }

    let pips: Vec<u8> = degree.keys().copied().collect();
    let mut roots = pips.iter().map(|&pip| components.find(pip));
    match roots.next() {
        Some(first) => roots.all(|root| root == first),
        None => true,
    }
}
