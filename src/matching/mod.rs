//! Matchings over a subset of a [`Graph`](crate::Graph)'s vertices.
//!
//! A perfect matching over the atoms of a delocalized system that still need
//! a double bond is exactly a Kekulé assignment for that system. The engine
//! is split the usual way: a cheap feasibility check
//! ([`ElectronAssignment`]), greedy seeds ([`ArbitraryMatching`]) and
//! Edmonds' blossom algorithm to finish the job ([`MaximumMatching`]).
//!
//! Edges labelled [`Bond::Single`](crate::Bond::Single), `/` or `\` are
//! fixed single bonds and never matched.

mod arbitrary;
mod electron_assignment;
mod maximum;

pub use arbitrary::ArbitraryMatching;
pub use electron_assignment::ElectronAssignment;
pub use maximum::MaximumMatching;

use crate::bond::Bond;
use crate::edge::Edge;
use crate::support::{IntSet, Tuple};

/// A set of vertex pairs in which no vertex appears twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matching {
    partner: Vec<Option<usize>>,
}

impl Matching {
    /// Nothing matched over vertices `0..n`.
    pub fn empty(n: usize) -> Self {
        Self {
            partner: vec![None; n],
        }
    }

    pub fn matches(&self, v: usize) -> bool {
        self.partner[v].is_some()
    }

    pub fn unmatched(&self, v: usize) -> bool {
        self.partner[v].is_none()
    }

    /// Partner of `v`, if matched.
    pub fn other(&self, v: usize) -> Option<usize> {
        self.partner[v]
    }

    /// Match `u` with `v`, breaking any pairs either was previously in.
    pub fn match_pair(&mut self, u: usize, v: usize) {
        for x in [u, v] {
            if let Some(old) = self.partner[x].take() {
                self.partner[old] = None;
            }
        }
        self.partner[u] = Some(v);
        self.partner[v] = Some(u);
    }

    pub fn unmatch(&mut self, v: usize) {
        if let Some(w) = self.partner[v].take() {
            self.partner[w] = None;
        }
    }

    /// Every pair once, lower vertex first.
    pub fn pairs(&self) -> impl Iterator<Item = Tuple> + '_ {
        self.partner
            .iter()
            .enumerate()
            .filter_map(|(v, w)| w.filter(|&w| v < w).map(|w| Tuple::of(v, w)))
    }

    /// Number of matched vertices.
    pub fn len(&self) -> usize {
        self.partner.iter().filter(|w| w.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Whether `e` may be matched from `v` to a vertex of `subset`; returns the
/// other endpoint when it may.
fn eligible(e: &Edge, v: usize, subset: &IntSet) -> Option<usize> {
    if matches!(e.bond(), Bond::Single | Bond::Up | Bond::Down) {
        return None;
    }
    let w = e.other(v);
    subset.contains(w).then_some(w)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_are_symmetric() {
        let mut m = Matching::empty(4);
        m.match_pair(0, 3);
        assert_eq!(m.other(3), Some(0));
        assert!(m.unmatched(1));
        m.match_pair(1, 3);
        assert!(m.unmatched(0));
        assert_eq!(m.other(1), Some(3));
        assert_eq!(m.pairs().collect::<Vec<_>>(), vec![Tuple::of(1, 3)]);
        assert_eq!(m.len(), 2);
        m.unmatch(3);
        assert!(m.is_empty());
    }

    #[test]
    fn fixed_single_bonds_are_not_eligible() {
        let subset = IntSet::all_of(2);
        for bond in [Bond::Single, Bond::Up, Bond::Down] {
            assert_eq!(eligible(&Edge::new(0, 1, bond), 0, &subset), None, "{bond:?}");
        }
        for bond in [Bond::ImplicitAromatic, Bond::Aromatic, Bond::Implicit] {
            assert_eq!(eligible(&Edge::new(0, 1, bond), 0, &subset), Some(1), "{bond:?}");
        }
        assert_eq!(
            eligible(&Edge::new(0, 1, Bond::Aromatic), 0, &IntSet::of(2, &[0])),
            None
        );
    }
}
