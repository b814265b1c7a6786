use crate::graph::Graph;
use crate::support::{IntSet, IntStack};

use super::{eligible, Matching};

/// Quick matchings that give the blossom algorithm a head start.
pub struct ArbitraryMatching;

impl ArbitraryMatching {
    /// Match each unmatched vertex of `subset` with the first unmatched
    /// neighbor it can. Returns the number of vertices newly matched.
    pub fn initial(g: &Graph, m: &mut Matching, subset: &IntSet) -> usize {
        let mut n_matched = 0;
        for v in subset.iter() {
            if m.matches(v) {
                continue;
            }
            let partner = g
                .edges(v)
                .iter()
                .filter_map(|e| eligible(e, v, subset))
                .find(|&w| m.unmatched(w));
            if let Some(w) = partner {
                m.match_pair(v, w);
                n_matched += 2;
            }
        }
        n_matched
    }

    /// Grow alternating chains through `subset`, starting from the vertices
    /// with a single candidate partner so chains are not cut short. Returns
    /// the number of vertices newly matched.
    pub fn dfs(g: &Graph, m: &mut Matching, subset: &IntSet) -> usize {
        let mut n_matched = 0;
        let mut deferred = IntStack::new(subset.len());

        for v in subset.iter() {
            if m.matches(v) {
                continue;
            }
            match free_degree(g, m, subset, v) {
                0 => {}
                1 => n_matched += extend(g, m, subset, v),
                _ => {
                    deferred.push(v);
                }
            }
        }
        while let Some(v) = deferred.pop() {
            if m.unmatched(v) {
                n_matched += extend(g, m, subset, v);
            }
        }
        n_matched
    }
}

fn free_neighbor(g: &Graph, m: &Matching, subset: &IntSet, v: usize) -> Option<usize> {
    g.edges(v)
        .iter()
        .filter_map(|e| eligible(e, v, subset))
        .find(|&w| m.unmatched(w))
}

fn free_degree(g: &Graph, m: &Matching, subset: &IntSet, v: usize) -> usize {
    g.edges(v)
        .iter()
        .filter_map(|e| eligible(e, v, subset))
        .filter(|&w| m.unmatched(w))
        .count()
}

/// Match `v` to a free neighbor, then continue from a free neighbor of
/// that partner, until the chain runs out.
fn extend(g: &Graph, m: &mut Matching, subset: &IntSet, v: usize) -> usize {
    let mut n_matched = 0;
    let mut current = v;
    while let Some(w) = free_neighbor(g, m, subset, current) {
        m.match_pair(current, w);
        n_matched += 2;
        match free_neighbor(g, m, subset, w) {
            Some(next) => current = next,
            None => break,
        }
    }
    n_matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smiles::parse_smiles;

    fn all(g: &Graph) -> IntSet {
        IntSet::all_of(g.order())
    }

    #[test]
    fn initial_matches_greedily() {
        let g = parse_smiles("c1ccccc1").unwrap();
        let mut m = Matching::empty(g.order());
        let n = ArbitraryMatching::initial(&g, &mut m, &all(&g));
        assert_eq!(n, 6);
        assert_eq!(m.len(), 6);
    }

    #[test]
    fn dfs_covers_naphthalene() {
        let g = parse_smiles("c1cccc2c1cccc2").unwrap();
        let mut m = Matching::empty(g.order());
        let n = ArbitraryMatching::dfs(&g, &mut m, &all(&g));
        assert_eq!(n, 10);
        assert_eq!(m.len(), 10);
    }

    #[test]
    fn dfs_prefers_dead_ends() {
        // Butadiene-like chain: starting from the middle would strand an end.
        let g = parse_smiles("cccc").unwrap();
        let subset = IntSet::of(g.order(), &[0, 1, 2, 3]);
        let mut m = Matching::empty(g.order());
        assert_eq!(ArbitraryMatching::dfs(&g, &mut m, &subset), 4);
        assert_eq!(m.other(0), Some(1));
        assert_eq!(m.other(3), Some(2));
    }

    #[test]
    fn single_bonds_are_skipped() {
        let g = parse_smiles("c1ccccc1-c1ccccc1").unwrap();
        let mut m = Matching::empty(g.order());
        ArbitraryMatching::initial(&g, &mut m, &all(&g));
        assert_ne!(m.other(5), Some(6));
        assert_ne!(m.other(6), Some(5));
    }
}
